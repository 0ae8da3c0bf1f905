// ==========================================
// 大气排放申报系统 - 移动源校验器
// ==========================================
// 职责: Mobile Sources 网格 → MobileSourceRecord 列表 + 错误文案
// 口径: vehicle_type 无封闭集约束,仅数值字段参与校验
// ==========================================

use crate::domain::{MobileSourceRecord, SheetKind};
use crate::importer::coerce::{coerce_number, coerce_text};
use crate::importer::column_map::{ColumnMap, MOBILE_SOURCE_KEYS};
use crate::importer::sheet_validator::{empty_sheet_error, row_error, SheetOutcome, SheetValidator};
use crate::importer::workbook::Sheet;
use uuid::Uuid;

pub struct MobileSourceValidator;

impl SheetValidator for MobileSourceValidator {
    type Record = MobileSourceRecord;

    fn validate(&self, sheet: &Sheet) -> SheetOutcome<MobileSourceRecord> {
        let mut outcome = SheetOutcome::empty();

        if sheet.rows.len() < 2 {
            outcome.errors.push(empty_sheet_error(SheetKind::MobileSources));
            return outcome;
        }

        let columns = ColumnMap::from_header_row(&sheet.rows[0], &MOBILE_SOURCE_KEYS);

        for (row_idx, row) in sheet.rows.iter().enumerate().skip(1) {
            if row.iter().all(|cell| cell.is_blank()) {
                continue;
            }

            let mut error_fields: Vec<String> = Vec::new();

            let vehicle_type = coerce_text(columns.cell(row, "vehicletype"));
            let fuel = coerce_text(columns.cell(row, "fuel"));
            let annual_consumption = coerce_number(columns.cell(row, "annualconsumption"));
            let calculation_method = coerce_text(columns.cell(row, "calculationmethod"));
            let ghg_emissions = coerce_number(columns.cell(row, "ghgemissions"));

            if annual_consumption.is_none() {
                error_fields.push("annualConsumption".to_string());
            }
            if ghg_emissions.is_none() {
                error_fields.push("ghgEmissions".to_string());
            }

            if !error_fields.is_empty() {
                outcome
                    .errors
                    .push(row_error(SheetKind::MobileSources, row_idx + 1, &error_fields));
            }

            let has_error = !error_fields.is_empty();
            outcome.records.push(MobileSourceRecord {
                id: Uuid::new_v4(),
                vehicle_type,
                fuel,
                annual_consumption: annual_consumption.unwrap_or(0.0),
                calculation_method,
                ghg_emissions: ghg_emissions.unwrap_or(0.0),
                has_error,
                error_fields,
            });
        }

        outcome
    }
}
