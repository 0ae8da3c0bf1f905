// ==========================================
// 大气排放申报系统 - 固定源校验器
// ==========================================
// 职责: Fixed Sources 网格 → FixedSourceRecord 列表 + 错误文案
// 口径: 设备类型非空且不在封闭集 → 标记但保留原文;
//       空设备类型静默回退 "Other" 且不标记(既有口径)
// ==========================================

use crate::domain::{is_known_equipment_type, FixedSourceRecord, SheetKind};
use crate::importer::coerce::{coerce_number, coerce_text};
use crate::importer::column_map::{ColumnMap, FIXED_SOURCE_KEYS};
use crate::importer::sheet_validator::{empty_sheet_error, row_error, SheetOutcome, SheetValidator};
use crate::importer::workbook::Sheet;
use uuid::Uuid;

pub struct FixedSourceValidator;

impl SheetValidator for FixedSourceValidator {
    type Record = FixedSourceRecord;

    fn validate(&self, sheet: &Sheet) -> SheetOutcome<FixedSourceRecord> {
        let mut outcome = SheetOutcome::empty();

        if sheet.rows.len() < 2 {
            outcome.errors.push(empty_sheet_error(SheetKind::FixedSources));
            return outcome;
        }

        let columns = ColumnMap::from_header_row(&sheet.rows[0], &FIXED_SOURCE_KEYS);

        for (row_idx, row) in sheet.rows.iter().enumerate().skip(1) {
            // 全空行跳过:无记录,无错误
            if row.iter().all(|cell| cell.is_blank()) {
                continue;
            }

            let mut error_fields: Vec<String> = Vec::new();

            let equipment_type = coerce_text(columns.cell(row, "equipmenttype"));
            let fuel = coerce_text(columns.cell(row, "fuel"));
            let annual_consumption = coerce_number(columns.cell(row, "annualconsumption"));
            let operating_hours = coerce_number(columns.cell(row, "operatinghours"));
            let estimation_method = coerce_text(columns.cell(row, "estimationmethod"));
            let co2_emissions = coerce_number(columns.cell(row, "co2emissions"));
            let ch4_emissions = coerce_number(columns.cell(row, "ch4emissions"));
            let n2o_emissions = coerce_number(columns.cell(row, "n2oemissions"));

            // ===== 字段级域校验 =====
            if !equipment_type.is_empty() && !is_known_equipment_type(&equipment_type) {
                error_fields.push("equipmentType".to_string());
            }
            if annual_consumption.is_none() {
                error_fields.push("annualConsumption".to_string());
            }
            if operating_hours.is_none() {
                error_fields.push("operatingHours".to_string());
            }
            if co2_emissions.is_none() {
                error_fields.push("co2Emissions".to_string());
            }
            if ch4_emissions.is_none() {
                error_fields.push("ch4Emissions".to_string());
            }
            if n2o_emissions.is_none() {
                error_fields.push("n2oEmissions".to_string());
            }

            if !error_fields.is_empty() {
                outcome
                    .errors
                    .push(row_error(SheetKind::FixedSources, row_idx + 1, &error_fields));
            }

            let has_error = !error_fields.is_empty();
            outcome.records.push(FixedSourceRecord {
                id: Uuid::new_v4(),
                equipment_type: if equipment_type.is_empty() {
                    "Other".to_string()
                } else {
                    equipment_type
                },
                fuel,
                annual_consumption: annual_consumption.unwrap_or(0.0),
                operating_hours: operating_hours.unwrap_or(0.0),
                estimation_method,
                co2_emissions: co2_emissions.unwrap_or(0.0),
                ch4_emissions: ch4_emissions.unwrap_or(0.0),
                n2o_emissions: n2o_emissions.unwrap_or(0.0),
                has_error,
                error_fields,
            });
        }

        outcome
    }
}
