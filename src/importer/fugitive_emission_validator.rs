// ==========================================
// 大气排放申报系统 - 逸散排放校验器
// ==========================================
// 职责: Fugitive Emissions 网格 → FugitiveEmissionRecord 列表 + 错误文案
// 口径: source 同固定源设备类型的非对称回退规则
// ==========================================

use crate::domain::{is_known_fugitive_source, FugitiveEmissionRecord, SheetKind};
use crate::importer::coerce::{coerce_number, coerce_text};
use crate::importer::column_map::{ColumnMap, FUGITIVE_EMISSION_KEYS};
use crate::importer::sheet_validator::{empty_sheet_error, row_error, SheetOutcome, SheetValidator};
use crate::importer::workbook::Sheet;
use uuid::Uuid;

pub struct FugitiveEmissionValidator;

impl SheetValidator for FugitiveEmissionValidator {
    type Record = FugitiveEmissionRecord;

    fn validate(&self, sheet: &Sheet) -> SheetOutcome<FugitiveEmissionRecord> {
        let mut outcome = SheetOutcome::empty();

        if sheet.rows.len() < 2 {
            outcome
                .errors
                .push(empty_sheet_error(SheetKind::FugitiveEmissions));
            return outcome;
        }

        let columns = ColumnMap::from_header_row(&sheet.rows[0], &FUGITIVE_EMISSION_KEYS);

        for (row_idx, row) in sheet.rows.iter().enumerate().skip(1) {
            if row.iter().all(|cell| cell.is_blank()) {
                continue;
            }

            let mut error_fields: Vec<String> = Vec::new();

            let gas_type = coerce_text(columns.cell(row, "gastype"));
            let source = coerce_text(columns.cell(row, "source"));
            let estimated_quantity = coerce_number(columns.cell(row, "estimatedquantity"));
            let methodology = coerce_text(columns.cell(row, "methodology"));

            if !source.is_empty() && !is_known_fugitive_source(&source) {
                error_fields.push("source".to_string());
            }
            if estimated_quantity.is_none() {
                error_fields.push("estimatedQuantity".to_string());
            }

            if !error_fields.is_empty() {
                outcome.errors.push(row_error(
                    SheetKind::FugitiveEmissions,
                    row_idx + 1,
                    &error_fields,
                ));
            }

            let has_error = !error_fields.is_empty();
            outcome.records.push(FugitiveEmissionRecord {
                id: Uuid::new_v4(),
                gas_type,
                source: if source.is_empty() {
                    "Other".to_string()
                } else {
                    source
                },
                estimated_quantity: estimated_quantity.unwrap_or(0.0),
                methodology,
                has_error,
                error_fields,
            });
        }

        outcome
    }
}
