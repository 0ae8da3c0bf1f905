// ==========================================
// 大气排放申报系统 - 工作表校验公共件
// ==========================================
// 职责: 定义三类记录校验器的统一接口与共享文案/行遍历规则
// 红线: 校验器内不得抛出失败,单元格异常一律转为字段标记
// ==========================================

use crate::domain::SheetKind;
use crate::importer::workbook::Sheet;

// ==========================================
// SheetOutcome - 单表校验产物
// ==========================================
#[derive(Debug, Clone)]
pub struct SheetOutcome<R> {
    pub records: Vec<R>,
    pub errors: Vec<String>,
}

impl<R> SheetOutcome<R> {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            errors: Vec::new(),
        }
    }
}

// ==========================================
// SheetValidator Trait
// ==========================================
// 用途: 单张逻辑表网格 → 记录列表 + 错误文案列表
// 实现者: FixedSourceValidator / MobileSourceValidator / FugitiveEmissionValidator
pub trait SheetValidator: Send + Sync {
    type Record;

    /// 校验一张已定位的工作表
    ///
    /// # 口径
    /// - 不足 2 行(仅表头或更少)→ 零记录 + 一条表级错误
    /// - 全空行跳过,不产生记录也不产生错误
    /// - 字段级异常计入 error_fields 并代入默认值,整行保留
    fn validate(&self, sheet: &Sheet) -> SheetOutcome<Self::Record>;
}

// ==========================================
// 共享文案
// ==========================================
// 红线: 错误文案为对外格式,消费端原样展示,不得改写

/// 表级空表错误
pub(crate) fn empty_sheet_error(kind: SheetKind) -> String {
    format!("{} sheet is empty or has no data rows", kind.label())
}

/// 行级错误(row_number 为 1 基网格行号,表头占第 1 行)
pub(crate) fn row_error(kind: SheetKind, row_number: usize, fields: &[String]) -> String {
    format!(
        "{} row {}: Invalid values in {}",
        kind.label(),
        row_number,
        fields.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sheet_error_wording() {
        assert_eq!(
            empty_sheet_error(SheetKind::FixedSources),
            "Fixed Sources sheet is empty or has no data rows"
        );
    }

    #[test]
    fn test_row_error_wording() {
        let fields = vec!["equipmentType".to_string(), "co2Emissions".to_string()];
        assert_eq!(
            row_error(SheetKind::FixedSources, 2, &fields),
            "Fixed Sources row 2: Invalid values in equipmentType, co2Emissions"
        );
    }
}
