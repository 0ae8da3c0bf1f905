// ==========================================
// 大气排放申报系统 - 单元格类型转换
// ==========================================
// 职责: 原始单元格 → 类型化值;"不可解析"以 None 显式表达
// 红线: 任何单元格异常都不得抛出失败
// ==========================================

use crate::domain::CellValue;

/// 数值转换
///
/// 空单元格 → None(不是 0);数值单元格原样返回;
/// 文本去千分位逗号后整串解析为浮点数,失败 → None。
/// 整串口径: 带尾缀的文本(如 "12 L"、"12abc")视为不可解析,
/// 不做前缀截断取 12。
/// None 由调用方映射为"字段标记 + 默认 0",从不缺省整行。
pub fn coerce_number(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Empty => None,
        CellValue::Number(n) => Some(*n),
        CellValue::Text(s) => {
            let cleaned = s.replace(',', "");
            let trimmed = cleaned.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()
        }
    }
}

/// 文本转换
///
/// 字符串化并去首尾空白;空单元格 → 空串,从不"不可解析"。
pub fn coerce_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Empty => String::new(),
        CellValue::Text(s) => s.trim().to_string(),
        CellValue::Number(n) => format_number(*n),
    }
}

/// 数值的文本形态(整数值不带小数部分,与表格展示一致)
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_coerce_number_empty_is_unparseable() {
        assert_eq!(coerce_number(&CellValue::Empty), None);
        assert_eq!(coerce_number(&text("")), None);
        assert_eq!(coerce_number(&text("   ")), None);
    }

    #[test]
    fn test_coerce_number_numeric_passthrough() {
        assert_eq!(coerce_number(&CellValue::Number(28.35)), Some(28.35));
        assert_eq!(coerce_number(&CellValue::Number(0.0)), Some(0.0));
    }

    #[test]
    fn test_coerce_number_strips_thousands_separators() {
        assert_eq!(coerce_number(&text("15,000")), Some(15000.0));
        assert_eq!(coerce_number(&text("1,250,000.5")), Some(1250000.5));
        assert_eq!(coerce_number(&text(" 45000 ")), Some(45000.0));
    }

    #[test]
    fn test_coerce_number_rejects_non_numeric() {
        assert_eq!(coerce_number(&text("N/A")), None);
        assert_eq!(coerce_number(&text("true")), None);
    }

    #[test]
    fn test_coerce_number_no_prefix_parse_for_trailing_text() {
        // 整串口径: 不截取 "12" 前缀
        assert_eq!(coerce_number(&text("12abc")), None);
        assert_eq!(coerce_number(&text("12 L")), None);
    }

    #[test]
    fn test_coerce_text_trims() {
        assert_eq!(coerce_text(&text("  Gas Natural  ")), "Gas Natural");
        assert_eq!(coerce_text(&CellValue::Empty), "");
    }

    #[test]
    fn test_coerce_text_formats_numbers() {
        assert_eq!(coerce_text(&CellValue::Number(3.0)), "3");
        assert_eq!(coerce_text(&CellValue::Number(2.5)), "2.5");
    }
}
