// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的内存工作簿/数据集构造
// ==========================================

#![allow(dead_code)]

use atmospheric_emissions::domain::CellValue;
use atmospheric_emissions::importer::{Sheet, Workbook};

/// 文本单元格
pub fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

/// 数值单元格
pub fn num(n: f64) -> CellValue {
    CellValue::Number(n)
}

/// 空单元格
pub fn empty() -> CellValue {
    CellValue::Empty
}

/// 由单元格网格构造工作表
pub fn sheet(name: &str, rows: Vec<Vec<CellValue>>) -> Sheet {
    Sheet {
        name: name.to_string(),
        rows,
    }
}

/// 固定源表头(模板原始列名,含下标字符)
pub fn fixed_source_header() -> Vec<CellValue> {
    vec![
        text("Equipment Type"),
        text("Fuel"),
        text("Annual Consumption"),
        text("Operating Hours"),
        text("Estimation Method"),
        text("CO₂ Emissions"),
        text("CH₄ Emissions"),
        text("N₂O Emissions"),
    ]
}

/// 移动源表头
pub fn mobile_source_header() -> Vec<CellValue> {
    vec![
        text("Vehicle Type"),
        text("Fuel"),
        text("Annual Consumption"),
        text("Calculation Method"),
        text("GHG Emissions"),
    ]
}

/// 逸散排放表头
pub fn fugitive_emission_header() -> Vec<CellValue> {
    vec![
        text("Gas Type"),
        text("Source"),
        text("Estimated Quantity"),
        text("Methodology"),
    ]
}

/// 一行完整合法的固定源数据
pub fn valid_fixed_row() -> Vec<CellValue> {
    vec![
        text("Boiler"),
        text("Natural Gas"),
        num(12500.0),
        num(6800.0),
        text("Emission factor"),
        num(28.35),
        num(0.054),
        num(0.021),
    ]
}

/// 一行完整合法的移动源数据
pub fn valid_mobile_row() -> Vec<CellValue> {
    vec![
        text("Truck"),
        text("Diesel"),
        num(3200.0),
        text("Fuel-based"),
        num(8.61),
    ]
}

/// 一行完整合法的逸散排放数据
pub fn valid_fugitive_row() -> Vec<CellValue> {
    vec![
        text("R-410A"),
        text("Refrigeration"),
        num(0.45),
        text("Mass balance"),
    ]
}

/// 含三张必需表且各有一行合法数据的工作簿
pub fn complete_workbook() -> Workbook {
    Workbook {
        sheets: vec![
            sheet(
                "Fixed Sources",
                vec![fixed_source_header(), valid_fixed_row()],
            ),
            sheet(
                "Mobile Sources",
                vec![mobile_source_header(), valid_mobile_row()],
            ),
            sheet(
                "Fugitive Emissions",
                vec![fugitive_emission_header(), valid_fugitive_row()],
            ),
        ],
    }
}
