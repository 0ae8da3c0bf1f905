// ==========================================
// 大气排放申报系统 - 领域类型定义
// ==========================================
// 依据: RENE 第二部分 - 大气排放申报口径
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 逻辑工作表 (Sheet Kind)
// ==========================================
// 红线: 按逻辑类别定位,不依赖工作簿中的字面表名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SheetKind {
    FixedSources,      // 固定源(锅炉、熔炉、发电机等)
    MobileSources,     // 移动源(车辆、移动设备)
    FugitiveEmissions, // 逸散排放(阀门泄漏、制冷剂损耗等)
}

impl SheetKind {
    /// 全部逻辑工作表(定位顺序即申报顺序)
    pub const ALL: [SheetKind; 3] = [
        SheetKind::FixedSources,
        SheetKind::MobileSources,
        SheetKind::FugitiveEmissions,
    ];

    /// 逻辑表名(用于定位与错误消息,消费端按此文案展示)
    pub fn label(&self) -> &'static str {
        match self {
            SheetKind::FixedSources => "Fixed Sources",
            SheetKind::MobileSources => "Mobile Sources",
            SheetKind::FugitiveEmissions => "Fugitive Emissions",
        }
    }
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 单元格值 (Cell Value)
// ==========================================
// 红线: 标签联合替代动态类型单元格,类型转换穷尽匹配
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,          // 空单元格
    Number(f64),    // 数值单元格
    Text(String),   // 文本单元格
}

impl CellValue {
    /// 是否为空(空单元格或纯空白文本)
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }
}

// ==========================================
// 封闭取值集 (Closed Value Sets)
// ==========================================
// 口径: 枚举外的非空值保留原文并标记无效,空值静默回退 "Other"

/// 固定源设备类型封闭集
pub const EQUIPMENT_TYPES: [&str; 6] = [
    "Boiler",
    "Furnace",
    "Generator",
    "Incinerator",
    "Heater",
    "Other",
];

/// 逸散排放源封闭集
pub const FUGITIVE_SOURCES: [&str; 5] = ["Valves", "Tanks", "Refrigeration", "Pipes", "Other"];

/// 设备类型是否属于封闭集(精确匹配,区分大小写)
pub fn is_known_equipment_type(value: &str) -> bool {
    EQUIPMENT_TYPES.contains(&value)
}

/// 逸散源是否属于封闭集(精确匹配,区分大小写)
pub fn is_known_fugitive_source(value: &str) -> bool {
    FUGITIVE_SOURCES.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_kind_labels() {
        assert_eq!(SheetKind::FixedSources.label(), "Fixed Sources");
        assert_eq!(SheetKind::MobileSources.label(), "Mobile Sources");
        assert_eq!(SheetKind::FugitiveEmissions.label(), "Fugitive Emissions");
    }

    #[test]
    fn test_cell_value_is_blank() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::Text("   ".to_string()).is_blank());
        assert!(!CellValue::Text("Boiler".to_string()).is_blank());
        // 数值 0 不是空单元格
        assert!(!CellValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_closed_sets_case_sensitive() {
        assert!(is_known_equipment_type("Boiler"));
        assert!(!is_known_equipment_type("boiler"));
        assert!(!is_known_equipment_type("Kiln"));
        assert!(is_known_fugitive_source("Valves"));
        assert!(!is_known_fugitive_source("valves"));
    }
}
