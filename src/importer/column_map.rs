// ==========================================
// 大气排放申报系统 - 列名归一与列映射
// ==========================================
// 职责: 任意表头文案 → 规范键;表头行 → 规范键到列下标的映射
// 口径: 仅作查找键使用,不用于展示
// ==========================================

use crate::domain::CellValue;
use crate::importer::coerce::coerce_text;
use std::collections::HashMap;

// ==========================================
// 各逻辑表的规范列键
// ==========================================
// 顺序即申报模板列序;键为 normalize_column_name 的输出

/// 固定源表规范列键
pub const FIXED_SOURCE_KEYS: [&str; 8] = [
    "equipmenttype",
    "fuel",
    "annualconsumption",
    "operatinghours",
    "estimationmethod",
    "co2emissions",
    "ch4emissions",
    "n2oemissions",
];

/// 移动源表规范列键
pub const MOBILE_SOURCE_KEYS: [&str; 5] = [
    "vehicletype",
    "fuel",
    "annualconsumption",
    "calculationmethod",
    "ghgemissions",
];

/// 逸散排放表规范列键
pub const FUGITIVE_EMISSION_KEYS: [&str; 4] =
    ["gastype", "source", "estimatedquantity", "methodology"];

/// 表头文案归一为规范键
///
/// 规则: 小写化;剔除空白、连字符、下划线;
/// 下标 ₂/₄ 映射为 ASCII 2/4(申报模板中 CO₂/CH₄/N₂O 列名)。
/// 其余变音符号不做归一。幂等。
pub fn normalize_column_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(|c| c.to_lowercase())
        .map(|c| match c {
            '₂' => '2',
            '₄' => '4',
            other => other,
        })
        .collect()
}

// ==========================================
// ColumnMap - 规范键 → 列下标
// ==========================================
// 匹配规则: 表头归一后等于规范键,或包含规范键;首个命中列生效。
// 缺列不报错:对应字段按空单元格进入字段校验。
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    indexes: HashMap<String, usize>,
}

impl ColumnMap {
    /// 从表头行构建列映射
    pub fn from_header_row(header_row: &[CellValue], expected_keys: &[&str]) -> Self {
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| normalize_column_name(&coerce_text(cell)))
            .collect();

        let mut indexes = HashMap::new();
        for key in expected_keys {
            if let Some(idx) = headers.iter().position(|h| h == key || h.contains(key)) {
                indexes.insert((*key).to_string(), idx);
            }
        }
        Self { indexes }
    }

    /// 按规范键取该行对应单元格;缺列或行短于列下标时返回空单元格
    pub fn cell<'a>(&self, row: &'a [CellValue], key: &str) -> &'a CellValue {
        self.indexes
            .get(key)
            .and_then(|idx| row.get(*idx))
            .unwrap_or(&CellValue::Empty)
    }

    #[cfg(test)]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.indexes.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_normalize_strips_separators_and_case() {
        assert_eq!(normalize_column_name("Equipment Type"), "equipmenttype");
        assert_eq!(normalize_column_name("annual_consumption"), "annualconsumption");
        assert_eq!(normalize_column_name("Operating-Hours"), "operatinghours");
        assert_eq!(normalize_column_name("  GHG  Emissions  "), "ghgemissions");
    }

    #[test]
    fn test_normalize_subscript_digits() {
        assert_eq!(normalize_column_name("CO₂ Emissions"), "co2emissions");
        assert_eq!(normalize_column_name("CH₄ Emissions"), "ch4emissions");
        assert_eq!(normalize_column_name("N₂O Emissions"), "n2oemissions");
    }

    #[test]
    fn test_normalize_keeps_other_diacritics() {
        // 已知限制: 仅处理 ₂/₄,其他变音符号原样保留
        assert_eq!(normalize_column_name("Año"), "año");
    }

    #[test]
    fn test_normalize_idempotent() {
        for name in ["CO₂ Emissions", "Equipment Type", "Año", "ghg_emissions"] {
            let once = normalize_column_name(name);
            assert_eq!(normalize_column_name(&once), once);
        }
    }

    #[test]
    fn test_column_map_equals_or_contains() {
        let header = vec![
            text("Equipment Type"),
            text("Fuel Used"),
            text("Annual Consumption (L)"),
        ];
        let map = ColumnMap::from_header_row(&header, &FIXED_SOURCE_KEYS);
        assert_eq!(map.index_of("equipmenttype"), Some(0));
        // "fuelused" 包含 "fuel"
        assert_eq!(map.index_of("fuel"), Some(1));
        // "annualconsumption(l)" 包含 "annualconsumption"
        assert_eq!(map.index_of("annualconsumption"), Some(2));
        assert_eq!(map.index_of("operatinghours"), None);
    }

    #[test]
    fn test_column_map_missing_column_yields_empty_cell() {
        let header = vec![text("Fuel")];
        let map = ColumnMap::from_header_row(&header, &FIXED_SOURCE_KEYS);
        let row = vec![text("Diesel")];
        assert_eq!(map.cell(&row, "fuel"), &text("Diesel"));
        assert_eq!(map.cell(&row, "co2emissions"), &CellValue::Empty);
    }

    #[test]
    fn test_column_map_short_row() {
        let header = vec![text("Gas Type"), text("Source")];
        let map = ColumnMap::from_header_row(&header, &FUGITIVE_EMISSION_KEYS);
        // 行短于表头:缺失单元格按空处理
        let row = vec![text("R-134a")];
        assert_eq!(map.cell(&row, "source"), &CellValue::Empty);
    }
}
