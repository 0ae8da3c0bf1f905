// ==========================================
// 大气排放申报系统 - 汇总统计
// ==========================================
// 职责: 数据集 → 驾驶舱/报告所需的聚合口径
// 口径: 固定源 CO₂/CH₄/N₂O、移动源 GHG、逸散估算量逐类求和;
//       燃料分布覆盖固定源+移动源的年消耗量
// ==========================================

use crate::domain::AtmosphericEmissionsDataset;
use serde::{Deserialize, Serialize};

// ==========================================
// FuelConsumption - 单一燃料的消耗聚合
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelConsumption {
    pub fuel: String,
    pub annual_consumption: f64,
}

// ==========================================
// EmissionsSummary - 申报数据集汇总
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionsSummary {
    // ===== 记录数 =====
    pub fixed_source_count: usize,
    pub mobile_source_count: usize,
    pub fugitive_emission_count: usize,

    // ===== 排放总量 =====
    pub fixed_co2_total: f64,      // 固定源 CO₂ 合计(吨)
    pub fixed_ch4_total: f64,      // 固定源 CH₄ 合计(吨)
    pub fixed_n2o_total: f64,      // 固定源 N₂O 合计(吨)
    pub mobile_ghg_total: f64,     // 移动源 GHG 合计(吨 CO₂e)
    pub fugitive_quantity_total: f64, // 逸散估算量合计(吨)

    // ===== 数据质量 =====
    pub has_errors: bool, // 任一记录带错时,消费端应阻断提交

    // ===== 燃料分布(固定源+移动源年消耗量,首次出现顺序) =====
    pub fuel_breakdown: Vec<FuelConsumption>,
}

impl EmissionsSummary {
    /// 从数据集计算汇总
    pub fn from_dataset(dataset: &AtmosphericEmissionsDataset) -> Self {
        let mut fuel_breakdown: Vec<FuelConsumption> = Vec::new();
        let mut add_fuel = |fuel: &str, consumption: f64| {
            if fuel.is_empty() {
                return;
            }
            match fuel_breakdown.iter_mut().find(|f| f.fuel == fuel) {
                Some(entry) => entry.annual_consumption += consumption,
                None => fuel_breakdown.push(FuelConsumption {
                    fuel: fuel.to_string(),
                    annual_consumption: consumption,
                }),
            }
        };

        for record in &dataset.fixed_sources {
            add_fuel(&record.fuel, record.annual_consumption);
        }
        for record in &dataset.mobile_sources {
            add_fuel(&record.fuel, record.annual_consumption);
        }

        Self {
            fixed_source_count: dataset.fixed_sources.len(),
            mobile_source_count: dataset.mobile_sources.len(),
            fugitive_emission_count: dataset.fugitive_emissions.len(),
            fixed_co2_total: dataset.fixed_sources.iter().map(|r| r.co2_emissions).sum(),
            fixed_ch4_total: dataset.fixed_sources.iter().map(|r| r.ch4_emissions).sum(),
            fixed_n2o_total: dataset.fixed_sources.iter().map(|r| r.n2o_emissions).sum(),
            mobile_ghg_total: dataset.mobile_sources.iter().map(|r| r.ghg_emissions).sum(),
            fugitive_quantity_total: dataset
                .fugitive_emissions
                .iter()
                .map(|r| r.estimated_quantity)
                .sum(),
            has_errors: dataset.has_errors(),
            fuel_breakdown,
        }
    }
}
