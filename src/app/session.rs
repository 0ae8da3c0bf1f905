// ==========================================
// 大气排放申报系统 - 会话状态
// ==========================================
// 职责: 持有本次会话的内存数据集,承接展示层的编辑/删除
// 红线: 非进程级单例,初始状态由调用方显式提供;
//       编辑走字段级重校验,禁止乐观清除错误标记
//       (防止 has_error 与 error_fields 漂移)
// ==========================================

use crate::domain::{
    is_known_equipment_type, is_known_fugitive_source, AtmosphericEmissionsDataset,
};
use crate::report::EmissionsSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// 更新补丁 - 展示层的部分字段编辑
// ==========================================
// 字段为 None 表示未触碰;触碰字段写入后做字段级重校验

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedSourceUpdate {
    pub equipment_type: Option<String>,
    pub fuel: Option<String>,
    pub annual_consumption: Option<f64>,
    pub operating_hours: Option<f64>,
    pub estimation_method: Option<String>,
    pub co2_emissions: Option<f64>,
    pub ch4_emissions: Option<f64>,
    pub n2o_emissions: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileSourceUpdate {
    pub vehicle_type: Option<String>,
    pub fuel: Option<String>,
    pub annual_consumption: Option<f64>,
    pub calculation_method: Option<String>,
    pub ghg_emissions: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FugitiveEmissionUpdate {
    pub gas_type: Option<String>,
    pub source: Option<String>,
    pub estimated_quantity: Option<f64>,
    pub methodology: Option<String>,
}

// ==========================================
// EmissionsSession - 会话内存状态
// ==========================================
#[derive(Debug, Clone)]
pub struct EmissionsSession {
    dataset: AtmosphericEmissionsDataset,
    source_file: Option<String>,
    imported_at: Option<DateTime<Utc>>,
}

impl EmissionsSession {
    /// 以调用方提供的初始数据集创建会话(可为空数据集或演示数据)
    pub fn new(initial: AtmosphericEmissionsDataset) -> Self {
        Self {
            dataset: initial,
            source_file: None,
            imported_at: None,
        }
    }

    pub fn dataset(&self) -> &AtmosphericEmissionsDataset {
        &self.dataset
    }

    pub fn source_file(&self) -> Option<&str> {
        self.source_file.as_deref()
    }

    pub fn imported_at(&self) -> Option<DateTime<Utc>> {
        self.imported_at
    }

    /// 任一记录带错(消费端据此阻断提交动作)
    pub fn has_errors(&self) -> bool {
        self.dataset.has_errors()
    }

    /// 当前数据集的汇总统计
    pub fn summary(&self) -> EmissionsSummary {
        EmissionsSummary::from_dataset(&self.dataset)
    }

    /// 以一次成功解析的数据集整体替换会话内容
    pub fn load(&mut self, dataset: AtmosphericEmissionsDataset, source_file: Option<String>) {
        self.dataset = dataset;
        self.source_file = source_file;
        self.imported_at = Some(Utc::now());
    }

    /// 清空会话(回到空数据集)
    pub fn clear(&mut self) {
        self.dataset = AtmosphericEmissionsDataset::default();
        self.source_file = None;
        self.imported_at = None;
    }

    // ==========================================
    // 固定源编辑
    // ==========================================

    /// 按 id 更新固定源记录;触碰字段做字段级重校验
    ///
    /// 返回 false 表示 id 不存在
    pub fn update_fixed_source(&mut self, id: Uuid, patch: FixedSourceUpdate) -> bool {
        let record = match self.dataset.fixed_sources.iter_mut().find(|r| r.id == id) {
            Some(r) => r,
            None => return false,
        };

        if let Some(value) = patch.equipment_type {
            let valid = value.is_empty() || is_known_equipment_type(&value);
            record.equipment_type = value;
            set_field_validity(&mut record.error_fields, "equipmentType", valid);
        }
        if let Some(value) = patch.fuel {
            record.fuel = value;
        }
        if let Some(value) = patch.annual_consumption {
            record.annual_consumption = value;
            set_field_validity(&mut record.error_fields, "annualConsumption", true);
        }
        if let Some(value) = patch.operating_hours {
            record.operating_hours = value;
            set_field_validity(&mut record.error_fields, "operatingHours", true);
        }
        if let Some(value) = patch.estimation_method {
            record.estimation_method = value;
        }
        if let Some(value) = patch.co2_emissions {
            record.co2_emissions = value;
            set_field_validity(&mut record.error_fields, "co2Emissions", true);
        }
        if let Some(value) = patch.ch4_emissions {
            record.ch4_emissions = value;
            set_field_validity(&mut record.error_fields, "ch4Emissions", true);
        }
        if let Some(value) = patch.n2o_emissions {
            record.n2o_emissions = value;
            set_field_validity(&mut record.error_fields, "n2oEmissions", true);
        }

        record.has_error = !record.error_fields.is_empty();
        true
    }

    /// 按 id 删除固定源记录
    pub fn remove_fixed_source(&mut self, id: Uuid) -> bool {
        remove_by_id(&mut self.dataset.fixed_sources, |r| r.id == id)
    }

    // ==========================================
    // 移动源编辑
    // ==========================================

    pub fn update_mobile_source(&mut self, id: Uuid, patch: MobileSourceUpdate) -> bool {
        let record = match self.dataset.mobile_sources.iter_mut().find(|r| r.id == id) {
            Some(r) => r,
            None => return false,
        };

        if let Some(value) = patch.vehicle_type {
            record.vehicle_type = value;
        }
        if let Some(value) = patch.fuel {
            record.fuel = value;
        }
        if let Some(value) = patch.annual_consumption {
            record.annual_consumption = value;
            set_field_validity(&mut record.error_fields, "annualConsumption", true);
        }
        if let Some(value) = patch.calculation_method {
            record.calculation_method = value;
        }
        if let Some(value) = patch.ghg_emissions {
            record.ghg_emissions = value;
            set_field_validity(&mut record.error_fields, "ghgEmissions", true);
        }

        record.has_error = !record.error_fields.is_empty();
        true
    }

    pub fn remove_mobile_source(&mut self, id: Uuid) -> bool {
        remove_by_id(&mut self.dataset.mobile_sources, |r| r.id == id)
    }

    // ==========================================
    // 逸散排放编辑
    // ==========================================

    pub fn update_fugitive_emission(&mut self, id: Uuid, patch: FugitiveEmissionUpdate) -> bool {
        let record = match self
            .dataset
            .fugitive_emissions
            .iter_mut()
            .find(|r| r.id == id)
        {
            Some(r) => r,
            None => return false,
        };

        if let Some(value) = patch.gas_type {
            record.gas_type = value;
        }
        if let Some(value) = patch.source {
            let valid = value.is_empty() || is_known_fugitive_source(&value);
            record.source = value;
            set_field_validity(&mut record.error_fields, "source", valid);
        }
        if let Some(value) = patch.estimated_quantity {
            record.estimated_quantity = value;
            set_field_validity(&mut record.error_fields, "estimatedQuantity", true);
        }
        if let Some(value) = patch.methodology {
            record.methodology = value;
        }

        record.has_error = !record.error_fields.is_empty();
        true
    }

    pub fn remove_fugitive_emission(&mut self, id: Uuid) -> bool {
        remove_by_id(&mut self.dataset.fugitive_emissions, |r| r.id == id)
    }
}

/// 触碰字段的标记维护: 合法则摘除标记,非法则补标记(去重)
fn set_field_validity(error_fields: &mut Vec<String>, field: &str, valid: bool) {
    if valid {
        error_fields.retain(|f| f != field);
    } else if !error_fields.iter().any(|f| f == field) {
        error_fields.push(field.to_string());
    }
}

fn remove_by_id<R>(records: &mut Vec<R>, matches: impl Fn(&R) -> bool) -> bool {
    let before = records.len();
    records.retain(|r| !matches(r));
    records.len() != before
}
