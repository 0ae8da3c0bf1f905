// ==========================================
// 大气排放申报系统 - 排放领域模型
// ==========================================
// 依据: RENE 第二部分 - 固定源/移动源/逸散排放三类记录
// 红线: 字段名序列化为 camelCase,与表格列和前端展示层对齐
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// FixedSourceRecord - 固定燃烧源记录
// ==========================================
// 用途: 导入层写入,展示/汇总层读取,按 id 编辑
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedSourceRecord {
    // ===== 主键 =====
    pub id: Uuid, // 解析时生成,记录在内存生命周期内唯一且稳定

    // ===== 源字段 =====
    pub equipment_type: String,   // 设备类型(封闭集外非空值保留原文)
    pub fuel: String,             // 燃料
    pub annual_consumption: f64,  // 年消耗量
    pub operating_hours: f64,     // 运行小时数
    pub estimation_method: String, // 估算方法
    pub co2_emissions: f64,       // CO₂ 排放量(吨)
    pub ch4_emissions: f64,       // CH₄ 排放量(吨)
    pub n2o_emissions: f64,       // N₂O 排放量(吨)

    // ===== 校验标记 =====
    pub has_error: bool,           // 恒等于 !error_fields.is_empty()
    pub error_fields: Vec<String>, // 无效字段名(camelCase,供前端高亮)
}

// ==========================================
// MobileSourceRecord - 移动源记录
// ==========================================
// 口径: vehicle_type 无封闭集约束
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileSourceRecord {
    // ===== 主键 =====
    pub id: Uuid,

    // ===== 源字段 =====
    pub vehicle_type: String,      // 车辆类型
    pub fuel: String,              // 燃料
    pub annual_consumption: f64,   // 年消耗量
    pub calculation_method: String, // 计算方法
    pub ghg_emissions: f64,        // 温室气体排放量(吨 CO₂e)

    // ===== 校验标记 =====
    pub has_error: bool,
    pub error_fields: Vec<String>,
}

// ==========================================
// FugitiveEmissionRecord - 逸散排放记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FugitiveEmissionRecord {
    // ===== 主键 =====
    pub id: Uuid,

    // ===== 源字段 =====
    pub gas_type: String,        // 气体类型
    pub source: String,          // 排放源(封闭集外非空值保留原文)
    pub estimated_quantity: f64, // 估算量(吨)
    pub methodology: String,     // 方法学

    // ===== 校验标记 =====
    pub has_error: bool,
    pub error_fields: Vec<String>,
}

// ==========================================
// AtmosphericEmissionsDataset - 申报数据集
// ==========================================
// 红线: 记录顺序与表格行序一致(展示语义),正确性不依赖顺序
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtmosphericEmissionsDataset {
    pub fixed_sources: Vec<FixedSourceRecord>,
    pub mobile_sources: Vec<MobileSourceRecord>,
    pub fugitive_emissions: Vec<FugitiveEmissionRecord>,
}

impl AtmosphericEmissionsDataset {
    /// 任一类别存在带错记录
    pub fn has_errors(&self) -> bool {
        self.fixed_sources.iter().any(|r| r.has_error)
            || self.mobile_sources.iter().any(|r| r.has_error)
            || self.fugitive_emissions.iter().any(|r| r.has_error)
    }

    /// 三类记录总数
    pub fn record_count(&self) -> usize {
        self.fixed_sources.len() + self.mobile_sources.len() + self.fugitive_emissions.len()
    }
}

// ==========================================
// ParseOutcome - 单次解析结果
// ==========================================
// 口径: 仅容器解码失败与缺表导致 dataset=None;
//       行级异常保留数据集并附带错误文案
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    pub dataset: Option<AtmosphericEmissionsDataset>,
    pub errors: Vec<String>,   // 完整错误列表,核心不截断
    pub warnings: Vec<String>,
}

impl ParseOutcome {
    /// 致命失败结果(解码失败/缺表,无部分数据集)
    pub fn fatal(errors: Vec<String>) -> Self {
        Self {
            dataset: None,
            errors,
            warnings: Vec::new(),
        }
    }
}

// ==========================================
// ImportReport - 文件导入结果
// ==========================================
// 用途: 文件级导入接口返回(批次元信息 + 解析结果)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub file_name: Option<String>,       // 源文件名
    pub imported_at: DateTime<Utc>,      // 导入完成时间
    pub elapsed_ms: u64,                 // 解析耗时(毫秒)
    pub outcome: ParseOutcome,           // 解析结果
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fixed(co2: f64) -> FixedSourceRecord {
        FixedSourceRecord {
            id: Uuid::new_v4(),
            equipment_type: "Boiler".to_string(),
            fuel: "Gas Natural".to_string(),
            annual_consumption: 15000.0,
            operating_hours: 4500.0,
            estimation_method: "Medición directa".to_string(),
            co2_emissions: co2,
            ch4_emissions: 0.015,
            n2o_emissions: 0.003,
            has_error: false,
            error_fields: Vec::new(),
        }
    }

    #[test]
    fn test_dataset_has_errors() {
        let mut dataset = AtmosphericEmissionsDataset::default();
        assert!(!dataset.has_errors());

        let mut bad = valid_fixed(1.0);
        bad.error_fields.push("co2Emissions".to_string());
        bad.has_error = true;
        dataset.fixed_sources.push(bad);
        assert!(dataset.has_errors());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = valid_fixed(28.35);
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("equipmentType").is_some());
        assert!(json.get("annualConsumption").is_some());
        assert!(json.get("errorFields").is_some());
        assert!(json.get("equipment_type").is_none());
    }
}
