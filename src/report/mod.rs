// ==========================================
// 大气排放申报系统 - 报告层
// ==========================================
// 职责: 数据集的聚合统计与导出(数据形状的纯消费者)
// ==========================================

pub mod export;
pub mod summary;

// 重导出核心类型
pub use export::{
    dataset_to_csv, fixed_sources_to_csv, fugitive_emissions_to_csv, mobile_sources_to_csv,
};
pub use summary::{EmissionsSummary, FuelConsumption};
