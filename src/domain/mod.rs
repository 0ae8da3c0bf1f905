// ==========================================
// 大气排放申报系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、封闭取值集、单元格模型
// 红线: 不含解析逻辑,不含展示逻辑
// ==========================================

pub mod emissions;
pub mod types;

// 重导出核心类型
pub use emissions::{
    AtmosphericEmissionsDataset, FixedSourceRecord, FugitiveEmissionRecord, ImportReport,
    MobileSourceRecord, ParseOutcome,
};
pub use types::{
    is_known_equipment_type, is_known_fugitive_source, CellValue, SheetKind, EQUIPMENT_TYPES,
    FUGITIVE_SOURCES,
};
