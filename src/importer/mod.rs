// ==========================================
// 大气排放申报系统 - 导入层
// ==========================================
// 职责: 电子表格摄取与校验管道
// 流程: 解码 → 列归一 → 表定位 → 类型转换 → 三类校验 → 装配
// 红线: 核心边界为 parse(bytes) → (数据集, 错误);不依赖展示层
// ==========================================

// 模块声明
pub mod coerce;
pub mod column_map;
pub mod dataset_assembler;
pub mod emissions_importer_impl;
pub mod emissions_importer_trait;
pub mod error;
pub mod fixed_source_validator;
pub mod fugitive_emission_validator;
pub mod mobile_source_validator;
pub mod sheet_locator;
pub mod sheet_validator;
pub mod workbook;

// 重导出核心类型
pub use coerce::{coerce_number, coerce_text};
pub use column_map::{
    normalize_column_name, ColumnMap, FIXED_SOURCE_KEYS, FUGITIVE_EMISSION_KEYS,
    MOBILE_SOURCE_KEYS,
};
pub use dataset_assembler::{parse_bytes, parse_workbook, DECODE_FAILURE_ERROR};
pub use emissions_importer_impl::EmissionsImporterImpl;
pub use error::{ImportError, ImportResult};
pub use fixed_source_validator::FixedSourceValidator;
pub use fugitive_emission_validator::FugitiveEmissionValidator;
pub use mobile_source_validator::MobileSourceValidator;
pub use sheet_validator::{SheetOutcome, SheetValidator};
pub use workbook::{decode_workbook, Sheet, Workbook};

// 重导出 Trait 接口
pub use emissions_importer_trait::EmissionsImporter;
