// ==========================================
// 大气排放申报系统 - 核心库
// ==========================================
// 技术栈: Rust + calamine
// 系统定位: 温室气体申报看板的摄取/校验核心
// (解析永不 panic,行级错误随数据返回)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 工作簿解码/定位/校验/组装
pub mod importer;

// 报表层 - 汇总与导出
pub mod report;

// 应用层 - 会话状态
pub mod app;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{CellValue, SheetKind, EQUIPMENT_TYPES, FUGITIVE_SOURCES};

// 领域实体
pub use domain::{
    AtmosphericEmissionsDataset, FixedSourceRecord, FugitiveEmissionRecord, ImportReport,
    MobileSourceRecord, ParseOutcome,
};

// 导入层
pub use importer::{
    parse_bytes, parse_workbook, EmissionsImporter, EmissionsImporterImpl, ImportError,
    ImportResult, Sheet, Workbook,
};

// 报表层
pub use report::{dataset_to_csv, EmissionsSummary};

// 应用层
pub use app::{
    EmissionsSession, FixedSourceUpdate, FugitiveEmissionUpdate, MobileSourceUpdate,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "大气排放申报系统";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
