// ==========================================
// 大气排放申报系统 - 应用层
// ==========================================
// 会话状态与展示层编辑入口

pub mod session;

pub use session::{
    EmissionsSession, FixedSourceUpdate, FugitiveEmissionUpdate, MobileSourceUpdate,
};
