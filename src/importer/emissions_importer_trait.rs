// ==========================================
// 大气排放申报系统 - 排放导入 Trait
// ==========================================
// 职责: 定义文件级导入接口(不包含实现)
// 口径: 字节级解析入口见 dataset_assembler,纯同步无 I/O;
//       此接口负责磁盘读取与批量并发
// ==========================================

use crate::domain::ImportReport;
use crate::importer::error::ImportResult;
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// EmissionsImporter Trait
// ==========================================
// 用途: 排放工作簿导入主接口
// 实现者: EmissionsImporterImpl
#[async_trait]
pub trait EmissionsImporter: Send + Sync {
    /// 从 Excel 文件导入申报数据
    ///
    /// # 参数
    /// - file_path: 工作簿路径(.xlsx/.xls)
    ///
    /// # 返回
    /// - Ok(ImportReport): 导入结果(文件元信息 + 解析结果);
    ///   解码失败与缺表也走 Ok,以 outcome.errors 带内表达
    /// - Err: 文件不存在、扩展名不支持、读取失败
    async fn import_from_excel<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportReport>;

    /// 批量导入多个文件(并发执行)
    ///
    /// # 说明
    /// - 每个文件的导入相互独立,单个失败不影响其他文件
    /// - 返回顺序与入参顺序一致
    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
    ) -> ImportResult<Vec<Result<ImportReport, String>>>;
}
