// ==========================================
// 大气排放申报系统 - 排放导入器实现
// ==========================================
// 职责: 文件读取 → 字节解析 → 导入结果
// 口径: 路径类错误(不存在/扩展名)向外抛 ImportError;
//       容器内容问题一律带内(outcome.errors)
// ==========================================

use crate::domain::ImportReport;
use crate::importer::dataset_assembler::parse_bytes;
use crate::importer::emissions_importer_trait::EmissionsImporter;
use crate::importer::error::{ImportError, ImportResult};
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument};

// ==========================================
// EmissionsImporterImpl - 排放导入器实现
// ==========================================
#[derive(Debug, Default)]
pub struct EmissionsImporterImpl;

impl EmissionsImporterImpl {
    pub fn new() -> Self {
        Self
    }

    /// 扩展名检查(仅 .xlsx/.xls)
    fn check_extension(path: &Path) -> ImportResult<()> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EmissionsImporter for EmissionsImporterImpl {
    #[instrument(skip(self, file_path))]
    async fn import_from_excel<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<ImportReport> {
        let start_time = Instant::now();
        let path = file_path.as_ref();
        let file_path_str = path.to_str().unwrap_or("unknown");
        info!(file_path = %file_path_str, "开始导入排放工作簿");

        // === 步骤 1: 路径检查 ===
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }
        Self::check_extension(path)?;

        // === 步骤 2: 读取字节缓冲 ===
        debug!("步骤 2: 读取文件");
        let bytes = std::fs::read(path)?;
        debug!(size = bytes.len(), "文件读取完成");

        // === 步骤 3: 解析 ===
        debug!("步骤 3: 解析工作簿");
        let outcome = parse_bytes(&bytes);

        let elapsed = start_time.elapsed();
        info!(
            records = outcome.dataset.as_ref().map(|d| d.record_count()).unwrap_or(0),
            errors = outcome.errors.len(),
            elapsed_ms = elapsed.as_millis(),
            "排放工作簿导入完成"
        );

        Ok(ImportReport {
            file_name: path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.to_string()),
            imported_at: Utc::now(),
            elapsed_ms: elapsed.as_millis() as u64,
            outcome,
        })
    }

    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
    ) -> ImportResult<Vec<Result<ImportReport, String>>> {
        use futures::future::join_all;

        info!(count = file_paths.len(), "开始批量导入文件");

        // 为每个文件创建导入任务
        let import_tasks = file_paths.into_iter().map(|path| {
            let path_str = path.as_ref().to_str().unwrap_or("unknown").to_string();
            async move {
                match self.import_from_excel(path).await {
                    Ok(report) => {
                        info!(file = %path_str, "文件导入成功");
                        Ok(report)
                    }
                    Err(e) => {
                        error!(file = %path_str, error = %e, "文件导入失败");
                        Err(format!("文件 {} 导入失败: {}", path_str, e))
                    }
                }
            }
        });

        // 并发执行所有导入任务
        let results = join_all(import_tasks).await;

        info!(
            total = results.len(),
            success = results.iter().filter(|r| r.is_ok()).count(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            "批量导入完成"
        );

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_import_file_not_found() {
        let importer = EmissionsImporterImpl::new();
        let result = importer.import_from_excel("no_such_file.xlsx").await;
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_check_extension() {
        assert!(EmissionsImporterImpl::check_extension(Path::new("a.xlsx")).is_ok());
        assert!(EmissionsImporterImpl::check_extension(Path::new("a.XLS")).is_ok());
        assert!(matches!(
            EmissionsImporterImpl::check_extension(Path::new("a.csv")),
            Err(ImportError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            EmissionsImporterImpl::check_extension(Path::new("noext")),
            Err(ImportError::UnsupportedFormat(_))
        ));
    }
}
