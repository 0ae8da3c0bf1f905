// ==========================================
// 文件导入端到端测试
// ==========================================
// 测试目标: 路径类错误向外抛,内容类错误随结果带内
// ==========================================

use atmospheric_emissions::importer::{
    EmissionsImporter, EmissionsImporterImpl, ImportError, DECODE_FAILURE_ERROR,
};
use atmospheric_emissions::logging;
use std::io::Write;
use tempfile::Builder;

#[tokio::test]
async fn test_missing_file_is_an_outer_error() {
    logging::init_test();

    let importer = EmissionsImporterImpl::new();
    let result = importer
        .import_from_excel("/nonexistent/emisiones_2024.xlsx")
        .await;

    match result {
        Err(ImportError::FileNotFound(path)) => {
            assert!(path.contains("emisiones_2024.xlsx"));
        }
        other => panic!("expected FileNotFound, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_unsupported_extension_is_rejected() {
    logging::init_test();

    let mut file = Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp file");
    file.write_all(b"a,b,c").expect("write temp file");

    let importer = EmissionsImporterImpl::new();
    let result = importer.import_from_excel(file.path()).await;

    assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_garbage_xlsx_reports_decode_error_in_band() {
    logging::init_test();

    // 扩展名合法但内容不可解码: 不抛错,错误随 outcome 带内
    let mut file = Builder::new()
        .suffix(".xlsx")
        .tempfile()
        .expect("create temp file");
    file.write_all(b"definitely not a zip archive")
        .expect("write temp file");

    let importer = EmissionsImporterImpl::new();
    let report = importer
        .import_from_excel(file.path())
        .await
        .expect("decode failure must not be an outer error");

    assert!(report.outcome.dataset.is_none());
    assert_eq!(report.outcome.errors, vec![DECODE_FAILURE_ERROR.to_string()]);
    assert!(report
        .file_name
        .as_deref()
        .is_some_and(|n| n.ends_with(".xlsx")));
}

#[tokio::test]
async fn test_batch_import_isolates_failures() {
    logging::init_test();

    let mut garbage = Builder::new()
        .suffix(".xlsx")
        .tempfile()
        .expect("create temp file");
    garbage
        .write_all(b"still not a spreadsheet")
        .expect("write temp file");

    let paths = vec![
        garbage.path().to_path_buf(),
        std::path::PathBuf::from("/nonexistent/otro_archivo.xlsx"),
    ];

    let importer = EmissionsImporterImpl::new();
    let results = importer.batch_import(paths).await.expect("batch runs");

    assert_eq!(results.len(), 2);
    // 第一个文件: 外层成功,解码错误带内
    let report = results[0].as_ref().expect("garbage file yields a report");
    assert!(report.outcome.dataset.is_none());
    // 第二个文件: 路径错误被隔离为该文件自身的失败
    assert!(results[1].is_err());
}
