// ==========================================
// 大气排放申报系统 - 数据集装配器
// ==========================================
// 职责: 整合解析流程,从字节缓冲到申报数据集
// 流程: 解码 → 定位三表 → 三类校验 → 错误聚合 → 数据集
// 口径: 仅解码失败与缺表致命;行级错误不中止解析
// ==========================================

use crate::domain::{AtmosphericEmissionsDataset, ParseOutcome, SheetKind};
use crate::importer::fixed_source_validator::FixedSourceValidator;
use crate::importer::fugitive_emission_validator::FugitiveEmissionValidator;
use crate::importer::mobile_source_validator::MobileSourceValidator;
use crate::importer::sheet_locator;
use crate::importer::sheet_validator::SheetValidator;
use crate::importer::workbook::{decode_workbook, Workbook};
use tracing::{debug, info, warn};

/// 容器解码失败的对外文案(消费端原样展示,不得改写)
pub const DECODE_FAILURE_ERROR: &str =
    "Falla al analizar el archivo de excel, por favor asegurarse de que es un archivo valido.";

/// 从字节缓冲解析申报数据集
///
/// 解码失败不向外抛出:返回 dataset=None 与单条通用错误文案。
pub fn parse_bytes(bytes: &[u8]) -> ParseOutcome {
    debug!(size = bytes.len(), "开始解码工作簿");
    let workbook = match decode_workbook(bytes) {
        Ok(wb) => wb,
        Err(e) => {
            warn!(error = %e, "容器解码失败");
            return ParseOutcome::fatal(vec![DECODE_FAILURE_ERROR.to_string()]);
        }
    };

    parse_workbook(&workbook)
}

/// 从已解码的网格模型解析申报数据集
///
/// 测试与解码路径共用的纯入口,不做任何 I/O。
pub fn parse_workbook(workbook: &Workbook) -> ParseOutcome {
    let mut errors: Vec<String> = Vec::new();
    let warnings: Vec<String> = Vec::new();

    // === 步骤 1: 定位三张逻辑表(相互独立) ===
    debug!("步骤 1: 定位逻辑工作表");
    let located: Vec<(SheetKind, Option<&str>)> = SheetKind::ALL
        .iter()
        .map(|kind| (*kind, sheet_locator::locate(workbook, kind.label())))
        .collect();

    let missing: Vec<&str> = located
        .iter()
        .filter(|(_, name)| name.is_none())
        .map(|(kind, _)| kind.label())
        .collect();

    // 任一缺失即整体致命:不返回部分数据集
    if !missing.is_empty() {
        warn!(missing = ?missing, "缺少必需工作表");
        errors.push(format!("Missing required sheets: {}", missing.join(", ")));
        errors.push(format!(
            "Found sheets: {}",
            workbook.sheet_names().join(", ")
        ));
        return ParseOutcome {
            dataset: None,
            errors,
            warnings,
        };
    }

    // === 步骤 2: 三类校验器独立运行 ===
    debug!("步骤 2: 逐表校验");
    let sheet_of = |kind: SheetKind| {
        let name = located
            .iter()
            .find(|(k, _)| *k == kind)
            .and_then(|(_, n)| *n)
            .unwrap_or_default();
        workbook.sheet(name)
    };

    // 定位结果来自本工作簿,取表必然命中
    let fixed = sheet_of(SheetKind::FixedSources)
        .map(|s| FixedSourceValidator.validate(s))
        .unwrap_or_else(crate::importer::sheet_validator::SheetOutcome::empty);
    let mobile = sheet_of(SheetKind::MobileSources)
        .map(|s| MobileSourceValidator.validate(s))
        .unwrap_or_else(crate::importer::sheet_validator::SheetOutcome::empty);
    let fugitive = sheet_of(SheetKind::FugitiveEmissions)
        .map(|s| FugitiveEmissionValidator.validate(s))
        .unwrap_or_else(crate::importer::sheet_validator::SheetOutcome::empty);

    // === 步骤 3: 错误聚合(行级错误不中止) ===
    errors.extend(fixed.errors);
    errors.extend(mobile.errors);
    errors.extend(fugitive.errors);

    let dataset = AtmosphericEmissionsDataset {
        fixed_sources: fixed.records,
        mobile_sources: mobile.records,
        fugitive_emissions: fugitive.records,
    };

    info!(
        fixed = dataset.fixed_sources.len(),
        mobile = dataset.mobile_sources.len(),
        fugitive = dataset.fugitive_emissions.len(),
        errors = errors.len(),
        "解析完成"
    );

    ParseOutcome {
        dataset: Some(dataset),
        errors,
        warnings,
    }
}
