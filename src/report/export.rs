// ==========================================
// 大气排放申报系统 - 数据集导出
// ==========================================
// 职责: 数据集 → 逐类 CSV 文本(报告层消费)
// 口径: 列名沿用申报模板列名;校验标记不导出
// ==========================================

use crate::domain::{
    AtmosphericEmissionsDataset, FixedSourceRecord, FugitiveEmissionRecord, MobileSourceRecord,
};
use crate::importer::error::ImportResult;
use crate::importer::ImportError;

/// 固定源记录导出为 CSV 文本
pub fn fixed_sources_to_csv(records: &[FixedSourceRecord]) -> ImportResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Equipment Type",
        "Fuel",
        "Annual Consumption",
        "Operating Hours",
        "Estimation Method",
        "CO₂ Emissions",
        "CH₄ Emissions",
        "N₂O Emissions",
    ])?;
    for record in records {
        writer.write_record([
            record.equipment_type.as_str(),
            record.fuel.as_str(),
            &record.annual_consumption.to_string(),
            &record.operating_hours.to_string(),
            record.estimation_method.as_str(),
            &record.co2_emissions.to_string(),
            &record.ch4_emissions.to_string(),
            &record.n2o_emissions.to_string(),
        ])?;
    }
    finish(writer)
}

/// 移动源记录导出为 CSV 文本
pub fn mobile_sources_to_csv(records: &[MobileSourceRecord]) -> ImportResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Vehicle Type",
        "Fuel",
        "Annual Consumption",
        "Calculation Method",
        "GHG Emissions",
    ])?;
    for record in records {
        writer.write_record([
            record.vehicle_type.as_str(),
            record.fuel.as_str(),
            &record.annual_consumption.to_string(),
            record.calculation_method.as_str(),
            &record.ghg_emissions.to_string(),
        ])?;
    }
    finish(writer)
}

/// 逸散排放记录导出为 CSV 文本
pub fn fugitive_emissions_to_csv(records: &[FugitiveEmissionRecord]) -> ImportResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Gas Type", "Source", "Estimated Quantity", "Methodology"])?;
    for record in records {
        writer.write_record([
            record.gas_type.as_str(),
            record.source.as_str(),
            &record.estimated_quantity.to_string(),
            record.methodology.as_str(),
        ])?;
    }
    finish(writer)
}

/// 整个数据集的三段 CSV(逻辑表名作段落标题,空行分隔)
pub fn dataset_to_csv(dataset: &AtmosphericEmissionsDataset) -> ImportResult<String> {
    let mut out = String::new();
    out.push_str("Fixed Sources\n");
    out.push_str(&fixed_sources_to_csv(&dataset.fixed_sources)?);
    out.push('\n');
    out.push_str("Mobile Sources\n");
    out.push_str(&mobile_sources_to_csv(&dataset.mobile_sources)?);
    out.push('\n');
    out.push_str("Fugitive Emissions\n");
    out.push_str(&fugitive_emissions_to_csv(&dataset.fugitive_emissions)?);
    Ok(out)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> ImportResult<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ImportError::CsvExportError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ImportError::CsvExportError(e.to_string()))
}
