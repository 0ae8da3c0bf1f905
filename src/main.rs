// ==========================================
// 大气排放申报系统 - 命令行入口
// ==========================================
// 用法:
//   cargo run -- <文件.xlsx> [更多文件...]
//
// 解析给定的排放申报工作簿,打印行级错误与汇总统计。
// 任一文件出现致命错误(无数据集)时以非零码退出。
// ==========================================

use atmospheric_emissions::report::EmissionsSummary;
use atmospheric_emissions::{logging, EmissionsImporter, EmissionsImporterImpl};
use tracing::{error, info};

// 终端错误列表的显示上限(完整列表仍在返回值中)
const MAX_DISPLAYED_ERRORS: usize = 20;

#[tokio::main]
async fn main() {
    logging::init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("用法: atmospheric-emissions <文件.xlsx> [更多文件...]");
        std::process::exit(2);
    }

    let importer = EmissionsImporterImpl::new();
    let mut fatal = false;

    for path in &paths {
        info!("开始导入: {}", path);
        match importer.import_from_excel(path).await {
            Ok(report) => {
                print_report(path, &report.outcome.errors, report.elapsed_ms);
                match &report.outcome.dataset {
                    Some(dataset) => {
                        let summary = EmissionsSummary::from_dataset(dataset);
                        print_summary(&summary);
                    }
                    None => {
                        // 无数据集 = 致命(解码失败或必需表缺失)
                        fatal = true;
                    }
                }
            }
            Err(e) => {
                error!("导入失败: {} ({})", path, e);
                eprintln!("{}: {}", path, e);
                fatal = true;
            }
        }
    }

    if fatal {
        std::process::exit(1);
    }
}

fn print_report(path: &str, errors: &[String], elapsed_ms: u64) {
    println!("== {} ({} ms) ==", path, elapsed_ms);
    if errors.is_empty() {
        println!("无校验错误");
        return;
    }

    println!("校验错误 {} 条:", errors.len());
    for e in errors.iter().take(MAX_DISPLAYED_ERRORS) {
        println!("  - {}", e);
    }
    if errors.len() > MAX_DISPLAYED_ERRORS {
        println!("  ...and {} more", errors.len() - MAX_DISPLAYED_ERRORS);
    }
}

fn print_summary(summary: &EmissionsSummary) {
    println!(
        "固定源 {} 条 / 移动源 {} 条 / 逸散排放 {} 条",
        summary.fixed_source_count, summary.mobile_source_count, summary.fugitive_emission_count
    );
    println!(
        "固定源排放: CO2 {:.3} / CH4 {:.3} / N2O {:.3}",
        summary.fixed_co2_total, summary.fixed_ch4_total, summary.fixed_n2o_total
    );
    println!("移动源温室气体合计: {:.3}", summary.mobile_ghg_total);
    println!("逸散排放量合计: {:.3}", summary.fugitive_quantity_total);
    println!("燃料用量分布:");
    for fuel in &summary.fuel_breakdown {
        println!("  {} = {:.3}", fuel.fuel, fuel.annual_consumption);
    }
    if summary.has_errors {
        println!("提示: 存在带错误标记的记录,提交前需在界面中修正");
    }
}
