// ==========================================
// 大气排放申报系统 - 工作表定位器
// ==========================================
// 职责: 在命名漂移的工作簿中定位三张逻辑表
// 算法: 两趟匹配,首个命中生效
//   1) 归一(小写+去空白)后互为子串
//   2) 目标名拆关键词,表名满足全部关键词
//      (子串命中,或表名某个词是关键词的同首字母有序缩写)
// ==========================================

use crate::importer::workbook::Workbook;

/// 定位逻辑表,返回工作簿中的字面表名
pub fn locate<'a>(workbook: &'a Workbook, target: &str) -> Option<&'a str> {
    // ===== 第一趟: 归一互为子串 =====
    let normalized_target = normalize_sheet_name(target);
    for sheet in &workbook.sheets {
        let normalized_sheet = normalize_sheet_name(&sheet.name);
        if normalized_sheet.contains(&normalized_target)
            || normalized_target.contains(&normalized_sheet)
        {
            return Some(&sheet.name);
        }
    }

    // ===== 第二趟: 关键词匹配 =====
    let keywords: Vec<String> = target
        .to_lowercase()
        .split_whitespace()
        .map(|k| k.to_string())
        .collect();

    for sheet in &workbook.sheets {
        let lower_sheet = sheet.name.to_lowercase();
        if keywords.iter().all(|k| keyword_matches(&lower_sheet, k)) {
            return Some(&sheet.name);
        }
    }

    None
}

/// 小写化并剔除空白(连字符等其他分隔符保留)
fn normalize_sheet_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// 单个关键词是否被表名满足
fn keyword_matches(lower_sheet: &str, keyword: &str) -> bool {
    lower_sheet.contains(keyword)
        || lower_sheet
            .split_whitespace()
            .any(|token| is_abbreviation(token, keyword))
}

/// token 是否为 keyword 的缩写
///
/// 规则: 同首字母,token 的字符按序出现在 keyword 中
/// (如 "srcs" ⊑ "sources")。容忍人为缩短的表名。
fn is_abbreviation(token: &str, keyword: &str) -> bool {
    let mut token_chars = token.chars();
    let first = match token_chars.next() {
        Some(c) => c,
        None => return false,
    };
    if token.len() > keyword.len() || !keyword.starts_with(first) {
        return false;
    }

    let mut keyword_chars = keyword.chars().skip(1);
    'outer: for tc in token_chars {
        for kc in keyword_chars.by_ref() {
            if kc == tc {
                continue 'outer;
            }
        }
        return false;
    }
    true
}
