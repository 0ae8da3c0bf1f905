// ==========================================
// 大气排放申报系统 - 工作簿解码
// ==========================================
// 支持: Excel (.xlsx/.xls),输入为内存字节缓冲
// 职责: 容器解码 → 只读网格模型(CellValue 标签联合)
// ==========================================

use crate::domain::CellValue;
use crate::importer::error::{ImportError, ImportResult};
use calamine::{Data, Reader, Xls, Xlsx};
use std::io::{Cursor, Read, Seek};

// ==========================================
// Sheet - 单个工作表网格
// ==========================================
// 红线: 不可变输入,核心不回写
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

// ==========================================
// Workbook - 工作表有序序列
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// 工作簿内的字面表名(按文件顺序)
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// 按字面表名取表
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

// ==========================================
// 字节缓冲解码
// ==========================================

/// 将电子表格容器字节解码为网格模型
///
/// ZIP 魔数("PK")→ .xlsx,否则按 .xls 解码;
/// 两者皆失败视为容器解码失败,由上层转为单条致命错误文案。
pub fn decode_workbook(bytes: &[u8]) -> ImportResult<Workbook> {
    if bytes.starts_with(b"PK") {
        let workbook = Xlsx::new(Cursor::new(bytes))?;
        read_sheets(workbook)
    } else {
        let workbook = Xls::new(Cursor::new(bytes))?;
        read_sheets(workbook)
    }
}

/// 遍历全部工作表,逐格映射为 CellValue
fn read_sheets<RS, R>(mut workbook: R) -> ImportResult<Workbook>
where
    RS: Read + Seek,
    R: Reader<RS>,
    ImportError: From<R::Error>,
{
    let sheet_names = workbook.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for name in sheet_names {
        let range = workbook.worksheet_range(&name)?;
        let rows = range
            .rows()
            .map(|row| row.iter().map(map_cell).collect())
            .collect();
        sheets.push(Sheet::new(name, rows));
    }

    Ok(Workbook::new(sheets))
}

/// calamine 单元格 → 标签联合
fn map_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        // 日期以 Excel 序列值进入数值口径
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        // 公式错误单元格按空处理,由字段校验标记
        Data::Error(_) => CellValue::Empty,
    }
}
