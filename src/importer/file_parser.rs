// ==========================================
// 钻具组合导入引擎 - 文件解析器实现
// ==========================================
// 阶段: Decoding（文件读取与解析）
// 支持: 分隔文本 (.csv/.tsv) / 电子表格 (.xlsx/.xlsm/.xlsb/.xls/.ods)
// ==========================================

use crate::importer::component_importer_trait::FileParser;
use crate::importer::decoded_sheet::{DecodedSheet, RawCell};
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::debug;

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser {
    delimiter: u8,
}

impl CsvParser {
    pub fn comma() -> Self {
        Self { delimiter: b',' }
    }

    pub fn tab() -> Self {
        Self { delimiter: b'\t' }
    }
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::comma()
    }
}

impl FileParser for CsvParser {
    fn parse_to_sheet(&self, file_path: &Path) -> ImportResult<DecodedSheet> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头（去除 UTF-8 BOM）
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            // 物理行号（空行已被读取器跳过但仍计数）
            let row_number = record
                .position()
                .map_or(idx + 2, |pos| pos.line() as usize);
            let cells = record.iter().map(|v| {
                let v = v.trim();
                if v.is_empty() {
                    RawCell::Empty
                } else {
                    RawCell::Text(v.to_string())
                }
            });

            // 跳过完全空白的行
            if let Some(row) = DecodedSheet::build_row(&headers, row_number, cells) {
                rows.push(row);
            }
        }

        debug!(columns = headers.len(), rows = rows.len(), "CSV 解析完成");
        Ok(DecodedSheet { headers, rows })
    }
}

// ==========================================
// Spreadsheet Parser 实现
// ==========================================
// 读取第一个工作表,首行为表头
pub struct SpreadsheetParser;

impl FileParser for SpreadsheetParser {
    fn parse_to_sheet(&self, file_path: &Path) -> ImportResult<DecodedSheet> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(ImportError::NoWorksheet)?;
        let range = workbook.worksheet_range(&sheet_name)?;

        // 表头所在的工作表行（1 起）
        let header_row_number = range.start().map_or(1, |(row, _)| row as usize + 1);
        let mut data_rows = range.rows();
        let headers: Vec<String> = match data_rows.next() {
            Some(header_row) => header_row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect(),
            None => Vec::new(),
        };

        let mut rows = Vec::new();
        for (idx, data_row) in data_rows.enumerate() {
            let cells = data_row.iter().map(to_raw_cell);
            let row_number = header_row_number + idx + 1;
            if let Some(row) = DecodedSheet::build_row(&headers, row_number, cells) {
                rows.push(row);
            }
        }

        debug!(sheet = %sheet_name, columns = headers.len(), rows = rows.len(), "电子表格解析完成");
        Ok(DecodedSheet { headers, rows })
    }
}

fn to_raw_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Empty => RawCell::Empty,
        Data::Int(i) => RawCell::Number(*i as f64),
        Data::Float(f) => RawCell::Number(*f),
        Data::Bool(b) => RawCell::Bool(*b),
        Data::String(s) => RawCell::Text(s.clone()),
        other => RawCell::Text(other.to_string()),
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_to_sheet(&self, file_path: &Path) -> ImportResult<DecodedSheet> {
        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser::comma().parse_to_sheet(file_path),
            "tsv" | "tab" => CsvParser::tab().parse_to_sheet(file_path),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => SpreadsheetParser.parse_to_sheet(file_path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
