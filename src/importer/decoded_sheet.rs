// ==========================================
// 钻具组合导入引擎 - 解码结果（弱类型边界）
// ==========================================
// 职责: 解码器输出的"列名 → 未定型标量"行结构
// 红线: 所有类型转换只在 RowMapper 处发生,此后一律强类型
// ==========================================

use std::fmt;

/// 单元格原始值
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl RawCell {
    pub fn is_empty(&self) -> bool {
        match self {
            RawCell::Empty => true,
            RawCell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// 转为去空白文本
    ///
    /// # 说明
    /// - 整数值浮点输出为 "3" 而非 "3.0"（电子表格数字单元格）
    pub fn to_text(&self) -> String {
        match self {
            RawCell::Empty => String::new(),
            RawCell::Text(s) => s.trim().to_string(),
            RawCell::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                format!("{}", *n as i64)
            }
            RawCell::Number(n) => n.to_string(),
            RawCell::Bool(b) => b.to_string(),
        }
    }
}

impl fmt::Display for RawCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

/// 一行解码数据（保持表头顺序）
pub type RawRow = Vec<(String, RawCell)>;

/// 带源文件行号的数据行
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    /// 源文件中的行号（表头为第 1 行,空行照常计数）
    pub row_number: usize,
    pub cells: RawRow,
}

/// 解码后的工作表
#[derive(Debug, Clone, Default)]
pub struct DecodedSheet {
    /// 原始表头（去空白）
    pub headers: Vec<String>,
    /// 数据行（已跳过全空行）
    pub rows: Vec<SourceRow>,
}

impl DecodedSheet {
    /// 按表头组装一行,超出表头的单元格丢弃;全空行返回 None
    pub fn build_row(
        headers: &[String],
        row_number: usize,
        cells: impl IntoIterator<Item = RawCell>,
    ) -> Option<SourceRow> {
        let cells: RawRow = headers.iter().cloned().zip(cells).collect();
        if cells.iter().all(|(_, cell)| cell.is_empty()) {
            None
        } else {
            Some(SourceRow { row_number, cells })
        }
    }

    /// 首个数据行中出现的列名;无数据行时返回表头
    pub fn columns_seen(&self) -> Vec<String> {
        match self.rows.first() {
            Some(row) => row.cells.iter().map(|(k, _)| k.clone()).collect(),
            None => self.headers.clone(),
        }
    }
}
