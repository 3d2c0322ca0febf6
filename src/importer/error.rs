// ==========================================
// 钻具组合导入引擎 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 这些错误不会传出导入管道,统一折叠为 ImportOutcome(error)
// 说明: 错误文本会经反馈通道展示给用户
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0:?} (expected .csv/.tsv/.xlsx/.xlsm/.xlsb/.xls/.ods)")]
    UnsupportedFormat(String),

    #[error("failed to read file: {0}")]
    FileReadError(String),

    #[error("malformed spreadsheet: {0}")]
    SpreadsheetParseError(String),

    #[error("malformed delimited text: {0}")]
    CsvParseError(String),

    #[error("spreadsheet contains no worksheet")]
    NoWorksheet,

    #[error("decoder task aborted: {0}")]
    DecodeTaskFailed(String),

    // ===== 映射结果错误 =====
    #[error("no importable component rows; columns seen: {}", .columns.join(", "))]
    NoImportableRows { columns: Vec<String> },
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::SpreadsheetParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
