// ==========================================
// 钻具组合导入引擎 - 编辑器错误类型
// ==========================================

use thiserror::Error;

/// 部件清单错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComponentListError {
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}
