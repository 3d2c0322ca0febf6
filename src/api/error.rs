// ==========================================
// 钻具组合导入引擎 - API层错误类型
// ==========================================
// 职责: 编辑器门面的错误类型,汇总下层错误为调用方可读的消息
// ==========================================

use crate::editor::ComponentListError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 清单锁被毒化（持锁线程 panic）
    #[error("component list lock poisoned")]
    ListLockPoisoned,

    #[error(transparent)]
    Preset(#[from] ComponentListError),

    #[error("export failed: {0}")]
    Export(#[from] csv::Error),
}

/// API层结果类型
pub type ApiResult<T> = Result<T, ApiError>;
