// ==========================================
// 钻具组合导入引擎 - API 层
// ==========================================
// 职责: 提供编辑器门面,供界面/命令行调用
// ==========================================

pub mod bha_editor_api;
pub mod error;

// 重导出核心类型
pub use bha_editor_api::{BhaEditorApi, FeedbackCallback, FileSelection, TypeOption};
pub use error::{ApiError, ApiResult};
