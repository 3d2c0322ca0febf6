// ==========================================
// 钻具组合导入引擎 - 领域模型层
// ==========================================
// 职责: 定义部件记录、类型、导入结果
// 红线: 不含文件解析逻辑,不含编辑器逻辑
// ==========================================

pub mod component;
pub mod import;
pub mod types;

// 重导出核心类型
pub use component::ComponentRecord;
pub use import::{ImportOutcome, ImportWarning, WarningKind};
pub use types::{ComponentField, ComponentType, Severity, TypeDefaults};
