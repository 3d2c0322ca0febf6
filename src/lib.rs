// ==========================================
// 钻具组合导入引擎 - 核心库
// ==========================================
// 职责: 钻具组合（BHA）部件清单的导入、归一化与编辑
// 流程: 表格文件 → 列名归一 → 类型解析 → 行映射 → 部件清单
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部表格
pub mod importer;

// 编辑层 - 部件清单与导出
pub mod editor;

// 配置层 - 导入缺省值
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 编辑器门面
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    ComponentField, ComponentRecord, ComponentType, ImportOutcome, ImportWarning, Severity,
    WarningKind,
};

// 导入
pub use importer::{ComponentImporter, ComponentImporterImpl, ImportError, ImportPhase};

// 编辑
pub use editor::{CalculationPayload, ComponentList, ComponentListError, MoveDirection};

// 配置
pub use config::{ConfigManager, ImportSettings};

// API
pub use api::{ApiError, BhaEditorApi};

// ==========================================
// 版本信息
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "BHA Component Import";
