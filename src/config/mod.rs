// ==========================================
// 钻具组合导入引擎 - 配置层
// ==========================================
// 职责: 导入缺省值与兜底类型配置
// 存储: JSON 文件（可选）
// ==========================================

pub mod config_manager;
pub mod import_config_trait;

// 重导出核心配置类型
pub use config_manager::{ConfigError, ConfigManager, ImportSettings};
pub use import_config_trait::ImportConfigReader;
