// ==========================================
// 钻具组合导入引擎 - 编辑器层
// ==========================================
// 职责: 部件清单模型、预设目录、清单导出
// 红线: 不含文件解析逻辑
// ==========================================

pub mod component_list;
pub mod error;
pub mod export;
pub mod presets;

// 重导出核心类型
pub use component_list::{ComponentList, MoveDirection};
pub use error::ComponentListError;
pub use export::{write_csv, write_csv_file, CalculationPayload, ComponentPayload};
pub use presets::PRESET_NAMES;
