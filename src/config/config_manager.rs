// ==========================================
// 钻具组合导入引擎 - 配置管理器
// ==========================================
// 职责: 导入配置加载（JSON 文件）与缺省值
// 存储: <config_dir>/bha-import/config.json
// ==========================================

use crate::config::import_config_trait::ImportConfigReader;
use crate::domain::types::ComponentType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// 配置读取错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("invalid config file {path}: {message}")]
    Parse { path: String, message: String },
}

// ==========================================
// ImportSettings - 导入配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    pub default_outer_diameter: f64,
    pub default_inner_diameter: f64,
    pub default_weight_ppf: f64,
    pub fallback_type: ComponentType,
    /// 界面语言（"en" / "zh-CN"）
    pub locale: String,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            default_outer_diameter: 6.75,
            default_inner_diameter: 2.813,
            default_weight_ppf: 83.0,
            fallback_type: ComponentType::DrillCollar,
            locale: "en".to_string(),
        }
    }
}

impl ImportConfigReader for ImportSettings {
    fn default_outer_diameter(&self) -> f64 {
        self.default_outer_diameter
    }

    fn default_inner_diameter(&self) -> f64 {
        self.default_inner_diameter
    }

    fn default_weight_ppf(&self) -> f64 {
        self.default_weight_ppf
    }

    fn fallback_type(&self) -> ComponentType {
        self.fallback_type
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// 默认配置文件路径
    ///
    /// # 返回
    /// - Some(PathBuf): <config_dir>/bha-import/config.json
    /// - None: 平台无配置目录
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bha-import").join("config.json"))
    }

    /// 从 JSON 文件加载配置（缺失字段取缺省值）
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ImportSettings, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let settings: ImportSettings =
            serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        info!(path = %path.display(), "导入配置已加载");
        Ok(settings)
    }

    /// 加载默认路径下的配置,文件不存在时使用缺省配置
    pub fn load_or_default() -> Result<ImportSettings, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                debug!("未找到配置文件,使用缺省配置");
                Ok(ImportSettings::default())
            }
        }
    }
}
