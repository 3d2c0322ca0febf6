// ==========================================
// 钻具组合导入引擎 - 导入配置读取 Trait
// ==========================================
// 职责: 定义行映射所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::domain::types::ComponentType;

// ==========================================
// ImportConfigReader Trait
// ==========================================
// 用途: 行映射器读取缺省尺寸与兜底类型
// 实现者: ImportSettings
pub trait ImportConfigReader: Send + Sync {
    /// 外径缺省值（列缺失或无法解析时使用）
    ///
    /// # 默认值
    /// - 6.75
    fn default_outer_diameter(&self) -> f64;

    /// 内径缺省值
    ///
    /// # 默认值
    /// - 2.813
    fn default_inner_diameter(&self) -> f64;

    /// 线重缺省值 (lb/ft)
    ///
    /// # 默认值
    /// - 83.0
    fn default_weight_ppf(&self) -> f64;

    /// 类型无法识别时的兜底类型
    ///
    /// # 默认值
    /// - drill_collar
    fn fallback_type(&self) -> ComponentType;
}
