// ==========================================
// 钻具组合导入引擎 - 领域类型定义
// ==========================================
// 职责: 部件类型封闭集合、部件字段、导入状态/严重级别
// 红线: 类型集合封闭,外部词汇一律先归一再进入业务逻辑
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 部件类型 (Component Type)
// ==========================================
// 序列化格式: snake_case (与标准字段 `type` 取值一致)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    #[default]
    DrillCollar,       // 钻铤
    DrillPipe,         // 钻杆
    Hwdp,              // 加重钻杆
    Crossover,         // 配合接头
    Sub,               // 接头
    FloatSub,          // 浮阀接头
    BitSub,            // 钻头接头
    ShockSub,          // 减震器
    Stabilizer,        // 扶正器
    NearBitStabilizer, // 近钻头扶正器
    StringStabilizer,  // 历史遗留类型,仅导入可识别,不在界面目录中展示
    Motor,             // 螺杆钻具
    Mwd,               // 随钻测量
    Lwd,               // 随钻测井
    Jar,               // 震击器
    Reamer,            // 扩眼器
}

/// 单个类型的典型几何参数（外径/内径 in，线重 lb/ft，单根长度 ft）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeDefaults {
    pub outer_diameter: f64,
    pub inner_diameter: f64,
    pub weight_per_unit_length: f64,
    pub unit_length: f64,
}

impl ComponentType {
    /// 全部标准类型（含历史遗留类型）
    pub const ALL: [ComponentType; 16] = [
        ComponentType::DrillCollar,
        ComponentType::DrillPipe,
        ComponentType::Hwdp,
        ComponentType::Crossover,
        ComponentType::Sub,
        ComponentType::FloatSub,
        ComponentType::BitSub,
        ComponentType::ShockSub,
        ComponentType::Stabilizer,
        ComponentType::NearBitStabilizer,
        ComponentType::StringStabilizer,
        ComponentType::Motor,
        ComponentType::Mwd,
        ComponentType::Lwd,
        ComponentType::Jar,
        ComponentType::Reamer,
    ];

    /// 标准标识符
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::DrillCollar => "drill_collar",
            ComponentType::DrillPipe => "drill_pipe",
            ComponentType::Hwdp => "hwdp",
            ComponentType::Crossover => "crossover",
            ComponentType::Sub => "sub",
            ComponentType::FloatSub => "float_sub",
            ComponentType::BitSub => "bit_sub",
            ComponentType::ShockSub => "shock_sub",
            ComponentType::Stabilizer => "stabilizer",
            ComponentType::NearBitStabilizer => "near_bit_stabilizer",
            ComponentType::StringStabilizer => "string_stabilizer",
            ComponentType::Motor => "motor",
            ComponentType::Mwd => "mwd",
            ComponentType::Lwd => "lwd",
            ComponentType::Jar => "jar",
            ComponentType::Reamer => "reamer",
        }
    }

    /// 按标准标识符精确查找（不做别名解析）
    pub fn from_canonical(value: &str) -> Option<ComponentType> {
        Self::ALL.iter().copied().find(|t| t.as_str() == value)
    }

    /// 管状类型允许 quantity > 1，其余类型固定为 1
    pub fn is_tubular(&self) -> bool {
        matches!(
            self,
            ComponentType::DrillCollar | ComponentType::DrillPipe | ComponentType::Hwdp
        )
    }

    /// 是否出现在界面类型目录中
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, ComponentType::StringStabilizer)
    }

    /// 界面可选类型目录
    pub fn catalog() -> Vec<ComponentType> {
        Self::ALL
            .iter()
            .copied()
            .filter(|t| t.is_user_visible())
            .collect()
    }

    /// 当前语言下的显示名称
    pub fn label(&self) -> String {
        crate::i18n::t(&format!("component_type.{}", self.as_str()))
    }

    /// 类型典型几何参数
    ///
    /// # 用途
    /// - 编辑器新增部件
    /// - 编辑器切换类型时替换尺寸
    /// - 导入时未提供任何长度字段的兜底单根长度
    pub fn defaults(&self) -> TypeDefaults {
        let (od, id, weight, unit_length) = match self {
            ComponentType::DrillCollar => (6.75, 2.813, 100.0, 30.0),
            ComponentType::DrillPipe => (5.0, 4.276, 19.5, 31.0),
            ComponentType::Hwdp => (5.0, 3.0, 49.3, 31.0),
            ComponentType::Crossover => (6.5, 2.813, 90.0, 3.0),
            ComponentType::Sub => (6.5, 2.813, 90.0, 3.0),
            ComponentType::FloatSub => (6.75, 2.813, 95.0, 3.0),
            ComponentType::BitSub => (6.75, 2.813, 95.0, 3.0),
            ComponentType::ShockSub => (6.75, 2.5, 100.0, 12.0),
            ComponentType::Stabilizer
            | ComponentType::NearBitStabilizer
            | ComponentType::StringStabilizer => (6.75, 2.813, 95.0, 6.0),
            ComponentType::Motor => (6.75, 3.5, 90.0, 25.0),
            ComponentType::Mwd => (6.75, 3.25, 95.0, 30.0),
            ComponentType::Lwd => (6.75, 3.25, 100.0, 30.0),
            ComponentType::Jar => (6.5, 2.75, 95.0, 32.0),
            ComponentType::Reamer => (8.0, 2.813, 120.0, 6.0),
        };
        TypeDefaults {
            outer_diameter: od,
            inner_diameter: id,
            weight_per_unit_length: weight,
            unit_length,
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 可编辑字段 (Component Field)
// ==========================================
// total_length 为派生量,不可直接编辑
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentField {
    ComponentType,
    OuterDiameter,
    InnerDiameter,
    WeightPerUnitLength,
    UnitLength,
    Quantity,
}

// ==========================================
// 导入状态 / 反馈严重级别
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success, // 成功
    Warning, // 成功但有警告
    Error,   // 失败,清单未变更
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_round_trip() {
        for t in ComponentType::ALL {
            assert_eq!(ComponentType::from_canonical(t.as_str()), Some(t));
        }
        assert_eq!(ComponentType::from_canonical("collar"), None);
    }

    #[test]
    fn test_tubular_types() {
        let tubular: Vec<_> = ComponentType::ALL
            .iter()
            .filter(|t| t.is_tubular())
            .collect();
        assert_eq!(tubular.len(), 3);
        assert!(!ComponentType::Motor.is_tubular());
    }

    #[test]
    fn test_catalog_hides_legacy_type() {
        let catalog = ComponentType::catalog();
        assert_eq!(catalog.len(), ComponentType::ALL.len() - 1);
        assert!(!catalog.contains(&ComponentType::StringStabilizer));
    }

    #[test]
    fn test_defaults_are_physical() {
        for t in ComponentType::ALL {
            let d = t.defaults();
            assert!(d.inner_diameter < d.outer_diameter, "{}", t);
            assert!(d.weight_per_unit_length > 0.0);
            assert!(d.unit_length > 0.0);
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&ComponentType::NearBitStabilizer).unwrap();
        assert_eq!(json, "\"near_bit_stabilizer\"");
    }
}
