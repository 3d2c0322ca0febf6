// ==========================================
// 钻具组合导入引擎 - 部件记录
// ==========================================
// 职责: 单个部件（一段同规格钻具或一个工具）的强类型记录
// 红线: total_length 只读派生,= unit_length × quantity,不单独存储
// 红线: 非管状类型 quantity 恒为 1
// ==========================================

use crate::domain::types::ComponentType;
use serde::Serialize;

// ==========================================
// ComponentRecord - 部件记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentRecord {
    component_type: ComponentType,
    outer_diameter: f64,         // 外径 (in)
    inner_diameter: f64,         // 内径 (in)
    weight_per_unit_length: f64, // 线重 (lb/ft)
    unit_length: f64,            // 单根长度 (ft)
    quantity: u32,               // 根数
}

impl ComponentRecord {
    /// 创建部件记录
    ///
    /// # 说明
    /// - quantity 下限为 1
    /// - 非管状类型 quantity 强制为 1
    pub fn new(
        component_type: ComponentType,
        outer_diameter: f64,
        inner_diameter: f64,
        weight_per_unit_length: f64,
        unit_length: f64,
        quantity: u32,
    ) -> Self {
        Self {
            component_type,
            outer_diameter,
            inner_diameter,
            weight_per_unit_length,
            unit_length,
            quantity: pin_quantity(component_type, quantity),
        }
    }

    /// 以类型典型参数创建单根部件
    pub fn with_defaults(component_type: ComponentType) -> Self {
        let d = component_type.defaults();
        Self::new(
            component_type,
            d.outer_diameter,
            d.inner_diameter,
            d.weight_per_unit_length,
            d.unit_length,
            1,
        )
    }

    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    pub fn outer_diameter(&self) -> f64 {
        self.outer_diameter
    }

    pub fn inner_diameter(&self) -> f64 {
        self.inner_diameter
    }

    pub fn weight_per_unit_length(&self) -> f64 {
        self.weight_per_unit_length
    }

    pub fn unit_length(&self) -> f64 {
        self.unit_length
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// 总长度 = 单根长度 × 根数
    pub fn total_length(&self) -> f64 {
        self.unit_length * f64::from(self.quantity)
    }

    /// 内径是否不小于外径（物理可疑）
    pub fn has_bore_mismatch(&self) -> bool {
        self.inner_diameter >= self.outer_diameter
    }

    // ===== 变更入口 =====
    // 数值类变更仅接受有限正数,返回是否生效

    /// 切换类型: 外径/内径/线重替换为新类型典型值,长度保留
    pub fn change_type(&mut self, component_type: ComponentType) {
        let d = component_type.defaults();
        self.component_type = component_type;
        self.outer_diameter = d.outer_diameter;
        self.inner_diameter = d.inner_diameter;
        self.weight_per_unit_length = d.weight_per_unit_length;
        self.quantity = pin_quantity(component_type, self.quantity);
    }

    pub fn set_outer_diameter(&mut self, value: f64) -> bool {
        assign_positive(&mut self.outer_diameter, value)
    }

    pub fn set_inner_diameter(&mut self, value: f64) -> bool {
        assign_positive(&mut self.inner_diameter, value)
    }

    pub fn set_weight_per_unit_length(&mut self, value: f64) -> bool {
        assign_positive(&mut self.weight_per_unit_length, value)
    }

    pub fn set_unit_length(&mut self, value: f64) -> bool {
        assign_positive(&mut self.unit_length, value)
    }

    /// 设置根数（0 视为无效输入;非管状类型恒为 1）
    pub fn set_quantity(&mut self, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        self.quantity = pin_quantity(self.component_type, quantity);
        true
    }
}

/// 根数约束: 下限 1,非管状类型固定 1
fn pin_quantity(component_type: ComponentType, quantity: u32) -> u32 {
    if component_type.is_tubular() {
        quantity.max(1)
    } else {
        1
    }
}

fn assign_positive(slot: &mut f64, value: f64) -> bool {
    if value.is_finite() && value > 0.0 {
        *slot = value;
        true
    } else {
        false
    }
}
