// ==========================================
// 钻具组合导入引擎 - 部件清单模型
// ==========================================
// 职责: 有序、可直接编辑的部件清单（顺序 = 自上而下的钻柱顺序）
// 红线: 编辑操作从不失败;非法数值保留原值
// 红线: 整体替换（导入/预设）为原子操作,不做部分合并
// ==========================================

use crate::domain::component::ComponentRecord;
use crate::domain::types::{ComponentField, ComponentType};
use crate::editor::error::ComponentListError;
use crate::editor::presets;
use crate::importer::component_importer_trait::TypeResolver;
use crate::importer::type_resolver::TypeResolver as TypeResolverImpl;
use serde::Serialize;
use tracing::debug;

/// 相邻移动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

// ==========================================
// ComponentList - 部件清单
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComponentList {
    components: Vec<ComponentRecord>,
}

impl ComponentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_components(components: Vec<ComponentRecord>) -> Self {
        Self { components }
    }

    /// 从预设创建
    pub fn from_preset(name: &str) -> Result<Self, ComponentListError> {
        let mut list = Self::new();
        list.load_preset(name)?;
        Ok(list)
    }

    pub fn components(&self) -> &[ComponentRecord] {
        &self.components
    }

    pub fn get(&self, index: usize) -> Option<&ComponentRecord> {
        self.components.get(index)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    // ===== 结构变更 =====

    /// 追加一个类型典型参数的部件,返回其索引
    pub fn append(&mut self, component_type: ComponentType) -> usize {
        self.components
            .push(ComponentRecord::with_defaults(component_type));
        self.components.len() - 1
    }

    /// 删除部件,索引越界时无操作
    pub fn remove(&mut self, index: usize) -> Option<ComponentRecord> {
        (index < self.components.len()).then(|| self.components.remove(index))
    }

    /// 与相邻部件交换,两端越界时无操作
    pub fn move_adjacent(&mut self, index: usize, direction: MoveDirection) -> bool {
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => index.checked_add(1),
        };

        match target {
            Some(target) if index < self.components.len() && target < self.components.len() => {
                self.components.swap(index, target);
                true
            }
            _ => false,
        }
    }

    /// 整体替换清单
    pub fn replace_all(&mut self, components: Vec<ComponentRecord>) {
        debug!(from = self.components.len(), to = components.len(), "部件清单整体替换");
        self.components = components;
    }

    /// 加载预设（整体替换）,返回部件数
    pub fn load_preset(&mut self, name: &str) -> Result<usize, ComponentListError> {
        let components =
            presets::build(name).ok_or_else(|| ComponentListError::UnknownPreset(name.to_string()))?;
        let count = components.len();
        self.replace_all(components);
        Ok(count)
    }

    // ===== 字段编辑 =====

    /// 按字段更新部件
    ///
    /// # 规则
    /// - component_type: 替换为新类型的典型外径/内径/线重,位置不变
    /// - unit_length / quantity: total_length 随之即时变化
    /// - 其余数值字段: 直接覆盖
    /// - 非法输入: 保留原值
    ///
    /// # 返回
    /// - true: 已生效
    /// - false: 索引越界或输入非法
    pub fn update_field(&mut self, index: usize, field: ComponentField, value: &str) -> bool {
        let Some(record) = self.components.get_mut(index) else {
            return false;
        };
        let value = value.trim();

        let applied = match field {
            ComponentField::ComponentType => match TypeResolverImpl::default().resolve(value) {
                (component_type, false) => {
                    record.change_type(component_type);
                    true
                }
                (_, true) => false,
            },
            ComponentField::OuterDiameter => {
                parse_number(value).is_some_and(|v| record.set_outer_diameter(v))
            }
            ComponentField::InnerDiameter => {
                parse_number(value).is_some_and(|v| record.set_inner_diameter(v))
            }
            ComponentField::WeightPerUnitLength => {
                parse_number(value).is_some_and(|v| record.set_weight_per_unit_length(v))
            }
            ComponentField::UnitLength => {
                parse_number(value).is_some_and(|v| record.set_unit_length(v))
            }
            ComponentField::Quantity => value
                .parse::<u32>()
                .ok()
                .is_some_and(|q| record.set_quantity(q)),
        };

        if !applied {
            debug!(index, ?field, value, "输入无效,保留原值");
        }
        applied
    }

    // ===== 汇总视图 =====

    /// 钻柱总长
    pub fn total_length(&self) -> f64 {
        self.components.iter().map(ComponentRecord::total_length).sum()
    }

    /// 总根数
    pub fn total_joints(&self) -> u64 {
        self.components.iter().map(|c| u64::from(c.quantity())).sum()
    }

    /// 连接数 = 总根数 - 1（空清单为 0）
    pub fn total_connections(&self) -> u64 {
        self.total_joints().saturating_sub(1)
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok()
}
