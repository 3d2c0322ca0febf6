// ==========================================
// 钻具组合导入引擎 - 预设组合目录
// ==========================================
// 职责: 固定的命名起始组合,按名称整体加载
// 顺序: 自上而下（钻杆侧在前,钻头侧在后）
// ==========================================

use crate::domain::component::ComponentRecord;
use crate::domain::types::ComponentType;

/// 常规转盘钻具组合
pub const ROTARY: &str = "rotary";
/// 螺杆钻具组合
pub const MOTOR: &str = "motor";
/// 旋转导向钻具组合
pub const ROTARY_STEERABLE: &str = "rotary_steerable";

/// 全部预设名称
pub const PRESET_NAMES: [&str; 3] = [ROTARY, MOTOR, ROTARY_STEERABLE];

/// 按名称构建预设
pub fn build(name: &str) -> Option<Vec<ComponentRecord>> {
    use ComponentType::{
        BitSub, Crossover, DrillCollar, DrillPipe, FloatSub, Hwdp, Jar, Lwd, Motor, Mwd,
        NearBitStabilizer, ShockSub, Stabilizer,
    };

    let layout: &[(ComponentType, u32)] = match name.trim() {
        ROTARY => &[
            (DrillPipe, 30),
            (Hwdp, 15),
            (Jar, 1),
            (Hwdp, 5),
            (Crossover, 1),
            (DrillCollar, 6),
            (Stabilizer, 1),
            (DrillCollar, 1),
            (Stabilizer, 1),
            (ShockSub, 1),
            (NearBitStabilizer, 1),
            (BitSub, 1),
        ],
        MOTOR => &[
            (DrillPipe, 30),
            (Hwdp, 15),
            (Jar, 1),
            (Hwdp, 5),
            (Crossover, 1),
            (DrillCollar, 3),
            (Mwd, 1),
            (FloatSub, 1),
            (Motor, 1),
        ],
        ROTARY_STEERABLE => &[
            (DrillPipe, 30),
            (Hwdp, 15),
            (Jar, 1),
            (Hwdp, 5),
            (Crossover, 1),
            (DrillCollar, 2),
            (Stabilizer, 1),
            (Lwd, 1),
            (Mwd, 1),
            (FloatSub, 1),
            (NearBitStabilizer, 1),
        ],
        _ => return None,
    };

    Some(
        layout
            .iter()
            .map(|&(component_type, quantity)| {
                let mut record = ComponentRecord::with_defaults(component_type);
                record.set_quantity(quantity);
                record
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_build() {
        for name in PRESET_NAMES {
            let components = build(name).unwrap();
            assert!(!components.is_empty(), "{}", name);
            assert!(components.iter().all(|c| !c.has_bore_mismatch()));
            assert!(components
                .iter()
                .all(|c| c.component_type().is_tubular() || c.quantity() == 1));
        }
    }

    #[test]
    fn test_motor_preset_contains_motor() {
        let components = build(MOTOR).unwrap();
        assert_eq!(components.last().unwrap().component_type(), ComponentType::Motor);
    }

    #[test]
    fn test_unknown_preset() {
        assert!(build("fishing").is_none());
    }
}
