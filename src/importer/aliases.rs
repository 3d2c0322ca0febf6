// ==========================================
// 钻具组合导入引擎 - 别名表
// ==========================================
// 职责: 列名别名表（归一化列名 → 标准字段）
//       类型别名表（归一化类型文本 → 标准类型）
// 红线: 进程级只读数据,首次访问时初始化,运行期不修改
// 覆盖: 英文 / 西班牙文 / 中文常见写法
// ==========================================

use crate::domain::types::ComponentType;
use std::collections::HashMap;
use std::sync::LazyLock;

// ===== 标准字段名 =====
pub const FIELD_TYPE: &str = "type";
pub const FIELD_OD: &str = "od";
pub const FIELD_ID_INNER: &str = "id_inner";
pub const FIELD_LENGTH_FT: &str = "length_ft";
pub const FIELD_UNIT_LENGTH_FT: &str = "unit_length_ft";
pub const FIELD_QUANTITY: &str = "quantity";
pub const FIELD_WEIGHT_PPF: &str = "weight_ppf";

/// 全部标准字段
pub const CANONICAL_FIELDS: [&str; 7] = [
    FIELD_TYPE,
    FIELD_OD,
    FIELD_ID_INNER,
    FIELD_LENGTH_FT,
    FIELD_UNIT_LENGTH_FT,
    FIELD_QUANTITY,
    FIELD_WEIGHT_PPF,
];

// 键均为归一化后的形式（小写、下划线连接）
static COLUMN_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let table: &[(&str, &[&str])] = &[
        (
            FIELD_TYPE,
            &[
                "component_type", "component", "tool", "tool_type", "component_name",
                "tipo", "componente", "tipo_de_componente", "herramienta",
                "类型", "部件类型", "钻具类型",
            ],
        ),
        (
            FIELD_OD,
            &[
                "od_in", "outer_diameter", "outside_diameter", "outer_diameter_in", "o.d.",
                "diametro_exterior", "diámetro_exterior", "de",
                "外径",
            ],
        ),
        (
            FIELD_ID_INNER,
            &[
                "id", "id_in", "inner_diameter", "inside_diameter", "inner_diameter_in", "bore",
                "diametro_interior", "diámetro_interior", "di",
                "内径", "水眼",
            ],
        ),
        (
            FIELD_LENGTH_FT,
            &[
                "length", "total_length", "total_length_ft", "len", "longitud",
                "longitud_ft", "longitud_total",
                "长度", "总长", "总长度",
            ],
        ),
        (
            FIELD_UNIT_LENGTH_FT,
            &[
                "unit_length", "joint_length", "joint_length_ft", "length_per_joint",
                "longitud_unitaria", "longitud_por_junta",
                "单根长度", "单根长",
            ],
        ),
        (
            FIELD_QUANTITY,
            &[
                "qty", "count", "joints", "num_joints", "no_of_joints", "no._of_joints", "number_of_joints",
                "cantidad", "juntas",
                "数量", "根数",
            ],
        ),
        (
            FIELD_WEIGHT_PPF,
            &[
                "weight", "weight_lb_ft", "weight_lbs_ft", "ppf", "unit_weight", "nominal_weight",
                "peso", "peso_lb_ft",
                "线重", "单位重量", "重量",
            ],
        ),
    ];

    table
        .iter()
        .flat_map(|(canonical, aliases)| aliases.iter().map(move |alias| (*alias, *canonical)))
        .collect()
});

static TYPE_ALIASES: LazyLock<HashMap<&'static str, ComponentType>> = LazyLock::new(|| {
    let table: &[(ComponentType, &[&str])] = &[
        (
            ComponentType::DrillCollar,
            &[
                "collar", "collars", "dc", "drill_collars", "spiral_collar", "spiral_drill_collar",
                "lastrabarrena", "lastrabarrenas", "portamecha", "portamechas",
                "钻铤",
            ],
        ),
        (
            ComponentType::DrillPipe,
            &[
                "dp", "pipe", "drillpipe", "tuberia_de_perforacion", "tubería_de_perforación",
                "barra_de_sondeo",
                "钻杆",
            ],
        ),
        (
            ComponentType::Hwdp,
            &[
                "hw", "hwdp", "heavy_weight", "heavyweight", "heavy_weight_drill_pipe",
                "heavyweight_drill_pipe", "heavy_wall_drill_pipe", "tuberia_pesada",
                "tubería_pesada",
                "加重钻杆",
            ],
        ),
        (
            ComponentType::Crossover,
            &["xo", "x_over", "cross_over", "crossover_sub", "reduccion", "reducción", "配合接头", "变扣接头"],
        ),
        (ComponentType::Sub, &["saver_sub", "pup", "pup_joint", "sustituto", "接头"]),
        (
            ComponentType::FloatSub,
            &["float", "float_valve", "float_valve_sub", "valvula_flotadora", "浮阀", "浮阀接头"],
        ),
        (ComponentType::BitSub, &["bit_sub_with_float", "bitsub", "portabroca", "钻头接头"]),
        (
            ComponentType::ShockSub,
            &["shock", "shock_tool", "shock_absorber", "amortiguador", "减震器"],
        ),
        (
            ComponentType::Stabilizer,
            &["stab", "stabiliser", "blade_stabilizer", "estabilizador", "扶正器", "稳定器"],
        ),
        (
            ComponentType::NearBitStabilizer,
            &[
                "nbs", "near_bit", "near_bit_stab", "nb_stab", "nearbit_stabilizer",
                "estabilizador_cerca_de_la_barrena",
                "近钻头扶正器",
            ],
        ),
        (ComponentType::StringStabilizer, &["string_stab", "钻柱扶正器"]),
        (
            ComponentType::Motor,
            &["mud_motor", "pdm", "downhole_motor", "motor_de_fondo", "螺杆", "螺杆钻具", "动力钻具"],
        ),
        (ComponentType::Mwd, &["mwd_tool", "measurement_while_drilling", "随钻测量"]),
        (ComponentType::Lwd, &["lwd_tool", "logging_while_drilling", "随钻测井"]),
        (
            ComponentType::Jar,
            &["jars", "drilling_jar", "hydraulic_jar", "martillo", "martillo_de_perforacion", "震击器"],
        ),
        (
            ComponentType::Reamer,
            &["hole_opener", "roller_reamer", "underreamer", "ampliador", "rimador", "扩眼器"],
        ),
    ];

    table
        .iter()
        .flat_map(|(canonical, aliases)| aliases.iter().map(move |alias| (*alias, *canonical)))
        .collect()
});

/// 查列名别名（参数须为归一化列名）
pub fn lookup_column(normalized: &str) -> Option<&'static str> {
    COLUMN_ALIASES.get(normalized).copied()
}

/// 查类型别名（参数须为归一化类型文本）
pub fn lookup_type(normalized: &str) -> Option<ComponentType> {
    TYPE_ALIASES.get(normalized).copied()
}
