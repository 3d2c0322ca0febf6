// ==========================================
// 钻具组合导入引擎 - 行映射器实现
// ==========================================
// 阶段: Mapping（单行）
// 职责: 类型解析 + 数值解析（带缺省值）+ 长度派生 + 物理合理性校验
// 红线: 唯一的"弱类型 → 强类型"转换点
// 红线: total_length 永远由 unit_length × quantity 得出,不取自源文件
// ==========================================

use crate::config::ImportConfigReader;
use crate::domain::component::ComponentRecord;
use crate::domain::import::{ImportWarning, WarningKind};
use crate::importer::aliases::{
    FIELD_ID_INNER, FIELD_LENGTH_FT, FIELD_OD, FIELD_QUANTITY, FIELD_TYPE, FIELD_UNIT_LENGTH_FT,
    FIELD_WEIGHT_PPF,
};
use crate::importer::component_importer_trait::{
    NormalizedRow, RowMapper as RowMapperTrait, RowOutcome, TypeResolver,
};
use crate::importer::type_resolver::TypeResolver as TypeResolverImpl;
use crate::i18n::t_with_args;
use tracing::warn;

pub struct RowMapper {
    type_resolver: Box<dyn TypeResolver>,
    default_od: f64,
    default_id: f64,
    default_weight: f64,
}

impl RowMapper {
    /// 按配置创建（缺省尺寸 + 兜底类型）
    pub fn from_config<C: ImportConfigReader + ?Sized>(config: &C) -> Self {
        Self {
            type_resolver: Box::new(TypeResolverImpl::new(config.fallback_type())),
            default_od: config.default_outer_diameter(),
            default_id: config.default_inner_diameter(),
            default_weight: config.default_weight_ppf(),
        }
    }

    /// 替换类型解析器
    pub fn with_type_resolver(mut self, type_resolver: Box<dyn TypeResolver>) -> Self {
        self.type_resolver = type_resolver;
        self
    }
}

impl RowMapperTrait for RowMapper {
    fn map_row(&self, row: &NormalizedRow, row_number: usize) -> RowOutcome {
        // 无类型: 空白行/尾部行,跳过不告警
        let raw_type = match field(row, FIELD_TYPE) {
            Some(v) => v,
            None => return RowOutcome::Skipped,
        };

        let mut warnings = Vec::new();
        let row_label = row_number.to_string();

        let (component_type, used_fallback) = self.type_resolver.resolve(raw_type);
        if used_fallback {
            let message = t_with_args(
                "import.unknown_type",
                &[
                    ("row", row_label.as_str()),
                    ("raw", raw_type),
                    ("fallback", component_type.as_str()),
                ],
            );
            warn!(row_number, raw_type, fallback = %component_type, "未知部件类型,使用兜底类型");
            warnings.push(ImportWarning {
                row_number,
                raw_type: raw_type.to_string(),
                kind: WarningKind::UnknownType {
                    fallback: component_type.as_str().to_string(),
                },
                message,
            });
        }

        let od = parse_positive(row, FIELD_OD).unwrap_or(self.default_od);
        let id = parse_positive(row, FIELD_ID_INNER).unwrap_or(self.default_id);
        let weight = parse_positive(row, FIELD_WEIGHT_PPF).unwrap_or(self.default_weight);

        if id >= od {
            let message = t_with_args(
                "import.dimension_mismatch",
                &[
                    ("row", row_label.as_str()),
                    ("raw", raw_type),
                    ("id", id.to_string().as_str()),
                    ("od", od.to_string().as_str()),
                ],
            );
            warn!(row_number, raw_type, od, id, "内径不小于外径");
            warnings.push(ImportWarning {
                row_number,
                raw_type: raw_type.to_string(),
                kind: WarningKind::BoreMismatch {
                    outer_diameter: od,
                    inner_diameter: id,
                },
                message,
            });
        }

        // 非管状类型先固定为 1,再做长度派生
        let quantity = if component_type.is_tubular() {
            parse_quantity(row)
        } else {
            1
        };

        let unit_length = resolve_unit_length(
            parse_positive(row, FIELD_UNIT_LENGTH_FT),
            parse_positive(row, FIELD_LENGTH_FT),
            quantity,
        )
        .unwrap_or_else(|| component_type.defaults().unit_length);

        RowOutcome::Mapped {
            record: ComponentRecord::new(component_type, od, id, weight, unit_length, quantity),
            warnings,
        }
    }
}

/// 单根长度三路决策
///
/// 1. 有正的 unit_length_ft → 直接使用
/// 2. quantity > 1 → length_ft 视为总长,按根数均分
/// 3. 否则 → 单根,长度即 length_ft
fn resolve_unit_length(unit_length: Option<f64>, length: Option<f64>, quantity: u32) -> Option<f64> {
    if let Some(unit) = unit_length {
        return Some(unit);
    }
    let total = length?;
    if quantity > 1 {
        Some(total / f64::from(quantity))
    } else {
        Some(total)
    }
}

/// 取非空字段值
fn field<'a>(row: &'a NormalizedRow, key: &str) -> Option<&'a str> {
    row.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// 解析有限正数,缺失/非法/非正视为无值
fn parse_positive(row: &NormalizedRow, key: &str) -> Option<f64> {
    field(row, key)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// 解析根数: 正整数,零/负数/非法一律为 1
fn parse_quantity(row: &NormalizedRow) -> u32 {
    let Some(value) = field(row, FIELD_QUANTITY) else {
        return 1;
    };

    let parsed = match value.parse::<i64>() {
        Ok(n) => n as f64,
        Err(_) => value.parse::<f64>().map(f64::floor).unwrap_or(0.0),
    };

    if parsed.is_finite() && parsed >= 1.0 {
        parsed.min(f64::from(u32::MAX)) as u32
    } else {
        1
    }
}
