// ==========================================
// 钻具组合导入引擎 - 类型解析器实现
// ==========================================
// 职责: 原始类型文本 → 标准类型
// 顺序: 直接匹配 → 别名表 → 兜底类型（置兜底标志）
// ==========================================

use crate::domain::types::ComponentType;
use crate::importer::aliases::lookup_type;
use crate::importer::component_importer_trait::TypeResolver as TypeResolverTrait;

pub struct TypeResolver {
    fallback: ComponentType,
}

impl TypeResolver {
    pub fn new(fallback: ComponentType) -> Self {
        Self { fallback }
    }
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self::new(ComponentType::DrillCollar)
    }
}

impl TypeResolverTrait for TypeResolver {
    fn resolve(&self, raw: &str) -> (ComponentType, bool) {
        let normalized = normalize_type_token(raw);

        if let Some(t) = ComponentType::from_canonical(&normalized) {
            return (t, false);
        }

        match lookup_type(&normalized) {
            Some(t) => (t, false),
            None => (self.fallback, true),
        }
    }
}

/// 归一化类型文本: 去空白、小写、空白/连字符折叠为单个下划线
pub fn normalize_type_token(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;

    for ch in raw.trim().to_lowercase().chars() {
        if ch.is_whitespace() || matches!(ch, '-' | '_') {
            pending_sep = true;
        } else {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(ch);
        }
    }

    out
}
