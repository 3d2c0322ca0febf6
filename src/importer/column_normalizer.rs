// ==========================================
// 钻具组合导入引擎 - 列名归一器实现
// ==========================================
// 职责: 源列名 → 标准字段名（容忍语言/大小写/标点/缩写差异）
// ==========================================

use crate::importer::aliases::lookup_column;
use crate::importer::component_importer_trait::{
    ColumnNormalizer as ColumnNormalizerTrait, NormalizedRow,
};
use crate::importer::decoded_sheet::RawRow;

pub struct ColumnNormalizer;

impl ColumnNormalizerTrait for ColumnNormalizer {
    fn normalize_row(&self, row: &RawRow) -> NormalizedRow {
        let mut normalized = NormalizedRow::with_capacity(row.len());

        for (raw_key, cell) in row {
            let key = canonical_column(raw_key);
            let value = cell.to_text();

            match normalized.get(&key) {
                Some(existing) if !existing.is_empty() => {}
                _ => {
                    normalized.insert(key, value);
                }
            }
        }

        normalized
    }
}

/// 归一化列名
///
/// # 规则
/// 1. 去首尾空白、转小写
/// 2. 连续的空白 / 括号 / 斜杠折叠为单个下划线
/// 3. 去除首尾下划线
pub fn normalize_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;

    for ch in raw.trim().to_lowercase().chars() {
        if ch.is_whitespace() || matches!(ch, '(' | ')' | '/' | '\\' | '_') {
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

/// 归一化列名并查别名表,未命中时原样返回归一化列名
pub fn canonical_column(raw: &str) -> String {
    let key = normalize_key(raw);
    match lookup_column(&key) {
        Some(canonical) => canonical.to_string(),
        None => key,
    }
}
