// ==========================================
// 钻具组合导入引擎 - 导入结果模型
// ==========================================
// 职责: 单次导入尝试的汇总结果（不持久化,仅反馈一次）
// ==========================================

use crate::domain::types::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ImportWarning - 行级警告
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportWarning {
    pub row_number: usize, // 源文件行号（表头为第 1 行）
    pub raw_type: String,  // 原始类型文本,用于定位
    pub kind: WarningKind,
    pub message: String, // 面向用户的描述（已本地化）
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WarningKind {
    /// 类型无法识别,已按默认类型处理
    UnknownType { fallback: String },
    /// 内径不小于外径,记录保留
    BoreMismatch {
        outer_diameter: f64,
        inner_diameter: f64,
    },
}

// ==========================================
// ImportOutcome - 导入结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub import_id: String,             // 导入尝试 ID（日志关联）
    pub file_name: Option<String>,     // 源文件名
    pub imported_count: usize,         // 生成记录的行数
    pub skipped_count: usize,          // 类型为空被跳过的行数
    pub warnings: Vec<ImportWarning>,  // 警告明细
    pub status: Severity,              // success / warning / error
    pub message: String,               // 反馈消息
    pub finished_at: DateTime<Utc>,    // 完成时间
}

impl ImportOutcome {
    /// 是否替换了部件清单
    pub fn is_applied(&self) -> bool {
        self.status != Severity::Error
    }

    /// 按记录数与警告数确定状态
    pub fn status_for(imported_count: usize, warning_count: usize) -> Severity {
        match (imported_count, warning_count) {
            (0, _) => Severity::Error,
            (_, 0) => Severity::Success,
            _ => Severity::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for() {
        assert_eq!(ImportOutcome::status_for(0, 0), Severity::Error);
        assert_eq!(ImportOutcome::status_for(0, 3), Severity::Error);
        assert_eq!(ImportOutcome::status_for(5, 0), Severity::Success);
        assert_eq!(ImportOutcome::status_for(5, 1), Severity::Warning);
    }

    #[test]
    fn test_warning_kind_serialization() {
        let kind = WarningKind::UnknownType {
            fallback: "drill_collar".to_string(),
        };
        let json = serde_json::to_value(&kind).unwrap();
        assert_eq!(json["kind"], "unknown_type");
        assert_eq!(json["fallback"], "drill_collar");
    }
}
