// ==========================================
// 钻具组合导入引擎 - 导入管道 Trait
// ==========================================
// 职责: 定义导入各阶段接口（不包含实现）
// 流程: 解码 → 列名归一 → 类型解析 → 行映射 → 汇总
// ==========================================

use crate::domain::component::ComponentRecord;
use crate::domain::import::{ImportOutcome, ImportWarning};
use crate::domain::types::ComponentType;
use crate::importer::decoded_sheet::{DecodedSheet, RawRow};
use crate::importer::error::ImportResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

/// 归一化后的行: 标准字段名 → 去空白文本
pub type NormalizedRow = HashMap<String, String>;

// ==========================================
// ComponentImporter Trait
// ==========================================
// 用途: 导入主接口
// 实现者: ComponentImporterImpl
#[async_trait]
pub trait ComponentImporter: Send + Sync {
    /// 从文件导入部件清单
    ///
    /// # 参数
    /// - file_path: 源文件路径（按扩展名选择解码器）
    ///
    /// # 返回
    /// - ImportReport: 汇总结果 + 成功时的完整替换清单
    ///
    /// # 说明
    /// - 不返回 Err: 所有失败折叠为 status = error 的 ImportOutcome
    async fn import_file(&self, file_path: &Path) -> ImportReport;
}

/// 一次导入的完整产出
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub outcome: ImportOutcome,
    /// 至少一条记录时为 Some,用于整体替换部件清单
    pub components: Option<Vec<ComponentRecord>>,
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（Decoding 阶段）
// 实现者: CsvParser, SpreadsheetParser, UniversalFileParser
pub trait FileParser: Send + Sync {
    /// 解析文件为表头 + 原始行
    fn parse_to_sheet(&self, file_path: &Path) -> ImportResult<DecodedSheet>;
}

// ==========================================
// ColumnNormalizer Trait
// ==========================================
// 用途: 原始列名 → 标准字段名
// 实现者: ColumnNormalizerImpl
pub trait ColumnNormalizer: Send + Sync {
    /// 归一化一行（纯函数,无副作用）
    ///
    /// # 说明
    /// - 无法识别的列以归一化列名原样保留
    /// - 同一标准字段出现多列时,按表头顺序取第一个非空值
    fn normalize_row(&self, row: &RawRow) -> NormalizedRow;
}

// ==========================================
// TypeResolver Trait
// ==========================================
// 用途: 原始类型文本 → 标准类型
// 实现者: TypeResolverImpl
pub trait TypeResolver: Send + Sync {
    /// 解析类型
    ///
    /// # 返回
    /// - (类型, 是否使用了兜底类型)
    ///
    /// # 说明
    /// - 全函数: 总返回合法标准类型,从不报错
    /// - 兜底标志由调用方转为用户可见警告
    fn resolve(&self, raw: &str) -> (ComponentType, bool);
}

// ==========================================
// RowMapper Trait
// ==========================================
// 用途: 归一化行 → 部件记录（唯一的类型转换边界）
// 实现者: RowMapperImpl
pub trait RowMapper: Send + Sync {
    /// 映射一行
    ///
    /// # 参数
    /// - row: 归一化后的行
    /// - row_number: 源文件行号（用于警告定位）
    fn map_row(&self, row: &NormalizedRow, row_number: usize) -> RowOutcome;
}

/// 单行映射结果
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// 生成记录（可能附带警告）
    Mapped {
        record: ComponentRecord,
        warnings: Vec<ImportWarning>,
    },
    /// type 为空,跳过且不告警
    Skipped,
}
