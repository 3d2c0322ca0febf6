// ==========================================
// 钻具组合导入引擎 - 导入层
// ==========================================
// 职责: 外部表格文件 → 经校验的强类型部件清单
// 支持: CSV / TSV / 电子表格
// ==========================================

// 模块声明
pub mod aliases;
pub mod column_normalizer;
pub mod component_importer_impl;
pub mod component_importer_trait;
pub mod decoded_sheet;
pub mod error;
pub mod file_parser;
pub mod row_mapper;
pub mod type_resolver;

// 重导出核心类型
pub use column_normalizer::ColumnNormalizer as ColumnNormalizerImpl;
pub use component_importer_impl::{ComponentImporterImpl, ImportPhase, MappingSummary};
pub use decoded_sheet::{DecodedSheet, RawCell, RawRow, SourceRow};
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, SpreadsheetParser, UniversalFileParser};
pub use row_mapper::RowMapper as RowMapperImpl;
pub use type_resolver::TypeResolver as TypeResolverImpl;

// 重导出 Trait 接口
pub use component_importer_trait::{
    ColumnNormalizer, ComponentImporter, FileParser, ImportReport, NormalizedRow, RowMapper,
    RowOutcome, TypeResolver,
};
