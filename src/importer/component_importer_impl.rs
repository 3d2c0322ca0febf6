// ==========================================
// 钻具组合导入引擎 - 导入管道实现
// ==========================================
// 职责: 整合导入流程,从文件到完整替换清单
// 流程: 解码 → 列名归一 → 行映射 → 汇总
// 状态: Idle → Decoding → Mapping → Done(success|warning|error)
// ==========================================

use crate::config::ImportConfigReader;
use crate::domain::component::ComponentRecord;
use crate::domain::import::{ImportOutcome, ImportWarning};
use crate::domain::types::Severity;
use crate::i18n::{t, t_with_args};
use crate::importer::column_normalizer::ColumnNormalizer as ColumnNormalizerImpl;
use crate::importer::component_importer_trait::{
    ColumnNormalizer, ComponentImporter, FileParser, ImportReport, RowMapper, RowOutcome,
};
use crate::importer::decoded_sheet::DecodedSheet;
use crate::importer::error::ImportError;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::row_mapper::RowMapper as RowMapperImpl;
use chrono::Utc;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

// ==========================================
// ImportPhase - 导入状态机
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportPhase {
    Idle,
    Decoding,
    Mapping,
    Done(Severity),
}

impl fmt::Display for ImportPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportPhase::Idle => write!(f, "idle"),
            ImportPhase::Decoding => write!(f, "decoding"),
            ImportPhase::Mapping => write!(f, "mapping"),
            ImportPhase::Done(severity) => write!(f, "done({})", severity),
        }
    }
}

/// Mapping 阶段汇总
#[derive(Debug, Clone, Default)]
pub struct MappingSummary {
    pub components: Vec<ComponentRecord>,
    pub skipped_count: usize,
    pub warnings: Vec<ImportWarning>,
}

// ==========================================
// ComponentImporterImpl - 导入管道实现
// ==========================================
pub struct ComponentImporterImpl {
    file_parser: Arc<dyn FileParser>,
    column_normalizer: Box<dyn ColumnNormalizer>,
    row_mapper: Box<dyn RowMapper>,
    phase: Mutex<ImportPhase>,
}

impl ComponentImporterImpl {
    /// 创建导入管道
    ///
    /// # 参数
    /// - file_parser: 文件解析器（解码在阻塞线程池中执行）
    /// - column_normalizer: 列名归一器
    /// - row_mapper: 行映射器
    pub fn new(
        file_parser: Arc<dyn FileParser>,
        column_normalizer: Box<dyn ColumnNormalizer>,
        row_mapper: Box<dyn RowMapper>,
    ) -> Self {
        Self {
            file_parser,
            column_normalizer,
            row_mapper,
            phase: Mutex::new(ImportPhase::Idle),
        }
    }

    /// 按配置装配标准组件（扩展名分派解码 + 别名归一 + 配置缺省值）
    pub fn from_config<C: ImportConfigReader + ?Sized>(config: &C) -> Self {
        Self::new(
            Arc::new(UniversalFileParser),
            Box::new(ColumnNormalizerImpl),
            Box::new(RowMapperImpl::from_config(config)),
        )
    }

    /// 当前状态（最近一次导入）
    pub fn phase(&self) -> ImportPhase {
        *self.phase.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn transition(&self, next: ImportPhase) {
        let mut phase = self.phase.lock().unwrap_or_else(|e| e.into_inner());
        debug!(from = %*phase, to = %next, "导入状态迁移");
        *phase = next;
    }

    /// Mapping 阶段: 逐行独立处理,单行跳过不影响整批
    pub fn map_sheet(&self, sheet: &DecodedSheet) -> MappingSummary {
        let mut summary = MappingSummary::default();

        for row in &sheet.rows {
            let normalized = self.column_normalizer.normalize_row(&row.cells);
            match self.row_mapper.map_row(&normalized, row.row_number) {
                RowOutcome::Mapped { record, warnings } => {
                    summary.components.push(record);
                    summary.warnings.extend(warnings);
                }
                RowOutcome::Skipped => {
                    debug!(row_number = row.row_number, "无部件类型,跳过");
                    summary.skipped_count += 1;
                }
            }
        }

        summary
    }

    fn finish(
        &self,
        import_id: String,
        file_name: Option<String>,
        summary: MappingSummary,
        message: String,
    ) -> ImportReport {
        let imported_count = summary.components.len();
        let status = ImportOutcome::status_for(imported_count, summary.warnings.len());
        self.transition(ImportPhase::Done(status));

        let components = (imported_count > 0).then_some(summary.components);
        ImportReport {
            outcome: ImportOutcome {
                import_id,
                file_name,
                imported_count,
                skipped_count: summary.skipped_count,
                warnings: summary.warnings,
                status,
                message,
                finished_at: Utc::now(),
            },
            components,
        }
    }
}

#[async_trait::async_trait]
impl ComponentImporter for ComponentImporterImpl {
    #[instrument(skip(self, file_path), fields(import_id = tracing::field::Empty, file = %file_path.display()))]
    async fn import_file(&self, file_path: &Path) -> ImportReport {
        let import_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("import_id", import_id.as_str());
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());

        info!(import_id = %import_id, "开始导入部件清单");

        // === 阶段 1: 解码 ===
        self.transition(ImportPhase::Decoding);
        let parser = Arc::clone(&self.file_parser);
        let path = file_path.to_path_buf();
        let decoded = tokio::task::spawn_blocking(move || parser.parse_to_sheet(&path))
            .await
            .map_err(|e| ImportError::DecodeTaskFailed(e.to_string()))
            .and_then(|result| result);

        let sheet = match decoded {
            Ok(sheet) => sheet,
            Err(e) => {
                error!(error = %e, "文件解码失败");
                let message =
                    t_with_args("import.decode_failed", &[("reason", e.to_string().as_str())]);
                return self.finish(import_id, file_name, MappingSummary::default(), message);
            }
        };
        info!(columns = sheet.headers.len(), rows = sheet.rows.len(), "文件解码完成");

        // === 阶段 2: 映射 ===
        self.transition(ImportPhase::Mapping);
        let summary = self.map_sheet(&sheet);
        info!(
            imported = summary.components.len(),
            skipped = summary.skipped_count,
            warnings = summary.warnings.len(),
            "行映射完成"
        );

        // === 阶段 3: 汇总 ===
        let message = if summary.components.is_empty() {
            let err = ImportError::NoImportableRows {
                columns: sheet.columns_seen(),
            };
            error!(error = %err, "无可导入部件");
            let columns = match sheet.columns_seen() {
                cols if cols.is_empty() => t("import.no_columns"),
                cols => cols.join(", "),
            };
            t_with_args("import.no_rows", &[("columns", columns.as_str())])
        } else {
            let imported = summary.components.len().to_string();
            let skipped = summary.skipped_count.to_string();
            if summary.warnings.is_empty() {
                t_with_args(
                    "import.success",
                    &[("imported", imported.as_str()), ("skipped", skipped.as_str())],
                )
            } else {
                let warnings = summary.warnings.len().to_string();
                t_with_args(
                    "import.success_with_warnings",
                    &[
                        ("imported", imported.as_str()),
                        ("skipped", skipped.as_str()),
                        ("warnings", warnings.as_str()),
                    ],
                )
            }
        };

        let report = self.finish(import_id, file_name, summary, message);
        info!(status = %report.outcome.status, "部件清单导入完成");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImportSettings;
    use crate::importer::decoded_sheet::{RawCell, SourceRow};
    use crate::importer::error::ImportResult;
    use std::path::PathBuf;

    fn text_row(row_number: usize, pairs: &[(&str, &str)]) -> SourceRow {
        SourceRow {
            row_number,
            cells: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), RawCell::Text(v.to_string())))
                .collect(),
        }
    }

    /// 返回固定工作表的解析器
    struct FixedParser(DecodedSheet);

    impl FileParser for FixedParser {
        fn parse_to_sheet(&self, _file_path: &Path) -> ImportResult<DecodedSheet> {
            Ok(self.0.clone())
        }
    }

    struct FailingParser;

    impl FileParser for FailingParser {
        fn parse_to_sheet(&self, file_path: &Path) -> ImportResult<DecodedSheet> {
            Err(ImportError::SpreadsheetParseError(format!(
                "bad archive: {}",
                file_path.display()
            )))
        }
    }

    fn importer_with(parser: Arc<dyn FileParser>) -> ComponentImporterImpl {
        ComponentImporterImpl::new(
            parser,
            Box::new(ColumnNormalizerImpl),
            Box::new(RowMapperImpl::from_config(&ImportSettings::default())),
        )
    }

    #[test]
    fn test_map_sheet_aggregates() {
        let importer = ComponentImporterImpl::from_config(&ImportSettings::default());
        let sheet = DecodedSheet {
            headers: vec!["Type".into(), "OD".into(), "ID".into()],
            rows: vec![
                text_row(2, &[("Type", "dc"), ("OD", "6.75"), ("ID", "2.813")]),
                text_row(3, &[("Type", ""), ("OD", "6.75"), ("ID", "2.813")]),
                text_row(6, &[("Type", "gizmo"), ("OD", "4"), ("ID", "5")]),
            ],
        };

        let summary = importer.map_sheet(&sheet);
        assert_eq!(summary.components.len(), 2);
        assert_eq!(summary.skipped_count, 1);
        assert_eq!(summary.warnings.len(), 2);
        assert!(summary.warnings.iter().all(|w| w.row_number == 6));
    }

    #[tokio::test]
    async fn test_decode_failure_is_error_outcome() {
        let importer = importer_with(Arc::new(FailingParser));
        assert_eq!(importer.phase(), ImportPhase::Idle);

        let report = importer.import_file(&PathBuf::from("broken.xlsx")).await;

        assert_eq!(report.outcome.status, Severity::Error);
        assert_eq!(report.outcome.imported_count, 0);
        assert!(report.components.is_none());
        assert!(report.outcome.message.contains("bad archive"));
        assert_eq!(importer.phase(), ImportPhase::Done(Severity::Error));
    }

    #[tokio::test]
    async fn test_no_type_column_names_columns() {
        let sheet = DecodedSheet {
            headers: vec!["Part".into(), "Diameter".into()],
            rows: vec![text_row(2, &[("Part", "collar"), ("Diameter", "6.75")])],
        };
        let importer = importer_with(Arc::new(FixedParser(sheet)));

        let report = importer.import_file(Path::new("bha.csv")).await;

        assert_eq!(report.outcome.status, Severity::Error);
        assert_eq!(report.outcome.skipped_count, 1);
        assert!(report.outcome.message.contains("Part"));
        assert!(report.outcome.message.contains("Diameter"));
    }

    #[tokio::test]
    async fn test_warnings_do_not_downgrade_success() {
        let sheet = DecodedSheet {
            headers: vec!["type".into()],
            rows: vec![text_row(2, &[("type", "unobtanium_sub")])],
        };
        let importer = importer_with(Arc::new(FixedParser(sheet)));

        let report = importer.import_file(Path::new("bha.csv")).await;

        assert_eq!(report.outcome.status, Severity::Warning);
        assert!(report.outcome.is_applied());
        assert_eq!(report.components.map(|c| c.len()), Some(1));
        assert_eq!(report.outcome.file_name.as_deref(), Some("bha.csv"));
        assert_eq!(importer.phase(), ImportPhase::Done(Severity::Warning));
    }
}
