// ==========================================
// 钻具组合导入引擎 - 编辑器 API
// ==========================================
// 职责: 界面层门面,持有部件清单、文件选择句柄与导入管道
// 红线: 每次导入尝试恰好回调一次反馈（消息 + 严重级别）
// 红线: 导入失败时清单保持不变;成功时整体替换
// 并发: 多个导入并发完成时,最后完成者覆盖清单
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ImportSettings;
use crate::domain::component::ComponentRecord;
use crate::domain::import::ImportOutcome;
use crate::domain::types::{ComponentField, ComponentType, Severity};
use crate::editor::{write_csv_file, CalculationPayload, ComponentList, MoveDirection};
use crate::i18n::t_with_args;
use crate::importer::{ComponentImporter, ComponentImporterImpl};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};

/// 反馈回调: (消息, 严重级别)
pub type FeedbackCallback = Box<dyn Fn(&str, Severity) + Send + Sync>;

// ==========================================
// FileSelection - 文件选择句柄
// ==========================================
// 选择同一路径不触发变更;每次导入后清空,允许再次选择同一文件
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileSelection {
    current: Option<PathBuf>,
}

impl FileSelection {
    /// 选择文件
    ///
    /// # 返回
    /// - true: 选择发生变化
    /// - false: 与当前选择相同
    pub fn select<P: Into<PathBuf>>(&mut self, path: P) -> bool {
        let path = path.into();
        if self.current.as_ref() == Some(&path) {
            return false;
        }
        self.current = Some(path);
        true
    }

    pub fn current(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}

/// 类型下拉选项
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeOption {
    pub id: &'static str,
    pub label: String,
}

// ==========================================
// BhaEditorApi
// ==========================================
pub struct BhaEditorApi {
    list: RwLock<ComponentList>,
    selection: Mutex<FileSelection>,
    importer: Arc<dyn ComponentImporter>,
    feedback: FeedbackCallback,
}

impl BhaEditorApi {
    /// 创建编辑器 API（初始清单为空）
    ///
    /// # 参数
    /// - importer: 导入管道
    /// - feedback: 导入/预设结果的反馈回调
    pub fn new(importer: Arc<dyn ComponentImporter>, feedback: FeedbackCallback) -> Self {
        Self {
            list: RwLock::new(ComponentList::new()),
            selection: Mutex::new(FileSelection::default()),
            importer,
            feedback,
        }
    }

    /// 按配置装配标准导入管道
    pub fn from_settings(settings: &ImportSettings, feedback: FeedbackCallback) -> Self {
        Self::new(
            Arc::new(ComponentImporterImpl::from_config(settings)),
            feedback,
        )
    }

    fn read_list(&self) -> ApiResult<RwLockReadGuard<'_, ComponentList>> {
        self.list.read().map_err(|_| ApiError::ListLockPoisoned)
    }

    fn write_list(&self) -> ApiResult<RwLockWriteGuard<'_, ComponentList>> {
        self.list.write().map_err(|_| ApiError::ListLockPoisoned)
    }

    // ==========================================
    // 文件选择与导入
    // ==========================================

    /// 选择待导入文件
    pub fn select_file<P: Into<PathBuf>>(&self, path: P) -> bool {
        self.selection().select(path)
    }

    /// 当前选择的文件
    pub fn selected_file(&self) -> Option<PathBuf> {
        self.selection().current().map(Path::to_path_buf)
    }

    fn selection(&self) -> MutexGuard<'_, FileSelection> {
        self.selection.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 导入当前选择的文件
    ///
    /// # 返回
    /// - Ok(None): 未选择文件
    /// - Ok(Some(outcome)): 导入结果（error 状态同样以 Ok 返回）
    pub async fn import_selected(&self) -> ApiResult<Option<ImportOutcome>> {
        match self.selected_file() {
            Some(path) => self.import_file(&path).await.map(Some),
            None => Ok(None),
        }
    }

    /// 导入指定文件
    ///
    /// # 流程
    /// 1. 运行导入管道（解码在阻塞线程池中执行）
    /// 2. 有记录时整体替换清单
    /// 3. 反馈回调一次
    /// 4. 清空文件选择
    pub async fn import_file(&self, path: &Path) -> ApiResult<ImportOutcome> {
        let report = self.importer.import_file(path).await;
        let outcome = report.outcome;

        let applied = match report.components {
            Some(components) => self.write_list().map(|mut list| list.replace_all(components)),
            None => Ok(()),
        };

        self.selection().reset();

        match applied {
            Ok(()) => {
                info!(
                    import_id = %outcome.import_id,
                    status = %outcome.status,
                    applied = outcome.is_applied(),
                    "导入结果已应用"
                );
                (self.feedback)(&outcome.message, outcome.status);
                Ok(outcome)
            }
            Err(e) => {
                warn!(import_id = %outcome.import_id, error = %e, "导入结果未能应用");
                (self.feedback)(&e.to_string(), Severity::Error);
                Err(e)
            }
        }
    }

    // ==========================================
    // 预设
    // ==========================================

    /// 加载预设（整体替换）
    pub fn load_preset(&self, name: &str) -> ApiResult<usize> {
        let result = self.write_list()?.load_preset(name);
        match result {
            Ok(count) => {
                let count_text = count.to_string();
                let message = t_with_args(
                    "preset.loaded",
                    &[("name", name), ("count", count_text.as_str())],
                );
                (self.feedback)(&message, Severity::Success);
                Ok(count)
            }
            Err(e) => {
                let message = t_with_args("preset.unknown", &[("name", name)]);
                (self.feedback)(&message, Severity::Error);
                Err(e.into())
            }
        }
    }

    // ==========================================
    // 编辑
    // ==========================================

    pub fn append(&self, component_type: ComponentType) -> ApiResult<usize> {
        Ok(self.write_list()?.append(component_type))
    }

    pub fn remove(&self, index: usize) -> ApiResult<Option<ComponentRecord>> {
        Ok(self.write_list()?.remove(index))
    }

    pub fn move_adjacent(&self, index: usize, direction: MoveDirection) -> ApiResult<bool> {
        Ok(self.write_list()?.move_adjacent(index, direction))
    }

    /// 更新字段,非法输入保留原值并返回 false
    pub fn update_field(&self, index: usize, field: ComponentField, value: &str) -> ApiResult<bool> {
        Ok(self.write_list()?.update_field(index, field, value))
    }

    // ==========================================
    // 查询与导出
    // ==========================================

    /// 清单快照
    pub fn snapshot(&self) -> ApiResult<ComponentList> {
        Ok(self.read_list()?.clone())
    }

    pub fn calculation_payload(&self) -> ApiResult<CalculationPayload> {
        Ok(CalculationPayload::from(&*self.read_list()?))
    }

    /// 导出 CSV（可原样再导入）
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> ApiResult<()> {
        let list = self.snapshot()?;
        write_csv_file(&list, path.as_ref())?;
        info!(path = %path.as_ref().display(), components = list.len(), "部件清单已导出");
        Ok(())
    }

    /// 可选类型目录（按当前语言）
    pub fn catalog(&self) -> Vec<TypeOption> {
        ComponentType::catalog()
            .into_iter()
            .map(|t| TypeOption {
                id: t.as_str(),
                label: t.label(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::ImportReport;
    use chrono::Utc;

    type FeedbackLog = Arc<Mutex<Vec<(String, Severity)>>>;

    /// 返回固定结果的导入器
    struct StubImporter {
        components: Option<Vec<ComponentRecord>>,
        status: Severity,
    }

    #[async_trait::async_trait]
    impl ComponentImporter for StubImporter {
        async fn import_file(&self, file_path: &Path) -> ImportReport {
            ImportReport {
                outcome: ImportOutcome {
                    import_id: "stub".to_string(),
                    file_name: file_path.file_name().map(|n| n.to_string_lossy().into_owned()),
                    imported_count: self.components.as_ref().map_or(0, Vec::len),
                    skipped_count: 0,
                    warnings: Vec::new(),
                    status: self.status,
                    message: format!("stub {}", self.status),
                    finished_at: Utc::now(),
                },
                components: self.components.clone(),
            }
        }
    }

    fn api_with(importer: StubImporter) -> (BhaEditorApi, FeedbackLog) {
        let log: FeedbackLog = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let api = BhaEditorApi::new(
            Arc::new(importer),
            Box::new(move |message: &str, severity: Severity| {
                sink.lock().unwrap().push((message.to_string(), severity));
            }),
        );
        (api, log)
    }

    fn motor_only() -> StubImporter {
        StubImporter {
            components: Some(vec![ComponentRecord::with_defaults(ComponentType::Motor)]),
            status: Severity::Success,
        }
    }

    #[test]
    fn test_file_selection_same_path() {
        let mut selection = FileSelection::default();
        assert!(selection.select("bha.csv"));
        assert!(!selection.select("bha.csv"));
        assert!(selection.select("other.csv"));

        selection.reset();
        assert!(selection.current().is_none());
        assert!(selection.select("bha.csv"));
    }

    #[tokio::test]
    async fn test_import_replaces_list_and_feeds_back_once() {
        let (api, log) = api_with(motor_only());
        api.load_preset("rotary").unwrap();
        log.lock().unwrap().clear();

        let outcome = api.import_file(Path::new("bha.csv")).await.unwrap();

        assert_eq!(outcome.status, Severity::Success);
        let list = api.snapshot().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().component_type(), ComponentType::Motor);

        let log = log.lock().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0], ("stub success".to_string(), Severity::Success));
    }

    #[tokio::test]
    async fn test_failed_import_keeps_list() {
        let (api, log) = api_with(StubImporter {
            components: None,
            status: Severity::Error,
        });
        api.append(ComponentType::Jar).unwrap();
        let before = api.snapshot().unwrap();

        let outcome = api.import_file(Path::new("empty.csv")).await.unwrap();

        assert!(!outcome.is_applied());
        assert_eq!(api.snapshot().unwrap(), before);
        assert_eq!(log.lock().unwrap().len(), 1);
        assert_eq!(log.lock().unwrap()[0].1, Severity::Error);
    }

    #[tokio::test]
    async fn test_selection_reset_allows_reimport() {
        let (api, log) = api_with(motor_only());

        assert!(api.select_file("bha.csv"));
        assert!(api.import_selected().await.unwrap().is_some());
        assert!(api.selected_file().is_none());

        assert!(api.select_file("bha.csv"));
        assert!(api.import_selected().await.unwrap().is_some());
        assert_eq!(log.lock().unwrap().len(), 2);

        assert!(api.import_selected().await.unwrap().is_none());
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_preset_feedback() {
        let (api, log) = api_with(motor_only());
        api.append(ComponentType::Sub).unwrap();

        let result = api.load_preset("fishing");

        assert!(matches!(result, Err(ApiError::Preset(_))));
        assert_eq!(api.snapshot().unwrap().len(), 1);
        let log = log.lock().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].1, Severity::Error);
        assert!(log[0].0.contains("fishing"));
    }

    #[test]
    fn test_catalog_hides_legacy_type() {
        let (api, _) = api_with(motor_only());
        let catalog = api.catalog();
        assert!(catalog.iter().any(|o| o.id == "motor"));
        assert!(!catalog.iter().any(|o| o.id == "string_stabilizer"));
        assert!(catalog.iter().all(|o| !o.label.is_empty()));
    }

    #[test]
    fn test_edits_flow_into_payload() {
        let (api, _) = api_with(motor_only());
        let idx = api.append(ComponentType::DrillCollar).unwrap();
        assert!(api.update_field(idx, ComponentField::Quantity, "4").unwrap());
        api.append(ComponentType::Motor).unwrap();
        assert!(api.move_adjacent(1, MoveDirection::Up).unwrap());

        let payload = api.calculation_payload().unwrap();
        assert_eq!(payload.components[0].component_type, "motor");
        assert_eq!(payload.total_joints, 5);
        assert_eq!(payload.total_connections, 4);
    }
}
