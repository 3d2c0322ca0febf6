// ==========================================
// ComponentImporter 集成测试
// ==========================================
// 测试目标: 验证从文件到部件清单的完整导入流程
// ==========================================


use bha_import::config::ImportSettings;
use bha_import::domain::{ComponentType, Severity, WarningKind};
use bha_import::importer::{
    ColumnNormalizerImpl, ComponentImporter, ComponentImporterImpl, ImportPhase, RowMapperImpl,
    TypeResolver, UniversalFileParser,
};
use bha_import::logging;
use std::sync::Arc;
use test_helpers::{default_importer, fixture_path, write_temp_file};

#[tokio::test]
async fn test_import_field_export_headers() {
    logging::init_test();

    let importer = default_importer();
    let report = importer.import_file(&fixture_path("field_export.csv")).await;

    assert_eq!(report.outcome.status, Severity::Success, "{:?}", report.outcome);
    assert_eq!(report.outcome.imported_count, 5);
    assert_eq!(report.outcome.skipped_count, 0);
    assert_eq!(importer.phase(), ImportPhase::Done(Severity::Success));

    let components = report.components.expect("components should be present");
    let types: Vec<ComponentType> = components.iter().map(|c| c.component_type()).collect();
    assert_eq!(
        types,
        vec![
            ComponentType::DrillPipe,
            ComponentType::Hwdp,
            ComponentType::Jar,
            ComponentType::DrillCollar,
            ComponentType::NearBitStabilizer,
        ]
    );

    // 总长按根数均分为单根长度
    let drill_pipe = &components[0];
    assert_eq!(drill_pipe.quantity(), 30);
    assert_eq!(drill_pipe.unit_length(), 31.0);
    assert_eq!(drill_pipe.total_length(), 930.0);
    assert_eq!(components[3].unit_length(), 30.0);
}

#[tokio::test]
async fn test_header_variants_produce_same_list() {
    let importer = default_importer();

    let english = importer.import_file(&fixture_path("field_export.csv")).await;
    let spanish = importer.import_file(&fixture_path("spanish_headers.csv")).await;

    assert_eq!(spanish.outcome.status, Severity::Success, "{:?}", spanish.outcome);
    assert_eq!(english.components, spanish.components);
}

#[tokio::test]
async fn test_import_spreadsheet_numeric_cells() {
    let importer = default_importer();
    let report = importer.import_file(&fixture_path("rotary_bha.xlsx")).await;

    assert_eq!(report.outcome.status, Severity::Warning, "{:?}", report.outcome);
    assert_eq!(report.outcome.imported_count, 3);

    let components = report.components.unwrap();
    let collar = &components[0];
    assert_eq!(collar.component_type(), ComponentType::DrillCollar);
    assert_eq!(collar.quantity(), 3);
    assert_eq!(collar.unit_length(), 30.0);
    assert_eq!(collar.outer_diameter(), 6.75);
    assert_eq!(collar.inner_diameter(), 2.813);

    let motor = &components[1];
    assert_eq!(motor.component_type(), ComponentType::Motor);
    assert_eq!(motor.quantity(), 1);
    assert_eq!(motor.total_length(), 25.5);

    // 未知类型按工作表行号告警
    let warning = &report.outcome.warnings[0];
    assert_eq!(warning.raw_type, "gizmo");
    assert_eq!(warning.row_number, 5);
}

#[tokio::test]
async fn test_tsv_motor_assembly() {
    let importer = default_importer();
    let report = importer.import_file(&fixture_path("motor_assembly.tsv")).await;

    assert_eq!(report.outcome.status, Severity::Success);
    let components = report.components.unwrap();
    let motor = &components[0];
    assert_eq!(motor.component_type(), ComponentType::Motor);
    // 非管状部件根数固定为 1
    assert_eq!(motor.quantity(), 1);
    assert_eq!(motor.total_length(), 25.0);
    assert_eq!(components[1].component_type(), ComponentType::Mwd);
}

#[tokio::test]
async fn test_non_tubular_quantity_pinned_before_length_split() {
    let file = write_temp_file(
        ".csv",
        "type,od,id_inner,length_ft,quantity,weight_ppf\nmotor,6.75,3.5,25,4,90\n",
    );

    let report = default_importer().import_file(file.path()).await;

    let components = report.components.unwrap();
    assert_eq!(components[0].quantity(), 1);
    assert_eq!(components[0].unit_length(), 25.0);
    assert_eq!(components[0].total_length(), 25.0);
}

#[tokio::test]
async fn test_unknown_type_falls_back_with_warning() {
    let file = write_temp_file(
        ".csv",
        "type,od,id_inner,length_ft,quantity,weight_ppf\n\
         drill_collar,6.75,2.813,30,1,100\n\
         unobtanium_sub,6.5,2.5,4,1,60\n",
    );

    let report = default_importer().import_file(file.path()).await;

    assert_eq!(report.outcome.status, Severity::Warning);
    assert_eq!(report.outcome.imported_count, 2);
    assert_eq!(report.outcome.warnings.len(), 1);

    let warning = &report.outcome.warnings[0];
    assert_eq!(warning.row_number, 3);
    assert_eq!(warning.raw_type, "unobtanium_sub");
    assert!(warning.message.contains("unobtanium_sub"));
    assert!(matches!(&warning.kind, WarningKind::UnknownType { fallback } if fallback == "drill_collar"));

    let components = report.components.unwrap();
    assert_eq!(components[1].component_type(), ComponentType::DrillCollar);
    assert_eq!(components[1].outer_diameter(), 6.5);
}

#[tokio::test]
async fn test_warning_row_numbers_follow_source_lines() {
    let file = write_temp_file(
        ".csv",
        "type,od,id_inner,length_ft,quantity,weight_ppf\n\
         drill_collar,6.75,2.813,30,1,100\n\
         \n\
         ,,,,,\n\
         gizmo,6.5,2.5,4,1,60\n",
    );

    let report = default_importer().import_file(file.path()).await;

    assert_eq!(report.outcome.imported_count, 2);
    assert_eq!(report.outcome.warnings.len(), 1);
    assert_eq!(report.outcome.warnings[0].row_number, 5);
    assert!(report.outcome.warnings[0].message.contains('5'));
}

#[tokio::test]
async fn test_bore_mismatch_keeps_record() {
    let file = write_temp_file(
        ".csv",
        "type,od,id_inner,length_ft,quantity,weight_ppf\ndrill_collar,6.75,7,30,1,100\n",
    );

    let report = default_importer().import_file(file.path()).await;

    assert_eq!(report.outcome.status, Severity::Warning);
    assert!(matches!(
        report.outcome.warnings[0].kind,
        WarningKind::BoreMismatch { .. }
    ));
    let components = report.components.unwrap();
    assert_eq!(components[0].inner_diameter(), 7.0);
    assert!(components[0].has_bore_mismatch());
}

#[tokio::test]
async fn test_header_only_file_is_error() {
    let report = default_importer()
        .import_file(&fixture_path("header_only.csv"))
        .await;

    assert_eq!(report.outcome.status, Severity::Error);
    assert!(!report.outcome.is_applied());
    assert!(report.components.is_none());
}

#[tokio::test]
async fn test_missing_type_column_lists_columns() {
    let file = write_temp_file(".csv", "Part,Diameter\ncollar,6.75\n");

    let report = default_importer().import_file(file.path()).await;

    assert_eq!(report.outcome.status, Severity::Error);
    assert!(report.outcome.message.contains("Part"));
    assert!(report.outcome.message.contains("Diameter"));
}

#[tokio::test]
async fn test_missing_and_unsupported_files() {
    let importer = default_importer();

    let missing = importer
        .import_file(&fixture_path("does_not_exist.csv"))
        .await;
    assert_eq!(missing.outcome.status, Severity::Error);

    let pdf = write_temp_file(".pdf", "%PDF-1.4");
    let unsupported = importer.import_file(pdf.path()).await;
    assert_eq!(unsupported.outcome.status, Severity::Error);
    assert!(unsupported.outcome.message.contains("pdf"));
    assert_eq!(importer.phase(), ImportPhase::Done(Severity::Error));
}

/// 固定解析为扩眼器的类型解析器
struct ReamerOnly;

impl TypeResolver for ReamerOnly {
    fn resolve(&self, _raw: &str) -> (ComponentType, bool) {
        (ComponentType::Reamer, false)
    }
}

#[tokio::test]
async fn test_custom_type_resolver() {
    let row_mapper = RowMapperImpl::from_config(&ImportSettings::default())
        .with_type_resolver(Box::new(ReamerOnly));
    let importer = ComponentImporterImpl::new(
        Arc::new(UniversalFileParser),
        Box::new(ColumnNormalizerImpl),
        Box::new(row_mapper),
    );

    let report = importer.import_file(&fixture_path("field_export.csv")).await;

    let components = report.components.unwrap();
    assert!(components
        .iter()
        .all(|c| c.component_type() == ComponentType::Reamer && c.quantity() == 1));
}
