// ==========================================
// 钻具组合导入引擎 - 清单导出
// ==========================================
// 职责: 1) 计算请求载荷（标准字段形状,length_ft = 总长）
//       2) CSV 导出（可原样再导入）
// ==========================================

use crate::domain::component::ComponentRecord;
use crate::editor::component_list::ComponentList;
use crate::importer::aliases::{
    FIELD_ID_INNER, FIELD_LENGTH_FT, FIELD_OD, FIELD_QUANTITY, FIELD_TYPE, FIELD_UNIT_LENGTH_FT,
    FIELD_WEIGHT_PPF,
};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

// ==========================================
// CalculationPayload - 计算请求载荷
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentPayload {
    #[serde(rename = "type")]
    pub component_type: String,
    pub od: f64,
    pub id_inner: f64,
    pub length_ft: f64,
    pub weight_ppf: f64,
}

impl From<&ComponentRecord> for ComponentPayload {
    fn from(record: &ComponentRecord) -> Self {
        Self {
            component_type: record.component_type().as_str().to_string(),
            od: record.outer_diameter(),
            id_inner: record.inner_diameter(),
            length_ft: record.total_length(),
            weight_ppf: record.weight_per_unit_length(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationPayload {
    pub components: Vec<ComponentPayload>,
    pub total_length_ft: f64,
    pub total_joints: u64,
    pub total_connections: u64,
}

impl From<&ComponentList> for CalculationPayload {
    fn from(list: &ComponentList) -> Self {
        Self {
            components: list.components().iter().map(ComponentPayload::from).collect(),
            total_length_ft: list.total_length(),
            total_joints: list.total_joints(),
            total_connections: list.total_connections(),
        }
    }
}

impl CalculationPayload {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ==========================================
// CSV 导出
// ==========================================

/// 写出 CSV（标准列名,含 unit_length_ft 与 quantity,保证再导入无损）
pub fn write_csv<W: Write>(list: &ComponentList, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        FIELD_TYPE,
        FIELD_OD,
        FIELD_ID_INNER,
        FIELD_UNIT_LENGTH_FT,
        FIELD_QUANTITY,
        FIELD_LENGTH_FT,
        FIELD_WEIGHT_PPF,
    ])?;

    for record in list.components() {
        csv_writer.write_record([
            record.component_type().as_str().to_string(),
            record.outer_diameter().to_string(),
            record.inner_diameter().to_string(),
            record.unit_length().to_string(),
            record.quantity().to_string(),
            record.total_length().to_string(),
            record.weight_per_unit_length().to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// 导出到 CSV 文件
pub fn write_csv_file<P: AsRef<Path>>(list: &ComponentList, path: P) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    write_csv(list, file)
}
