//! Conversion of parsed tables into JSON payload shapes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::NO_DATA;
use crate::core::table::{Record, Table};

/// Output payload shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of record objects, input row order preserved.
    #[default]
    Array,
    /// Object keyed `row_<n>` (1-based); key order follows row order.
    Object,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Array => f.write_str("array"),
            Self::Object => f.write_str("object"),
        }
    }
}

/// Outcome of a conversion request.
///
/// Exactly one of `payload`/`error` is present depending on `success`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub record_count: usize,
    pub columns: Vec<String>,
    pub format: OutputFormat,
}

impl ConversionResult {
    pub fn failure(format: OutputFormat, message: impl Into<String>) -> Self {
        Self {
            success: false,
            payload: None,
            error: Some(message.into()),
            record_count: 0,
            columns: Vec::new(),
            format,
        }
    }

    /// Pretty-printed payload, `None` when the conversion failed.
    pub fn json_string(&self) -> Option<String> {
        self.payload
            .as_ref()
            .map(|payload| serde_json::to_string_pretty(payload).expect("json payload serializes"))
    }
}

/// Convert a table into the requested JSON shape.
///
/// Row order and per-record field order are part of the output contract.
/// Cell values stay strings; there is no numeric type inference.
///
/// A zero-record table fails with "no data found", mirroring the analyzer.
pub fn convert(table: &Table, format: OutputFormat) -> ConversionResult {
    if table.is_empty() {
        return ConversionResult::failure(format, NO_DATA);
    }

    let rows: Vec<Value> = table.records.iter().map(record_value).collect();
    let payload = match format {
        OutputFormat::Array => Value::Array(rows),
        OutputFormat::Object => {
            let mut map = Map::new();
            for (index, row) in rows.into_iter().enumerate() {
                map.insert(format!("row_{}", index + 1), row);
            }
            Value::Object(map)
        }
    };

    ConversionResult {
        success: true,
        payload: Some(payload),
        error: None,
        record_count: table.len(),
        columns: table.columns.clone(),
        format,
    }
}

fn record_value(record: &Record) -> Value {
    let mut map = Map::new();
    for (column, cell) in record.iter() {
        map.insert(column.to_string(), Value::String(cell.to_string()));
    }
    Value::Object(map)
}
