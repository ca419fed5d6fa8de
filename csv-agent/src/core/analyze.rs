//! Structural analysis of parsed tables.

use serde::Serialize;

use crate::core::NO_DATA;
use crate::core::table::{Record, Table};

/// Shape metadata computed from a parsed table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub success: bool,
    pub total_rows: usize,
    pub total_columns: usize,
    pub columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_row: Option<Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            total_rows: 0,
            total_columns: 0,
            columns: Vec::new(),
            first_row: None,
            error: Some(message.into()),
        }
    }
}

/// Compute row/column counts, column names, and a sample row.
///
/// A zero-record table is an analysis failure, not a degenerate success:
/// the report needs at least one row to describe column content. The parser
/// still accepts header-only input; that asymmetry is intentional.
///
/// Deterministic and synchronous, no side effects.
pub fn analyze(table: &Table) -> AnalysisResult {
    if table.is_empty() {
        return AnalysisResult::failure(NO_DATA);
    }
    AnalysisResult {
        success: true,
        total_rows: table.len(),
        total_columns: table.columns.len(),
        columns: table.columns.clone(),
        first_row: table.records.first().cloned(),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::table;

    #[test]
    fn empty_table_fails_with_no_data() {
        let result = analyze(&table(&["a", "b"], &[]));
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("no data found"));
        assert!(result.first_row.is_none());
    }

    #[test]
    fn populated_table_reports_shape() {
        let result = analyze(&table(
            &["name", "age"],
            &[&["John", "25"], &["Jane", "30"]],
        ));
        assert!(result.success);
        assert_eq!(result.total_rows, 2);
        assert_eq!(result.total_columns, 2);
        assert_eq!(result.columns, vec!["name", "age"]);

        let first = result.first_row.expect("first row");
        assert_eq!(first.get("name"), Some("John"));
        assert!(result.error.is_none());
    }

    #[test]
    fn analysis_is_deterministic() {
        let input = table(&["x"], &[&["1"]]);
        assert_eq!(analyze(&input), analyze(&input));
    }
}
