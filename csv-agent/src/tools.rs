//! Tool-surface entry points exposed to the external orchestration layer.
//!
//! These wrap the pure core functions and fold every failure, including
//! parse errors, into the structured result types. Callers always receive
//! an outcome as data; nothing here panics or propagates a fault.

use crate::core::analyze::{AnalysisResult, analyze};
use crate::core::convert::{ConversionResult, OutputFormat, convert};
use crate::core::parse::parse;

/// Convert raw delimited text to JSON in the requested shape.
pub fn csv_to_json(csv_content: &str, format: OutputFormat) -> ConversionResult {
    match parse(csv_content) {
        Ok(table) => convert(&table, format),
        Err(err) => ConversionResult::failure(format, format!("CSV parsing error: {err}")),
    }
}

/// Report structure metadata for raw delimited text.
pub fn analyze_csv(csv_content: &str) -> AnalysisResult {
    match parse(csv_content) {
        Ok(table) => analyze(&table),
        Err(err) => AnalysisResult::failure(format!("CSV analysis error: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_fold_into_conversion_result() {
        let result = csv_to_json("", OutputFormat::Array);
        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("CSV parsing error: no header line found in input")
        );
        assert_eq!(result.record_count, 0);
    }

    #[test]
    fn parse_errors_fold_into_analysis_result() {
        let result = analyze_csv("a,b\n\"broken\n");
        assert!(!result.success);
        assert!(
            result
                .error
                .as_deref()
                .expect("error message")
                .starts_with("CSV analysis error: malformed row 1")
        );
    }

    #[test]
    fn well_formed_input_converts_end_to_end() {
        let result = csv_to_json("a,b\n1,2\n", OutputFormat::Object);
        assert!(result.success);
        assert_eq!(result.record_count, 1);
        assert_eq!(result.columns, vec!["a", "b"]);
    }
}
