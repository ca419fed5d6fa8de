//! Free-form query classification and report rendering.

use crate::core::analyze::analyze;
use crate::core::convert::{OutputFormat, convert};
use crate::core::parse::parse;

const GREETING: &str = "Hello! Send me CSV data to convert to JSON!";

const HELP: &str = "Hello! I'm the CSV to JSON Converter!

How to use:
1. Paste your CSV data directly
2. I'll convert it to JSON format
3. Get clean, formatted results

Example CSV:
name,age,city
John,25,NYC
Jane,30,LA

Just paste your CSV data and I'll handle the rest!";

const USAGE: &str = "Please paste CSV data with column headers and comma-separated values.";

const GREETING_KEYWORDS: [&str; 3] = ["hello", "hi", "help"];

/// Classify free-form input and produce a human-readable report.
///
/// Rules apply in order: empty input greets; input containing both a
/// delimiter and a line break is treated as tabular (a permissive heuristic,
/// not a format sniff); greeting keywords (case-insensitive substring match)
/// get help text; anything else gets usage guidance.
///
/// Stateless; safe to call concurrently for independent inputs.
pub fn route(input: &str) -> String {
    if input.is_empty() {
        return GREETING.to_string();
    }
    if input.contains(',') && input.contains('\n') {
        return report_tabular(input);
    }
    let lowered = input.to_lowercase();
    if GREETING_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        return HELP.to_string();
    }
    USAGE.to_string()
}

/// Analyze first; only convert when analysis succeeds. Failures surface as
/// readable messages, never as faults.
fn report_tabular(input: &str) -> String {
    let table = match parse(input) {
        Ok(table) => table,
        Err(err) => return format!("Analysis failed: {err}"),
    };

    let analysis = analyze(&table);
    if !analysis.success {
        return format!(
            "Analysis failed: {}",
            analysis.error.as_deref().unwrap_or("unknown error")
        );
    }

    let conversion = convert(&table, OutputFormat::Array);
    if !conversion.success {
        return format!(
            "Conversion failed: {}",
            conversion.error.as_deref().unwrap_or("unknown error")
        );
    }

    format!(
        "CSV to JSON Conversion Complete!\n\n\
         Analysis:\n\
         - Rows: {}\n\
         - Columns: {}\n\n\
         JSON Output:\n\
         ```json\n{}\n```\n\n\
         Successfully converted {} records!",
        analysis.total_rows,
        analysis.columns.join(", "),
        conversion.json_string().unwrap_or_default(),
        conversion.record_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_greets_without_analysis() {
        assert_eq!(route(""), GREETING);
    }

    #[test]
    fn tabular_input_reports_counts_columns_and_payload() {
        let report = route("name,age,city\nJohn,25,NYC\nJane,30,LA");
        assert!(report.contains("Rows: 2"));
        assert!(report.contains("Columns: name, age, city"));
        assert!(report.contains("Successfully converted 2 records!"));

        let payload_start = report.find("```json\n").expect("payload fence") + "```json\n".len();
        let payload_end = report[payload_start..]
            .find("\n```")
            .expect("closing fence")
            + payload_start;
        let payload: serde_json::Value =
            serde_json::from_str(&report[payload_start..payload_end]).expect("payload json");
        assert_eq!(
            payload,
            serde_json::json!([
                {"name": "John", "age": "25", "city": "NYC"},
                {"name": "Jane", "age": "30", "city": "LA"}
            ])
        );
    }

    #[test]
    fn header_only_tabular_input_reports_analysis_failure() {
        let report = route("a,b\n");
        assert_eq!(report, "Analysis failed: no data found");
    }

    #[test]
    fn unparseable_tabular_input_reports_analysis_failure() {
        let report = route("a,b\n\"broken,row\n");
        assert!(report.starts_with("Analysis failed: malformed row 1"));
    }

    #[test]
    fn greeting_keywords_get_help_text() {
        assert_eq!(route("Hello there"), HELP);
        assert_eq!(route("can you HELP me?"), HELP);
    }

    #[test]
    fn tabular_heuristic_wins_over_keywords() {
        // Contains "hi" but also a delimiter and a newline.
        let report = route("greeting,count\nhi,1\n");
        assert!(report.contains("Successfully converted 1 records!"));
    }

    #[test]
    fn other_input_gets_usage_guidance() {
        assert_eq!(route("what is the weather"), USAGE);
    }
}
