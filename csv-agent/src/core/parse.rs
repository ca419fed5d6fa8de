//! Delimited-text parsing into ordered records.

use csv::ReaderBuilder;
use thiserror::Error;

use crate::core::table::{Record, Table};

/// Failure modes for [`parse`].
///
/// These cross the component boundary as data (`success = false` plus a
/// message) in the analysis and conversion result types, never as an
/// unhandled fault.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input contained no header line. Distinct from header-only input,
    /// which parses to a table with zero records.
    #[error("no header line found in input")]
    EmptyInput,
    /// A row could not be decoded under the quoting rules. `row` is the
    /// 1-based data-row index; 0 means the header line itself.
    #[error("malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
}

/// Parse delimited text into a [`Table`].
///
/// The first non-empty line is the header. Standard quoting applies: quoted
/// fields may contain delimiters and line breaks. Rows shorter than the
/// header omit their missing trailing columns from the record; fields
/// beyond the header are ignored.
///
/// Pure function of its input, no side effects.
pub fn parse(raw_text: &str) -> Result<Table, ParseError> {
    if raw_text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    if let Some(row) = unterminated_quote_row(raw_text) {
        return Err(ParseError::MalformedRow {
            row,
            reason: "unterminated quoted field".to_string(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(raw_text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|err| ParseError::MalformedRow {
            row: 0,
            reason: err.to_string(),
        })?
        .iter()
        .map(str::to_string)
        .collect();
    if columns.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut records = Vec::new();
    for (index, row) in reader.into_records().enumerate() {
        let row = row.map_err(|err| ParseError::MalformedRow {
            row: index + 1,
            reason: err.to_string(),
        })?;
        let record: Record = columns
            .iter()
            .zip(row.iter())
            .map(|(column, cell)| (column.clone(), cell.to_string()))
            .collect();
        records.push(record);
    }

    Ok(Table { columns, records })
}

/// Find a quote that is still open at end of input.
///
/// The `csv` reader interprets quotes leniently: a dangling quote swallows
/// everything to end of input instead of failing. That would silently merge
/// rows, so the case is rejected up front with the row it opened on.
/// Doubled quotes inside a quoted field toggle twice and net out.
///
/// Returns the logical row index where the open quote started (0 = header,
/// counting non-empty rows only).
fn unterminated_quote_row(raw_text: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut row = 0usize;
    let mut row_has_content = false;
    let mut opened_at = 0usize;

    for ch in raw_text.chars() {
        match ch {
            '"' => {
                if !in_quotes {
                    opened_at = row;
                }
                in_quotes = !in_quotes;
                row_has_content = true;
            }
            '\n' if !in_quotes => {
                if row_has_content {
                    row += 1;
                }
                row_has_content = false;
            }
            other => {
                if !other.is_whitespace() {
                    row_has_content = true;
                }
            }
        }
    }

    in_quotes.then_some(opened_at)
}
