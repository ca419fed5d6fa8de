//! Shared record and table types for tabular data.
//!
//! These types define stable contracts between core components. Column order
//! and row order are part of the contract, not incidental: every serialized
//! output must reproduce them exactly.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One data row: an ordered column-name to cell-value mapping.
///
/// Field order follows the table header. All cell values are strings;
/// numeric-looking values are never coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, String>);

impl Record {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Append a column-value pair, preserving insertion order.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.0.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Column-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Header plus ordered rows parsed from delimited text.
///
/// A header-only table (zero records, non-empty `columns`) is a valid state,
/// distinct from "no header line found", which the parser reports as an
/// error instead of producing a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names from the header line, in original order.
    pub columns: Vec<String>,
    /// Data rows in input order.
    pub records: Vec<Record>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
