//! Test-only helpers: table builders and scripted instruction sources.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Result, anyhow};

use crate::core::table::{Record, Table};
use crate::instruction::InstructionSource;

/// Build a deterministic table from column names and row cells.
///
/// Rows shorter than the header omit trailing columns, matching the
/// parser's mismatch policy.
pub fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
    let columns: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    let records = rows
        .iter()
        .map(|cells| {
            columns
                .iter()
                .zip(cells.iter())
                .map(|(column, cell)| (column.clone(), cell.to_string()))
                .collect()
        })
        .collect();
    Table { columns, records }
}

/// Shared attempt counter handle for [`ScriptedSource`].
#[derive(Clone, Default)]
pub struct CallCounter(Rc<Cell<usize>>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.get()
    }

    fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

enum SourceScript {
    Text(String),
    Empty,
    Fail,
}

/// Instruction source returning a fixed outcome and counting attempts.
pub struct ScriptedSource {
    name: String,
    script: SourceScript,
    calls: CallCounter,
}

impl ScriptedSource {
    /// Source that succeeds with `text` on every attempt.
    pub fn ok(name: &str, text: &str) -> Self {
        Self::new(name, SourceScript::Text(text.to_string()))
    }

    /// Source that reports "no instruction available" on every attempt.
    pub fn empty(name: &str) -> Self {
        Self::new(name, SourceScript::Empty)
    }

    /// Source that fails on every attempt.
    pub fn failing(name: &str) -> Self {
        Self::new(name, SourceScript::Fail)
    }

    fn new(name: &str, script: SourceScript) -> Self {
        Self {
            name: name.to_string(),
            script,
            calls: CallCounter::default(),
        }
    }

    /// Counter handle that stays valid after the source is boxed.
    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

impl InstructionSource for ScriptedSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn attempt(&self, _target: &str) -> Result<Option<String>> {
        self.calls.bump();
        match &self.script {
            SourceScript::Text(text) => Ok(Some(text.clone())),
            SourceScript::Empty => Ok(None),
            SourceScript::Fail => Err(anyhow!("scripted failure from {}", self.name)),
        }
    }
}
