//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the JSON and table output formats.
//! - Define the row types commands hand to a formatter.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - JSON output of an empty result set is `[]`; tables print a human message instead.

use anyhow::Result;
use clap::ValueEnum;
use configura::{Declaration, Key, Source, Value, ValueKind};
use serde::Serialize;

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// One loaded variable as reported by `check`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryRow {
    pub name: String,
    pub kind: &'static str,
    pub value: Value,
    pub source: &'static str,
}

impl EntryRow {
    pub fn new(key: &Key, value: Value, source: Source) -> Self {
        Self {
            name: key.name().to_string(),
            kind: key.kind().name(),
            value,
            source: source.as_str(),
        }
    }
}

/// One supported kind as reported by `kinds`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindRow {
    pub kind: &'static str,
    pub zero_value: Value,
}

impl From<ValueKind> for KindRow {
    fn from(kind: ValueKind) -> Self {
        Self {
            kind: kind.name(),
            zero_value: kind.zero_value(),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format the variables loaded by `check`.
    fn format_entries(&self, entries: &[EntryRow]) -> Result<String>;

    /// Format the supported kinds.
    fn format_kinds(&self, kinds: &[KindRow]) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

/// Render declarations for log lines without their fallbacks.
pub fn describe_declarations(vars: &[Declaration]) -> String {
    vars.iter()
        .map(|decl| decl.key().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
