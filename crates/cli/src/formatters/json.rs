//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all row types as pretty-printed JSON.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;

use crate::formatters::{EntryRow, Formatter, KindRow};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_entries(&self, entries: &[EntryRow]) -> Result<String> {
        Ok(serde_json::to_string_pretty(entries)?)
    }

    fn format_kinds(&self, kinds: &[KindRow]) -> Result<String> {
        Ok(serde_json::to_string_pretty(kinds)?)
    }
}
