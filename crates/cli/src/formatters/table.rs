//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format rows as tab-separated tables with a header line.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;

use crate::formatters::{EntryRow, Formatter, KindRow};

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_entries(&self, entries: &[EntryRow]) -> Result<String> {
        if entries.is_empty() {
            return Ok("No variables loaded.".to_string());
        }

        let mut output = String::from("Name\tKind\tValue\tSource\n");
        for entry in entries {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                entry.name, entry.kind, entry.value, entry.source
            ));
        }
        Ok(output)
    }

    fn format_kinds(&self, kinds: &[KindRow]) -> Result<String> {
        let mut output = String::from("Kind\tZero Value\n");
        for row in kinds {
            output.push_str(&format!("{}\t{}\n", row.kind, row.zero_value));
        }
        Ok(output)
    }
}
