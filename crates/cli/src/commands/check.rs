//! `configura check`: load declared variables and verify required ones.
//!
//! Responsibilities:
//! - Load every `--var` declaration into a fresh registry, in flag order.
//! - Print what was loaded, then run the completeness check over `--require`.
//!
//! Does NOT handle:
//! - Reporting the missing names (the error reaches `main`, which prints it to stderr).
//!
//! Invariants:
//! - Loaded entries are printed even when the completeness check fails.
//! - A repeated declaration reports the source of its last load.

use std::collections::HashMap;

use anyhow::{Context, Result};
use configura::{Declaration, Key, Registry};
use tracing::info;

use crate::formatters::{EntryRow, OutputFormat, describe_declarations, get_formatter};

pub fn run(vars: &[Declaration], require: &[Key], output_format: OutputFormat) -> Result<()> {
    info!(declarations = %describe_declarations(vars), "loading declared variables");

    let (registry, entries) = load(vars);

    let formatter = get_formatter(output_format);
    let output = formatter.format_entries(&entries)?;
    println!("{}", output.trim_end());

    registry
        .check_registered(require)
        .context("configuration is incomplete")?;
    Ok(())
}

/// Load `vars` and pair each resulting entry with where its value came from.
fn load(vars: &[Declaration]) -> (Registry, Vec<EntryRow>) {
    let mut registry = Registry::new();
    let mut sources = HashMap::new();
    for decl in vars {
        let source = decl.load_into(&mut registry);
        sources.insert(decl.key(), source);
    }

    let entries = registry
        .entries()
        .into_iter()
        .filter_map(|(key, value)| {
            let source = *sources.get(&key)?;
            Some(EntryRow::new(&key, value, source))
        })
        .collect();
    (registry, entries)
}
