//! `configura kinds`: list the supported value kinds.

use anyhow::Result;
use configura::ValueKind;

use crate::formatters::{KindRow, OutputFormat, get_formatter};

pub fn run(output_format: OutputFormat) -> Result<()> {
    let rows: Vec<KindRow> = ValueKind::ALL.into_iter().map(KindRow::from).collect();
    let output = get_formatter(output_format).format_kinds(&rows)?;
    println!("{}", output.trim_end());
    Ok(())
}
