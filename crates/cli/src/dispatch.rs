//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code selection (see `error` module).
//!
//! Invariants:
//! - Commands are routed based on the top-level Commands enum variant.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check { vars, require } => commands::check::run(&vars, &require, cli.output),
        Commands::Kinds => commands::kinds::run(cli.output),
    }
}
