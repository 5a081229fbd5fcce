//! configura - inspect and validate environment configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Install the tracing subscriber.
//! - Run the selected command and translate its outcome into an exit code.
//!
//! Does NOT handle:
//! - Loading or validation rules (see the `configura` library crate).
//!
//! Invariants:
//! - Logs go to stderr; stdout carries only command output.
//! - Without `RUST_LOG`, only warnings and errors are logged.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run_command(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }

    std::process::exit(ExitCode::Success.as_i32());
}
