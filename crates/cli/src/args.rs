//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse `NAME:KIND[=FALLBACK]` declarations and `NAME:KIND` requirements.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};
use configura::{Declaration, Key};

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "configura")]
#[command(about = "Load, validate and inspect typed configuration from environment variables", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  configura check --var PORT:uint16=8080 --var DEBUG:bool --require PORT:uint16\n  configura check --var DATABASE_URL:string --require DATABASE_URL:string -o json\n  configura kinds\n"
)]
pub struct Cli {
    /// Output format (table, json)
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load declared variables from the environment and verify required ones
    Check {
        /// Variable to load, with an optional fallback (repeatable)
        #[arg(long = "var", value_name = "NAME:KIND[=FALLBACK]")]
        vars: Vec<Declaration>,

        /// Variable that must have been loaded by a --var (repeatable)
        #[arg(long = "require", value_name = "NAME:KIND", value_parser = parse_required_key)]
        require: Vec<Key>,
    },

    /// List the supported value kinds and their zero values
    Kinds,
}

/// Parse `NAME:KIND`; a fallback makes no sense for a requirement.
fn parse_required_key(input: &str) -> Result<Key, String> {
    if input.contains('=') {
        return Err("a required key takes no fallback; use NAME:KIND".to_string());
    }
    input
        .parse::<Declaration>()
        .map(|decl| decl.key())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use configura::ValueKind;

    #[test]
    fn test_parse_required_key() {
        assert_eq!(
            parse_required_key("PORT:u16").unwrap(),
            Key::new("PORT", ValueKind::Uint16)
        );
        assert!(parse_required_key("PORT:u16=80").is_err());
        assert!(parse_required_key("PORT").is_err());
    }

    #[test]
    fn test_check_collects_repeated_flags() {
        let cli = Cli::try_parse_from([
            "configura",
            "check",
            "--var",
            "PORT:uint16=8080",
            "--var",
            "DEBUG:bool",
            "--require",
            "PORT:uint16",
            "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.output, OutputFormat::Json);
        match cli.command {
            Commands::Check { vars, require } => {
                assert_eq!(vars.len(), 2);
                assert_eq!(vars[1].name(), "DEBUG");
                assert_eq!(require, vec![Key::new("PORT", ValueKind::Uint16)]);
            }
            Commands::Kinds => panic!("expected check"),
        }
    }

    #[test]
    fn test_invalid_declaration_is_a_usage_error() {
        let err = Cli::try_parse_from(["configura", "check", "--var", "PORT:uint8=999"])
            .err()
            .unwrap();
        assert_eq!(err.exit_code(), 2);
    }
}
