//! Error types for the configuration registry.
//!
//! Responsibilities:
//! - Define `ConfigError`, the single error type of the crate.
//! - Define `MissingVariables`, the aggregated completeness-check failure.
//!
//! Does NOT handle:
//! - Environment parse failures; those fall back silently (see `env.rs`).
//!
//! Invariants:
//! - A `MissingVariables` value always carries at least one name.
//! - Names keep the order the caller supplied them in.
//! - Messages never include raw environment values.

use thiserror::Error;

/// Errors produced by the configuration registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    MissingVariables(#[from] MissingVariables),

    #[error("conflicting configuration variables in merge: {}", .keys.join(", "))]
    MergeConflict { keys: Vec<String> },

    #[error("unknown value kind: {0}")]
    UnknownKind(String),

    #[error("invalid variable declaration '{input}': {message}")]
    InvalidDeclaration { input: String, message: String },
}

impl ConfigError {
    /// True if this is a completeness-check failure.
    pub fn is_missing_variables(&self) -> bool {
        matches!(self, ConfigError::MissingVariables(_))
    }

    /// The missing key names, if this is a completeness-check failure.
    pub fn missing_keys(&self) -> Option<&[String]> {
        match self {
            ConfigError::MissingVariables(missing) => Some(missing.keys()),
            _ => None,
        }
    }
}

/// Keys that were expected but never loaded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing configuration variables: {}", .keys.join(", "))]
pub struct MissingVariables {
    keys: Vec<String>,
}

impl MissingVariables {
    /// Returns `None` for an empty list.
    pub(crate) fn from_keys(keys: Vec<String>) -> Option<Self> {
        if keys.is_empty() {
            None
        } else {
            Some(Self { keys })
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}
