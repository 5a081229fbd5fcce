//! Shared test utilities for configura CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//!
//! Invariants / Assumptions:
//! - Every variable name a test declares starts with `CONFIGURA_IT_`, and the
//!   helper clears the ones the suite uses so host values never leak in.
//! - `RUST_LOG` is cleared so stderr only carries warnings and errors.

use assert_cmd::Command;

/// Variable names used across the integration suite.
const TEST_VARS: &[&str] = &[
    "CONFIGURA_IT_PORT",
    "CONFIGURA_IT_DEBUG",
    "CONFIGURA_IT_HOST",
    "CONFIGURA_IT_RATIO",
    "CONFIGURA_IT_DB_URL",
    "CONFIGURA_IT_LEVEL",
    "CONFIGURA_IT_RAW",
];

/// Returns a hermetic `configura` command for integration testing.
pub fn configura_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("configura");
    cmd.env_remove("RUST_LOG");
    for name in TEST_VARS {
        cmd.env_remove(name);
    }
    cmd
}
