//! Tests for the configuration registry.
//!
//! Responsibilities:
//! - Test loading every kind from the environment, with and without fallbacks.
//! - Test the completeness check and its aggregated error.
//! - Test zero-value and presence-aware reads.
//! - Test merging registries and the conflict policy.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Variable names carry a `_CONFIGURA_TEST_` prefix so they never match host variables.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
