//! Read interface handed to dependent components.
//!
//! Responsibilities:
//! - Define the object-safe `Config` trait with one accessor per kind.
//! - Provide `SharedConfig`, the frozen, thread-shareable form of a `Registry`.
//!
//! Does NOT handle:
//! - Loading or merging (see `registry.rs`).
//!
//! Invariants:
//! - `SharedConfig` never hands out `&mut Registry`; once frozen, values cannot change.
//! - Accessors never fail: an unloaded key reads as its kind's zero value.

use std::ops::Deref;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::key::{Key, Variable};
use crate::kind::Uintptr;
use crate::registry::Registry;

/// Typed read access to loaded configuration.
///
/// Components take `&dyn Config` (or `Arc<dyn Config>`) so they can read
/// values and verify their keys without seeing how the store is built.
pub trait Config: Send + Sync {
    fn string(&self, key: &Variable<String>) -> String;
    fn int(&self, key: &Variable<isize>) -> isize;
    fn int8(&self, key: &Variable<i8>) -> i8;
    fn int16(&self, key: &Variable<i16>) -> i16;
    fn int32(&self, key: &Variable<i32>) -> i32;
    fn int64(&self, key: &Variable<i64>) -> i64;
    fn uint(&self, key: &Variable<usize>) -> usize;
    fn uint8(&self, key: &Variable<u8>) -> u8;
    fn uint16(&self, key: &Variable<u16>) -> u16;
    fn uint32(&self, key: &Variable<u32>) -> u32;
    fn uint64(&self, key: &Variable<u64>) -> u64;
    fn uintptr(&self, key: &Variable<Uintptr>) -> Uintptr;
    fn bytes(&self, key: &Variable<Vec<u8>>) -> Vec<u8>;
    fn runes(&self, key: &Variable<Vec<char>>) -> Vec<char>;
    fn float32(&self, key: &Variable<f32>) -> f32;
    fn float64(&self, key: &Variable<f64>) -> f64;
    fn bool(&self, key: &Variable<bool>) -> bool;

    /// See [`Registry::check_registered`].
    fn check_registered(&self, keys: &[Key]) -> Result<(), ConfigError>;
}

macro_rules! impl_config {
    ($target:ty) => {
        impl Config for $target {
            fn string(&self, key: &Variable<String>) -> String {
                self.get(key)
            }

            fn int(&self, key: &Variable<isize>) -> isize {
                self.get(key)
            }

            fn int8(&self, key: &Variable<i8>) -> i8 {
                self.get(key)
            }

            fn int16(&self, key: &Variable<i16>) -> i16 {
                self.get(key)
            }

            fn int32(&self, key: &Variable<i32>) -> i32 {
                self.get(key)
            }

            fn int64(&self, key: &Variable<i64>) -> i64 {
                self.get(key)
            }

            fn uint(&self, key: &Variable<usize>) -> usize {
                self.get(key)
            }

            fn uint8(&self, key: &Variable<u8>) -> u8 {
                self.get(key)
            }

            fn uint16(&self, key: &Variable<u16>) -> u16 {
                self.get(key)
            }

            fn uint32(&self, key: &Variable<u32>) -> u32 {
                self.get(key)
            }

            fn uint64(&self, key: &Variable<u64>) -> u64 {
                self.get(key)
            }

            fn uintptr(&self, key: &Variable<Uintptr>) -> Uintptr {
                self.get(key)
            }

            fn bytes(&self, key: &Variable<Vec<u8>>) -> Vec<u8> {
                self.get(key)
            }

            fn runes(&self, key: &Variable<Vec<char>>) -> Vec<char> {
                self.get(key)
            }

            fn float32(&self, key: &Variable<f32>) -> f32 {
                self.get(key)
            }

            fn float64(&self, key: &Variable<f64>) -> f64 {
                self.get(key)
            }

            fn bool(&self, key: &Variable<bool>) -> bool {
                self.get(key)
            }

            fn check_registered(&self, keys: &[Key]) -> Result<(), ConfigError> {
                Registry::check_registered(self, keys)
            }
        }
    };
}

impl_config!(Registry);
impl_config!(SharedConfig);

/// A frozen registry, cheap to clone and safe to read from many threads.
///
/// Produced by [`Registry::freeze`]. Derefs to `Registry` for the read-only
/// methods (`get`, `try_get`, `contains`, `entries`, ...).
#[derive(Debug, Clone)]
pub struct SharedConfig {
    inner: Arc<Registry>,
}

impl Deref for SharedConfig {
    type Target = Registry;

    fn deref(&self) -> &Registry {
        &self.inner
    }
}

impl From<Registry> for SharedConfig {
    fn from(registry: Registry) -> Self {
        Self {
            inner: Arc::new(registry),
        }
    }
}
