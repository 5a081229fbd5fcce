//! Environment variable loading with per-key fallbacks.
//!
//! Responsibilities:
//! - Look up a key's environment variable and parse it as the key's kind.
//! - Provide one loader function per kind, all delegating to `lookup`.
//! - Report whether a value came from the environment or the fallback (`Source`).
//!
//! Does NOT handle:
//! - Storing the loaded value (see `Registry::load`).
//! - Text parsing rules themselves (see `ConfigValue::parse_env` in `kind.rs`).
//!
//! Invariants:
//! - An unset variable yields the fallback.
//! - A set variable that fails to parse yields the fallback. Only byte and
//!   character sequences accept values that are not valid Unicode.
//! - No error ever surfaces from this module.
//! - Raw environment values are never logged.

use std::env;
use std::fmt;

use crate::key::Variable;
use crate::kind::{ConfigValue, Uintptr};

/// Where a loaded value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Environment,
    Fallback,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Environment => "env",
            Source::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read `key` from the process environment, falling back on absence or parse failure.
pub fn lookup<T: ConfigValue>(key: &Variable<T>, fallback: T) -> T {
    lookup_with_source(key, fallback).0
}

/// Like [`lookup`], also reporting whether the environment supplied the value.
pub fn lookup_with_source<T: ConfigValue>(key: &Variable<T>, fallback: T) -> (T, Source) {
    let Some(raw) = env::var_os(key.name()) else {
        tracing::debug!(key = %key.name(), kind = %T::KIND, "not set, using fallback");
        return (fallback, Source::Fallback);
    };

    match T::parse_env_os(&raw) {
        Some(value) => (value, Source::Environment),
        None if raw.to_str().is_none() => {
            tracing::debug!(key = %key.name(), kind = %T::KIND, "not valid unicode, using fallback");
            (fallback, Source::Fallback)
        }
        None => {
            tracing::debug!(key = %key.name(), kind = %T::KIND, "unparsable value, using fallback");
            (fallback, Source::Fallback)
        }
    }
}

/// True if the variable is set, regardless of whether it parses.
pub fn is_set(name: &str) -> bool {
    env::var_os(name).is_some()
}

pub fn string(key: &Variable<String>, fallback: String) -> String {
    lookup(key, fallback)
}

pub fn int(key: &Variable<isize>, fallback: isize) -> isize {
    lookup(key, fallback)
}

pub fn int8(key: &Variable<i8>, fallback: i8) -> i8 {
    lookup(key, fallback)
}

pub fn int16(key: &Variable<i16>, fallback: i16) -> i16 {
    lookup(key, fallback)
}

pub fn int32(key: &Variable<i32>, fallback: i32) -> i32 {
    lookup(key, fallback)
}

pub fn int64(key: &Variable<i64>, fallback: i64) -> i64 {
    lookup(key, fallback)
}

pub fn uint(key: &Variable<usize>, fallback: usize) -> usize {
    lookup(key, fallback)
}

pub fn uint8(key: &Variable<u8>, fallback: u8) -> u8 {
    lookup(key, fallback)
}

pub fn uint16(key: &Variable<u16>, fallback: u16) -> u16 {
    lookup(key, fallback)
}

pub fn uint32(key: &Variable<u32>, fallback: u32) -> u32 {
    lookup(key, fallback)
}

pub fn uint64(key: &Variable<u64>, fallback: u64) -> u64 {
    lookup(key, fallback)
}

pub fn uintptr(key: &Variable<Uintptr>, fallback: Uintptr) -> Uintptr {
    lookup(key, fallback)
}

/// The variable's bytes; valid Unicode is not required.
pub fn bytes(key: &Variable<Vec<u8>>, fallback: Vec<u8>) -> Vec<u8> {
    lookup(key, fallback)
}

/// The text as Unicode scalar values; invalid sequences become U+FFFD.
pub fn runes(key: &Variable<Vec<char>>, fallback: Vec<char>) -> Vec<char> {
    lookup(key, fallback)
}

pub fn float32(key: &Variable<f32>, fallback: f32) -> f32 {
    lookup(key, fallback)
}

pub fn float64(key: &Variable<f64>, fallback: f64) -> f64 {
    lookup(key, fallback)
}

/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn bool(key: &Variable<bool>, fallback: bool) -> bool {
    lookup(key, fallback)
}
