//! The closed set of value kinds a key can carry.
//!
//! Responsibilities:
//! - Define `ValueKind` (runtime tag) and `Value` (tagged union) over the seventeen kinds.
//! - Define the sealed `ConfigValue` trait implemented by exactly the seventeen Rust types.
//! - Hold the text parsing rule for each kind.
//!
//! Does NOT handle:
//! - Environment lookups (see `env.rs`).
//! - Map storage (see `registry.rs`); the trait only exposes which map a type lives in.
//!
//! Invariants:
//! - Every `match` over `ValueKind` or `Value` in this crate is exhaustive with no
//!   wildcard arm, so a new kind fails to compile until every dispatch site handles it.
//! - `ConfigValue` is sealed; downstream crates cannot add kinds.
//! - Parsing never trims whitespace and never panics.
//! - Byte and character sequences accept any OS string, valid Unicode or not.

use std::borrow::Cow;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ConfigError;
use crate::key::Variable;
use crate::registry::Registry;

/// A pointer-sized unsigned integer.
///
/// Shares its representation with `usize` but is a distinct kind with its own
/// map, so a `Variable<Uintptr>` and a `Variable<usize>` never collide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Uintptr(pub usize);

impl From<usize> for Uintptr {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<Uintptr> for usize {
    fn from(value: Uintptr) -> Self {
        value.0
    }
}

impl fmt::Display for Uintptr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Runtime tag for each supported value kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    String,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Bytes,
    Runes,
    Float32,
    Float64,
    Bool,
}

impl ValueKind {
    /// Every kind, in declaration order.
    pub const ALL: [ValueKind; 17] = [
        ValueKind::String,
        ValueKind::Int,
        ValueKind::Int8,
        ValueKind::Int16,
        ValueKind::Int32,
        ValueKind::Int64,
        ValueKind::Uint,
        ValueKind::Uint8,
        ValueKind::Uint16,
        ValueKind::Uint32,
        ValueKind::Uint64,
        ValueKind::Uintptr,
        ValueKind::Bytes,
        ValueKind::Runes,
        ValueKind::Float32,
        ValueKind::Float64,
        ValueKind::Bool,
    ];

    /// Canonical lowercase name, as accepted by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Int8 => "int8",
            ValueKind::Int16 => "int16",
            ValueKind::Int32 => "int32",
            ValueKind::Int64 => "int64",
            ValueKind::Uint => "uint",
            ValueKind::Uint8 => "uint8",
            ValueKind::Uint16 => "uint16",
            ValueKind::Uint32 => "uint32",
            ValueKind::Uint64 => "uint64",
            ValueKind::Uintptr => "uintptr",
            ValueKind::Bytes => "bytes",
            ValueKind::Runes => "runes",
            ValueKind::Float32 => "float32",
            ValueKind::Float64 => "float64",
            ValueKind::Bool => "bool",
        }
    }

    /// The value `get` returns for a key that was never loaded.
    pub fn zero_value(self) -> Value {
        match self {
            ValueKind::String => Value::String(String::new()),
            ValueKind::Int => Value::Int(0),
            ValueKind::Int8 => Value::Int8(0),
            ValueKind::Int16 => Value::Int16(0),
            ValueKind::Int32 => Value::Int32(0),
            ValueKind::Int64 => Value::Int64(0),
            ValueKind::Uint => Value::Uint(0),
            ValueKind::Uint8 => Value::Uint8(0),
            ValueKind::Uint16 => Value::Uint16(0),
            ValueKind::Uint32 => Value::Uint32(0),
            ValueKind::Uint64 => Value::Uint64(0),
            ValueKind::Uintptr => Value::Uintptr(Uintptr(0)),
            ValueKind::Bytes => Value::Bytes(Vec::new()),
            ValueKind::Runes => Value::Runes(Vec::new()),
            ValueKind::Float32 => Value::Float32(0.0),
            ValueKind::Float64 => Value::Float64(0.0),
            ValueKind::Bool => Value::Bool(false),
        }
    }

    /// Parse text with this kind's environment rule.
    ///
    /// Returns `None` where the loader would fall back.
    pub fn parse_value(self, raw: &str) -> Option<Value> {
        match self {
            ValueKind::String => String::parse_env(raw).map(Value::String),
            ValueKind::Int => isize::parse_env(raw).map(Value::Int),
            ValueKind::Int8 => i8::parse_env(raw).map(Value::Int8),
            ValueKind::Int16 => i16::parse_env(raw).map(Value::Int16),
            ValueKind::Int32 => i32::parse_env(raw).map(Value::Int32),
            ValueKind::Int64 => i64::parse_env(raw).map(Value::Int64),
            ValueKind::Uint => usize::parse_env(raw).map(Value::Uint),
            ValueKind::Uint8 => u8::parse_env(raw).map(Value::Uint8),
            ValueKind::Uint16 => u16::parse_env(raw).map(Value::Uint16),
            ValueKind::Uint32 => u32::parse_env(raw).map(Value::Uint32),
            ValueKind::Uint64 => u64::parse_env(raw).map(Value::Uint64),
            ValueKind::Uintptr => Uintptr::parse_env(raw).map(Value::Uintptr),
            ValueKind::Bytes => Vec::<u8>::parse_env(raw).map(Value::Bytes),
            ValueKind::Runes => Vec::<char>::parse_env(raw).map(Value::Runes),
            ValueKind::Float32 => f32::parse_env(raw).map(Value::Float32),
            ValueKind::Float64 => f64::parse_env(raw).map(Value::Float64),
            ValueKind::Bool => bool::parse_env(raw).map(Value::Bool),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = ConfigError;

    /// Accepts the canonical names and the matching Rust primitive names
    /// (`u16`, `i64`, `f32`, `usize`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.to_ascii_lowercase().as_str() {
            "string" | "str" => ValueKind::String,
            "int" | "isize" => ValueKind::Int,
            "int8" | "i8" => ValueKind::Int8,
            "int16" | "i16" => ValueKind::Int16,
            "int32" | "i32" => ValueKind::Int32,
            "int64" | "i64" => ValueKind::Int64,
            "uint" | "usize" => ValueKind::Uint,
            "uint8" | "u8" => ValueKind::Uint8,
            "uint16" | "u16" => ValueKind::Uint16,
            "uint32" | "u32" => ValueKind::Uint32,
            "uint64" | "u64" => ValueKind::Uint64,
            "uintptr" => ValueKind::Uintptr,
            "bytes" => ValueKind::Bytes,
            "runes" | "chars" => ValueKind::Runes,
            "float32" | "f32" => ValueKind::Float32,
            "float64" | "f64" => ValueKind::Float64,
            "bool" => ValueKind::Bool,
            _ => return Err(ConfigError::UnknownKind(s.to_string())),
        };
        Ok(kind)
    }
}

/// A value of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(isize),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint(usize),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Uintptr(Uintptr),
    Bytes(Vec<u8>),
    Runes(Vec<char>),
    Float32(f32),
    Float64(f64),
    Bool(bool),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Int(_) => ValueKind::Int,
            Value::Int8(_) => ValueKind::Int8,
            Value::Int16(_) => ValueKind::Int16,
            Value::Int32(_) => ValueKind::Int32,
            Value::Int64(_) => ValueKind::Int64,
            Value::Uint(_) => ValueKind::Uint,
            Value::Uint8(_) => ValueKind::Uint8,
            Value::Uint16(_) => ValueKind::Uint16,
            Value::Uint32(_) => ValueKind::Uint32,
            Value::Uint64(_) => ValueKind::Uint64,
            Value::Uintptr(_) => ValueKind::Uintptr,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Runes(_) => ValueKind::Runes,
            Value::Float32(_) => ValueKind::Float32,
            Value::Float64(_) => ValueKind::Float64,
            Value::Bool(_) => ValueKind::Bool,
        }
    }
}

impl fmt::Display for Value {
    /// Byte sequences are shown as (lossy) UTF-8 text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(v) => f.write_str(v),
            Value::Int(v) => v.fmt(f),
            Value::Int8(v) => v.fmt(f),
            Value::Int16(v) => v.fmt(f),
            Value::Int32(v) => v.fmt(f),
            Value::Int64(v) => v.fmt(f),
            Value::Uint(v) => v.fmt(f),
            Value::Uint8(v) => v.fmt(f),
            Value::Uint16(v) => v.fmt(f),
            Value::Uint32(v) => v.fmt(f),
            Value::Uint64(v) => v.fmt(f),
            Value::Uintptr(v) => v.fmt(f),
            Value::Bytes(v) => f.write_str(&String::from_utf8_lossy(v)),
            Value::Runes(v) => f.write_str(&v.iter().collect::<String>()),
            Value::Float32(v) => v.fmt(f),
            Value::Float64(v) => v.fmt(f),
            Value::Bool(v) => v.fmt(f),
        }
    }
}

impl Serialize for Value {
    /// Serializes the bare value: bytes as an array of numbers, runes as a string.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(v) => serializer.serialize_str(v),
            Value::Int(v) => serializer.serialize_i64(*v as i64),
            Value::Int8(v) => serializer.serialize_i8(*v),
            Value::Int16(v) => serializer.serialize_i16(*v),
            Value::Int32(v) => serializer.serialize_i32(*v),
            Value::Int64(v) => serializer.serialize_i64(*v),
            Value::Uint(v) => serializer.serialize_u64(*v as u64),
            Value::Uint8(v) => serializer.serialize_u8(*v),
            Value::Uint16(v) => serializer.serialize_u16(*v),
            Value::Uint32(v) => serializer.serialize_u32(*v),
            Value::Uint64(v) => serializer.serialize_u64(*v),
            Value::Uintptr(v) => v.serialize(serializer),
            Value::Bytes(v) => v.serialize(serializer),
            Value::Runes(v) => serializer.serialize_str(&v.iter().collect::<String>()),
            Value::Float32(v) => serializer.serialize_f32(*v),
            Value::Float64(v) => serializer.serialize_f64(*v),
            Value::Bool(v) => serializer.serialize_bool(*v),
        }
    }
}

pub(crate) mod sealed {
    use super::*;

    /// Which registry map a type is stored in. Private to the crate.
    pub trait Sealed: Sized {
        fn slot(registry: &Registry) -> &HashMap<Variable<Self>, Self>
        where
            Self: ConfigValue;

        fn slot_mut(registry: &mut Registry) -> &mut HashMap<Variable<Self>, Self>
        where
            Self: ConfigValue;
    }
}

/// A Rust type that can be stored in the registry.
///
/// Implemented for exactly the seventeen supported types. `Default` is the
/// kind's zero value.
pub trait ConfigValue:
    sealed::Sealed + Clone + Default + PartialEq + fmt::Debug + Send + Sync + 'static
{
    /// The runtime tag of this type.
    const KIND: ValueKind;

    /// Parse raw environment text. `None` means the loader falls back.
    fn parse_env(raw: &str) -> Option<Self>;

    /// Parse the variable as the OS stores it. Text kinds require valid Unicode.
    fn parse_env_os(raw: &OsStr) -> Option<Self> {
        raw.to_str().and_then(Self::parse_env)
    }

    /// Copy into the tagged union.
    fn to_value(&self) -> Value;
}

macro_rules! config_value {
    ($ty:ty, $kind:ident, $field:ident, $parse:expr $(, os = $parse_os:expr)?) => {
        impl sealed::Sealed for $ty {
            fn slot(registry: &Registry) -> &HashMap<Variable<Self>, Self> {
                &registry.$field
            }

            fn slot_mut(registry: &mut Registry) -> &mut HashMap<Variable<Self>, Self> {
                &mut registry.$field
            }
        }

        impl ConfigValue for $ty {
            const KIND: ValueKind = ValueKind::$kind;

            fn parse_env(raw: &str) -> Option<Self> {
                $parse(raw)
            }

            $(
                fn parse_env_os(raw: &OsStr) -> Option<Self> {
                    $parse_os(raw)
                }
            )?

            fn to_value(&self) -> Value {
                Value::$kind(self.clone())
            }
        }
    };
}

config_value!(String, String, strings, |raw: &str| Some(raw.to_string()));
config_value!(isize, Int, ints, parse_signed::<isize>);
config_value!(i8, Int8, int8s, parse_signed::<i8>);
config_value!(i16, Int16, int16s, parse_signed::<i16>);
config_value!(i32, Int32, int32s, parse_signed::<i32>);
config_value!(i64, Int64, int64s, parse_signed::<i64>);
config_value!(usize, Uint, uints, parse_unsigned::<usize>);
config_value!(u8, Uint8, uint8s, parse_unsigned::<u8>);
config_value!(u16, Uint16, uint16s, parse_unsigned::<u16>);
config_value!(u32, Uint32, uint32s, parse_unsigned::<u32>);
config_value!(u64, Uint64, uint64s, parse_unsigned::<u64>);
config_value!(Uintptr, Uintptr, uintptrs, |raw: &str| {
    parse_unsigned::<usize>(raw).map(Uintptr)
});
config_value!(
    Vec<u8>,
    Bytes,
    bytes,
    |raw: &str| Some(raw.as_bytes().to_vec()),
    os = |raw: &OsStr| Some(os_bytes(raw).into_owned())
);
config_value!(
    Vec<char>,
    Runes,
    runes,
    |raw: &str| Some(raw.chars().collect()),
    os = |raw: &OsStr| Some(String::from_utf8_lossy(&os_bytes(raw)).chars().collect())
);
config_value!(f32, Float32, float32s, parse_float::<f32>);
config_value!(f64, Float64, float64s, parse_float::<f64>);
config_value!(bool, Bool, bools, parse_bool);

/// The variable's bytes, exactly as stored on Unix.
#[cfg(unix)]
fn os_bytes(raw: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(raw.as_bytes())
}

/// Elsewhere the OS encoding is not bytes; invalid sequences become U+FFFD.
#[cfg(not(unix))]
fn os_bytes(raw: &OsStr) -> Cow<'_, [u8]> {
    match raw.to_string_lossy() {
        Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
        Cow::Owned(text) => Cow::Owned(text.into_bytes()),
    }
}

/// Base-10 with an optional leading sign. Out-of-range input fails.
fn parse_signed<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}

/// Base-10 without a sign. Out-of-range input fails.
fn parse_unsigned<T: FromStr>(raw: &str) -> Option<T> {
    // std accepts a leading '+' for unsigned types; unsigned text carries no sign here
    if raw.starts_with('+') {
        return None;
    }
    raw.parse().ok()
}

/// Decimal or scientific notation, plus `inf`/`infinity`/`nan`.
///
/// A finite literal that overflows the target width fails instead of
/// saturating to infinity.
fn parse_float<T: FromStr + Copy + Into<f64>>(raw: &str) -> Option<T> {
    let value: T = raw.parse().ok()?;
    if value.into().is_infinite() && !is_infinity_literal(raw) {
        return None;
    }
    Some(value)
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
