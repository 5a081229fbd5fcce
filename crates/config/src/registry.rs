//! The per-kind configuration store.
//!
//! Responsibilities:
//! - Hold one map per value kind, keyed by `Variable<T>`.
//! - Load keys from the environment (typed and runtime-kind forms).
//! - Check that a list of keys was loaded, aggregating every missing name.
//! - Read values back, with zero-value and presence-aware accessors.
//! - Combine registries built by separate modules.
//!
//! Does NOT handle:
//! - Text parsing (see `kind.rs`) or environment access (see `env.rs`).
//! - Read-only sharing after startup (see `SharedConfig` in `config.rs`).
//!
//! Invariants:
//! - A key lives only in the map of its declared kind.
//! - Loading the same key again overwrites it (last write wins).
//! - `merge` lets the right-hand registry win; `merge_strict` refuses any overlap.
//! - Every per-kind operation destructures `Registry` or matches `ValueKind`
//!   exhaustively, so a new kind must be handled everywhere before it compiles.

use std::collections::{BTreeMap, HashMap};

use crate::config::SharedConfig;
use crate::env::{self, Source};
use crate::error::{ConfigError, MissingVariables};
use crate::key::{Key, Variable};
use crate::kind::{ConfigValue, Uintptr, Value, ValueKind};

type Slot<T> = HashMap<Variable<T>, T>;

/// Configuration values loaded from the environment, one map per kind.
///
/// Built once at startup:
///
/// ```
/// use configura::{keys, Registry, Variable};
///
/// const HOST: Variable<String> = Variable::new("_CONFIGURA_DOC_HOST");
/// const PORT: Variable<u16> = Variable::new("_CONFIGURA_DOC_PORT");
///
/// let mut registry = Registry::new();
/// registry
///     .load(&HOST, "localhost".to_string())
///     .load(&PORT, 8080);
///
/// registry.check_registered(&keys![HOST, PORT]).unwrap();
/// assert_eq!(registry.get(&PORT), 8080);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    pub(crate) strings: Slot<String>,
    pub(crate) ints: Slot<isize>,
    pub(crate) int8s: Slot<i8>,
    pub(crate) int16s: Slot<i16>,
    pub(crate) int32s: Slot<i32>,
    pub(crate) int64s: Slot<i64>,
    pub(crate) uints: Slot<usize>,
    pub(crate) uint8s: Slot<u8>,
    pub(crate) uint16s: Slot<u16>,
    pub(crate) uint32s: Slot<u32>,
    pub(crate) uint64s: Slot<u64>,
    pub(crate) uintptrs: Slot<Uintptr>,
    pub(crate) bytes: Slot<Vec<u8>>,
    pub(crate) runes: Slot<Vec<char>>,
    pub(crate) float32s: Slot<f32>,
    pub(crate) float64s: Slot<f64>,
    pub(crate) bools: Slot<bool>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `key` from the environment, storing `fallback` if it is unset or unparsable.
    pub fn load<T: ConfigValue>(&mut self, key: &Variable<T>, fallback: T) -> &mut Self {
        self.load_with_source(key, fallback);
        self
    }

    /// Load a key whose kind is only known at runtime, taken from `fallback`.
    pub fn load_value(&mut self, name: &str, fallback: Value) -> &mut Self {
        self.load_value_with_source(name, fallback);
        self
    }

    pub(crate) fn load_with_source<T: ConfigValue>(
        &mut self,
        key: &Variable<T>,
        fallback: T,
    ) -> Source {
        let (value, source) = env::lookup_with_source(key, fallback);
        T::slot_mut(self).insert(key.clone(), value);
        source
    }

    pub(crate) fn load_value_with_source(&mut self, name: &str, fallback: Value) -> Source {
        match fallback {
            Value::String(v) => self.load_with_source(&Variable::<String>::owned(name), v),
            Value::Int(v) => self.load_with_source(&Variable::<isize>::owned(name), v),
            Value::Int8(v) => self.load_with_source(&Variable::<i8>::owned(name), v),
            Value::Int16(v) => self.load_with_source(&Variable::<i16>::owned(name), v),
            Value::Int32(v) => self.load_with_source(&Variable::<i32>::owned(name), v),
            Value::Int64(v) => self.load_with_source(&Variable::<i64>::owned(name), v),
            Value::Uint(v) => self.load_with_source(&Variable::<usize>::owned(name), v),
            Value::Uint8(v) => self.load_with_source(&Variable::<u8>::owned(name), v),
            Value::Uint16(v) => self.load_with_source(&Variable::<u16>::owned(name), v),
            Value::Uint32(v) => self.load_with_source(&Variable::<u32>::owned(name), v),
            Value::Uint64(v) => self.load_with_source(&Variable::<u64>::owned(name), v),
            Value::Uintptr(v) => self.load_with_source(&Variable::<Uintptr>::owned(name), v),
            Value::Bytes(v) => self.load_with_source(&Variable::<Vec<u8>>::owned(name), v),
            Value::Runes(v) => self.load_with_source(&Variable::<Vec<char>>::owned(name), v),
            Value::Float32(v) => self.load_with_source(&Variable::<f32>::owned(name), v),
            Value::Float64(v) => self.load_with_source(&Variable::<f64>::owned(name), v),
            Value::Bool(v) => self.load_with_source(&Variable::<bool>::owned(name), v),
        }
    }

    /// Whether `key` was loaded under its kind.
    pub fn contains(&self, key: &Key) -> bool {
        let name = key.name();
        match key.kind() {
            ValueKind::String => self.strings.contains_key(name),
            ValueKind::Int => self.ints.contains_key(name),
            ValueKind::Int8 => self.int8s.contains_key(name),
            ValueKind::Int16 => self.int16s.contains_key(name),
            ValueKind::Int32 => self.int32s.contains_key(name),
            ValueKind::Int64 => self.int64s.contains_key(name),
            ValueKind::Uint => self.uints.contains_key(name),
            ValueKind::Uint8 => self.uint8s.contains_key(name),
            ValueKind::Uint16 => self.uint16s.contains_key(name),
            ValueKind::Uint32 => self.uint32s.contains_key(name),
            ValueKind::Uint64 => self.uint64s.contains_key(name),
            ValueKind::Uintptr => self.uintptrs.contains_key(name),
            ValueKind::Bytes => self.bytes.contains_key(name),
            ValueKind::Runes => self.runes.contains_key(name),
            ValueKind::Float32 => self.float32s.contains_key(name),
            ValueKind::Float64 => self.float64s.contains_key(name),
            ValueKind::Bool => self.bools.contains_key(name),
        }
    }

    /// Check that every key in `keys` was loaded.
    ///
    /// Meant to run once at startup with the union of keys every component
    /// needs. All absent names are reported together, in input order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVariables` if any key is absent.
    pub fn check_registered(&self, keys: &[Key]) -> Result<(), ConfigError> {
        let ambiguous = self.ambiguous_names();
        if !ambiguous.is_empty() {
            tracing::warn!(
                names = %ambiguous.join(", "),
                "configuration variables registered under more than one kind"
            );
        }

        let missing = keys
            .iter()
            .filter(|key| !self.contains(key))
            .map(|key| key.name().to_string())
            .collect();

        match MissingVariables::from_keys(missing) {
            None => {
                tracing::info!(checked = keys.len(), "all configuration variables registered");
                Ok(())
            }
            Some(missing) => {
                tracing::warn!(missing = %missing.keys().join(", "), "missing configuration variables");
                Err(missing.into())
            }
        }
    }

    /// The stored value, or the kind's zero value if `key` was never loaded.
    pub fn get<T: ConfigValue>(&self, key: &Variable<T>) -> T {
        self.try_get(key).cloned().unwrap_or_default()
    }

    /// The stored value, or `None` if `key` was never loaded.
    pub fn try_get<T: ConfigValue>(&self, key: &Variable<T>) -> Option<&T> {
        T::slot(self).get(key)
    }

    /// Number of loaded keys across all kinds.
    pub fn len(&self) -> usize {
        let Registry {
            strings,
            ints,
            int8s,
            int16s,
            int32s,
            int64s,
            uints,
            uint8s,
            uint16s,
            uint32s,
            uint64s,
            uintptrs,
            bytes,
            runes,
            float32s,
            float64s,
            bools,
        } = self;

        strings.len()
            + ints.len()
            + int8s.len()
            + int16s.len()
            + int32s.len()
            + int64s.len()
            + uints.len()
            + uint8s.len()
            + uint16s.len()
            + uint32s.len()
            + uint64s.len()
            + uintptrs.len()
            + bytes.len()
            + runes.len()
            + float32s.len()
            + float64s.len()
            + bools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every loaded key with its value, sorted by name then kind.
    pub fn entries(&self) -> Vec<(Key, Value)> {
        let Registry {
            strings,
            ints,
            int8s,
            int16s,
            int32s,
            int64s,
            uints,
            uint8s,
            uint16s,
            uint32s,
            uint64s,
            uintptrs,
            bytes,
            runes,
            float32s,
            float64s,
            bools,
        } = self;

        let mut out = Vec::with_capacity(self.len());
        collect_entries(strings, &mut out);
        collect_entries(ints, &mut out);
        collect_entries(int8s, &mut out);
        collect_entries(int16s, &mut out);
        collect_entries(int32s, &mut out);
        collect_entries(int64s, &mut out);
        collect_entries(uints, &mut out);
        collect_entries(uint8s, &mut out);
        collect_entries(uint16s, &mut out);
        collect_entries(uint32s, &mut out);
        collect_entries(uint64s, &mut out);
        collect_entries(uintptrs, &mut out);
        collect_entries(bytes, &mut out);
        collect_entries(runes, &mut out);
        collect_entries(float32s, &mut out);
        collect_entries(float64s, &mut out);
        collect_entries(bools, &mut out);
        out.sort_by(|(a, _), (b, _)| a.cmp(b));
        out
    }

    /// Names loaded under more than one kind, sorted.
    ///
    /// Such names are legal but usually a mistake: each kind reads the same
    /// environment variable independently.
    pub fn ambiguous_names(&self) -> Vec<String> {
        let mut kinds_per_name: BTreeMap<String, usize> = BTreeMap::new();
        for (key, _) in self.entries() {
            *kinds_per_name.entry(key.name().to_string()).or_default() += 1;
        }
        kinds_per_name
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, _)| name)
            .collect()
    }

    /// Combine two registries. Where both hold the same key and kind, `other` wins.
    pub fn merge(mut self, other: Registry) -> Registry {
        let Registry {
            strings,
            ints,
            int8s,
            int16s,
            int32s,
            int64s,
            uints,
            uint8s,
            uint16s,
            uint32s,
            uint64s,
            uintptrs,
            bytes,
            runes,
            float32s,
            float64s,
            bools,
        } = other;

        extend_overriding(&mut self.strings, strings);
        extend_overriding(&mut self.ints, ints);
        extend_overriding(&mut self.int8s, int8s);
        extend_overriding(&mut self.int16s, int16s);
        extend_overriding(&mut self.int32s, int32s);
        extend_overriding(&mut self.int64s, int64s);
        extend_overriding(&mut self.uints, uints);
        extend_overriding(&mut self.uint8s, uint8s);
        extend_overriding(&mut self.uint16s, uint16s);
        extend_overriding(&mut self.uint32s, uint32s);
        extend_overriding(&mut self.uint64s, uint64s);
        extend_overriding(&mut self.uintptrs, uintptrs);
        extend_overriding(&mut self.bytes, bytes);
        extend_overriding(&mut self.runes, runes);
        extend_overriding(&mut self.float32s, float32s);
        extend_overriding(&mut self.float64s, float64s);
        extend_overriding(&mut self.bools, bools);
        self
    }

    /// Combine two registries, refusing any key and kind present in both.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MergeConflict` listing every overlapping name (sorted).
    pub fn merge_strict(self, other: Registry) -> Result<Registry, ConfigError> {
        let conflicts = self.overlap(&other);
        if !conflicts.is_empty() {
            return Err(ConfigError::MergeConflict { keys: conflicts });
        }
        Ok(self.merge(other))
    }

    /// Consume the registry, returning a read-only handle that can be shared across threads.
    pub fn freeze(self) -> SharedConfig {
        SharedConfig::from(self)
    }

    fn overlap(&self, other: &Registry) -> Vec<String> {
        let Registry {
            strings,
            ints,
            int8s,
            int16s,
            int32s,
            int64s,
            uints,
            uint8s,
            uint16s,
            uint32s,
            uint64s,
            uintptrs,
            bytes,
            runes,
            float32s,
            float64s,
            bools,
        } = other;

        let mut names = Vec::new();
        collect_overlap(&self.strings, strings, &mut names);
        collect_overlap(&self.ints, ints, &mut names);
        collect_overlap(&self.int8s, int8s, &mut names);
        collect_overlap(&self.int16s, int16s, &mut names);
        collect_overlap(&self.int32s, int32s, &mut names);
        collect_overlap(&self.int64s, int64s, &mut names);
        collect_overlap(&self.uints, uints, &mut names);
        collect_overlap(&self.uint8s, uint8s, &mut names);
        collect_overlap(&self.uint16s, uint16s, &mut names);
        collect_overlap(&self.uint32s, uint32s, &mut names);
        collect_overlap(&self.uint64s, uint64s, &mut names);
        collect_overlap(&self.uintptrs, uintptrs, &mut names);
        collect_overlap(&self.bytes, bytes, &mut names);
        collect_overlap(&self.runes, runes, &mut names);
        collect_overlap(&self.float32s, float32s, &mut names);
        collect_overlap(&self.float64s, float64s, &mut names);
        collect_overlap(&self.bools, bools, &mut names);
        names.sort();
        names.dedup();
        names
    }
}

/// Fold any number of registries left to right with [`Registry::merge`].
pub fn merge_all(registries: impl IntoIterator<Item = Registry>) -> Registry {
    registries.into_iter().fold(Registry::new(), Registry::merge)
}

fn collect_entries<T: ConfigValue>(slot: &Slot<T>, out: &mut Vec<(Key, Value)>) {
    out.extend(slot.iter().map(|(key, value)| (key.key(), value.to_value())));
}

fn extend_overriding<T: ConfigValue>(target: &mut Slot<T>, source: Slot<T>) {
    for (key, value) in source {
        if target.contains_key(&key) {
            tracing::debug!(key = %key.name(), kind = %T::KIND, "merge overrides existing value");
        }
        target.insert(key, value);
    }
}

fn collect_overlap<T: ConfigValue>(left: &Slot<T>, right: &Slot<T>, out: &mut Vec<String>) {
    out.extend(
        right
            .keys()
            .filter(|key| left.contains_key(*key))
            .map(|key| key.name().to_string()),
    );
}

#[cfg(test)]
mod tests;
