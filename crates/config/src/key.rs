//! Typed configuration keys.
//!
//! Responsibilities:
//! - Define `Variable<T>`, a string-backed key tagged with its value kind at the type level.
//! - Define `Key`, the type-erased form used for heterogeneous key lists.
//!
//! Does NOT handle:
//! - Reading values from the environment (see `env.rs`).
//! - Storing values (see `registry.rs`).
//!
//! Invariants:
//! - Equality, ordering and hashing of `Variable<T>` use the name only.
//! - `Variable<T>` implements `Borrow<str>`, which is sound because of the above.
//! - The type tag never affects identity; it only selects a map inside the registry.

use std::borrow::{Borrow, Cow};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::kind::{ConfigValue, ValueKind};

/// A configuration key whose value is of type `T`.
///
/// The name is the environment variable read by the loader. Keys are usually
/// declared as constants by the component that consumes them:
///
/// ```
/// use configura::Variable;
///
/// pub const PORT: Variable<u16> = Variable::new("PORT");
/// pub const DEBUG: Variable<bool> = Variable::new("DEBUG");
///
/// assert_eq!(PORT.name(), "PORT");
/// ```
pub struct Variable<T: ConfigValue> {
    name: Cow<'static, str>,
    // fn() -> T keeps Variable<T> Send + Sync regardless of T
    _kind: PhantomData<fn() -> T>,
}

impl<T: ConfigValue> Variable<T> {
    /// Declare a key with a static name.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            _kind: PhantomData,
        }
    }

    /// Declare a key whose name is only known at runtime.
    pub fn owned(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            _kind: PhantomData,
        }
    }

    /// The key name, which is also the environment variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value kind this key was declared with.
    pub const fn kind(&self) -> ValueKind {
        T::KIND
    }

    /// Erase the type tag, keeping the kind as a runtime value.
    pub fn key(&self) -> Key {
        Key {
            name: self.name.clone(),
            kind: T::KIND,
        }
    }
}

impl<T: ConfigValue> Clone for Variable<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            _kind: PhantomData,
        }
    }
}

impl<T: ConfigValue> PartialEq for Variable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T: ConfigValue> Eq for Variable<T> {}

impl<T: ConfigValue> PartialOrd for Variable<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: ConfigValue> Ord for Variable<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl<T: ConfigValue> Hash for Variable<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl<T: ConfigValue> Borrow<str> for Variable<T> {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl<T: ConfigValue> fmt::Debug for Variable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variable<{}>({:?})", T::KIND, self.name())
    }
}

impl<T: ConfigValue> fmt::Display for Variable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A key with its kind carried as a runtime value.
///
/// Lets keys of different kinds share one list, which is what the
/// completeness check takes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    name: Cow<'static, str>,
    kind: ValueKind,
}

impl Key {
    /// Build a key from a runtime kind.
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            kind,
        }
    }

    /// The environment variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The kind whose map this key lives in.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.kind)
    }
}

impl<T: ConfigValue> From<Variable<T>> for Key {
    fn from(variable: Variable<T>) -> Self {
        Self {
            name: variable.name,
            kind: T::KIND,
        }
    }
}

impl<T: ConfigValue> From<&Variable<T>> for Key {
    fn from(variable: &Variable<T>) -> Self {
        variable.key()
    }
}

/// Build a `Vec<Key>` from typed keys of any kind.
///
/// ```
/// use configura::{keys, Variable};
///
/// const HOST: Variable<String> = Variable::new("HOST");
/// const PORT: Variable<u16> = Variable::new("PORT");
///
/// let required = keys![HOST, PORT];
/// assert_eq!(required.len(), 2);
/// ```
#[macro_export]
macro_rules! keys {
    ($($variable:expr),* $(,)?) => {
        ::std::vec![$($crate::Key::from(&$variable)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const PORT: Variable<u16> = Variable::new("PORT");

    #[test]
    fn test_identity_is_name_only() {
        let runtime: Variable<u16> = Variable::owned(String::from("PORT"));
        assert_eq!(PORT, runtime);

        let mut set = HashSet::new();
        set.insert(PORT);
        assert!(set.contains(&runtime));
        assert!(set.contains("PORT"), "Borrow<str> lookup should hash like the key");
    }

    #[test]
    fn test_erased_key_keeps_kind() {
        let key = PORT.key();
        assert_eq!(key.name(), "PORT");
        assert_eq!(key.kind(), ValueKind::Uint16);
        assert_eq!(key.to_string(), "PORT:uint16");
    }

    #[test]
    fn test_same_name_different_kind_keys_differ_when_erased() {
        let as_text: Variable<String> = Variable::new("PORT");
        assert_ne!(Key::from(&as_text), Key::from(&PORT));
    }

    #[test]
    fn test_keys_macro_accepts_mixed_kinds() {
        const DEBUG: Variable<bool> = Variable::new("DEBUG");
        let list = keys![PORT, DEBUG,];
        assert_eq!(
            list,
            vec![Key::new("PORT", ValueKind::Uint16), Key::new("DEBUG", ValueKind::Bool)]
        );
    }

    #[test]
    fn test_debug_includes_kind() {
        assert_eq!(format!("{:?}", PORT), "Variable<uint16>(\"PORT\")");
    }
}
