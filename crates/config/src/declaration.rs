//! Textual key declarations of the form `NAME:KIND[=FALLBACK]`.
//!
//! Used where keys come from outside the program (command-line flags,
//! scripts) rather than from `Variable<T>` constants.

use std::str::FromStr;

use crate::env::Source;
use crate::error::ConfigError;
use crate::key::Key;
use crate::kind::{Value, ValueKind};
use crate::registry::Registry;

/// A key declared at runtime, with an optional fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    name: String,
    kind: ValueKind,
    fallback: Option<Value>,
}

impl Declaration {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn fallback(&self) -> Option<&Value> {
        self.fallback.as_ref()
    }

    pub fn key(&self) -> Key {
        Key::new(self.name.clone(), self.kind)
    }

    /// Load into `registry`, using the kind's zero value when no fallback was given.
    ///
    /// Returns whether the stored value came from the environment.
    pub fn load_into(&self, registry: &mut Registry) -> Source {
        let fallback = self
            .fallback
            .clone()
            .unwrap_or_else(|| self.kind.zero_value());
        registry.load_value_with_source(&self.name, fallback)
    }
}

impl FromStr for Declaration {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| ConfigError::InvalidDeclaration {
            input: input.to_string(),
            message: message.to_string(),
        };

        let (head, fallback_text) = match input.split_once('=') {
            Some((head, fallback)) => (head, Some(fallback)),
            None => (input, None),
        };

        let (name, kind_text) = head
            .rsplit_once(':')
            .ok_or_else(|| invalid("expected NAME:KIND"))?;

        if name.is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if name.contains('\0') {
            return Err(invalid("name must not contain NUL"));
        }

        let kind: ValueKind = kind_text
            .parse()
            .map_err(|_| invalid(&format!("unknown kind '{kind_text}'")))?;

        let fallback = match fallback_text {
            Some(text) => Some(
                kind.parse_value(text)
                    .ok_or_else(|| invalid(&format!("fallback is not a valid {kind}")))?,
            ),
            None => None,
        };

        Ok(Self {
            name: name.to_string(),
            kind,
            fallback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parses_name_kind_and_fallback() {
        let decl: Declaration = "PORT:uint16=8080".parse().unwrap();
        assert_eq!(decl.name(), "PORT");
        assert_eq!(decl.kind(), ValueKind::Uint16);
        assert_eq!(decl.fallback(), Some(&Value::Uint16(8080)));
        assert_eq!(decl.key(), Key::new("PORT", ValueKind::Uint16));
    }

    #[test]
    fn test_fallback_is_optional_and_may_contain_separators() {
        let decl: Declaration = "DEBUG:bool".parse().unwrap();
        assert_eq!(decl.fallback(), None);

        let decl: Declaration = "DSN:string=postgres://u:p@h/db?a=b".parse().unwrap();
        assert_eq!(
            decl.fallback(),
            Some(&Value::String("postgres://u:p@h/db?a=b".into()))
        );

        let decl: Declaration = "BANNER:string=".parse().unwrap();
        assert_eq!(decl.fallback(), Some(&Value::String(String::new())));
    }

    #[test]
    fn test_rejects_malformed_declarations() {
        for input in ["PORT", ":int", "PORT:complex", "PORT:uint8=256", "RATIO:float32=x"] {
            let err = input.parse::<Declaration>().unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidDeclaration { input: ref got, .. } if got == input),
                "{input}: {err}"
            );
        }
    }

    #[test]
    #[serial]
    fn test_load_into_reports_source() {
        let decl: Declaration = "_CONFIGURA_TEST_DECL:int32=5".parse().unwrap();
        let key = decl.key();

        temp_env::with_var(decl.name(), Some("12"), || {
            let mut registry = Registry::new();
            assert_eq!(decl.load_into(&mut registry), Source::Environment);
            assert!(registry.contains(&key));
        });

        temp_env::with_var(decl.name(), Some("twelve"), || {
            let mut registry = Registry::new();
            assert_eq!(decl.load_into(&mut registry), Source::Fallback);
            let entries = registry.entries();
            assert_eq!(entries, vec![(key.clone(), Value::Int32(5))]);
        });
    }

    #[test]
    #[serial]
    fn test_missing_fallback_loads_zero_value() {
        let decl: Declaration = "_CONFIGURA_TEST_DECL_ZERO:runes".parse().unwrap();
        temp_env::with_var_unset(decl.name(), || {
            let mut registry = Registry::new();
            decl.load_into(&mut registry);
            assert_eq!(registry.entries(), vec![(decl.key(), Value::Runes(Vec::new()))]);
        });
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_non_unicode_bytes_come_from_environment() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let bytes: Declaration = "_CONFIGURA_TEST_DECL_RAW:bytes=fb".parse().unwrap();
        let text: Declaration = "_CONFIGURA_TEST_DECL_RAW:string=fb".parse().unwrap();
        temp_env::with_var(bytes.name(), Some(OsStr::from_bytes(&[0x66, 0x6f, 0x80])), || {
            let mut registry = Registry::new();
            assert_eq!(bytes.load_into(&mut registry), Source::Environment);
            assert_eq!(text.load_into(&mut registry), Source::Fallback);
            assert_eq!(
                registry.entries(),
                vec![
                    (text.key(), Value::String("fb".into())),
                    (bytes.key(), Value::Bytes(vec![0x66, 0x6f, 0x80])),
                ]
            );
        });
    }
}
