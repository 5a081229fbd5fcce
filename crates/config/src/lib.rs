//! Type-indexed configuration registry populated from environment variables.
//!
//! Components declare typed keys, a startup builder loads each key from the
//! environment with a fallback, the union of every component's keys is checked
//! once, and components then read values through the [`Config`] trait.
//!
//! ```
//! use configura::{keys, Config, Registry, Variable};
//!
//! const LISTEN_PORT: Variable<u16> = Variable::new("_CONFIGURA_DOC_LISTEN_PORT");
//! const ENABLE_CACHE: Variable<bool> = Variable::new("_CONFIGURA_DOC_ENABLE_CACHE");
//!
//! let mut registry = Registry::new();
//! registry.load(&LISTEN_PORT, 8080).load(&ENABLE_CACHE, true);
//! registry.check_registered(&keys![LISTEN_PORT, ENABLE_CACHE])?;
//!
//! let config = registry.freeze();
//! assert_eq!(config.uint16(&LISTEN_PORT), 8080);
//! assert!(config.bool(&ENABLE_CACHE));
//! # Ok::<(), configura::ConfigError>(())
//! ```

mod config;
mod declaration;
pub mod env;
mod error;
mod key;
mod kind;
mod registry;

pub use config::{Config, SharedConfig};
pub use declaration::Declaration;
pub use env::Source;
pub use error::{ConfigError, MissingVariables};
pub use key::{Key, Variable};
pub use kind::{ConfigValue, Uintptr, Value, ValueKind};
pub use registry::{Registry, merge_all};
