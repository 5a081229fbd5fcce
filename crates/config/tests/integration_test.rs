//! Integration tests for building configuration from several modules.
//!
//! These tests drive the public API the way a service entrypoint does: each
//! module contributes a registry, the registries are merged, the union of
//! required keys is checked, and components read through `Config`.

use configura::{
    Config, ConfigError, Key, Registry, SharedConfig, Variable, ValueKind, keys, merge_all,
};
use serial_test::serial;
use std::sync::Arc;

mod frontend {
    use super::*;

    pub const STATIC_DIR: Variable<String> = Variable::new("_CONFIGURA_IT_STATIC_DIR");
    pub const CACHE_ASSETS: Variable<bool> = Variable::new("_CONFIGURA_IT_CACHE_ASSETS");

    pub fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .load(&STATIC_DIR, "./dist".to_string())
            .load(&CACHE_ASSETS, true);
        registry
    }

    pub fn required() -> Vec<Key> {
        keys![STATIC_DIR, CACHE_ASSETS]
    }
}

mod backend {
    use super::*;

    pub const HTTP_PORT: Variable<u16> = Variable::new("_CONFIGURA_IT_HTTP_PORT");
    pub const INGEST_RATE: Variable<f64> = Variable::new("_CONFIGURA_IT_INGEST_RATE");
    pub const DB_URL: Variable<String> = Variable::new("_CONFIGURA_IT_DB_URL");

    pub fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .load(&HTTP_PORT, 8080)
            .load(&INGEST_RATE, 1.0);
        registry
    }

    pub fn required() -> Vec<Key> {
        keys![HTTP_PORT, INGEST_RATE, DB_URL]
    }
}

/// A dependent component that only ever sees the read interface.
struct Server {
    config: Arc<dyn Config>,
}

impl Server {
    fn address(&self) -> String {
        format!("0.0.0.0:{}", self.config.uint16(&backend::HTTP_PORT))
    }
}

const ALL_VARS: [&str; 5] = [
    "_CONFIGURA_IT_STATIC_DIR",
    "_CONFIGURA_IT_CACHE_ASSETS",
    "_CONFIGURA_IT_HTTP_PORT",
    "_CONFIGURA_IT_INGEST_RATE",
    "_CONFIGURA_IT_DB_URL",
];

fn required() -> Vec<Key> {
    let mut keys = frontend::required();
    keys.extend(backend::required());
    keys
}

#[test]
#[serial]
fn test_startup_fails_fast_on_forgotten_registration() {
    temp_env::with_vars_unset(ALL_VARS, || {
        let config = frontend::registry().merge(backend::registry());

        let err = config.check_registered(&required()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVariables(_)));
        assert_eq!(
            err.missing_keys(),
            Some(&["_CONFIGURA_IT_DB_URL".to_string()][..])
        );
    });
}

#[test]
#[serial]
fn test_startup_builds_shared_config_from_environment() {
    temp_env::with_vars(
        [
            ("_CONFIGURA_IT_STATIC_DIR", None),
            ("_CONFIGURA_IT_CACHE_ASSETS", Some("false")),
            ("_CONFIGURA_IT_HTTP_PORT", Some("9090")),
            ("_CONFIGURA_IT_INGEST_RATE", Some("not-a-rate")),
            ("_CONFIGURA_IT_DB_URL", Some("postgres://localhost/app")),
        ],
        || {
            let mut extra = Registry::new();
            extra.load(&backend::DB_URL, String::new());

            let registry = merge_all([frontend::registry(), backend::registry(), extra]);
            registry.check_registered(&required()).unwrap();

            let shared: SharedConfig = registry.freeze();
            assert_eq!(shared.string(&frontend::STATIC_DIR), "./dist");
            assert!(!shared.bool(&frontend::CACHE_ASSETS));
            assert_eq!(shared.float64(&backend::INGEST_RATE), 1.0);
            assert_eq!(shared.string(&backend::DB_URL), "postgres://localhost/app");

            let server = Server {
                config: Arc::new(shared.clone()),
            };
            assert_eq!(server.address(), "0.0.0.0:9090");
        },
    );
}

#[test]
#[serial]
fn test_declaration_driven_loading_matches_typed_loading() {
    temp_env::with_var("_CONFIGURA_IT_HTTP_PORT", Some("7000"), || {
        let decl: configura::Declaration = "_CONFIGURA_IT_HTTP_PORT:u16=8080".parse().unwrap();
        let mut dynamic = Registry::new();
        decl.load_into(&mut dynamic);

        let typed = backend::registry();
        assert_eq!(dynamic.get(&backend::HTTP_PORT), typed.get(&backend::HTTP_PORT));
        assert!(dynamic.contains(&Key::new("_CONFIGURA_IT_HTTP_PORT", ValueKind::Uint16)));
    });
}
