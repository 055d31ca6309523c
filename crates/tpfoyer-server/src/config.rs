//! Server configuration
//!
//! Read from Shuttle secrets (`Secrets.toml`) at startup:
//!
//! - `STORAGE_BACKEND`: `postgres` (default) or `memory`
//! - `RUN_MIGRATIONS`: apply embedded migrations on start (default `true`)
//! - `ENABLE_SWAGGER`: serve Swagger UI at `/swagger-ui` (default `true`)

use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Where records are kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageBackend {
    #[default]
    Postgres,
    /// Process-local store, lost on restart
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            _ => Err(format!("Unknown storage backend: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub run_migrations: bool,
    pub swagger_ui: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::Postgres,
            run_migrations: true,
            swagger_ui: true,
        }
    }
}

impl AppConfig {
    /// Build the configuration from a key lookup (secrets, env, map...)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let storage = match lookup("STORAGE_BACKEND") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "STORAGE_BACKEND",
                value,
            })?,
            None => defaults.storage,
        };

        Ok(Self {
            storage,
            run_migrations: parse_bool(&lookup, "RUN_MIGRATIONS", defaults.run_migrations)?,
            swagger_ui: parse_bool(&lookup, "ENABLE_SWAGGER", defaults.swagger_ui)?,
        })
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(default);
    };

    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = AppConfig::from_lookup(lookup(&[
            ("STORAGE_BACKEND", "Memory"),
            ("RUN_MIGRATIONS", "0"),
            ("ENABLE_SWAGGER", "off"),
        ]))
        .unwrap();

        assert_eq!(config.storage, StorageBackend::Memory);
        assert!(!config.run_migrations);
        assert!(!config.swagger_ui);
    }

    #[test]
    fn test_rejects_unknown_backend() {
        let err = AppConfig::from_lookup(lookup(&[("STORAGE_BACKEND", "mongo")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "STORAGE_BACKEND",
                value: "mongo".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_bad_bool() {
        let err = AppConfig::from_lookup(lookup(&[("RUN_MIGRATIONS", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("RUN_MIGRATIONS"));
    }
}
