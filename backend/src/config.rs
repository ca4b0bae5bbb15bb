//! Server configuration, read once at startup from `FORMULARY_*` environment
//! variables.
//!
//! | variable                 | default       | meaning |
//! |--------------------------|---------------|---------|
//! | `FORMULARY_HOST`         | `127.0.0.1`   | bind address |
//! | `FORMULARY_PORT`         | `8080`        | bind port |
//! | `FORMULARY_DATABASE`     | `memory`      | `memory` or a SQLite file path |
//! | `FORMULARY_CATALOG`      | built-in      | path to a JSON catalog file |
//! | `FORMULARY_OPEN_BROWSER` | `true`        | open the UI in a browser on start |
//! | `FORMULARY_JSON_LIMIT`   | `1048576`     | maximum JSON body size in bytes |

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected} (got '{value}')")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Which `FormulaRepository` implementation backs `/api/formulas`.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageKind {
    Memory,
    Sqlite(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageKind,
    pub catalog_path: Option<PathBuf>,
    pub open_browser: bool,
    pub json_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            storage: StorageKind::Memory,
            catalog_path: None,
            open_browser: true,
            json_limit: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source, falling back
    /// to the defaults for anything unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = ServerConfig::default();

        if let Some(host) = get("FORMULARY_HOST") {
            config.host = host;
        }
        if let Some(port) = get("FORMULARY_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::Invalid {
                var: "FORMULARY_PORT",
                expected: "port number",
                value: port.clone(),
            })?;
        }
        if let Some(database) = get("FORMULARY_DATABASE") {
            config.storage = if database.eq_ignore_ascii_case("memory") {
                StorageKind::Memory
            } else {
                StorageKind::Sqlite(PathBuf::from(database))
            };
        }
        config.catalog_path = get("FORMULARY_CATALOG").map(PathBuf::from);
        if let Some(flag) = get("FORMULARY_OPEN_BROWSER") {
            config.open_browser = parse_bool(&flag).ok_or(ConfigError::Invalid {
                var: "FORMULARY_OPEN_BROWSER",
                expected: "boolean",
                value: flag.clone(),
            })?;
        }
        if let Some(limit) = get("FORMULARY_JSON_LIMIT") {
            config.json_limit = limit.parse().map_err(|_| ConfigError::Invalid {
                var: "FORMULARY_JSON_LIMIT",
                expected: "byte count",
                value: limit.clone(),
            })?;
        }
        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_every_variable() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("FORMULARY_HOST", "0.0.0.0"),
            ("FORMULARY_PORT", "9000"),
            ("FORMULARY_DATABASE", "/var/lib/formulary.sqlite"),
            ("FORMULARY_CATALOG", "catalog.json"),
            ("FORMULARY_OPEN_BROWSER", "no"),
            ("FORMULARY_JSON_LIMIT", "2048"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(
            config.storage,
            StorageKind::Sqlite(PathBuf::from("/var/lib/formulary.sqlite"))
        );
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.json")));
        assert!(!config.open_browser);
        assert_eq!(config.json_limit, 2048);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("FORMULARY_PORT", "  "), ("FORMULARY_DATABASE", "MEMORY")])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.storage, StorageKind::Memory);
    }

    #[test]
    fn rejects_malformed_values() {
        let err = ServerConfig::from_lookup(lookup(&[("FORMULARY_PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "FORMULARY_PORT",
                expected: "port number",
                value: "eighty".to_string(),
            }
        );
        assert!(ServerConfig::from_lookup(lookup(&[("FORMULARY_OPEN_BROWSER", "maybe")])).is_err());
    }
}
