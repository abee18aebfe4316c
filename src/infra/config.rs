//! Centralized configuration (environment variables + defaults).

use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_COLLECTION: &str = "data";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is not valid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Settings read once at process start.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Store address and credentials (`MONGO_URI`).
    pub connection_uri: String,
    /// Database name. When `None`, the default database of the URI is used.
    pub database: Option<String>,
    pub collection: String,
    pub bind_addr: SocketAddr,
    pub log_filter: String,
}

impl Settings {
    /// Settings for `connection_uri` with every other option at its default.
    pub fn new(connection_uri: impl Into<String>) -> Self {
        Self {
            connection_uri: connection_uri.into(),
            database: None,
            collection: DEFAULT_COLLECTION.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let connection_uri = var("MONGO_URI").ok_or(ConfigError::Missing("MONGO_URI"))?;

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        Ok(Self {
            connection_uri,
            database: var("MONGO_DATABASE"),
            collection: var("DATA_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            bind_addr,
            log_filter: var("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_uri_is_set() {
        let settings = Settings::from_lookup(lookup(&[("MONGO_URI", "mongodb://localhost/app")])).unwrap();
        assert_eq!(settings.connection_uri, "mongodb://localhost/app");
        assert_eq!(settings.database, None);
        assert_eq!(settings.collection, "data");
        assert_eq!(settings.bind_addr.port(), 3000);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn missing_uri_is_an_error() {
        let err = Settings::from_lookup(lookup(&[("MONGO_URI", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("MONGO_URI")));
    }

    #[test]
    fn overrides_are_read() {
        let settings = Settings::from_lookup(lookup(&[
            ("MONGO_URI", "mongodb://db:27017"),
            ("MONGO_DATABASE", "dashboard"),
            ("DATA_COLLECTION", "insights"),
            ("BIND_ADDR", "127.0.0.1:8080"),
        ]))
        .unwrap();
        assert_eq!(settings.database.as_deref(), Some("dashboard"));
        assert_eq!(settings.collection, "insights");
        assert_eq!(settings.bind_addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        let err = Settings::from_lookup(lookup(&[
            ("MONGO_URI", "mongodb://db:27017"),
            ("BIND_ADDR", "not-an-address"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "BIND_ADDR", .. }));
    }

    #[test]
    fn new_matches_lookup_defaults() {
        let settings = Settings::new("mongodb://localhost");
        assert_eq!(settings.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(settings.collection, DEFAULT_COLLECTION);
    }
}
