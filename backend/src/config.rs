//! Server configuration read from the environment (and a `.env` file when present).

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid SAVINGS_BIND_ADDR '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("SAVINGS_ALLOWED_ORIGIN must not be empty")]
    EmptyOrigin,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// YAML catalog to serve; the built-in catalog is used when unset
    pub plans_file: Option<PathBuf>,
    pub frontend_dist: PathBuf,
    pub allowed_origin: String,
}

impl ServerConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup, so tests need not touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_value = non_empty("SAVINGS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_value.clone(),
                source,
            })?;

        let allowed_origin = match lookup("SAVINGS_ALLOWED_ORIGIN") {
            Some(origin) if origin.trim().is_empty() => return Err(ConfigError::EmptyOrigin),
            Some(origin) => origin.trim().to_string(),
            None => DEFAULT_ALLOWED_ORIGIN.to_string(),
        };

        Ok(Self {
            bind_addr,
            plans_file: non_empty("SAVINGS_PLANS_FILE").map(PathBuf::from),
            frontend_dist: non_empty("SAVINGS_FRONTEND_DIST")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIST)),
            allowed_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.plans_file, None);
        assert_eq!(config.frontend_dist, PathBuf::from("../frontend/dist"));
        assert_eq!(config.allowed_origin, "http://localhost:8080");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("SAVINGS_BIND_ADDR", "0.0.0.0:8000"),
            ("SAVINGS_PLANS_FILE", "/etc/savings/plans.yaml"),
            ("SAVINGS_FRONTEND_DIST", "/srv/dist"),
            ("SAVINGS_ALLOWED_ORIGIN", "https://savings.example.com"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.plans_file, Some(PathBuf::from("/etc/savings/plans.yaml")));
        assert_eq!(config.frontend_dist, PathBuf::from("/srv/dist"));
        assert_eq!(config.allowed_origin, "https://savings.example.com");
    }

    #[test]
    fn test_blank_plans_file_means_builtin_catalog() {
        let config = ServerConfig::from_lookup(lookup_from(&[("SAVINGS_PLANS_FILE", "  ")])).unwrap();
        assert_eq!(config.plans_file, None);
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = ServerConfig::from_lookup(lookup_from(&[("SAVINGS_BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
        assert!(err.to_string().contains("localhost"));
    }

    #[test]
    fn test_empty_origin_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("SAVINGS_ALLOWED_ORIGIN", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyOrigin));
    }
}
