use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR '{value}' is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Lead store. When unset the server still starts, but every contact
    /// submission answers 500.
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    /// Allowed CORS origin; any origin when unset.
    pub frontend_url: Option<String>,
    pub sentry_dsn: Option<String>,
    pub environment: String, // 'development' locally, anything else in prod
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr { value: bind.clone(), source })?;

        Ok(Self {
            database_url: non_empty("DATABASE_URL"),
            bind_addr,
            frontend_url: non_empty("FRONTEND_URL"),
            sentry_dsn: non_empty("SENTRY_DSN"),
            environment: non_empty("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert!(config.database_url.is_none());
        assert!(config.is_development());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("DATABASE_URL", "  "), ("ENVIRONMENT", "production")]).unwrap();
        assert!(config.database_url.is_none());
        assert!(!config.is_development());
    }

    #[test]
    fn bad_bind_addr_is_reported() {
        let err = config_from(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(err.to_string().contains("localhost"));
    }
}
