//! Application configuration

use std::env;

use anyhow::{Context, Result};

const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
const DEFAULT_SERVER_PORT: u16 = 3000;

/// Server configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind (`SERVER_HOST`)
    pub server_host: String,
    /// HTTP port (`SERVER_PORT`, falling back to `PORT`)
    pub server_port: u16,
    /// CORS allowed origins (comma-separated, or "*" for any). Empty disables CORS.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server_host = lookup("SERVER_HOST")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string());

        let server_port = match lookup("SERVER_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SERVER_PORT must be a valid port number, got {raw:?}"))?,
            None => DEFAULT_SERVER_PORT,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            server_host,
            server_port,
            cors_allowed_origins,
        })
    }

    /// True when every origin is allowed (`CORS_ALLOWED_ORIGINS=*`).
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|origin| origin == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).expect("defaults load");
        assert_eq!(config, ServerConfig::default());
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn server_port_wins_over_port() {
        let config = config_from(&[("SERVER_PORT", "8080"), ("PORT", "9090")]).expect("config");
        assert_eq!(config.server_port, 8080);

        let config = config_from(&[("PORT", "9090")]).expect("config");
        assert_eq!(config.server_port, 9090);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = config_from(&[("SERVER_PORT", "eighty")]).expect_err("bad port");
        assert!(err.to_string().contains("SERVER_PORT"));
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = config_from(&[(
            "CORS_ALLOWED_ORIGINS",
            " https://a.example , ,https://b.example",
        )])
        .expect("config");
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );

        let config = config_from(&[("CORS_ALLOWED_ORIGINS", "*")]).expect("config");
        assert!(config.allows_any_origin());
    }
}
