//! Server configuration loaded from environment variables.

use thiserror::Error;

pub const HOST_VAR: &str = "PRODCLEAN_HOST";
pub const PORT_VAR: &str = "PRODCLEAN_PORT";
pub const MAX_BULK_VAR: &str = "PRODCLEAN_MAX_BULK";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted `products` list on the bulk endpoint.
    pub max_bulk_products: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_bulk_products: 1000,
        }
    }
}

impl ApiConfig {
    /// Load from the process environment; unset variables take defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using `lookup` to resolve variable names.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup(HOST_VAR)
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup(PORT_VAR) {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: PORT_VAR,
                expected: "a port number",
                value,
            })?,
            None => defaults.port,
        };

        let max_bulk_products = match lookup(MAX_BULK_VAR) {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    var: MAX_BULK_VAR,
                    expected: "a positive integer",
                    value,
                })?,
            None => defaults.max_bulk_products,
        };

        Ok(Self {
            host,
            port,
            max_bulk_products,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
