//! Environment-derived configuration for the server binary.

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

/// Environment variable naming the `PostgreSQL` connection URL.
pub const DATABASE_URL_VAR: &str = "TASKDECK_DATABASE_URL";

/// Fallback environment variable for the connection URL.
pub const DATABASE_URL_FALLBACK_VAR: &str = "DATABASE_URL";

/// Environment variable naming the listen address.
pub const BIND_ADDR_VAR: &str = "TASKDECK_BIND_ADDR";

/// Listen address used when [`BIND_ADDR_VAR`] is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither database URL variable is set.
    #[error("missing database URL: set {DATABASE_URL_VAR} or {DATABASE_URL_FALLBACK_VAR}")]
    MissingDatabaseUrl,

    /// The listen address does not parse as a socket address.
    #[error("invalid listen address '{value}': {source}")]
    InvalidBindAddr {
        /// The rejected value.
        value: String,
        /// Parse failure reported by the standard library.
        source: std::net::AddrParseError,
    },
}

/// Runtime configuration for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Socket address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
}

impl ServiceConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] when no connection URL is
    /// set and [`ConfigError::InvalidBindAddr`] when the listen address does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var(DATABASE_URL_VAR)
            .or_else(|_| env::var(DATABASE_URL_FALLBACK_VAR))
            .map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let bind_value =
            env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_value
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_value.clone(),
                source,
            })?;

        Ok(Self {
            database_url,
            bind_addr,
        })
    }
}
