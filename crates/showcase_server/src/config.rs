//! Environment-driven server configuration.
//!
//! # Responsibility
//! - Read bind address and logging settings from `SHOWCASE_*` variables.
//!
//! # Invariants
//! - Every setting has a default except the optional log directory.
//! - Invalid values are reported, never silently replaced by defaults.

use showcase_core::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::{IpAddr, SocketAddr};

pub const HOST_VAR: &str = "SHOWCASE_HOST";
pub const PORT_VAR: &str = "SHOWCASE_PORT";
pub const LOG_LEVEL_VAR: &str = "SHOWCASE_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "SHOWCASE_LOG_DIR";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidHost(String),
    InvalidPort(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHost(value) => {
                write!(f, "{HOST_VAR} must be an IP address, got `{value}`")
            }
            Self::InvalidPort(value) => {
                write!(f, "{PORT_VAR} must be a port number, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Server settings resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    /// Absolute directory for rolling log files; stderr when unset.
    pub log_dir: Option<String>,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let host = match read(HOST_VAR) {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(value))?,
            None => DEFAULT_HOST
                .parse()
                .map_err(|_| ConfigError::InvalidHost(DEFAULT_HOST.to_string()))?,
        };

        let port = match read(PORT_VAR) {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            log_level: read(LOG_LEVEL_VAR).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_VAR),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
