//! Server Configuration
//!
//! Read from the environment after `.env` has been loaded.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_DIST_DIR: &str = "crates/dataquery-web/dist";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `BIND_ADDR` is not a socket address
    #[error("Invalid BIND_ADDR '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    /// `SITE_DIST_DIR` is set but empty
    #[error("SITE_DIST_DIR is empty")]
    EmptyDistDir,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub dist_dir: PathBuf,
}

impl ServerConfig {
    /// Load from `BIND_ADDR` and `SITE_DIST_DIR`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("BIND_ADDR").ok(),
            std::env::var("SITE_DIST_DIR").ok(),
        )
    }

    fn from_vars(bind_addr: Option<String>, dist_dir: Option<String>) -> Result<Self, ConfigError> {
        let value = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = value
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr { value, source })?;

        let dist_dir = match dist_dir {
            Some(dir) if dir.trim().is_empty() => return Err(ConfigError::EmptyDistDir),
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(DEFAULT_DIST_DIR),
        };

        Ok(Self {
            bind_addr,
            dist_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
    }

    #[test]
    fn test_overrides() {
        let config =
            ServerConfig::from_vars(Some("127.0.0.1:8081".into()), Some("/srv/site".into())).unwrap();
        assert_eq!(config.bind_addr.port(), 8081);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_rejects_bad_bind_addr() {
        let err = ServerConfig::from_vars(Some("localhost".into()), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { ref value, .. } if value == "localhost"));
        assert!(err.to_string().starts_with("Invalid BIND_ADDR 'localhost'"));
    }

    #[test]
    fn test_rejects_blank_dist_dir() {
        let err = ServerConfig::from_vars(None, Some("  ".into())).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyDistDir));
    }
}
