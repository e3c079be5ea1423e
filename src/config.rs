//! Configuration module

use std::env;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Mount `GET /reports`
    pub enable_reports: bool,

    /// Log output format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8000,
            environment: "development".to_string(),
            enable_reports: true,
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(v) => v.parse().map_err(|_| invalid("HOST", v))?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(v) => v.parse().map_err(|_| invalid("PORT", v))?,
            None => defaults.port,
        };

        let enable_reports = match lookup("ENABLE_REPORTS") {
            Some(v) => parse_bool(&v).ok_or_else(|| invalid("ENABLE_REPORTS", v))?,
            None => defaults.enable_reports,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(v) => match v.to_ascii_lowercase().as_str() {
                "pretty" | "text" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => return Err(invalid("LOG_FORMAT", v)),
            },
            None => defaults.log_format,
        };

        Ok(Self {
            host,
            port,
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            enable_reports,
            log_format,
        })
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn invalid(key: &'static str, value: String) -> ConfigError {
    ConfigError::InvalidValue { key, value }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
