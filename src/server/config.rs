use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_TTL_HOURS: i64 = 168;
const DEFAULT_WS_MAX_MESSAGE_BYTES: usize = 64 * 1024;
const DEFAULT_WS_PING_INTERVAL_SECS: u64 = 30;
const DEFAULT_WS_IDLE_TIMEOUT_SECS: u64 = 300;

/// Application configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Lifetime of a bearer token session.
    pub session_ttl_hours: i64,

    /// Allowed CORS origin. Any origin is allowed when unset.
    pub cors_allowed_origin: Option<String>,

    pub ws: WsConfig,
}

/// Websocket connection limits.
#[derive(Debug, Clone)]
pub struct WsConfig {
    pub max_message_bytes: usize,
    pub ping_interval_secs: u64,
    pub idle_timeout_secs: u64,
}

impl Default for WsConfig {
    fn default() -> Self {
        Self {
            max_message_bytes: DEFAULT_WS_MAX_MESSAGE_BYTES,
            ping_interval_secs: DEFAULT_WS_PING_INTERVAL_SECS,
            idle_timeout_secs: DEFAULT_WS_IDLE_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Lifetime of a newly issued bearer token.
    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.session_ttl_hours)
    }

    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: parse_var("BIND_ADDRESS", DEFAULT_BIND_ADDRESS.parse().ok())?,
            session_ttl_hours: parse_var("SESSION_TTL_HOURS", Some(DEFAULT_SESSION_TTL_HOURS))?,
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
            ws: WsConfig {
                max_message_bytes: parse_var(
                    "WS_MAX_MESSAGE_BYTES",
                    Some(DEFAULT_WS_MAX_MESSAGE_BYTES),
                )?,
                ping_interval_secs: parse_var(
                    "WS_PING_INTERVAL_SECS",
                    Some(DEFAULT_WS_PING_INTERVAL_SECS),
                )?,
                idle_timeout_secs: parse_var(
                    "WS_IDLE_TIMEOUT_SECS",
                    Some(DEFAULT_WS_IDLE_TIMEOUT_SECS),
                )?,
            },
        })
    }
}

/// Reads and parses an optional environment variable, falling back to `default` when unset.
fn parse_var<T: std::str::FromStr>(name: &str, default: Option<T>) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => default.ok_or_else(|| ConfigError::MissingEnvVar(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_when_unset() {
        let value: u64 = parse_var("STUDYHUB_TEST_UNSET_VAR", Some(42)).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn websocket_frame_limit_defaults_to_64_kib() {
        assert_eq!(WsConfig::default().max_message_bytes, 64 * 1024);
    }

    #[test]
    fn rejects_unparseable_value() {
        std::env::set_var("STUDYHUB_TEST_BAD_NUMBER", "not-a-number");
        let result: Result<u64, _> = parse_var("STUDYHUB_TEST_BAD_NUMBER", Some(1));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
    }
}
