//! Portal server configuration parsed from environment variables.

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    MissingVar { var: &'static str },
    #[error("invalid value for {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },
    #[error("failed to build backend HTTP client: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Backend origin without a trailing `/`; `/api/...` is appended per request.
    pub backend_url: String,
    pub port: u16,
    /// Directory served at `/static` (lodgement images).
    pub static_dir: PathBuf,
    pub timeouts: BackendTimeouts,
}

impl PortalConfig {
    /// Build typed portal config from environment variables.
    ///
    /// Required:
    /// - `BACKEND_URL`: origin of the REST backend, e.g. `http://localhost:8000`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STATIC_DIR`: default `static`
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: default 30
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if `BACKEND_URL` is missing or blank, or `PORT` is not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend_url = std::env::var("BACKEND_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar { var: "BACKEND_URL" })?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidVar { var: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

        let timeouts = BackendTimeouts {
            request_secs: env_parse_u64("BACKEND_REQUEST_TIMEOUT_SECS", DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("BACKEND_CONNECT_TIMEOUT_SECS", DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { backend_url, port, static_dir, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
