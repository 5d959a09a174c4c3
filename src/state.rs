//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled `reqwest::Client` reused by every
//! forwarded `/api` request.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{ConfigError, PortalConfig};

/// Clone is required by Axum; the config is Arc-wrapped and the client is
/// internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PortalConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the backend HTTP client cannot be built.
    pub fn new(config: PortalConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { config: Arc::new(config), http })
    }
}
