//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the pooled HTTP client and the upstream URL used by the
//! prediction relay. Clone is cheap: the client and URL are reference counted.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("http client build failed: {0}")]
    HttpClientBuild(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream_url: Arc<str>,
}

impl AppState {
    /// Build the relay client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &HostConfig) -> Result<Self, StateError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()?;
        Ok(Self { http, upstream_url: Arc::from(config.upstream_url.as_str()) })
    }
}
