//! Meraki Dashboard API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use secrecy::{ExposeSecret, Secret};
use splash_config::MerakiConfig;
use splash_domain::{FetchOutcome, LoginAttemptCollection};
use splash_errors::{ReportError, ReportResult};
use splash_ports::LoginAttemptSource;
use tracing::{debug, info, warn};

/// Client for the splash login attempts endpoint
pub struct MerakiClient {
    http: Client,
    base_url: String,
    bearer_token: Secret<String>,
}

impl MerakiClient {
    /// Create a new client from configuration
    pub fn new(config: &MerakiConfig) -> ReportResult<Self> {
        let mut builder = Client::builder();
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }

        let http = builder
            .build()
            .map_err(|e| ReportError::http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer_token: config.bearer_token.clone(),
        })
    }

    /// Endpoint URL without the query string
    pub fn login_attempts_url(&self, network_id: &str) -> String {
        format!(
            "{}/api/v1/networks/{}/splashLoginAttempts",
            self.base_url, network_id
        )
    }

    /// Fetch the login attempts recorded in the last `timespan_seconds`
    pub async fn get_splash_login_attempts(
        &self,
        network_id: &str,
        timespan_seconds: u64,
    ) -> ReportResult<FetchOutcome> {
        let url = self.login_attempts_url(network_id);
        debug!(%url, timespan_seconds, "Requesting splash login attempts");

        let response = self
            .http
            .get(&url)
            .query(&[("timespan", timespan_seconds)])
            .bearer_auth(self.bearer_token.expose_secret())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| ReportError::http(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Failed to fetch data");
            return Ok(FetchOutcome::NoData {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ReportError::http(format!("Failed to read response body: {}", e)))?;

        let attempts: LoginAttemptCollection = serde_json::from_slice(&body).map_err(|e| {
            ReportError::decode(format!("Unexpected splash login attempts payload: {}", e))
        })?;

        info!(network_id, count = attempts.len(), "Fetched splash login attempts");
        Ok(FetchOutcome::Attempts(attempts))
    }
}

#[async_trait]
impl LoginAttemptSource for MerakiClient {
    async fn fetch_login_attempts(
        &self,
        network_id: &str,
        timespan_seconds: u64,
    ) -> ReportResult<FetchOutcome> {
        self.get_splash_login_attempts(network_id, timespan_seconds)
            .await
    }
}
