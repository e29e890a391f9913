//! Ziina Gateway Client
//!
//! Speaks the Ziina payment-creation REST API with a bearer credential.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{GatewayResponse, PaymentGateway};
use crate::config::PaymentConfig;
use crate::error::{PaymentError, Result};
use crate::session::PaymentRequest;

/// Ziina REST client
pub struct ZiinaGateway {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl ZiinaGateway {
    /// Build a client from configuration. The request timeout bounds the
    /// outbound call so a hung upstream cannot hold a handler open.
    pub fn new(config: &PaymentConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PaymentError::Config(format!("HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl PaymentGateway for ZiinaGateway {
    async fn create_payment(&self, request: &PaymentRequest) -> Result<GatewayResponse> {
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Network error calling Ziina API: {e}");
                PaymentError::Unreachable(e.to_string())
            })?;

        let status = response.status().as_u16();

        // Non-success statuses still carry a diagnostic body; decode before
        // deciding whether the provider accepted the request.
        let body: Value = response.json().await.map_err(|e| {
            tracing::error!(status, "Failed to parse Ziina response: {e}");
            PaymentError::Protocol("Invalid response from payment service".into())
        })?;

        Ok(GatewayResponse { status, body })
    }

    fn name(&self) -> &str {
        "ziina"
    }
}
