//! Payment Configuration
//!
//! Environment-derived configuration, read once at startup and passed by
//! reference into the services. Request handlers never consult the process
//! environment themselves.

use crate::error::{PaymentError, Result};

/// Default provider payment-creation endpoint
pub const DEFAULT_API_URL: &str = "https://api.ziina.com/payments";

/// Default frontend origin used to build redirect URLs
pub const DEFAULT_FRONTEND_BASE_URL: &str = "http://localhost:5173";

/// Payment service configuration
#[derive(Clone, Debug)]
pub struct PaymentConfig {
    /// Provider API credential (required)
    pub api_key: String,

    /// Provider payment-creation endpoint
    pub api_url: String,

    /// Base URL for the success/failure redirect pages
    pub frontend_base_url: String,

    /// Bound on the outbound provider call, in seconds
    pub timeout_secs: u64,

    /// Include provider diagnostics as structured `details` in error bodies
    pub verbose_errors: bool,
}

impl PaymentConfig {
    /// Create from environment variables.
    ///
    /// Fails if `ZIINA_API_KEY` is absent; everything else has a default.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ZIINA_API_KEY")
            .map_err(|_| PaymentError::Config("ZIINA_API_KEY not set".into()))?;

        let api_url = std::env::var("ZIINA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

        let frontend_base_url = std::env::var("FRONTEND_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_FRONTEND_BASE_URL.into());

        let timeout_secs = std::env::var("ZIINA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let verbose_errors = std::env::var("PAYMENTS_VERBOSE_ERRORS")
            .map(|v| !matches!(v.as_str(), "false" | "0"))
            .unwrap_or(true);

        Ok(Self {
            api_key,
            api_url,
            frontend_base_url,
            timeout_secs,
            verbose_errors,
        })
    }

    /// URL the provider redirects to after a successful payment
    pub fn redirect_url(&self) -> String {
        format!("{}/payment-success", self.frontend_base_url)
    }

    /// URL the provider redirects to after a cancelled or failed payment
    pub fn cancel_url(&self) -> String {
        format!("{}/payment-failed", self.frontend_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> PaymentConfig {
        PaymentConfig {
            api_key: "zk_test".into(),
            api_url: DEFAULT_API_URL.into(),
            frontend_base_url: "https://app.example.com".into(),
            timeout_secs: 30,
            verbose_errors: true,
        }
    }

    #[test]
    fn test_redirect_urls_derive_from_base() {
        let config = test_config();
        assert_eq!(
            config.redirect_url(),
            "https://app.example.com/payment-success"
        );
        assert_eq!(config.cancel_url(), "https://app.example.com/payment-failed");
    }
}
