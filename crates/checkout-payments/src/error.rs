//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Required configuration is missing
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request body was malformed
    #[error("{0}")]
    BadRequest(String),

    /// Plan identifier is not in the catalog
    #[error("Invalid planId. Must be one of: {0}")]
    UnknownPlan(String),

    /// Network-level failure reaching the provider
    #[error("Provider unreachable: {0}")]
    Unreachable(String),

    /// Provider returned something outside the expected contract
    #[error("Provider protocol error: {0}")]
    Protocol(String),

    /// Provider explicitly declined the request
    #[error("Provider rejected the request (status {status})")]
    Rejected {
        status: u16,
        body: serde_json::Value,
    },

    /// Webhook payload was not valid JSON
    #[error("Webhook parse error: {0}")]
    WebhookParse(String),

    /// Outcome sink failed to apply an event
    #[error("Outcome sink error: {0}")]
    Sink(String),
}

impl PaymentError {
    /// Check if this error is retryable by the caller
    pub fn is_retryable(&self) -> bool {
        matches!(self, PaymentError::Unreachable(_) | PaymentError::Sink(_))
    }

    /// Message safe to show to the client
    pub fn user_message(&self) -> String {
        match self {
            PaymentError::Config(_) => {
                "Payment service not configured. Please add ZIINA_API_KEY to the server environment."
                    .into()
            }
            PaymentError::BadRequest(msg) => msg.clone(),
            PaymentError::UnknownPlan(_) => self.to_string(),
            PaymentError::Unreachable(_) => "Network error connecting to payment service".into(),
            PaymentError::Protocol(msg) => msg.clone(),
            PaymentError::Rejected { .. } => "Payment service error".into(),
            PaymentError::WebhookParse(_) | PaymentError::Sink(_) => "Webhook failed".into(),
        }
    }
}

impl From<anyhow::Error> for PaymentError {
    fn from(err: anyhow::Error) -> Self {
        PaymentError::Sink(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(PaymentError::Unreachable("timed out".into()).is_retryable());
        assert!(!PaymentError::Config("key missing".into()).is_retryable());
        assert!(
            !PaymentError::Rejected {
                status: 402,
                body: serde_json::Value::Null,
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_rejection_message_is_generic() {
        let err = PaymentError::Rejected {
            status: 402,
            body: serde_json::json!({"message": "card declined"}),
        };
        assert_eq!(err.user_message(), "Payment service error");
        assert!(!err.user_message().contains("card declined"));
    }
}
