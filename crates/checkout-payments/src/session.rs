//! Checkout Session Service
//!
//! Translates a plan selection into a provider payment request, forwards the
//! provider's reply, and normalizes it into the minimal `{checkout_url}`
//! contract. Exactly one outbound call per invocation; idempotency is
//! provider-dependent and not guaranteed here.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::PaymentConfig;
use crate::error::{PaymentError, Result};
use crate::gateway::PaymentGateway;
use crate::plans::{Plan, PlanCatalog};

/// Correlation data echoed back in the provider's webhook
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentMetadata {
    #[serde(rename = "planId")]
    pub plan_id: String,
}

/// Outbound provider payment-creation payload
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: u64,
    pub currency: String,
    pub description: String,
    pub redirect_url: String,
    pub cancel_url: String,
    pub metadata: PaymentMetadata,
}

/// Result of creating a checkout session.
///
/// Carries exactly the checkout URL; no other provider fields leak through.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub checkout_url: String,
}

/// Payment session service
pub struct CheckoutService {
    config: Arc<PaymentConfig>,
    catalog: PlanCatalog,
    gateway: Arc<dyn PaymentGateway>,
}

impl CheckoutService {
    pub fn new(config: Arc<PaymentConfig>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            config,
            catalog: PlanCatalog::new(),
            gateway,
        }
    }

    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &PaymentConfig {
        &self.config
    }

    /// Create a hosted checkout session for the given plan identifier.
    ///
    /// Validation happens before any provider interaction: an unknown plan
    /// never reaches the gateway.
    pub async fn create_session(&self, plan_id: &str) -> Result<CheckoutSession> {
        let plan = self
            .catalog
            .lookup(plan_id)
            .ok_or_else(|| PaymentError::UnknownPlan(self.catalog.ids()))?;

        let request = self.build_request(plan);
        tracing::info!(plan = %plan.id, amount = plan.amount, "Creating payment session");

        let reply = self
            .gateway
            .create_payment(&request)
            .await
            .inspect_err(|e| tracing::error!(gateway = self.gateway.name(), "{e}"))?;

        if !reply.is_success() {
            tracing::error!(
                status = reply.status,
                body = %reply.body,
                "Payment provider rejected the request"
            );
            return Err(PaymentError::Rejected {
                status: reply.status,
                body: reply.body,
            });
        }

        // A success status without a checkout URL is a provider contract
        // violation, never treated as success.
        let checkout_url = reply
            .body
            .get("checkout_url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                tracing::error!(body = %reply.body, "Missing checkout_url in provider response");
                PaymentError::Protocol("Invalid payment response - missing checkout URL".into())
            })?;

        tracing::info!(checkout_url, "Payment session created");

        Ok(CheckoutSession {
            checkout_url: checkout_url.to_string(),
        })
    }

    fn build_request(&self, plan: &Plan) -> PaymentRequest {
        PaymentRequest {
            amount: plan.amount,
            currency: plan.currency.to_string(),
            description: format!("Subscription: {}", plan.id),
            redirect_url: self.config.redirect_url(),
            cancel_url: self.config.cancel_url(),
            metadata: PaymentMetadata {
                plan_id: plan.id.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_API_URL;
    use crate::gateway::MockGateway;
    use serde_json::json;

    fn test_config() -> Arc<PaymentConfig> {
        Arc::new(PaymentConfig {
            api_key: "zk_test".into(),
            api_url: DEFAULT_API_URL.into(),
            frontend_base_url: "http://localhost:5173".into(),
            timeout_secs: 30,
            verbose_errors: true,
        })
    }

    fn service_with(gateway: Arc<MockGateway>) -> CheckoutService {
        CheckoutService::new(test_config(), gateway)
    }

    #[tokio::test]
    async fn test_valid_plan_returns_checkout_url() {
        let gateway = Arc::new(MockGateway::respond(
            200,
            json!({"checkout_url": "https://pay.example/abc"}),
        ));
        let service = service_with(gateway.clone());

        let session = service.create_session("monthly").await.unwrap();
        assert_eq!(session.checkout_url, "https://pay.example/abc");
        assert_eq!(gateway.request_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_plan_never_reaches_gateway() {
        let gateway = Arc::new(MockGateway::respond(
            200,
            json!({"checkout_url": "https://pay.example/abc"}),
        ));
        let service = service_with(gateway.clone());

        let err = service.create_session("gold").await.unwrap_err();
        assert!(matches!(err, PaymentError::UnknownPlan(_)));
        assert_eq!(
            err.user_message(),
            "Invalid planId. Must be one of: monthly, semiannual, annual"
        );
        assert_eq!(gateway.request_count(), 0);
    }

    #[tokio::test]
    async fn test_outbound_request_carries_catalog_amount() {
        let gateway = Arc::new(MockGateway::respond(
            200,
            json!({"checkout_url": "https://pay.example/abc"}),
        ));
        let service = service_with(gateway.clone());

        service.create_session("semiannual").await.unwrap();

        let requests = gateway.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].amount, 699);
        assert_eq!(requests[0].currency, "AED");
        assert_eq!(requests[0].description, "Subscription: semiannual");
        assert_eq!(requests[0].metadata.plan_id, "semiannual");
        assert_eq!(
            requests[0].redirect_url,
            "http://localhost:5173/payment-success"
        );
        assert_eq!(
            requests[0].cancel_url,
            "http://localhost:5173/payment-failed"
        );
    }

    #[tokio::test]
    async fn test_success_without_checkout_url_is_protocol_error() {
        let gateway = Arc::new(MockGateway::respond(200, json!({"id": "pay_123"})));
        let service = service_with(gateway);

        let err = service.create_session("monthly").await.unwrap_err();
        assert!(matches!(err, PaymentError::Protocol(_)));
        assert_eq!(
            err.user_message(),
            "Invalid payment response - missing checkout URL"
        );
    }

    #[tokio::test]
    async fn test_empty_checkout_url_is_protocol_error() {
        let gateway = Arc::new(MockGateway::respond(200, json!({"checkout_url": ""})));
        let service = service_with(gateway);

        let err = service.create_session("monthly").await.unwrap_err();
        assert!(matches!(err, PaymentError::Protocol(_)));
    }

    #[tokio::test]
    async fn test_provider_rejection_carries_status_and_body() {
        let gateway = Arc::new(MockGateway::respond(
            402,
            json!({"message": "card declined"}),
        ));
        let service = service_with(gateway);

        let err = service.create_session("annual").await.unwrap_err();
        match err {
            PaymentError::Rejected { status, body } => {
                assert_eq!(status, 402);
                assert_eq!(body, json!({"message": "card declined"}));
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_unreachable() {
        let gateway = Arc::new(MockGateway::unreachable("connection refused"));
        let service = service_with(gateway.clone());

        let err = service.create_session("monthly").await.unwrap_err();
        assert!(matches!(err, PaymentError::Unreachable(_)));
        assert!(err.is_retryable());
        // A single attempt, no retry
        assert_eq!(gateway.request_count(), 1);
    }

    #[test]
    fn test_payment_request_wire_shape() {
        let request = PaymentRequest {
            amount: 299,
            currency: "AED".into(),
            description: "Subscription: monthly".into(),
            redirect_url: "http://localhost:5173/payment-success".into(),
            cancel_url: "http://localhost:5173/payment-failed".into(),
            metadata: PaymentMetadata {
                plan_id: "monthly".into(),
            },
        };

        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(
            wire,
            json!({
                "amount": 299,
                "currency": "AED",
                "description": "Subscription: monthly",
                "redirect_url": "http://localhost:5173/payment-success",
                "cancel_url": "http://localhost:5173/payment-failed",
                "metadata": {"planId": "monthly"},
            })
        );
    }
}
