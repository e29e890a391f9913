//! Payment Gateway Integration
//!
//! Abstractions and implementations for hosted-checkout payment providers.

mod mock;
mod ziina;

pub use mock::MockGateway;
pub use ziina::ZiinaGateway;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::session::PaymentRequest;

/// A provider reply that made it through transport and JSON decoding.
///
/// Transport failures and undecodable bodies never produce a
/// `GatewayResponse`; they surface as errors from the gateway call.
#[derive(Clone, Debug)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: Value,
}

impl GatewayResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Payment gateway client trait (Strategy pattern)
///
/// Implement this for each provider a deployment may talk to.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment session with the provider. One attempt, no retries.
    async fn create_payment(&self, request: &PaymentRequest) -> Result<GatewayResponse>;

    /// Gateway name
    fn name(&self) -> &str;
}
