//! Mock Gateway
//!
//! For testing and demo purposes. Replays a canned provider reply and records
//! every request it receives.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{GatewayResponse, PaymentGateway};
use crate::error::{PaymentError, Result};
use crate::session::PaymentRequest;

enum CannedReply {
    Respond { status: u16, body: Value },
    Unreachable(String),
}

/// Mock gateway with a canned reply
pub struct MockGateway {
    reply: CannedReply,
    requests: Mutex<Vec<PaymentRequest>>,
}

impl MockGateway {
    /// Reply to every request with the given status and body
    pub fn respond(status: u16, body: Value) -> Self {
        Self {
            reply: CannedReply::Respond { status, body },
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request at the transport level
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            reply: CannedReply::Unreachable(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<PaymentRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_payment(&self, request: &PaymentRequest) -> Result<GatewayResponse> {
        self.requests.lock().unwrap().push(request.clone());

        match &self.reply {
            CannedReply::Respond { status, body } => Ok(GatewayResponse {
                status: *status,
                body: body.clone(),
            }),
            CannedReply::Unreachable(message) => Err(PaymentError::Unreachable(message.clone())),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
