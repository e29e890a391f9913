//! Webhook Ingestion
//!
//! Parses asynchronous payment-outcome notifications from the provider and
//! feeds them to an outcome sink. The provider's event schema is not pinned
//! down, so parsing is deliberately lenient: only the status indicator and
//! the correlation metadata are read, everything else rides along raw.
//!
//! Inbound deliveries are not signature-verified; the endpoint trusts its
//! network boundary.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::{PaymentError, Result};

/// A leniently parsed payment-outcome notification
#[derive(Clone, Debug)]
pub struct WebhookEvent {
    /// Provider event identifier, or a generated fallback when absent.
    /// Events without a provider identifier cannot be deduplicated.
    pub event_id: String,

    /// Provider-reported payment status, if present
    pub status: Option<String>,

    /// Plan identifier echoed back from the original request metadata
    pub plan_id: Option<String>,

    /// Full payload as received
    pub raw: Value,
}

impl WebhookEvent {
    /// Parse a raw delivery body. Fails only if the body is not JSON at all;
    /// unknown or absent fields are logged and tolerated.
    pub fn parse(raw_body: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(raw_body)
            .map_err(|e| PaymentError::WebhookParse(e.to_string()))?;

        let event_id = raw
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let status = raw.get("status").and_then(Value::as_str).map(str::to_string);

        let plan_id = raw
            .pointer("/metadata/planId")
            .and_then(Value::as_str)
            .map(str::to_string);

        if status.is_none() {
            tracing::warn!(event_id = %event_id, "Webhook payload has no status field");
        }
        if plan_id.is_none() {
            tracing::warn!(event_id = %event_id, "Webhook payload has no metadata.planId");
        }

        Ok(Self {
            event_id,
            status,
            plan_id,
            raw,
        })
    }

    /// Whether the provider reported a completed payment
    pub fn succeeded(&self) -> bool {
        self.status.as_deref() == Some("succeeded")
    }
}

/// Extension point for persisting payment outcomes.
///
/// Delivery from the provider is at-least-once: implementations MUST treat
/// repeated delivery of the same `event_id` as a no-op after the first
/// successful application.
#[async_trait]
pub trait OutcomeSink: Send + Sync {
    async fn on_payment_outcome(&self, event: &WebhookEvent) -> Result<()>;
}

/// Sink that records nothing durable; logs the outcome and discards it
pub struct LogOutcomeSink;

#[async_trait]
impl OutcomeSink for LogOutcomeSink {
    async fn on_payment_outcome(&self, event: &WebhookEvent) -> Result<()> {
        tracing::info!(
            event_id = %event.event_id,
            status = ?event.status,
            plan = ?event.plan_id,
            "Payment outcome received"
        );
        Ok(())
    }
}

/// A recorded payment outcome, keyed by provider event id
#[derive(Clone, Debug)]
pub struct PaymentOutcome {
    pub event_id: String,
    pub status: Option<String>,
    pub plan_id: Option<String>,
    pub received_at: DateTime<Utc>,
}

/// In-memory outcome store (for development).
///
/// Applies each event id once; duplicate deliveries are ignored.
pub struct MemoryOutcomeStore {
    outcomes: RwLock<HashMap<String, PaymentOutcome>>,
}

impl Default for MemoryOutcomeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryOutcomeStore {
    pub fn new() -> Self {
        Self {
            outcomes: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, event_id: &str) -> Option<PaymentOutcome> {
        self.outcomes.read().unwrap().get(event_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.outcomes.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OutcomeSink for MemoryOutcomeStore {
    async fn on_payment_outcome(&self, event: &WebhookEvent) -> Result<()> {
        let mut outcomes = self.outcomes.write().unwrap();

        if outcomes.contains_key(&event.event_id) {
            tracing::debug!(event_id = %event.event_id, "Duplicate webhook delivery ignored");
            return Ok(());
        }

        outcomes.insert(
            event.event_id.clone(),
            PaymentOutcome {
                event_id: event.event_id.clone(),
                status: event.status.clone(),
                plan_id: event.plan_id.clone(),
                received_at: Utc::now(),
            },
        );

        Ok(())
    }
}

/// Webhook ingestion service
pub struct WebhookIngest {
    sink: Arc<dyn OutcomeSink>,
}

impl WebhookIngest {
    pub fn new(sink: Arc<dyn OutcomeSink>) -> Self {
        Self { sink }
    }

    /// Parse and process one delivery, invoking the sink exactly once.
    ///
    /// Returns the parsed event so callers can log or inspect it. A parse
    /// failure means the provider should retry per its own delivery policy.
    pub async fn handle(&self, raw_body: &str) -> Result<WebhookEvent> {
        let event = WebhookEvent::parse(raw_body)?;

        tracing::info!(event_id = %event.event_id, "Processing payment webhook");

        self.sink.on_payment_outcome(&event).await?;

        Ok(event)
    }
}
