//! Application State

use std::sync::Arc;

use checkout_payments::{CheckoutService, WebhookIngest};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Checkout session service (None if ZIINA_API_KEY is not configured)
    pub checkout: Option<Arc<CheckoutService>>,

    /// Webhook ingestion with the configured outcome sink
    pub webhooks: Arc<WebhookIngest>,

    /// Include provider diagnostics as `details` in error bodies
    pub verbose_errors: bool,
}
