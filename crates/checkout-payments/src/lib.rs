//! # checkout-payments
//!
//! Payment session mediation for the ziina-checkout service.
//!
//! ## Hosted checkout flow
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │  Plan page  │────▶│  Ziina Hosted   │────▶│  Success /  │
//! │  (choose)   │     │  Checkout Page  │     │  Failed     │
//! └─────────────┘     └─────────────────┘     └─────────────┘
//!        │                     │
//!        ▼                     ▼ (out of band)
//!  POST /create-payment   POST /webhook
//! ```
//!
//! The client posts a plan identifier; this crate validates it against the
//! [`PlanCatalog`], builds the provider payment request, calls the provider
//! once through a [`PaymentGateway`], and returns exactly `{checkout_url}`
//! or a mapped error. The final payment outcome arrives later on the webhook
//! and is handed to an [`OutcomeSink`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use checkout_payments::{CheckoutService, PaymentConfig, ZiinaGateway};
//!
//! let config = Arc::new(PaymentConfig::from_env()?);
//! let gateway = Arc::new(ZiinaGateway::new(&config)?);
//! let checkout = CheckoutService::new(config, gateway);
//!
//! let session = checkout.create_session("monthly").await?;
//! // Redirect the user to: session.checkout_url
//! ```

mod config;
mod error;
mod gateway;
mod plans;
mod session;
mod webhook;

pub use config::PaymentConfig;
pub use error::{PaymentError, Result};
pub use gateway::{GatewayResponse, MockGateway, PaymentGateway, ZiinaGateway};
pub use plans::{Plan, PlanCatalog, PlanId, CURRENCY};
pub use session::{CheckoutService, CheckoutSession, PaymentMetadata, PaymentRequest};
pub use webhook::{
    LogOutcomeSink, MemoryOutcomeStore, OutcomeSink, PaymentOutcome, WebhookEvent, WebhookIngest,
};
