//! ziina-checkout HTTP Server
//!
//! Axum-based server mediating between the plan-selection frontend and the
//! Ziina hosted-checkout API, plus the inbound payment-outcome webhook.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checkout_payments::{
    CheckoutService, LogOutcomeSink, PaymentConfig, WebhookIngest, ZiinaGateway,
};

use crate::handlers::{create_payment, health_check, webhook};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Initialize payments
    let (checkout, verbose_errors) = match PaymentConfig::from_env() {
        Ok(config) => {
            let config = Arc::new(config);
            let gateway = Arc::new(ZiinaGateway::new(&config)?);
            let verbose = config.verbose_errors;
            tracing::info!("✓ Ziina payments configured");
            (
                Some(Arc::new(CheckoutService::new(config, gateway))),
                verbose,
            )
        }
        Err(e) => {
            tracing::warn!("⚠ Payments disabled: {e}");
            tracing::warn!("  Set ZIINA_API_KEY in .env to enable checkout");
            (None, true)
        }
    };

    // Outcome sink extension point: swap in a persistent store here to
    // record final payment statuses keyed by event id.
    let webhooks = Arc::new(WebhookIngest::new(Arc::new(LogOutcomeSink)));

    let state = AppState {
        checkout,
        webhooks,
        verbose_errors,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ]);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/create-payment", post(create_payment))
        .route("/webhook", post(webhook))
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new("static"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("ziina-checkout server running on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health          - Health check");
    tracing::info!("  POST /create-payment  - Create hosted checkout session");
    tracing::info!("  POST /webhook         - Provider payment-outcome webhook");

    axum::serve(listener, app).await?;

    Ok(())
}
