//! HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use checkout_payments::{CheckoutSession, PaymentError};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub payments_configured: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    #[serde(rename = "planId")]
    pub plan_id: String,
}

/// Error contract shared by every endpoint: a short message plus optional
/// structured diagnostics. Never a raw provider body on its own.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

type ApiError = (StatusCode, Json<ErrorBody>);

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        payments_configured: state.checkout.is_some(),
    })
}

/// Create a hosted checkout session
///
/// The body is parsed by hand so malformed JSON maps onto the same error
/// contract as every other failure.
pub async fn create_payment(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<CheckoutSession>, ApiError> {
    let checkout = state.checkout.as_ref().ok_or_else(|| {
        tracing::error!("Create payment called without ZIINA_API_KEY configured");
        error_response(
            &PaymentError::Config("ZIINA_API_KEY not set".into()),
            state.verbose_errors,
        )
    })?;

    let request: CreatePaymentRequest = serde_json::from_str(&body).map_err(|e| {
        tracing::warn!("Failed to parse request body: {e}");
        error_response(
            &PaymentError::BadRequest("Invalid JSON in request body".into()),
            state.verbose_errors,
        )
    })?;

    let session = checkout
        .create_session(&request.plan_id)
        .await
        .map_err(|e| error_response(&e, state.verbose_errors))?;

    Ok(Json(session))
}

/// Receive a payment-outcome notification from the provider
///
/// Any structurally valid JSON is acknowledged so the provider stops
/// redelivering; a parse or sink failure answers 500 so it retries.
pub async fn webhook(State(state): State<AppState>, body: String) -> Result<Json<Value>, ApiError> {
    match state.webhooks.handle(&body).await {
        Ok(_) => Ok(Json(json!({"success": true}))),
        Err(e) => {
            tracing::error!("Webhook error: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: e.user_message(),
                    details: None,
                }),
            ))
        }
    }
}

/// Map a payment error onto the HTTP contract
fn error_response(err: &PaymentError, verbose: bool) -> ApiError {
    let status = match err {
        PaymentError::BadRequest(_) | PaymentError::UnknownPlan(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let details = if verbose {
        match err {
            PaymentError::Rejected { body, .. } => Some(body.clone()),
            PaymentError::Unreachable(message) => Some(json!(message)),
            _ => None,
        }
    } else {
        None
    };

    (
        status,
        Json(ErrorBody {
            error: err.user_message(),
            details,
        }),
    )
}
