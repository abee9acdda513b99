//! HTTP endpoint
//!
//! `POST /calculator` maps a JSON [`CalculationRequest`] onto the service
//! function and the result back onto JSON.

use anyhow::Context;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use error::{codes, ErrorResponse};
use tokio::net::TcpListener;

use crate::config::CalculatorConfig;
use crate::models::{CalculationRequest, CalculationResponse};
use crate::service;

/// Build the calculator router
pub fn router() -> Router {
    Router::new().route("/calculator", post(calculate_handler))
}

async fn calculate_handler(payload: Result<Json<CalculationRequest>, JsonRejection>) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!("Rejected calculator request: {}", rejection.body_text());
            let body = ErrorResponse::new(codes::INVALID_REQUEST_BODY, "Invalid request body")
                .with_details(rejection.body_text());
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    match service::calculate(&req) {
        Ok(result) => (StatusCode::OK, Json(CalculationResponse { result })).into_response(),
        // The service only fails on request semantics
        Err(e) => {
            tracing::debug!("Calculation rejected: {} ({})", e, req.operation);
            let body = ErrorResponse::new(codes::INVALID_OPERATION, e.to_string());
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
    }
}

/// Bind the configured address and serve until the listener fails
pub async fn serve(config: &CalculatorConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind calculator service to {}", addr))?;

    tracing::info!("Starting calculator service on {}", addr);
    serve_listener(listener).await
}

/// Serve the calculator router on an already bound listener
pub async fn serve_listener(listener: TcpListener) -> anyhow::Result<()> {
    axum::serve(listener, router())
        .await
        .context("Calculator service stopped")?;
    Ok(())
}
