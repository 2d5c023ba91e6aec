//! HTTP route handlers.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::info;

use crate::listing::parse_train_list;

use super::dto::{ErrorResponse, ParseListingResponse};

/// Create the application router.
///
/// The parser holds no state between calls, so the router carries none.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/listing/parse", post(parse_listing))
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a results listing posted as the raw request body.
///
/// Accepts either an isolated results fragment or a full page containing
/// one. A listing with zero trains is a valid empty response; markup with
/// no recognizable listing at all is a 422.
async fn parse_listing(body: String) -> Result<Json<ParseListingResponse>, AppError> {
    let report = parse_train_list(&body).map_err(|e| AppError::Unprocessable {
        message: e.to_string(),
    })?;

    info!(
        trains = report.offers.len(),
        diagnostics = report.diagnostics.len(),
        "parsed posted listing"
    );

    Ok(Json(report.into()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Unprocessable { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
