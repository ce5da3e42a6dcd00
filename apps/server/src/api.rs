//! HTTP surface: one chart endpoint plus a liveness probe.
//!
//! Every failure path returns a well-formed tagged payload; no internal
//! fault propagates to the caller unhandled.

use std::sync::Arc;

use astraea_core::chart::{Chart, ChartAssembler, ChartRequest};
use astraea_core::config::AstraeaConfig;
use astraea_core::error::ChartError;
use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub fn router(assembler: Arc<ChartAssembler>, config: &AstraeaConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/chart", post(calculate_chart))
        .layer(cors_layer(&config.allowed_origins))
        .with_state(assembler)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        layer.allow_origin(AllowOrigin::list(parsed))
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn calculate_chart(
    State(assembler): State<Arc<ChartAssembler>>,
    Json(request): Json<ChartRequest>,
) -> Result<Json<Chart>, ApiError> {
    let chart = assembler.assemble(&request).await?;
    Ok(Json(chart))
}

/// Wire form of a failed request.
struct ApiError(ChartError);

impl From<ChartError> for ApiError {
    fn from(err: ChartError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ChartError::InvalidDateTimeFormat { .. }
            | ChartError::DateOutOfRange { .. }
            | ChartError::InvalidLocalTime { .. }
            | ChartError::UnknownTimezone { .. }
            | ChartError::InvalidOrb { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ChartError::LocationNotFound { .. } => StatusCode::NOT_FOUND,
            ChartError::ProviderUnavailable { .. } => StatusCode::BAD_GATEWAY,
            ChartError::HouseCalculation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        log::warn!("chart request failed ({}): {}", self.0.kind(), self.0);
        let body = json!({
            "error": {
                "kind": self.0.kind(),
                "detail": self.0.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}
