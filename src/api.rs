//! HTTP transport: request routing, validation, and error mapping.
//!
//! Two routes: `POST /api/scan` runs one analysis, `GET /api/health` is a
//! liveness probe. The analyzer always produces a result for a reachable
//! URL; only validation and transport failures map to error statuses.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};
use url::Url;

use crate::analyzer;
use crate::error::AppError;
use crate::fetch;

pub struct AppState {
    pub client: reqwest::Client,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/scan", post(scan))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub url: String,
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn scan(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScanRequest>,
) -> Result<Response, ApiError> {
    let url = validate_url(&request.url)?;

    info!(url = %url, "starting scan");
    let page = fetch::fetch_page(&state.client, url.as_str()).await?;
    let result = analyzer::analyze(url.as_str(), &page);
    info!(
        url = %url,
        issues = result.summary.issues,
        oks = result.summary.oks,
        infos = result.summary.infos,
        "scan complete"
    );

    Ok(Json(result).into_response())
}

/// Accept only well-formed http(s) URLs before touching the network.
fn validate_url(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw).map_err(|_| AppError::invalid_url(raw))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(AppError::invalid_url(raw)),
    }
}

/// Transport-facing error wrapper mapping domain errors to status codes
/// and the fixed error bodies the API promises.
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::InvalidUrl(_) => {
                (StatusCode::BAD_REQUEST, "Provide a valid http(s) URL")
            }
            AppError::NetworkError(_) | AppError::Other(_) => {
                warn!(error = %self.0, "scan failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Scan failed. Try a different URL.",
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(validate_url("https://example.com/page").is_ok());
        assert!(validate_url("http://example.com").is_ok());
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("example.com").is_err());
        assert!(validate_url("").is_err());
        assert!(validate_url("javascript:alert(1)").is_err());
    }
}
