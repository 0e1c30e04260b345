//! HTTP adapter: the `/slides` endpoint and its error-mapping policy

use crate::error::Error;
use crate::handlers::SlidesResponse;
use crate::{pdf, source};
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

/// Request body for `POST /slides`
#[derive(Debug, Clone, Deserialize)]
pub struct SlidesRequest {
    /// Base64-encoded PDF; an absent field is treated as empty
    #[serde(default)]
    pub body: String,
}

/// Error envelope returned with status 500
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Create the slides router
pub fn router() -> Router {
    Router::new().route("/slides", post(convert))
}

/// Convert a base64-encoded PDF into slides.
///
/// The body is parsed by hand so that every upstream failure, malformed
/// request JSON included, falls into the single 500 error envelope.
async fn convert(body: Bytes) -> Result<Json<SlidesResponse>, Error> {
    let request: SlidesRequest = serde_json::from_slice(&body)?;
    let data = source::decode_body(&request.body)?;
    let slides = pdf::extract_slides(&data)?;
    Ok(Json(SlidesResponse { slides }))
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "slide conversion failed");
        let body = Json(ErrorResponse {
            error: self.client_message(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
