//! Mapping from pipeline errors to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use referent_core::{ReferentError, UpstreamKind};
use serde_json::json;

/// An error ready to be serialized as `{"error": "<message>"}`.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

/// Relays an upstream status code when it is a valid error status,
/// otherwise falls back to 502.
fn relay_or_bad_gateway(status: Option<u16>) -> StatusCode {
    status
        .and_then(|s| StatusCode::from_u16(s).ok())
        .filter(|s| s.is_client_error() || s.is_server_error())
        .unwrap_or(StatusCode::BAD_GATEWAY)
}

impl From<ReferentError> for ApiError {
    fn from(err: ReferentError) -> Self {
        let status = match &err {
            ReferentError::InvalidUrl(_)
            | ReferentError::InvalidAction(_)
            | ReferentError::ArticleNotLoaded => StatusCode::BAD_REQUEST,
            ReferentError::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            ReferentError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            ReferentError::FetchFailed { status } => relay_or_bad_gateway(*status),
            ReferentError::Upstream { status, kind } => match kind {
                UpstreamKind::Auth => StatusCode::UNAUTHORIZED,
                UpstreamKind::Quota => StatusCode::FORBIDDEN,
                UpstreamKind::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                UpstreamKind::Server => StatusCode::BAD_GATEWAY,
                UpstreamKind::Other => relay_or_bad_gateway(Some(*status)),
            },
            ReferentError::GenerationFailed | ReferentError::MalformedResponse => {
                StatusCode::BAD_GATEWAY
            }
        };

        Self { status, message: err.to_string() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
