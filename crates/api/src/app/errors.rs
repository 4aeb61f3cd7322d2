use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Failures surfaced to HTTP callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A downstream dependency is missing or not answering.
    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("missing or invalid bearer credential")]
    Unauthorized,
}

impl ApiError {
    pub fn service_unavailable(detail: impl Into<String>) -> Self {
        Self::ServiceUnavailable(detail.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::ServiceUnavailable(detail) => {
                json_error(StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", detail)
            }
            Self::Unauthorized => {
                let mut res = json_error(StatusCode::UNAUTHORIZED, "unauthorized", self.to_string());
                res.headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
                res
            }
        }
    }
}

/// Error payload shared by every failing route.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub detail: String,
}

pub fn json_error(status: StatusCode, code: &'static str, detail: impl Into<String>) -> Response {
    (
        status,
        axum::Json(ErrorBody {
            error: code.to_string(),
            detail: detail.into(),
        }),
    )
        .into_response()
}
