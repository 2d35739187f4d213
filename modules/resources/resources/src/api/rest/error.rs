use axum::{BoxError, Json};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::api::rest::dto::ErrorBody;
use crate::domain::error::DomainError;

/// Error returned by every REST handler, rendered as `{ "error": <message> }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Resource not found")]
    ResourceNotFound,

    #[error("Not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Request timed out")]
    Timeout,

    /// `details` never reaches the client unless detail exposure is switched on.
    #[error("Internal server error")]
    Internal { details: String },
}

/// Internal error chain attached to a 500 response for the detail-exposure layer.
#[derive(Debug, Clone)]
pub struct InternalErrorDetails(pub String);

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ResourceNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidArgument(message) => Self::BadRequest(message),
            DomainError::NotFound { .. } => Self::ResourceNotFound,
            DomainError::Internal(cause) => Self::Internal {
                details: format!("{cause:#}"),
            },
        }
    }
}

/// Body-limit rejections keep their 413; every other JSON failure is a 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::BadRequest(rejection.body_text())
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        let mut response = (status, Json(body)).into_response();
        if let Self::Internal { details } = self {
            response
                .extensions_mut()
                .insert(InternalErrorDetails(details));
        }
        response
    }
}

/// Render a failure of an outer tower layer through the uniform body.
///
/// Used with `axum::error_handling::HandleErrorLayer` around a timeout layer.
pub async fn middleware_error(err: BoxError) -> ApiError {
    match err.downcast::<tower::timeout::error::Elapsed>() {
        Ok(_) => ApiError::Timeout,
        Err(other) => {
            error!(error = %other, "Request middleware failed");
            ApiError::Internal {
                details: other.to_string(),
            }
        }
    }
}

/// Response mapper that copies the internal error chain into the 500 body.
///
/// Installed only in diagnostic mode; production responses stay opaque.
pub async fn expose_internal_details(mut response: Response) -> Response {
    let Some(InternalErrorDetails(details)) =
        response.extensions_mut().remove::<InternalErrorDetails>()
    else {
        return response;
    };
    let body = json!({
        "error": ApiError::Internal { details: String::new() }.to_string(),
        "details": details,
    });
    (response.status(), Json(body)).into_response()
}
