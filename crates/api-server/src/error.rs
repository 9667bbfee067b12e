use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use common::ErrorResponse;
use domain::DomainError;
use tracing::{error, warn};

/// Error returned by every handler, rendered as `{ message, error? }`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            detail: None,
        }
    }

    /// Map a domain failure. `context` is the message used for storage
    /// failures; `expose_detail` decides whether the storage error text is
    /// passed through to the caller.
    pub fn from_domain(error: DomainError, context: &str, expose_detail: bool) -> Self {
        match error {
            DomainError::ValidationError(message) => {
                warn!("Rejected input: {}", message);
                Self::new(StatusCode::BAD_REQUEST, message)
            }
            DomainError::DuplicateProductName(name) => {
                warn!("Duplicate product name: {}", name);
                Self::new(
                    StatusCode::BAD_REQUEST,
                    "Product with this name already exists.",
                )
            }
            DomainError::ProductNotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, "Product not found.")
            }
            DomainError::ProfileNotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, "Profile not found.")
            }
            DomainError::RepositoryError(detail) => {
                error!("{} {}", context, detail);
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: context.to_string(),
                    detail: expose_detail.then_some(detail),
                }
            }
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(rejection: MultipartError) -> Self {
        warn!("Bad multipart body: {}", rejection);
        Self {
            status: rejection.status(),
            message: "Invalid multipart body.".to_string(),
            detail: Some(rejection.body_text()),
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        warn!("Not a multipart request: {}", rejection);
        Self {
            status: rejection.status(),
            message: "Invalid multipart body.".to_string(),
            detail: Some(rejection.body_text()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Bad JSON body: {}", rejection);
        Self {
            status: rejection.status(),
            message: "Invalid request body.".to_string(),
            detail: Some(rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            message: self.message,
            error: self.detail,
        };

        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_status_codes() {
        let cases = [
            (
                DomainError::ValidationError("bad".to_string()),
                StatusCode::BAD_REQUEST,
                "bad",
            ),
            (
                DomainError::DuplicateProductName("Apple".to_string()),
                StatusCode::BAD_REQUEST,
                "Product with this name already exists.",
            ),
            (
                DomainError::ProductNotFound("x".to_string()),
                StatusCode::NOT_FOUND,
                "Product not found.",
            ),
            (
                DomainError::ProfileNotFound("x".to_string()),
                StatusCode::NOT_FOUND,
                "Profile not found.",
            ),
        ];

        for (error, status, message) in cases {
            let mapped = ApiError::from_domain(error, "Error saving product.", true);
            assert_eq!(mapped.status, status);
            assert_eq!(mapped.message, message);
            assert_eq!(mapped.detail, None);
        }
    }

    #[test]
    fn storage_detail_follows_the_switch() {
        let error = DomainError::RepositoryError("disk I/O error".to_string());

        let shown = ApiError::from_domain(error.clone(), "Error fetching products.", true);
        assert_eq!(shown.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(shown.message, "Error fetching products.");
        assert_eq!(shown.detail.as_deref(), Some("disk I/O error"));

        let hidden = ApiError::from_domain(error, "Error fetching products.", false);
        assert_eq!(hidden.detail, None);
    }
}
