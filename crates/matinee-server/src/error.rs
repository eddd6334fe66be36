//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`matinee_core::Error`] via the [`AppError`]
//! wrapper so route handlers can return `Result<T, AppError>` directly.
//! Client bodies only ever carry the generic message for the error class;
//! the full error goes to the logs.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Wrapper so we can implement `IntoResponse` for an external type.
pub struct AppError(matinee_core::Error);

impl From<matinee_core::Error> for AppError {
    fn from(e: matinee_core::Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Request failed");
        }

        let message = self.0.client_message();

        // A 416 advertises the actual size in Content-Range.
        if let matinee_core::Error::RangeNotSatisfiable { size } = self.0 {
            return (
                status,
                [(header::CONTENT_RANGE, format!("bytes */{size}"))],
                message,
            )
                .into_response();
        }

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_produces_404() {
        let err = AppError::from(matinee_core::Error::not_found("file", "clip.mp4"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn malformed_range_produces_400() {
        let err = AppError::from(matinee_core::Error::malformed_range("bad syntax"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unsatisfiable_range_produces_416_with_content_range() {
        let err = AppError::from(matinee_core::Error::RangeNotSatisfiable { size: 2048 });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::RANGE_NOT_SATISFIABLE);
        assert_eq!(
            response.headers().get(header::CONTENT_RANGE).unwrap(),
            "bytes */2048"
        );
    }

    #[test]
    fn library_unavailable_produces_500() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::from(matinee_core::Error::LibraryUnavailable { source: io_err });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn internal_produces_500() {
        let err = AppError::from(matinee_core::Error::Internal("oops".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
