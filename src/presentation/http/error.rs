use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

const STORAGE_FAILURE_MESSAGE: &str = "the article store is unavailable";
const UNEXPECTED_FAILURE_MESSAGE: &str = "an unexpected error occurred";

/// Transport view of an [`ApplicationError`]: a status code plus a kind-tagged
/// body. Server-side details are logged here and never sent to the client.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let kind = err.kind();
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, kind, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, kind, msg),
            ApplicationError::Storage(detail) => {
                tracing::error!(error = %detail, "storage failure");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    kind,
                    STORAGE_FAILURE_MESSAGE.into(),
                )
            }
            ApplicationError::Unexpected(detail) => {
                tracing::error!(error = %detail, "unexpected failure");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    kind,
                    UNEXPECTED_FAILURE_MESSAGE.into(),
                )
            }
        }
    }

    /// A route exists for the path but not for the request method.
    pub fn method_not_allowed(method: &Method) -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            "method_not_allowed",
            format!("method {method} is not supported on this path"),
        )
    }

    fn new(status: StatusCode, kind: &'static str, message: String) -> Self {
        Self {
            status,
            kind,
            message,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self.kind.to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

/// Response for a panicked handler, installed through `CatchPanicLayer`.
pub fn panic_response(_panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    HttpError::from_error(ApplicationError::unexpected("handler panicked")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_stable_statuses() {
        let cases = [
            (ApplicationError::validation("x"), StatusCode::BAD_REQUEST),
            (ApplicationError::not_found("x"), StatusCode::NOT_FOUND),
            (ApplicationError::storage("x"), StatusCode::INTERNAL_SERVER_ERROR),
            (ApplicationError::unexpected("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(HttpError::from_error(err).status(), status);
        }
    }

    #[test]
    fn unsupported_method_has_its_own_kind() {
        let err = HttpError::method_not_allowed(&Method::PATCH);
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.kind, "method_not_allowed");
        assert!(err.message.contains("PATCH"));
    }

    #[test]
    fn storage_details_are_not_exposed() {
        let err = HttpError::from_error(ApplicationError::storage(
            "connection refused (os error 111) at 10.0.0.5:6379",
        ));
        assert_eq!(err.kind, "storage_error");
        assert_eq!(err.message, STORAGE_FAILURE_MESSAGE);
    }
}
