//! Typed errors and HTTP mapping.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ErrorVm;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Raised when a publisher name fails the naming rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct PublisherNameError {
    pub message: String,
    pub publisher_name: String,
}

impl PublisherNameError {
    pub fn starts_with_number(name: &str) -> Self {
        Self {
            message: "Name starts with number".into(),
            publisher_name: name.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    PublisherName(#[from] PublisherNameError),
    /// 404 with an empty body.
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Marker left on 500 responses so the error middleware can log the
/// failure and stamp the request path into the body.
#[derive(Clone, Debug)]
pub struct InternalErrorMessage(pub String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::PublisherName(e) => plain(
                StatusCode::BAD_REQUEST,
                format!("{}, Publisher name: {}", e.message, e.publisher_name),
            ),
            AppError::BadRequest(msg) => plain(StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            AppError::Store(StoreError::ForeignKey { .. }) => plain(StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Store(_) => internal(self.to_string()),
        }
    }
}

fn plain(status: StatusCode, msg: String) -> Response {
    (status, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], msg).into_response()
}

fn internal(message: String) -> Response {
    let body = ErrorVm::internal(message.clone(), "");
    let mut res = (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
    res.extensions_mut().insert(InternalErrorMessage(message));
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publisher_name_error_renders_message_and_name() {
        let err = PublisherNameError::starts_with_number("123 Books");
        assert_eq!(err.to_string(), "Name starts with number");
        assert_eq!(err.publisher_name, "123 Books");
    }

    #[test]
    fn store_failures_map_to_500_with_marker() {
        let res = AppError::Store(StoreError::Internal("pool closed".into())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(res.extensions().get::<InternalErrorMessage>().is_some());
    }

    #[test]
    fn foreign_key_failures_map_to_400() {
        let res = AppError::Store(StoreError::ForeignKey {
            entity: "publisher",
            id: 9,
        })
        .into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn only_store_failures_are_internal() {
        let client_errors = [
            AppError::BadRequest("bad".into()),
            AppError::NotFound("1".into()),
            AppError::PublisherName(PublisherNameError::starts_with_number("1st")),
            AppError::Store(StoreError::ForeignKey { entity: "author", id: 3 }),
        ];
        for err in client_errors {
            let res = err.into_response();
            assert!(res.status().is_client_error());
            assert!(res.extensions().get::<InternalErrorMessage>().is_none());
        }
        let res = AppError::Store(StoreError::Internal("down".into())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_has_no_marker() {
        let res = AppError::NotFound("1".into()).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(res.extensions().get::<InternalErrorMessage>().is_none());
    }
}
