//! Response helpers shared by the handlers and the error middleware.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// JSON body of every 500 response.
#[derive(Serialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorVm {
    pub status_code: u16,
    pub message: String,
    pub path: String,
}

impl ErrorVm {
    pub fn internal(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            message: message.into(),
            path: path.into(),
        }
    }
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// 201 with a `Location` header naming the action that created the row.
pub fn created<T: Serialize>(location: &'static str, data: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(data),
    )
        .into_response()
}

pub fn ok_empty() -> StatusCode {
    StatusCode::OK
}
