//! Global error handling: 500 bodies carry the request path, panics become 500s.

use std::any::Any;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::InternalErrorMessage;
use crate::response::ErrorVm;

pub const PANIC_MESSAGE: &str = "Internal Server Error from the custom middleware";

/// Rewrites any response marked with `InternalErrorMessage` into an `ErrorVm`
/// that names the request path, and logs it.
pub async fn exception_handler(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let res = next.run(req).await;
    let Some(InternalErrorMessage(message)) = res.extensions().get::<InternalErrorMessage>().cloned() else {
        return res;
    };
    let body = ErrorVm::internal(message, path);
    tracing::error!(
        status_code = body.status_code,
        message = %body.message,
        path = %body.path,
        "unhandled error"
    );
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Panic handler for `CatchPanicLayer`. The marker lets `exception_handler`
/// fill in the path.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "handler panicked");
    let mut res = (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorVm::internal(PANIC_MESSAGE, "")),
    )
        .into_response();
    res.extensions_mut()
        .insert(InternalErrorMessage(PANIC_MESSAGE.to_string()));
    res
}
