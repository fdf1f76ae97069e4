//! Router assembly and cross-cutting layers.

mod common;
mod library;

pub use common::common_routes;
pub use library::{author_routes, book_routes, publisher_routes, test_routes};

use crate::middleware::{exception_handler, handle_panic};
use crate::state::AppState;
use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Request bodies above this size are rejected with 413.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Full application: every route plus panic catching, the global error
/// handler, request tracing and a body size limit.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(publisher_routes(state.clone()))
        .merge(author_routes(state.clone()))
        .merge(book_routes(state))
        .merge(test_routes())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(axum::middleware::from_fn(exception_handler))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
