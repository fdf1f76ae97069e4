//! Query-string API versioning (`?api-version=1.9`).

use crate::error::AppError;
use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;
use utoipa::IntoParams;

pub const SUPPORTED_VERSIONS: &[&str] = &["1.0", "1.2", "1.9"];
pub const DEFAULT_VERSION: &str = "1.0";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApiVersionQuery {
    /// Requested API version; defaults to 1.0.
    #[serde(rename = "api-version")]
    pub api_version: Option<String>,
}

/// Normalise `1` to `1.0` and reject versions the API does not serve.
pub fn resolve_version(raw: Option<&str>) -> Result<&'static str, AppError> {
    let requested = raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_VERSION);
    let normalised = if requested.contains('.') {
        requested.to_string()
    } else {
        format!("{}.0", requested)
    };
    SUPPORTED_VERSIONS
        .iter()
        .copied()
        .find(|v| *v == normalised)
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "The requested API version '{}' is not supported.",
                requested
            ))
        })
}

#[utoipa::path(
    get,
    path = "/api/Test/get-test-data",
    params(ApiVersionQuery),
    responses(
        (status = 200, description = "Version banner", body = String),
        (status = 400, description = "Unsupported API version")
    ),
    tag = "Test"
)]
pub async fn get_test_data(Query(q): Query<ApiVersionQuery>) -> Result<impl IntoResponse, AppError> {
    let version = resolve_version(q.api_version.as_deref())?;
    Ok(match version {
        "1.9" => "This is v19",
        _ => "This is v1",
    })
}
