//! Publisher handlers: list, read, create, delete, books with authors.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{Publisher, PublisherVm, PublisherWithBooksAndAuthorsVm};
use crate::response::{created, ok, ok_empty};
use crate::service::PublishersService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListPublishersQuery {
    /// `name_desc` sorts by name descending; anything else sorts ascending.
    pub sort_by: Option<String>,
    /// Case-insensitive substring of the publisher name.
    pub search_string: Option<String>,
    /// 1-based page of three publishers. Empty means the first page.
    pub page_number: Option<String>,
}

fn parse_page_number(raw: Option<&str>) -> Result<Option<i32>, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("The value '{}' is not valid for pageNumber.", s))),
    }
}

#[utoipa::path(
    get,
    path = "/api/Publisher/get-all-publishers",
    params(ListPublishersQuery),
    responses(
        (status = 200, description = "One page of publishers", body = Vec<Publisher>),
        (status = 400, description = "Publishers could not be loaded")
    ),
    tag = "Publisher"
)]
pub async fn get_all_publishers(
    State(state): State<AppState>,
    Query(q): Query<ListPublishersQuery>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(sort_by = ?q.sort_by, search = ?q.search_string, page = ?q.page_number, "listing publishers");
    let page_number = parse_page_number(q.page_number.as_deref())?;
    let rows = PublishersService::get_all_publishers(
        state.store.as_ref(),
        q.sort_by.as_deref(),
        q.search_string.as_deref(),
        page_number,
    )
    .await
    .map_err(|e| {
        tracing::warn!(error = %e, "publisher listing failed");
        AppError::BadRequest("Sorry, we could not load the publishers".into())
    })?;
    Ok(ok(rows))
}

#[utoipa::path(
    post,
    path = "/api/Publisher/add-publisher",
    request_body = PublisherVm,
    responses(
        (status = 201, description = "Publisher created", body = Publisher),
        (status = 400, description = "Name starts with a number")
    ),
    tag = "Publisher"
)]
pub async fn add_publisher(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<PublisherVm>,
) -> Result<impl IntoResponse, AppError> {
    let row = PublishersService::add_publisher(state.store.as_ref(), &body)
        .await
        .map_err(|e| match e {
            AppError::PublisherName(_) => e,
            other => AppError::BadRequest(other.to_string()),
        })?;
    Ok(created("AddPublisher", row))
}

#[utoipa::path(
    get,
    path = "/api/Publisher/get-publisher-by-id/{id}",
    params(("id" = i32, Path, description = "Publisher id")),
    responses(
        (status = 200, description = "The publisher", body = Publisher),
        (status = 404, description = "No publisher with this id")
    ),
    tag = "Publisher"
)]
pub async fn get_publisher_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let row = PublishersService::get_publisher_by_id(state.store.as_ref(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("publisher {}", id)))?;
    Ok(ok(row))
}

#[utoipa::path(
    get,
    path = "/api/Publisher/get-publisher-books-with-authors/{id}",
    params(("id" = i32, Path, description = "Publisher id")),
    responses(
        (status = 200, description = "Publisher books with their authors", body = PublisherWithBooksAndAuthorsVm),
        (status = 404, description = "No publisher with this id")
    ),
    tag = "Publisher"
)]
pub async fn get_publisher_data(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let data = PublishersService::get_publisher_data(state.store.as_ref(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("publisher {}", id)))?;
    Ok(ok(data))
}

#[utoipa::path(
    delete,
    path = "/api/Publisher/delete-publisher-by-id/{id}",
    params(("id" = i32, Path, description = "Publisher id")),
    responses(
        (status = 200, description = "Publisher and its books deleted"),
        (status = 400, description = "No publisher with this id")
    ),
    tag = "Publisher"
)]
pub async fn delete_publisher_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    PublishersService::delete_publisher_by_id(state.store.as_ref(), id)
        .await
        .map_err(|e| match e {
            AppError::BadRequest(_) => e,
            other => AppError::BadRequest(other.to_string()),
        })?;
    Ok(ok_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_page_number_is_none() {
        assert_eq!(parse_page_number(None).unwrap(), None);
        assert_eq!(parse_page_number(Some("")).unwrap(), None);
        assert_eq!(parse_page_number(Some(" 2 ")).unwrap(), Some(2));
    }

    #[test]
    fn non_numeric_page_number_is_bad_request() {
        assert!(matches!(parse_page_number(Some("two")), Err(AppError::BadRequest(_))));
    }
}
