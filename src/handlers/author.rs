use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{Author, AuthorVm, AuthorWithBooksVm};
use crate::response::{ok, ok_empty};
use crate::service::AuthorsService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

/// Responds with the submitted body rather than the stored row.
#[utoipa::path(
    post,
    path = "/api/Author/add-author",
    request_body = AuthorVm,
    responses(
        (status = 200, description = "Author stored", body = AuthorVm),
        (status = 400, description = "Body is not a valid author")
    ),
    tag = "Author"
)]
pub async fn add_author(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<AuthorVm>,
) -> Result<impl IntoResponse, AppError> {
    AuthorsService::add_author(state.store.as_ref(), &body).await?;
    Ok(ok(body))
}

#[utoipa::path(
    get,
    path = "/api/Author/get-all-authors",
    responses((status = 200, description = "All authors", body = Vec<Author>)),
    tag = "Author"
)]
pub async fn get_all_authors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(AuthorsService::get_all_authors(state.store.as_ref()).await?))
}

#[utoipa::path(
    get,
    path = "/api/Author/get-author-with-books-by-id/{id}",
    params(("id" = i32, Path, description = "Author id")),
    responses(
        (status = 200, description = "Author with book titles", body = AuthorWithBooksVm),
        (status = 404, description = "No author with this id")
    ),
    tag = "Author"
)]
pub async fn get_author_with_books(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let data = AuthorsService::get_author_with_books(state.store.as_ref(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("author {}", id)))?;
    Ok(ok(data))
}

#[utoipa::path(
    delete,
    path = "/api/Author/delete-author-by-id/{id}",
    params(("id" = i32, Path, description = "Author id")),
    responses(
        (status = 200, description = "Author deleted"),
        (status = 400, description = "No author with this id")
    ),
    tag = "Author"
)]
pub async fn delete_author_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthorsService::delete_author_by_id(state.store.as_ref(), id).await?;
    Ok(ok_empty())
}
