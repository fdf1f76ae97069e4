use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{Book, BookVm, BookWithAuthorsVm};
use crate::response::{ok, ok_empty};
use crate::service::BooksService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

#[utoipa::path(
    get,
    path = "/api/Book/get-all-books",
    responses((status = 200, description = "All books", body = Vec<Book>)),
    tag = "Book"
)]
pub async fn get_all_books(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(BooksService::get_all_books(state.store.as_ref()).await?))
}

#[utoipa::path(
    get,
    path = "/api/Book/get-book-by-id/{id}",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book with publisher and author names", body = BookWithAuthorsVm),
        (status = 404, description = "No book with this id")
    ),
    tag = "Book"
)]
pub async fn get_book_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let data = BooksService::get_book_by_id(state.store.as_ref(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("book {}", id)))?;
    Ok(ok(data))
}

#[utoipa::path(
    post,
    path = "/api/Book/add-book-with-authors",
    request_body = BookVm,
    responses(
        (status = 200, description = "Book stored with its author links", body = Book),
        (status = 400, description = "Publisher or an author does not exist")
    ),
    tag = "Book"
)]
pub async fn add_book_with_authors(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<BookVm>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(BooksService::add_book_with_authors(state.store.as_ref(), &body).await?))
}

#[utoipa::path(
    put,
    path = "/api/Book/update-book-by-id/{id}",
    params(("id" = i32, Path, description = "Book id")),
    request_body = BookVm,
    responses(
        (status = 200, description = "Updated book", body = Book),
        (status = 400, description = "Publisher does not exist"),
        (status = 404, description = "No book with this id")
    ),
    tag = "Book"
)]
pub async fn update_book_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(body): JsonBody<BookVm>,
) -> Result<impl IntoResponse, AppError> {
    let row = BooksService::update_book_by_id(state.store.as_ref(), id, &body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("book {}", id)))?;
    Ok(ok(row))
}

#[utoipa::path(
    delete,
    path = "/api/Book/delete-book-by-id/{id}",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 400, description = "No book with this id")
    ),
    tag = "Book"
)]
pub async fn delete_book_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    BooksService::delete_book_by_id(state.store.as_ref(), id).await?;
    Ok(ok_empty())
}
