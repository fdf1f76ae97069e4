//! Controller-style routes under `/api/{Controller}/{action}`.

use crate::handlers::{author, book, publisher, versioned};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn publisher_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/Publisher/get-all-publishers", get(publisher::get_all_publishers))
        .route("/api/Publisher/add-publisher", post(publisher::add_publisher))
        .route("/api/Publisher/get-publisher-by-id/:id", get(publisher::get_publisher_by_id))
        .route(
            "/api/Publisher/get-publisher-books-with-authors/:id",
            get(publisher::get_publisher_data),
        )
        .route(
            "/api/Publisher/delete-publisher-by-id/:id",
            delete(publisher::delete_publisher_by_id),
        )
        .with_state(state)
}

pub fn author_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/Author/add-author", post(author::add_author))
        .route("/api/Author/get-all-authors", get(author::get_all_authors))
        .route("/api/Author/get-author-with-books-by-id/:id", get(author::get_author_with_books))
        .route("/api/Author/delete-author-by-id/:id", delete(author::delete_author_by_id))
        .with_state(state)
}

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/Book/get-all-books", get(book::get_all_books))
        .route("/api/Book/get-book-by-id/:id", get(book::get_book_by_id))
        .route("/api/Book/add-book-with-authors", post(book::add_book_with_authors))
        .route("/api/Book/update-book-by-id/:id", put(book::update_book_by_id))
        .route("/api/Book/delete-book-by-id/:id", delete(book::delete_book_by_id))
        .with_state(state)
}

pub fn test_routes() -> Router {
    Router::new().route("/api/Test/get-test-data", get(versioned::get_test_data))
}
