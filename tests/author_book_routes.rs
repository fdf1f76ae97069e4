//! HTTP behavior of the author, book and versioned test endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{delete, get, post_json, put_json, seeded_store, send_raw, test_app};

#[tokio::test]
async fn add_author_echoes_body_and_stores_it() {
    let store = seeded_store().await;
    let res = post_json(
        test_app(store.clone()),
        "/api/Author/add-author",
        json!({ "fullName": "Author 3" }),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!({ "fullName": "Author 3" }));

    let res = get(test_app(store), "/api/Author/get-all-authors").await;
    let data = res.json();
    let names: Vec<&str> = data
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["fullName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Author 1", "Author 2", "Author 3"]);
}

#[tokio::test]
async fn author_with_books_lists_titles() {
    let store = seeded_store().await;
    let res = get(test_app(store), "/api/Author/get-author-with-books-by-id/2").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json(),
        json!({ "fullName": "Author 2", "bookTitles": ["Book 1", "Book 2"] })
    );
}

#[tokio::test]
async fn author_with_books_for_missing_author_is_not_found() {
    let store = seeded_store().await;
    let res = get(test_app(store), "/api/Author/get-author-with-books-by-id/42").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_author_unlinks_books() {
    let store = seeded_store().await;
    let res = delete(test_app(store.clone()), "/api/Author/delete-author-by-id/2").await;
    assert_eq!(res.status, StatusCode::OK);

    let res = get(test_app(store.clone()), "/api/Book/get-book-by-id/1").await;
    assert_eq!(res.json()["authorNames"], json!(["Author 1"]));

    let res = delete(test_app(store), "/api/Author/delete-author-by-id/2").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.text(), "The author with id 2 does not exist.");
}

#[tokio::test]
async fn add_book_with_authors_then_read_it() {
    let store = seeded_store().await;
    let res = post_json(
        test_app(store.clone()),
        "/api/Book/add-book-with-authors",
        json!({
            "title": "Book 3",
            "description": "Third",
            "isRead": true,
            "genre": "Drama",
            "coverUrl": "http://cover",
            "publisherId": 2,
            "authorIds": [1]
        }),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    let created = res.json();
    assert_eq!(created["id"], 3);
    assert_eq!(created["publisherId"], 2);
    assert!(created["dateAdded"].is_string());

    let res = get(test_app(store), "/api/Book/get-book-by-id/3").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json(),
        json!({
            "title": "Book 3",
            "description": "Third",
            "isRead": true,
            "genre": "Drama",
            "coverUrl": "http://cover",
            "publisherName": "Publisher 2",
            "authorNames": ["Author 1"]
        })
    );
}

#[tokio::test]
async fn add_book_for_missing_publisher_is_bad_request() {
    let store = seeded_store().await;
    let res = post_json(
        test_app(store.clone()),
        "/api/Book/add-book-with-authors",
        json!({ "title": "Orphan", "publisherId": 99, "authorIds": [] }),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.text(), "publisher with id 99 does not exist");

    let res = get(test_app(store), "/api/Book/get-all-books").await;
    assert_eq!(res.json().as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn add_book_with_missing_author_stores_nothing() {
    let store = seeded_store().await;
    let res = post_json(
        test_app(store.clone()),
        "/api/Book/add-book-with-authors",
        json!({ "title": "Ghost", "publisherId": 1, "authorIds": [1, 77] }),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = get(test_app(store), "/api/Book/get-all-books").await;
    assert_eq!(res.json().as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn update_book_replaces_fields() {
    let store = seeded_store().await;
    let res = put_json(
        test_app(store.clone()),
        "/api/Book/update-book-by-id/1",
        json!({
            "title": "Book 1 (2nd ed.)",
            "description": "Revised",
            "isRead": true,
            "genre": "Genre",
            "coverUrl": "http://...",
            "publisherId": 3
        }),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    let book = res.json();
    assert_eq!(book["title"], "Book 1 (2nd ed.)");
    assert_eq!(book["isRead"], true);
    assert_eq!(book["publisherId"], 3);

    let res = get(test_app(store), "/api/Book/get-book-by-id/1").await;
    assert_eq!(res.json()["authorNames"], json!(["Author 1", "Author 2"]));
}

#[tokio::test]
async fn update_missing_book_is_not_found() {
    let store = seeded_store().await;
    let res = put_json(
        test_app(store),
        "/api/Book/update-book-by-id/99",
        json!({ "title": "Nope", "publisherId": 1 }),
    )
    .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_book_then_again() {
    let store = seeded_store().await;
    let res = delete(test_app(store.clone()), "/api/Book/delete-book-by-id/2").await;
    assert_eq!(res.status, StatusCode::OK);

    let res = get(test_app(store.clone()), "/api/Author/get-author-with-books-by-id/2").await;
    assert_eq!(res.json()["bookTitles"], json!(["Book 1"]));

    let res = delete(test_app(store), "/api/Book/delete-book-by-id/2").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_data_is_versioned_by_query_string() {
    let store = seeded_store().await;

    let res = get(test_app(store.clone()), "/api/Test/get-test-data").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.text(), "This is v1");

    let res = get(test_app(store.clone()), "/api/Test/get-test-data?api-version=1.2").await;
    assert_eq!(res.text(), "This is v1");

    let res = get(test_app(store.clone()), "/api/Test/get-test-data?api-version=1.9").await;
    assert_eq!(res.text(), "This is v19");

    let res = get(test_app(store), "/api/Test/get-test-data?api-version=3.0").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_book_body_is_bad_request() {
    let store = seeded_store().await;
    let res = send_raw(
        test_app(store.clone()),
        "POST",
        "/api/Book/add-book-with-authors",
        "{\"title\": \"Broken\",",
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = put_json(
        test_app(store.clone()),
        "/api/Book/update-book-by-id/1",
        json!({ "title": "No publisher" }),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = post_json(test_app(store.clone()), "/api/Author/add-author", json!({ "fullName": 7 })).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = get(test_app(store), "/api/Book/get-all-books").await;
    assert_eq!(res.json().as_array().unwrap().len(), 2);
}
