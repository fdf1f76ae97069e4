//! Shared helpers for the HTTP and service tests.

// Each test file uses a different subset of these helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use tower::ServiceExt;

use my_books::model::NewBook;
use my_books::{app, AppState, LibraryStore, MemoryLibraryStore};

/// Seven publishers, two authors, two books of publisher 1.
/// Book 1 is by authors 1 and 2; book 2 by author 2.
pub async fn seeded_store() -> Arc<MemoryLibraryStore> {
    let store = Arc::new(MemoryLibraryStore::new());
    for i in 1..=7 {
        store.insert_publisher(&format!("Publisher {i}")).await.unwrap();
    }
    store.insert_author("Author 1").await.unwrap();
    store.insert_author("Author 2").await.unwrap();
    store.insert_book(book("Book 1", 1), &[1, 2]).await.unwrap();
    store.insert_book(book("Book 2", 1), &[2]).await.unwrap();
    store
}

/// Only the seven publishers.
pub async fn publishers_only_store() -> Arc<MemoryLibraryStore> {
    let store = Arc::new(MemoryLibraryStore::new());
    for i in 1..=7 {
        store.insert_publisher(&format!("Publisher {i}")).await.unwrap();
    }
    store
}

pub fn book(title: &str, publisher_id: i32) -> NewBook {
    NewBook {
        title: title.into(),
        description: title.into(),
        is_read: false,
        genre: "Genre".into(),
        cover_url: "http://...".into(),
        date_added: Utc::now() - Duration::days(10),
        publisher_id,
    }
}

pub fn test_app(store: Arc<dyn LibraryStore>) -> Router {
    app(AppState::new(store))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

pub async fn send(app: Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_string(&v).unwrap())
        }
        None => Body::empty(),
    };
    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    collect(response).await
}

async fn collect(response: axum::response::Response) -> TestResponse {
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    TestResponse {
        status,
        headers,
        body: bytes.to_vec(),
    }
}

/// Sends `body` verbatim as `application/json`, for bodies that are not valid JSON.
pub async fn send_raw(app: Router, method: &str, uri: &str, body: &str) -> TestResponse {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    collect(app.oneshot(req).await.unwrap()).await
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(app, "GET", uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> TestResponse {
    send(app, "POST", uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> TestResponse {
    send(app, "PUT", uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> TestResponse {
    send(app, "DELETE", uri, None).await
}
