//! Request bodies and composed response shapes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublisherVm {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorVm {
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookVm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub cover_url: String,
    pub publisher_id: i32,
    #[serde(default)]
    pub author_ids: Vec<i32>,
}

/// One of a publisher's books with the names of its authors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookAuthorVm {
    pub book_name: String,
    pub book_authors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublisherWithBooksAndAuthorsVm {
    pub name: String,
    pub book_authors: Vec<BookAuthorVm>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorWithBooksVm {
    pub full_name: String,
    pub book_titles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookWithAuthorsVm {
    pub title: String,
    pub description: String,
    pub is_read: bool,
    pub genre: String,
    pub cover_url: String,
    pub publisher_name: String,
    pub author_names: Vec<String>,
}
