//! Stored rows.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Publisher {
    pub id: i32,
    pub name: String,
}

impl Publisher {
    /// Case-insensitive name order, ties broken by id.
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.name
            .to_lowercase()
            .cmp(&other.name.to_lowercase())
            .then(self.id.cmp(&other.id))
    }

    /// Descending case-insensitive name order; equal names keep ascending id.
    pub fn cmp_by_name_desc(&self, other: &Self) -> Ordering {
        other
            .name
            .to_lowercase()
            .cmp(&self.name.to_lowercase())
            .then(self.id.cmp(&other.id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i32,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub is_read: bool,
    pub genre: String,
    pub cover_url: String,
    pub date_added: DateTime<Utc>,
    pub publisher_id: i32,
}

/// Join row linking a book to one of its authors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookAuthor {
    pub id: i32,
    pub book_id: i32,
    pub author_id: i32,
}

/// Book columns without the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub description: String,
    pub is_read: bool,
    pub genre: String,
    pub cover_url: String,
    pub date_added: DateTime<Utc>,
    pub publisher_id: i32,
}

impl NewBook {
    pub fn into_book(self, id: i32) -> Book {
        Book {
            id,
            title: self.title,
            description: self.description,
            is_read: self.is_read,
            genre: self.genre,
            cover_url: self.cover_url,
            date_added: self.date_added,
            publisher_id: self.publisher_id,
        }
    }
}
