//! Sample rows for a fresh database.

use chrono::{Duration, Utc};

use super::{LibraryStore, StoreResult};
use crate::model::NewBook;

/// Insert a publisher, two authors and two books unless publishers exist
/// already. Returns whether anything was written.
pub async fn seed_if_empty(store: &dyn LibraryStore) -> StoreResult<bool> {
    if !store.list_publishers().await?.is_empty() {
        return Ok(false);
    }
    let publisher = store.insert_publisher("Sample Publisher").await?;
    let first = store.insert_author("First Author").await?;
    let second = store.insert_author("Second Author").await?;
    let now = Utc::now();

    store
        .insert_book(
            NewBook {
                title: "1st Book Title".into(),
                description: "1st Book Description".into(),
                is_read: true,
                genre: "Biography".into(),
                cover_url: "https://...".into(),
                date_added: now - Duration::days(10),
                publisher_id: publisher.id,
            },
            &[first.id],
        )
        .await?;
    store
        .insert_book(
            NewBook {
                title: "2nd Book Title".into(),
                description: "2nd Book Description".into(),
                is_read: false,
                genre: "Biography".into(),
                cover_url: "https://...".into(),
                date_added: now,
                publisher_id: publisher.id,
            },
            &[first.id, second.id],
        )
        .await?;
    tracing::info!("seeded sample data");
    Ok(true)
}
