//! Publisher listing, lookup, creation and deletion.

use super::paging::{PaginatedList, PUBLISHER_PAGE_SIZE};
use super::validation::validate_publisher_name;
use crate::error::AppError;
use crate::model::{BookAuthorVm, Publisher, PublisherVm, PublisherWithBooksAndAuthorsVm};
use crate::store::LibraryStore;

/// `sortBy` value that flips the listing to descending name order.
pub const SORT_NAME_DESC: &str = "name_desc";

pub struct PublishersService;

impl PublishersService {
    /// Sorted by name ignoring case (ascending unless `sort_by` is `name_desc`), filtered by a
    /// case-insensitive substring of the name, then cut to one page of
    /// `PUBLISHER_PAGE_SIZE`. `page_number` defaults to 1.
    pub async fn get_all_publishers(
        store: &dyn LibraryStore,
        sort_by: Option<&str>,
        search_string: Option<&str>,
        page_number: Option<i32>,
    ) -> Result<Vec<Publisher>, AppError> {
        let mut all = store.list_publishers().await?;

        // Re-sorted here so the order does not depend on the database collation.
        if sort_by == Some(SORT_NAME_DESC) {
            all.sort_by(Publisher::cmp_by_name_desc);
        } else {
            all.sort_by(Publisher::cmp_by_name);
        }

        if let Some(needle) = search_string.filter(|s| !s.is_empty()) {
            let needle = needle.to_lowercase();
            all.retain(|p| p.name.to_lowercase().contains(&needle));
        }

        Ok(PaginatedList::create(
            all,
            page_number.unwrap_or(1),
            PUBLISHER_PAGE_SIZE,
        ))
    }

    pub async fn get_publisher_by_id(
        store: &dyn LibraryStore,
        id: i32,
    ) -> Result<Option<Publisher>, AppError> {
        Ok(store.get_publisher(id).await?)
    }

    pub async fn add_publisher(
        store: &dyn LibraryStore,
        publisher: &PublisherVm,
    ) -> Result<Publisher, AppError> {
        validate_publisher_name(&publisher.name)?;
        let row = store.insert_publisher(&publisher.name).await?;
        tracing::info!(id = row.id, name = %row.name, "publisher added");
        Ok(row)
    }

    /// The publisher's name with each of its books and their authors' names.
    pub async fn get_publisher_data(
        store: &dyn LibraryStore,
        publisher_id: i32,
    ) -> Result<Option<PublisherWithBooksAndAuthorsVm>, AppError> {
        let Some(publisher) = store.get_publisher(publisher_id).await? else {
            return Ok(None);
        };
        let books = store.books_by_publisher(publisher_id).await?;
        let mut book_authors = Vec::with_capacity(books.len());
        for book in books {
            let authors = store.authors_of_book(book.id).await?;
            book_authors.push(BookAuthorVm {
                book_name: book.title,
                book_authors: authors.into_iter().map(|a| a.full_name).collect(),
            });
        }
        Ok(Some(PublisherWithBooksAndAuthorsVm {
            name: publisher.name,
            book_authors,
        }))
    }

    pub async fn delete_publisher_by_id(store: &dyn LibraryStore, id: i32) -> Result<(), AppError> {
        if !store.delete_publisher(id).await? {
            return Err(AppError::BadRequest(format!(
                "The publisher with id {} does not exist.",
                id
            )));
        }
        tracing::info!(id, "publisher deleted");
        Ok(())
    }
}
