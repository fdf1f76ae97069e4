use chrono::Utc;

use crate::error::AppError;
use crate::model::{Book, BookVm, BookWithAuthorsVm, NewBook};
use crate::store::{BookChanges, LibraryStore};

pub struct BooksService;

impl BooksService {
    pub async fn get_all_books(store: &dyn LibraryStore) -> Result<Vec<Book>, AppError> {
        Ok(store.list_books().await?)
    }

    pub async fn get_book_by_id(
        store: &dyn LibraryStore,
        book_id: i32,
    ) -> Result<Option<BookWithAuthorsVm>, AppError> {
        let Some(book) = store.get_book(book_id).await? else {
            return Ok(None);
        };
        let publisher_name = store
            .get_publisher(book.publisher_id)
            .await?
            .map(|p| p.name)
            .unwrap_or_default();
        let authors = store.authors_of_book(book_id).await?;
        Ok(Some(BookWithAuthorsVm {
            title: book.title,
            description: book.description,
            is_read: book.is_read,
            genre: book.genre,
            cover_url: book.cover_url,
            publisher_name,
            author_names: authors.into_iter().map(|a| a.full_name).collect(),
        }))
    }

    /// Stamps `date_added` with the current time and links every listed author.
    pub async fn add_book_with_authors(store: &dyn LibraryStore, book: &BookVm) -> Result<Book, AppError> {
        let new_book = NewBook {
            title: book.title.clone(),
            description: book.description.clone(),
            is_read: book.is_read,
            genre: book.genre.clone(),
            cover_url: book.cover_url.clone(),
            date_added: Utc::now(),
            publisher_id: book.publisher_id,
        };
        let row = store.insert_book(new_book, &book.author_ids).await?;
        tracing::info!(id = row.id, authors = book.author_ids.len(), "book added");
        Ok(row)
    }

    pub async fn update_book_by_id(
        store: &dyn LibraryStore,
        book_id: i32,
        book: &BookVm,
    ) -> Result<Option<Book>, AppError> {
        Ok(store.update_book(book_id, &BookChanges::from(book)).await?)
    }

    pub async fn delete_book_by_id(store: &dyn LibraryStore, id: i32) -> Result<(), AppError> {
        if !store.delete_book(id).await? {
            return Err(AppError::BadRequest(format!(
                "The book with id {} does not exist.",
                id
            )));
        }
        Ok(())
    }
}
