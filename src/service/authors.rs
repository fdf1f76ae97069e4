use crate::error::AppError;
use crate::model::{Author, AuthorVm, AuthorWithBooksVm};
use crate::store::LibraryStore;

pub struct AuthorsService;

impl AuthorsService {
    pub async fn add_author(store: &dyn LibraryStore, author: &AuthorVm) -> Result<Author, AppError> {
        let row = store.insert_author(&author.full_name).await?;
        tracing::info!(id = row.id, "author added");
        Ok(row)
    }

    pub async fn get_all_authors(store: &dyn LibraryStore) -> Result<Vec<Author>, AppError> {
        Ok(store.list_authors().await?)
    }

    /// The author's name and the titles of the books linked to them.
    pub async fn get_author_with_books(
        store: &dyn LibraryStore,
        author_id: i32,
    ) -> Result<Option<AuthorWithBooksVm>, AppError> {
        let Some(author) = store.get_author(author_id).await? else {
            return Ok(None);
        };
        let books = store.books_by_author(author_id).await?;
        Ok(Some(AuthorWithBooksVm {
            full_name: author.full_name,
            book_titles: books.into_iter().map(|b| b.title).collect(),
        }))
    }

    pub async fn delete_author_by_id(store: &dyn LibraryStore, id: i32) -> Result<(), AppError> {
        if !store.delete_author(id).await? {
            return Err(AppError::BadRequest(format!(
                "The author with id {} does not exist.",
                id
            )));
        }
        Ok(())
    }
}
