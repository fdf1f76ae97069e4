//! Storage seam for the library tables.
//!
//! `LibraryStore` exposes the primitive row operations the services are
//! built on. `PgLibraryStore` is the production backend; `MemoryLibraryStore`
//! keeps the same foreign keys and cascades in process.

mod error;
mod memory;
mod postgres;
mod seed;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryLibraryStore;
pub use postgres::{ensure_database_exists, PgLibraryStore};
pub use seed::seed_if_empty;

use async_trait::async_trait;

use crate::model::{Author, Book, BookVm, NewBook, Publisher};

/// Scalar book columns replaced by an update. `date_added` and author links
/// are left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookChanges {
    pub title: String,
    pub description: String,
    pub is_read: bool,
    pub genre: String,
    pub cover_url: String,
    pub publisher_id: i32,
}

impl From<&BookVm> for BookChanges {
    fn from(vm: &BookVm) -> Self {
        Self {
            title: vm.title.clone(),
            description: vm.description.clone(),
            is_read: vm.is_read,
            genre: vm.genre.clone(),
            cover_url: vm.cover_url.clone(),
            publisher_id: vm.publisher_id,
        }
    }
}

/// Row-level access to publishers, authors, books and book-author links.
///
/// Implementations must be thread-safe and enforce referential integrity:
/// a book needs an existing publisher, a link needs an existing book and
/// author. Deleting a publisher removes its books; deleting a book or an
/// author removes its links.
#[async_trait]
pub trait LibraryStore: Send + Sync + 'static {
    /// Cheap liveness check used by the readiness route.
    async fn ping(&self) -> StoreResult<()>;

    /// All publishers ordered by name ignoring case, then id.
    async fn list_publishers(&self) -> StoreResult<Vec<Publisher>>;
    async fn get_publisher(&self, id: i32) -> StoreResult<Option<Publisher>>;
    async fn insert_publisher(&self, name: &str) -> StoreResult<Publisher>;
    /// Returns false when no publisher had this id.
    async fn delete_publisher(&self, id: i32) -> StoreResult<bool>;

    /// All authors ordered by id.
    async fn list_authors(&self) -> StoreResult<Vec<Author>>;
    async fn get_author(&self, id: i32) -> StoreResult<Option<Author>>;
    async fn insert_author(&self, full_name: &str) -> StoreResult<Author>;
    async fn delete_author(&self, id: i32) -> StoreResult<bool>;

    /// All books ordered by id.
    async fn list_books(&self) -> StoreResult<Vec<Book>>;
    async fn get_book(&self, id: i32) -> StoreResult<Option<Book>>;
    async fn books_by_publisher(&self, publisher_id: i32) -> StoreResult<Vec<Book>>;
    async fn books_by_author(&self, author_id: i32) -> StoreResult<Vec<Book>>;
    /// Authors linked to a book, in link order.
    async fn authors_of_book(&self, book_id: i32) -> StoreResult<Vec<Author>>;
    /// Inserts the book and one link per author id as a single unit.
    async fn insert_book(&self, book: NewBook, author_ids: &[i32]) -> StoreResult<Book>;
    async fn update_book(&self, id: i32, changes: &BookChanges) -> StoreResult<Option<Book>>;
    async fn delete_book(&self, id: i32) -> StoreResult<bool>;
}
