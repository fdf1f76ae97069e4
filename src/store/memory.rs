//! In-memory store for tests and database-less runs.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::{BookChanges, LibraryStore, StoreError, StoreResult};
use crate::model::{Author, Book, BookAuthor, NewBook, Publisher};

#[derive(Debug, Default)]
struct Tables {
    publishers: BTreeMap<i32, Publisher>,
    authors: BTreeMap<i32, Author>,
    books: BTreeMap<i32, Book>,
    book_authors: BTreeMap<i32, BookAuthor>,
    seq: Sequences,
}

/// Last id handed out per table; ids are never reused.
#[derive(Debug, Default)]
struct Sequences {
    publisher: i32,
    author: i32,
    book: i32,
    book_author: i32,
}

fn next(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

impl Tables {
    fn require_publisher(&self, id: i32) -> StoreResult<()> {
        if self.publishers.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::ForeignKey { entity: "publisher", id })
        }
    }

    fn require_author(&self, id: i32) -> StoreResult<()> {
        if self.authors.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::ForeignKey { entity: "author", id })
        }
    }

    fn remove_links_where(&mut self, pred: impl Fn(&BookAuthor) -> bool) {
        self.book_authors.retain(|_, link| !pred(link));
    }

    fn remove_book(&mut self, id: i32) -> bool {
        if self.books.remove(&id).is_none() {
            return false;
        }
        self.remove_links_where(|l| l.book_id == id);
        true
    }
}

/// Tables kept behind a single `RwLock`, so every operation is atomic.
#[derive(Debug, Default)]
pub struct MemoryLibraryStore {
    tables: RwLock<Tables>,
}

impl MemoryLibraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Internal("memory store lock poisoned".into()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::Internal("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl LibraryStore for MemoryLibraryStore {
    async fn ping(&self) -> StoreResult<()> {
        self.read().map(|_| ())
    }

    async fn list_publishers(&self) -> StoreResult<Vec<Publisher>> {
        let t = self.read()?;
        let mut out: Vec<Publisher> = t.publishers.values().cloned().collect();
        out.sort_by(Publisher::cmp_by_name);
        Ok(out)
    }

    async fn get_publisher(&self, id: i32) -> StoreResult<Option<Publisher>> {
        Ok(self.read()?.publishers.get(&id).cloned())
    }

    async fn insert_publisher(&self, name: &str) -> StoreResult<Publisher> {
        let mut t = self.write()?;
        let id = next(&mut t.seq.publisher);
        let row = Publisher {
            id,
            name: name.to_string(),
        };
        t.publishers.insert(id, row.clone());
        Ok(row)
    }

    async fn delete_publisher(&self, id: i32) -> StoreResult<bool> {
        let mut t = self.write()?;
        if t.publishers.remove(&id).is_none() {
            return Ok(false);
        }
        let book_ids: Vec<i32> = t
            .books
            .values()
            .filter(|b| b.publisher_id == id)
            .map(|b| b.id)
            .collect();
        for book_id in book_ids {
            t.remove_book(book_id);
        }
        Ok(true)
    }

    async fn list_authors(&self) -> StoreResult<Vec<Author>> {
        Ok(self.read()?.authors.values().cloned().collect())
    }

    async fn get_author(&self, id: i32) -> StoreResult<Option<Author>> {
        Ok(self.read()?.authors.get(&id).cloned())
    }

    async fn insert_author(&self, full_name: &str) -> StoreResult<Author> {
        let mut t = self.write()?;
        let id = next(&mut t.seq.author);
        let row = Author {
            id,
            full_name: full_name.to_string(),
        };
        t.authors.insert(id, row.clone());
        Ok(row)
    }

    async fn delete_author(&self, id: i32) -> StoreResult<bool> {
        let mut t = self.write()?;
        if t.authors.remove(&id).is_none() {
            return Ok(false);
        }
        t.remove_links_where(|l| l.author_id == id);
        Ok(true)
    }

    async fn list_books(&self) -> StoreResult<Vec<Book>> {
        Ok(self.read()?.books.values().cloned().collect())
    }

    async fn get_book(&self, id: i32) -> StoreResult<Option<Book>> {
        Ok(self.read()?.books.get(&id).cloned())
    }

    async fn books_by_publisher(&self, publisher_id: i32) -> StoreResult<Vec<Book>> {
        let t = self.read()?;
        Ok(t.books
            .values()
            .filter(|b| b.publisher_id == publisher_id)
            .cloned()
            .collect())
    }

    async fn books_by_author(&self, author_id: i32) -> StoreResult<Vec<Book>> {
        let t = self.read()?;
        Ok(t.book_authors
            .values()
            .filter(|l| l.author_id == author_id)
            .filter_map(|l| t.books.get(&l.book_id).cloned())
            .collect())
    }

    async fn authors_of_book(&self, book_id: i32) -> StoreResult<Vec<Author>> {
        let t = self.read()?;
        Ok(t.book_authors
            .values()
            .filter(|l| l.book_id == book_id)
            .filter_map(|l| t.authors.get(&l.author_id).cloned())
            .collect())
    }

    async fn insert_book(&self, book: NewBook, author_ids: &[i32]) -> StoreResult<Book> {
        let mut t = self.write()?;
        t.require_publisher(book.publisher_id)?;
        for &author_id in author_ids {
            t.require_author(author_id)?;
        }
        let id = next(&mut t.seq.book);
        let row = book.into_book(id);
        t.books.insert(id, row.clone());
        for &author_id in author_ids {
            let link_id = next(&mut t.seq.book_author);
            t.book_authors.insert(
                link_id,
                BookAuthor {
                    id: link_id,
                    book_id: id,
                    author_id,
                },
            );
        }
        Ok(row)
    }

    async fn update_book(&self, id: i32, changes: &BookChanges) -> StoreResult<Option<Book>> {
        let mut t = self.write()?;
        if !t.books.contains_key(&id) {
            return Ok(None);
        }
        t.require_publisher(changes.publisher_id)?;
        let Some(book) = t.books.get_mut(&id) else {
            return Ok(None);
        };
        book.title = changes.title.clone();
        book.description = changes.description.clone();
        book.is_read = changes.is_read;
        book.genre = changes.genre.clone();
        book.cover_url = changes.cover_url.clone();
        book.publisher_id = changes.publisher_id;
        Ok(Some(book.clone()))
    }

    async fn delete_book(&self, id: i32) -> StoreResult<bool> {
        Ok(self.write()?.remove_book(id))
    }
}
