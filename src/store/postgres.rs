//! PostgreSQL backend over a `sqlx` pool.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{ConnectOptions, PgPool};

use super::{BookChanges, LibraryStore, StoreError, StoreResult};
use crate::model::{Author, Book, NewBook, Publisher};

const BOOK_COLUMNS: &str =
    "id, title, description, is_read, genre, cover_url, date_added, publisher_id";

pub struct PgLibraryStore {
    pool: PgPool,
}

impl PgLibraryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn exists(
        conn: &mut sqlx::PgConnection,
        table: &str,
        id: i32,
    ) -> StoreResult<bool> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", table);
        let (found,): (bool,) = sqlx::query_as(&sql).bind(id).fetch_one(&mut *conn).await?;
        Ok(found)
    }

    async fn delete_by_id(&self, table: &str, id: i32) -> StoreResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1", table);
        tracing::debug!(sql = %sql, id, "query");
        let res = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(res.rows_affected() > 0)
    }
}

#[async_trait]
impl LibraryStore for PgLibraryStore {
    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn list_publishers(&self) -> StoreResult<Vec<Publisher>> {
        let sql = "SELECT id, name FROM publishers ORDER BY LOWER(name), id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(sql).fetch_all(&self.pool).await?)
    }

    async fn get_publisher(&self, id: i32) -> StoreResult<Option<Publisher>> {
        let sql = "SELECT id, name FROM publishers WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(sql).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn insert_publisher(&self, name: &str) -> StoreResult<Publisher> {
        let sql = "INSERT INTO publishers (name) VALUES ($1) RETURNING id, name";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(sql).bind(name).fetch_one(&self.pool).await?)
    }

    async fn delete_publisher(&self, id: i32) -> StoreResult<bool> {
        self.delete_by_id("publishers", id).await
    }

    async fn list_authors(&self) -> StoreResult<Vec<Author>> {
        let sql = "SELECT id, full_name FROM authors ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(sql).fetch_all(&self.pool).await?)
    }

    async fn get_author(&self, id: i32) -> StoreResult<Option<Author>> {
        let sql = "SELECT id, full_name FROM authors WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(sql).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn insert_author(&self, full_name: &str) -> StoreResult<Author> {
        let sql = "INSERT INTO authors (full_name) VALUES ($1) RETURNING id, full_name";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(sql).bind(full_name).fetch_one(&self.pool).await?)
    }

    async fn delete_author(&self, id: i32) -> StoreResult<bool> {
        self.delete_by_id("authors", id).await
    }

    async fn list_books(&self) -> StoreResult<Vec<Book>> {
        let sql = format!("SELECT {} FROM books ORDER BY id", BOOK_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(&sql).fetch_all(&self.pool).await?)
    }

    async fn get_book(&self, id: i32) -> StoreResult<Option<Book>> {
        let sql = format!("SELECT {} FROM books WHERE id = $1", BOOK_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn books_by_publisher(&self, publisher_id: i32) -> StoreResult<Vec<Book>> {
        let sql = format!(
            "SELECT {} FROM books WHERE publisher_id = $1 ORDER BY id",
            BOOK_COLUMNS
        );
        tracing::debug!(sql = %sql, publisher_id, "query");
        Ok(sqlx::query_as(&sql)
            .bind(publisher_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn books_by_author(&self, author_id: i32) -> StoreResult<Vec<Book>> {
        let sql = "SELECT b.id, b.title, b.description, b.is_read, b.genre, b.cover_url, b.date_added, b.publisher_id \
                   FROM books b JOIN book_authors ba ON ba.book_id = b.id \
                   WHERE ba.author_id = $1 ORDER BY ba.id";
        tracing::debug!(sql = %sql, author_id, "query");
        Ok(sqlx::query_as(sql).bind(author_id).fetch_all(&self.pool).await?)
    }

    async fn authors_of_book(&self, book_id: i32) -> StoreResult<Vec<Author>> {
        let sql = "SELECT a.id, a.full_name FROM authors a \
                   JOIN book_authors ba ON ba.author_id = a.id \
                   WHERE ba.book_id = $1 ORDER BY ba.id";
        tracing::debug!(sql = %sql, book_id, "query");
        Ok(sqlx::query_as(sql).bind(book_id).fetch_all(&self.pool).await?)
    }

    async fn insert_book(&self, book: NewBook, author_ids: &[i32]) -> StoreResult<Book> {
        let mut tx = self.pool.begin().await?;
        if !Self::exists(&mut *tx, "publishers", book.publisher_id).await? {
            return Err(StoreError::ForeignKey {
                entity: "publisher",
                id: book.publisher_id,
            });
        }
        for &author_id in author_ids {
            if !Self::exists(&mut *tx, "authors", author_id).await? {
                return Err(StoreError::ForeignKey {
                    entity: "author",
                    id: author_id,
                });
            }
        }
        let sql = format!(
            "INSERT INTO books (title, description, is_read, genre, cover_url, date_added, publisher_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            BOOK_COLUMNS
        );
        tracing::debug!(sql = %sql, "query (tx)");
        let row: Book = sqlx::query_as(&sql)
            .bind(&book.title)
            .bind(&book.description)
            .bind(book.is_read)
            .bind(&book.genre)
            .bind(&book.cover_url)
            .bind(book.date_added)
            .bind(book.publisher_id)
            .fetch_one(&mut *tx)
            .await?;
        for &author_id in author_ids {
            sqlx::query("INSERT INTO book_authors (book_id, author_id) VALUES ($1, $2)")
                .bind(row.id)
                .bind(author_id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(row)
    }

    async fn update_book(&self, id: i32, changes: &BookChanges) -> StoreResult<Option<Book>> {
        let mut tx = self.pool.begin().await?;
        if !Self::exists(&mut *tx, "books", id).await? {
            return Ok(None);
        }
        if !Self::exists(&mut *tx, "publishers", changes.publisher_id).await? {
            return Err(StoreError::ForeignKey {
                entity: "publisher",
                id: changes.publisher_id,
            });
        }
        let sql = format!(
            "UPDATE books SET title = $1, description = $2, is_read = $3, genre = $4, cover_url = $5, publisher_id = $6 \
             WHERE id = $7 RETURNING {}",
            BOOK_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query (tx)");
        let row: Option<Book> = sqlx::query_as(&sql)
            .bind(&changes.title)
            .bind(&changes.description)
            .bind(changes.is_read)
            .bind(&changes.genre)
            .bind(&changes.cover_url)
            .bind(changes.publisher_id)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row)
    }

    async fn delete_book(&self, id: i32) -> StoreResult<bool> {
        self.delete_by_id("books", id).await
    }
}

/// Create the database named in `database_url` if it does not exist yet.
/// Connects to the `postgres` maintenance database on the same server.
pub async fn ensure_database_exists(database_url: &str) -> StoreResult<()> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let (exists,): (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a connection URL into the URL of the `postgres` maintenance database
/// on the same server and the target database name. The database is the last
/// path segment; the query string (`sslmode`, a socket `host=` and so on) is kept
/// on the maintenance URL. Supported shapes: `postgres://[user[:pass]@]host[:port]/db[?params]`
/// and `postgres:///db?host=/socket/dir`.
fn parse_db_name_from_url(url: &str) -> StoreResult<(String, String)> {
    let (location, query) = match url.split_once('?') {
        Some((location, query)) => (location, Some(query)),
        None => (url, None),
    };
    let scheme_end = location.find("://").map(|i| i + 3).unwrap_or(0);
    let slash = location
        .get(scheme_end..)
        .and_then(|rest| rest.rfind('/'))
        .map(|i| scheme_end + i)
        .ok_or_else(|| StoreError::Internal("DATABASE_URL: no database path".into()))?;
    let base = location.get(..=slash).unwrap_or(location);
    let db_name = location.get(slash + 1..).unwrap_or("").trim();
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
