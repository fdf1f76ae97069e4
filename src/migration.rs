//! DDL for the library tables.
//! Tables are created in foreign-key dependency order: publishers, authors, books, book_authors.

use crate::store::StoreResult;
use sqlx::PgPool;

struct TableDef {
    name: &'static str,
    columns: &'static [(&'static str, &'static str)],
    foreign_keys: &'static [ForeignKeyDef],
}

struct ForeignKeyDef {
    column: &'static str,
    references: &'static str,
}

struct IndexDef {
    name: &'static str,
    table: &'static str,
    column: &'static str,
}

const TABLES: &[TableDef] = &[
    TableDef {
        name: "publishers",
        columns: &[("id", "SERIAL"), ("name", "TEXT NOT NULL")],
        foreign_keys: &[],
    },
    TableDef {
        name: "authors",
        columns: &[("id", "SERIAL"), ("full_name", "TEXT NOT NULL")],
        foreign_keys: &[],
    },
    TableDef {
        name: "books",
        columns: &[
            ("id", "SERIAL"),
            ("title", "TEXT NOT NULL"),
            ("description", "TEXT NOT NULL DEFAULT ''"),
            ("is_read", "BOOLEAN NOT NULL DEFAULT FALSE"),
            ("genre", "TEXT NOT NULL DEFAULT ''"),
            ("cover_url", "TEXT NOT NULL DEFAULT ''"),
            ("date_added", "TIMESTAMPTZ NOT NULL DEFAULT NOW()"),
            ("publisher_id", "INTEGER NOT NULL"),
        ],
        foreign_keys: &[ForeignKeyDef {
            column: "publisher_id",
            references: "publishers",
        }],
    },
    TableDef {
        name: "book_authors",
        columns: &[
            ("id", "SERIAL"),
            ("book_id", "INTEGER NOT NULL"),
            ("author_id", "INTEGER NOT NULL"),
        ],
        foreign_keys: &[
            ForeignKeyDef {
                column: "book_id",
                references: "books",
            },
            ForeignKeyDef {
                column: "author_id",
                references: "authors",
            },
        ],
    },
];

const INDEXES: &[IndexDef] = &[
    IndexDef {
        name: "ix_publishers_name",
        table: "publishers",
        column: "name",
    },
    IndexDef {
        name: "ix_books_publisher_id",
        table: "books",
        column: "publisher_id",
    },
    IndexDef {
        name: "ix_book_authors_book_id",
        table: "book_authors",
        column: "book_id",
    },
    IndexDef {
        name: "ix_book_authors_author_id",
        table: "book_authors",
        column: "author_id",
    },
];

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn create_table_sql(t: &TableDef) -> String {
    let mut defs: Vec<String> = t
        .columns
        .iter()
        .map(|(name, ty)| format!("{} {}", quote(name), ty))
        .collect();
    defs.push(format!("PRIMARY KEY ({})", quote("id")));
    for fk in t.foreign_keys {
        defs.push(format!(
            "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({}) ON DELETE CASCADE",
            quote(&format!("fk_{}_{}", t.name, fk.column)),
            quote(fk.column),
            quote(fk.references),
            quote("id")
        ));
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        quote(t.name),
        defs.join(",\n  ")
    )
}

fn create_index_sql(idx: &IndexDef) -> String {
    format!(
        "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
        quote(idx.name),
        quote(idx.table),
        quote(idx.column)
    )
}

/// Create tables and indexes if missing. Safe to run on every start.
pub async fn apply_migrations(pool: &PgPool) -> StoreResult<()> {
    for t in TABLES {
        let sql = create_table_sql(t);
        tracing::debug!(sql = %sql, "migration");
        sqlx::query(&sql).execute(pool).await?;
    }
    for idx in INDEXES {
        sqlx::query(&create_index_sql(idx)).execute(pool).await?;
    }
    tracing::info!(tables = TABLES.len(), "schema up to date");
    Ok(())
}
