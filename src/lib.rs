//! my-books: REST backend for publishers, authors and books.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError, PublisherNameError};
pub use migration::apply_migrations;
pub use routes::app;
pub use service::{AuthorsService, BooksService, PublishersService};
pub use state::AppState;
pub use store::{ensure_database_exists, LibraryStore, MemoryLibraryStore, PgLibraryStore, StoreError};
