//! Shared application state for all routes.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::migration::apply_migrations;
use crate::store::{ensure_database_exists, seed_if_empty, LibraryStore, MemoryLibraryStore, PgLibraryStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn LibraryStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn LibraryStore>) -> Self {
        Self { store }
    }

    /// Opens the configured backend: PostgreSQL when `DATABASE_URL` is set
    /// (creating the database and tables as needed), the in-memory store otherwise.
    pub async fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let store: Arc<dyn LibraryStore> = match &config.database_url {
            Some(url) => {
                ensure_database_exists(url).await?;
                let pool = sqlx::postgres::PgPoolOptions::new()
                    .max_connections(config.max_connections)
                    .connect(url)
                    .await
                    .map_err(crate::store::StoreError::from)?;
                apply_migrations(&pool).await?;
                tracing::info!(max_connections = config.max_connections, "using PostgreSQL store");
                Arc::new(PgLibraryStore::new(pool))
            }
            None => {
                tracing::warn!("DATABASE_URL not set; using in-memory store");
                Arc::new(MemoryLibraryStore::new())
            }
        };
        if config.seed_data {
            seed_if_empty(store.as_ref()).await?;
        }
        Ok(Self::new(store))
    }
}
