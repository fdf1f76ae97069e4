//! Storage error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A referenced row is missing.
    #[error("{entity} with id {id} does not exist")]
    ForeignKey { entity: &'static str, id: i32 },

    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("storage: {0}")]
    Internal(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
