//! Application configuration from environment variables.

mod loader;
pub mod types;

pub use types::AppConfig;
