//! Entities and view models.

mod entity;
mod view;
pub use entity::*;
pub use view::*;
