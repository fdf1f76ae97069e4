//! HTTP handlers for publishers, authors, books and the versioned test endpoint.

pub mod author;
pub mod book;
pub mod publisher;
pub mod versioned;
