//! Book store contract and its implementations
//!
//! Each store follows these patterns:
//! - Primary-key access only, no batching or caching
//! - Every write is committed before the call returns
//! - Missing rows are an absence signal on reads and deletes, and a
//!   `DbError::NotFound` on replace

use async_trait::async_trait;

use crate::models::{Book, BookId, NewBook};

pub mod books;
pub mod memory;

pub use books::PgBookStore;
pub use memory::MemoryBookStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn book_not_found(id: BookId) -> Self {
        Self::NotFound {
            resource: "book",
            id: id.to_string(),
        }
    }
}

/// Persistence gateway for books
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All stored books, ordered by id.
    async fn list(&self) -> Result<Vec<Book>, DbError>;

    /// The book with this id, if any.
    async fn get(&self, id: BookId) -> Result<Option<Book>, DbError>;

    /// Insert a book and return it with its assigned id.
    async fn add(&self, book: NewBook) -> Result<Book, DbError>;

    /// Overwrite every field of an existing book.
    ///
    /// Fails with `DbError::NotFound` when no book has this id.
    async fn replace(&self, id: BookId, book: NewBook) -> Result<Book, DbError>;

    /// Remove a book. Returns `false` when there was nothing to remove.
    async fn delete(&self, id: BookId) -> Result<bool, DbError>;
}
