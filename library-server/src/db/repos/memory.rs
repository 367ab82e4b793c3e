//! In-memory book store
//!
//! Stands in for PostgreSQL in handler tests and `--in-memory` runs.
//! Ids are assigned from a counter and never reused after a delete.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BookStore, DbError};
use crate::models::{seed_books, Book, BookId, NewBook};

#[derive(Default)]
struct Inner {
    books: BTreeMap<BookId, Book>,
    last_id: BookId,
}

/// Book store held in process memory
#[derive(Default)]
pub struct MemoryBookStore {
    inner: RwLock<Inner>,
}

impl MemoryBookStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the sample books.
    pub fn seeded() -> Self {
        let books: BTreeMap<BookId, Book> =
            seed_books().into_iter().map(|b| (b.id, b)).collect();
        let last_id = books.keys().next_back().copied().unwrap_or(0);

        Self {
            inner: RwLock::new(Inner { books, last_id }),
        }
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list(&self) -> Result<Vec<Book>, DbError> {
        Ok(self.inner.read().await.books.values().cloned().collect())
    }

    async fn get(&self, id: BookId) -> Result<Option<Book>, DbError> {
        Ok(self.inner.read().await.books.get(&id).cloned())
    }

    async fn add(&self, book: NewBook) -> Result<Book, DbError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let book = Book::from_new(inner.last_id, book);
        inner.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn replace(&self, id: BookId, book: NewBook) -> Result<Book, DbError> {
        let mut inner = self.inner.write().await;
        let slot = inner
            .books
            .get_mut(&id)
            .ok_or_else(|| DbError::book_not_found(id))?;
        *slot = Book::from_new(id, book);
        Ok(slot.clone())
    }

    async fn delete(&self, id: BookId) -> Result<bool, DbError> {
        Ok(self.inner.write().await.books.remove(&id).is_some())
    }
}
