//! PostgreSQL book store

use async_trait::async_trait;
use sqlx::PgPool;

use super::{BookStore, DbError};
use crate::models::{Book, BookId, NewBook};

/// Book store backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn list(&self) -> Result<Vec<Book>, DbError> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, isbn, is_available
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn get(&self, id: BookId) -> Result<Option<Book>, DbError> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, isbn, is_available
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    async fn add(&self, book: NewBook) -> Result<Book, DbError> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, isbn, is_available)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, author, isbn, is_available
            "#,
        )
        .bind(book.title)
        .bind(book.author)
        .bind(book.isbn)
        .bind(book.is_available)
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }

    /// Single UPDATE ... RETURNING; no row back means no such id.
    async fn replace(&self, id: BookId, book: NewBook) -> Result<Book, DbError> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $2, author = $3, isbn = $4, is_available = $5
            WHERE id = $1
            RETURNING id, title, author, isbn, is_available
            "#,
        )
        .bind(id)
        .bind(book.title)
        .bind(book.author)
        .bind(book.isbn)
        .bind(book.is_available)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::book_not_found(id))
    }

    async fn delete(&self, id: BookId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
