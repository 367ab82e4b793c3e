//! Book endpoints under /api/books

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{ValidBookId, ValidJson};
use crate::http::server::AppState;
use crate::models::{Book, BookPayload};

/// Base path for the book collection
pub const BOOKS_PATH: &str = "/api/books";

/// GET /api/books - list all books
async fn list_books(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.books.list().await?;
    Ok(Json(books))
}

/// GET /api/books/{id} - get a single book
async fn get_book(
    State(state): State<Arc<AppState>>,
    ValidBookId(id): ValidBookId,
) -> Result<Json<Book>, ApiError> {
    let book = state
        .books
        .get(id)
        .await?
        .ok_or_else(|| ApiError::book_not_found(id))?;

    Ok(Json(book))
}

/// POST /api/books - create a new book
///
/// Any id in the payload is ignored; the store assigns one.
async fn create_book(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<BookPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let new_book = payload.into_new_book()?;
    let book = state.books.add(new_book).await?;
    tracing::info!(id = book.id, title = %book.title, "Book created");

    let location = format!("{}/{}", BOOKS_PATH, book.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(book)))
}

/// PUT /api/books/{id} - replace an existing book
async fn update_book(
    State(state): State<Arc<AppState>>,
    ValidBookId(id): ValidBookId,
    ValidJson(payload): ValidJson<BookPayload>,
) -> Result<StatusCode, ApiError> {
    // Checked before field validation so a mismatch always wins
    if payload.id != id {
        return Err(ApiError::IdMismatch);
    }

    let new_book = payload.into_new_book()?;
    state.books.replace(id, new_book).await?;
    tracing::info!(id, "Book updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/books/{id} - remove a book
async fn delete_book(
    State(state): State<Arc<AppState>>,
    ValidBookId(id): ValidBookId,
) -> Result<StatusCode, ApiError> {
    if !state.books.delete(id).await? {
        return Err(ApiError::book_not_found(id));
    }
    tracing::info!(id, "Book deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Book routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(BOOKS_PATH, get(list_books).post(create_book))
        .route(
            "/api/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryBookStore;

    fn state() -> State<Arc<AppState>> {
        State(Arc::new(AppState::new(Arc::new(MemoryBookStore::seeded()))))
    }

    #[tokio::test]
    async fn list_returns_seeded_books() {
        let Json(books) = list_books(state()).await.unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "Clean Code");
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let err = get_book(state(), ValidBookId(999)).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[tokio::test]
    async fn update_mismatch_ignores_payload_validity() {
        let payload = BookPayload {
            id: 2,
            ..BookPayload::default()
        };
        let err = update_book(state(), ValidBookId(1), ValidJson(payload))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::IdMismatch));
    }

    #[tokio::test]
    async fn update_empty_title_is_validation_error() {
        let payload = BookPayload {
            id: 1,
            title: Some(String::new()),
            author: Some("Robert Martin".into()),
            isbn: Some("9780132350884".into()),
            is_available: true,
        };
        let err = update_book(state(), ValidBookId(1), ValidJson(payload))
            .await
            .unwrap_err();

        match err {
            ApiError::Validation(errors) => assert!(errors.by_field().contains_key("Title")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_twice_is_not_found() {
        let state = state();
        let status = delete_book(state.clone(), ValidBookId(1)).await.unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let err = delete_book(state, ValidBookId(1)).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }
}
