//! Domain models with validation before writes
//!
//! Client input arrives as `BookPayload` and only becomes a `NewBook` after
//! every field check passes. Invalid input returns `ValidationErrors`, not panic.

pub mod book;
pub mod validation;

pub use book::{seed_books, Book, BookId, BookPayload, NewBook};
pub use validation::{ValidationError, ValidationErrors};
