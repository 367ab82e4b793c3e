//! library-server: REST service for a book catalogue
//!
//! Exposes list, get, create, update and delete for books under
//! `/api/books`, backed by PostgreSQL or an in-memory store.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::Environment;
pub use db::{BookStore, DbError, MemoryBookStore, PgBookStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
