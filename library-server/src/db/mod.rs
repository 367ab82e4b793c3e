//! Database layer - connection pool, schema bootstrap and book stores
//!
//! Handlers only see the `BookStore` trait; the PostgreSQL and in-memory
//! implementations live in `repos`.

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
