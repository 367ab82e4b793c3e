//! Command implementations for the library CLI

pub mod serve;

pub use serve::run_serve;
