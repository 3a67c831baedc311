//! Storage layer
//!
//! The catalog is kept in a single human-readable JSON file. Every save
//! rewrites the whole file through a temp file and rename.

pub mod persistence;

pub use persistence::JsonPersistence;
