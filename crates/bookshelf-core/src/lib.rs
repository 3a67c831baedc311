//! Bookshelf Core Library
//!
//! This crate provides the core functionality for Bookshelf, a personal
//! library catalog: adding, removing, searching and listing books, and
//! tracking whether each one is on the shelf or lent out.
//!
//! # Architecture
//!
//! - **JSON file**: Source of truth, rewritten in full after every change
//!
//! All queries are served from the in-memory list loaded at startup.
//!
//! # Quick Start
//!
//! ```text
//! let mut catalog = Catalog::open("library.json")?;
//!
//! // Add a book
//! let id = catalog.add("Dune", "Frank Herbert", "1965")?;
//!
//! // Lend it out
//! catalog.change_status(id, "checked-out")?;
//!
//! // Query books
//! let found = catalog.search("dune");
//! ```
//!
//! # Modules
//!
//! - `catalog`: The catalog store (main entry point)
//! - `models`: Book record, lending status and year
//! - `storage`: JSON file persistence
//! - `error`: Typed catalog errors
//! - `config`: Application configuration

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{CatalogError, CatalogResult};
pub use models::{Book, BookStatus, Year};
pub use storage::JsonPersistence;
