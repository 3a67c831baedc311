//! Catalog store
//!
//! The `Catalog` owns the in-memory list of books and the JSON file that
//! backs it. Every mutation rewrites the whole file immediately.
//!
//! ## Usage
//!
//! ```ignore
//! let mut catalog = Catalog::open("library.json")?;
//!
//! let id = catalog.add("Dune", "Frank Herbert", "1965")?;
//! catalog.change_status(id, "checked-out")?;
//!
//! for book in catalog.search("herbert") {
//!     println!("{}", book.title());
//! }
//! ```

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Book, BookStatus, Year};
use crate::storage::JsonPersistence;

/// The book catalog and its backing file
pub struct Catalog {
    /// Books in insertion (or file) order
    books: Vec<Book>,
    persistence: JsonPersistence,
    /// Lowest id the next add may use; never goes down within a session
    next_id: u64,
}

impl Catalog {
    /// Open the catalog at `path`
    ///
    /// A missing file gives an empty catalog; nothing is written until the
    /// first mutation. A file that can't be parsed is an error.
    pub fn open(path: impl Into<PathBuf>) -> CatalogResult<Self> {
        let persistence = JsonPersistence::new(path);
        let books = persistence.load()?;
        let next_id = max_id(&books) + 1;

        Ok(Self {
            books,
            persistence,
            next_id,
        })
    }

    /// Open the catalog file named by the configuration
    pub fn open_with_config(config: &Config) -> CatalogResult<Self> {
        Self::open(config.catalog_path())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        self.persistence.path()
    }

    /// Write the full catalog to disk
    pub fn save(&self) -> CatalogResult<()> {
        self.persistence.save(&self.books)
    }

    /// Add a new book and return its id
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<Year>,
    ) -> CatalogResult<u64> {
        let title = title.into();
        let author = author.into();
        if title.trim().is_empty() {
            return Err(CatalogError::EmptyField { field: "title" });
        }
        if author.trim().is_empty() {
            return Err(CatalogError::EmptyField { field: "author" });
        }

        let id = self.next_id();
        let book = Book::new(id, title, author, year);
        info!(id, title = book.title(), "Adding book");

        self.books.push(book);
        if let Err(e) = self.save() {
            self.books.pop();
            return Err(e);
        }
        self.next_id = id + 1;
        Ok(id)
    }

    /// Delete a book by id, returning the removed record
    pub fn delete(&mut self, id: u64) -> CatalogResult<Book> {
        let Some(pos) = self.books.iter().position(|b| b.id() == id) else {
            warn!(id, "Delete of unknown book");
            return Err(CatalogError::NotFound { id });
        };

        let book = self.books.remove(pos);
        if let Err(e) = self.save() {
            self.books.insert(pos, book);
            return Err(e);
        }
        info!(id, title = book.title(), "Deleted book");
        Ok(book)
    }

    /// Find books whose title or author contains `term` (ignoring case),
    /// or whose year is exactly `term`
    pub fn search(&self, term: &str) -> Vec<&Book> {
        self.books.iter().filter(|b| b.matches(term)).collect()
    }

    /// All books in catalog order
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Get a book by id
    pub fn get(&self, id: u64) -> Option<&Book> {
        self.books.iter().find(|b| b.id() == id)
    }

    /// Change a book's lending status from user-supplied text
    ///
    /// The text is validated before the id is looked up, so an invalid
    /// status is reported even for an unknown id.
    pub fn change_status(&mut self, id: u64, status: &str) -> CatalogResult<&Book> {
        let status: BookStatus = status.parse()?;
        self.set_status(id, status)
    }

    /// Change a book's lending status
    pub fn set_status(&mut self, id: u64, status: BookStatus) -> CatalogResult<&Book> {
        let Some(pos) = self.books.iter().position(|b| b.id() == id) else {
            warn!(id, "Status change of unknown book");
            return Err(CatalogError::NotFound { id });
        };

        let previous = self.books[pos].status();
        self.books[pos].set_status(status);
        if let Err(e) = self.save() {
            self.books[pos].set_status(previous);
            return Err(e);
        }
        info!(id, %status, "Changed book status");
        Ok(&self.books[pos])
    }

    /// Number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the catalog has no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The id the next added book will get
    pub fn next_id(&self) -> u64 {
        self.next_id.max(max_id(&self.books) + 1)
    }
}

fn max_id(books: &[Book]) -> u64 {
    books.iter().map(Book::id).max().unwrap_or(0)
}
