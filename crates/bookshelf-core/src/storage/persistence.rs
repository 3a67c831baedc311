//! Catalog file persistence
//!
//! Handles loading and saving the catalog as a JSON array of book objects.
//! Uses atomic writes (write to temp file, then rename) so an interrupted
//! save leaves the previous file in place.
//!
//! File format: pretty-printed with 4-space indentation, non-ASCII text
//! written literally, array order = catalog order.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::models::Book;

const INDENT: &[u8] = b"    ";

/// Persistence layer for the catalog file
#[derive(Debug, Clone)]
pub struct JsonPersistence {
    path: PathBuf,
}

impl JsonPersistence {
    /// Create a persistence handler for the given catalog file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the catalog file exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load all books in file order
    ///
    /// Returns an empty list if the file doesn't exist.
    /// Returns an error if the file exists but can't be read or parsed.
    pub fn load(&self) -> CatalogResult<Vec<Book>> {
        if !self.exists() {
            debug!("No catalog at {:?}, starting empty", self.path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| CatalogError::from_io(e, self.path.clone(), false))?;

        let books: Vec<Book> =
            serde_json::from_str(&content).map_err(|e| CatalogError::InvalidFormat {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        debug!("Loaded {} book(s) from {:?}", books.len(), self.path);
        Ok(books)
    }

    /// Save all books, replacing the file contents
    pub fn save(&self, books: &[Book]) -> CatalogResult<()> {
        let bytes = to_pretty_json(books)?;

        atomic_write(&self.path, &bytes)
            .map_err(|e| CatalogError::from_io(e, self.path.clone(), true))?;

        debug!("Saved {} book(s) to {:?}", books.len(), self.path);
        Ok(())
    }
}

/// Serialize with 4-space indentation and a trailing newline
fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> CatalogResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
fn atomic_write(path: &Path, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(&temp_path, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookStatus, Year};
    use tempfile::TempDir;

    fn sample_books() -> Vec<Book> {
        vec![
            Book::new(1, "Dune", "Frank Herbert", "1965"),
            Book::new(2, "Мастер и Маргарита", "Михаил Булгаков", 1967i64),
        ]
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = JsonPersistence::new(temp_dir.path().join("library.json"));

        assert!(!persistence.exists());
        assert!(persistence.load().unwrap().is_empty());
        // Loading must not create the file
        assert!(!persistence.exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = JsonPersistence::new(temp_dir.path().join("library.json"));

        let books = sample_books();
        persistence.save(&books).unwrap();
        assert!(persistence.exists());

        let loaded = persistence.load().unwrap();
        assert_eq!(loaded, books);
        assert_eq!(loaded[1].year(), &Year::Number(1967));
    }

    #[test]
    fn test_file_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.json");
        let persistence = JsonPersistence::new(&path);

        persistence.save(&sample_books()).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.starts_with("[\n    {\n        \"id\": 1,"));
        assert!(content.contains("\"status\": \"available\""));
        // Non-ASCII is written literally
        assert!(content.contains("Мастер и Маргарита"));
        assert!(!content.contains("\\u"));
        assert!(content.ends_with("]\n"));
    }

    #[test]
    fn test_empty_catalog_saves_empty_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.json");
        JsonPersistence::new(&path).save(&[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[test]
    fn test_load_handwritten_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.json");
        fs::write(
            &path,
            r#"[{"id": 4, "title": "Emma", "author": "Jane Austen", "year": "1815", "status": "checked-out"},
                {"id": 2, "title": "Persuasion", "author": "Jane Austen", "year": 1817, "status": "available"}]"#,
        )
        .unwrap();

        let books = JsonPersistence::new(&path).load().unwrap();
        assert_eq!(books.len(), 2);
        // File order is kept, not id order
        assert_eq!(books[0].id(), 4);
        assert_eq!(books[0].status(), BookStatus::CheckedOut);
        assert_eq!(books[1].id(), 2);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonPersistence::new(&path).load().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidFormat { .. }));
    }

    #[test]
    fn test_record_without_status_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.json");
        fs::write(&path, r#"[{"id": 1, "title": "T", "author": "A", "year": "2000"}]"#).unwrap();

        let err = JsonPersistence::new(&path).load().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidFormat { .. }));
        assert!(err.to_string().contains("status"));
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let nested_path = temp_dir.path().join("a").join("b").join("library.json");

        atomic_write(&nested_path, b"[]").unwrap();

        assert!(nested_path.exists());
        assert_eq!(fs::read_to_string(&nested_path).unwrap(), "[]");
        assert!(!nested_path.with_extension("tmp").exists());
    }
}
