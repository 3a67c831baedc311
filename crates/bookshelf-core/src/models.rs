//! Data models for Bookshelf
//!
//! Defines the catalog record (`Book`), its lending status and the
//! publication year. Field names map 1:1 onto the persisted JSON objects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Lending status of a book
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum BookStatus {
    /// On the shelf
    #[default]
    Available,
    /// Lent out
    CheckedOut,
}

impl BookStatus {
    /// All valid statuses, in display order
    pub const ALL: [BookStatus; 2] = [BookStatus::Available, BookStatus::CheckedOut];

    /// The persisted/textual name of this status
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::CheckedOut => "checked-out",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = CatalogError;

    /// Parse user input. Only the exact status names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidStatus(s.to_string()))
    }
}

/// Publication year, stored exactly as given
///
/// Older catalogs hold years as JSON numbers, newer ones as strings.
/// Both are kept as-is so a load/save cycle doesn't rewrite the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => f.write_str(s),
        }
    }
}

impl From<String> for Year {
    fn from(s: String) -> Self {
        Year::Text(s)
    }
}

impl From<&str> for Year {
    fn from(s: &str) -> Self {
        Year::Text(s.to_string())
    }
}

impl From<i64> for Year {
    fn from(n: i64) -> Self {
        Year::Number(n)
    }
}

/// A single catalog entry
///
/// Everything except `status` is fixed at creation. The status can only be
/// changed through [`crate::Catalog::change_status`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    id: u64,
    title: String,
    author: String,
    year: Year,
    status: BookStatus,
}

impl Book {
    /// Create a new, available book
    pub fn new(
        id: u64,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<Year>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year: year.into(),
            status: BookStatus::Available,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> &Year {
        &self.year
    }

    pub fn status(&self) -> BookStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: BookStatus) {
        self.status = status;
    }

    /// Check whether this book matches a search term
    ///
    /// Title and author match on a case-insensitive substring, the year only
    /// on exact equality with its textual form.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.author.to_lowercase().contains(&needle)
            || self.year.to_string() == term
    }
}
