//! Book model and request payloads

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Catalog entry, keyed by ISBN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (ISBN: {})", self.title, self.author, self.isbn)
    }
}

/// Manual book creation request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    /// Book title
    pub title: String,
    /// Author name
    pub author: String,
    /// ISBN-10 or ISBN-13, hyphens allowed
    pub isbn: String,
}

impl CreateBook {
    /// Trim all fields and check that none is empty and the ISBN is well formed
    pub fn validate(self) -> AppResult<Book> {
        let title = self.title.trim();
        let author = self.author.trim();
        let isbn = self.isbn.trim();

        if title.is_empty() || author.is_empty() || isbn.is_empty() {
            return Err(AppError::Validation(
                "Title, author, and ISBN are all required".to_string(),
            ));
        }
        validate_isbn(isbn)?;

        Ok(Book::new(title, author, isbn))
    }
}

/// ISBN lookup request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct IsbnRequest {
    /// ISBN to look up in Open Library
    pub isbn: String,
}

/// Strip hyphens and spaces from an ISBN and upper-case the `X` check digit
pub fn normalize_isbn(isbn: &str) -> String {
    isbn.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Whether two ISBNs denote the same book once normalized
pub fn same_isbn(a: &str, b: &str) -> bool {
    normalize_isbn(a) == normalize_isbn(b)
}

/// Check the shape of an ISBN-10 (last char may be `X`) or ISBN-13.
/// Checksums are not verified.
pub fn validate_isbn(isbn: &str) -> AppResult<()> {
    if isbn.trim().is_empty() {
        return Err(AppError::Validation("ISBN is required".to_string()));
    }

    let normalized = normalize_isbn(isbn);
    let valid = match normalized.len() {
        10 => {
            let (body, last) = normalized.split_at(9);
            body.chars().all(|c| c.is_ascii_digit())
                && last.chars().all(|c| c.is_ascii_digit() || c == 'X')
        }
        13 => normalized.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Invalid ISBN '{}': expected 10 or 13 digits",
            isbn
        )))
    }
}
