//! Shared fixtures

use std::sync::Arc;

use async_trait::async_trait;
use library_catalog::{
    error::{AppError, AppResult},
    repository::Repository,
    services::{
        metadata::{BookMetadata, MetadataSource, UNKNOWN_AUTHOR},
        Services,
    },
};
use tempfile::TempDir;

/// Metadata source answering from a fixed table
pub struct StubMetadata;

#[async_trait]
impl MetadataSource for StubMetadata {
    async fn fetch_by_isbn(&self, isbn: &str) -> AppResult<BookMetadata> {
        let (title, author) = match isbn {
            "9780451524935" => ("Nineteen Eighty-Four", "George Orwell"),
            "978-0-7432-7356-5" => ("The Great Gatsby", "F. Scott Fitzgerald"),
            "9781234567890" => ("Book Without Authors", UNKNOWN_AUTHOR),
            "9789999999999" => {
                return Err(AppError::Network("connection refused".to_string()))
            }
            _ => {
                return Err(AppError::NotFound(format!(
                    "Book with ISBN {} not found in Open Library",
                    isbn
                )))
            }
        };
        Ok(BookMetadata {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
        })
    }
}

/// Services over a fresh catalog file in a temporary directory
pub async fn services(dir: &TempDir) -> Services {
    let repository = Repository::open(dir.path().join("library.json"))
        .await
        .expect("Failed to open catalog");
    Services::with_metadata(repository, Arc::new(StubMetadata))
}
