//! Catalog management service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::book::{validate_isbn, Book, CreateBook},
    repository::Repository,
    services::metadata::MetadataSource,
};

/// Snapshot of catalog counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_books: usize,
    pub library_file: String,
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    metadata: Arc<dyn MetadataSource>,
}

impl CatalogService {
    pub fn new(repository: Repository, metadata: Arc<dyn MetadataSource>) -> Self {
        Self {
            repository,
            metadata,
        }
    }

    /// List all books in insertion order
    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    /// Get book by ISBN
    pub async fn get_book(&self, isbn: &str) -> AppResult<Book> {
        self.repository.books.get_by_isbn(isbn.trim()).await
    }

    /// Add a book from user-supplied fields
    pub async fn add_book(&self, data: CreateBook) -> AppResult<Book> {
        let book = data.validate()?;
        self.repository.books.insert(book).await
    }

    /// Add a book by looking its ISBN up in the metadata source.
    /// A known ISBN is rejected before any outbound request.
    pub async fn add_book_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        let isbn = isbn.trim();
        validate_isbn(isbn)?;

        if self.repository.books.isbn_exists(isbn).await {
            return Err(AppError::Conflict(format!(
                "Book with ISBN {} already exists",
                isbn
            )));
        }

        let metadata = self.metadata.fetch_by_isbn(isbn).await?;
        self.repository.books.insert(metadata.into()).await
    }

    /// Remove a book by ISBN, returning it
    pub async fn remove_book(&self, isbn: &str) -> AppResult<Book> {
        self.repository.books.delete(isbn.trim()).await
    }

    pub async fn stats(&self) -> CatalogStats {
        CatalogStats {
            total_books: self.repository.books.count().await,
            library_file: self.repository.books.path().display().to_string(),
        }
    }
}
