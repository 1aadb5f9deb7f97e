//! Books repository backed by a single JSON file
//!
//! The whole collection lives in memory and is written back to disk in full
//! after every mutation. A single async mutex serializes writers, so the file
//! always reflects the last successful mutation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    models::book::{same_isbn, Book},
};

#[derive(Clone)]
pub struct BooksRepository {
    path: Arc<PathBuf>,
    books: Arc<Mutex<Vec<Book>>>,
}

impl BooksRepository {
    /// Open the catalog file, starting empty when it does not exist or holds invalid JSON
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let books = load(&path).await?;
        tracing::info!("Loaded {} book(s) from {}", books.len(), path.display());

        Ok(Self {
            path: Arc::new(path),
            books: Arc::new(Mutex::new(books)),
        })
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All books in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.books.lock().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.books.lock().await.len()
    }

    /// Get book by ISBN
    pub async fn get_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        self.books
            .lock()
            .await
            .iter()
            .find(|b| same_isbn(&b.isbn, isbn))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))
    }

    pub async fn isbn_exists(&self, isbn: &str) -> bool {
        self.books.lock().await.iter().any(|b| same_isbn(&b.isbn, isbn))
    }

    /// Append a book and rewrite the file. Fails on duplicate ISBN.
    pub async fn insert(&self, book: Book) -> AppResult<Book> {
        let mut books = self.books.lock().await;

        if books.iter().any(|b| same_isbn(&b.isbn, &book.isbn)) {
            return Err(AppError::Conflict(format!(
                "Book with ISBN {} already exists",
                book.isbn
            )));
        }

        books.push(book.clone());
        if let Err(e) = save(&self.path, &books).await {
            books.pop();
            return Err(e);
        }

        tracing::info!("Added: {}", book);
        Ok(book)
    }

    /// Remove a book by ISBN and rewrite the file
    pub async fn delete(&self, isbn: &str) -> AppResult<Book> {
        let mut books = self.books.lock().await;

        let index = books
            .iter()
            .position(|b| same_isbn(&b.isbn, isbn))
            .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))?;

        let removed = books.remove(index);
        if let Err(e) = save(&self.path, &books).await {
            books.insert(index, removed);
            return Err(e);
        }

        tracing::info!("Removed book with ISBN: {}", isbn);
        Ok(removed)
    }
}

async fn load(path: &Path) -> AppResult<Vec<Book>> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("Catalog file {} does not exist yet", path.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(AppError::Persistence(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str(&content) {
        Ok(books) => Ok(books),
        Err(e) => {
            tracing::warn!(
                "Ignoring unreadable catalog file {}: {}",
                path.display(),
                e
            );
            Ok(Vec::new())
        }
    }
}

async fn save(path: &Path, books: &[Book]) -> AppResult<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    books
        .serialize(&mut serializer)
        .map_err(|e| AppError::Internal(format!("Failed to serialize catalog: {}", e)))?;

    tokio::fs::write(path, buf).await.map_err(|e| {
        AppError::Persistence(format!("Failed to write {}: {}", path.display(), e))
    })?;

    tracing::debug!("Wrote {} book(s) to {}", books.len(), path.display());
    Ok(())
}
