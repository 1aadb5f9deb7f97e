//! Repository layer for catalog storage

pub mod books;

use std::path::PathBuf;

use crate::error::AppResult;

/// Main repository struct holding the catalog store
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Open the repository on the given catalog file
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        Ok(Self {
            books: books::BooksRepository::open(path).await?,
        })
    }
}
