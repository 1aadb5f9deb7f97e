//! Book metadata lookup against Open Library
//!
//! A lookup is two requests: `/isbn/{isbn}.json` for the edition, then the
//! first author reference (`/authors/OL...A.json`) for the author name. The
//! author request never fails the lookup; the name falls back to
//! [`UNKNOWN_AUTHOR`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    config::MetadataConfig,
    error::{AppError, AppResult},
    models::book::{normalize_isbn, Book},
};

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Title/author pair resolved for an ISBN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookMetadata {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl From<BookMetadata> for Book {
    fn from(meta: BookMetadata) -> Self {
        Book::new(meta.title, meta.author, meta.isbn)
    }
}

/// Source of book metadata keyed by ISBN
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn fetch_by_isbn(&self, isbn: &str) -> AppResult<BookMetadata>;
}

#[derive(Deserialize)]
struct EditionResponse {
    title: Option<String>,
    #[serde(default)]
    authors: Vec<AuthorRef>,
}

#[derive(Deserialize)]
struct AuthorRef {
    key: String,
}

#[derive(Deserialize)]
struct AuthorResponse {
    name: Option<String>,
}

#[derive(Clone)]
pub struct OpenLibraryClient {
    client: Client,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new(config: &MetadataConfig) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_author(&self, key: &str) -> Option<String> {
        let url = format!("{}{}.json", self.base_url, key);
        tracing::debug!("Fetching author {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Author lookup {} failed: {}", key, e);
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::warn!("Author lookup {} returned {}", key, response.status());
            return None;
        }

        match response.json::<AuthorResponse>().await {
            Ok(author) => author.name.filter(|n| !n.trim().is_empty()),
            Err(e) => {
                tracing::warn!("Author lookup {} returned an unexpected body: {}", key, e);
                None
            }
        }
    }
}

#[async_trait]
impl MetadataSource for OpenLibraryClient {
    async fn fetch_by_isbn(&self, isbn: &str) -> AppResult<BookMetadata> {
        let url = format!("{}/isbn/{}.json", self.base_url, normalize_isbn(isbn));
        tracing::info!("Looking up ISBN {} in Open Library", isbn);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Request to Open Library failed: {}", e)))?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => {
                return Err(AppError::NotFound(format!(
                    "Book with ISBN {} not found in Open Library",
                    isbn
                )))
            }
            status => {
                return Err(AppError::Network(format!(
                    "Open Library returned status {}",
                    status
                )))
            }
        }

        let edition: EditionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("Invalid Open Library response: {}", e)))?;

        let title = edition
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AppError::Parse(format!("Open Library record for ISBN {} has no title", isbn))
            })?;

        let author = match edition.authors.first() {
            Some(author_ref) => self.fetch_author(&author_ref.key).await,
            None => None,
        }
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

        tracing::debug!("Resolved ISBN {} to '{}' by {}", isbn, title, author);

        Ok(BookMetadata {
            title,
            author,
            isbn: isbn.to_string(),
        })
    }
}
