//! Library Catalog
//!
//! A book catalog kept in a JSON file, with Open Library lookups by ISBN,
//! served as a REST JSON API or driven from an interactive console menu.

use std::sync::Arc;

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
