//! Data models for the library catalog

pub mod book;

pub use book::{Book, CreateBook, IsbnRequest};
