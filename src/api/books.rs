//! Book (catalog) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, IsbnRequest},
};

use super::health::MessageResponse;

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in the catalog", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<Book>> {
    Json(state.services.catalog.list_books().await)
}

/// Get book by ISBN
#[utoipa::path(
    get,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(&isbn).await?;
    Ok(Json(book))
}

/// Add a book by ISBN, fetching title and author from Open Library
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = IsbnRequest,
    responses(
        (status = 201, description = "Book added", body = Book),
        (status = 400, description = "Missing or malformed ISBN", body = crate::error::ErrorResponse),
        (status = 404, description = "ISBN unknown to Open Library", body = crate::error::ErrorResponse),
        (status = 409, description = "Book already exists", body = crate::error::ErrorResponse),
        (status = 502, description = "Open Library unreachable or unexpected response", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book_by_isbn(
    State(state): State<crate::AppState>,
    Json(request): Json<IsbnRequest>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.catalog.add_book_by_isbn(&request.isbn).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Add a book manually, without lookup
#[utoipa::path(
    post,
    path = "/books/manual",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book added", body = Book),
        (status = 400, description = "Missing fields or malformed ISBN", body = crate::error::ErrorResponse),
        (status = 409, description = "Book already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book_manually(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.catalog.add_book(data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Remove a book by ISBN
#[utoipa::path(
    delete,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book removed", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn remove_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let book = state.services.catalog.remove_book(&isbn).await?;
    Ok(Json(MessageResponse {
        message: format!(
            "Book '{}' by {} (ISBN: {}) has been removed",
            book.title, book.author, book.isbn
        ),
    }))
}
