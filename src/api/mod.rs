//! API handlers for the catalog REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
pub mod stats;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes.
/// Endpoints are served at the root and mirrored under `/api/v1`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let endpoints = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Statistics
        .route("/stats", get(stats::get_stats))
        // Books
        .route("/books", get(books::list_books).post(books::add_book_by_isbn))
        .route("/books/manual", post(books::add_book_manually))
        .route(
            "/books/:isbn",
            get(books::get_book).delete(books::remove_book),
        )
        .with_state(state);

    Router::new()
        .route("/", get(health::root))
        .nest("/api/v1", endpoints.clone())
        .merge(endpoints)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
