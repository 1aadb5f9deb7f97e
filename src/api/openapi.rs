//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Management API",
        version = "1.0.0",
        description = "Book catalog REST API with Open Library integration"
    ),
    servers(
        (url = "/", description = "Root"),
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::list_books,
        books::get_book,
        books::add_book_by_isbn,
        books::add_book_manually,
        books::remove_book,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::IsbnRequest,
            health::MessageResponse,
            stats::StatsResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog management"),
        (name = "stats", description = "Statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
