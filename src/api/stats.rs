//! Statistics endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Statistics response
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    /// Number of books in the catalog
    pub total_books: usize,
    /// Path of the JSON file backing the catalog
    pub library_file: String,
    /// Version of the API
    pub api_version: String,
}

/// Get library statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Library statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> Json<StatsResponse> {
    let stats = state.services.catalog.stats().await;
    Json(StatsResponse {
        total_books: stats.total_books,
        library_file: stats.library_file,
        api_version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
