//! Health check endpoints

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Plain message response
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Welcome message served at the site root
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to Library Management API! Visit /swagger-ui for interactive documentation."
            .to_string(),
    })
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = MessageResponse)
    )
)]
pub async fn health_check() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "API is healthy".to_string(),
    })
}
