//! Library Catalog Server
//!
//! REST JSON API over the book catalog.

use std::net::SocketAddr;
use std::sync::Arc;

use library_catalog::{
    api, config::AppConfig, logging, repository::Repository, services::Services, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    logging::init(&config.logging, std::io::stdout);

    tracing::info!("Starting Library Catalog v{}", env!("CARGO_PKG_VERSION"));

    // Open the catalog file; unreadable storage is fatal at startup
    let repository = Repository::open(&config.catalog.path).await?;
    let services = Services::new(repository, &config.metadata)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let state = AppState {
        services: Arc::new(services),
    };

    let app = api::router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
