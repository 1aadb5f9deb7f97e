//! Interactive console menu over the book catalog.

use library_catalog::{
    cli::Menu, config::AppConfig, logging, repository::Repository, services::Services,
};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Logs go to stderr so they never interleave with the menu
    logging::init(&config.logging, std::io::stderr);

    let repository = Repository::open(&config.catalog.path).await?;
    let services = Services::new(repository, &config.metadata)?;

    let mut menu = Menu::new(
        services.catalog,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    menu.run().await?;

    Ok(())
}
