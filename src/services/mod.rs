//! Business logic services

pub mod catalog;
pub mod metadata;

use std::sync::Arc;

use crate::{config::MetadataConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services, using Open Library for metadata lookups
    pub fn new(repository: Repository, metadata_config: &MetadataConfig) -> AppResult<Self> {
        let metadata = metadata::OpenLibraryClient::new(metadata_config)?;
        Ok(Self::with_metadata(repository, Arc::new(metadata)))
    }

    /// Create all services with a custom metadata source
    pub fn with_metadata(
        repository: Repository,
        metadata: Arc<dyn metadata::MetadataSource>,
    ) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository, metadata),
        }
    }
}
