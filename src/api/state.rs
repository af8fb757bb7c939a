use std::sync::Arc;

use crate::config::Config;
use crate::error::AppResult;
use crate::services::{CatalogProvider, TmdbProvider};

/// Shared application state
///
/// Read-only after startup; every submission is evaluated independently.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<dyn CatalogProvider>,
}

impl AppState {
    /// Creates state around an explicit catalog provider
    pub fn new(config: Config, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
        }
    }

    /// Creates state backed by the TMDB catalog
    pub fn from_config(config: Config) -> AppResult<Self> {
        let catalog = TmdbProvider::new(&config)?;
        Ok(Self::new(config, Arc::new(catalog)))
    }
}
