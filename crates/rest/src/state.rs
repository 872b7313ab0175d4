//! Application state for the Recollectable REST API.
//!
//! Handlers share the storage backend, the server configuration, and the
//! resource catalog. All three are behind `Arc`s and never mutated after
//! startup.

use std::sync::Arc;

use recollectable_persistence::core::ResourceStorage;

use crate::config::ServerConfig;
use crate::resources::{ResourceCatalog, ResourceKind};
use crate::responses::HypermediaLinkBuilder;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`ResourceStorage`])
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use recollectable_persistence::backends::memory::InMemoryBackend;
/// use recollectable_rest::{AppState, ServerConfig};
///
/// let state = AppState::new(Arc::new(InMemoryBackend::new()), ServerConfig::default());
/// assert_eq!(state.base_url(), "http://localhost:8080");
/// ```
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,

    /// Sort tables, field schemas, and paging limits.
    catalog: Arc<ResourceCatalog>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<S: ResourceStorage> AppState<S> {
    /// Creates a new AppState with the standard resource catalog.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self::with_catalog(storage, config, ResourceCatalog::standard())
    }

    /// Creates a new AppState with a custom catalog.
    pub fn with_catalog(storage: Arc<S>, config: ServerConfig, catalog: ResourceCatalog) -> Self {
        Self {
            storage,
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the resource catalog.
    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    /// Returns the base URL for links, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.config.link_base()
    }

    /// Link builder for the top-level collection of `kind`.
    pub fn links_for(&self, kind: ResourceKind) -> HypermediaLinkBuilder {
        self.links_at(&format!("/api/{}", kind.as_str()), kind)
    }

    /// Link builder for `kind` mounted at `collection_path`.
    pub fn links_at(&self, collection_path: &str, kind: ResourceKind) -> HypermediaLinkBuilder {
        HypermediaLinkBuilder::new(self.base_url(), collection_path, kind.rel_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recollectable_persistence::backends::memory::InMemoryBackend;

    fn state() -> AppState<InMemoryBackend> {
        AppState::new(Arc::new(InMemoryBackend::new()), ServerConfig::for_testing())
    }

    #[test]
    fn test_app_state_creation() {
        let state = state();
        assert_eq!(state.storage().backend_name(), "memory");
        assert!(state.catalog().descriptor(ResourceKind::Coins).is_ok());
    }

    #[test]
    fn test_links_for() {
        let links = state().links_for(ResourceKind::Coins);
        assert_eq!(links.collection_url(), "http://localhost/api/coins");
    }

    #[test]
    fn test_app_state_clone() {
        let state = state();
        let cloned = state.clone();
        assert_eq!(state.base_url(), cloned.base_url());
        assert!(Arc::ptr_eq(&state.catalog, &cloned.catalog));
    }
}
