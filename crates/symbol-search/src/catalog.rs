//! Seam to the symbol catalog service.
//!
//! The catalog decides what matches a [`SearchRequest`]; this crate only
//! drives it and pages through what comes back.

use crate::models::ResultSet;
use crate::query::SearchRequest;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("symbol catalog is not loaded")]
    NotLoaded,
    #[error("failed to load symbol catalog: {0}")]
    Load(String),
    #[error("search execution failed: {0}")]
    Execution(String),
    #[error("search transport failed: {0}")]
    Transport(String),
    /// The task running the search panicked or was cancelled
    #[error("search task aborted: {0}")]
    Aborted(String),
}

#[async_trait]
pub trait SymbolCatalog: Send + Sync + 'static {
    /// Make the catalog ready to answer searches. Called once before the
    /// first search; catalogs that need no preparation keep the default.
    async fn load(&self) -> Result<(), CatalogError> {
        Ok(())
    }

    /// Every entry matching `request`, in catalog order.
    async fn search(&self, request: &SearchRequest) -> Result<ResultSet, CatalogError>;
}
