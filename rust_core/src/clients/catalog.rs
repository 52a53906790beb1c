//! Catalog Client Trait
//!
//! Defines the interface for sources of creature catalog data.
//! The production implementation is [`PokeApiClient`](super::PokeApiClient).

use crate::models::Creature;
use async_trait::async_trait;
use thiserror::Error;

/// Failure raised by a catalog source.
///
/// Covers both an unreachable source and a response that could not be
/// decoded into creature records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

impl CatalogError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}

/// Source of the creature catalog
///
/// Implementations must be Send + Sync for use in async contexts.
/// Callers get no retry or fallback; errors propagate as returned.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch every creature currently offered by the catalog
    async fn list_creatures(&self) -> Result<Vec<Creature>, CatalogError>;

    /// Source name for logging and debugging
    fn source_name(&self) -> &str;
}
