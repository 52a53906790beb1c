//! PokeAPI Client
//!
//! Fetches the creature catalog from the public PokeAPI
//! (https://pokeapi.co). One listing request names the creatures, then one
//! detail request per creature supplies id, sprite and types.

use super::catalog::{CatalogClient, CatalogError};
use crate::models::Creature;
use async_trait::async_trait;
use futures_util::stream::{self, StreamExt, TryStreamExt};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Detail requests kept in flight at once
const DETAIL_CONCURRENCY: usize = 16;

/// Connection settings for [`PokeApiClient`]
#[derive(Debug, Clone)]
pub struct PokeApiConfig {
    /// API root, without trailing slash
    pub base_url: String,
    /// Number of creatures requested from the listing endpoint
    pub limit: u32,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            limit: 151,
            timeout: Duration::from_secs(10),
        }
    }
}

/// PokeAPI-backed catalog client
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
    config: PokeApiConfig,
}

impl std::fmt::Debug for PokeApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokeApiClient")
            .field("base_url", &self.config.base_url)
            .field("limit", &self.config.limit)
            .finish()
    }
}

// ============================================================================
// Wire format
// ============================================================================

/// `GET /pokemon?limit=N`
#[derive(Debug, Deserialize)]
struct PokemonListResponse {
    results: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

/// `GET /pokemon/{id}`
#[derive(Debug, Deserialize)]
struct PokemonDetail {
    id: u32,
    name: String,
    #[serde(default)]
    sprites: Sprites,
    types: Vec<TypeSlot>,
}

#[derive(Debug, Default, Deserialize)]
struct Sprites {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    slot: u8,
    #[serde(rename = "type")]
    kind: TypeName,
}

#[derive(Debug, Deserialize)]
struct TypeName {
    name: String,
}

impl PokemonDetail {
    fn into_creature(mut self) -> Result<Creature, CatalogError> {
        if self.types.is_empty() {
            return Err(CatalogError::unavailable(format!(
                "pokemon {} ({}) has no types",
                self.id, self.name
            )));
        }

        self.types.sort_by_key(|t| t.slot);
        let types = self.types.into_iter().map(|t| t.kind.name).collect();

        Ok(Creature {
            id: self.id,
            name: self.name,
            sprite: self.sprites.front_default.unwrap_or_default(),
            types,
        })
    }
}

// ============================================================================
// Client
// ============================================================================

impl PokeApiClient {
    pub fn new() -> Self {
        Self::with_config(PokeApiConfig::default())
    }

    pub fn with_config(mut config: PokeApiConfig) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self {
            client: Client::builder()
                .timeout(config.timeout)
                .user_agent("Pokeroster/1.0")
                .build()
                .unwrap_or_else(|_| Client::new()),
            config,
        }
    }

    fn listing_url(&self) -> String {
        format!("{}/pokemon?limit={}", self.config.base_url, self.config.limit)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let resp = self.client.get(url).send().await?.error_for_status()?;
        let body = resp.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| CatalogError::unavailable(format!("malformed response from {}: {}", url, e)))
    }

    async fn fetch_catalog(&self) -> Result<Vec<Creature>, CatalogError> {
        let listing: PokemonListResponse = self.get_json(&self.listing_url()).await?;
        debug!("PokeAPI listed {} pokemon", listing.results.len());

        let details: Vec<PokemonDetail> = stream::iter(listing.results)
            .map(|entry| async move {
                debug!(name = %entry.name, "Fetching pokemon detail");
                self.get_json::<PokemonDetail>(&entry.url).await
            })
            .buffered(DETAIL_CONCURRENCY)
            .try_collect()
            .await?;

        details.into_iter().map(PokemonDetail::into_creature).collect()
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogClient for PokeApiClient {
    async fn list_creatures(&self) -> Result<Vec<Creature>, CatalogError> {
        let started = Instant::now();
        match self.fetch_catalog().await {
            Ok(creatures) => {
                info!(
                    count = creatures.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Fetched catalog from PokeAPI"
                );
                Ok(creatures)
            }
            Err(e) => {
                warn!("PokeAPI catalog fetch failed: {}", e);
                Err(e)
            }
        }
    }

    fn source_name(&self) -> &str {
        "pokeapi"
    }
}
