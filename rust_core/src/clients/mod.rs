pub mod catalog;
pub mod pokeapi;

// Re-export commonly used types
pub use catalog::{CatalogClient, CatalogError};
pub use pokeapi::{PokeApiClient, PokeApiConfig};
