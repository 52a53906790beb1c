//! Pokeroster Core - creature catalog and per-user teams.
//!
//! This module provides:
//! - The creature data model
//! - A pluggable catalog client trait with a PokeAPI implementation
//! - A lock-guarded team store enforcing the six-member limit
//! - The roster service tying catalog listing and team toggling together

pub mod clients;
pub mod models;
pub mod roster_service;
pub mod team_store;

pub use clients::{CatalogClient, CatalogError, PokeApiClient, PokeApiConfig};
pub use models::{Creature, MAX_TEAM_SIZE};
pub use roster_service::RosterService;
pub use team_store::{TeamStore, ToggleOutcome};
