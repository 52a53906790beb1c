//! roster_service_rust - HTTP front for the creature catalog and user teams
//!
//! This module exposes the router and configuration for testing purposes.

pub mod api;
pub mod config;

pub use api::{router, ToggleResponse};
pub use config::RosterServiceConfig;
