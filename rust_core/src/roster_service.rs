//! Roster service: catalog pass-through plus per-user team management.

use crate::clients::{CatalogClient, CatalogError};
use crate::models::Creature;
use crate::team_store::TeamStore;
use std::sync::Arc;
use tracing::debug;

/// Entry point for catalog and team operations.
///
/// Catalog listings are always fetched fresh from the injected
/// [`CatalogClient`]; team state lives in the injected [`TeamStore`].
#[derive(Clone)]
pub struct RosterService {
    catalog: Arc<dyn CatalogClient>,
    teams: Arc<TeamStore>,
}

impl std::fmt::Debug for RosterService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterService")
            .field("catalog", &self.catalog.source_name())
            .field("users", &self.teams.len())
            .finish()
    }
}

impl RosterService {
    pub fn new(catalog: Arc<dyn CatalogClient>, teams: Arc<TeamStore>) -> Self {
        Self { catalog, teams }
    }

    /// Create with a fresh, empty team store
    pub fn with_catalog(catalog: Arc<dyn CatalogClient>) -> Self {
        Self::new(catalog, Arc::new(TeamStore::new()))
    }

    /// List the full catalog, unmodified.
    pub async fn list_catalog(&self) -> Result<Vec<Creature>, CatalogError> {
        debug!(source = self.catalog.source_name(), "Listing catalog");
        self.catalog.list_creatures().await
    }

    /// Current team for a user, empty if the user has none.
    pub fn get_roster(&self, user_id: &str) -> Vec<Creature> {
        self.teams.team(user_id)
    }

    /// Reset a user's team to empty.
    pub fn clear_roster(&self, user_id: &str) {
        self.teams.clear(user_id);
    }

    /// Add the creature if absent and the team has room, remove it if present.
    ///
    /// Returns `false` only when the team is full and the creature is not on it.
    pub fn toggle_membership(&self, user_id: &str, creature: Creature) -> bool {
        self.teams.toggle(user_id, creature).succeeded()
    }

    /// Toggle and return the team as it stands right after this toggle.
    pub fn toggle_membership_with_roster(&self, user_id: &str, creature: Creature) -> (bool, Vec<Creature>) {
        let (outcome, team) = self.teams.toggle_with_team(user_id, creature);
        (outcome.succeeded(), team)
    }
}
