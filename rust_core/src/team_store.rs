//! Per-user team storage.
//!
//! This module provides:
//! - User-scoped teams of at most [`MAX_TEAM_SIZE`] creatures
//! - Toggle membership by creature id
//! - Lock-guarded access so the store can be shared across request handlers

use crate::models::{Creature, MAX_TEAM_SIZE};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, info};

/// Outcome of a toggle against one user's team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Team already full and the creature was not a member
    Rejected,
}

impl ToggleOutcome {
    pub fn succeeded(&self) -> bool {
        !matches!(self, ToggleOutcome::Rejected)
    }
}

/// In-memory team store.
/// Maps user id to an ordered team, insertion order preserved.
///
/// A user with no entry has an empty team. Reads never create entries.
#[derive(Debug, Default)]
pub struct TeamStore {
    /// "user_id" -> team
    teams: RwLock<HashMap<String, Vec<Creature>>>,
}

impl TeamStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            teams: RwLock::new(HashMap::new()),
        }
    }

    /// Snapshot of a user's team, empty if the user has none.
    pub fn team(&self, user_id: &str) -> Vec<Creature> {
        self.teams.read().get(user_id).cloned().unwrap_or_default()
    }

    /// Number of creatures on a user's team.
    pub fn team_size(&self, user_id: &str) -> usize {
        self.teams.read().get(user_id).map_or(0, |team| team.len())
    }

    /// Check whether a creature id is on a user's team.
    pub fn contains(&self, user_id: &str, creature_id: u32) -> bool {
        self.teams
            .read()
            .get(user_id)
            .is_some_and(|team| team.iter().any(|c| c.id == creature_id))
    }

    /// Reset a user's team to empty.
    pub fn clear(&self, user_id: &str) {
        if let Some(previous) = self.teams.write().remove(user_id) {
            debug!(user_id, cleared = previous.len(), "Cleared team");
        }
    }

    /// Add the creature if absent and there is room, remove it if present.
    ///
    /// The whole read-modify-write runs under one write lock, so concurrent
    /// toggles on the same user cannot exceed the capacity.
    pub fn toggle(&self, user_id: &str, creature: Creature) -> ToggleOutcome {
        let mut teams = self.teams.write();
        Self::toggle_locked(&mut teams, user_id, creature)
    }

    /// Toggle and snapshot the resulting team under the same write lock.
    ///
    /// The returned team is exactly the state the outcome refers to.
    pub fn toggle_with_team(&self, user_id: &str, creature: Creature) -> (ToggleOutcome, Vec<Creature>) {
        let mut teams = self.teams.write();
        let outcome = Self::toggle_locked(&mut teams, user_id, creature);
        let team = teams.get(user_id).cloned().unwrap_or_default();
        (outcome, team)
    }

    /// Toggle state machine (internal, with lock held)
    fn toggle_locked(
        teams: &mut HashMap<String, Vec<Creature>>,
        user_id: &str,
        creature: Creature,
    ) -> ToggleOutcome {
        if let Some(team) = teams.get_mut(user_id) {
            if let Some(pos) = team.iter().position(|c| c.same_creature(&creature)) {
                team.remove(pos);
                if team.is_empty() {
                    teams.remove(user_id);
                }
                debug!(user_id, creature_id = creature.id, "Removed creature from team");
                return ToggleOutcome::Removed;
            }

            if team.len() >= MAX_TEAM_SIZE {
                info!(
                    user_id,
                    creature_id = creature.id,
                    "Team full ({} members), rejecting creature",
                    MAX_TEAM_SIZE
                );
                return ToggleOutcome::Rejected;
            }
        }

        let creature_id = creature.id;
        teams.entry(user_id.to_string()).or_default().push(creature);
        debug!(user_id, creature_id, "Added creature to team");
        ToggleOutcome::Added
    }

    /// Users that currently have a non-empty team, sorted.
    pub fn users(&self) -> Vec<String> {
        let mut users: Vec<String> = self.teams.read().keys().cloned().collect();
        users.sort();
        users
    }

    /// Get number of users with a non-empty team.
    pub fn len(&self) -> usize {
        self.teams.read().len()
    }

    /// Check if no user has a team.
    pub fn is_empty(&self) -> bool {
        self.teams.read().is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn creature(id: u32) -> Creature {
        Creature::new(
            id,
            format!("Pokemon{}", id),
            format!("sprite{}.png", id),
            vec!["type1".to_string()],
        )
    }

    fn ids(team: &[Creature]) -> Vec<u32> {
        team.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_unknown_user_has_empty_team() {
        let store = TeamStore::new();
        assert!(store.team("nobody").is_empty());
        assert_eq!(store.team_size("nobody"), 0);
        assert!(!store.contains("nobody", 1));
        // Reads must not materialize entries
        assert!(store.is_empty());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let store = TeamStore::new();
        assert_eq!(store.toggle("ash", creature(1)), ToggleOutcome::Added);
        assert!(store.contains("ash", 1));
        assert_eq!(store.toggle("ash", creature(1)), ToggleOutcome::Removed);
        assert!(!store.contains("ash", 1));
        assert!(store.team("ash").is_empty());
    }

    #[test]
    fn test_removal_preserves_order() {
        let store = TeamStore::new();
        for id in 1..=5 {
            store.toggle("ash", creature(id));
        }
        store.toggle("ash", creature(3));
        assert_eq!(ids(&store.team("ash")), vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_full_team_rejects_new_creature() {
        let store = TeamStore::new();
        for id in 1..=6 {
            assert!(store.toggle("ash", creature(id)).succeeded());
        }
        assert_eq!(store.toggle("ash", creature(7)), ToggleOutcome::Rejected);
        assert!(!ToggleOutcome::Rejected.succeeded());
        assert_eq!(ids(&store.team("ash")), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_full_team_still_allows_removal() {
        let store = TeamStore::new();
        for id in 1..=6 {
            store.toggle("ash", creature(id));
        }
        assert_eq!(store.toggle("ash", creature(6)), ToggleOutcome::Removed);
        assert_eq!(store.team_size("ash"), 5);
    }

    #[test]
    fn test_membership_is_by_id() {
        let store = TeamStore::new();
        store.toggle("ash", creature(25));

        let mut renamed = creature(25);
        renamed.name = "Sparky".to_string();
        assert_eq!(store.toggle("ash", renamed), ToggleOutcome::Removed);
        assert!(store.team("ash").is_empty());
    }

    #[test]
    fn test_users_are_independent() {
        let store = TeamStore::new();
        store.toggle("ash", creature(1));
        store.toggle("misty", creature(2));
        store.clear("ash");

        assert!(store.team("ash").is_empty());
        assert_eq!(ids(&store.team("misty")), vec![2]);
        assert_eq!(store.users(), vec!["misty".to_string()]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = TeamStore::new();
        store.clear("ash");
        store.toggle("ash", creature(1));
        store.clear("ash");
        store.clear("ash");
        assert!(store.team("ash").is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_toggles_respect_capacity() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(TeamStore::new());
        let handles: Vec<_> = (1..=32)
            .map(|id| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.toggle("ash", creature(id)))
            })
            .collect();

        let added = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|outcome| *outcome == ToggleOutcome::Added)
            .count();

        assert_eq!(added, MAX_TEAM_SIZE);
        assert_eq!(store.team_size("ash"), MAX_TEAM_SIZE);
    }

    #[test]
    fn test_toggle_with_team_returns_post_toggle_state() {
        let store = TeamStore::new();
        store.toggle("ash", creature(1));

        let (outcome, team) = store.toggle_with_team("ash", creature(2));
        assert_eq!(outcome, ToggleOutcome::Added);
        assert_eq!(ids(&team), vec![1, 2]);

        let (outcome, team) = store.toggle_with_team("ash", creature(1));
        assert_eq!(outcome, ToggleOutcome::Removed);
        assert_eq!(ids(&team), vec![2]);

        let (outcome, team) = store.toggle_with_team("ash", creature(2));
        assert_eq!(outcome, ToggleOutcome::Removed);
        assert!(team.is_empty());
    }

    #[test]
    fn test_concurrent_toggle_snapshots_match_outcome() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(TeamStore::new());
        let handles: Vec<_> = (1..=32)
            .map(|id| {
                let store = Arc::clone(&store);
                thread::spawn(move || (id, store.toggle_with_team("ash", creature(id))))
            })
            .collect();

        for handle in handles {
            let (id, (outcome, team)) = handle.join().unwrap();
            assert!(team.len() <= MAX_TEAM_SIZE);
            match outcome {
                ToggleOutcome::Added => assert!(team.iter().any(|c| c.id == id)),
                ToggleOutcome::Rejected => {
                    assert_eq!(team.len(), MAX_TEAM_SIZE);
                    assert!(team.iter().all(|c| c.id != id));
                }
                ToggleOutcome::Removed => panic!("creature {} was never on the team", id),
            }
        }
    }
}
