// Shared models for Pokeroster services
use serde::{Deserialize, Serialize};

/// Maximum number of creatures a single user's team may hold.
pub const MAX_TEAM_SIZE: usize = 6;

// ============================================================================
// Catalog Records
// ============================================================================

/// A creature record as listed by the catalog.
///
/// Records are immutable once fetched. Team membership compares records by
/// `id` only, see [`Creature::same_creature`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// Stable catalog identifier
    pub id: u32,
    pub name: String,
    /// Sprite reference (image URL)
    pub sprite: String,
    /// Type tags in slot order, never empty for catalog records
    pub types: Vec<String>,
}

impl Creature {
    pub fn new(id: u32, name: impl Into<String>, sprite: impl Into<String>, types: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sprite: sprite.into(),
            types,
        }
    }

    /// Identity comparison used for team membership.
    pub fn same_creature(&self, other: &Creature) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulbasaur() -> Creature {
        Creature::new(
            1,
            "Bulbasaur",
            "bulbasaur.png",
            vec!["grass".to_string(), "poison".to_string()],
        )
    }

    #[test]
    fn test_same_creature_ignores_other_fields() {
        let original = bulbasaur();
        let mut stale = bulbasaur();
        stale.name = "bulbasaur-old".to_string();
        stale.sprite = String::new();

        assert!(original.same_creature(&stale));
        assert_ne!(original, stale);
    }

    #[test]
    fn test_different_ids_are_different_creatures() {
        let a = bulbasaur();
        let mut b = bulbasaur();
        b.id = 2;
        assert!(!a.same_creature(&b));
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(bulbasaur()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Bulbasaur");
        assert_eq!(json["sprite"], "bulbasaur.png");
        assert_eq!(json["types"][0], "grass");
        assert_eq!(json["types"][1], "poison");
    }
}
