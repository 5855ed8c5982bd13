//! Targets for effects that land on a creature.
//!
//! Damage cards require a `Target`. Only the name is read: keyword bonuses
//! match against it, while health lives on the `GameState`.
//!
//! ```
//! use spell_cards::core::{GameState, Target};
//!
//! let state = GameState::new("Skeleton King", 120);
//! let target = Target::enemy_of(&state);
//! assert_eq!(target.name, "Skeleton King");
//! ```

use serde::{Deserialize, Serialize};

use super::GameState;

/// A creature selected as the target of a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
}

impl Target {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Target the current enemy.
    #[must_use]
    pub fn enemy_of(state: &GameState) -> Self {
        Self::new(state.enemy().name.clone())
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_display() {
        let target = Target::new("Zombie Lord");
        assert_eq!(format!("{}", target), "Zombie Lord");
    }

    #[test]
    fn test_enemy_target_tracks_state() {
        let state = GameState::new("Forest Troll", 60);
        assert_eq!(Target::enemy_of(&state), Target::new("Forest Troll"));
    }
}
