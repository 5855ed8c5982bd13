//! Status effects - timed modifiers living on the game state.

use serde::{Deserialize, Serialize};

/// What a status effect modifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    /// Scales incoming damage by `1 - magnitude`.
    DamageReduction,
    /// Heals the player by `magnitude` each tick.
    Regeneration,
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusKind::DamageReduction => write!(f, "damage_reduction"),
            StatusKind::Regeneration => write!(f, "regeneration"),
        }
    }
}

/// A timed modifier applied to the game state.
///
/// Created by a card, then owned by `GameState::active_effects`.
/// `turns_remaining` starts at `duration` and is counted down by
/// `GameState::tick_status_effects`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusEffect {
    /// Identifier used for duplicate checks (e.g. `barkskin`).
    pub name: String,

    pub kind: StatusKind,

    /// Strength of the modifier. A fraction for reductions, HP for regeneration.
    pub magnitude: f64,

    /// Total lifetime in turns.
    pub duration: u32,

    pub turns_remaining: u32,

    /// Name of the card that applied it.
    pub source: String,

    pub emoji: String,
}

impl StatusEffect {
    /// Create a fresh status effect with `turns_remaining == duration`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: StatusKind,
        magnitude: f64,
        duration: u32,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            magnitude,
            duration,
            turns_remaining: duration,
            source: String::new(),
            emoji: String::new(),
        }
    }

    /// Set the source card name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Set the display emoji.
    #[must_use]
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.turns_remaining == 0
    }

    /// Count down one turn. Saturates at zero.
    pub fn tick(&mut self) {
        self.turns_remaining = self.turns_remaining.saturating_sub(1);
    }
}
