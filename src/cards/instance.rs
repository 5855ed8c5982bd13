//! Runtime card flags.
//!
//! A card's definition never changes during play, but whether it sits in
//! the player's hand and how long it is on cooldown does. The surrounding
//! session owns these transitions; cards only read them in `can_play`.

use serde::{Deserialize, Serialize};

/// Mutable per-card flags owned by the game session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardFlags {
    pub in_hand: bool,

    /// Turns until the card may be played again.
    pub cooldown: u32,
}

impl CardFlags {
    /// Flags for a card sitting in hand, ready to play.
    #[must_use]
    pub const fn ready() -> Self {
        Self {
            in_hand: true,
            cooldown: 0,
        }
    }

    /// Is the card off cooldown?
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.cooldown == 0
    }

    /// Count the cooldown down one turn. Saturates at zero.
    pub fn tick_cooldown(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }
}
