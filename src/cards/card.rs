//! The card contract.
//!
//! Cards implement `Card` to define what happens when they are played:
//! - Whether they may be played right now (`can_play`)
//! - How they mutate the game state (`execute_effect`)
//! - How they present themselves (`display_name`, `stats_string`)

use tracing::trace;

use super::definition::CardDefinition;
use super::instance::CardFlags;
use crate::core::{GameState, RandomSource, Target};
use crate::effects::ExecutionResult;

/// A playable spell card.
///
/// ## Implementation Notes
///
/// - `execute_effect` never panics and never raises: missing inputs come
///   back as a failed `ExecutionResult` with the state untouched
/// - Every random roll goes through the supplied `RandomSource`
/// - The definition is fixed at construction; only `flags` may change
pub trait Card {
    /// Static identity and effect descriptor.
    fn definition(&self) -> &CardDefinition;

    /// Runtime flags.
    fn flags(&self) -> &CardFlags;

    fn flags_mut(&mut self) -> &mut CardFlags;

    /// Resolve the card against the game state.
    ///
    /// `state` is optional so a caller without a session gets a soft
    /// `NoGameState` failure rather than a panic. `target` is required by
    /// cards whose effect lands on an enemy.
    fn execute_effect(
        &mut self,
        state: Option<&mut GameState>,
        target: Option<&Target>,
        rng: &mut dyn RandomSource,
    ) -> ExecutionResult;

    /// Can this card be played right now?
    ///
    /// Default: enough mana, card in hand, no cooldown.
    fn can_play(&self, state: &GameState) -> bool {
        meets_play_requirements(self, state)
    }

    /// Name with its emoji, e.g. `"☀️ Solar Beam"`.
    fn display_name(&self) -> String {
        let def = self.definition();
        format!("{} {}", def.emoji, def.name)
    }

    /// One-line summary of the card's numbers.
    fn stats_string(&self) -> String {
        format!("Cost: {}", self.definition().cost)
    }

    // === Convenience Methods ===

    fn name(&self) -> &str {
        &self.definition().name
    }

    fn cost(&self) -> u32 {
        self.definition().cost
    }

    fn description(&self) -> &str {
        &self.definition().effect.description
    }
}

/// The base playability gate: enough mana, card in hand, no cooldown.
///
/// Cards that override `can_play` call this before their own checks.
pub fn meets_play_requirements<C: Card + ?Sized>(card: &C, state: &GameState) -> bool {
    let def = card.definition();
    let flags = card.flags();

    let playable = state.player_mana() >= def.cost && flags.in_hand && flags.is_ready();
    if !playable {
        trace!(
            card = %def.name,
            mana = state.player_mana(),
            cost = def.cost,
            in_hand = flags.in_hand,
            cooldown = flags.cooldown,
            "card not playable"
        );
    }
    playable
}

impl std::fmt::Debug for dyn Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Card")
            .field("definition", self.definition())
            .field("flags", self.flags())
            .finish()
    }
}
