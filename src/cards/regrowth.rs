//! Regrowth - an instant heal followed by regeneration.

use tracing::{debug, warn};

use super::card::Card;
use super::definition::{CardDefinition, CardId};
use super::instance::CardFlags;
use crate::core::{GameState, RandomSource, RegrowthConfig, Target};
use crate::effects::{
    EffectDescriptor, EffectKind, EffectTarget, ExecutionResult, StatusEffect, StatusKind,
};
use crate::error::PlayFailure;

/// Registry id of Regrowth.
pub const REGROWTH: CardId = CardId::new(3);

/// Name of the regeneration status Regrowth applies.
pub const REGROWTH_STATUS: &str = "regrowth";

/// Heals the caster now and a little more each turn.
///
/// Unlike Bark Skin, casting it again while active adds a second
/// regeneration record.
#[derive(Clone, Debug)]
pub struct Regrowth {
    definition: CardDefinition,
    flags: CardFlags,
    heal: u32,
    heal_per_turn: u32,
    duration: u32,
}

impl Regrowth {
    #[must_use]
    pub fn new(config: &RegrowthConfig) -> Self {
        let effect = EffectDescriptor::new(
            EffectKind::Heal,
            EffectTarget::Caster,
            f64::from(config.heal),
            format!(
                "Restore {} HP, then {} HP per turn for {} turns.",
                config.heal, config.heal_per_turn, config.duration
            ),
        )
        .with_param("heal_per_turn", config.heal_per_turn)
        .with_param("duration", config.duration)
        .with_param("status", REGROWTH_STATUS);

        Self {
            definition: CardDefinition::new(REGROWTH, "Regrowth", config.cost, "🌿", effect),
            flags: CardFlags::default(),
            heal: config.heal,
            heal_per_turn: config.heal_per_turn,
            duration: config.duration,
        }
    }
}

impl Default for Regrowth {
    fn default() -> Self {
        Self::new(&RegrowthConfig::default())
    }
}

impl Card for Regrowth {
    fn definition(&self) -> &CardDefinition {
        &self.definition
    }

    fn flags(&self) -> &CardFlags {
        &self.flags
    }

    fn flags_mut(&mut self) -> &mut CardFlags {
        &mut self.flags
    }

    fn execute_effect(
        &mut self,
        state: Option<&mut GameState>,
        _target: Option<&Target>,
        _rng: &mut dyn RandomSource,
    ) -> ExecutionResult {
        let Some(state) = state else {
            warn!(card = %self.definition.name, "no game state");
            return ExecutionResult::failed(PlayFailure::NoGameState);
        };

        let before = state.player_hp();
        state.update_player_hp(before + i64::from(self.heal));
        let healed = (state.player_hp() - before).max(0) as u32;

        let status = StatusEffect::new(
            REGROWTH_STATUS,
            StatusKind::Regeneration,
            f64::from(self.heal_per_turn),
            self.duration,
        )
        .with_source(self.definition.name.clone())
        .with_emoji(self.definition.emoji.clone());
        state.add_effect(status.clone());

        debug!(
            card = %self.definition.name,
            healed,
            player_hp = state.player_hp(),
            "regrowth resolved"
        );

        ExecutionResult::success(format!(
            "Regrowth restores {} HP and takes root for {} turns",
            healed, self.duration
        ))
        .with_healing(healed)
        .with_status(status)
    }

    fn stats_string(&self) -> String {
        format!(
            "Cost: {} | Heal: {} | +{}/turn for {} turns",
            self.definition.cost, self.heal, self.heal_per_turn, self.duration
        )
    }
}
