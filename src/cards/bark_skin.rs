//! Bark Skin - a defensive buff that refuses to stack.

use tracing::{debug, trace, warn};

use super::card::{meets_play_requirements, Card};
use super::definition::{CardDefinition, CardId};
use super::instance::CardFlags;
use crate::core::{BarkSkinConfig, GameState, RandomSource, Target};
use crate::effects::{
    EffectDescriptor, EffectKind, EffectTarget, ExecutionResult, StatusEffect, StatusKind,
};
use crate::error::PlayFailure;

/// Registry id of Bark Skin.
pub const BARK_SKIN: CardId = CardId::new(2);

/// Name of the status effect Bark Skin applies.
pub const BARKSKIN_STATUS: &str = "barkskin";

/// Hardens the caster's skin, reducing incoming damage for a few turns.
#[derive(Clone, Debug)]
pub struct BarkSkin {
    definition: CardDefinition,
    flags: CardFlags,
    damage_reduction: f64,
    duration: u32,
}

impl BarkSkin {
    #[must_use]
    pub fn new(config: &BarkSkinConfig) -> Self {
        let effect = EffectDescriptor::new(
            EffectKind::Buff,
            EffectTarget::Caster,
            config.damage_reduction,
            format!(
                "Reduce incoming damage by {}% for {} turns.",
                percent(config.damage_reduction),
                config.duration
            ),
        )
        .with_param("duration", config.duration)
        .with_param("status", BARKSKIN_STATUS)
        .with_param("stackable", false);

        Self {
            definition: CardDefinition::new(BARK_SKIN, "Bark Skin", config.cost, "🌳", effect),
            flags: CardFlags::default(),
            damage_reduction: config.damage_reduction,
            duration: config.duration,
        }
    }

    #[must_use]
    pub fn damage_reduction(&self) -> f64 {
        self.damage_reduction
    }

    #[must_use]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    fn status_effect(&self) -> StatusEffect {
        StatusEffect::new(
            BARKSKIN_STATUS,
            StatusKind::DamageReduction,
            self.damage_reduction,
            self.duration,
        )
        .with_source(self.definition.name.clone())
        .with_emoji(self.definition.emoji.clone())
    }
}

impl Default for BarkSkin {
    fn default() -> Self {
        Self::new(&BarkSkinConfig::default())
    }
}

impl Card for BarkSkin {
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

        let status = self.status_effect();
        state.add_effect(status.clone());

        debug!(
            card = %self.definition.name,
            reduction = self.damage_reduction,
            turns = self.duration,
            "bark skin applied"
        );

        ExecutionResult::success(format!(
            "Your skin hardens like bark: {}% less damage for {} turns",
            percent(self.damage_reduction),
            self.duration
        ))
        .with_status(status)
        .with_damage_reduction(self.damage_reduction)
    }

    fn can_play(&self, state: &GameState) -> bool {
        if state.has_active_effect(BARKSKIN_STATUS) {
            trace!(card = %self.definition.name, "already active");
            return false;
        }

        meets_play_requirements(self, state)
    }

    fn stats_string(&self) -> String {
        format!(
            "Cost: {} | Reduction: {}% | Duration: {} turns",
            self.definition.cost,
            percent(self.damage_reduction),
            self.duration
        )
    }
}

fn percent(fraction: f64) -> i64 {
    (fraction * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRandom;

    fn ready_bark_skin() -> BarkSkin {
        let mut card = BarkSkin::default();
        *card.flags_mut() = CardFlags::ready();
        card
    }

    #[test]
    fn test_definition() {
        let card = BarkSkin::default();
        let def = card.definition();

        assert_eq!(def.id, BARK_SKIN);
        assert_eq!(def.cost, 3);
        assert_eq!(def.effect.kind, EffectKind::Buff);
        assert_eq!(def.effect.value, 0.40);
        assert_eq!(def.effect.get_int("duration", 0), 3);
        assert_eq!(def.effect.description, "Reduce incoming damage by 40% for 3 turns.");
    }

    #[test]
    fn test_execute_applies_status() {
        let mut card = BarkSkin::default();
        let mut state = GameState::new("Goblin", 30);

        let result = card.execute_effect(Some(&mut state), None, &mut ScriptedRandom::default());

        assert!(result.success);
        assert_eq!(result.damage_reduction, Some(0.40));
        assert_eq!(result.status_effects.len(), 1);

        let status = &result.status_effects[0];
        assert_eq!(status.name, "barkskin");
        assert_eq!(status.kind, StatusKind::DamageReduction);
        assert_eq!(status.magnitude, 0.40);
        assert_eq!(status.turns_remaining, 3);
        assert_eq!(status.source, "Bark Skin");

        assert!(state.has_active_effect("barkskin"));
        assert_eq!(state.active_effects().len(), 1);
    }

    #[test]
    fn test_execute_draws_no_randomness() {
        let mut card = BarkSkin::default();
        let mut state = GameState::new("Goblin", 30);
        let mut rng = ScriptedRandom::new([0.1]);

        card.execute_effect(Some(&mut state), None, &mut rng);
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_no_state_fails_softly() {
        let mut card = BarkSkin::default();

        let result = card.execute_effect(None, None, &mut ScriptedRandom::default());

        assert!(!result.success);
        assert_eq!(result.reason(), Some("no_game_state"));
        assert!(result.status_effects.is_empty());
    }

    #[test]
    fn test_can_play_checks_mana() {
        let card = ready_bark_skin();

        assert!(card.can_play(&GameState::new("Goblin", 30).with_player_mana(3, 10)));
        assert!(!card.can_play(&GameState::new("Goblin", 30).with_player_mana(2, 10)));
    }

    #[test]
    fn test_can_play_checks_hand_and_cooldown() {
        let state = GameState::new("Goblin", 30);

        let mut card = BarkSkin::default();
        assert!(!card.can_play(&state));

        card.flags_mut().in_hand = true;
        card.flags_mut().cooldown = 2;
        assert!(!card.can_play(&state));
    }

    #[test]
    fn test_refuses_to_stack() {
        let mut card = ready_bark_skin();
        let mut state = GameState::new("Goblin", 30);

        assert!(card.can_play(&state));
        card.execute_effect(Some(&mut state), None, &mut ScriptedRandom::default());
        assert!(!card.can_play(&state));

        while !state.active_effects().is_empty() {
            state.tick_status_effects();
        }
        assert!(card.can_play(&state));
    }

    #[test]
    fn test_active_barkskin_refuses_with_or_without_cooldown() {
        let mut state = GameState::new("Goblin", 30).with_player_mana(99, 99);
        state.add_effect(StatusEffect::new(
            BARKSKIN_STATUS,
            StatusKind::DamageReduction,
            0.40,
            3,
        ));

        let ready = ready_bark_skin();
        assert_eq!(ready.flags().cooldown, 0);
        assert!(!ready.can_play(&state));

        let mut cooling = ready_bark_skin();
        cooling.flags_mut().cooldown = 2;
        assert!(!cooling.can_play(&state));
    }

    #[test]
    fn test_stats_string() {
        let card = BarkSkin::default();
        assert_eq!(card.display_name(), "🌳 Bark Skin");
        assert_eq!(card.stats_string(), "Cost: 3 | Reduction: 40% | Duration: 3 turns");
    }
}
