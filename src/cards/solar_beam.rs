//! Solar Beam - a damage spell that burns the undead.

use tracing::{debug, warn};

use super::card::Card;
use super::definition::{CardDefinition, CardId};
use super::instance::CardFlags;
use crate::core::{GameState, RandomSource, SolarBeamConfig, Target};
use crate::effects::{
    matches_keyword, DamageProfile, EffectDescriptor, EffectKind, EffectTarget, ExecutionResult,
};
use crate::error::PlayFailure;

/// Registry id of Solar Beam.
pub const SOLAR_BEAM: CardId = CardId::new(1);

/// Deals heavy damage to a single enemy, doubled against the undead.
#[derive(Clone, Debug)]
pub struct SolarBeam {
    definition: CardDefinition,
    flags: CardFlags,
    profile: DamageProfile,
    undead_keywords: Vec<String>,
    last_damage_dealt: Option<u32>,
}

impl SolarBeam {
    #[must_use]
    pub fn new(config: &SolarBeamConfig) -> Self {
        let effect = EffectDescriptor::new(
            EffectKind::Damage,
            EffectTarget::Enemy,
            f64::from(config.damage),
            format!(
                "Deal {} damage. x{} against undead.",
                config.damage, config.undead_multiplier
            ),
        )
        .with_param("undead_multiplier", config.undead_multiplier)
        .with_param("crit_chance", config.crit_chance)
        .with_param("crit_multiplier", config.crit_multiplier)
        .with_param("variation", config.variation)
        .with_param("undead_keywords", config.undead_keywords.clone());

        Self {
            definition: CardDefinition::new(SOLAR_BEAM, "Solar Beam", config.cost, "☀️", effect),
            flags: CardFlags::default(),
            profile: DamageProfile {
                base: config.damage,
                bonus_multiplier: config.undead_multiplier,
                crit_chance: config.crit_chance,
                crit_multiplier: config.crit_multiplier,
                variation: config.variation,
            },
            undead_keywords: config.undead_keywords.clone(),
            last_damage_dealt: None,
        }
    }

    /// Damage dealt by the most recent successful cast.
    #[must_use]
    pub fn last_damage_dealt(&self) -> Option<u32> {
        self.last_damage_dealt
    }

    /// Would the undead multiplier apply to this target?
    #[must_use]
    pub fn is_undead(&self, target: &Target) -> bool {
        matches_keyword(&target.name, &self.undead_keywords)
    }

    #[must_use]
    pub fn profile(&self) -> &DamageProfile {
        &self.profile
    }
}

impl Default for SolarBeam {
    fn default() -> Self {
        Self::new(&SolarBeamConfig::default())
    }
}

impl Card for SolarBeam {
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
        target: Option<&Target>,
        rng: &mut dyn RandomSource,
    ) -> ExecutionResult {
        let Some(target) = target else {
            warn!(card = %self.definition.name, "no target");
            return ExecutionResult::failed(PlayFailure::NoTarget);
        };
        let Some(state) = state else {
            warn!(card = %self.definition.name, "no game state");
            return ExecutionResult::failed(PlayFailure::NoGameState);
        };

        let undead = self.is_undead(target);
        let roll = self.profile.roll(undead, rng);

        state.update_enemy_hp(state.enemy_hp() - i64::from(roll.amount));
        self.last_damage_dealt = Some(roll.amount);

        debug!(
            card = %self.definition.name,
            target = %target.name,
            damage = roll.amount,
            crit = roll.is_critical_hit,
            undead,
            enemy_hp = state.enemy_hp(),
            "solar beam resolved"
        );

        let mut message = format!("Solar Beam hits {} for {} damage", target.name, roll.amount);
        if roll.is_critical_hit {
            message.push_str(" (critical hit!)");
        }
        if undead {
            message.push_str(" - the undead burn in the light");
        }

        ExecutionResult::success(message)
            .with_damage(roll.amount)
            .with_critical_hit(roll.is_critical_hit)
            .with_undead_bonus(undead)
    }

    fn stats_string(&self) -> String {
        format!(
            "Cost: {} | Damage: {} | x{} vs undead",
            self.definition.cost, self.profile.base, self.profile.bonus_multiplier
        )
    }
}
