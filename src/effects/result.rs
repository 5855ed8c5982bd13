//! Execution results returned by card effects.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::StatusEffect;
use crate::error::PlayFailure;

/// Outcome of a single `execute_effect` call.
///
/// Transient: the caller reads it right after the play and drops it.
/// A failed result always has `failure` set and zero damage/healing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub success: bool,

    /// Human-readable summary of what happened.
    pub message: String,

    /// Set when `success` is false.
    pub failure: Option<PlayFailure>,

    /// Damage dealt to the enemy.
    pub damage: u32,

    /// HP actually restored to the player.
    pub healing: u32,

    /// Status effects applied by this play.
    pub status_effects: SmallVec<[StatusEffect; 2]>,

    pub is_critical_hit: bool,

    /// Damage card hit a target matching an undead keyword.
    pub undead_bonus: bool,

    /// Damage reduction granted by a defensive card.
    pub damage_reduction: Option<f64>,
}

impl ExecutionResult {
    /// A successful play with a message. Fill in the rest with the builders.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            ..Self::default()
        }
    }

    /// A refused play. Nothing was mutated.
    #[must_use]
    pub fn failed(failure: PlayFailure) -> Self {
        Self {
            success: false,
            message: failure.to_string(),
            failure: Some(failure),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    #[must_use]
    pub fn with_healing(mut self, healing: u32) -> Self {
        self.healing = healing;
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusEffect) -> Self {
        self.status_effects.push(status);
        self
    }

    #[must_use]
    pub fn with_critical_hit(mut self, crit: bool) -> Self {
        self.is_critical_hit = crit;
        self
    }

    #[must_use]
    pub fn with_undead_bonus(mut self, undead: bool) -> Self {
        self.undead_bonus = undead;
        self
    }

    #[must_use]
    pub fn with_damage_reduction(mut self, reduction: f64) -> Self {
        self.damage_reduction = Some(reduction);
        self
    }

    /// Reason code of a failed play (`"no_target"`, `"no_game_state"`).
    #[must_use]
    pub fn reason(&self) -> Option<&'static str> {
        self.failure.map(PlayFailure::code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::StatusKind;

    #[test]
    fn test_failed_result() {
        let result = ExecutionResult::failed(PlayFailure::NoTarget);

        assert!(!result.success);
        assert_eq!(result.reason(), Some("no_target"));
        assert_eq!(result.damage, 0);
        assert!(result.status_effects.is_empty());
    }

    #[test]
    fn test_success_builders() {
        let status = StatusEffect::new("barkskin", StatusKind::DamageReduction, 0.4, 3);
        let result = ExecutionResult::success("ok")
            .with_damage(12)
            .with_critical_hit(true)
            .with_status(status)
            .with_damage_reduction(0.4);

        assert!(result.success);
        assert!(result.failure.is_none());
        assert_eq!(result.reason(), None);
        assert_eq!(result.damage, 12);
        assert!(result.is_critical_hit);
        assert_eq!(result.status_effects.len(), 1);
        assert_eq!(result.damage_reduction, Some(0.4));
    }
}
