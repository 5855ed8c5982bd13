//! Damage computation for damage-dealing cards.
//!
//! The pipeline is fixed:
//!
//! 1. base damage
//! 2. × bonus multiplier when the target matches a keyword
//! 3. × crit multiplier on a successful crit roll
//! 4. × variation factor in `[1 - variation, 1 + variation)`
//! 5. floor to an integer
//!
//! The crit roll is always drawn before the variation roll, so a scripted
//! source replays exactly.

use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

/// Parameters of a damage roll.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageProfile {
    pub base: u32,
    pub bonus_multiplier: f64,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    /// Half-width of the random spread, e.g. `0.15` for ±15%.
    pub variation: f64,
}

/// Result of a damage roll before it is applied to anything.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageRoll {
    pub amount: u32,
    pub is_critical_hit: bool,
    pub bonus_applied: bool,
    /// The variation factor that was drawn.
    pub variation_factor: f64,
}

impl DamageProfile {
    /// Roll damage against a target.
    pub fn roll(&self, bonus_applies: bool, rng: &mut dyn RandomSource) -> DamageRoll {
        let mut amount = f64::from(self.base);

        if bonus_applies {
            amount *= self.bonus_multiplier;
        }

        let is_critical_hit = rng.roll(self.crit_chance);
        if is_critical_hit {
            amount *= self.crit_multiplier;
        }

        let variation_factor = variation_factor(rng.next_f64(), self.variation);
        amount *= variation_factor;

        DamageRoll {
            amount: amount.floor().max(0.0) as u32,
            is_critical_hit,
            bonus_applied: bonus_applies,
            variation_factor,
        }
    }

    /// Smallest damage any roll can produce.
    #[must_use]
    pub fn min_damage(&self) -> u32 {
        (f64::from(self.base) * (1.0 - self.variation)).floor().max(0.0) as u32
    }

    /// Upper bound on damage (bonus and crit both applied, top of the spread).
    #[must_use]
    pub fn max_damage(&self) -> u32 {
        (f64::from(self.base)
            * self.bonus_multiplier
            * self.crit_multiplier
            * (1.0 + self.variation))
            .floor()
            .max(0.0) as u32
    }
}

/// Map a uniform roll to a multiplier centred on 1.0.
///
/// A roll of `0.5` gives exactly `1.0`.
#[must_use]
pub fn variation_factor(roll: f64, variation: f64) -> f64 {
    1.0 + (roll * 2.0 - 1.0) * variation
}

/// Case-insensitive substring match of `name` against `keywords`.
///
/// Blank keywords never match.
#[must_use]
pub fn matches_keyword(name: &str, keywords: &[String]) -> bool {
    let name = name.to_lowercase();
    keywords
        .iter()
        .map(|keyword| keyword.trim())
        .filter(|keyword| !keyword.is_empty())
        .any(|keyword| name.contains(keyword.to_lowercase().as_str()))
}
