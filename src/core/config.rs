//! Card tunables.
//!
//! Every card reads its numbers from a config struct at construction and
//! never again. Defaults are the canonical card values; a TOML file may
//! override any subset:
//!
//! ```
//! use spell_cards::core::CardConfig;
//!
//! let config = CardConfig::from_toml_str(r#"
//!     [solar_beam]
//!     damage = 18
//!
//!     [bark_skin]
//!     duration = 4
//! "#).unwrap();
//!
//! assert_eq!(config.solar_beam.damage, 18);
//! assert_eq!(config.solar_beam.cost, 7);
//! assert_eq!(config.bark_skin.duration, 4);
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ConfigError, Result};

/// Tunables for Solar Beam.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarBeamConfig {
    pub cost: u32,
    pub damage: u32,
    /// Multiplier against targets matching `undead_keywords`.
    pub undead_multiplier: f64,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    /// Half-width of the damage spread (0.15 = ±15%).
    pub variation: f64,
    pub undead_keywords: Vec<String>,
}

impl Default for SolarBeamConfig {
    fn default() -> Self {
        Self {
            cost: 7,
            damage: 14,
            undead_multiplier: 2.0,
            crit_chance: 0.15,
            crit_multiplier: 1.5,
            variation: 0.15,
            undead_keywords: [
                "skeleton", "zombie", "ghost", "ghoul", "lich", "undead", "wraith",
                "vampire", "mummy", "specter", "revenant", "bone",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
        }
    }
}

impl SolarBeamConfig {
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    #[must_use]
    pub fn with_crit_chance(mut self, chance: f64) -> Self {
        self.crit_chance = chance;
        self
    }

    fn validate(&self) -> Result<()> {
        check_probability("solar_beam.crit_chance", self.crit_chance)?;
        check_at_least_one("solar_beam.crit_multiplier", self.crit_multiplier)?;
        check_at_least_one("solar_beam.undead_multiplier", self.undead_multiplier)?;
        if !(0.0..1.0).contains(&self.variation) {
            return Err(ConfigError::invalid(
                "solar_beam.variation",
                format!("{} is outside [0, 1)", self.variation),
            ));
        }
        if self.undead_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::invalid(
                "solar_beam.undead_keywords",
                "keywords must not be blank",
            ));
        }
        Ok(())
    }
}

/// Tunables for Bark Skin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarkSkinConfig {
    pub cost: u32,
    /// Fraction of incoming damage removed.
    pub damage_reduction: f64,
    /// Lifetime of the status effect in turns.
    pub duration: u32,
}

impl Default for BarkSkinConfig {
    fn default() -> Self {
        Self {
            cost: 3,
            damage_reduction: 0.40,
            duration: 3,
        }
    }
}

impl BarkSkinConfig {
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_damage_reduction(mut self, reduction: f64) -> Self {
        self.damage_reduction = reduction;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    fn validate(&self) -> Result<()> {
        check_probability("bark_skin.damage_reduction", self.damage_reduction)?;
        check_duration("bark_skin.duration", self.duration)
    }
}

/// Tunables for Regrowth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegrowthConfig {
    pub cost: u32,
    /// Instant heal.
    pub heal: u32,
    /// Heal per turn while the regeneration status is active.
    pub heal_per_turn: u32,
    pub duration: u32,
}

impl Default for RegrowthConfig {
    fn default() -> Self {
        Self {
            cost: 4,
            heal: 10,
            heal_per_turn: 3,
            duration: 2,
        }
    }
}

impl RegrowthConfig {
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_heal(mut self, heal: u32) -> Self {
        self.heal = heal;
        self
    }

    fn validate(&self) -> Result<()> {
        check_duration("regrowth.duration", self.duration)
    }
}

/// Tunables for every standard card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub solar_beam: SolarBeamConfig,
    pub bark_skin: BarkSkinConfig,
    pub regrowth: RegrowthConfig,
}

impl CardConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: CardConfig = toml::from_str(source)?;
        config.validate()?;
        info!(
            solar_beam_damage = config.solar_beam.damage,
            bark_skin_reduction = config.bark_skin.damage_reduction,
            regrowth_heal = config.regrowth.heal,
            "loaded card config"
        );
        Ok(config)
    }

    /// Check every tunable is in range.
    pub fn validate(&self) -> Result<()> {
        self.solar_beam.validate()?;
        self.bark_skin.validate()?;
        self.regrowth.validate()
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} is outside [0, 1]")))
    }
}

fn check_at_least_one(field: &'static str, value: f64) -> Result<()> {
    if value >= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} is below 1")))
    }
}

fn check_duration(field: &'static str, value: u32) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must last at least one turn"))
    }
}
