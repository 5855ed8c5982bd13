//! Effect descriptors.
//!
//! An `EffectDescriptor` is the static description of what a card does.
//! It is built once in the card's constructor and never changes; the card's
//! `execute_effect` reads it but game state is what gets mutated.

use serde::{Deserialize, Serialize};

use crate::cards::{AttributeKey, AttributeValue, Attributes};

/// Broad category of a card's effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    Damage,
    Heal,
    Buff,
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectKind::Damage => write!(f, "damage"),
            EffectKind::Heal => write!(f, "heal"),
            EffectKind::Buff => write!(f, "buff"),
        }
    }
}

/// Who an effect lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectTarget {
    /// The opposing creature. Requires a `Target` at execution.
    Enemy,
    /// The player casting the card.
    Caster,
}

/// Static description of a card's effect.
///
/// ## Example
///
/// ```
/// use spell_cards::effects::{EffectDescriptor, EffectKind, EffectTarget};
///
/// let effect = EffectDescriptor::new(EffectKind::Damage, EffectTarget::Enemy, 14.0, "Deal 14 damage.")
///     .with_param("crit_chance", 0.15);
///
/// assert_eq!(effect.get_float("crit_chance", 0.0), 0.15);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectDescriptor {
    pub kind: EffectKind,

    pub target: EffectTarget,

    /// Base magnitude: damage, heal amount, or reduction fraction.
    pub value: f64,

    pub description: String,

    /// Extra tunables (multipliers, chances, durations).
    #[serde(default)]
    pub params: Attributes,
}

impl EffectDescriptor {
    #[must_use]
    pub fn new(
        kind: EffectKind,
        target: EffectTarget,
        value: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            target,
            value,
            description: description.into(),
            params: Attributes::default(),
        }
    }

    /// Add a tunable (builder pattern).
    #[must_use]
    pub fn with_param(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Get a tunable.
    #[must_use]
    pub fn get_param(&self, key: &str) -> Option<&AttributeValue> {
        self.params.get(&AttributeKey::new(key))
    }

    /// Get a numeric tunable with a default. Integers are widened.
    #[must_use]
    pub fn get_float(&self, key: &str, default: f64) -> f64 {
        self.get_param(key)
            .and_then(|v| v.as_float())
            .unwrap_or(default)
    }

    /// Get an integer tunable with a default.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get_param(key)
            .and_then(|v| v.as_int())
            .unwrap_or(default)
    }

    /// Get a list-of-text tunable, empty if absent.
    #[must_use]
    pub fn get_text_list(&self, key: &str) -> &[String] {
        self.get_param(key)
            .and_then(|v| v.as_text_list())
            .unwrap_or(&[])
    }

    /// Does this effect need a target to resolve?
    #[must_use]
    pub fn requires_target(&self) -> bool {
        self.target == EffectTarget::Enemy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_builder() {
        let effect = EffectDescriptor::new(EffectKind::Buff, EffectTarget::Caster, 0.4, "Reduce damage")
            .with_param("duration", 3i32);

        assert_eq!(effect.kind, EffectKind::Buff);
        assert_eq!(effect.get_int("duration", 0), 3);
        assert_eq!(effect.get_float("duration", 0.0), 3.0);
        assert_eq!(effect.get_int("missing", 7), 7);
        assert!(!effect.requires_target());
    }

    #[test]
    fn test_text_list_param() {
        let effect = EffectDescriptor::new(EffectKind::Damage, EffectTarget::Enemy, 14.0, "")
            .with_param("keywords", vec!["zombie".to_string(), "lich".to_string()]);

        assert_eq!(effect.get_text_list("keywords").len(), 2);
        assert!(effect.get_text_list("missing").is_empty());
        assert!(effect.requires_target());
    }

    #[test]
    fn test_effect_kind_display() {
        assert_eq!(EffectKind::Damage.to_string(), "damage");
        assert_eq!(EffectKind::Heal.to_string(), "heal");
        assert_eq!(EffectKind::Buff.to_string(), "buff");
    }

    #[test]
    fn test_descriptor_serialization() {
        let effect = EffectDescriptor::new(EffectKind::Damage, EffectTarget::Enemy, 14.0, "Deal 14 damage.")
            .with_param("crit_multiplier", 1.5);

        let json = serde_json::to_string(&effect).unwrap();
        let deserialized: EffectDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, deserialized);
    }
}
