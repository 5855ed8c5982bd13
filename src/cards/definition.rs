//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable identity of a card: its name,
//! cost, emoji and effect descriptor. Runtime flags (in hand, cooldown)
//! live separately in `CardFlags`.

use serde::{Deserialize, Serialize};

use crate::effects::EffectDescriptor;

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use spell_cards::cards::{CardDefinition, CardId};
/// use spell_cards::effects::{EffectDescriptor, EffectKind, EffectTarget};
///
/// let effect = EffectDescriptor::new(EffectKind::Damage, EffectTarget::Enemy, 3.0, "Deal 3 damage.");
/// let spark = CardDefinition::new(CardId::new(9), "Spark", 1, "⚡", effect);
///
/// assert_eq!(spark.cost, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,

    /// Card name (for display).
    pub name: String,

    /// Mana cost.
    pub cost: u32,

    pub emoji: String,

    pub effect: EffectDescriptor,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        cost: u32,
        emoji: impl Into<String>,
        effect: EffectDescriptor,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cost,
            emoji: emoji.into(),
            effect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{EffectKind, EffectTarget};

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_card_definition_serialization() {
        let effect = EffectDescriptor::new(EffectKind::Heal, EffectTarget::Caster, 10.0, "Heal 10.");
        let card = CardDefinition::new(CardId::new(3), "Regrowth", 4, "🌿", effect);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
