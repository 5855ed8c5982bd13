//! Card registry for definition lookup and instantiation.
//!
//! The `CardRegistry` holds every card a session can use. It stores the
//! static definition for lookup and the tunables needed to build a fresh
//! card object on demand.

use rustc_hash::FxHashMap;

use super::bark_skin::BarkSkin;
use super::card::Card;
use super::definition::{CardDefinition, CardId};
use super::regrowth::Regrowth;
use super::solar_beam::SolarBeam;
use crate::core::{BarkSkinConfig, CardConfig, RegrowthConfig, SolarBeamConfig};
use crate::effects::EffectKind;

/// How to build a fresh instance of a registered card.
#[derive(Clone, Debug, PartialEq)]
pub enum CardTemplate {
    SolarBeam(SolarBeamConfig),
    BarkSkin(BarkSkinConfig),
    Regrowth(RegrowthConfig),
}

impl CardTemplate {
    /// Build a new card object. Flags start at their defaults.
    #[must_use]
    pub fn build(&self) -> Box<dyn Card> {
        match self {
            CardTemplate::SolarBeam(config) => Box::new(SolarBeam::new(config)),
            CardTemplate::BarkSkin(config) => Box::new(BarkSkin::new(config)),
            CardTemplate::Regrowth(config) => Box::new(Regrowth::new(config)),
        }
    }
}

#[derive(Clone, Debug)]
struct Entry {
    definition: CardDefinition,
    template: CardTemplate,
}

/// Registry of playable cards.
///
/// ## Example
///
/// ```
/// use spell_cards::cards::{CardRegistry, SOLAR_BEAM};
/// use spell_cards::core::CardConfig;
///
/// let registry = CardRegistry::standard(&CardConfig::default());
///
/// let beam = registry.get(SOLAR_BEAM).unwrap();
/// assert_eq!(beam.name, "Solar Beam");
///
/// let card = registry.instantiate(SOLAR_BEAM).unwrap();
/// assert_eq!(card.cost(), 7);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Entry>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every standard card built from `config`.
    #[must_use]
    pub fn standard(config: &CardConfig) -> Self {
        let mut registry = Self::new();
        registry.register(CardTemplate::SolarBeam(config.solar_beam.clone()));
        registry.register(CardTemplate::BarkSkin(config.bark_skin.clone()));
        registry.register(CardTemplate::Regrowth(config.regrowth.clone()));
        registry
    }

    /// Register a card and return its id.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, template: CardTemplate) -> CardId {
        let definition = template.build().definition().clone();
        let id = definition.id;
        if self.cards.contains_key(&id) {
            panic!("Card with ID {:?} already registered", id);
        }
        self.cards.insert(id, Entry { definition, template });
        id
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id).map(|e| &e.definition)
    }

    /// Find a card by name, ignoring case.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Find cards by effect kind.
    pub fn find_by_kind(&self, kind: EffectKind) -> impl Iterator<Item = &CardDefinition> {
        self.iter().filter(move |c| c.effect.kind == kind)
    }

    /// Build a fresh card object.
    #[must_use]
    pub fn instantiate(&self, id: CardId) -> Option<Box<dyn Card>> {
        self.cards.get(&id).map(|e| e.template.build())
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values().map(|e| &e.definition)
    }
}
