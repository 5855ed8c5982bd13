//! # spell-cards
//!
//! Spell cards for a turn-based card game.
//!
//! Each card is a small data-plus-behavior object: a mana cost, flavor
//! metadata, a static effect descriptor, and an `execute_effect` routine
//! that mutates a shared `GameState` and returns an `ExecutionResult`.
//!
//! ## Design Principles
//!
//! 1. **Soft failures**: Missing inputs produce `success == false` with a
//!    reason code. Nothing panics and nothing is mutated.
//!
//! 2. **Injected randomness**: Every roll goes through a `RandomSource`,
//!    so plays are reproducible with `GameRng` or `ScriptedRandom`.
//!
//! 3. **Fixed definitions**: Costs, base values and multipliers are read
//!    from config at construction and never change during play.
//!
//! ## Usage
//!
//! ```
//! use spell_cards::{Card, CardFlags, GameRng, GameState, SolarBeam, Target};
//!
//! let mut state = GameState::new("Skeleton King", 120);
//! let mut beam = SolarBeam::default();
//! *beam.flags_mut() = CardFlags::ready();
//!
//! assert!(beam.can_play(&state));
//!
//! let target = Target::enemy_of(&state);
//! let result = beam.execute_effect(Some(&mut state), Some(&target), &mut GameRng::new(42));
//!
//! assert!(result.success);
//! assert!(result.undead_bonus);
//! assert_eq!(state.enemy_hp(), 120 - i64::from(result.damage));
//! ```
//!
//! ## Modules
//!
//! - `core`: Game state, targets, RNG, configuration
//! - `effects`: Effect descriptors, status effects, results, damage rolls
//! - `cards`: The `Card` trait, standard cards, registry
//! - `error`: Failure reasons and config errors

pub mod core;
pub mod effects;
pub mod cards;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    BarkSkinConfig, CardConfig, Enemy, GameRng, GameRngState, GameState, RandomSource,
    RegrowthConfig, ScriptedRandom, SolarBeamConfig, Target,
};

pub use crate::effects::{
    DamageProfile, DamageRoll, EffectDescriptor, EffectKind, EffectTarget, ExecutionResult,
    StatusEffect, StatusKind,
};

pub use crate::cards::{
    AttributeKey, AttributeValue, Attributes, BarkSkin, Card, CardDefinition, CardFlags, CardId,
    CardRegistry, CardTemplate, Regrowth, SolarBeam,
};

pub use crate::error::{ConfigError, PlayFailure};
