//! Effect system for spell cards.
//!
//! - `EffectDescriptor`: static description of a card's effect
//! - `StatusEffect`: timed modifier pushed into game state
//! - `ExecutionResult`: what a single play did
//! - `DamageProfile`: the damage pipeline shared by damage cards

mod effect;
mod status;
mod result;
mod damage;

pub use effect::{EffectDescriptor, EffectKind, EffectTarget};
pub use status::{StatusEffect, StatusKind};
pub use result::ExecutionResult;
pub use damage::{matches_keyword, variation_factor, DamageProfile, DamageRoll};
