//! Core types: game state, targets, randomness, configuration.

pub mod entity;
pub mod rng;
pub mod config;
pub mod state;

pub use entity::Target;
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRandom};
pub use config::{BarkSkinConfig, CardConfig, RegrowthConfig, SolarBeamConfig};
pub use state::{Enemy, GameState};
