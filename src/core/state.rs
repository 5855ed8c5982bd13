//! Game state: the mutable context cards read and mutate.
//!
//! ## Ownership
//!
//! The surrounding session owns the `GameState`. Cards borrow it mutably
//! for the duration of one `execute_effect` call and mutate it only through
//! the mutators here (`add_effect`, `update_enemy_hp`, `update_player_hp`).
//!
//! ## Status lifecycle
//!
//! Cards push status effects; they never count them down. Whoever owns the
//! turn calls `tick_status_effects` once per turn.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::effects::{StatusEffect, StatusKind};

/// The creature the player is fighting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub hp: i64,
    pub max_hp: i64,
}

impl Enemy {
    /// Create an enemy at full health. Negative health is raised to zero.
    #[must_use]
    pub fn new(name: impl Into<String>, max_hp: i64) -> Self {
        let max_hp = max_hp.max(0);
        Self {
            name: name.into(),
            hp: max_hp,
            max_hp,
        }
    }
}

/// Mutable state shared by all cards in a session.
///
/// Uses `im::Vector` for the active effects so snapshots are cheap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    player_hp: i64,
    player_max_hp: i64,
    player_mana: u32,
    player_max_mana: u32,
    enemy: Enemy,
    active_effects: Vector<StatusEffect>,
}

impl GameState {
    /// Default player health.
    pub const DEFAULT_PLAYER_HP: i64 = 50;

    /// Default player mana.
    pub const DEFAULT_PLAYER_MANA: u32 = 10;

    /// Create a new state against a fresh enemy.
    ///
    /// ## Defaults
    ///
    /// - player HP: 50 / 50
    /// - player mana: 10 / 10
    /// - no active effects
    #[must_use]
    pub fn new(enemy_name: impl Into<String>, enemy_hp: i64) -> Self {
        Self {
            player_hp: Self::DEFAULT_PLAYER_HP,
            player_max_hp: Self::DEFAULT_PLAYER_HP,
            player_mana: Self::DEFAULT_PLAYER_MANA,
            player_max_mana: Self::DEFAULT_PLAYER_MANA,
            enemy: Enemy::new(enemy_name, enemy_hp),
            active_effects: Vector::new(),
        }
    }

    /// Set current and max player HP.
    #[must_use]
    pub fn with_player_hp(mut self, hp: i64, max_hp: i64) -> Self {
        self.player_max_hp = max_hp.max(0);
        self.player_hp = hp.clamp(0, self.player_max_hp);
        self
    }

    /// Set current and max player mana.
    #[must_use]
    pub fn with_player_mana(mut self, mana: u32, max_mana: u32) -> Self {
        self.player_max_mana = max_mana;
        self.player_mana = mana.min(max_mana);
        self
    }

    // === Player ===

    #[must_use]
    pub fn player_hp(&self) -> i64 {
        self.player_hp
    }

    #[must_use]
    pub fn player_max_hp(&self) -> i64 {
        self.player_max_hp
    }

    #[must_use]
    pub fn player_mana(&self) -> u32 {
        self.player_mana
    }

    #[must_use]
    pub fn player_max_mana(&self) -> u32 {
        self.player_max_mana
    }

    /// Set player HP, clamped to `[0, max]`.
    pub fn update_player_hp(&mut self, new_hp: i64) {
        self.player_hp = new_hp.clamp(0, self.player_max_hp);
    }

    /// Spend mana. Returns false (and spends nothing) if there isn't enough.
    pub fn spend_mana(&mut self, amount: u32) -> bool {
        match self.player_mana.checked_sub(amount) {
            Some(left) => {
                self.player_mana = left;
                true
            }
            None => false,
        }
    }

    // === Enemy ===

    #[must_use]
    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    #[must_use]
    pub fn enemy_hp(&self) -> i64 {
        self.enemy.hp
    }

    /// Set enemy HP, clamped to `[0, max]`.
    pub fn update_enemy_hp(&mut self, new_hp: i64) {
        self.enemy.hp = new_hp.clamp(0, self.enemy.max_hp.max(0));
    }

    #[must_use]
    pub fn is_enemy_defeated(&self) -> bool {
        self.enemy.hp == 0
    }

    // === Status Effects ===

    /// Push a status effect. Stacking rules are the card's business.
    pub fn add_effect(&mut self, effect: StatusEffect) {
        self.active_effects.push_back(effect);
    }

    #[must_use]
    pub fn active_effects(&self) -> &Vector<StatusEffect> {
        &self.active_effects
    }

    /// Is an effect with this name currently active?
    #[must_use]
    pub fn has_active_effect(&self, name: &str) -> bool {
        self.active_effects.iter().any(|e| e.name == name)
    }

    /// Multiplier applied to damage the player takes.
    ///
    /// Product of `1 - magnitude` over active damage reductions, never below 0.
    #[must_use]
    pub fn incoming_damage_multiplier(&self) -> f64 {
        self.active_effects
            .iter()
            .filter(|e| e.kind == StatusKind::DamageReduction)
            .map(|e| 1.0 - e.magnitude)
            .product::<f64>()
            .max(0.0)
    }

    /// Advance every active effect by one turn.
    ///
    /// Regeneration heals first, then every effect counts down. Expired
    /// effects are removed and returned in their original order.
    pub fn tick_status_effects(&mut self) -> Vec<StatusEffect> {
        let regen: f64 = self
            .active_effects
            .iter()
            .filter(|e| e.kind == StatusKind::Regeneration)
            .map(|e| e.magnitude)
            .sum();
        if regen > 0.0 {
            self.update_player_hp(self.player_hp + regen.floor() as i64);
        }

        let mut kept = Vector::new();
        let mut expired = Vec::new();
        for mut effect in std::mem::take(&mut self.active_effects) {
            effect.tick();
            if effect.is_expired() {
                expired.push(effect);
            } else {
                kept.push_back(effect);
            }
        }
        self.active_effects = kept;

        for effect in &expired {
            debug!(status = %effect.name, source = %effect.source, "status effect expired");
        }
        expired
    }
}
