//! Solar Beam damage properties.
//!
//! These tests check the damage bounds and the undead bonus across many
//! seeds and scripted rolls.

use proptest::prelude::*;

use spell_cards::core::{GameRng, GameState, ScriptedRandom, SolarBeamConfig, Target};
use spell_cards::{Card, SolarBeam};

fn bounds(base: u32) -> (u32, u32) {
    let base = f64::from(base);
    ((base * 0.85).floor() as u32, (base * 2.0 * 1.5 * 1.15).floor() as u32)
}

/// The worked example: 14 base damage against an undead name, no crit,
/// neutral variation.
#[test]
fn test_skeleton_king_example() {
    let mut beam = SolarBeam::new(&SolarBeamConfig::default().with_cost(7).with_damage(14));
    let mut state = GameState::new("Skeleton King", 200);
    let target = Target::new("Skeleton King");

    let result = beam.execute_effect(
        Some(&mut state),
        Some(&target),
        &mut ScriptedRandom::new([0.99, 0.5]),
    );

    assert!(result.success);
    assert_eq!(result.damage, 28);
    assert!(!result.is_critical_hit);
    assert!(result.undead_bonus);
    assert_eq!(state.enemy_hp(), 172);
}

/// Seeded rolls never leave the damage window.
#[test]
fn test_damage_within_bounds_over_seeds() {
    let (lo, hi) = bounds(14);

    for seed in 0..500 {
        for name in ["Skeleton King", "Forest Troll"] {
            let mut beam = SolarBeam::default();
            let mut state = GameState::new(name, 1000);
            let target = Target::enemy_of(&state);

            let result = beam.execute_effect(Some(&mut state), Some(&target), &mut GameRng::new(seed));

            assert!(
                (lo..=hi).contains(&result.damage),
                "seed {} vs {} dealt {}",
                seed,
                name,
                result.damage
            );
            assert_eq!(state.enemy_hp(), 1000 - i64::from(result.damage));
        }
    }
}

/// Without the bonus or a crit, damage stays within ±15% of base.
#[test]
fn test_living_target_without_crit_stays_near_base() {
    let config = SolarBeamConfig::default().with_crit_chance(0.0);

    for seed in 0..200 {
        let mut beam = SolarBeam::new(&config);
        let mut state = GameState::new("Forest Troll", 1000);
        let target = Target::enemy_of(&state);

        let result = beam.execute_effect(Some(&mut state), Some(&target), &mut GameRng::new(seed));

        assert!(!result.is_critical_hit);
        assert!((11..=16).contains(&result.damage), "seed {} dealt {}", seed, result.damage);
    }
}

/// Same seed, same damage.
#[test]
fn test_seeded_play_is_reproducible() {
    let play = |seed| {
        let mut beam = SolarBeam::default();
        let mut state = GameState::new("Lich", 500);
        let target = Target::enemy_of(&state);
        beam.execute_effect(Some(&mut state), Some(&target), &mut GameRng::new(seed))
    };

    for seed in [1, 7, 42, 1234] {
        assert_eq!(play(seed), play(seed));
    }
}

#[test]
fn test_undead_keywords_are_case_insensitive_substrings() {
    let beam = SolarBeam::default();

    for name in ["SKELETON", "zombie lord", "The Ghostly Knight", "Archlich", "BoneCrusher"] {
        assert!(beam.is_undead(&Target::new(name)), "{} should be undead", name);
    }
    for name in ["Forest Troll", "Goblin", "Dragon", ""] {
        assert!(!beam.is_undead(&Target::new(name)), "{} should not be undead", name);
    }
}

proptest! {
    #[test]
    fn prop_damage_in_window(
        base in 1u32..500,
        crit_roll in 0.0f64..1.0,
        variation_roll in 0.0f64..1.0,
        undead in any::<bool>(),
    ) {
        let mut beam = SolarBeam::new(&SolarBeamConfig::default().with_damage(base));
        let name = if undead { "Wailing Wraith" } else { "Stone Golem" };
        let mut state = GameState::new(name, i64::MAX / 2);
        let target = Target::enemy_of(&state);
        let mut rng = ScriptedRandom::new([crit_roll, variation_roll]);

        let result = beam.execute_effect(Some(&mut state), Some(&target), &mut rng);
        let (lo, hi) = bounds(base);

        prop_assert!(result.success);
        prop_assert_eq!(result.undead_bonus, undead);
        prop_assert!(result.damage >= lo);
        prop_assert!(result.damage <= hi);
    }

    #[test]
    fn prop_living_targets_never_get_bonus(name in "[a-f ]{0,16}") {
        // Letters a-f cannot spell any undead keyword
        let beam = SolarBeam::default();
        prop_assert!(!beam.is_undead(&Target::new(name)));
    }

    #[test]
    fn prop_missing_target_never_mutates(enemy_hp in 1i64..10_000) {
        let mut beam = SolarBeam::default();
        let mut state = GameState::new("Zombie", enemy_hp);
        let before = state.clone();

        let result = beam.execute_effect(Some(&mut state), None, &mut GameRng::new(0));

        prop_assert!(!result.success);
        prop_assert_eq!(result.reason(), Some("no_target"));
        prop_assert_eq!(state, before);
    }
}
