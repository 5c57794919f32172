//! Statistical check of the modifier roll distribution.
//!
//! Uses seeded ChaCha8Rng so the result is reproducible.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skirmish::modifiers::{builtin_modifiers, EncounterModifier, ModifierRoller, StatAdjustment};
use std::collections::HashMap;

const ROLLS: u32 = 100_000;
const TOLERANCE: f64 = 0.01;

fn frequencies(roller: &mut ModifierRoller, seed: u64) -> HashMap<String, f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut counts: HashMap<String, u32> = HashMap::new();
    for _ in 0..ROLLS {
        let id = roller
            .roll("stage", &mut rng)
            .map(|m| m.id)
            .unwrap_or_else(|| "none".to_string());
        *counts.entry(id).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(id, count)| (id, count as f64 / ROLLS as f64))
        .collect()
}

#[test]
fn test_builtin_frequencies_match_chances() {
    let modifiers = builtin_modifiers();
    let none_chance = 1.0 - modifiers.iter().map(|m| m.chance).sum::<f64>();
    let mut roller = ModifierRoller::new(modifiers.clone());
    let observed = frequencies(&mut roller, 42);

    for modifier in &modifiers {
        let freq = observed.get(&modifier.id).copied().unwrap_or(0.0);
        assert!(
            (freq - modifier.chance).abs() < TOLERANCE,
            "{}: observed {:.4}, expected {:.4}",
            modifier.id,
            freq,
            modifier.chance
        );
    }
    let none = observed.get("none").copied().unwrap_or(0.0);
    assert!(
        (none - none_chance).abs() < TOLERANCE,
        "none: observed {:.4}, expected {:.4}",
        none,
        none_chance
    );
}

#[test]
fn test_skewed_table_frequencies() {
    let table = vec![
        EncounterModifier {
            id: "common".to_string(),
            name: "Common".to_string(),
            chance: 0.6,
            stat_adjustment: StatAdjustment::default(),
            player_attack_mult: None,
            player_hp_mult: None,
        },
        EncounterModifier {
            id: "rare".to_string(),
            name: "Rare".to_string(),
            chance: 0.05,
            stat_adjustment: StatAdjustment::default(),
            player_attack_mult: None,
            player_hp_mult: None,
        },
    ];
    let mut roller = ModifierRoller::new(table);
    let observed = frequencies(&mut roller, 7);

    assert!((observed["common"] - 0.6).abs() < TOLERANCE);
    assert!((observed["rare"] - 0.05).abs() < TOLERANCE);
    assert!((observed["none"] - 0.35).abs() < TOLERANCE);
}
