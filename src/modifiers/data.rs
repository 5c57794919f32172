use super::types::{EncounterModifier, StatAdjustment};

/// Built-in modifier table. Chances sum to 0.45; the rest is "no modifier".
pub fn builtin_modifiers() -> Vec<EncounterModifier> {
    vec![
        EncounterModifier {
            id: "enraged".to_string(),
            name: "Enraged".to_string(),
            chance: 0.15,
            stat_adjustment: StatAdjustment {
                hp_mult: 1.0,
                attack_mult: 1.3,
            },
            player_attack_mult: None,
            player_hp_mult: None,
        },
        EncounterModifier {
            id: "fortified".to_string(),
            name: "Fortified".to_string(),
            chance: 0.12,
            stat_adjustment: StatAdjustment {
                hp_mult: 1.4,
                attack_mult: 1.0,
            },
            player_attack_mult: None,
            player_hp_mult: None,
        },
        EncounterModifier {
            id: "ambush".to_string(),
            name: "Ambush".to_string(),
            chance: 0.08,
            stat_adjustment: StatAdjustment::default(),
            player_attack_mult: Some(0.85),
            player_hp_mult: Some(0.9),
        },
        EncounterModifier {
            id: "weakened".to_string(),
            name: "Weakened".to_string(),
            chance: 0.10,
            stat_adjustment: StatAdjustment {
                hp_mult: 0.8,
                attack_mult: 0.8,
            },
            player_attack_mult: Some(1.1),
            player_hp_mult: None,
        },
    ]
}
