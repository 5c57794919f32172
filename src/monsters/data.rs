//! Built-in monster roster, in campaign order.

use super::types::{MonsterDefinition, Resource, ResourceMap, SpecialAbility, Wave};
use crate::stronghold::{BuildingId, BuildingRequirement};

fn rewards(entries: &[(Resource, u64)]) -> ResourceMap {
    entries.iter().copied().collect()
}

/// Returns every monster shipped with the game.
pub fn builtin_monsters() -> Vec<MonsterDefinition> {
    vec![
        MonsterDefinition {
            id: "goblin_scouts".to_string(),
            name: "Goblin Scouts".to_string(),
            waves: vec![
                Wave::new("Goblin Runners", 60.0, 5.0, 6),
                Wave::new("Goblin Slingers", 80.0, 7.0, 5),
            ],
            rewards: rewards(&[(Resource::Gold, 80), (Resource::Wood, 40)]),
            max_rewarded_wins: 5,
            xp_reward: 40,
            requires: vec![],
        },
        MonsterDefinition {
            id: "wolf_pack".to_string(),
            name: "Wolf Pack".to_string(),
            waves: vec![
                Wave::new("Grey Wolves", 200.0, 8.0, 5),
                Wave::new("Dire Wolves", 350.0, 12.0, 8),
            ],
            rewards: rewards(&[(Resource::Gold, 150), (Resource::Food, 90)]),
            max_rewarded_wins: 5,
            xp_reward: 75,
            requires: vec![BuildingRequirement::new(BuildingId::Barracks, 1)],
        },
        MonsterDefinition {
            id: "bandit_camp".to_string(),
            name: "Bandit Camp".to_string(),
            waves: vec![
                Wave::new("Cutpurses", 250.0, 14.0, 8),
                Wave::new("Bandit Archers", 220.0, 22.0, 10),
                Wave::new("Bandit Chief", 2400.0, 90.0, 1),
            ],
            rewards: rewards(&[(Resource::Gold, 320), (Resource::Iron, 60)]),
            max_rewarded_wins: 5,
            xp_reward: 140,
            requires: vec![BuildingRequirement::new(BuildingId::Barracks, 2)],
        },
        MonsterDefinition {
            id: "troll_bridge".to_string(),
            name: "Troll Bridge".to_string(),
            waves: vec![
                Wave::new("Bridge Trolls", 900.0, 40.0, 4)
                    .with_ability(SpecialAbility::Heal, 0.25),
                Wave::new("Troll Elder", 4200.0, 120.0, 1)
                    .with_ability(SpecialAbility::Heal, 0.4),
            ],
            rewards: rewards(&[(Resource::Gold, 500), (Resource::Stone, 200)]),
            max_rewarded_wins: 4,
            xp_reward: 220,
            requires: vec![
                BuildingRequirement::new(BuildingId::Barracks, 3),
                BuildingRequirement::new(BuildingId::Forge, 1),
            ],
        },
        MonsterDefinition {
            id: "sunken_crypt".to_string(),
            name: "Sunken Crypt".to_string(),
            waves: vec![
                Wave::new("Skeleton Guard", 300.0, 25.0, 12)
                    .with_ability(SpecialAbility::Revive, 0.3),
                Wave::new("Ghouls", 520.0, 34.0, 10),
                Wave::new("Crypt Lord", 6000.0, 160.0, 1)
                    .with_ability(SpecialAbility::Revive, 0.5),
            ],
            rewards: rewards(&[(Resource::Gold, 800), (Resource::Iron, 180)]),
            max_rewarded_wins: 4,
            xp_reward: 360,
            requires: vec![
                BuildingRequirement::new(BuildingId::Headquarters, 4),
                BuildingRequirement::new(BuildingId::Academy, 2),
            ],
        },
        MonsterDefinition {
            id: "ember_drake".to_string(),
            name: "Ember Drake".to_string(),
            waves: vec![
                Wave::new("Fire Imps", 420.0, 45.0, 14),
                Wave::new("Ember Drake", 14000.0, 260.0, 1)
                    .with_ability(SpecialAbility::AoeBlast, 0.05),
            ],
            rewards: rewards(&[
                (Resource::Gold, 1400),
                (Resource::Stone, 400),
                (Resource::Iron, 300),
            ]),
            max_rewarded_wins: 3,
            xp_reward: 600,
            requires: vec![
                BuildingRequirement::new(BuildingId::Headquarters, 6),
                BuildingRequirement::new(BuildingId::Wall, 3),
                BuildingRequirement::new(BuildingId::WatchTower, 2),
            ],
        },
    ]
}
