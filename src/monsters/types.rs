//! Monster and wave data structures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::stronghold::BuildingRequirement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Gold,
    Wood,
    Stone,
    Iron,
    Food,
}

impl Resource {
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Gold => "Gold",
            Resource::Wood => "Wood",
            Resource::Stone => "Stone",
            Resource::Iron => "Iron",
            Resource::Food => "Food",
        }
    }
}

/// Resource amounts keyed by resource.
pub type ResourceMap = BTreeMap<Resource, u64>;

/// Ability a wave uses during its fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialAbility {
    /// Wave HP grows by `ability_value` of itself before the fight
    Heal,
    /// A surviving player faces the wave again at `ability_value` of its HP
    Revive,
    /// Adds `ability_value` of the player's remaining HP to damage per round
    AoeBlast,
}

impl SpecialAbility {
    pub fn name(&self) -> &'static str {
        match self {
            SpecialAbility::Heal => "Heal",
            SpecialAbility::Revive => "Revive",
            SpecialAbility::AoeBlast => "AoE Blast",
        }
    }
}

/// One homogeneous enemy group. `hp` and `attack` are per unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    pub name: String,
    pub hp: f64,
    pub attack: f64,
    pub count: u32,
    #[serde(default)]
    pub special_ability: Option<SpecialAbility>,
    #[serde(default)]
    pub ability_value: f64,
}

impl Wave {
    pub fn new(name: impl Into<String>, hp: f64, attack: f64, count: u32) -> Self {
        Self {
            name: name.into(),
            hp,
            attack,
            count,
            special_ability: None,
            ability_value: 0.0,
        }
    }

    pub fn with_ability(mut self, ability: SpecialAbility, value: f64) -> Self {
        self.special_ability = Some(ability);
        self.ability_value = value;
        self
    }

    pub fn total_hp(&self) -> f64 {
        self.hp * self.count as f64
    }

    pub fn total_attack(&self) -> f64 {
        self.attack * self.count as f64
    }

    pub fn has_ability(&self, ability: SpecialAbility) -> bool {
        self.special_ability == Some(ability)
    }
}

/// A monster encounter: waves fought in order, plus its reward table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterDefinition {
    pub id: String,
    pub name: String,
    pub waves: Vec<Wave>,
    #[serde(default)]
    pub rewards: ResourceMap,
    /// Victories that pay out the full reward
    pub max_rewarded_wins: u32,
    #[serde(default)]
    pub xp_reward: u64,
    #[serde(default)]
    pub requires: Vec<BuildingRequirement>,
}

impl MonsterDefinition {
    pub fn total_hp(&self) -> f64 {
        self.waves.iter().map(Wave::total_hp).sum()
    }
}
