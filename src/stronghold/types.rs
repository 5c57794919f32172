//! Building identifiers, building levels and HQ-derived bonuses.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::combat::BuildingBonus;
use crate::core::constants::{HQ_ATTACK_BONUS_PER_LEVEL, HQ_DEFENSE_BONUS_PER_LEVEL};

/// Buildings that can appear in stage requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingId {
    Headquarters,
    Barracks,
    Forge,
    Academy,
    WatchTower,
    Wall,
}

impl BuildingId {
    pub const ALL: [BuildingId; 6] = [
        BuildingId::Headquarters,
        BuildingId::Barracks,
        BuildingId::Forge,
        BuildingId::Academy,
        BuildingId::WatchTower,
        BuildingId::Wall,
    ];

    /// Display name for lock reasons
    pub fn name(&self) -> &'static str {
        match self {
            BuildingId::Headquarters => "Headquarters",
            BuildingId::Barracks => "Barracks",
            BuildingId::Forge => "Forge",
            BuildingId::Academy => "Academy",
            BuildingId::WatchTower => "Watch Tower",
            BuildingId::Wall => "Wall",
        }
    }
}

/// A single `(building, minimum level)` gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingRequirement {
    pub building: BuildingId,
    pub min_level: u32,
}

impl BuildingRequirement {
    pub fn new(building: BuildingId, min_level: u32) -> Self {
        Self {
            building,
            min_level,
        }
    }
}

/// Read-only lookup of current building levels.
pub trait BuildingLevels {
    fn level_of(&self, building: BuildingId) -> u32;
}

impl<F> BuildingLevels for F
where
    F: Fn(BuildingId) -> u32,
{
    fn level_of(&self, building: BuildingId) -> u32 {
        self(building)
    }
}

/// Current building levels of the player's base
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stronghold {
    levels: HashMap<BuildingId, u32>,
}

impl Stronghold {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level of a building (0 = unbuilt)
    pub fn level(&self, building: BuildingId) -> u32 {
        self.levels.get(&building).copied().unwrap_or(0)
    }

    pub fn set_level(&mut self, building: BuildingId, level: u32) {
        if level == 0 {
            self.levels.remove(&building);
        } else {
            self.levels.insert(building, level);
        }
    }

    /// Raise a building by one level, returning the new level.
    pub fn upgrade(&mut self, building: BuildingId) -> u32 {
        let next = self.level(building) + 1;
        self.levels.insert(building, next);
        next
    }

    /// Count of buildings at level 1 or above
    pub fn buildings_built(&self) -> usize {
        self.levels.values().filter(|&&l| l >= 1).count()
    }

    /// Flat attack/defense bonus granted by the Headquarters level.
    pub fn building_bonus(&self) -> BuildingBonus {
        BuildingBonus::for_headquarters(self.level(BuildingId::Headquarters))
    }
}

impl BuildingLevels for Stronghold {
    fn level_of(&self, building: BuildingId) -> u32 {
        self.level(building)
    }
}

impl BuildingBonus {
    pub fn for_headquarters(level: u32) -> Self {
        Self {
            attack_bonus: level as f64 * HQ_ATTACK_BONUS_PER_LEVEL,
            defense_bonus: level as f64 * HQ_DEFENSE_BONUS_PER_LEVEL,
        }
    }
}
