use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::core::constants::{DEFAULT_UNIT_ATTACK, DEFAULT_UNIT_DEFENSE, DEFAULT_UNIT_HP};

/// Units lost per unit key. Ordered so results compare deterministically.
pub type LossMap = BTreeMap<String, u32>;

/// Per-unit combat stats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitStats {
    pub attack: f64,
    pub defense: f64,
    pub hp: f64,
}

impl Default for UnitStats {
    fn default() -> Self {
        Self {
            attack: DEFAULT_UNIT_ATTACK,
            defense: DEFAULT_UNIT_DEFENSE,
            hp: DEFAULT_UNIT_HP,
        }
    }
}

impl UnitStats {
    pub fn new(attack: f64, defense: f64, hp: f64) -> Self {
        Self { attack, defense, hp }
    }
}

/// A count of identical units with stats already resolved for tier and tech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitStack {
    pub unit_key: String,
    pub count: u32,
    pub attack: f64,
    pub defense: f64,
    pub hp: f64,
}

impl UnitStack {
    pub fn new(unit_key: impl Into<String>, count: u32, stats: UnitStats) -> Self {
        Self {
            unit_key: unit_key.into(),
            count,
            attack: stats.attack,
            defense: stats.defense,
            hp: stats.hp,
        }
    }
}

/// Aggregate army strength. Recomputed for every attack, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArmyTotals {
    pub total_attack: f64,
    pub total_defense: f64,
    pub total_hp: f64,
}

impl ArmyTotals {
    /// Sums `stat × count` across all stacks.
    pub fn from_stacks(stacks: &[UnitStack]) -> Self {
        stacks.iter().fold(Self::default(), |acc, stack| {
            let n = stack.count as f64;
            Self {
                total_attack: acc.total_attack + stack.attack * n,
                total_defense: acc.total_defense + stack.defense * n,
                total_hp: acc.total_hp + stack.hp * n,
            }
        })
    }
}

/// Total number of units across stacks.
pub fn unit_count(stacks: &[UnitStack]) -> u64 {
    stacks.iter().map(|s| s.count as u64).sum()
}

/// Base stats per unit key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitCatalog {
    units: HashMap<String, UnitStats>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The unit roster shipped with the game.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert("militia", UnitStats::new(8.0, 4.0, 80.0));
        catalog.insert("spearman", UnitStats::new(14.0, 10.0, 120.0));
        catalog.insert("archer", UnitStats::new(18.0, 5.0, 90.0));
        catalog.insert("knight", UnitStats::new(30.0, 25.0, 260.0));
        catalog.insert("catapult", UnitStats::new(55.0, 3.0, 150.0));
        catalog
    }

    pub fn insert(&mut self, unit_key: impl Into<String>, stats: UnitStats) {
        self.units.insert(unit_key.into(), stats);
    }

    pub fn get(&self, unit_key: &str) -> Option<UnitStats> {
        self.units.get(unit_key).copied()
    }

    /// Stats for a unit key, falling back to the baseline stats when the key
    /// is not configured.
    pub fn stats_for(&self, unit_key: &str) -> UnitStats {
        match self.get(unit_key) {
            Some(stats) => stats,
            None => {
                tracing::warn!(unit_key, "no stats configured for unit, using defaults");
                UnitStats::default()
            }
        }
    }

    pub fn contains(&self, unit_key: &str) -> bool {
        self.units.contains_key(unit_key)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Merge another catalog into this one; entries in `other` win.
    pub fn extend(&mut self, other: UnitCatalog) {
        self.units.extend(other.units);
    }
}
