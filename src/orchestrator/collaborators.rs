//! Interfaces to the systems combat reads from and writes to, plus simple
//! in-memory implementations.

use std::collections::HashMap;

use crate::army::{LossMap, UnitStack};
use crate::combat::{BuildingBonus, HeroBonus};
use crate::monsters::{Resource, ResourceMap};
use crate::stronghold::Stronghold;

/// Source of squad compositions and sink for casualties.
pub trait ArmyProvider {
    fn squad_units(&self, squad_id: &str) -> Vec<UnitStack>;
    fn apply_losses(&mut self, squad_id: &str, losses: &LossMap);
}

/// Hero and building bonuses. Missing providers fall back to neutral bonuses.
pub trait BonusProvider {
    fn hero_bonus(&self, _squad_id: &str) -> HeroBonus {
        HeroBonus::default()
    }

    fn building_bonus(&self) -> BuildingBonus {
        BuildingBonus::default()
    }
}

pub trait ResourceSink {
    fn credit(&mut self, resources: &ResourceMap);
}

pub trait ExperienceSink {
    fn grant_player_xp(&mut self, amount: u64);
    fn grant_hero_xp(&mut self, amount: u64, squad_id: &str);
}

/// The collaborators one attack talks to.
pub struct Collaborators<'a> {
    pub army: &'a mut dyn ArmyProvider,
    pub bonuses: &'a dyn BonusProvider,
    pub resources: &'a mut dyn ResourceSink,
    pub experience: &'a mut dyn ExperienceSink,
}

/// Neutral bonuses for every squad.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBonuses;

impl BonusProvider for NoBonuses {}

impl BonusProvider for Stronghold {
    fn building_bonus(&self) -> BuildingBonus {
        Stronghold::building_bonus(self)
    }
}

/// Fixed hero bonuses per squad plus a fixed building bonus.
#[derive(Debug, Clone, Default)]
pub struct StaticBonuses {
    pub heroes: HashMap<String, HeroBonus>,
    pub building: BuildingBonus,
}

impl BonusProvider for StaticBonuses {
    fn hero_bonus(&self, squad_id: &str) -> HeroBonus {
        self.heroes.get(squad_id).cloned().unwrap_or_default()
    }

    fn building_bonus(&self) -> BuildingBonus {
        self.building
    }
}

/// In-memory resource balances.
#[derive(Debug, Clone, Default)]
pub struct Treasury {
    balances: ResourceMap,
}

impl Treasury {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self, resource: Resource) -> u64 {
        self.balances.get(&resource).copied().unwrap_or(0)
    }

    pub fn balances(&self) -> &ResourceMap {
        &self.balances
    }
}

impl ResourceSink for Treasury {
    fn credit(&mut self, resources: &ResourceMap) {
        for (&resource, &amount) in resources {
            let balance = self.balances.entry(resource).or_insert(0);
            *balance = balance.saturating_add(amount);
        }
    }
}

/// In-memory player and hero experience totals.
#[derive(Debug, Clone, Default)]
pub struct ExperienceLedger {
    pub player_xp: u64,
    pub hero_xp: HashMap<String, u64>,
}

impl ExperienceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hero_xp(&self, squad_id: &str) -> u64 {
        self.hero_xp.get(squad_id).copied().unwrap_or(0)
    }
}

impl ExperienceSink for ExperienceLedger {
    fn grant_player_xp(&mut self, amount: u64) {
        self.player_xp = self.player_xp.saturating_add(amount);
    }

    fn grant_hero_xp(&mut self, amount: u64, squad_id: &str) {
        let xp = self.hero_xp.entry(squad_id.to_string()).or_insert(0);
        *xp = xp.saturating_add(amount);
    }
}
