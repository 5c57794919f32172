//! In-memory squad store backed by the unit catalog.

use std::collections::{BTreeMap, HashMap};

use super::types::{LossMap, UnitCatalog, UnitStack};
use crate::orchestrator::ArmyProvider;

/// Squads of units, resolved to stacks through a [`UnitCatalog`].
#[derive(Debug, Clone, Default)]
pub struct Garrison {
    catalog: UnitCatalog,
    squads: HashMap<String, BTreeMap<String, u32>>,
}

impl Garrison {
    pub fn new(catalog: UnitCatalog) -> Self {
        Self {
            catalog,
            squads: HashMap::new(),
        }
    }

    pub fn add_units(&mut self, squad_id: &str, unit_key: &str, count: u32) {
        if count == 0 {
            return;
        }
        let units = self.squads.entry(squad_id.to_string()).or_default();
        let current = units.entry(unit_key.to_string()).or_insert(0);
        *current = current.saturating_add(count);
    }

    pub fn unit_count(&self, squad_id: &str, unit_key: &str) -> u32 {
        self.squads
            .get(squad_id)
            .and_then(|units| units.get(unit_key))
            .copied()
            .unwrap_or(0)
    }

    pub fn squad_size(&self, squad_id: &str) -> u64 {
        self.squads
            .get(squad_id)
            .map(|units| units.values().map(|&n| n as u64).sum())
            .unwrap_or(0)
    }

    pub fn catalog(&self) -> &UnitCatalog {
        &self.catalog
    }
}

impl ArmyProvider for Garrison {
    fn squad_units(&self, squad_id: &str) -> Vec<UnitStack> {
        let Some(units) = self.squads.get(squad_id) else {
            return Vec::new();
        };
        units
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(key, &count)| UnitStack::new(key.as_str(), count, self.catalog.stats_for(key)))
            .collect()
    }

    fn apply_losses(&mut self, squad_id: &str, losses: &LossMap) {
        let Some(units) = self.squads.get_mut(squad_id) else {
            return;
        };
        for (key, &lost) in losses {
            if let Some(count) = units.get_mut(key) {
                *count = count.saturating_sub(lost);
            }
        }
        units.retain(|_, count| *count > 0);
    }
}
