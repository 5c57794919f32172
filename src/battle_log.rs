//! Bounded history of resolved attacks, newest first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

use crate::army::LossMap;
use crate::core::constants::BATTLE_LOG_CAPACITY;
use crate::monsters::ResourceMap;

/// Immutable snapshot of one resolved attack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleLogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub monster_id: String,
    pub monster_name: String,
    pub squad_id: String,
    pub victory: bool,
    pub waves_survived: u32,
    pub total_waves: u32,
    /// Rewards actually credited, after diminishing returns
    pub rewards: ResourceMap,
    pub reward_reduced: bool,
    pub modifier_id: Option<String>,
    pub losses: LossMap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleLog {
    entries: VecDeque<BattleLogEntry>,
    capacity: usize,
}

impl Default for BattleLog {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleLog {
    pub fn new() -> Self {
        Self::with_capacity(BATTLE_LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuilds a log from saved entries (newest first), dropping any beyond capacity.
    pub fn from_entries(entries: Vec<BattleLogEntry>) -> Self {
        let mut log = Self::new();
        log.entries.extend(entries.into_iter().take(log.capacity));
        log
    }

    /// Inserts at the front, evicting the oldest entry when full.
    pub fn record(&mut self, entry: BattleLogEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Entries, newest first.
    pub fn list(&self) -> impl Iterator<Item = &BattleLogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&BattleLogEntry> {
        self.entries.front()
    }

    pub fn to_vec(&self) -> Vec<BattleLogEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
