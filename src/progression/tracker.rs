//! Per-monster victory counters and reward scaling.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::constants::{
    DIMINISHED_REWARD_MULTIPLIER, FULL_REWARD_MULTIPLIER, MIN_SCALED_REWARD,
};
use crate::monsters::ResourceMap;

/// Tracks how many times each monster has been defeated.
///
/// Counters only ever go up. They drive the diminishing reward policy: the
/// first `max_rewarded_wins` victories pay in full, later ones pay a tenth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressionTracker {
    victory_counts: HashMap<String, u32>,
}

impl ProgressionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores counters from saved state.
    pub fn from_counts(victory_counts: HashMap<String, u32>) -> Self {
        Self { victory_counts }
    }

    /// Records a victory and returns the new count.
    pub fn record_victory(&mut self, monster_id: &str) -> u32 {
        let count = self.victory_counts.entry(monster_id.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub fn victories(&self, monster_id: &str) -> u32 {
        self.victory_counts.get(monster_id).copied().unwrap_or(0)
    }

    /// Multiplier for the next victory, based on the count before it is recorded.
    pub fn reward_multiplier(&self, monster_id: &str, max_rewarded_wins: u32) -> f64 {
        if self.victories(monster_id) < max_rewarded_wins {
            FULL_REWARD_MULTIPLIER
        } else {
            DIMINISHED_REWARD_MULTIPLIER
        }
    }

    pub fn rewarded_wins(&self, monster_id: &str, max_rewarded_wins: u32) -> u32 {
        self.victories(monster_id).min(max_rewarded_wins)
    }

    pub fn rewards_remaining(&self, monster_id: &str, max_rewarded_wins: u32) -> u32 {
        max_rewarded_wins.saturating_sub(self.victories(monster_id))
    }

    pub fn victory_counts(&self) -> &HashMap<String, u32> {
        &self.victory_counts
    }

    /// Merges saved counts without ever lowering a counter.
    pub fn merge_counts(&mut self, counts: &HashMap<String, u32>) {
        for (id, &saved) in counts {
            let current = self.victory_counts.entry(id.clone()).or_insert(0);
            *current = (*current).max(saved);
        }
    }
}

/// Applies a reward multiplier: `max(1, floor(amount × multiplier))` per entry.
pub fn scale_rewards(base: &ResourceMap, multiplier: f64) -> ResourceMap {
    base.iter()
        .map(|(&resource, &amount)| (resource, scale_amount(amount, multiplier)))
        .collect()
}

/// Scales a single amount with the same floor-then-minimum rule.
pub fn scale_amount(amount: u64, multiplier: f64) -> u64 {
    ((amount as f64 * multiplier).floor() as u64).max(MIN_SCALED_REWARD)
}
