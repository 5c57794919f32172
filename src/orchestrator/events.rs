use serde::{Deserialize, Serialize};

use crate::army::LossMap;
use crate::monsters::ResourceMap;

/// Notifications produced at attack boundaries, never mid-computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    BattleStarted {
        monster_id: String,
        squad_id: String,
        modifier_id: Option<String>,
    },
    BattleVictory {
        monster_id: String,
        squad_id: String,
        rewards: ResourceMap,
        losses: LossMap,
        reward_reduced: bool,
    },
    BattleDefeat {
        monster_id: String,
        squad_id: String,
        losses: LossMap,
    },
    LogUpdated {
        entries: usize,
    },
}

/// Optional listener for combat events.
pub trait CombatObserver {
    fn on_event(&mut self, event: &CombatEvent);
}

impl<F> CombatObserver for F
where
    F: FnMut(&CombatEvent),
{
    fn on_event(&mut self, event: &CombatEvent) {
        self(event)
    }
}
