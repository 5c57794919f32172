//! Campaign stage gating.
//!
//! Stage state is derived on demand from victory counts and building levels;
//! nothing here is stored. A stage opens once the previous stage has been won
//! and every building requirement is met.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::stronghold::{BuildingId, BuildingLevels, BuildingRequirement};

/// One node of the linear campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignStage {
    pub stage_index: usize,
    pub monster_id: String,
    #[serde(default)]
    pub requires: Vec<BuildingRequirement>,
}

/// A building requirement the player has not reached yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmetRequirement {
    pub building: BuildingId,
    pub required: u32,
    pub current: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockReason {
    PreviousStageIncomplete,
    MissingBuildings(Vec<UnmetRequirement>),
}

impl fmt::Display for LockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockReason::PreviousStageIncomplete => write!(f, "Complete the previous stage first"),
            LockReason::MissingBuildings(unmet) => {
                let parts: Vec<String> = unmet
                    .iter()
                    .map(|u| format!("{} Lv {}", u.building.name(), u.required))
                    .collect();
                write!(f, "Requires {}", parts.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedStage {
    pub stage: CampaignStage,
    pub is_completed: bool,
    pub is_locked: bool,
    pub is_available: bool,
    pub lock_reason: Option<LockReason>,
}

fn unmet_requirements(
    requires: &[BuildingRequirement],
    levels: &dyn BuildingLevels,
) -> Vec<UnmetRequirement> {
    requires
        .iter()
        .filter_map(|req| {
            let current = levels.level_of(req.building);
            (current < req.min_level).then_some(UnmetRequirement {
                building: req.building,
                required: req.min_level,
                current,
            })
        })
        .collect()
}

/// Annotates each stage with completion, lock and availability flags.
///
/// An incomplete previous stage always takes precedence over missing
/// buildings as the lock reason.
pub fn derive_state<V>(
    stages: &[CampaignStage],
    victories: V,
    levels: &dyn BuildingLevels,
) -> Vec<AnnotatedStage>
where
    V: Fn(&str) -> u32,
{
    stages
        .iter()
        .enumerate()
        .map(|(i, stage)| {
            let unmet = unmet_requirements(&stage.requires, levels);
            let requirements_met = unmet.is_empty();
            let previous_completed = i == 0 || victories(stages[i - 1].monster_id.as_str()) > 0;
            let is_completed = victories(stage.monster_id.as_str()) > 0;

            let lock_reason = if !previous_completed {
                Some(LockReason::PreviousStageIncomplete)
            } else if !requirements_met {
                Some(LockReason::MissingBuildings(unmet))
            } else {
                None
            };

            AnnotatedStage {
                stage: stage.clone(),
                is_completed,
                is_locked: lock_reason.is_some(),
                is_available: requirements_met && previous_completed && !is_completed,
                lock_reason,
            }
        })
        .collect()
}
