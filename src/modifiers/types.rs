use serde::{Deserialize, Serialize};

use crate::core::ConfigError;
use crate::monsters::Wave;

/// Multiplicative adjustment applied to every wave of an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatAdjustment {
    pub hp_mult: f64,
    pub attack_mult: f64,
}

impl Default for StatAdjustment {
    fn default() -> Self {
        Self {
            hp_mult: 1.0,
            attack_mult: 1.0,
        }
    }
}

impl StatAdjustment {
    pub fn apply(&self, wave: &Wave) -> Wave {
        Wave {
            hp: wave.hp * self.hp_mult,
            attack: wave.attack * self.attack_mult,
            ..wave.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterModifier {
    pub id: String,
    pub name: String,
    /// Probability of being rolled, in [0, 1]
    pub chance: f64,
    #[serde(default)]
    pub stat_adjustment: StatAdjustment,
    #[serde(default)]
    pub player_attack_mult: Option<f64>,
    #[serde(default)]
    pub player_hp_mult: Option<f64>,
}

impl EncounterModifier {
    pub fn player_attack_mult(&self) -> f64 {
        self.player_attack_mult.unwrap_or(1.0)
    }

    pub fn player_hp_mult(&self) -> f64 {
        self.player_hp_mult.unwrap_or(1.0)
    }
}

/// Checks each chance is a probability and that together they leave room for
/// "no modifier".
pub fn validate_modifiers(modifiers: &[EncounterModifier]) -> Result<(), ConfigError> {
    let mut total = 0.0;
    for modifier in modifiers {
        if !(0.0..=1.0).contains(&modifier.chance) {
            return Err(ConfigError::InvalidModifierChance {
                id: modifier.id.clone(),
                chance: modifier.chance,
            });
        }
        total += modifier.chance;
    }
    // Allow for float accumulation error on tables that sum to exactly 1.
    if total > 1.0 + 1e-9 {
        return Err(ConfigError::ModifierChanceOverflow { total });
    }
    Ok(())
}
