use rand::Rng;
use std::collections::HashMap;

use super::types::EncounterModifier;

/// Rolls encounter modifiers and holds the result per stage until consumed.
///
/// Per stage the lifecycle is `NONE -> ROLLED -> (consumed) NONE`. A roll
/// that lands on "no modifier" still counts as rolled.
#[derive(Debug, Clone, Default)]
pub struct ModifierRoller {
    modifiers: Vec<EncounterModifier>,
    pending: HashMap<String, Option<EncounterModifier>>,
}

impl ModifierRoller {
    pub fn new(modifiers: Vec<EncounterModifier>) -> Self {
        Self {
            modifiers,
            pending: HashMap::new(),
        }
    }

    pub fn modifiers(&self) -> &[EncounterModifier] {
        &self.modifiers
    }

    /// Draws a modifier for `stage_id`, replacing anything already pending.
    pub fn roll<R: Rng>(&mut self, stage_id: &str, rng: &mut R) -> Option<EncounterModifier> {
        let draw = rng.gen::<f64>();
        let selected = self.select(draw).cloned();
        tracing::debug!(
            stage_id,
            modifier = selected.as_ref().map(|m| m.id.as_str()).unwrap_or("none"),
            "rolled encounter modifier"
        );
        self.pending.insert(stage_id.to_string(), selected.clone());
        selected
    }

    /// Walks the table accumulating chance; the first modifier whose cumulative
    /// probability exceeds `draw` wins.
    fn select(&self, draw: f64) -> Option<&EncounterModifier> {
        let mut cumulative = 0.0;
        for modifier in &self.modifiers {
            cumulative += modifier.chance;
            if draw < cumulative {
                return Some(modifier);
            }
        }
        None
    }

    /// Removes and returns the pending modifier. A second call returns `None`.
    pub fn consume(&mut self, stage_id: &str) -> Option<EncounterModifier> {
        self.pending.remove(stage_id).flatten()
    }

    /// Peeks at the pending modifier without consuming it.
    pub fn pending(&self, stage_id: &str) -> Option<&EncounterModifier> {
        self.pending.get(stage_id).and_then(|m| m.as_ref())
    }

    /// Whether a roll is waiting for `stage_id`, including a "no modifier" roll.
    pub fn has_rolled(&self, stage_id: &str) -> bool {
        self.pending.contains_key(stage_id)
    }
}
