//! Static game tables resolved once at startup.
//!
//! The built-in tables can be overridden from a JSON document. Every table
//! is optional in the document; anything left out keeps its built-in value.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::army::{UnitCatalog, UnitStats};
use crate::core::ConfigError;
use crate::modifiers::{builtin_modifiers, validate_modifiers, EncounterModifier};
use crate::monsters::{builtin_monsters, MonsterDefinition, MonsterRegistry};
use crate::progression::CampaignStage;

/// Immutable keyed registries used by combat.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub monsters: MonsterRegistry,
    pub modifiers: Vec<EncounterModifier>,
    pub campaign: Vec<CampaignStage>,
    pub units: UnitCatalog,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    monsters: Option<Vec<MonsterDefinition>>,
    modifiers: Option<Vec<EncounterModifier>>,
    campaign: Option<Vec<CampaignStage>>,
    #[serde(default)]
    units: HashMap<String, UnitStats>,
}

/// One campaign stage per monster, in roster order, gated by the monster's
/// own building requirements.
pub fn campaign_from_monsters(monsters: &MonsterRegistry) -> Vec<CampaignStage> {
    monsters
        .iter()
        .enumerate()
        .map(|(stage_index, monster)| CampaignStage {
            stage_index,
            monster_id: monster.id.clone(),
            requires: monster.requires.clone(),
        })
        .collect()
}

impl GameConfig {
    /// The tables shipped with the game.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_parts(
            builtin_monsters(),
            builtin_modifiers(),
            None,
            UnitCatalog::builtin(),
        )
    }

    /// Assembles and validates a configuration. Without explicit stages the
    /// campaign follows the monster roster.
    pub fn from_parts(
        monsters: Vec<MonsterDefinition>,
        modifiers: Vec<EncounterModifier>,
        campaign: Option<Vec<CampaignStage>>,
        units: UnitCatalog,
    ) -> Result<Self, ConfigError> {
        let monsters = MonsterRegistry::new(monsters)?;
        validate_modifiers(&modifiers)?;

        let campaign = campaign.unwrap_or_else(|| campaign_from_monsters(&monsters));
        if let Some(stage) = campaign.iter().find(|s| !monsters.contains(&s.monster_id)) {
            return Err(ConfigError::UnknownStageMonster(stage.monster_id.clone()));
        }

        Ok(Self {
            monsters,
            modifiers,
            campaign,
            units,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(json)?;

        let mut units = UnitCatalog::builtin();
        for (key, stats) in file.units {
            units.insert(key, stats);
        }

        Self::from_parts(
            file.monsters.unwrap_or_else(builtin_monsters),
            file.modifiers.unwrap_or_else(builtin_modifiers),
            file.campaign,
            units,
        )
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            monsters = config.monsters.len(),
            modifiers = config.modifiers.len(),
            "loaded game config"
        );
        Ok(config)
    }
}
