use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use super::collaborators::Collaborators;
use super::events::{CombatEvent, CombatObserver};
use crate::army::{unit_count, UnitStack};
use crate::battle_log::{BattleLog, BattleLogEntry};
use crate::combat::{simulate, BattleResult, CombatBonuses, TechBonus};
use crate::config::GameConfig;
use crate::core::constants::{FULL_REWARD_MULTIPLIER, HERO_XP_DIVISOR};
use crate::core::AttackError;
use crate::modifiers::{EncounterModifier, ModifierRoller};
use crate::monsters::ResourceMap;
use crate::progression::{derive_state, scale_amount, scale_rewards, AnnotatedStage, ProgressionTracker};
use crate::save_manager::CombatSaveData;
use crate::stronghold::BuildingLevels;

/// Outcome of a successful attack, including the events it produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttackReport {
    pub monster_id: String,
    pub squad_id: String,
    pub result: BattleResult,
    /// Resources actually credited. Empty on defeat.
    pub rewards: ResourceMap,
    pub player_xp: u64,
    pub hero_xp: u64,
    pub reward_reduced: bool,
    pub modifier: Option<EncounterModifier>,
    pub events: Vec<CombatEvent>,
}

impl AttackReport {
    pub fn victory(&self) -> bool {
        self.result.victory
    }
}

/// Owns the combat state: pending modifiers, victory counters, the battle log
/// and the cached tech snapshot.
pub struct CombatOrchestrator {
    config: GameConfig,
    roller: ModifierRoller,
    progression: ProgressionTracker,
    log: BattleLog,
    tech: TechBonus,
    observer: Option<Box<dyn CombatObserver>>,
}

impl CombatOrchestrator {
    pub fn new(config: GameConfig) -> Self {
        let roller = ModifierRoller::new(config.modifiers.clone());
        Self {
            config,
            roller,
            progression: ProgressionTracker::new(),
            log: BattleLog::new(),
            tech: TechBonus::default(),
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: impl CombatObserver + 'static) -> Self {
        self.set_observer(observer);
        self
    }

    pub fn set_observer(&mut self, observer: impl CombatObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replaces the cached tech snapshot. Called whenever research changes.
    pub fn set_tech_bonus(&mut self, tech: TechBonus) {
        self.tech = tech;
    }

    pub fn tech_bonus(&self) -> TechBonus {
        self.tech
    }

    /// Pre-rolls the encounter modifier for a stage.
    pub fn roll_modifier<R: Rng>(&mut self, stage_id: &str, rng: &mut R) -> Option<EncounterModifier> {
        self.roller.roll(stage_id, rng)
    }

    pub fn pending_modifier(&self, stage_id: &str) -> Option<&EncounterModifier> {
        self.roller.pending(stage_id)
    }

    /// Resolves an attack of `squad_id` against `monster_id`.
    ///
    /// Rejections happen before anything is touched. On success the pending
    /// modifier is consumed, losses are applied, and on victory the scaled
    /// rewards and XP are credited and the victory counter advances. Every
    /// attack that reaches the simulator is logged.
    pub fn attack(
        &mut self,
        monster_id: &str,
        squad_id: &str,
        collaborators: &mut Collaborators<'_>,
    ) -> Result<AttackReport, AttackError> {
        let Some(monster) = self.config.monsters.get(monster_id).cloned() else {
            tracing::warn!(monster_id, squad_id, "attack rejected: unknown target");
            return Err(AttackError::UnknownTarget(monster_id.to_string()));
        };

        let army: Vec<UnitStack> = collaborators
            .army
            .squad_units(squad_id)
            .into_iter()
            .filter(|stack| stack.count > 0)
            .collect();
        if unit_count(&army) == 0 {
            tracing::warn!(monster_id, squad_id, "attack rejected: no units available");
            return Err(AttackError::EmptyArmy(squad_id.to_string()));
        }

        let modifier = self.roller.consume(monster_id);
        let bonuses = CombatBonuses {
            hero: collaborators.bonuses.hero_bonus(squad_id),
            building: collaborators.bonuses.building_bonus(),
            tech: self.tech,
        };

        let mut events = vec![CombatEvent::BattleStarted {
            monster_id: monster.id.clone(),
            squad_id: squad_id.to_string(),
            modifier_id: modifier.as_ref().map(|m| m.id.clone()),
        }];

        let result = simulate(&army, &monster, modifier.as_ref(), &bonuses);
        for wave in &result.wave_details {
            tracing::debug!(
                wave = wave.wave_index,
                name = %wave.name,
                rounds = wave.rounds,
                damage = wave.damage_taken,
                remaining_hp = wave.remaining_hp,
                "wave resolved"
            );
        }

        // Multiplier is taken before this victory is counted.
        let multiplier = self
            .progression
            .reward_multiplier(&monster.id, monster.max_rewarded_wins);
        let reward_reduced = result.victory && multiplier < FULL_REWARD_MULTIPLIER;

        collaborators.army.apply_losses(squad_id, &result.losses);

        let (rewards, player_xp, hero_xp) = if result.victory {
            let rewards = scale_rewards(&monster.rewards, multiplier);
            let player_xp = if monster.xp_reward > 0 {
                scale_amount(monster.xp_reward, multiplier)
            } else {
                0
            };
            let hero_xp = player_xp / HERO_XP_DIVISOR;

            collaborators.resources.credit(&rewards);
            if player_xp > 0 {
                collaborators.experience.grant_player_xp(player_xp);
            }
            if hero_xp > 0 {
                collaborators.experience.grant_hero_xp(hero_xp, squad_id);
            }
            self.progression.record_victory(&monster.id);

            events.push(CombatEvent::BattleVictory {
                monster_id: monster.id.clone(),
                squad_id: squad_id.to_string(),
                rewards: rewards.clone(),
                losses: result.losses.clone(),
                reward_reduced,
            });
            (rewards, player_xp, hero_xp)
        } else {
            events.push(CombatEvent::BattleDefeat {
                monster_id: monster.id.clone(),
                squad_id: squad_id.to_string(),
                losses: result.losses.clone(),
            });
            (ResourceMap::new(), 0, 0)
        };

        self.log.record(BattleLogEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            monster_id: monster.id.clone(),
            monster_name: monster.name.clone(),
            squad_id: squad_id.to_string(),
            victory: result.victory,
            waves_survived: result.waves_survived,
            total_waves: monster.waves.len() as u32,
            rewards: rewards.clone(),
            reward_reduced,
            modifier_id: modifier.as_ref().map(|m| m.id.clone()),
            losses: result.losses.clone(),
        });
        events.push(CombatEvent::LogUpdated {
            entries: self.log.len(),
        });

        tracing::info!(
            monster_id = %monster.id,
            squad_id,
            victory = result.victory,
            waves_survived = result.waves_survived,
            units_lost = result.total_losses(),
            multiplier,
            "battle resolved"
        );

        if let Some(observer) = self.observer.as_mut() {
            for event in &events {
                observer.on_event(event);
            }
        }

        Ok(AttackReport {
            monster_id: monster.id,
            squad_id: squad_id.to_string(),
            result,
            rewards,
            player_xp,
            hero_xp,
            reward_reduced,
            modifier,
            events,
        })
    }

    pub fn victories(&self, monster_id: &str) -> u32 {
        self.progression.victories(monster_id)
    }

    /// Victories that paid in full. Zero for unknown monsters.
    pub fn rewarded_wins(&self, monster_id: &str) -> u32 {
        self.config
            .monsters
            .get(monster_id)
            .map(|m| self.progression.rewarded_wins(monster_id, m.max_rewarded_wins))
            .unwrap_or(0)
    }

    /// Full-reward victories left. Zero for unknown monsters.
    pub fn rewards_remaining(&self, monster_id: &str) -> u32 {
        self.config
            .monsters
            .get(monster_id)
            .map(|m| self.progression.rewards_remaining(monster_id, m.max_rewarded_wins))
            .unwrap_or(0)
    }

    pub fn progression(&self) -> &ProgressionTracker {
        &self.progression
    }

    pub fn battle_log(&self) -> &BattleLog {
        &self.log
    }

    /// Campaign stages annotated with the current counters and building levels.
    pub fn campaign(&self, levels: &dyn BuildingLevels) -> Vec<AnnotatedStage> {
        derive_state(
            &self.config.campaign,
            |id| self.progression.victories(id),
            levels,
        )
    }

    pub fn save_data(&self) -> CombatSaveData {
        CombatSaveData {
            battle_log: self.log.to_vec(),
            victory_counts: self.progression.victory_counts().clone(),
        }
    }

    /// Loads saved state. The log is replaced; counters never go down.
    pub fn restore(&mut self, data: CombatSaveData) {
        self.log = BattleLog::from_entries(data.battle_log);
        self.progression.merge_counts(&data.victory_counts);
    }
}
