use serde::{Deserialize, Serialize};

use crate::army::LossMap;
use crate::monsters::SpecialAbility;

/// Skills a squad's hero can bring into battle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeroSkill {
    /// Additive attack multiplier for the opening wave
    Rally { attack_bonus: f64 },
    /// The opening wave deals no damage
    Evasion,
    /// Opening wave damage is reduced by this fraction
    Bulwark { defense_bonus: f64 },
}

/// Bonuses from the hero leading a squad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroBonus {
    pub attack_mult: f64,
    pub defense_mult: f64,
    pub loss_reduction: f64,
    pub active_skills: Vec<HeroSkill>,
    /// Fraction of fallen units restored after a victory
    pub post_battle_heal_fraction: f64,
}

impl Default for HeroBonus {
    fn default() -> Self {
        Self {
            attack_mult: 1.0,
            defense_mult: 1.0,
            loss_reduction: 0.0,
            active_skills: Vec::new(),
            post_battle_heal_fraction: 0.0,
        }
    }
}

/// Headquarters-derived bonuses (fractions, 0.1 = +10%)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingBonus {
    pub attack_bonus: f64,
    pub defense_bonus: f64,
}

/// Snapshot of researched technology bonuses (fractions)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechBonus {
    pub attack_bonus: f64,
    pub defense_bonus: f64,
    pub hp_bonus: f64,
    pub first_wave_bonus: f64,
    pub loss_reduction: f64,
}

/// Everything outside the army itself that scales a battle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombatBonuses {
    pub hero: HeroBonus,
    pub building: BuildingBonus,
    pub tech: TechBonus,
}

/// Opening-wave effects collected from tech and hero skills.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FirstWaveEffects {
    pub attack_bonus: f64,
    pub evasion: bool,
    pub defense_bonus: f64,
}

impl CombatBonuses {
    pub fn first_wave_effects(&self) -> FirstWaveEffects {
        let mut effects = FirstWaveEffects {
            attack_bonus: self.tech.first_wave_bonus,
            ..Default::default()
        };
        for skill in &self.hero.active_skills {
            match *skill {
                HeroSkill::Rally { attack_bonus } => effects.attack_bonus += attack_bonus,
                HeroSkill::Evasion => effects.evasion = true,
                HeroSkill::Bulwark { defense_bonus } => effects.defense_bonus += defense_bonus,
            }
        }
        effects.defense_bonus = effects.defense_bonus.clamp(0.0, 1.0);
        effects
    }

    /// Combined loss reduction from hero and tech, never more than 100%.
    pub fn loss_reduction(&self) -> f64 {
        (self.hero.loss_reduction + self.tech.loss_reduction).clamp(0.0, 1.0)
    }
}

/// What happened while fighting one wave (or its revived remnant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveOutcome {
    pub wave_index: usize,
    pub name: String,
    pub wave_hp: f64,
    pub rounds: u32,
    pub damage_taken: f64,
    pub remaining_hp: f64,
    pub ability_used: Option<SpecialAbility>,
    pub revived: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleResult {
    pub victory: bool,
    pub losses: LossMap,
    pub waves_survived: u32,
    pub wave_details: Vec<WaveOutcome>,
    /// Remaining HP over initial HP, within [0, 1]
    pub survival_rate: f64,
    pub initial_player_hp: f64,
    pub remaining_player_hp: f64,
}

impl BattleResult {
    pub fn total_losses(&self) -> u64 {
        self.losses.values().map(|&n| n as u64).sum()
    }

    pub fn total_damage_taken(&self) -> f64 {
        self.wave_details.iter().map(|w| w.damage_taken).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_wave_effects_combine_tech_and_skills() {
        let bonuses = CombatBonuses {
            hero: HeroBonus {
                active_skills: vec![
                    HeroSkill::Rally { attack_bonus: 0.2 },
                    HeroSkill::Bulwark { defense_bonus: 0.25 },
                ],
                ..Default::default()
            },
            tech: TechBonus {
                first_wave_bonus: 0.1,
                ..Default::default()
            },
            ..Default::default()
        };
        let effects = bonuses.first_wave_effects();
        assert!((effects.attack_bonus - 0.3).abs() < 1e-9);
        assert!((effects.defense_bonus - 0.25).abs() < 1e-9);
        assert!(!effects.evasion);
    }

    #[test]
    fn test_bulwark_stacks_are_capped() {
        let bonuses = CombatBonuses {
            hero: HeroBonus {
                active_skills: vec![
                    HeroSkill::Bulwark { defense_bonus: 0.8 },
                    HeroSkill::Bulwark { defense_bonus: 0.8 },
                ],
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(bonuses.first_wave_effects().defense_bonus, 1.0);
    }

    #[test]
    fn test_loss_reduction_capped() {
        let bonuses = CombatBonuses {
            hero: HeroBonus {
                loss_reduction: 0.7,
                ..Default::default()
            },
            tech: TechBonus {
                loss_reduction: 0.6,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(bonuses.loss_reduction(), 1.0);
    }

    #[test]
    fn test_hero_skill_serde_tagged() {
        let json = serde_json::to_string(&HeroSkill::Rally { attack_bonus: 0.5 }).unwrap();
        assert!(json.contains("\"kind\":\"rally\""));
        let skill: HeroSkill = serde_json::from_str("{\"kind\":\"evasion\"}").unwrap();
        assert_eq!(skill, HeroSkill::Evasion);
    }
}
