//! Pure battle resolution.
//!
//! [`simulate`] turns an army, a monster, an optional encounter modifier and
//! the external bonuses into a [`BattleResult`]. It has no side effects and
//! no randomness: identical inputs always produce an identical result.

use super::types::{BattleResult, CombatBonuses, WaveOutcome};
use crate::army::{ArmyTotals, LossMap, UnitStack};
use crate::core::constants::*;
use crate::modifiers::EncounterModifier;
use crate::monsters::{MonsterDefinition, SpecialAbility, Wave};

/// Army totals after hero, building, tech and modifier multipliers.
pub fn effective_totals(
    army: &[UnitStack],
    modifier: Option<&EncounterModifier>,
    bonuses: &CombatBonuses,
) -> ArmyTotals {
    let base = ArmyTotals::from_stacks(army);
    let (attack_mult, hp_mult) = modifier
        .map(|m| (m.player_attack_mult(), m.player_hp_mult()))
        .unwrap_or((1.0, 1.0));

    ArmyTotals {
        total_attack: base.total_attack
            * bonuses.hero.attack_mult
            * (1.0 + bonuses.building.attack_bonus)
            * (1.0 + bonuses.tech.attack_bonus)
            * attack_mult,
        total_defense: base.total_defense
            * bonuses.hero.defense_mult
            * (1.0 + bonuses.building.defense_bonus)
            * (1.0 + bonuses.tech.defense_bonus),
        total_hp: base.total_hp * (1.0 + bonuses.tech.hp_bonus) * hp_mult,
    }
}

/// The waves as they will be fought. Identity when there is no modifier.
pub fn adjust_waves(waves: &[Wave], modifier: Option<&EncounterModifier>) -> Vec<Wave> {
    match modifier {
        Some(m) => waves.iter().map(|w| m.stat_adjustment.apply(w)).collect(),
        None => waves.to_vec(),
    }
}

/// Rounds needed to clear `wave_hp`. Attack is floored at 1 so an army with
/// no attack still terminates.
pub fn rounds_to_clear(wave_hp: f64, player_attack: f64) -> u32 {
    (wave_hp / player_attack.max(MIN_EFFECTIVE_ATTACK)).ceil() as u32
}

/// Damage the player takes over a full fight against one wave.
pub fn damage_over_rounds(damage_per_round: f64, rounds: u32) -> f64 {
    damage_per_round * rounds as f64 * ROUND_DAMAGE_FACTOR
}

/// Casualty rate applied to every stack.
pub fn loss_rate(victory: bool, survival_rate: f64, bonuses: &CombatBonuses) -> f64 {
    if victory {
        (1.0 - survival_rate).max(MIN_VICTORY_LOSS_RATE) * (1.0 - bonuses.loss_reduction())
    } else {
        DEFEAT_BASE_LOSS_RATE + (1.0 - survival_rate) * DEFEAT_SCALED_LOSS_RATE
    }
}

/// Units lost per stack, each rounded and capped at the stack's count.
pub fn compute_losses(army: &[UnitStack], rate: f64) -> LossMap {
    let mut losses = LossMap::new();
    for stack in army {
        let lost = ((stack.count as f64 * rate).round() as u32).min(stack.count);
        if lost > 0 {
            *losses.entry(stack.unit_key.clone()).or_insert(0) += lost;
        }
    }
    losses
}

/// Passive hero heal: brings back `floor(lost × fraction)` units per stack.
pub fn apply_post_battle_heal(losses: &mut LossMap, heal_fraction: f64) {
    let fraction = heal_fraction.clamp(0.0, 1.0);
    if fraction <= 0.0 {
        return;
    }
    for lost in losses.values_mut() {
        let restored = ((*lost as f64 * fraction).floor() as u32).min(*lost);
        *lost -= restored;
    }
    losses.retain(|_, lost| *lost > 0);
}

/// Resolves a full encounter.
pub fn simulate(
    army: &[UnitStack],
    monster: &MonsterDefinition,
    modifier: Option<&EncounterModifier>,
    bonuses: &CombatBonuses,
) -> BattleResult {
    let totals = effective_totals(army, modifier, bonuses);
    let initial_hp = totals.total_hp;

    if monster.waves.is_empty() {
        return BattleResult {
            victory: true,
            losses: LossMap::new(),
            waves_survived: 0,
            wave_details: Vec::new(),
            survival_rate: 1.0,
            initial_player_hp: initial_hp,
            remaining_player_hp: initial_hp,
        };
    }

    let waves = adjust_waves(&monster.waves, modifier);
    let first_wave = bonuses.first_wave_effects();

    let mut remaining_hp = initial_hp;
    let mut waves_survived = 0;
    let mut wave_details = Vec::with_capacity(waves.len());

    for (index, wave) in waves.iter().enumerate() {
        if remaining_hp <= 0.0 {
            break;
        }

        let base_wave_hp = wave.total_hp();
        let mut wave_hp = base_wave_hp;
        if wave.has_ability(SpecialAbility::Heal) {
            wave_hp += wave_hp * wave.ability_value;
        }

        let mut damage_per_round = (wave.total_attack()
            - totals.total_defense * DEFENSE_MITIGATION_FACTOR)
            .max(MIN_DAMAGE_PER_ROUND);
        if wave.has_ability(SpecialAbility::AoeBlast) {
            damage_per_round += remaining_hp * wave.ability_value;
        }

        let mut player_attack = totals.total_attack;
        if index == 0 {
            player_attack *= 1.0 + first_wave.attack_bonus;
            if first_wave.evasion {
                damage_per_round = 0.0;
            } else {
                damage_per_round *= 1.0 - first_wave.defense_bonus;
            }
        }

        let rounds = rounds_to_clear(wave_hp, player_attack);
        let damage_taken = damage_over_rounds(damage_per_round, rounds);
        remaining_hp = (remaining_hp - damage_taken).max(0.0);
        wave_details.push(WaveOutcome {
            wave_index: index,
            name: wave.name.clone(),
            wave_hp,
            rounds,
            damage_taken,
            remaining_hp,
            ability_used: wave.special_ability,
            revived: false,
        });

        if wave.has_ability(SpecialAbility::Revive) && remaining_hp > 0.0 {
            let revived_hp = base_wave_hp * wave.ability_value;
            let rounds = rounds_to_clear(revived_hp, player_attack);
            let damage_taken = damage_over_rounds(damage_per_round, rounds);
            remaining_hp = (remaining_hp - damage_taken).max(0.0);
            wave_details.push(WaveOutcome {
                wave_index: index,
                name: format!("{}{}", wave.name, REVIVED_WAVE_SUFFIX),
                wave_hp: revived_hp,
                rounds,
                damage_taken,
                remaining_hp,
                ability_used: Some(SpecialAbility::Revive),
                revived: true,
            });
        }

        if remaining_hp > 0.0 {
            waves_survived += 1;
        }
    }

    let victory = remaining_hp > 0.0;
    let survival_rate = if initial_hp > 0.0 {
        (remaining_hp / initial_hp).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let mut losses = compute_losses(army, loss_rate(victory, survival_rate, bonuses));
    if victory {
        apply_post_battle_heal(&mut losses, bonuses.hero.post_battle_heal_fraction);
    }

    BattleResult {
        victory,
        losses,
        waves_survived,
        wave_details,
        survival_rate,
        initial_player_hp: initial_hp,
        remaining_player_hp: remaining_hp,
    }
}
