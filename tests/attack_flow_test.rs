//! End-to-end attacks through the CombatOrchestrator with in-memory
//! collaborators: rewards, diminishing returns, the battle log, modifiers,
//! hero bonuses and persistence.

use skirmish::army::{Garrison, UnitCatalog};
use skirmish::combat::{HeroBonus, HeroSkill};
use skirmish::modifiers::{builtin_modifiers, EncounterModifier};
use skirmish::monsters::{builtin_monsters, Resource};
use skirmish::orchestrator::{
    BonusProvider, Collaborators, CombatEvent, ExperienceLedger, NoBonuses, StaticBonuses,
    Treasury,
};
use skirmish::save_manager::SaveManager;
use skirmish::{AttackError, CombatOrchestrator, GameConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicU64, Ordering};

struct Sandbox {
    garrison: Garrison,
    treasury: Treasury,
    ledger: ExperienceLedger,
}

impl Sandbox {
    fn with_units(unit: &str, count: u32) -> Self {
        let mut garrison = Garrison::new(UnitCatalog::builtin());
        garrison.add_units("squad-1", unit, count);
        Self {
            garrison,
            treasury: Treasury::new(),
            ledger: ExperienceLedger::new(),
        }
    }

    fn collaborators<'a>(&'a mut self, bonuses: &'a dyn BonusProvider) -> Collaborators<'a> {
        Collaborators {
            army: &mut self.garrison,
            bonuses,
            resources: &mut self.treasury,
            experience: &mut self.ledger,
        }
    }
}

fn builtin_orchestrator() -> CombatOrchestrator {
    CombatOrchestrator::new(GameConfig::builtin().unwrap())
}

fn config_with_only(modifier_id: &str) -> GameConfig {
    let modifier: EncounterModifier = builtin_modifiers()
        .into_iter()
        .find(|m| m.id == modifier_id)
        .map(|m| EncounterModifier { chance: 1.0, ..m })
        .unwrap();
    GameConfig::from_parts(builtin_monsters(), vec![modifier], None, UnitCatalog::builtin())
        .unwrap()
}

#[test]
fn test_sixth_victory_credits_fifteen_gold() {
    let mut combat = builtin_orchestrator();
    let mut sandbox = Sandbox::with_units("spearman", 1000);

    for _ in 0..5 {
        combat
            .attack("wolf_pack", "squad-1", &mut sandbox.collaborators(&NoBonuses))
            .unwrap();
    }
    let before = sandbox.treasury.balance(Resource::Gold);
    assert_eq!(before, 750);

    let report = combat
        .attack("wolf_pack", "squad-1", &mut sandbox.collaborators(&NoBonuses))
        .unwrap();
    assert!(report.victory());
    assert!(report.reward_reduced);
    assert_eq!(sandbox.treasury.balance(Resource::Gold) - before, 15);
    assert_eq!(report.rewards.get(&Resource::Food), Some(&9));

    let entry = combat.battle_log().latest().unwrap();
    assert!(entry.reward_reduced);
    assert_eq!(entry.rewards.get(&Resource::Gold), Some(&15));
}

#[test]
fn test_battle_log_keeps_twenty_newest() {
    let mut combat = builtin_orchestrator();
    let mut sandbox = Sandbox::with_units("knight", 2000);

    for _ in 0..25 {
        combat
            .attack("goblin_scouts", "squad-1", &mut sandbox.collaborators(&NoBonuses))
            .unwrap();
    }
    assert_eq!(combat.victories("goblin_scouts"), 25);
    assert_eq!(combat.battle_log().len(), 20);

    // The newest entries are the diminished ones
    let newest = combat.battle_log().latest().unwrap();
    assert_eq!(newest.rewards.get(&Resource::Gold), Some(&8));
    assert_eq!(newest.rewards.get(&Resource::Wood), Some(&4));
}

#[test]
fn test_rejected_attacks_touch_nothing() {
    let mut combat = builtin_orchestrator();
    let mut sandbox = Sandbox::with_units("spearman", 10);

    let unknown = combat.attack("lich_king", "squad-1", &mut sandbox.collaborators(&NoBonuses));
    assert_eq!(unknown.unwrap_err(), AttackError::UnknownTarget("lich_king".to_string()));

    let empty = combat.attack("goblin_scouts", "squad-9", &mut sandbox.collaborators(&NoBonuses));
    assert_eq!(empty.unwrap_err().reason(), "no units available");

    assert!(combat.battle_log().is_empty());
    assert_eq!(sandbox.garrison.unit_count("squad-1", "spearman"), 10);
    assert!(sandbox.treasury.balances().is_empty());
    assert_eq!(sandbox.ledger.player_xp, 0);
}

#[test]
fn test_revive_follows_modifier_adjusted_hp() {
    let mut combat = CombatOrchestrator::new(config_with_only("fortified"));
    let mut sandbox = Sandbox::with_units("knight", 500);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let rolled = combat.roll_modifier("sunken_crypt", &mut rng).unwrap();
    assert_eq!(rolled.id, "fortified");

    let report = combat
        .attack("sunken_crypt", "squad-1", &mut sandbox.collaborators(&NoBonuses))
        .unwrap();
    let first_wave: Vec<_> = report
        .result
        .wave_details
        .iter()
        .filter(|w| w.wave_index == 0)
        .collect();
    assert_eq!(first_wave.len(), 2);
    assert!(!first_wave[0].revived);
    assert!(first_wave[1].revived);
    assert!((first_wave[0].wave_hp - 5040.0).abs() < 1e-6);
    assert!((first_wave[1].wave_hp - 5040.0 * 0.3).abs() < 1e-6);
    assert_eq!(first_wave[1].name, "Skeleton Guard (Revived)");
}

#[test]
fn test_hero_evasion_and_full_heal() {
    let mut combat = builtin_orchestrator();
    let mut sandbox = Sandbox::with_units("spearman", 50);

    let mut bonuses = StaticBonuses::default();
    bonuses.heroes.insert(
        "squad-1".to_string(),
        HeroBonus {
            active_skills: vec![HeroSkill::Evasion],
            post_battle_heal_fraction: 1.0,
            ..Default::default()
        },
    );

    let report = combat
        .attack("wolf_pack", "squad-1", &mut sandbox.collaborators(&bonuses))
        .unwrap();
    assert!(report.victory());
    assert_eq!(report.result.wave_details[0].damage_taken, 0.0);
    assert!(report.result.losses.is_empty());
    assert_eq!(sandbox.garrison.unit_count("squad-1", "spearman"), 50);
    assert_eq!(sandbox.ledger.hero_xp("squad-1"), 37);
}

#[test]
fn test_defeat_event_and_no_rewards() {
    let mut combat = builtin_orchestrator();
    let mut sandbox = Sandbox::with_units("militia", 10);

    let report = combat
        .attack("troll_bridge", "squad-1", &mut sandbox.collaborators(&NoBonuses))
        .unwrap();
    assert!(!report.victory());
    assert!(matches!(
        &report.events[..],
        [
            CombatEvent::BattleStarted { .. },
            CombatEvent::BattleDefeat { .. },
            CombatEvent::LogUpdated { entries: 1 }
        ]
    ));
    assert!(sandbox.treasury.balances().is_empty());
    assert_eq!(combat.victories("troll_bridge"), 0);
}

#[test]
fn test_state_survives_save_and_restore() {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let dir = std::env::temp_dir().join(format!(
        "skirmish-flow-test-{}-{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    let manager = SaveManager::with_path(dir.join("combat.dat"));

    let mut combat = builtin_orchestrator();
    let mut sandbox = Sandbox::with_units("knight", 1000);
    for _ in 0..3 {
        combat
            .attack("goblin_scouts", "squad-1", &mut sandbox.collaborators(&NoBonuses))
            .unwrap();
    }
    manager.save(&combat.save_data()).unwrap();

    let mut restored = builtin_orchestrator();
    restored.restore(manager.load().unwrap());
    assert_eq!(restored.victories("goblin_scouts"), 3);
    assert_eq!(restored.rewards_remaining("goblin_scouts"), 2);
    assert_eq!(restored.battle_log().to_vec(), combat.battle_log().to_vec());

    std::fs::remove_dir_all(&dir).ok();
}
