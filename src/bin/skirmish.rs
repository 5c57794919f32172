//! Combat sandbox CLI.
//!
//! Attacks a monster with a single-unit squad and prints the outcome.
//!
//! Usage:
//!   cargo run --bin skirmish -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin skirmish                                  # First campaign stage, 50 spearmen
//!   cargo run --bin skirmish -- --monster wolf_pack --repeat 6
//!   cargo run --bin skirmish -- --campaign --save combat.dat

use rand::rngs::StdRng;
use rand::SeedableRng;
use skirmish::army::Garrison;
use skirmish::orchestrator::{Collaborators, ExperienceLedger, NoBonuses, Treasury};
use skirmish::save_manager::SaveManager;
use skirmish::stronghold::{BuildingId, Stronghold};
use skirmish::{AttackReport, CombatOrchestrator, GameConfig};
use std::env;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

const SQUAD_ID: &str = "squad-1";

struct CliOptions {
    monster: Option<String>,
    unit: String,
    units: u32,
    seed: Option<u64>,
    config: Option<PathBuf>,
    save: Option<PathBuf>,
    repeat: u32,
    campaign: bool,
    json: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            monster: None,
            unit: "spearman".to_string(),
            units: 50,
            seed: None,
            config: None,
            save: None,
            repeat: 1,
            campaign: false,
            json: false,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);

    if let Err(message) = run(&options) {
        eprintln!("error: {}", message);
        process::exit(1);
    }
}

fn run(options: &CliOptions) -> Result<(), String> {
    let config = match &options.config {
        Some(path) => GameConfig::load(path),
        None => GameConfig::builtin(),
    }
    .map_err(|e| e.to_string())?;

    let monster_id = match &options.monster {
        Some(id) => id.clone(),
        None => config
            .campaign
            .first()
            .map(|stage| stage.monster_id.clone())
            .ok_or_else(|| "no campaign stages configured".to_string())?,
    };

    let save_manager = options.save.as_ref().map(SaveManager::with_path);

    let mut garrison = Garrison::new(config.units.clone());
    garrison.add_units(SQUAD_ID, &options.unit, options.units);

    let mut combat = CombatOrchestrator::new(config);
    if let Some(manager) = &save_manager {
        combat.restore(manager.load_or_default());
    }

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut treasury = Treasury::new();
    let mut ledger = ExperienceLedger::new();
    let bonuses = NoBonuses;
    let mut last_report = None;

    for attempt in 1..=options.repeat {
        combat.roll_modifier(&monster_id, &mut rng);
        let mut collaborators = Collaborators {
            army: &mut garrison,
            bonuses: &bonuses,
            resources: &mut treasury,
            experience: &mut ledger,
        };
        match combat.attack(&monster_id, SQUAD_ID, &mut collaborators) {
            Ok(report) => {
                if !options.json {
                    print_report(attempt, &report);
                }
                last_report = Some(report);
            }
            Err(e) => {
                println!("Attack {} rejected: {}", attempt, e.reason());
                break;
            }
        }
    }

    if options.json {
        if let Some(report) = &last_report {
            let json = serde_json::to_string_pretty(report).map_err(|e| e.to_string())?;
            println!("{}", json);
        }
    } else {
        println!();
        println!("Treasury:");
        for (resource, amount) in treasury.balances() {
            println!("  {:<8} {}", resource.name(), amount);
        }
        println!("  Player XP {}", ledger.player_xp);
        println!(
            "Victories vs {}: {} ({} full-reward wins left)",
            monster_id,
            combat.victories(&monster_id),
            combat.rewards_remaining(&monster_id)
        );
    }

    if options.campaign {
        print_campaign(&combat);
    }

    if let Some(manager) = &save_manager {
        manager.save(&combat.save_data()).map_err(|e| e.to_string())?;
    }

    Ok(())
}

fn print_report(attempt: u32, report: &AttackReport) {
    let result = &report.result;
    println!(
        "Attack {} on {}: {}",
        attempt,
        report.monster_id,
        if result.victory { "VICTORY" } else { "DEFEAT" }
    );
    if let Some(modifier) = &report.modifier {
        println!("  Modifier: {}", modifier.name);
    }
    for wave in &result.wave_details {
        println!(
            "  Wave {} {:<24} hp {:>9.1}  rounds {:>4}  damage {:>9.1}  left {:>9.1}",
            wave.wave_index + 1,
            wave.name,
            wave.wave_hp,
            wave.rounds,
            wave.damage_taken,
            wave.remaining_hp
        );
    }
    println!(
        "  Survival {:.1}%  waves survived {}",
        result.survival_rate * 100.0,
        result.waves_survived
    );
    for (unit, lost) in &result.losses {
        println!("  Lost {} x{}", unit, lost);
    }
    for (resource, amount) in &report.rewards {
        println!("  +{} {}", amount, resource.name());
    }
    if report.reward_reduced {
        println!("  (reduced reward: repeat victory)");
    }
}

fn print_campaign(combat: &CombatOrchestrator) {
    // The sandbox has no building system; show stages as a fresh stronghold
    // with Headquarters at level 1.
    let mut stronghold = Stronghold::new();
    stronghold.set_level(BuildingId::Headquarters, 1);

    println!();
    println!("Campaign:");
    for annotated in combat.campaign(&stronghold) {
        let status = if annotated.is_completed {
            "completed".to_string()
        } else if annotated.is_available {
            "available".to_string()
        } else {
            annotated
                .lock_reason
                .as_ref()
                .map(|reason| format!("locked: {}", reason))
                .unwrap_or_else(|| "locked".to_string())
        };
        println!(
            "  {:>2}. {:<16} {}",
            annotated.stage.stage_index + 1,
            annotated.stage.monster_id,
            status
        );
    }
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-m" | "--monster" => {
                if i + 1 < args.len() {
                    options.monster = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "-u" | "--unit" => {
                if i + 1 < args.len() {
                    options.unit = args[i + 1].clone();
                    i += 1;
                }
            }
            "-n" | "--units" => {
                if i + 1 < args.len() {
                    options.units = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    options.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    options.config = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--save" => {
                if i + 1 < args.len() {
                    options.save = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "-r" | "--repeat" => {
                if i + 1 < args.len() {
                    options.repeat = args[i + 1].parse().unwrap_or(1);
                    i += 1;
                }
            }
            "--campaign" => {
                options.campaign = true;
            }
            "--json" => {
                options.json = true;
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    options
}

fn print_help() {
    println!("Skirmish Combat Sandbox");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin skirmish -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -m, --monster <ID>   Monster to attack (default: first campaign stage)");
    println!("    -u, --unit <KEY>     Unit type in the squad (default: spearman)");
    println!("    -n, --units <N>      Number of units in the squad (default: 50)");
    println!("    -s, --seed <S>       Random seed for modifier rolls");
    println!("    -c, --config <PATH>  JSON file overriding the built-in tables");
    println!("    --save <PATH>        Load combat state from and save it to PATH");
    println!("    -r, --repeat <N>     Number of attacks (default: 1)");
    println!("    --campaign           Print campaign stage states");
    println!("    --json               Print the last attack report as JSON");
    println!("    -h, --help           Show this help");
}
