//! Skirmish - wave-based PvE combat core
//!
//! Resolves squad attacks against multi-wave monster encounters, tracks
//! per-monster victories for diminishing rewards, gates a linear campaign
//! behind building levels and keeps a bounded battle log.

pub mod army;
pub mod battle_log;
pub mod combat;
pub mod config;
pub mod core;
pub mod modifiers;
pub mod monsters;
pub mod orchestrator;
pub mod progression;
pub mod save_manager;
pub mod stronghold;

pub use crate::core::{AttackError, ConfigError, SaveError};
pub use config::GameConfig;
pub use orchestrator::{AttackReport, CombatOrchestrator};
