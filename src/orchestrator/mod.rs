//! Combat orchestration.
//!
//! [`CombatOrchestrator`] is the only entry point that mutates anything: it
//! validates an attack, pulls inputs from collaborators, runs the pure
//! simulator, then applies losses, rewards, the battle log entry and the
//! victory counter in one synchronous pass.

pub mod collaborators;
pub mod events;
pub mod logic;

pub use collaborators::*;
pub use events::{CombatEvent, CombatObserver};
pub use logic::{AttackReport, CombatOrchestrator};
