//! Random pre-battle encounter modifiers.
//!
//! A modifier is rolled for a stage ahead of the attack and held as pending
//! until the attack consumes it. Modifiers are plain data; the simulator owns
//! the single routine that applies them.

mod data;
mod roller;
mod types;

pub use data::builtin_modifiers;
pub use roller::ModifierRoller;
pub use types::*;
