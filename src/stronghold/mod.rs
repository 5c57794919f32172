//! Stronghold buildings. Levels gate campaign stages and the Headquarters
//! feeds a flat combat bonus into every battle.

pub mod types;

pub use types::*;
