//! Battle simulation: bonus inputs, per-wave outcomes and the pure resolver.

pub mod simulator;
pub mod types;

pub use simulator::*;
pub use types::*;
