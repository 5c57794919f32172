//! Player army: resolved unit stacks, the unit stat catalog and an in-memory
//! squad store.

pub mod garrison;
pub mod types;

pub use garrison::Garrison;
pub use types::*;
