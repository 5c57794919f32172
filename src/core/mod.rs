//! Shared tuning constants and error types.

pub mod constants;
pub mod error;

pub use error::{AttackError, ConfigError, SaveError};
