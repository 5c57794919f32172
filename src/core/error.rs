//! Error types for the combat core.

use thiserror::Error;

/// Reasons an attack is rejected before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttackError {
    #[error("unknown target: {0}")]
    UnknownTarget(String),

    #[error("no units available in squad {0}")]
    EmptyArmy(String),
}

impl AttackError {
    /// Short reason string for presentation.
    pub fn reason(&self) -> &'static str {
        match self {
            AttackError::UnknownTarget(_) => "unknown target",
            AttackError::EmptyArmy(_) => "no units available",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("modifier chances sum to {total}, which exceeds 1.0")]
    ModifierChanceOverflow { total: f64 },

    #[error("modifier {id} has chance {chance} outside [0, 1]")]
    InvalidModifierChance { id: String, chance: f64 },

    #[error("monster {0} is defined more than once")]
    DuplicateMonster(String),

    #[error("campaign stage references unknown monster {0}")]
    UnknownStageMonster(String),

    #[error("monster definition with an empty id")]
    EmptyMonsterId,
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Encode(#[from] bincode::Error),

    #[error("invalid save version: expected 0x{expected:016X}, got 0x{found:016X}")]
    InvalidVersion { expected: u64, found: u64 },

    #[error("checksum verification failed")]
    ChecksumMismatch,

    #[error("could not determine data directory")]
    NoDataDir,
}
