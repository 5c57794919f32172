// Combat resolution
pub const DEFENSE_MITIGATION_FACTOR: f64 = 0.5;
pub const ROUND_DAMAGE_FACTOR: f64 = 0.3;
pub const MIN_DAMAGE_PER_ROUND: f64 = 1.0;
pub const MIN_EFFECTIVE_ATTACK: f64 = 1.0;
pub const REVIVED_WAVE_SUFFIX: &str = " (Revived)";

// Casualties
pub const MIN_VICTORY_LOSS_RATE: f64 = 0.02;
pub const DEFEAT_BASE_LOSS_RATE: f64 = 0.5;
pub const DEFEAT_SCALED_LOSS_RATE: f64 = 0.5;

// Fallback unit stats when a unit key has no catalog entry
pub const DEFAULT_UNIT_ATTACK: f64 = 10.0;
pub const DEFAULT_UNIT_DEFENSE: f64 = 5.0;
pub const DEFAULT_UNIT_HP: f64 = 100.0;

// Rewards
pub const FULL_REWARD_MULTIPLIER: f64 = 1.0;
pub const DIMINISHED_REWARD_MULTIPLIER: f64 = 0.1;
pub const MIN_SCALED_REWARD: u64 = 1;
pub const HERO_XP_DIVISOR: u64 = 2;

// Stronghold
pub const HQ_ATTACK_BONUS_PER_LEVEL: f64 = 0.02;
pub const HQ_DEFENSE_BONUS_PER_LEVEL: f64 = 0.02;

// Battle log
pub const BATTLE_LOG_CAPACITY: usize = 20;

// Save file format
pub const SAVE_VERSION_MAGIC: u64 = 0x534B_524D_0000_0001;
pub const SAVE_FILE_NAME: &str = "combat.dat";
