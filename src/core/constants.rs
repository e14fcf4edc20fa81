//! Game tuning constants.
//!
//! Every knob that shapes pacing or economy lives here so balance passes
//! touch one file. Values that vary per session (currency cap, save
//! location) live on `GameConfig` instead.

// Tick & time
pub const TICK_INTERVAL_MS: u64 = 5_000;
pub const MS_PER_SECOND: f64 = 1_000.0;
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;

// Elemental synergy, shared by job productivity and battle damage
pub const ELEMENT_FAVORED_MODIFIER: f64 = 1.2;
pub const ELEMENT_OPPOSED_MODIFIER: f64 = 0.8;
pub const ELEMENT_NEUTRAL_MODIFIER: f64 = 1.0;

// Economy
pub const CURRENCY_PER_XP: f64 = 0.25;
pub const DEFAULT_CURRENCY_CAP: u64 = 99_999;
pub const STARTING_CURRENCY: u64 = 50;

// Roster
pub const MAX_ROSTER_SIZE: usize = 12;

// Level curve: advancing from level N costs floor(BASE * N^EXPONENT) XP
pub const BASE_XP_PER_LEVEL: f64 = 100.0;
pub const XP_CURVE_EXPONENT: f64 = 1.5;
pub const MAX_LEVEL: u32 = 99;

// Battle
pub const BATTLE_ROUND_LIMIT: u32 = 50;
pub const BATTLE_DAMAGE_VARIANCE: f64 = 0.1;
pub const BASE_PARTY_HP: u32 = 40;
pub const HP_PER_LEVEL: u32 = 8;
pub const BASE_PARTY_ATTACK: u32 = 6;
pub const ATTACK_PER_LEVEL: u32 = 2;

// Activity log
pub const ACTIVITY_LOG_CAPACITY: usize = 100;

// Persistence
pub const SAVE_FILE_VERSION: u32 = 2;
pub const SAVE_FILE_NAME: &str = "guildhall_save.json";
pub const PROJECT_DIR_NAME: &str = "guildhall";
