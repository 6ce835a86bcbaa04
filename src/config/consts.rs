// src/config/consts.rs

// Net config
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

pub const MADDEN_BASE: &str = "https://www.maddenratings.com";
pub const SPOTRAC_BASE: &str = "https://www.spotrac.com";

pub const MADDEN_TIMEOUT_SECS: u64 = 10;
pub const SPOTRAC_TIMEOUT_SECS: u64 = 15;

// Cap tables are per season
pub const SEASON: u16 = 2025;

// Rate limiting (be polite)
pub const MADDEN_DELAY_MS: u64 = 500;
pub const SPOTRAC_DELAY_MS: u64 = 1_500;

// Preview run before the full batch
pub const PREVIEW_TEAM: &str = "kansas-city-chiefs";

// Export
pub const MADDEN_OUT_DIR: &str = "madden_data";
pub const SPOTRAC_OUT_DIR: &str = "spotrac_data";
pub const ROSTERS_SUBDIR: &str = "rosters";
pub const CONTRACTS_SUBDIR: &str = "contracts";
pub const SUMMARY_FILE: &str = "_summary.json";
pub const PLAYERS_FILE: &str = "players.json";
pub const ATTRIBUTES_FILE: &str = "player_attributes.json";
