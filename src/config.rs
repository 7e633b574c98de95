//! Runtime configuration from environment variables.
//!
//! - `BLOCKFALL_SEED`: piece sequence seed (default: derived from the clock)
//! - `BLOCKFALL_FALL_MS`: normal gravity interval (default 200)
//! - `BLOCKFALL_FAST_FALL_MS`: sped-up gravity interval (default 50)
//! - `BLOCKFALL_LOG_PATH`: append JSON-lines logs and lock events to this file

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::core::GameConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub game: GameConfig,
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup. Missing, empty or unparsable
    /// values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse_u64 = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let defaults = GameConfig::default();
        let normal_fall = parse_u64("BLOCKFALL_FALL_MS")
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.normal_fall);
        let fast_fall = parse_u64("BLOCKFALL_FAST_FALL_MS")
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.fast_fall);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            seed,
            game: GameConfig {
                normal_fall,
                fast_fall,
            },
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
