use std::time::Duration;

use crate::types::{FAST_FALL_MS, NORMAL_FALL_MS};

/// Engine timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Gravity interval a piece starts with
    pub normal_fall: Duration,
    /// Interval applied by a speed-up request, until the piece locks
    pub fast_fall: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            normal_fall: Duration::from_millis(NORMAL_FALL_MS),
            fast_fall: Duration::from_millis(FAST_FALL_MS),
        }
    }
}
