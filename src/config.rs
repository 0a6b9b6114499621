//! Per-instance game tuning
//!
//! Fixed parameters of a simulation run, supplied at construction.

use serde::{Deserialize, Serialize};

/// Victory and boss pacing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Enemy kills required to trigger the final boss
    pub kill_goal: u32,
    /// A regular boss appears every this many kills
    pub boss_interval: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            kill_goal: 50,
            boss_interval: 10,
        }
    }
}

impl GameConfig {
    pub fn new(kill_goal: u32, boss_interval: u32) -> Self {
        Self {
            kill_goal,
            boss_interval,
        }
    }
}
