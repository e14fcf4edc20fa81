//! Simulation configuration.

use crate::core::constants::TICK_INTERVAL_MS;
use crate::quests::data::QUESTS;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of playthroughs to simulate
    pub num_runs: u32,

    /// Random seed for reproducibility (None = fresh entropy per run)
    pub seed: Option<u64>,

    /// Simulated wall-clock budget per run, in days
    pub max_days: f64,

    /// Seconds between ticks; defaults to the interactive cadence
    pub tick_secs: u64,

    /// Completed quests that count as finishing a run
    pub target_story: u32,

    /// Whether the manager policy sends parties on quests
    pub send_quests: bool,

    /// Whether the manager policy hires recruits as coin allows
    pub hire_recruits: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            max_days: 14.0,
            tick_secs: TICK_INTERVAL_MS / 1_000,
            target_story: QUESTS.len() as u32,
            send_quests: true,
            hire_recruits: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking pacing up to a story step
    pub fn story_pace_test(target_story: u32) -> Self {
        Self {
            num_runs: 50,
            target_story,
            ..Default::default()
        }
    }

    /// Quests off: measures pure job income over a week of idle time
    pub fn economy_test(num_runs: u32) -> Self {
        Self {
            num_runs,
            max_days: 7.0,
            send_quests: false,
            ..Default::default()
        }
    }
}
