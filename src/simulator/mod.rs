//! Guild balance simulator for Monte Carlo analysis.
//!
//! Run many simulated playthroughs to analyze:
//! - Days of idle time to finish the story line
//! - Coin and experience pacing per story step
//! - Quest failure rates and roster growth
//!
//! The simulator drives the same `Game` engine the interactive shell
//! uses, through the same `GameOps` surface, so its numbers match real
//! play instead of a parallel reimplementation.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, RunStats};
