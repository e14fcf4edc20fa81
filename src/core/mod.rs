//! Core state and the progression loop.

pub mod config;
pub mod constants;
pub mod game_state;
pub mod log;
pub mod offline;
pub mod tick;

pub use config::*;
pub use constants::*;
pub use game_state::*;
pub use log::*;
pub use offline::*;
pub use tick::*;
