//! Guildhall - Idle Guild Management Library
//!
//! The engine behind a small idle RPG: guild members work jobs that pay
//! experience, coin, and loot while real time passes; parties go out on
//! quests that resolve as turn-based battles; the whole state saves and
//! loads as one versioned JSON blob. The crate is headless - embedders
//! bring their own shell and drive everything through [`GameOps`].

pub mod build_info;
pub mod characters;
pub mod core;
pub mod game;
pub mod items;
pub mod jobs;
pub mod quests;
pub mod save;
pub mod simulator;

pub use crate::core::config::GameConfig;
pub use crate::core::game_state::GameState;
pub use crate::game::{Denial, Game, GameOps};
