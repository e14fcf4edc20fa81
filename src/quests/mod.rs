//! Quests: story content, turn-based battles, and resolution.

pub mod battle;
pub mod data;
pub mod logic;

pub use battle::*;
pub use data::*;
pub use logic::*;
