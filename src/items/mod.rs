//! Items: the static catalog and the guild stockpile.

pub mod data;
pub mod inventory;

pub use data::*;
pub use inventory::*;
