//! The job board: static definitions and the idle progression arithmetic.

pub mod data;
pub mod logic;

pub use data::*;
pub use logic::*;
