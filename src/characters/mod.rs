//! Guild members: character records, elements, and the recruitment board.

pub mod recruits;
pub mod types;

pub use recruits::*;
pub use types::*;
