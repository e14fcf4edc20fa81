//! Session configuration, built once at the composition root and handed
//! down. Nothing in the library reads ambient globals; every knob that
//! varies per session lives here.

use std::path::PathBuf;

use crate::core::constants::DEFAULT_CURRENCY_CAP;

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Coin ceiling applied to fresh games. A loaded save keeps the cap it
    /// was saved with.
    pub currency_cap: u64,
    /// Overrides the platform save location; tests point this at temp
    /// directories, embedders may point it anywhere.
    pub save_path: Option<PathBuf>,
    /// Emit job progress events even for empty intervals.
    pub debug: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            currency_cap: DEFAULT_CURRENCY_CAP,
            save_path: None,
            debug: false,
        }
    }
}

impl GameConfig {
    /// Config for an in-memory session rooted at a throwaway path.
    pub fn with_save_path(path: PathBuf) -> Self {
        Self {
            save_path: Some(path),
            ..Self::default()
        }
    }
}
