//! Versioned JSON persistence: one blob, write it whole, read it whole.
//!
//! The loader is deliberately unforgiving: a blob that is missing, fails
//! to parse, has the wrong structural shape, or carries any version other
//! than the current one is discarded wholesale in favor of the hardcoded
//! initial state. There is no partial repair and no cross-version
//! migration; the save format is cheap enough to abandon.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Value;

use crate::core::constants::{PROJECT_DIR_NAME, SAVE_FILE_NAME, SAVE_FILE_VERSION};
use crate::core::game_state::GameState;

pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    /// Store rooted at the platform config directory.
    pub fn new() -> io::Result<Self> {
        let dirs = ProjectDirs::from("", "", PROJECT_DIR_NAME).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine a config directory",
            )
        })?;
        Ok(Self {
            path: dirs.config_dir().join(SAVE_FILE_NAME),
        })
    }

    /// Store rooted at an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store rooted in a unique temp directory, for tests.
    pub fn new_for_test() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "guildhall_test_{}_{}",
            std::process::id(),
            n
        ));
        Self {
            path: dir.join(SAVE_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the whole state as pretty-printed JSON.
    pub fn save(&self, state: &GameState) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }

    /// Reads the blob, or hands back the initial state if anything about
    /// it is off. Never fails: a broken save is a new game.
    pub fn load(&self) -> GameState {
        let Ok(text) = fs::read_to_string(&self.path) else {
            return GameState::initial();
        };
        let Ok(value) = serde_json::from_str::<Value>(&text) else {
            return GameState::initial();
        };
        if !has_valid_shape(&value) {
            return GameState::initial();
        }
        serde_json::from_value(value).unwrap_or_else(|_| GameState::initial())
    }

    /// Removes the save file if present.
    pub fn wipe(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Minimal structural gate: top-level object, exact version, numeric
/// currency, object inventory, array roster. Everything finer-grained is
/// the full deserializer's problem.
fn has_valid_shape(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    obj.get("version").and_then(Value::as_u64) == Some(SAVE_FILE_VERSION as u64)
        && obj.get("currency").is_some_and(Value::is_number)
        && obj.get("inventory").is_some_and(Value::is_object)
        && obj.get("roster").is_some_and(Value::is_array)
}
