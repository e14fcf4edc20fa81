//! The whole-game state container: everything the save blob carries.

use serde::{Deserialize, Serialize};

use crate::characters::types::{Character, Element};
use crate::core::constants::*;
use crate::items::inventory::Inventory;

/// A quest the guild has committed a party to, not yet resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveQuest {
    pub quest_id: String,
    /// Epoch milliseconds at departure.
    pub started_at_ms: i64,
}

/// Root game state. One instance per running game; serialized wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Save format version. Anything but the current version is discarded
    /// at load and replaced with the initial state.
    pub version: u32,
    pub currency: u64,
    pub currency_cap: u64,
    pub inventory: Inventory,
    pub roster: Vec<Character>,
    #[serde(default)]
    pub active_quests: Vec<ActiveQuest>,
    #[serde(default)]
    pub completed_quests: Vec<String>,
    /// Zero until the first save.
    #[serde(default)]
    pub last_saved_at_ms: i64,
}

impl GameState {
    /// The hardcoded new-game state: one founding member, pocket change,
    /// an empty stockpile.
    pub fn initial() -> Self {
        Self {
            version: SAVE_FILE_VERSION,
            currency: STARTING_CURRENCY,
            currency_cap: DEFAULT_CURRENCY_CAP,
            inventory: Inventory::new(),
            roster: vec![Character::new("Wren", Element::Wind)],
            active_quests: Vec::new(),
            completed_quests: Vec::new(),
            last_saved_at_ms: 0,
        }
    }

    /// Story progress is the count of completed quests, derived on demand
    /// and never stored.
    pub fn story_progress(&self) -> u32 {
        self.completed_quests.len() as u32
    }

    pub fn character(&self, id: &str) -> Option<&Character> {
        self.roster.iter().find(|c| c.id == id)
    }

    pub fn character_mut(&mut self, id: &str) -> Option<&mut Character> {
        self.roster.iter_mut().find(|c| c.id == id)
    }

    pub fn quest_is_active(&self, quest_id: &str) -> bool {
        self.active_quests.iter().any(|q| q.quest_id == quest_id)
    }

    pub fn quest_is_completed(&self, quest_id: &str) -> bool {
        self.completed_quests.iter().any(|q| q == quest_id)
    }

    /// Credits coin, clamped to the cap. Returns what was actually added.
    pub fn deposit_currency(&mut self, amount: u64) -> u64 {
        let new_balance = self.currency.saturating_add(amount).min(self.currency_cap);
        let credited = new_balance - self.currency;
        self.currency = new_balance;
        credited
    }

    /// Debits coin if the balance covers it. The balance never goes
    /// negative; an uncovered withdrawal returns false and changes nothing.
    pub fn withdraw_currency(&mut self, amount: u64) -> bool {
        if self.currency < amount {
            return false;
        }
        self.currency -= amount;
        true
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
