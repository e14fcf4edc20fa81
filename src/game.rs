//! The guild facade: every player-facing operation behind one surface.
//!
//! This module provides two pieces:
//!
//! 1. **GameOps trait** - The named operations a front end is allowed to
//!    invoke. Embedders (a UI shell, the simulator, tests) consume the
//!    trait, never the concrete type, so the whole surface can be swapped
//!    at composition time.
//!
//! 2. **Game struct** - The concrete engine. Owns the state, the activity
//!    log, and optionally a save store. Actions whose costs or
//!    prerequisites are not met return a [`Denial`] and leave the state
//!    exactly as it was; nothing here panics or throws.

use std::fmt;
use std::io;

use rand::Rng;

use crate::characters::recruits::get_recruit;
use crate::characters::types::{Character, JobAssignment};
use crate::core::config::GameConfig;
use crate::core::constants::MAX_ROSTER_SIZE;
use crate::core::game_state::{ActiveQuest, GameState};
use crate::core::log::ActivityLog;
use crate::core::offline::{catch_up, OfflineReport};
use crate::core::tick::{game_tick, TickResult};
use crate::items::data::get_item;
use crate::jobs::data::get_job;
use crate::jobs::logic::productivity_modifier;
use crate::quests::data::get_quest;
use crate::save::SaveStore;

/// Why a guarded action was refused. Each variant carries enough to build
/// the player-facing notice; the action itself has already been dropped
/// without touching state by the time one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    RosterFull,
    UnknownRecruit { id: String },
    AlreadyHired { name: String },
    NotEnoughCoin { needed: u64, held: u64 },
    StoryLocked { required: u32, progress: u32 },
    UnknownCharacter { id: String },
    UnknownJob { id: String },
    UnknownQuest { id: String },
    UnknownItem { id: String },
    CharacterBusy { name: String },
    NotAssigned { name: String },
    QuestAlreadyActive { id: String },
    QuestAlreadyCompleted { id: String },
    EmptyParty,
    PartyTooLarge { limit: usize },
    DuplicatePartyMember { name: String },
    NotEnoughItems { name: String, held: i64, wanted: i64 },
    NothingToSell,
}

impl Denial {
    /// The notice shown to the player in place of the action's effect.
    pub fn message(&self) -> String {
        match self {
            Denial::RosterFull => "The hall is full. No more bunks to offer.".to_string(),
            Denial::UnknownRecruit { id } => {
                format!("Nobody called '{id}' is waiting at the gate.")
            }
            Denial::AlreadyHired { name } => format!("{name} already works for the guild."),
            Denial::NotEnoughCoin { needed, held } => {
                format!("Not enough coin: need {needed}, have {held}.")
            }
            Denial::StoryLocked { required, progress } => format!(
                "The guild's renown falls short: {required} quests must be done, {progress} are."
            ),
            Denial::UnknownCharacter { id } => format!("No guild member has the id '{id}'."),
            Denial::UnknownJob { id } => format!("No job called '{id}' is on the board."),
            Denial::UnknownQuest { id } => format!("No quest called '{id}' is on the board."),
            Denial::UnknownItem { id } => format!("No such item: '{id}'."),
            Denial::CharacterBusy { name } => format!("{name} is otherwise engaged."),
            Denial::NotAssigned { name } => format!("{name} is already idle."),
            Denial::QuestAlreadyActive { id } => format!("A party is already out on '{id}'."),
            Denial::QuestAlreadyCompleted { id } => {
                format!("'{id}' has already been seen through.")
            }
            Denial::EmptyParty => "A quest needs at least one member.".to_string(),
            Denial::PartyTooLarge { limit } => {
                format!("That quest takes at most {limit} members.")
            }
            Denial::DuplicatePartyMember { name } => {
                format!("{name} cannot be in the party twice.")
            }
            Denial::NotEnoughItems { name, held, wanted } => {
                format!("Not enough {name} to sell: want {wanted}, have {held}.")
            }
            Denial::NothingToSell => "Nothing to sell.".to_string(),
        }
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for Denial {}

/// Operations a front end may drive - implemented by the engine.
///
/// Both the interactive shell and the simulator consume this trait, so
/// the same guarded semantics back every caller.
pub trait GameOps {
    /// Advance the whole game to `now_ms`: close job intervals, resolve
    /// quests that have come due, log what happened.
    fn tick(&mut self, now_ms: i64, rng: &mut impl Rng) -> TickResult;

    /// Credit everything earned since the last save in one lump sum.
    /// Called once at load, before the periodic tick is established.
    fn catch_up(&mut self, now_ms: i64, rng: &mut impl Rng) -> OfflineReport;

    /// Hire a recruit off the board. Returns the new member's id.
    fn recruit(&mut self, recruit_id: &str, now_ms: i64) -> Result<String, Denial>;

    /// Post a member to a job. Reassigning replaces the old posting and
    /// discards its open interval.
    fn assign_job(&mut self, character_id: &str, job_id: &str, now_ms: i64)
        -> Result<(), Denial>;

    /// Take a member off their job. The open interval is discarded.
    fn unassign_job(&mut self, character_id: &str, now_ms: i64) -> Result<(), Denial>;

    /// Send a party out. Members posted to jobs are pulled off them; the
    /// quest resolves on the first tick at or after its due time.
    fn start_quest(&mut self, quest_id: &str, party: &[String], now_ms: i64)
        -> Result<(), Denial>;

    /// Sell stock back to the guild. Returns the coin actually credited,
    /// which the cap may have clamped below the asking total.
    fn sell_items(&mut self, item_id: &str, quantity: i64, now_ms: i64)
        -> Result<u64, Denial>;

    /// Write the state through the attached store.
    fn save(&mut self, now_ms: i64) -> io::Result<()>;

    fn state(&self) -> &GameState;

    fn state_mut(&mut self) -> &mut GameState;

    fn log(&self) -> &ActivityLog;
}

/// The concrete engine behind [`GameOps`].
pub struct Game {
    config: GameConfig,
    state: GameState,
    log: ActivityLog,
    store: Option<SaveStore>,
}

impl Game {
    /// A fresh game with no save store attached. The simulator and most
    /// tests live here.
    pub fn new(config: GameConfig) -> Self {
        let mut state = GameState::initial();
        state.currency_cap = config.currency_cap;
        Self {
            config,
            state,
            log: ActivityLog::new(),
            store: None,
        }
    }

    /// Wraps an existing state, no save store attached.
    pub fn from_state(config: GameConfig, state: GameState) -> Self {
        Self {
            config,
            state,
            log: ActivityLog::new(),
            store: None,
        }
    }

    /// Opens the save store and loads whatever is there; a missing or
    /// broken blob starts a new game. Fails only if no save location can
    /// be determined.
    pub fn load(config: GameConfig) -> io::Result<Self> {
        let store = match &config.save_path {
            Some(path) => SaveStore::with_path(path.clone()),
            None => SaveStore::new()?,
        };
        let mut state = store.load();
        // A never-saved state is a new game and takes the configured cap;
        // a real save keeps the cap it was saved with.
        if state.last_saved_at_ms == 0 {
            state.currency_cap = config.currency_cap;
        }
        Ok(Self {
            config,
            state,
            log: ActivityLog::new(),
            store: Some(store),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl GameOps for Game {
    fn tick(&mut self, now_ms: i64, rng: &mut impl Rng) -> TickResult {
        let result = game_tick(&mut self.state, now_ms, self.config.debug, rng);
        for event in &result.events {
            self.log.push(now_ms, event.message());
        }
        result
    }

    fn catch_up(&mut self, now_ms: i64, rng: &mut impl Rng) -> OfflineReport {
        let report = catch_up(&mut self.state, now_ms, rng);
        for entry in &report.entries {
            self.log.push(entry.at_ms, entry.message.clone());
        }
        report
    }

    fn recruit(&mut self, recruit_id: &str, now_ms: i64) -> Result<String, Denial> {
        let Some(recruit) = get_recruit(recruit_id) else {
            return Err(Denial::UnknownRecruit {
                id: recruit_id.to_string(),
            });
        };
        if self.state.roster.len() >= MAX_ROSTER_SIZE {
            return Err(Denial::RosterFull);
        }
        if self.state.roster.iter().any(|c| c.name == recruit.name) {
            return Err(Denial::AlreadyHired {
                name: recruit.name.to_string(),
            });
        }
        let progress = self.state.story_progress();
        if progress < recruit.story_requirement {
            return Err(Denial::StoryLocked {
                required: recruit.story_requirement,
                progress,
            });
        }
        if !self.state.withdraw_currency(recruit.cost) {
            return Err(Denial::NotEnoughCoin {
                needed: recruit.cost,
                held: self.state.currency,
            });
        }

        let member = Character::new(recruit.name, recruit.element);
        let id = member.id.clone();
        self.state.roster.push(member);
        self.log.push(
            now_ms,
            format!("{} joins the guild for {} coin.", recruit.name, recruit.cost),
        );
        Ok(id)
    }

    fn assign_job(
        &mut self,
        character_id: &str,
        job_id: &str,
        now_ms: i64,
    ) -> Result<(), Denial> {
        let Some(job) = get_job(job_id) else {
            return Err(Denial::UnknownJob {
                id: job_id.to_string(),
            });
        };
        let progress = self.state.story_progress();
        if progress < job.story_requirement {
            return Err(Denial::StoryLocked {
                required: job.story_requirement,
                progress,
            });
        }
        let Some(member) = self.state.character_mut(character_id) else {
            return Err(Denial::UnknownCharacter {
                id: character_id.to_string(),
            });
        };
        if member.on_quest() {
            return Err(Denial::CharacterBusy {
                name: member.name.clone(),
            });
        }

        let rate = job.base_rate * productivity_modifier(job, member.element);
        member.assignment = Some(JobAssignment {
            job_id: job.id.to_string(),
            rate,
            started_at_ms: now_ms,
        });
        let name = member.name.clone();
        self.log.push(now_ms, format!("{} takes up {}.", name, job.name));
        Ok(())
    }

    fn unassign_job(&mut self, character_id: &str, now_ms: i64) -> Result<(), Denial> {
        let Some(member) = self.state.character_mut(character_id) else {
            return Err(Denial::UnknownCharacter {
                id: character_id.to_string(),
            });
        };
        if member.assignment.take().is_none() {
            return Err(Denial::NotAssigned {
                name: member.name.clone(),
            });
        }
        let name = member.name.clone();
        self.log.push(now_ms, format!("{} puts down their tools.", name));
        Ok(())
    }

    fn start_quest(
        &mut self,
        quest_id: &str,
        party: &[String],
        now_ms: i64,
    ) -> Result<(), Denial> {
        let Some(quest) = get_quest(quest_id) else {
            return Err(Denial::UnknownQuest {
                id: quest_id.to_string(),
            });
        };
        let progress = self.state.story_progress();
        if progress < quest.story_requirement {
            return Err(Denial::StoryLocked {
                required: quest.story_requirement,
                progress,
            });
        }
        if self.state.quest_is_completed(quest_id) {
            return Err(Denial::QuestAlreadyCompleted {
                id: quest_id.to_string(),
            });
        }
        if self.state.quest_is_active(quest_id) {
            return Err(Denial::QuestAlreadyActive {
                id: quest_id.to_string(),
            });
        }
        if party.is_empty() {
            return Err(Denial::EmptyParty);
        }
        if party.len() > quest.party_limit {
            return Err(Denial::PartyTooLarge {
                limit: quest.party_limit,
            });
        }
        for (idx, id) in party.iter().enumerate() {
            if party[..idx].contains(id) {
                let name = self
                    .state
                    .character(id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| id.clone());
                return Err(Denial::DuplicatePartyMember { name });
            }
        }
        // Validate the whole party before marking anyone.
        for id in party {
            let Some(member) = self.state.character(id) else {
                return Err(Denial::UnknownCharacter { id: id.clone() });
            };
            if member.on_quest() {
                return Err(Denial::CharacterBusy {
                    name: member.name.clone(),
                });
            }
        }

        // A quest pulls members off their jobs; the open interval goes
        // with the posting.
        for id in party {
            if let Some(member) = self.state.character_mut(id) {
                member.assignment = None;
                member.quest_id = Some(quest.id.to_string());
            }
        }
        self.state.active_quests.push(ActiveQuest {
            quest_id: quest.id.to_string(),
            started_at_ms: now_ms,
        });
        self.log.push(
            now_ms,
            format!("A party of {} sets out on {}.", party.len(), quest.name),
        );
        Ok(())
    }

    fn sell_items(&mut self, item_id: &str, quantity: i64, now_ms: i64) -> Result<u64, Denial> {
        if quantity <= 0 {
            return Err(Denial::NothingToSell);
        }
        let Some(item) = get_item(item_id) else {
            return Err(Denial::UnknownItem {
                id: item_id.to_string(),
            });
        };
        let held = self.state.inventory.count(item_id);
        if held < quantity {
            return Err(Denial::NotEnoughItems {
                name: item.name.to_string(),
                held,
                wanted: quantity,
            });
        }

        self.state.inventory.add(item_id, -quantity);
        let credited = self.state.deposit_currency(item.value * quantity as u64);
        self.log.push(
            now_ms,
            format!("Sold {} {} for {} coin.", quantity, item.name, credited),
        );
        Ok(credited)
    }

    fn save(&mut self, now_ms: i64) -> io::Result<()> {
        let Some(store) = &self.store else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no save store attached to this game",
            ));
        };
        self.state.last_saved_at_ms = now_ms;
        store.save(&self.state)
    }

    fn state(&self) -> &GameState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    fn log(&self) -> &ActivityLog {
        &self.log
    }
}
