//! The central per-tick orchestration function.
//!
//! `game_tick()` closes every open job interval at `now_ms`, applies the
//! proceeds to the guild's coffers and stockpile, then resolves any quests
//! whose travel time has elapsed. It returns a [`TickResult`] describing
//! what happened so the embedding layer can narrate without the game logic
//! depending on any presentation types.

use rand::Rng;

use crate::core::game_state::GameState;
use crate::items::data::item_name;
use crate::jobs::data::get_job;
use crate::jobs::logic::apply_job_experience;
use crate::quests::logic::resolve_due_quests;

/// A single event produced by a game tick.
///
/// Every variant carries a preformatted message; richer fields ride along
/// for embedders that want structure instead of prose.
#[derive(Debug, Clone)]
pub enum TickEvent {
    /// A posted character closed an accrual interval worth something.
    JobProgress {
        character_id: String,
        xp: u64,
        /// Coin actually credited after the cap clamp.
        currency: u64,
        loot: Vec<&'static str>,
        message: String,
    },
    /// An active quest came due and was fought out.
    QuestResolved {
        quest_id: String,
        victory: bool,
        message: String,
    },
}

impl TickEvent {
    pub fn message(&self) -> &str {
        match self {
            TickEvent::JobProgress { message, .. } => message,
            TickEvent::QuestResolved { message, .. } => message,
        }
    }
}

/// Everything one tick produced, in occurrence order.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
    /// Job experience earned this tick, summed over the roster.
    pub xp_earned: u64,
    /// Job coin credited this tick (quest payouts land directly on state).
    pub currency_earned: u64,
}

/// Advances the whole game to `now_ms`.
///
/// With `debug` set, posted characters that earned nothing still emit a
/// `JobProgress` event so a tuning session can watch every interval close.
pub fn game_tick<R: Rng>(
    state: &mut GameState,
    now_ms: i64,
    debug: bool,
    rng: &mut R,
) -> TickResult {
    let mut result = TickResult::default();

    // ── 1. Close job intervals over the roster ──────────────────
    for idx in 0..state.roster.len() {
        if state.roster[idx].assignment.is_none() {
            continue;
        }
        let gain = apply_job_experience(&mut state.roster[idx], now_ms, rng);
        if gain.is_empty() && !debug {
            continue;
        }

        let credited = state.deposit_currency(gain.currency);
        for item_id in &gain.loot {
            state.inventory.add(item_id, 1);
        }

        let member = &state.roster[idx];
        let job_name = member
            .assignment
            .as_ref()
            .and_then(|a| get_job(&a.job_id))
            .map(|j| j.name)
            .unwrap_or("an odd job");
        let mut message = format!(
            "{} earned {} XP and {} coin at {}.",
            member.name, gain.xp, credited, job_name
        );
        if !gain.loot.is_empty() {
            let names: Vec<&str> = gain.loot.iter().map(|id| item_name(id)).collect();
            message.push_str(&format!(" Found {}.", names.join(", ")));
        }

        result.xp_earned += gain.xp;
        result.currency_earned += credited;
        result.events.push(TickEvent::JobProgress {
            character_id: member.id.clone(),
            xp: gain.xp,
            currency: credited,
            loot: gain.loot,
            message,
        });
    }

    // ── 2. Resolve due quests ───────────────────────────────────
    for resolution in resolve_due_quests(state, now_ms, rng) {
        result.events.push(TickEvent::QuestResolved {
            quest_id: resolution.quest_id,
            victory: resolution.victory,
            message: resolution.message,
        });
    }

    result
}
