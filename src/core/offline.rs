//! Offline catch-up: credits everything the roster earned while the
//! process was gone, in one lump-sum pass at load time.
//!
//! Each posted character's open interval is closed once against the load
//! instant, however long the gap. Double counting is impossible because
//! the interval clock resets as part of the accrual itself.

use std::collections::BTreeMap;

use rand::Rng;

use crate::core::game_state::GameState;
use crate::core::log::LogEntry;
use crate::items::data::item_name;
use crate::jobs::data::get_job;
use crate::jobs::logic::apply_job_experience;

/// What the guild got done while nobody was watching.
#[derive(Debug, Clone, Default)]
pub struct OfflineReport {
    /// Seconds since the last save; 0 for a never-saved game.
    pub away_secs: i64,
    /// One entry per character that earned anything, stamped at load time.
    pub entries: Vec<LogEntry>,
    pub xp_earned: u64,
    /// Coin credited after the cap clamp.
    pub currency_earned: u64,
    /// Aggregated drops across the roster, by item id.
    pub loot: BTreeMap<String, u32>,
}

impl OfflineReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Runs the lump-sum pass against `now_ms` and applies it to `state`.
pub fn catch_up<R: Rng>(state: &mut GameState, now_ms: i64, rng: &mut R) -> OfflineReport {
    let mut report = OfflineReport {
        away_secs: if state.last_saved_at_ms > 0 {
            ((now_ms - state.last_saved_at_ms) / 1_000).max(0)
        } else {
            0
        },
        ..OfflineReport::default()
    };

    for idx in 0..state.roster.len() {
        if state.roster[idx].assignment.is_none() {
            continue;
        }
        let gain = apply_job_experience(&mut state.roster[idx], now_ms, rng);
        if gain.is_empty() {
            continue;
        }

        let credited = state.deposit_currency(gain.currency);
        for item_id in &gain.loot {
            state.inventory.add(item_id, 1);
            *report.loot.entry(item_id.to_string()).or_insert(0) += 1;
        }

        let member = &state.roster[idx];
        let job_name = member
            .assignment
            .as_ref()
            .and_then(|a| get_job(&a.job_id))
            .map(|j| j.name)
            .unwrap_or("an odd job");
        let mut message = format!(
            "While the hall slept, {} earned {} XP and {} coin at {}.",
            member.name, gain.xp, credited, job_name
        );
        if !gain.loot.is_empty() {
            let names: Vec<&str> = gain.loot.iter().map(|id| item_name(id)).collect();
            message.push_str(&format!(" Found {}.", names.join(", ")));
        }

        report.xp_earned += gain.xp;
        report.currency_earned += credited;
        report.entries.push(LogEntry {
            at_ms: now_ms,
            message,
        });
    }

    report
}

/// Human-readable gap for welcome-back banners: "2d 4h", "3h 12m", "42s".
pub fn format_away(secs: i64) -> String {
    let secs = secs.max(0);
    let (days, hours, minutes) = (secs / 86_400, (secs % 86_400) / 3_600, (secs % 3_600) / 60);
    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {}s", secs % 60)
    } else {
        format!("{secs}s")
    }
}
