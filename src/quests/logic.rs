//! Quest lifecycle: departure bookkeeping lives in `game`; this module
//! resolves quests whose travel time has elapsed.

use rand::Rng;

use crate::core::game_state::GameState;
use crate::items::data::item_name;
use crate::jobs::logic::roll_loot_table;
use crate::quests::battle::resolve_battle;
use crate::quests::data::{get_quest, QuestDefinition};

/// The outcome of one resolved quest, ready for the activity log.
#[derive(Debug, Clone)]
pub struct QuestResolution {
    pub quest_id: String,
    pub victory: bool,
    pub message: String,
    /// Round-by-round highlights, for verbose displays.
    pub battle_log: Vec<String>,
}

/// Resolves every active quest whose duration has elapsed at `now_ms`.
///
/// Victory moves the quest to the completed list (advancing story
/// progress) and pays out; defeat only removes it from the active list,
/// leaving it open for another attempt. Party members return home either
/// way, idle and unassigned.
pub fn resolve_due_quests<R: Rng>(
    state: &mut GameState,
    now_ms: i64,
    rng: &mut R,
) -> Vec<QuestResolution> {
    let mut resolutions = Vec::new();

    let actives = std::mem::take(&mut state.active_quests);
    for active in actives {
        // A quest id the content tables no longer know: release the party
        // and drop the record.
        let Some(def) = get_quest(&active.quest_id) else {
            release_party(state, &active.quest_id);
            continue;
        };
        if active.started_at_ms + (def.duration_secs as i64) * 1_000 > now_ms {
            state.active_quests.push(active);
            continue;
        }
        resolutions.push(resolve_quest(state, def, rng));
    }

    resolutions
}

/// Fights the encounter and applies the outcome to `state`.
fn resolve_quest<R: Rng>(
    state: &mut GameState,
    def: &QuestDefinition,
    rng: &mut R,
) -> QuestResolution {
    let party: Vec<&crate::characters::types::Character> = state
        .roster
        .iter()
        .filter(|c| c.quest_id.as_deref() == Some(def.id))
        .collect();
    let outcome = resolve_battle(&party, def.encounter, rng);

    let message = if outcome.victory {
        for id in &outcome.survivor_ids {
            if let Some(member) = state.character_mut(id) {
                member.experience += def.reward.xp_each;
            }
        }
        let credited = state.deposit_currency(def.reward.currency);
        let spoils = roll_loot_table(def.reward.loot, rng);
        for item_id in &spoils {
            state.inventory.add(item_id, 1);
        }
        state.completed_quests.push(def.id.to_string());

        let mut text = format!(
            "The party returns victorious from {}! +{} XP each, +{} coin.",
            def.name, def.reward.xp_each, credited
        );
        if !spoils.is_empty() {
            let names: Vec<&str> = spoils.iter().map(|id| item_name(id)).collect();
            text.push_str(&format!(" Spoils: {}.", names.join(", ")));
        }
        text
    } else {
        format!("The party was driven back from {}.", def.name)
    };

    release_party(state, def.id);

    QuestResolution {
        quest_id: def.id.to_string(),
        victory: outcome.victory,
        message,
        battle_log: outcome.log,
    }
}

fn release_party(state: &mut GameState, quest_id: &str) {
    for member in &mut state.roster {
        if member.quest_id.as_deref() == Some(quest_id) {
            member.quest_id = None;
        }
    }
}
