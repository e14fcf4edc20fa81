//! Static quest definitions: the story line the guild works through.
//!
//! Quests unlock in order of `story_requirement` (completed-quest count),
//! so the natural path is top to bottom, but nothing enforces single-file
//! progress once several are unlocked.

use crate::characters::types::Element;
use crate::jobs::data::LootEntry;

/// One opponent in a quest encounter.
#[derive(Debug, Clone, Copy)]
pub struct Foe {
    pub name: &'static str,
    pub element: Element,
    pub hp: u32,
    pub attack: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct QuestReward {
    /// Paid to each party member that survives the battle.
    pub xp_each: u64,
    pub currency: u64,
    /// Rolled once per entry on victory.
    pub loot: &'static [LootEntry],
}

#[derive(Debug, Clone, Copy)]
pub struct QuestDefinition {
    pub id: &'static str,
    pub name: &'static str,
    /// Completed quests required before this one is offered.
    pub story_requirement: u32,
    pub party_limit: usize,
    /// Travel time before the encounter resolves.
    pub duration_secs: u64,
    pub encounter: &'static [Foe],
    pub reward: QuestReward,
}

pub static QUESTS: &[QuestDefinition] = &[
    QuestDefinition {
        id: "wolves_at_the_gate",
        name: "Wolves at the Gate",
        story_requirement: 0,
        party_limit: 2,
        duration_secs: 120,
        encounter: &[
            Foe { name: "Grey Wolf", element: Element::Wind, hp: 22, attack: 4 },
            Foe { name: "Grey Wolf", element: Element::Wind, hp: 22, attack: 4 },
        ],
        reward: QuestReward {
            xp_each: 150,
            currency: 90,
            loot: &[LootEntry { item_id: "wolf_pelt", chance: 0.9 }],
        },
    },
    QuestDefinition {
        id: "bandit_toll",
        name: "The Bandit Toll",
        story_requirement: 1,
        party_limit: 3,
        duration_secs: 300,
        encounter: &[
            Foe { name: "Waylay Archer", element: Element::Wind, hp: 30, attack: 5 },
            Foe { name: "Bandit Cutpurse", element: Element::Earth, hp: 34, attack: 6 },
            Foe { name: "Bandit Chief", element: Element::Fire, hp: 48, attack: 8 },
        ],
        reward: QuestReward {
            xp_each: 320,
            currency: 170,
            loot: &[
                LootEntry { item_id: "bandit_insignia", chance: 0.85 },
                LootEntry { item_id: "rough_gem", chance: 0.3 },
            ],
        },
    },
    QuestDefinition {
        id: "flooded_cellars",
        name: "The Flooded Cellars",
        story_requirement: 2,
        party_limit: 3,
        duration_secs: 600,
        encounter: &[
            Foe { name: "Silt Crawler", element: Element::Water, hp: 40, attack: 6 },
            Foe { name: "Silt Crawler", element: Element::Water, hp: 40, attack: 6 },
            Foe { name: "Drowned Keeper", element: Element::Water, hp: 70, attack: 9 },
        ],
        reward: QuestReward {
            xp_each: 520,
            currency: 260,
            loot: &[
                LootEntry { item_id: "tide_opal", chance: 0.7 },
                LootEntry { item_id: "pearl", chance: 0.35 },
            ],
        },
    },
    QuestDefinition {
        id: "embermine_depths",
        name: "Embermine Depths",
        story_requirement: 3,
        party_limit: 4,
        duration_secs: 1_200,
        encounter: &[
            Foe { name: "Cinder Imp", element: Element::Fire, hp: 45, attack: 7 },
            Foe { name: "Cinder Imp", element: Element::Fire, hp: 45, attack: 7 },
            Foe { name: "Magma Shade", element: Element::Fire, hp: 60, attack: 10 },
            Foe { name: "Embermine Tyrant", element: Element::Fire, hp: 90, attack: 12 },
        ],
        reward: QuestReward {
            xp_each: 850,
            currency: 420,
            loot: &[
                LootEntry { item_id: "cinder_heart", chance: 0.7 },
                LootEntry { item_id: "forge_charm", chance: 0.3 },
            ],
        },
    },
    QuestDefinition {
        id: "glacier_choir",
        name: "The Glacier Choir",
        story_requirement: 4,
        party_limit: 4,
        duration_secs: 2_400,
        encounter: &[
            Foe { name: "Rime Chorister", element: Element::Ice, hp: 60, attack: 9 },
            Foe { name: "Rime Chorister", element: Element::Ice, hp: 60, attack: 9 },
            Foe { name: "Rime Chorister", element: Element::Ice, hp: 60, attack: 9 },
            Foe { name: "Matron of Hail", element: Element::Ice, hp: 110, attack: 14 },
        ],
        reward: QuestReward {
            xp_each: 1_300,
            currency: 700,
            loot: &[
                LootEntry { item_id: "frost_sigil", chance: 0.7 },
                LootEntry { item_id: "storm_glass", chance: 0.25 },
            ],
        },
    },
    QuestDefinition {
        id: "hollow_crown",
        name: "The Hollow Crown",
        story_requirement: 5,
        party_limit: 4,
        duration_secs: 3_600,
        encounter: &[
            Foe { name: "Crownsworn Husk", element: Element::Earth, hp: 80, attack: 11 },
            Foe { name: "Crownsworn Husk", element: Element::Earth, hp: 80, attack: 11 },
            Foe { name: "The Hollow King", element: Element::Thunder, hp: 220, attack: 18 },
        ],
        reward: QuestReward {
            xp_each: 2_200,
            currency: 1_200,
            loot: &[
                LootEntry { item_id: "crown_shard", chance: 0.95 },
                LootEntry { item_id: "philter", chance: 0.3 },
            ],
        },
    },
];

pub fn get_quest(id: &str) -> Option<&'static QuestDefinition> {
    QUESTS.iter().find(|q| q.id == id)
}

/// Quests offered at the given story progress, completed or not.
pub fn unlocked_quests(story_progress: u32) -> Vec<&'static QuestDefinition> {
    QUESTS
        .iter()
        .filter(|q| q.story_requirement <= story_progress)
        .collect()
}
