//! Static job board definitions.
//!
//! Jobs unlock as the guild's story advances. Each job leans toward some
//! tribes and against others; the productivity modifier in `jobs::logic`
//! turns those lists into the posted experience rate.

use crate::characters::types::Element;

/// One slot in a loot table: a single-unit Bernoulli trial per tick.
#[derive(Debug, Clone, Copy)]
pub struct LootEntry {
    pub item_id: &'static str,
    /// Probability in [0, 1] that one unit drops on a given tick.
    pub chance: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct JobDefinition {
    pub id: &'static str,
    pub name: &'static str,
    /// Experience per second before the elemental modifier.
    pub base_rate: f64,
    pub favored: &'static [Element],
    pub opposed: &'static [Element],
    /// Completed quests required before the job is posted.
    pub story_requirement: u32,
    pub loot: &'static [LootEntry],
}

pub static JOBS: &[JobDefinition] = &[
    JobDefinition {
        id: "timber",
        name: "Timber Felling",
        base_rate: 0.8,
        favored: &[Element::Earth, Element::Wind],
        opposed: &[Element::Fire],
        story_requirement: 0,
        loot: &[
            LootEntry { item_id: "oak_log", chance: 0.10 },
            LootEntry { item_id: "amber_resin", chance: 0.02 },
        ],
    },
    JobDefinition {
        id: "foraging",
        name: "Herb Foraging",
        base_rate: 1.0,
        favored: &[Element::Earth, Element::Water],
        opposed: &[Element::Ice],
        story_requirement: 0,
        loot: &[
            LootEntry { item_id: "bitterroot", chance: 0.12 },
            LootEntry { item_id: "moonpetal", chance: 0.03 },
        ],
    },
    JobDefinition {
        id: "fishing",
        name: "Riverside Fishing",
        base_rate: 1.2,
        favored: &[Element::Water, Element::Ice],
        opposed: &[Element::Thunder],
        story_requirement: 1,
        loot: &[
            LootEntry { item_id: "silver_carp", chance: 0.15 },
            LootEntry { item_id: "pearl", chance: 0.01 },
        ],
    },
    JobDefinition {
        id: "mining",
        name: "Copper Mining",
        base_rate: 1.5,
        favored: &[Element::Fire, Element::Earth],
        opposed: &[Element::Wind],
        story_requirement: 2,
        loot: &[
            LootEntry { item_id: "copper_ore", chance: 0.12 },
            LootEntry { item_id: "rough_gem", chance: 0.02 },
        ],
    },
    JobDefinition {
        id: "forgework",
        name: "Forge Work",
        base_rate: 2.0,
        favored: &[Element::Fire, Element::Thunder],
        opposed: &[Element::Water],
        story_requirement: 3,
        loot: &[
            LootEntry { item_id: "iron_ingot", chance: 0.08 },
            LootEntry { item_id: "forge_charm", chance: 0.015 },
        ],
    },
    JobDefinition {
        id: "scribing",
        name: "Archive Scribing",
        base_rate: 2.6,
        favored: &[Element::Ice, Element::Wind],
        opposed: &[Element::Earth],
        story_requirement: 4,
        loot: &[
            LootEntry { item_id: "vellum_scroll", chance: 0.07 },
            LootEntry { item_id: "sealing_wax", chance: 0.03 },
        ],
    },
    JobDefinition {
        id: "warding",
        name: "Storm Warding",
        base_rate: 3.4,
        favored: &[Element::Thunder, Element::Wind],
        opposed: &[Element::Earth],
        story_requirement: 5,
        loot: &[
            LootEntry { item_id: "charged_shard", chance: 0.06 },
            LootEntry { item_id: "storm_glass", chance: 0.01 },
        ],
    },
    JobDefinition {
        id: "alchemy",
        name: "Royal Alchemy",
        base_rate: 4.5,
        favored: &[Element::Fire, Element::Ice],
        opposed: &[Element::Wind],
        story_requirement: 6,
        loot: &[
            LootEntry { item_id: "quicksilver", chance: 0.05 },
            LootEntry { item_id: "philter", chance: 0.008 },
        ],
    },
];

pub fn get_job(id: &str) -> Option<&'static JobDefinition> {
    JOBS.iter().find(|j| j.id == id)
}

/// Jobs posted at the given story progress.
pub fn unlocked_jobs(story_progress: u32) -> Vec<&'static JobDefinition> {
    JOBS.iter()
        .filter(|j| j.story_requirement <= story_progress)
        .collect()
}
