//! The recruitment board: hireable adventurers and their asking prices.

use crate::characters::types::Element;

/// A hireable adventurer. Hiring creates a fresh `Character` with this
/// name and element; the definition itself never changes.
#[derive(Debug, Clone, Copy)]
pub struct RecruitDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub element: Element,
    /// Hiring cost in coin.
    pub cost: u64,
    /// Completed quests required before this recruit appears.
    pub story_requirement: u32,
}

pub static RECRUITS: &[RecruitDefinition] = &[
    RecruitDefinition {
        id: "tam",
        name: "Tam",
        element: Element::Fire,
        cost: 40,
        story_requirement: 0,
    },
    RecruitDefinition {
        id: "isolde",
        name: "Isolde",
        element: Element::Water,
        cost: 60,
        story_requirement: 0,
    },
    RecruitDefinition {
        id: "pike",
        name: "Pike",
        element: Element::Ice,
        cost: 90,
        story_requirement: 1,
    },
    RecruitDefinition {
        id: "orrin",
        name: "Orrin",
        element: Element::Thunder,
        cost: 140,
        story_requirement: 2,
    },
    RecruitDefinition {
        id: "maeve",
        name: "Maeve",
        element: Element::Earth,
        cost: 200,
        story_requirement: 3,
    },
    RecruitDefinition {
        id: "sorrel",
        name: "Sorrel",
        element: Element::Wind,
        cost: 260,
        story_requirement: 3,
    },
    RecruitDefinition {
        id: "edda",
        name: "Edda",
        element: Element::Fire,
        cost: 340,
        story_requirement: 4,
    },
    RecruitDefinition {
        id: "caspian",
        name: "Caspian",
        element: Element::Water,
        cost: 420,
        story_requirement: 5,
    },
];

pub fn get_recruit(id: &str) -> Option<&'static RecruitDefinition> {
    RECRUITS.iter().find(|r| r.id == id)
}

/// Recruits visible at the given story progress.
pub fn available_recruits(story_progress: u32) -> Vec<&'static RecruitDefinition> {
    RECRUITS
        .iter()
        .filter(|r| r.story_requirement <= story_progress)
        .collect()
}
