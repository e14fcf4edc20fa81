//! Character records and the elemental affinity system.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::constants::*;

/// Elemental tribes. Every character and foe belongs to exactly one.
///
/// Jobs list the tribes they favor or oppose; battle uses the cycle below,
/// where each element is strong against exactly one other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Ice,
    Thunder,
    Earth,
    Wind,
}

impl Element {
    pub const ALL: [Element; 6] = [
        Element::Fire,
        Element::Water,
        Element::Ice,
        Element::Thunder,
        Element::Earth,
        Element::Wind,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Ice => "Ice",
            Element::Thunder => "Thunder",
            Element::Earth => "Earth",
            Element::Wind => "Wind",
        }
    }

    /// The element this one is strong against.
    ///
    /// Cycle: Fire > Ice > Wind > Earth > Thunder > Water > Fire.
    pub fn beats(&self) -> Element {
        match self {
            Element::Fire => Element::Ice,
            Element::Ice => Element::Wind,
            Element::Wind => Element::Earth,
            Element::Earth => Element::Thunder,
            Element::Thunder => Element::Water,
            Element::Water => Element::Fire,
        }
    }

    /// Damage multiplier for an attacker of this element striking `defender`.
    pub fn battle_modifier(&self, defender: Element) -> f64 {
        if self.beats() == defender {
            ELEMENT_FAVORED_MODIFIER
        } else if defender.beats() == *self {
            ELEMENT_OPPOSED_MODIFIER
        } else {
            ELEMENT_NEUTRAL_MODIFIER
        }
    }
}

/// A character's current job posting.
///
/// `rate` is fixed when the posting is created (base rate x productivity
/// modifier) and `started_at_ms` marks the start of the open accrual
/// interval. The invariant `started_at_ms <= now` is enforced by clamping
/// at the accrual site, never assumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAssignment {
    pub job_id: String,
    /// Experience per second, always positive.
    pub rate: f64,
    /// Epoch milliseconds.
    pub started_at_ms: i64,
}

/// A guild member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub element: Element,
    /// Lifetime accumulated experience. Level is derived, never stored.
    pub experience: u64,
    #[serde(default)]
    pub assignment: Option<JobAssignment>,
    #[serde(default)]
    pub quest_id: Option<String>,
}

impl Character {
    pub fn new(name: &str, element: Element) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            element,
            experience: 0,
            assignment: None,
            quest_id: None,
        }
    }

    pub fn level(&self) -> u32 {
        level_for_xp(self.experience)
    }

    /// Idle means available for a new posting: no job and not away questing.
    pub fn is_idle(&self) -> bool {
        self.assignment.is_none() && self.quest_id.is_none()
    }

    pub fn on_quest(&self) -> bool {
        self.quest_id.is_some()
    }

    pub fn max_hp(&self) -> u32 {
        BASE_PARTY_HP + HP_PER_LEVEL * (self.level() - 1)
    }

    pub fn attack(&self) -> u32 {
        BASE_PARTY_ATTACK + ATTACK_PER_LEVEL * (self.level() - 1)
    }
}

/// XP required to advance from `level` to `level + 1`.
pub fn xp_to_advance(level: u32) -> u64 {
    (BASE_XP_PER_LEVEL * (level as f64).powf(XP_CURVE_EXPONENT)).floor() as u64
}

/// Level reached with `total_xp` lifetime experience, starting from level 1.
pub fn level_for_xp(total_xp: u64) -> u32 {
    let mut level = 1;
    let mut remaining = total_xp;
    while level < MAX_LEVEL {
        let need = xp_to_advance(level);
        if remaining < need {
            break;
        }
        remaining -= need;
        level += 1;
    }
    level
}
