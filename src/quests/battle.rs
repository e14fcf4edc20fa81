//! Turn-based quest battles.
//!
//! Rounds alternate full volleys: every living party member strikes, then
//! every living foe answers. Both sides focus the first living opponent,
//! so resolution is deterministic apart from the injected damage variance.

use rand::Rng;

use crate::characters::types::{Character, Element};
use crate::core::constants::*;
use crate::quests::data::Foe;

#[derive(Debug, Clone)]
struct Combatant {
    name: String,
    element: Element,
    hp: i64,
    attack: u32,
}

impl Combatant {
    fn alive(&self) -> bool {
        self.hp > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleOutcome {
    pub victory: bool,
    /// Rounds fought; 0 means the battle never started (empty party).
    pub rounds: u32,
    /// Ids of party members still standing, in roster order.
    pub survivor_ids: Vec<String>,
    /// Narration lines: kills and the closing line.
    pub log: Vec<String>,
}

fn strike<R: Rng>(attacker: &Combatant, defender: &mut Combatant, rng: &mut R) -> i64 {
    let modifier = attacker.element.battle_modifier(defender.element);
    let variance = rng.gen_range(1.0 - BATTLE_DAMAGE_VARIANCE..=1.0 + BATTLE_DAMAGE_VARIANCE);
    let damage = ((attacker.attack as f64 * modifier * variance).round() as i64).max(1);
    defender.hp -= damage;
    damage
}

/// Fights the encounter to a finish. A wipe of either side ends the battle;
/// a party that is still slugging at the round limit withdraws in defeat.
pub fn resolve_battle<R: Rng>(
    party: &[&Character],
    encounter: &[Foe],
    rng: &mut R,
) -> BattleOutcome {
    let mut log = Vec::new();

    if party.is_empty() {
        log.push("No one answered the call.".to_string());
        return BattleOutcome {
            victory: false,
            rounds: 0,
            survivor_ids: Vec::new(),
            log,
        };
    }

    let mut members: Vec<(String, Combatant)> = party
        .iter()
        .map(|c| {
            (
                c.id.clone(),
                Combatant {
                    name: c.name.clone(),
                    element: c.element,
                    hp: c.max_hp() as i64,
                    attack: c.attack(),
                },
            )
        })
        .collect();
    let mut foes: Vec<Combatant> = encounter
        .iter()
        .map(|f| Combatant {
            name: f.name.to_string(),
            element: f.element,
            hp: f.hp as i64,
            attack: f.attack,
        })
        .collect();

    let mut rounds = 0;
    for round in 1..=BATTLE_ROUND_LIMIT {
        rounds = round;

        // Party volley.
        for i in 0..members.len() {
            if !members[i].1.alive() {
                continue;
            }
            let Some(target) = foes.iter_mut().find(|f| f.alive()) else {
                break;
            };
            strike(&members[i].1, target, rng);
            if !target.alive() {
                log.push(format!("{} is slain.", target.name));
            }
        }
        if foes.iter().all(|f| !f.alive()) {
            log.push(format!("The field is won in {rounds} rounds."));
            break;
        }

        // Foe volley.
        for i in 0..foes.len() {
            if !foes[i].alive() {
                continue;
            }
            let Some((_, target)) = members.iter_mut().find(|(_, m)| m.alive()) else {
                break;
            };
            strike(&foes[i], target, rng);
            if !target.alive() {
                log.push(format!("{} falls.", target.name));
            }
        }
        if members.iter().all(|(_, m)| !m.alive()) {
            log.push(format!("The party is routed in round {rounds}."));
            break;
        }
    }

    let victory = foes.iter().all(|f| !f.alive());
    if !victory && members.iter().any(|(_, m)| m.alive()) {
        log.push("The party withdraws, spent.".to_string());
    }
    let survivor_ids = members
        .iter()
        .filter(|(_, m)| m.alive())
        .map(|(id, _)| id.clone())
        .collect();

    BattleOutcome {
        victory,
        rounds,
        survivor_ids,
        log,
    }
}
