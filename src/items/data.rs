//! Static item catalog.
//!
//! Everything a job or quest can drop is defined here. `value` is the coin
//! paid per unit when sold back to the guild.

#[derive(Debug, Clone, Copy)]
pub struct ItemDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub value: u64,
}

pub static ITEMS: &[ItemDefinition] = &[
    // Gathering drops
    ItemDefinition { id: "oak_log", name: "Oak Log", value: 3 },
    ItemDefinition { id: "amber_resin", name: "Amber Resin", value: 18 },
    ItemDefinition { id: "bitterroot", name: "Bitterroot", value: 4 },
    ItemDefinition { id: "moonpetal", name: "Moonpetal", value: 25 },
    ItemDefinition { id: "silver_carp", name: "Silver Carp", value: 6 },
    ItemDefinition { id: "pearl", name: "River Pearl", value: 60 },
    ItemDefinition { id: "copper_ore", name: "Copper Ore", value: 8 },
    ItemDefinition { id: "rough_gem", name: "Rough Gem", value: 45 },
    // Crafting drops
    ItemDefinition { id: "iron_ingot", name: "Iron Ingot", value: 14 },
    ItemDefinition { id: "forge_charm", name: "Forge Charm", value: 80 },
    ItemDefinition { id: "vellum_scroll", name: "Vellum Scroll", value: 16 },
    ItemDefinition { id: "sealing_wax", name: "Sealing Wax", value: 10 },
    ItemDefinition { id: "charged_shard", name: "Charged Shard", value: 22 },
    ItemDefinition { id: "storm_glass", name: "Storm Glass", value: 120 },
    ItemDefinition { id: "quicksilver", name: "Quicksilver", value: 30 },
    ItemDefinition { id: "philter", name: "Pale Philter", value: 200 },
    // Quest trophies
    ItemDefinition { id: "wolf_pelt", name: "Wolf Pelt", value: 12 },
    ItemDefinition { id: "bandit_insignia", name: "Bandit Insignia", value: 20 },
    ItemDefinition { id: "tide_opal", name: "Tide Opal", value: 70 },
    ItemDefinition { id: "cinder_heart", name: "Cinder Heart", value: 95 },
    ItemDefinition { id: "frost_sigil", name: "Frost Sigil", value: 130 },
    ItemDefinition { id: "crown_shard", name: "Crown Shard", value: 350 },
];

pub fn get_item(id: &str) -> Option<&'static ItemDefinition> {
    ITEMS.iter().find(|i| i.id == id)
}

/// Display name for an item id, falling back to the raw id for anything
/// that slipped out of the catalog (tampered saves).
pub fn item_name(id: &str) -> &str {
    get_item(id).map(|i| i.name).unwrap_or(id)
}
