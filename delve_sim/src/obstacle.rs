// Obstacles and discoveries: the two non-beast outcomes of exploring.
//
// Obstacles mirror beasts exactly for id, tier and level (same 75-id table
// shape, same `roll_id`/`roll_level`), but have no health or specials. Their
// family only sets the damage type: Magic (1–25), Blade (26–50), Bludgeon
// (51–75).
//
// Discoveries pick a kind by percentile, `rnd2 % 100`: the gold band first,
// then the health band, and loot for the rest. Gold and health amounts are
// `rnd3 % level + 1`; health is doubled. Loot draws a tier from the rarity
// bands below and then an item of that tier.
//
// Rarity bands (percent): T5 50, T4 30, T3 12, T2 6, T1 2.

use crate::beast::{NUM_BEASTS, roll_id, roll_level, tier_of_id};
use crate::config::GameConfig;
use crate::items::ids_of_tier;
use crate::rng::Randomness;
use crate::types::{AttackType, Tier};
use serde::{Deserialize, Serialize};

pub const OBSTACLE_NAMES: [&str; 75] = [
    "Demonic Altar",
    "Vortex of Despair",
    "Eldritch Barrier",
    "Soul Trap",
    "Phantom Vortex",
    "Ectoplasm Barrier",
    "Spectral Chains",
    "Infernal Pact",
    "Arcane Explosion",
    "Hypnotic Essence",
    "Mischievous Sprites",
    "Soul Draining Statue",
    "Petrifying Gaze",
    "Wicked Incubus",
    "Cursed Orb",
    "Bewitching Fog",
    "Interdimensional Rift",
    "Hexed Mirror",
    "Whispering Shadows",
    "Wailing Spirits",
    "Haunted Echo",
    "Flickering Wisps",
    "Ghostly Lights",
    "Ominous Chant",
    "Will-o-the-Wisp",
    "Pendulum Blades",
    "Icy Razor Winds",
    "Acidic Thorns",
    "Dragons Breath",
    "Pendulum Scythe",
    "Flame Jet",
    "Piercing Ice Darts",
    "Glass Sand Storm",
    "Poisoned Dart Wall",
    "Spinning Blade Wheel",
    "Poison Dart",
    "Spiked Tumbleweed",
    "Thunderbolt",
    "Giant Bear Trap",
    "Steel Needle Rain",
    "Spiked Pit",
    "Diamond Dust Storm",
    "Trapdoor Scorpion Pit",
    "Bladed Fan",
    "Bear Trap",
    "Porcupine Quill",
    "Hidden Arrow",
    "Glass Shard",
    "Thorn Bush",
    "Jagged Rocks",
    "Collapsing Ceiling",
    "Rockslide",
    "Flash Flood",
    "Clinging Roots",
    "Collapsing Cavern",
    "Crushing Walls",
    "Smashing Pillars",
    "Rumbling Catacomb",
    "Whirling Cyclone",
    "Erupting Earth",
    "Subterranean Tremor",
    "Falling Chandelier",
    "Collapsing Bridge",
    "Raging Sandstorm",
    "Avalanching Rocks",
    "Tumbling Boulders",
    "Slamming Iron Gate",
    "Shifting Sandtrap",
    "Erupting Mud Geyser",
    "Crumbling Staircase",
    "Swinging Logs",
    "Unstable Cliff",
    "Toppling Statue",
    "Tumbling Barrels",
    "Rolling Boulder",
];

/// A generated obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u8,
    pub level: u16,
    pub tier: Tier,
    pub obstacle_type: AttackType,
}

impl Obstacle {
    pub fn name(&self) -> &'static str {
        obstacle_name(self.id).unwrap_or("Unknown")
    }

    /// `level * (6 - tier)`: base damage before armor.
    pub fn power(&self) -> u32 {
        u32::from(self.level) * self.tier.power()
    }
}

pub fn obstacle_name(id: u8) -> Option<&'static str> {
    (1..=NUM_BEASTS)
        .contains(&id)
        .then(|| OBSTACLE_NAMES[usize::from(id - 1)])
}

pub fn obstacle_type(id: u8) -> Option<AttackType> {
    match id {
        1..=25 => Some(AttackType::Magic),
        26..=50 => Some(AttackType::Blade),
        51..=75 => Some(AttackType::Bludgeon),
        _ => None,
    }
}

pub fn obstacle_from_randomness(rnd: &Randomness, adventurer_level: u8, config: &GameConfig) -> Obstacle {
    let id = roll_id(rnd.rnd1);
    Obstacle {
        id,
        level: roll_level(adventurer_level, rnd.rnd4, &config.beast),
        tier: tier_of_id(id).unwrap_or(Tier::T5),
        obstacle_type: obstacle_type(id).unwrap_or(AttackType::Magic),
    }
}

// ---------------------------------------------------------------------------
// Discoveries
// ---------------------------------------------------------------------------

/// What exploring turned up instead of a fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discovery {
    Gold { amount: u16 },
    Health { amount: u16 },
    Loot { item_id: u8 },
}

/// Tier drawn by a 0..100 rarity percentile.
pub fn loot_tier(percentile: u32) -> Tier {
    match percentile {
        0..50 => Tier::T5,
        50..80 => Tier::T4,
        80..92 => Tier::T3,
        92..98 => Tier::T2,
        _ => Tier::T1,
    }
}

/// Item found by a loot discovery: rarity from `rnd4`, item within the tier
/// from `rnd1`.
pub fn loot_item(rnd: &Randomness) -> u8 {
    let ids = ids_of_tier(loot_tier(u32::from(rnd.rnd4) % 100));
    // Every tier holds at least one id.
    ids[rnd.rnd1 as usize % ids.len()]
}

pub fn discovery_from_randomness(rnd: &Randomness, adventurer_level: u8, config: &GameConfig) -> Discovery {
    let bands = &config.encounter;
    let percentile = rnd.rnd2 % 100;
    let amount = (u32::from(rnd.rnd3) % u32::from(adventurer_level.max(1)) + 1) as u16;

    if percentile < bands.gold_discovery_percent {
        Discovery::Gold { amount }
    } else if percentile < bands.gold_discovery_percent + bands.health_discovery_percent {
        Discovery::Health { amount: amount * 2 }
    } else {
        Discovery::Loot {
            item_id: loot_item(rnd),
        }
    }
}
