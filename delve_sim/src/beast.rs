// Beast table and beast generation.
//
// 75 beasts in three 25-id families: Magic (1–25), Hunter (26–50) and Brute
// (51–75). Within a family each five-id band is one tier, T1 first. The family
// fixes both how a beast attacks and what armor it wears:
//   Magic  -> attacks Magic,    wears Cloth
//   Hunter -> attacks Blade,    wears Hide
//   Brute  -> attacks Bludgeon, wears Metal
//
// `get_beast` reproduces the ledger's generator. At xp <= 1 the adventurer
// meets a starter beast: a T5 beast from the family weak against their
// weapon, with fixed health and level 1. Otherwise id, health, level and
// specials come from the named rolls of `get_randomness(xp, seed)` (see
// `delve_rng`), scaled by the adventurer's level.
//
// Rewards (`gold_reward`, `xp_reward`) are shared with obstacles.
//
// See also: `combat.rs` for damage in both directions, `obstacle.rs` which
// reuses `roll_id` and `roll_level`, `encounter.rs` for the lookahead.

use crate::adventurer::{Equipment, Item};
use crate::config::{BeastConfig, GameConfig};
use crate::items::GOLD_RING;
use crate::rng::{Randomness, get_randomness};
use crate::specials::Specials;
use crate::types::{ArmorType, AttackType, ItemType, Tier, level_from_xp};
use serde::{Deserialize, Serialize};

pub const NUM_BEASTS: u8 = 75;

/// Beast level at which name specials appear.
pub const BEAST_SPECIALS_LEVEL: u16 = 19;

pub const BEAST_NAMES: [&str; 75] = [
    "Warlock",
    "Typhon",
    "Jiangshi",
    "Anansi",
    "Basilisk",
    "Gorgon",
    "Kitsune",
    "Lich",
    "Chimera",
    "Wendigo",
    "Rakshasa",
    "Werewolf",
    "Banshee",
    "Draugr",
    "Vampire",
    "Goblin",
    "Ghoul",
    "Wraith",
    "Sprite",
    "Kappa",
    "Fairy",
    "Leprechaun",
    "Kelpie",
    "Pixie",
    "Gnome",
    "Griffin",
    "Manticore",
    "Phoenix",
    "Dragon",
    "Minotaur",
    "Qilin",
    "Ammit",
    "Nue",
    "Skinwalker",
    "Chupacabra",
    "Weretiger",
    "Wyvern",
    "Roc",
    "Harpy",
    "Pegasus",
    "Hippogriff",
    "Fenrir",
    "Jaguar",
    "Satori",
    "Direwolf",
    "Bear",
    "Wolf",
    "Mantis",
    "Spider",
    "Rat",
    "Kraken",
    "Colossus",
    "Balrog",
    "Leviathan",
    "Tarrasque",
    "Titan",
    "Nephilim",
    "Behemoth",
    "Hydra",
    "Juggernaut",
    "Oni",
    "Jotunn",
    "Ettin",
    "Cyclops",
    "Giant",
    "Nemean Lion",
    "Berserker",
    "Yeti",
    "Golem",
    "Ent",
    "Troll",
    "Bigfoot",
    "Ogre",
    "Orc",
    "Skeleton",
];

/// Beast family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeastType {
    Magic,
    Hunter,
    Brute,
}

impl BeastType {
    pub fn attack_type(self) -> AttackType {
        match self {
            BeastType::Magic => AttackType::Magic,
            BeastType::Hunter => AttackType::Blade,
            BeastType::Brute => AttackType::Bludgeon,
        }
    }

    pub fn armor_type(self) -> ArmorType {
        self.attack_type().native_armor()
    }
}

/// A generated beast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Beast {
    pub id: u8,
    pub health: u16,
    pub level: u16,
    pub beast_type: BeastType,
    pub tier: Tier,
    /// Name prefix/suffix; populated only at level 19 and above.
    pub specials: Specials,
}

impl Beast {
    pub fn name(&self) -> &'static str {
        beast_name(self.id).unwrap_or("Unknown")
    }

    /// `level * (6 - tier)`: base attack, and the armor an adventurer's hit
    /// must get through.
    pub fn power(&self) -> u32 {
        u32::from(self.level) * self.tier.power()
    }

    /// `"Agony Bane Warlock"` once specials are present.
    pub fn full_name(&self) -> String {
        match self.specials.name_pair() {
            Some(pair) => format!("{pair} {}", self.name()),
            None => self.name().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Table lookups
// ---------------------------------------------------------------------------

pub fn beast_name(id: u8) -> Option<&'static str> {
    (1..=NUM_BEASTS)
        .contains(&id)
        .then(|| BEAST_NAMES[usize::from(id - 1)])
}

pub fn beast_type(id: u8) -> Option<BeastType> {
    match id {
        1..=25 => Some(BeastType::Magic),
        26..=50 => Some(BeastType::Hunter),
        51..=75 => Some(BeastType::Brute),
        _ => None,
    }
}

/// Tier of a beast or obstacle id: the five-id band within its 25-id family.
pub fn tier_of_id(id: u8) -> Option<Tier> {
    (1..=NUM_BEASTS)
        .contains(&id)
        .then(|| Tier::ALL[usize::from((id - 1) % 25 / 5)])
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Id roll shared by beasts and obstacles.
pub fn roll_id(rnd1: u32) -> u8 {
    (rnd1 % u32::from(NUM_BEASTS)) as u8 + 1
}

/// Level roll shared by beasts and obstacles.
pub fn roll_level(adventurer_level: u8, rnd4: u16, config: &BeastConfig) -> u16 {
    let level = u32::from(adventurer_level);
    let range = (level * config.level_multiplier).max(1);
    let bonus = match level {
        50.. => 80,
        40.. => 40,
        30.. => 20,
        20.. => 10,
        _ => 0,
    };
    (1 + u32::from(rnd4) % range + bonus) as u16
}

pub fn roll_health(adventurer_level: u8, rnd3: u16, config: &BeastConfig) -> u16 {
    let level = u32::from(adventurer_level);
    let range = (level * config.health_per_level).max(1);
    let bonus = match level {
        50.. => 500,
        40.. => 400,
        30.. => 200,
        20.. => 100,
        _ => 10,
    };
    (1 + u32::from(rnd3) % range + bonus).min(u32::from(config.max_health)) as u16
}

fn roll_specials(level: u16, rnd5: u8, rnd6: u8) -> Specials {
    if level < BEAST_SPECIALS_LEVEL {
        return Specials::NONE;
    }
    Specials {
        suffix: None,
        name_prefix: Some(rnd5 % 69 + 1),
        name_suffix: Some(rnd6 % 18 + 1),
    }
}

/// Build a beast from already-derived rolls.
pub fn beast_from_randomness(rnd: &Randomness, adventurer_level: u8, config: &BeastConfig) -> Beast {
    let id = roll_id(rnd.rnd1);
    let level = roll_level(adventurer_level, rnd.rnd4, config);
    Beast {
        id,
        health: roll_health(adventurer_level, rnd.rnd3, config),
        level,
        // `roll_id` stays inside 1..=75, so both lookups hit.
        beast_type: beast_type(id).unwrap_or(BeastType::Magic),
        tier: tier_of_id(id).unwrap_or(Tier::T5),
        specials: roll_specials(level, rnd.rnd5, rnd.rnd6),
    }
}

/// First id of the starter block chosen for the equipped weapon.
fn starter_offset(weapon: Item) -> u8 {
    match weapon.item_type() {
        Some(ItemType::Bludgeon) => 46,
        Some(ItemType::Magic) => 71,
        // Blade, and anything that is not a weapon, face the Blade block.
        _ => 21,
    }
}

pub fn starter_beast(seed: u64, weapon: Item, config: &BeastConfig) -> Beast {
    let id = (seed % 5) as u8 + starter_offset(weapon);
    Beast {
        id,
        health: config.starter_beast_health,
        level: 1,
        beast_type: beast_type(id).unwrap_or(BeastType::Magic),
        tier: tier_of_id(id).unwrap_or(Tier::T5),
        specials: Specials::NONE,
    }
}

/// The beast an adventurer at `xp` meets, given the ledger's beast seed.
pub fn get_beast(seed: u64, xp: u16, weapon: Item, config: &GameConfig) -> Beast {
    if xp <= 1 {
        return starter_beast(seed, weapon, &config.beast);
    }
    let rnd = get_randomness(xp, seed);
    beast_from_randomness(&rnd, level_from_xp(xp), &config.beast)
}

// ---------------------------------------------------------------------------
// Rewards
// ---------------------------------------------------------------------------

fn base_reward(tier: Tier, level: u16) -> u32 {
    tier.power() * u32::from(level)
}

/// Gold for slaying a beast, boosted by an equipped Gold Ring.
pub fn gold_reward(tier: Tier, level: u16, equipment: &Equipment, config: &GameConfig) -> u32 {
    let gold = base_reward(tier, level) / config.beast.gold_divisor;
    let bonus = equipment.jewelry_greatness(GOLD_RING).map_or(0, |greatness| {
        gold * u32::from(greatness) * config.combat.jewelry_bonus_percent_per_level / 100
    });
    gold + bonus
}

/// XP for slaying a beast or clearing an obstacle. Decays as the adventurer
/// outlevels the threat, never below `min_xp_reward`.
pub fn xp_reward(tier: Tier, level: u16, adventurer_level: u8, config: &BeastConfig) -> u32 {
    let base = base_reward(tier, level);
    let decay = (u32::from(adventurer_level) * config.xp_decay_percent_per_level)
        .min(config.xp_decay_cap_percent);
    (base - base * decay / 100).max(config.min_xp_reward)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_partition_is_total_and_disjoint() {
        for id in 1..=NUM_BEASTS {
            let tier = tier_of_id(id).unwrap();
            let family = beast_type(id).unwrap();
            let band = (id - 1) / 5;
            // Ids in the same five-id band share tier and family.
            for other in 1..=NUM_BEASTS {
                if (other - 1) / 5 == band {
                    assert_eq!(tier_of_id(other), Some(tier));
                    assert_eq!(beast_type(other), Some(family));
                }
            }
        }
        assert_eq!(tier_of_id(0), None);
        assert_eq!(beast_type(76), None);
    }

    #[test]
    fn known_beasts() {
        assert_eq!(beast_name(1), Some("Warlock"));
        assert_eq!(tier_of_id(1), Some(Tier::T1));
        assert_eq!(beast_type(1), Some(BeastType::Magic));
        assert_eq!(beast_name(29), Some("Dragon"));
        assert_eq!(tier_of_id(29), Some(Tier::T1));
        assert_eq!(beast_type(29), Some(BeastType::Hunter));
        assert_eq!(beast_name(75), Some("Skeleton"));
        assert_eq!(tier_of_id(75), Some(Tier::T5));
        assert_eq!(beast_type(75), Some(BeastType::Brute));
    }

    #[test]
    fn family_armor() {
        assert_eq!(BeastType::Magic.armor_type(), ArmorType::Cloth);
        assert_eq!(BeastType::Hunter.armor_type(), ArmorType::Hide);
        assert_eq!(BeastType::Brute.armor_type(), ArmorType::Metal);
    }

    #[test]
    fn starter_beast_with_zero_seed() {
        let config = GameConfig::default();
        let beast = get_beast(0, 1, Item::new(42, 0), &config);
        assert_eq!(beast.level, 1);
        assert_eq!(beast.health, config.beast.starter_beast_health);
        assert_eq!(beast.id, 21);
        assert_eq!(beast.specials, Specials::NONE);
    }

    #[test]
    fn starter_block_follows_weapon() {
        let config = GameConfig::default();
        for seed in 0..10u64 {
            let magic = get_beast(seed, 0, Item::new(12, 0), &config);
            assert!((71..=75).contains(&magic.id));
            assert_eq!(magic.beast_type, BeastType::Brute);

            let bludgeon = get_beast(seed, 1, Item::new(76, 0), &config);
            assert!((46..=50).contains(&bludgeon.id));
            assert_eq!(bludgeon.beast_type, BeastType::Hunter);

            let blade = get_beast(seed, 1, Item::new(46, 0), &config);
            assert!((21..=25).contains(&blade.id));

            let unarmed = get_beast(seed, 1, Item::EMPTY, &config);
            assert!((21..=25).contains(&unarmed.id));
            assert_eq!(unarmed.tier, Tier::T5);
        }
    }

    #[test]
    fn generated_beast_is_in_range() {
        let config = GameConfig::default();
        for xp in [2u16, 4, 50, 400, 900, 1600, 2500, 32767] {
            let beast = get_beast(987_654, xp, Item::EMPTY, &config);
            assert!((1..=NUM_BEASTS).contains(&beast.id));
            assert!(beast.health >= 1 && beast.health <= 1023);
            assert!(beast.level >= 1);
            assert_eq!(beast.specials.name_prefix.is_some(), beast.level >= BEAST_SPECIALS_LEVEL);
        }
    }

    #[test]
    fn level_and_health_rolls() {
        let config = BeastConfig::default();
        // Level 2: range 6, no bonus.
        assert_eq!(roll_level(2, 13, &config), 1 + 13 % 6);
        // Level 20: range 60, +10.
        assert_eq!(roll_level(20, 59, &config), 1 + 59 + 10);
        // Level 2: range 40, +10.
        assert_eq!(roll_health(2, 45, &config), 1 + 5 + 10);
        // Level 50: range 1000, +500, clamped.
        assert_eq!(roll_health(50, 999, &config), 1023);
    }

    #[test]
    fn specials_appear_at_level_19() {
        let config = BeastConfig::default();
        let rnd = Randomness {
            rnd1: 0,
            rnd2: 0,
            rnd3: 0,
            rnd4: 17,
            rnd5: 70,
            rnd6: 19,
            rnd7: 0,
            rnd8: 0,
        };
        // Adventurer level 10: level = 1 + 17 % 30 = 18, no specials.
        assert_eq!(beast_from_randomness(&rnd, 10, &config).specials, Specials::NONE);
        // rnd4 = 18 gives level 19.
        let rnd = Randomness { rnd4: 18, ..rnd };
        let beast = beast_from_randomness(&rnd, 10, &config);
        assert_eq!(beast.level, 19);
        assert_eq!(beast.specials.name_prefix, Some(2));
        assert_eq!(beast.specials.name_suffix, Some(2));
        assert_eq!(beast.id, 1);
        assert_eq!(beast.full_name(), "Apocalypse Root Warlock");
    }

    #[test]
    fn rewards() {
        let config = GameConfig::default();
        let mut equipment = Equipment::default();
        // T1 level 10: base 50, gold 25.
        assert_eq!(gold_reward(Tier::T1, 10, &equipment, &config), 25);
        // Gold Ring at greatness 10 adds 30%: 25 + 7.
        equipment.ring = Item::new(GOLD_RING, 100);
        assert_eq!(gold_reward(Tier::T1, 10, &equipment, &config), 32);

        // Base 50 at adventurer level 5 decays 10%: 45.
        assert_eq!(xp_reward(Tier::T1, 10, 5, &config.beast), 45);
        // Decay caps at 95%: 50 - 47 = 3, floored to 4.
        assert_eq!(xp_reward(Tier::T1, 10, 100, &config.beast), 4);
    }
}
