// Adventurer, equipment and bag records.
//
// These are the structured forms of the two packed integers the ledger
// publishes (see `codec.rs`). The host decodes a fresh `Adventurer`/`Bag` on
// every new packed value and replaces the old one wholesale; the core never
// patches them incrementally.
//
// Every numeric field has a fixed bit width on the ledger. The typed setters
// here clamp to that width instead of rejecting, so any value a setter stores
// is guaranteed to re-encode losslessly.

use crate::codec::{
    ACTION_COUNT_BITS, BEAST_HEALTH_BITS, GOLD_BITS, HEALTH_BITS, ITEM_ID_BITS, ITEM_XP_BITS,
    SPECIALS_SEED_BITS, STAT_BITS, STAT_UPGRADES_BITS, XP_BITS,
};
use crate::config::AdventurerConfig;
use crate::items;
use crate::specials::Specials;
use crate::types::{ItemType, Slot, Stat, Tier, greatness_from_xp, level_from_xp};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of positional bag slots.
pub const BAG_SIZE: usize = 15;

const fn field_max(bits: u32) -> u32 {
    (1 << bits) - 1
}

fn clamp_u8(value: u32, bits: u32) -> u8 {
    value.min(field_max(bits)) as u8
}

fn clamp_u16(value: u32, bits: u32) -> u16 {
    value.min(field_max(bits)) as u16
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// One piece of loot. Id 0 is an empty slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: u8,
    pub xp: u16,
}

impl Item {
    pub const EMPTY: Item = Item { id: 0, xp: 0 };

    /// Build an item, clamping id to 7 bits and xp to 9 bits.
    pub fn new(id: u8, xp: u16) -> Self {
        Self {
            id: clamp_u8(u32::from(id), ITEM_ID_BITS),
            xp: clamp_u16(u32::from(xp), ITEM_XP_BITS),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id == 0
    }

    /// Item level, the gate for unlocking specials.
    pub fn greatness(&self) -> u8 {
        greatness_from_xp(self.xp)
    }

    pub fn tier(&self) -> Option<Tier> {
        items::item_tier(self.id)
    }

    pub fn slot(&self) -> Option<Slot> {
        items::item_slot(self.id)
    }

    pub fn item_type(&self) -> Option<ItemType> {
        items::item_type(self.id)
    }

    pub fn name(&self) -> Option<&'static str> {
        items::item_name(self.id)
    }

    /// `greatness * (6 - tier)`: the item's contribution to attack, armor and
    /// gear score. Zero for an empty slot.
    pub fn power(&self) -> u32 {
        self.tier().map_or(0, |tier| u32::from(self.greatness()) * tier.power())
    }

    pub fn specials(&self, item_specials_seed: u16) -> Specials {
        if self.is_empty() {
            return Specials::NONE;
        }
        items::item_specials(self.id, self.greatness(), item_specials_seed)
    }

    /// Display name with unlocked specials, e.g. `"Agony Bane Katana of Power"`.
    pub fn full_name(&self, item_specials_seed: u16) -> Option<String> {
        let base = self.name()?;
        let specials = self.specials(item_specials_seed);
        let mut name = String::new();
        if let Some(pair) = specials.name_pair() {
            name.push_str(&pair);
            name.push(' ');
        }
        name.push_str(base);
        if let Some(suffix) = specials.suffix_name() {
            name.push(' ');
            name.push_str(suffix);
        }
        Some(name)
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// The six attributes, each a 5-bit field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub strength: u8,
    pub dexterity: u8,
    pub vitality: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
}

impl Stats {
    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Dexterity => self.dexterity,
            Stat::Vitality => self.vitality,
            Stat::Intelligence => self.intelligence,
            Stat::Wisdom => self.wisdom,
            Stat::Charisma => self.charisma,
        }
    }

    /// Set one attribute, clamped to 31.
    pub fn set(&mut self, stat: Stat, value: u8) {
        let value = clamp_u8(u32::from(value), STAT_BITS);
        let field = match stat {
            Stat::Strength => &mut self.strength,
            Stat::Dexterity => &mut self.dexterity,
            Stat::Vitality => &mut self.vitality,
            Stat::Intelligence => &mut self.intelligence,
            Stat::Wisdom => &mut self.wisdom,
            Stat::Charisma => &mut self.charisma,
        };
        *field = value;
    }
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

/// The eight equipped items. An empty slot holds `Item::EMPTY`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Item,
    pub chest: Item,
    pub head: Item,
    pub waist: Item,
    pub foot: Item,
    pub hand: Item,
    pub neck: Item,
    pub ring: Item,
}

impl Equipment {
    pub fn get(&self, slot: Slot) -> Item {
        match slot {
            Slot::Weapon => self.weapon,
            Slot::Chest => self.chest,
            Slot::Head => self.head,
            Slot::Waist => self.waist,
            Slot::Foot => self.foot,
            Slot::Hand => self.hand,
            Slot::Neck => self.neck,
            Slot::Ring => self.ring,
        }
    }

    pub fn set(&mut self, slot: Slot, item: Item) {
        let field = match slot {
            Slot::Weapon => &mut self.weapon,
            Slot::Chest => &mut self.chest,
            Slot::Head => &mut self.head,
            Slot::Waist => &mut self.waist,
            Slot::Foot => &mut self.foot,
            Slot::Hand => &mut self.hand,
            Slot::Neck => &mut self.neck,
            Slot::Ring => &mut self.ring,
        };
        *field = item;
    }

    /// All slots in packed order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Item)> + '_ {
        Slot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }

    /// Greatness of the equipped jewelry piece if it is exactly `id`.
    pub(crate) fn jewelry_greatness(&self, id: u8) -> Option<u8> {
        [self.neck, self.ring]
            .into_iter()
            .find(|item| item.id == id)
            .map(|item| item.greatness())
    }
}

// ---------------------------------------------------------------------------
// Adventurer
// ---------------------------------------------------------------------------

/// The decoded adventurer record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Adventurer {
    pub health: u16,
    pub xp: u16,
    pub gold: u16,
    pub beast_health: u16,
    pub stat_upgrades_available: u8,
    pub stats: Stats,
    pub equipment: Equipment,
    pub item_specials_seed: u16,
    pub action_count: u16,
}

impl Adventurer {
    pub fn level(&self) -> u8 {
        level_from_xp(self.xp)
    }

    /// `starting_health + vitality * health_per_vitality`, capped at the
    /// 10-bit field width.
    pub fn max_health(&self, config: &AdventurerConfig) -> u16 {
        let max = config.starting_health
            + u32::from(self.stats.vitality) * config.health_per_vitality;
        max.min(u32::from(config.max_health)) as u16
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// True while a beast is engaged (the ledger keeps its health non-zero).
    pub fn in_battle(&self) -> bool {
        self.beast_health > 0
    }

    pub fn set_health(&mut self, health: u16) {
        self.health = clamp_u16(u32::from(health), HEALTH_BITS);
    }

    pub fn set_xp(&mut self, xp: u16) {
        self.xp = clamp_u16(u32::from(xp), XP_BITS);
    }

    pub fn set_gold(&mut self, gold: u16) {
        self.gold = clamp_u16(u32::from(gold), GOLD_BITS);
    }

    pub fn set_beast_health(&mut self, beast_health: u16) {
        self.beast_health = clamp_u16(u32::from(beast_health), BEAST_HEALTH_BITS);
    }

    pub fn set_stat_upgrades_available(&mut self, upgrades: u8) {
        self.stat_upgrades_available = clamp_u8(u32::from(upgrades), STAT_UPGRADES_BITS);
    }

    pub fn set_stat(&mut self, stat: Stat, value: u8) {
        self.stats.set(stat, value);
    }

    pub fn set_item_specials_seed(&mut self, seed: u16) {
        self.item_specials_seed = clamp_u16(u32::from(seed), SPECIALS_SEED_BITS);
    }

    pub fn set_action_count(&mut self, count: u16) {
        self.action_count = clamp_u16(u32::from(count), ACTION_COUNT_BITS);
    }

    /// Equip an item into its own slot. Empty or unknown items are ignored.
    pub fn equip(&mut self, item: Item) {
        if let Some(slot) = item.slot() {
            self.equipment.set(slot, Item::new(item.id, item.xp));
        }
    }
}

// ---------------------------------------------------------------------------
// Bag
// ---------------------------------------------------------------------------

/// Positional inventory. Slot order is significant for the packed encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bag {
    pub slots: [Item; BAG_SIZE],
}

impl Bag {
    pub fn get(&self, index: usize) -> Option<Item> {
        self.slots.get(index).copied()
    }

    /// Place an item at a positional slot. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, item: Item) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Item::new(item.id, item.xp);
        }
    }

    /// Non-empty items, in slot order.
    pub fn items(&self) -> SmallVec<[Item; BAG_SIZE]> {
        self.slots.iter().copied().filter(|item| !item.is_empty()).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|item| !item.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
