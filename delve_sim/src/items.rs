// The fixed 101-item loot table: names, slots, types, tiers, prices and the
// per-item specials derivation.
//
// Ids partition into contiguous families:
//   1–3    necklaces (Neck)            4–8    rings (Ring)
//   9–16   magic weapons (wands/books) 17–41  cloth armor
//   42–46  blades                      47–71  hide armor
//   72–76  bludgeons                   77–101 metal armor
// Each armor family is five five-id bands (chest, head, waist, foot, hand),
// and each band runs T1..T5 in id order. Magic weapons run T1,T2,T3,T5 twice.
// Jewelry is T1 except SilverRing (T2) and BronzeRing (T3).
//
// Every lookup is a pure function of the id. Id 0 (an empty slot) and ids
// past 101 resolve to `None`.
//
// See also: `adventurer.rs` for the `Item` record that delegates here,
// `specials.rs` for the name tables, `market.rs` for market generation.

use crate::config::MarketConfig;
use crate::specials::Specials;
use crate::types::{ItemType, Slot, Tier};
use smallvec::SmallVec;

pub const NUM_ITEMS: u8 = 101;

/// Greatness at which an item's suffix unlocks.
pub const SUFFIX_UNLOCK_GREATNESS: u8 = 15;
/// Greatness at which an item's name prefix/suffix pair unlocks.
pub const PREFIX_UNLOCK_GREATNESS: u8 = 19;

pub const ITEM_NAMES: [&str; 101] = [
    "Pendant",
    "Necklace",
    "Amulet",
    "Silver Ring",
    "Bronze Ring",
    "Platinum Ring",
    "Titanium Ring",
    "Gold Ring",
    "Ghost Wand",
    "Grave Wand",
    "Bone Wand",
    "Wand",
    "Grimoire",
    "Chronicle",
    "Tome",
    "Book",
    "Divine Robe",
    "Silk Robe",
    "Linen Robe",
    "Robe",
    "Shirt",
    "Crown",
    "Divine Hood",
    "Silk Hood",
    "Linen Hood",
    "Hood",
    "Brightsilk Sash",
    "Silk Sash",
    "Wool Sash",
    "Linen Sash",
    "Sash",
    "Divine Slippers",
    "Silk Slippers",
    "Wool Shoes",
    "Linen Shoes",
    "Shoes",
    "Divine Gloves",
    "Silk Gloves",
    "Wool Gloves",
    "Linen Gloves",
    "Gloves",
    "Katana",
    "Falchion",
    "Scimitar",
    "Long Sword",
    "Short Sword",
    "Demon Husk",
    "Dragonskin Armor",
    "Studded Leather Armor",
    "Hard Leather Armor",
    "Leather Armor",
    "Demon Crown",
    "Dragons Crown",
    "War Cap",
    "Leather Cap",
    "Cap",
    "Demonhide Belt",
    "Dragonskin Belt",
    "Studded Leather Belt",
    "Hard Leather Belt",
    "Leather Belt",
    "Demonhide Boots",
    "Dragonskin Boots",
    "Studded Leather Boots",
    "Hard Leather Boots",
    "Leather Boots",
    "Demons Hands",
    "Dragonskin Gloves",
    "Studded Leather Gloves",
    "Hard Leather Gloves",
    "Leather Gloves",
    "Warhammer",
    "Quarterstaff",
    "Maul",
    "Mace",
    "Club",
    "Holy Chestplate",
    "Ornate Chestplate",
    "Plate Mail",
    "Chain Mail",
    "Ring Mail",
    "Ancient Helm",
    "Ornate Helm",
    "Great Helm",
    "Full Helm",
    "Helm",
    "Ornate Belt",
    "War Belt",
    "Plated Belt",
    "Mesh Belt",
    "Heavy Belt",
    "Holy Greaves",
    "Ornate Greaves",
    "Greaves",
    "Chain Boots",
    "Heavy Boots",
    "Holy Gauntlets",
    "Ornate Gauntlets",
    "Gauntlets",
    "Chain Gloves",
    "Heavy Gloves",
];

// Ids referenced by combat rules.
pub const PENDANT: u8 = 1;
pub const NECKLACE: u8 = 2;
pub const AMULET: u8 = 3;
pub const SILVER_RING: u8 = 4;
pub const BRONZE_RING: u8 = 5;
pub const PLATINUM_RING: u8 = 6;
pub const TITANIUM_RING: u8 = 7;
pub const GOLD_RING: u8 = 8;

const ARMOR_BANDS: [Slot; 5] = [Slot::Chest, Slot::Head, Slot::Waist, Slot::Foot, Slot::Hand];
const PHYSICAL_BANDS: [Slot; 6] = [
    Slot::Weapon,
    Slot::Chest,
    Slot::Head,
    Slot::Waist,
    Slot::Foot,
    Slot::Hand,
];

pub fn is_valid_item(id: u8) -> bool {
    (1..=NUM_ITEMS).contains(&id)
}

pub fn item_name(id: u8) -> Option<&'static str> {
    is_valid_item(id).then(|| ITEM_NAMES[usize::from(id - 1)])
}

pub fn item_tier(id: u8) -> Option<Tier> {
    let tier = match id {
        1..=3 | 6..=8 => Tier::T1,
        SILVER_RING => Tier::T2,
        BRONZE_RING => Tier::T3,
        9..=16 => [Tier::T1, Tier::T2, Tier::T3, Tier::T5][usize::from((id - 9) % 4)],
        17..=41 => Tier::from_band_position(id - 17),
        42..=71 => Tier::from_band_position(id - 42),
        72..=101 => Tier::from_band_position(id - 72),
        _ => return None,
    };
    Some(tier)
}

pub fn item_slot(id: u8) -> Option<Slot> {
    let slot = match id {
        1..=3 => Slot::Neck,
        4..=8 => Slot::Ring,
        9..=16 => Slot::Weapon,
        17..=41 => ARMOR_BANDS[usize::from((id - 17) / 5)],
        42..=71 => PHYSICAL_BANDS[usize::from((id - 42) / 5)],
        72..=101 => PHYSICAL_BANDS[usize::from((id - 72) / 5)],
        _ => return None,
    };
    Some(slot)
}

pub fn item_type(id: u8) -> Option<ItemType> {
    let item_type = match id {
        1..=3 => ItemType::Necklace,
        4..=8 => ItemType::Ring,
        9..=16 => ItemType::Magic,
        17..=41 => ItemType::Cloth,
        42..=46 => ItemType::Blade,
        47..=71 => ItemType::Hide,
        72..=76 => ItemType::Bludgeon,
        77..=101 => ItemType::Metal,
        _ => return None,
    };
    Some(item_type)
}

/// 0-based position of `id` among the items sharing its slot, in id order.
pub fn item_index(id: u8) -> Option<u32> {
    let slot = item_slot(id)?;
    let before = (1..id).filter(|&other| item_slot(other) == Some(slot)).count();
    Some(before as u32)
}

/// All ids of a tier in ascending order.
pub fn ids_of_tier(tier: Tier) -> SmallVec<[u8; 32]> {
    (1..=NUM_ITEMS).filter(|&id| item_tier(id) == Some(tier)).collect()
}

/// Market price: `tier.power() * price_unit`, discounted per charisma point,
/// never below `min_price`.
pub fn item_price(tier: Tier, charisma: u8, config: &MarketConfig) -> u32 {
    let base = tier.power() * config.price_unit;
    let discount = u32::from(charisma) * config.charisma_discount;
    base.saturating_sub(discount).max(config.min_price)
}

/// Scramble an item id with the adventurer's specials seed into the index
/// the special tables are drawn from.
pub fn specials_seed(id: u8, item_specials_seed: u16) -> Option<u32> {
    let slot = item_slot(id)?;
    let index = item_index(id)?;
    let mut entropy = u32::from(item_specials_seed) + u32::from(id);
    if entropy > u32::from(u16::MAX) {
        entropy = u32::from(u16::MAX) - u32::from(id) * 2;
    }
    let rnd = entropy % u32::from(NUM_ITEMS);
    Some(rnd * slot.length() + index)
}

/// Specials for an item at `greatness`, revealed by the adventurer's seed.
///
/// A zero seed means the ledger has not revealed specials yet.
pub fn item_specials(id: u8, greatness: u8, item_specials_seed: u16) -> Specials {
    if item_specials_seed == 0 || greatness < SUFFIX_UNLOCK_GREATNESS {
        return Specials::NONE;
    }
    let Some(seed) = specials_seed(id, item_specials_seed) else {
        return Specials::NONE;
    };
    let suffix = Some((seed % 16) as u8 + 1);
    if greatness < PREFIX_UNLOCK_GREATNESS {
        return Specials {
            suffix,
            ..Specials::NONE
        };
    }
    Specials {
        suffix,
        name_prefix: Some((seed % 69) as u8 + 1),
        name_suffix: Some((seed % 18) as u8 + 1),
    }
}
