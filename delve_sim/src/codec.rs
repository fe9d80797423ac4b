// State codec: packed ledger integers <-> structured records.
//
// The ledger stores an adventurer in one 238-bit integer and a bag in one
// 240-bit integer. Fields sit at fixed offsets, least significant first:
//
//   adventurer                      bag
//   health          10b @   0       slot i          16b @ i*16   (i = 0..15)
//   xp              15b @  10
//   gold             9b @  25       item (16b)
//   beast_health    10b @  34       id               7b @ 0
//   stat_upgrades    4b @  44       xp               9b @ 7
//   stats (6 x 5b)  30b @  48
//   equipment (8 x 16b) 128b @ 78
//   action_count    16b @ 206
//   item_specials   16b @ 222
//
// Unpacking is total: `(packed >> offset) & mask` per field, and bits beyond
// the layout are ignored. Packing is the exact inverse for any record whose
// fields fit their widths (which the `Adventurer` setters guarantee).
//
// The strict `*_hex` entry points are for untrusted host input: they reject
// unparseable text and values with bits past the layout.
//
// **Critical constraint: determinism.** All arithmetic is on `U256`; nothing
// narrower than the full packed width ever holds the whole value.

use crate::adventurer::{Adventurer, BAG_SIZE, Bag, Equipment, Item, Stats};
use crate::error::DelveError;
use crate::types::Slot;
use ruint::aliases::U256;

pub const HEALTH_BITS: u32 = 10;
pub const XP_BITS: u32 = 15;
pub const GOLD_BITS: u32 = 9;
pub const BEAST_HEALTH_BITS: u32 = 10;
pub const STAT_UPGRADES_BITS: u32 = 4;
pub const STAT_BITS: u32 = 5;
pub const ITEM_ID_BITS: u32 = 7;
pub const ITEM_XP_BITS: u32 = 9;
pub const ITEM_BITS: u32 = ITEM_ID_BITS + ITEM_XP_BITS;
pub const ACTION_COUNT_BITS: u32 = 16;
pub const SPECIALS_SEED_BITS: u32 = 16;

/// Largest xp the packed adventurer can hold.
pub const MAX_XP: u16 = (1 << XP_BITS) - 1;

const HEALTH_OFFSET: usize = 0;
const XP_OFFSET: usize = 10;
const GOLD_OFFSET: usize = 25;
const BEAST_HEALTH_OFFSET: usize = 34;
const STAT_UPGRADES_OFFSET: usize = 44;
const STATS_OFFSET: usize = 48;
const EQUIPMENT_OFFSET: usize = 78;
const ACTION_COUNT_OFFSET: usize = 206;
const SPECIALS_SEED_OFFSET: usize = 222;

/// Total width of a packed adventurer.
pub const ADVENTURER_BITS: usize = 238;
/// Total width of a packed bag.
pub const BAG_BITS: usize = BAG_SIZE * ITEM_BITS as usize;

fn field(packed: U256, offset: usize, bits: u32) -> u64 {
    let mask = U256::from((1u64 << bits) - 1);
    ((packed >> offset) & mask).as_limbs()[0]
}

fn put(packed: &mut U256, offset: usize, bits: u32, value: u64) {
    let masked = value & ((1u64 << bits) - 1);
    *packed |= U256::from(masked) << offset;
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

fn unpack_item(packed: U256, offset: usize) -> Item {
    let raw = field(packed, offset, ITEM_BITS);
    Item {
        id: (raw & ((1 << ITEM_ID_BITS) - 1)) as u8,
        xp: (raw >> ITEM_ID_BITS) as u16,
    }
}

fn pack_item(packed: &mut U256, offset: usize, item: Item) {
    let id = u64::from(item.id) & ((1 << ITEM_ID_BITS) - 1);
    let xp = u64::from(item.xp) & ((1 << ITEM_XP_BITS) - 1);
    let raw = id | (xp << ITEM_ID_BITS);
    put(packed, offset, ITEM_BITS, raw);
}

fn equipment_offset(slot: Slot) -> usize {
    EQUIPMENT_OFFSET + slot.index() * ITEM_BITS as usize
}

// ---------------------------------------------------------------------------
// Adventurer
// ---------------------------------------------------------------------------

pub fn unpack_adventurer(packed: U256) -> Adventurer {
    let stat = |i: usize| field(packed, STATS_OFFSET + i * STAT_BITS as usize, STAT_BITS) as u8;

    let mut equipment = Equipment::default();
    for slot in Slot::ALL {
        equipment.set(slot, unpack_item(packed, equipment_offset(slot)));
    }

    Adventurer {
        health: field(packed, HEALTH_OFFSET, HEALTH_BITS) as u16,
        xp: field(packed, XP_OFFSET, XP_BITS) as u16,
        gold: field(packed, GOLD_OFFSET, GOLD_BITS) as u16,
        beast_health: field(packed, BEAST_HEALTH_OFFSET, BEAST_HEALTH_BITS) as u16,
        stat_upgrades_available: field(packed, STAT_UPGRADES_OFFSET, STAT_UPGRADES_BITS) as u8,
        stats: Stats {
            strength: stat(0),
            dexterity: stat(1),
            vitality: stat(2),
            intelligence: stat(3),
            wisdom: stat(4),
            charisma: stat(5),
        },
        equipment,
        action_count: field(packed, ACTION_COUNT_OFFSET, ACTION_COUNT_BITS) as u16,
        item_specials_seed: field(packed, SPECIALS_SEED_OFFSET, SPECIALS_SEED_BITS) as u16,
    }
}

pub fn pack_adventurer(adventurer: &Adventurer) -> U256 {
    let mut packed = U256::ZERO;
    put(&mut packed, HEALTH_OFFSET, HEALTH_BITS, adventurer.health.into());
    put(&mut packed, XP_OFFSET, XP_BITS, adventurer.xp.into());
    put(&mut packed, GOLD_OFFSET, GOLD_BITS, adventurer.gold.into());
    put(
        &mut packed,
        BEAST_HEALTH_OFFSET,
        BEAST_HEALTH_BITS,
        adventurer.beast_health.into(),
    );
    put(
        &mut packed,
        STAT_UPGRADES_OFFSET,
        STAT_UPGRADES_BITS,
        adventurer.stat_upgrades_available.into(),
    );

    let s = &adventurer.stats;
    let stats = [s.strength, s.dexterity, s.vitality, s.intelligence, s.wisdom, s.charisma];
    for (i, value) in stats.into_iter().enumerate() {
        put(&mut packed, STATS_OFFSET + i * STAT_BITS as usize, STAT_BITS, value.into());
    }

    for (slot, item) in adventurer.equipment.iter() {
        pack_item(&mut packed, equipment_offset(slot), item);
    }

    put(
        &mut packed,
        ACTION_COUNT_OFFSET,
        ACTION_COUNT_BITS,
        adventurer.action_count.into(),
    );
    put(
        &mut packed,
        SPECIALS_SEED_OFFSET,
        SPECIALS_SEED_BITS,
        adventurer.item_specials_seed.into(),
    );
    packed
}

// ---------------------------------------------------------------------------
// Bag
// ---------------------------------------------------------------------------

pub fn unpack_bag(packed: U256) -> Bag {
    let mut bag = Bag::default();
    for (i, slot) in bag.slots.iter_mut().enumerate() {
        *slot = unpack_item(packed, i * ITEM_BITS as usize);
    }
    bag
}

pub fn pack_bag(bag: &Bag) -> U256 {
    let mut packed = U256::ZERO;
    for (i, item) in bag.slots.iter().enumerate() {
        pack_item(&mut packed, i * ITEM_BITS as usize, *item);
    }
    packed
}

// ---------------------------------------------------------------------------
// Strict host-boundary parsing
// ---------------------------------------------------------------------------

/// Parse a packed integer from `0x`-prefixed hex or plain decimal.
pub fn parse_packed(input: &str) -> Result<U256, DelveError> {
    input
        .trim()
        .parse::<U256>()
        .map_err(|e| DelveError::InvalidPacked {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

fn parse_within(input: &str, max_bits: usize) -> Result<U256, DelveError> {
    let packed = parse_packed(input)?;
    let bits = packed.bit_len();
    if bits > max_bits {
        return Err(DelveError::PackedOverflow { bits, max_bits });
    }
    Ok(packed)
}

/// Parse and decode an adventurer, rejecting bits past the 238-bit layout.
pub fn unpack_adventurer_hex(input: &str) -> Result<Adventurer, DelveError> {
    parse_within(input, ADVENTURER_BITS).map(unpack_adventurer)
}

/// Parse and decode a bag, rejecting bits past the 240-bit layout.
pub fn unpack_bag_hex(input: &str) -> Result<Bag, DelveError> {
    parse_within(input, BAG_BITS).map(unpack_bag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stat;

    fn sample_adventurer() -> Adventurer {
        let mut adventurer = Adventurer::default();
        adventurer.set_health(1023);
        adventurer.set_xp(32767);
        adventurer.set_gold(511);
        adventurer.set_beast_health(77);
        adventurer.set_stat_upgrades_available(15);
        for (i, stat) in Stat::ALL.into_iter().enumerate() {
            adventurer.set_stat(stat, 31 - i as u8);
        }
        adventurer.equip(Item::new(42, 511));
        adventurer.equip(Item::new(77, 3));
        adventurer.equip(Item::new(22, 100));
        adventurer.equip(Item::new(91, 0));
        adventurer.equip(Item::new(36, 400));
        adventurer.equip(Item::new(101, 1));
        adventurer.equip(Item::new(3, 200));
        adventurer.equip(Item::new(8, 511));
        adventurer.set_action_count(65535);
        adventurer.set_item_specials_seed(40000);
        adventurer
    }

    #[test]
    fn low_fields_land_at_their_offsets() {
        let mut adventurer = Adventurer::default();
        adventurer.set_health(100);
        adventurer.set_xp(4);
        assert_eq!(pack_adventurer(&adventurer), U256::from(100u64 + (4u64 << 10)));
    }

    #[test]
    fn equipment_item_layout() {
        let mut adventurer = Adventurer::default();
        adventurer.equip(Item::new(42, 5));
        let expected = U256::from(42u64 | (5u64 << 7)) << 78;
        assert_eq!(pack_adventurer(&adventurer), expected);
    }

    #[test]
    fn adventurer_roundtrip_at_field_maxima() {
        let adventurer = sample_adventurer();
        let packed = pack_adventurer(&adventurer);
        assert!(packed.bit_len() <= ADVENTURER_BITS);
        assert_eq!(unpack_adventurer(packed), adventurer);
        assert_eq!(pack_adventurer(&unpack_adventurer(packed)), packed);
    }

    #[test]
    fn all_ones_roundtrip() {
        let packed = (U256::from(1u64) << ADVENTURER_BITS) - U256::from(1u64);
        assert_eq!(pack_adventurer(&unpack_adventurer(packed)), packed);
    }

    #[test]
    fn bits_past_layout_are_ignored() {
        let adventurer = sample_adventurer();
        let packed = pack_adventurer(&adventurer) | (U256::from(1u64) << 250);
        assert_eq!(unpack_adventurer(packed), adventurer);
    }

    #[test]
    fn bag_roundtrip_and_positions() {
        let mut bag = Bag::default();
        bag.set(0, Item::new(1, 1));
        bag.set(14, Item::new(101, 511));
        let packed = pack_bag(&bag);
        assert_eq!(packed >> 224, U256::from(101u64 | (511u64 << 7)));
        assert_eq!(packed & U256::from(0xffffu64), U256::from(1u64 | (1u64 << 7)));
        assert_eq!(unpack_bag(packed), bag);
    }

    #[test]
    fn zero_decodes_to_empty_records() {
        assert_eq!(unpack_adventurer(U256::ZERO), Adventurer::default());
        assert!(unpack_bag(U256::ZERO).is_empty());
    }

    #[test]
    fn parse_accepts_hex_and_decimal() {
        assert_eq!(parse_packed("0x1064").unwrap(), U256::from(4196u64));
        assert_eq!(parse_packed("4196").unwrap(), U256::from(4196u64));
        let adventurer = unpack_adventurer_hex("0x1064").unwrap();
        assert_eq!(adventurer.health, 100);
        assert_eq!(adventurer.xp, 4);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_packed("0xnothex").unwrap_err();
        assert!(matches!(err, DelveError::InvalidPacked { .. }));
    }

    #[test]
    fn strict_parse_rejects_overflow() {
        let too_wide = format!("0x{:x}", U256::from(1u64) << ADVENTURER_BITS);
        let err = unpack_adventurer_hex(&too_wide).unwrap_err();
        assert!(matches!(
            err,
            DelveError::PackedOverflow {
                bits: 239,
                max_bits: 238
            }
        ));
        // The same value fits a bag.
        assert!(unpack_bag_hex(&too_wide).is_ok());
    }
}
