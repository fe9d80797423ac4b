// Core enums and level math shared across the simulation.
//
// Defines the rarity tier, equipment slots, item and combat types, the six
// adventurer attributes, and the elemental effectiveness triangle. All types
// derive `Serialize`/`Deserialize` so the host can hand them straight to a
// renderer.
//
// Lookups that can miss (empty item slot, id outside a table) return `Option`
// rather than a sentinel variant; `None` is the "empty" answer.
//
// **Critical constraint: determinism.** Level math uses integer square roots
// only. No floating point.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Rarity rank. `T1` is the best, `T5` the worst.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    T1,
    T2,
    T3,
    T4,
    T5,
}

impl Tier {
    pub const ALL: [Tier; 5] = [Tier::T1, Tier::T2, Tier::T3, Tier::T4, Tier::T5];

    /// Numeric rank, 1 through 5.
    pub fn rank(self) -> u32 {
        match self {
            Tier::T1 => 1,
            Tier::T2 => 2,
            Tier::T3 => 3,
            Tier::T4 => 4,
            Tier::T5 => 5,
        }
    }

    /// `6 - rank`: the multiplier every damage, armor and reward formula uses.
    pub fn power(self) -> u32 {
        6 - self.rank()
    }

    /// Tier of the n-th id (0-based) within a five-id band.
    pub(crate) fn from_band_position(position: u8) -> Tier {
        Tier::ALL[usize::from(position % 5)]
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.rank())
    }
}

// ---------------------------------------------------------------------------
// Slots and item types
// ---------------------------------------------------------------------------

/// One of the eight equipment slots, in packed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    Weapon,
    Chest,
    Head,
    Waist,
    Foot,
    Hand,
    Neck,
    Ring,
}

impl Slot {
    /// All slots in the order they are packed.
    pub const ALL: [Slot; 8] = [
        Slot::Weapon,
        Slot::Chest,
        Slot::Head,
        Slot::Waist,
        Slot::Foot,
        Slot::Hand,
        Slot::Neck,
        Slot::Ring,
    ];

    /// The five slots a beast or obstacle can strike, indexed by `rnd7 % 5`.
    pub const ARMOR: [Slot; 5] = [Slot::Chest, Slot::Head, Slot::Waist, Slot::Foot, Slot::Hand];

    /// Position of this slot in the packed equipment block.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Number of distinct items that fit this slot.
    pub fn length(self) -> u32 {
        match self {
            Slot::Weapon => 18,
            Slot::Chest | Slot::Head | Slot::Waist | Slot::Foot | Slot::Hand => 15,
            Slot::Neck => 3,
            Slot::Ring => 5,
        }
    }

    pub fn is_armor(self) -> bool {
        Slot::ARMOR.contains(&self)
    }
}

/// Material or weapon family of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Necklace,
    Ring,
    Magic,
    Blade,
    Bludgeon,
    Cloth,
    Hide,
    Metal,
}

impl ItemType {
    /// The attack family, if this is a weapon type.
    pub fn attack_type(self) -> Option<AttackType> {
        match self {
            ItemType::Magic => Some(AttackType::Magic),
            ItemType::Blade => Some(AttackType::Blade),
            ItemType::Bludgeon => Some(AttackType::Bludgeon),
            _ => None,
        }
    }

    /// The armor material, if this is an armor type.
    pub fn armor_type(self) -> Option<ArmorType> {
        match self {
            ItemType::Cloth => Some(ArmorType::Cloth),
            ItemType::Hide => Some(ArmorType::Hide),
            ItemType::Metal => Some(ArmorType::Metal),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Combat typing
// ---------------------------------------------------------------------------

/// Damage family dealt by weapons, beasts and obstacles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackType {
    Magic,
    Blade,
    Bludgeon,
}

/// Armor material worn by adventurers and beasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmorType {
    Cloth,
    Hide,
    Metal,
}

/// Outcome of an attack type meeting an armor type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effectiveness {
    /// +50% of base damage.
    Strong,
    /// No adjustment.
    Fair,
    /// -50% of base damage.
    Weak,
}

impl AttackType {
    pub const ALL: [AttackType; 3] = [AttackType::Magic, AttackType::Blade, AttackType::Bludgeon];

    /// The elemental triangle: Magic beats Metal, Blade beats Cloth,
    /// Bludgeon beats Hide; each loses to the next material around the cycle.
    pub fn against(self, armor: ArmorType) -> Effectiveness {
        match (self, armor) {
            (AttackType::Magic, ArmorType::Metal)
            | (AttackType::Blade, ArmorType::Cloth)
            | (AttackType::Bludgeon, ArmorType::Hide) => Effectiveness::Strong,
            (AttackType::Magic, ArmorType::Hide)
            | (AttackType::Blade, ArmorType::Metal)
            | (AttackType::Bludgeon, ArmorType::Cloth) => Effectiveness::Weak,
            _ => Effectiveness::Fair,
        }
    }

    /// The armor worn by creatures of the same family: Magic wears Cloth,
    /// Blade wears Hide, Bludgeon wears Metal. This pairing is always `Fair`.
    pub fn native_armor(self) -> ArmorType {
        match self {
            AttackType::Magic => ArmorType::Cloth,
            AttackType::Blade => ArmorType::Hide,
            AttackType::Bludgeon => ArmorType::Metal,
        }
    }
}

impl ArmorType {
    pub const ALL: [ArmorType; 3] = [ArmorType::Cloth, ArmorType::Hide, ArmorType::Metal];
}

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

/// The six adventurer attributes, in packed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stat {
    Strength,
    Dexterity,
    Vitality,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Strength,
        Stat::Dexterity,
        Stat::Vitality,
        Stat::Intelligence,
        Stat::Wisdom,
        Stat::Charisma,
    ];
}

// ---------------------------------------------------------------------------
// Level math
// ---------------------------------------------------------------------------

/// Greatness never exceeds this, even though 9 bits of item xp would allow 22.
pub const MAX_GREATNESS: u8 = 20;

/// Floor of the square root, by Newton iteration on integers.
pub fn isqrt(n: u32) -> u32 {
    if n < 2 {
        return n;
    }
    let n = u64::from(n);
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x as u32
}

/// Adventurer level for a given xp. Zero xp is still level 1.
pub fn level_from_xp(xp: u16) -> u8 {
    // isqrt of a u16 is at most 255.
    isqrt(u32::from(xp)).max(1) as u8
}

/// Item greatness for a given item xp, capped at `MAX_GREATNESS`.
pub fn greatness_from_xp(xp: u16) -> u8 {
    level_from_xp(xp).min(MAX_GREATNESS)
}
