// Special name tables shared by items and beasts.
//
// Items and beasts can carry three kinds of special:
// - an item suffix ("of Power"), 16 entries, unlocked on items at greatness 15;
// - a name prefix ("Agony"), 69 entries;
// - a name suffix ("Bane"), 18 entries.
// The name prefix/suffix pair unlocks on items at greatness 19 and on beasts
// at level 19. A weapon whose name pair matches a beast's deals bonus damage.
//
// All tables are 1-indexed to match the ledger's encoding. Index 0 and
// anything past the end resolve to `None`.

use serde::{Deserialize, Serialize};

pub const ITEM_SUFFIXES: [&str; 16] = [
    "of Power",
    "of Giant",
    "of Titans",
    "of Skill",
    "of Perfection",
    "of Brilliance",
    "of Enlightenment",
    "of Protection",
    "of Anger",
    "of Rage",
    "of Fury",
    "of Vitriol",
    "of the Fox",
    "of Detection",
    "of Reflection",
    "of the Twins",
];

pub const NAME_PREFIXES: [&str; 69] = [
    "Agony",
    "Apocalypse",
    "Armageddon",
    "Beast",
    "Behemoth",
    "Blight",
    "Blood",
    "Bramble",
    "Brimstone",
    "Brood",
    "Carrion",
    "Cataclysm",
    "Chimeric",
    "Corpse",
    "Corruption",
    "Damnation",
    "Death",
    "Demon",
    "Dire",
    "Dragon",
    "Dread",
    "Doom",
    "Dusk",
    "Eagle",
    "Empyrean",
    "Fate",
    "Foe",
    "Gale",
    "Ghoul",
    "Gloom",
    "Glyph",
    "Golem",
    "Grim",
    "Hate",
    "Havoc",
    "Honour",
    "Horror",
    "Hypnotic",
    "Kraken",
    "Loath",
    "Maelstrom",
    "Mind",
    "Miracle",
    "Morbid",
    "Oblivion",
    "Onslaught",
    "Pain",
    "Pandemonium",
    "Phoenix",
    "Plague",
    "Rage",
    "Rapture",
    "Rune",
    "Skull",
    "Sol",
    "Soul",
    "Sorrow",
    "Spirit",
    "Storm",
    "Tempest",
    "Torment",
    "Vengeance",
    "Victory",
    "Viper",
    "Vortex",
    "Woe",
    "Wrath",
    "Light's",
    "Shimmering",
];

pub const NAME_SUFFIXES: [&str; 18] = [
    "Bane",
    "Root",
    "Bite",
    "Song",
    "Roar",
    "Grasp",
    "Instrument",
    "Glow",
    "Bender",
    "Shadow",
    "Whisper",
    "Shout",
    "Growl",
    "Tear",
    "Peak",
    "Form",
    "Sun",
    "Moon",
];

/// Specials unlocked on an item or beast. Each field holds a 1-based table
/// index; `None` means not (yet) unlocked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Specials {
    /// Index into `ITEM_SUFFIXES`. Items only.
    pub suffix: Option<u8>,
    /// Index into `NAME_PREFIXES`.
    pub name_prefix: Option<u8>,
    /// Index into `NAME_SUFFIXES`.
    pub name_suffix: Option<u8>,
}

impl Specials {
    pub const NONE: Specials = Specials {
        suffix: None,
        name_prefix: None,
        name_suffix: None,
    };

    pub fn suffix_name(&self) -> Option<&'static str> {
        self.suffix.and_then(item_suffix_name)
    }

    pub fn prefix_name(&self) -> Option<&'static str> {
        self.name_prefix.and_then(name_prefix)
    }

    pub fn name_suffix_name(&self) -> Option<&'static str> {
        self.name_suffix.and_then(name_suffix)
    }

    /// `"Agony Bane"`, or `None` if the pair is not unlocked.
    pub fn name_pair(&self) -> Option<String> {
        Some(format!("{} {}", self.prefix_name()?, self.name_suffix_name()?))
    }
}

fn lookup(table: &'static [&'static str], index: u8) -> Option<&'static str> {
    let i = usize::from(index).checked_sub(1)?;
    table.get(i).copied()
}

pub fn item_suffix_name(index: u8) -> Option<&'static str> {
    lookup(&ITEM_SUFFIXES, index)
}

pub fn name_prefix(index: u8) -> Option<&'static str> {
    lookup(&NAME_PREFIXES, index)
}

pub fn name_suffix(index: u8) -> Option<&'static str> {
    lookup(&NAME_SUFFIXES, index)
}
