// Combat math: damage in both directions and the aggregate stats panel.
//
// Everything here mirrors the ledger's resolution formulas so the host can
// show a predicted hit before the transaction confirms. All arithmetic is
// integer; every division truncates exactly where the ledger's does.
//
// Adventurer attacks (`calculate_attack_damage`):
//   1. `base = weapon greatness * (6 - tier)`.
//   2. Elemental triangle against the beast's armor: +/-50% of `base`.
//   3. Strength bonus: `elemental * STR * 10 / 100`.
//   4. Specials: `elemental * 8` on a name-prefix match, `elemental * 2` on a
//      name-suffix match, boosted by an equipped Platinum Ring.
//   5. Critical strikes add `elemental` again, boosted by a Titanium Ring.
//   6. The beast's own power is subtracted as armor; floor `min_damage`.
//
// Incoming damage (`calculate_beast_damage`, `calculate_obstacle_damage`)
// runs the same triangle from the attacker's side, then subtracts the struck
// armor piece's power and, when the neck item matches the armor's material,
// a jewelry reduction on top.
//
// See also: `beast.rs` and `obstacle.rs` for the attackers, `encounter.rs`
// for the rolls that decide which slot is struck.

use crate::adventurer::{Adventurer, Bag, Equipment, Item};
use crate::beast::Beast;
use crate::config::{CombatConfig, GameConfig};
use crate::items::{AMULET, NECKLACE, PENDANT, PLATINUM_RING, TITANIUM_RING};
use crate::obstacle::Obstacle;
use crate::specials::Specials;
use crate::types::{ArmorType, AttackType, Effectiveness, Slot};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Normal and critical damage for one swing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackDamage {
    pub base_damage: u32,
    pub critical_damage: u32,
}

/// Summary of an adventurer's fighting strength against the current beast.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    /// Damage with the equipped weapon.
    pub base_damage: u32,
    pub critical_damage: u32,
    /// Damage with the strongest weapon among equipment and bag.
    pub best_damage: u32,
    pub best_critical_damage: u32,
    /// Percent of the worst-case beast damage the equipped armor mitigates.
    pub protection: u32,
    /// Same, with the best armor piece per slot from equipment and bag.
    pub best_protection: u32,
    /// Sum of item power over every equipped and bagged item.
    pub gear_score: u32,
    /// Best weapon, then best armor piece per armor slot. Empty slots are
    /// omitted.
    pub best_items: SmallVec<[Item; 6]>,
}

fn percent_of(amount: u32, percent: u32) -> u32 {
    amount * percent / 100
}

/// Apply the elemental triangle to `base`.
pub fn elemental_damage(base: u32, attack: AttackType, armor: ArmorType, config: &CombatConfig) -> u32 {
    let adjustment = percent_of(base, config.elemental_percent);
    match attack.against(armor) {
        Effectiveness::Strong => base + adjustment,
        Effectiveness::Fair => base,
        Effectiveness::Weak => base - adjustment,
    }
}

/// `amount` plus the jewelry bonus if the piece with `jewelry_id` is worn.
fn jewelry_boosted(amount: u32, equipment: &Equipment, jewelry_id: u8, config: &CombatConfig) -> u32 {
    let bonus = equipment.jewelry_greatness(jewelry_id).map_or(0, |greatness| {
        percent_of(amount, u32::from(greatness) * config.jewelry_bonus_percent_per_level)
    });
    amount + bonus
}

fn names_match(ours: Option<u8>, theirs: Option<u8>) -> bool {
    matches!((ours, theirs), (Some(a), Some(b)) if a == b)
}

/// Bonus for a weapon whose unlocked name specials match the beast's.
fn special_bonus(
    elemental: u32,
    weapon: Specials,
    beast: Specials,
    equipment: &Equipment,
    config: &CombatConfig,
) -> u32 {
    let mut bonus = 0;
    if names_match(weapon.name_prefix, beast.name_prefix) {
        bonus += elemental * config.prefix_match_multiplier;
    }
    if names_match(weapon.name_suffix, beast.name_suffix) {
        bonus += elemental * config.suffix_match_multiplier;
    }
    jewelry_boosted(bonus, equipment, PLATINUM_RING, config)
}

/// Damage a swing of `weapon` deals, optionally against a specific beast.
///
/// Without a beast there is no elemental or specials adjustment and no armor
/// to get through; the result is the raw swing used for previews.
pub fn calculate_attack_damage(
    weapon: Item,
    adventurer: &Adventurer,
    beast: Option<&Beast>,
    config: &GameConfig,
) -> AttackDamage {
    let combat = &config.combat;
    let base = weapon.power();
    let strength = u32::from(adventurer.stats.strength);

    let Some(beast) = beast else {
        let bonus = percent_of(base * strength, combat.strength_bonus_percent);
        return AttackDamage {
            base_damage: base + bonus,
            critical_damage: base * 2 + bonus,
        };
    };

    let elemental = match weapon.item_type().and_then(|t| t.attack_type()) {
        Some(attack) => elemental_damage(base, attack, beast.beast_type.armor_type(), combat),
        None => base,
    };
    let strength_bonus = percent_of(elemental * strength, combat.strength_bonus_percent);
    let specials = special_bonus(
        elemental,
        weapon.specials(adventurer.item_specials_seed),
        beast.specials,
        &adventurer.equipment,
        combat,
    );
    let critical_bonus = jewelry_boosted(elemental, &adventurer.equipment, TITANIUM_RING, combat);

    let beast_armor = beast.power();
    let normal = elemental + strength_bonus + specials;
    AttackDamage {
        base_damage: normal.saturating_sub(beast_armor).max(combat.min_damage),
        critical_damage: (normal + critical_bonus)
            .saturating_sub(beast_armor)
            .max(combat.min_damage),
    }
}

/// The neck piece that reinforces armor of `material`.
fn neck_for(material: ArmorType) -> u8 {
    match material {
        ArmorType::Cloth => AMULET,
        ArmorType::Hide => PENDANT,
        ArmorType::Metal => NECKLACE,
    }
}

/// Extra reduction when the neck item matches the struck armor's material.
fn neck_reduction(armor: Item, material: ArmorType, equipment: &Equipment, config: &CombatConfig) -> u32 {
    let neck = equipment.neck;
    if neck.id != neck_for(material) {
        return 0;
    }
    percent_of(
        armor.power(),
        u32::from(neck.greatness()) * config.jewelry_bonus_percent_per_level,
    )
}

/// Shared tail of incoming damage: triangle, optional specials multiplier,
/// armor, neck. `None` armor (or an empty slot) takes the unarmored penalty.
fn incoming_damage(
    base: u32,
    attack: AttackType,
    armor: Option<Item>,
    specials_multiplier: impl FnOnce(Item) -> u32,
    adventurer: &Adventurer,
    floor: u32,
    config: &CombatConfig,
) -> u32 {
    let Some(armor) = armor.filter(|item| !item.is_empty()) else {
        return percent_of(base, config.beast_no_armor_percent).max(floor);
    };
    let material = armor.item_type().and_then(|t| t.armor_type());
    let mut damage = match material {
        Some(material) => elemental_damage(base, attack, material, config),
        None => base,
    };
    damage *= specials_multiplier(armor);
    damage = damage.saturating_sub(armor.power());
    if let Some(material) = material {
        damage = damage.saturating_sub(neck_reduction(armor, material, &adventurer.equipment, config));
    }
    damage.max(floor)
}

/// Damage `beast` deals to an adventurer struck on `armor`.
pub fn calculate_beast_damage(beast: &Beast, adventurer: &Adventurer, armor: Option<Item>, config: &GameConfig) -> u32 {
    let combat = &config.combat;
    let multiplier = |armor: Item| {
        let specials = armor.specials(adventurer.item_specials_seed);
        let mut factor = 1;
        // Sequential: both matching compounds.
        if names_match(specials.name_suffix, beast.specials.name_suffix) {
            factor *= combat.armor_suffix_match_multiplier;
        }
        if names_match(specials.name_prefix, beast.specials.name_prefix) {
            factor *= combat.armor_prefix_match_multiplier;
        }
        factor
    };
    incoming_damage(
        beast.power(),
        beast.beast_type.attack_type(),
        armor,
        multiplier,
        adventurer,
        combat.beast_min_damage,
        combat,
    )
}

/// Damage `obstacle` deals to an adventurer struck on `armor`. Obstacles have
/// no specials.
pub fn calculate_obstacle_damage(
    obstacle: &Obstacle,
    adventurer: &Adventurer,
    armor: Option<Item>,
    config: &GameConfig,
) -> u32 {
    let combat = &config.combat;
    incoming_damage(
        obstacle.power(),
        obstacle.obstacle_type,
        armor,
        |_| 1,
        adventurer,
        combat.obstacle_min_damage,
        combat,
    )
}

/// Whether a stat check against a threat of `level` succeeds, given the
/// threat's avoid roll byte. Maxed stats always succeed.
pub fn ability_avoids_threat(level: u16, stat: u8, rnd: u8) -> bool {
    let stat = u32::from(stat);
    let level = u32::from(level);
    stat >= level || stat > level * u32::from(rnd) / 255
}

// ---------------------------------------------------------------------------
// Combat stats
// ---------------------------------------------------------------------------

/// Candidates for `slot`: the equipped item first, then bag items in order.
fn candidates(equipment: &Equipment, bag: &Bag, slot: Slot) -> SmallVec<[Item; 8]> {
    let mut items = SmallVec::new();
    let equipped = equipment.get(slot);
    if !equipped.is_empty() {
        items.push(equipped);
    }
    items.extend(bag.items().into_iter().filter(|item| item.slot() == Some(slot)));
    items
}

/// Sum of damage mitigated over the armor slots, given the piece chosen per
/// slot.
fn mitigated(beast: &Beast, adventurer: &Adventurer, unarmored: u32, armor: &[Option<Item>], config: &GameConfig) -> u32 {
    armor
        .iter()
        .map(|piece| unarmored.saturating_sub(calculate_beast_damage(beast, adventurer, *piece, config)))
        .sum()
}

pub fn calculate_combat_stats(
    adventurer: &Adventurer,
    bag: &Bag,
    beast: Option<&Beast>,
    config: &GameConfig,
) -> CombatStats {
    let equipment = &adventurer.equipment;
    let current = calculate_attack_damage(equipment.weapon, adventurer, beast, config);

    // Strictly greater so the equipped weapon wins ties.
    let mut best_weapon = equipment.weapon;
    let mut best = current;
    for weapon in candidates(equipment, bag, Slot::Weapon) {
        let damage = calculate_attack_damage(weapon, adventurer, beast, config);
        if damage.base_damage > best.base_damage {
            best = damage;
            best_weapon = weapon;
        }
    }

    let mut best_items: SmallVec<[Item; 6]> = SmallVec::new();
    if !best_weapon.is_empty() {
        best_items.push(best_weapon);
    }

    let (protection, best_protection) = match beast {
        Some(beast) => {
            let unarmored = calculate_beast_damage(beast, adventurer, None, config);
            let mut worn = SmallVec::<[Option<Item>; 5]>::new();
            let mut chosen = SmallVec::<[Option<Item>; 5]>::new();
            for slot in Slot::ARMOR {
                let equipped = equipment.get(slot);
                worn.push((!equipped.is_empty()).then_some(equipped));
                let pick = candidates(equipment, bag, slot)
                    .into_iter()
                    .min_by_key(|item| calculate_beast_damage(beast, adventurer, Some(*item), config));
                if let Some(item) = pick {
                    best_items.push(item);
                }
                chosen.push(pick);
            }
            let range = unarmored.saturating_sub(config.combat.beast_min_damage) * Slot::ARMOR.len() as u32;
            let as_percent = |amount: u32| {
                if range == 0 {
                    0
                } else {
                    (amount * 100 / range).min(100)
                }
            };
            (
                as_percent(mitigated(beast, adventurer, unarmored, &worn, config)),
                as_percent(mitigated(beast, adventurer, unarmored, &chosen, config)),
            )
        }
        None => {
            // Without a beast there is nothing to rank armor against; keep
            // whatever is worn.
            best_items.extend(
                Slot::ARMOR
                    .into_iter()
                    .map(|slot| equipment.get(slot))
                    .filter(|item| !item.is_empty()),
            );
            (0, 0)
        }
    };

    let gear_score = equipment
        .iter()
        .map(|(_, item)| item)
        .chain(bag.items())
        .map(|item| item.power())
        .sum();

    CombatStats {
        base_damage: current.base_damage,
        critical_damage: current.critical_damage,
        best_damage: best.base_damage,
        best_critical_damage: best.critical_damage,
        protection,
        best_protection,
        gear_score,
        best_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beast::BeastType;
    use crate::types::Tier;

    const KATANA: u8 = 42;
    const SHORT_SWORD: u8 = 46;
    const WARHAMMER: u8 = 72;
    const DIVINE_ROBE: u8 = 17;
    const SHIRT: u8 = 21;
    const LEATHER_ARMOR: u8 = 51;
    const RING_MAIL: u8 = 81;

    /// Warlock: Magic family, T1, wears Cloth, attacks with Magic.
    fn warlock(level: u16) -> Beast {
        Beast {
            id: 1,
            health: 100,
            level,
            beast_type: BeastType::Magic,
            tier: Tier::T1,
            specials: Specials::NONE,
        }
    }

    fn adventurer_with(weapon: Item) -> Adventurer {
        let mut adventurer = Adventurer {
            health: 100,
            ..Default::default()
        };
        adventurer.equip(weapon);
        adventurer
    }

    #[test]
    fn unopposed_swing_adds_strength() {
        // Short Sword T5 at greatness 4: power 4.
        let mut adventurer = adventurer_with(Item::new(SHORT_SWORD, 16));
        let config = GameConfig::default();
        let damage = calculate_attack_damage(adventurer.equipment.weapon, &adventurer, None, &config);
        assert_eq!(damage, AttackDamage { base_damage: 4, critical_damage: 8 });

        adventurer.stats.strength = 5;
        let damage = calculate_attack_damage(adventurer.equipment.weapon, &adventurer, None, &config);
        // 4 * 5 * 10 / 100 = 2.
        assert_eq!(damage, AttackDamage { base_damage: 6, critical_damage: 10 });
    }

    #[test]
    fn elemental_triangle_shapes_attack() {
        let config = GameConfig::default();
        let beast = warlock(5); // power 25, Cloth armor

        // Katana T1 greatness 20: power 100, Blade beats Cloth.
        let katana = Item::new(KATANA, 400);
        let adventurer = adventurer_with(katana);
        let damage = calculate_attack_damage(katana, &adventurer, Some(&beast), &config);
        assert_eq!(damage.base_damage, 150 - 25);
        assert_eq!(damage.critical_damage, 300 - 25);

        // Warhammer T1 greatness 20: Bludgeon loses to Cloth.
        let hammer = Item::new(WARHAMMER, 400);
        let adventurer = adventurer_with(hammer);
        let damage = calculate_attack_damage(hammer, &adventurer, Some(&beast), &config);
        assert_eq!(damage.base_damage, 50 - 25);
    }

    #[test]
    fn attack_never_drops_below_floor() {
        let config = GameConfig::default();
        let weak = Item::new(SHORT_SWORD, 1);
        let adventurer = adventurer_with(weak);
        let damage = calculate_attack_damage(weak, &adventurer, Some(&warlock(30)), &config);
        assert_eq!(damage.base_damage, config.combat.min_damage);
        assert_eq!(damage.critical_damage, config.combat.min_damage);

        let unarmed = adventurer_with(Item::EMPTY);
        let damage = calculate_attack_damage(Item::EMPTY, &unarmed, Some(&warlock(1)), &config);
        assert_eq!(damage.base_damage, config.combat.min_damage);
    }

    #[test]
    fn specials_match_bonus_and_platinum_ring() {
        let config = GameConfig::default();
        let mut equipment = Equipment::default();
        let weapon = Specials {
            suffix: Some(1),
            name_prefix: Some(7),
            name_suffix: Some(3),
        };
        let beast = Specials {
            suffix: None,
            name_prefix: Some(7),
            name_suffix: Some(3),
        };
        assert_eq!(special_bonus(100, weapon, beast, &equipment, &config.combat), 1000);

        let only_suffix = Specials {
            name_prefix: Some(8),
            ..beast
        };
        assert_eq!(special_bonus(100, weapon, only_suffix, &equipment, &config.combat), 200);
        assert_eq!(special_bonus(100, Specials::NONE, beast, &equipment, &config.combat), 0);

        // Platinum Ring at greatness 10: +30%.
        equipment.ring = Item::new(PLATINUM_RING, 100);
        assert_eq!(special_bonus(100, weapon, beast, &equipment, &config.combat), 1300);
    }

    #[test]
    fn titanium_ring_boosts_critical_only() {
        let config = GameConfig::default();
        let beast = warlock(5);
        let katana = Item::new(KATANA, 400);
        let mut adventurer = adventurer_with(katana);
        adventurer.equipment.ring = Item::new(TITANIUM_RING, 100);
        let damage = calculate_attack_damage(katana, &adventurer, Some(&beast), &config);
        assert_eq!(damage.base_damage, 125);
        // Critical bonus 150 + 30% = 195.
        assert_eq!(damage.critical_damage, 150 + 195 - 25);
    }

    #[test]
    fn beast_damage_by_armor_material() {
        let config = GameConfig::default();
        let beast = warlock(10); // power 50, Magic attack
        let adventurer = adventurer_with(Item::EMPTY);

        assert_eq!(calculate_beast_damage(&beast, &adventurer, None, &config), 75);
        assert_eq!(calculate_beast_damage(&beast, &adventurer, Some(Item::EMPTY), &config), 75);
        // T5 armor at greatness 4: power 4.
        let metal = Item::new(RING_MAIL, 16);
        let cloth = Item::new(SHIRT, 16);
        let hide = Item::new(LEATHER_ARMOR, 16);
        assert_eq!(calculate_beast_damage(&beast, &adventurer, Some(metal), &config), 75 - 4);
        assert_eq!(calculate_beast_damage(&beast, &adventurer, Some(cloth), &config), 50 - 4);
        assert_eq!(calculate_beast_damage(&beast, &adventurer, Some(hide), &config), 25 - 4);
    }

    #[test]
    fn matching_neck_reduces_beast_damage() {
        let config = GameConfig::default();
        let beast = warlock(20); // power 100
        let robe = Item::new(DIVINE_ROBE, 100); // T1 greatness 10: power 50
        let mut adventurer = adventurer_with(Item::EMPTY);
        adventurer.equip(robe);
        assert_eq!(calculate_beast_damage(&beast, &adventurer, Some(robe), &config), 50);

        adventurer.equipment.neck = Item::new(AMULET, 100);
        // 50 * 10 * 3 / 100 = 15.
        assert_eq!(calculate_beast_damage(&beast, &adventurer, Some(robe), &config), 35);

        // A Pendant reinforces Hide, not Cloth.
        adventurer.equipment.neck = Item::new(PENDANT, 100);
        assert_eq!(calculate_beast_damage(&beast, &adventurer, Some(robe), &config), 50);
    }

    #[test]
    fn armor_specials_multiply_sequentially() {
        let config = GameConfig::default();
        let mut adventurer = adventurer_with(Item::EMPTY);
        adventurer.set_item_specials_seed(1234);
        // T1 cloth at greatness 19: power 95, name pair unlocked.
        let robe = Item::new(DIVINE_ROBE, 361);
        let robe_specials = robe.specials(adventurer.item_specials_seed);
        let (Some(prefix), Some(suffix)) = (robe_specials.name_prefix, robe_specials.name_suffix)
        else {
            panic!("greatness 19 unlocks the name pair");
        };
        let other_prefix = prefix % 69 + 1;
        let other_suffix = suffix % 18 + 1;

        // Magic against Cloth is neutral, so elemental damage is the base 100.
        let with_specials = |name_prefix: u8, name_suffix: u8| Beast {
            specials: Specials {
                suffix: None,
                name_prefix: Some(name_prefix),
                name_suffix: Some(name_suffix),
            },
            ..warlock(20)
        };
        let damage = |beast: Beast| calculate_beast_damage(&beast, &adventurer, Some(robe), &config);

        assert_eq!(damage(with_specials(other_prefix, other_suffix)), 100 - 95);
        assert_eq!(damage(with_specials(other_prefix, suffix)), 100 * 8 - 95);
        assert_eq!(damage(with_specials(prefix, other_suffix)), 100 * 2 - 95);
        assert_eq!(damage(with_specials(prefix, suffix)), 100 * 16 - 95);
    }

    #[test]
    fn beast_damage_floor() {
        let config = GameConfig::default();
        let beast = warlock(1);
        let robe = Item::new(DIVINE_ROBE, 400);
        let adventurer = adventurer_with(Item::EMPTY);
        assert_eq!(
            calculate_beast_damage(&beast, &adventurer, Some(robe), &config),
            config.combat.beast_min_damage
        );
    }

    #[test]
    fn obstacle_damage_uses_its_own_floor() {
        let mut config = GameConfig::default();
        config.combat.obstacle_min_damage = 3;
        let obstacle = Obstacle {
            id: 26,
            level: 1,
            tier: Tier::T1,
            obstacle_type: AttackType::Blade,
        };
        let adventurer = adventurer_with(Item::EMPTY);
        let robe = Item::new(DIVINE_ROBE, 400);
        assert_eq!(calculate_obstacle_damage(&obstacle, &adventurer, Some(robe), &config), 3);
        // Unarmored: 5 * 150 / 100 = 7.
        assert_eq!(calculate_obstacle_damage(&obstacle, &adventurer, None, &config), 7);
    }

    #[test]
    fn avoid_rule() {
        assert!(ability_avoids_threat(10, 10, 255));
        assert!(ability_avoids_threat(10, 3, 0));
        // 10 * 255 / 255 = 10; stat 9 does not beat it.
        assert!(!ability_avoids_threat(10, 9, 255));
        // 10 * 128 / 255 = 5.
        assert!(ability_avoids_threat(10, 6, 128));
        assert!(!ability_avoids_threat(10, 5, 128));
    }

    #[test]
    fn stats_without_beast() {
        let config = GameConfig::default();
        let mut adventurer = adventurer_with(Item::new(SHORT_SWORD, 16));
        adventurer.equip(Item::new(SHIRT, 16));
        let mut bag = Bag::default();
        bag.set(0, Item::new(KATANA, 400));

        let stats = calculate_combat_stats(&adventurer, &bag, None, &config);
        assert_eq!(stats.base_damage, 4);
        assert_eq!(stats.best_damage, 100);
        assert_eq!(stats.best_critical_damage, 200);
        assert_eq!(stats.protection, 0);
        assert_eq!(stats.best_protection, 0);
        assert_eq!(stats.gear_score, 4 + 4 + 100);
        assert_eq!(stats.best_items.as_slice(), &[Item::new(KATANA, 400), Item::new(SHIRT, 16)]);
    }

    #[test]
    fn protection_counts_best_bag_armor() {
        let config = GameConfig::default();
        let beast = warlock(10); // unarmored hit 75, range (75 - 2) * 5 = 365
        let mut adventurer = adventurer_with(Item::new(SHORT_SWORD, 16));
        adventurer.equip(Item::new(LEATHER_ARMOR, 16)); // takes 21, mitigates 54
        let mut bag = Bag::default();
        bag.set(0, Item::new(RING_MAIL, 16));

        let stats = calculate_combat_stats(&adventurer, &bag, Some(&beast), &config);
        assert_eq!(stats.protection, 54 * 100 / 365);
        // The hide piece is still the best chest; the bag's metal is worse.
        assert_eq!(stats.best_protection, stats.protection);
        assert!(stats.best_items.contains(&Item::new(LEATHER_ARMOR, 16)));
        assert!(!stats.best_items.contains(&Item::new(RING_MAIL, 16)));

        // Swap the worn piece for the metal one: best picks the bagged hide.
        let mut adventurer = adventurer_with(Item::new(SHORT_SWORD, 16));
        adventurer.equip(Item::new(RING_MAIL, 16));
        let mut bag = Bag::default();
        bag.set(3, Item::new(LEATHER_ARMOR, 16));
        let stats = calculate_combat_stats(&adventurer, &bag, Some(&beast), &config);
        assert_eq!(stats.protection, 4 * 100 / 365);
        assert_eq!(stats.best_protection, 54 * 100 / 365);
    }

    #[test]
    fn full_protection_is_capped() {
        let config = GameConfig::default();
        let beast = warlock(1);
        let mut adventurer = adventurer_with(Item::EMPTY);
        for id in [DIVINE_ROBE, 22, 27, 32, 37] {
            adventurer.equip(Item::new(id, 400));
        }
        let stats = calculate_combat_stats(&adventurer, &Bag::default(), Some(&beast), &config);
        assert_eq!(stats.protection, 100);
        assert_eq!(stats.best_protection, 100);
    }
}
