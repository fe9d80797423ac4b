// Data-driven game configuration.
//
// Every tunable constant the generators and combat formulas read lives in
// `GameConfig`. `Default` reproduces the values the authoritative ledger uses;
// a host can load an alternative from JSON (e.g. to preview a rebalanced
// season) via `GameConfig::from_json`, which validates before returning.
//
// Parameters are grouped by the subsystem that reads them: `CombatConfig`
// (damage floors, elemental and special multipliers), `BeastConfig` (beast
// stat growth and rewards), `MarketConfig` (prices and market size),
// `EncounterConfig` (lookahead cap and discovery odds), and
// `AdventurerConfig` (health derivation).
//
// See also: `combat.rs`, `beast.rs`, `market.rs`, `encounter.rs`, which take
// `&GameConfig` explicitly. There is no global config.
//
// **Critical constraint: determinism.** Config values feed directly into the
// predicted outcomes. A preview is only faithful if the config matches the
// ledger's.

use crate::error::DelveError;
use serde::{Deserialize, Serialize};

/// Damage floors and multipliers for both directions of combat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatConfig {
    /// Minimum damage an adventurer deals to a beast.
    pub min_damage: u32,
    /// Minimum damage a beast deals to an adventurer.
    pub beast_min_damage: u32,
    /// Minimum damage an obstacle deals to an adventurer.
    pub obstacle_min_damage: u32,
    /// Elemental adjustment as a percentage of base damage.
    pub elemental_percent: u32,
    /// Attack bonus per strength point, as a percentage of elemental damage.
    pub strength_bonus_percent: u32,
    /// Attack bonus multiplier when the weapon shares the beast's name prefix.
    pub prefix_match_multiplier: u32,
    /// Attack bonus multiplier when the weapon shares the beast's name suffix.
    pub suffix_match_multiplier: u32,
    /// Beast damage multiplier when the struck armor shares the beast's name suffix.
    pub armor_suffix_match_multiplier: u32,
    /// Beast damage multiplier when the struck armor shares the beast's name prefix.
    pub armor_prefix_match_multiplier: u32,
    /// Bonus per greatness level granted by matching jewelry.
    pub jewelry_bonus_percent_per_level: u32,
    /// Damage taken on an unarmored slot, as a percentage of base damage.
    pub beast_no_armor_percent: u32,
}

/// Beast stat growth and reward scaling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeastConfig {
    pub starter_beast_health: u16,
    /// Health roll range per adventurer level.
    pub health_per_level: u32,
    /// Level roll range per adventurer level.
    pub level_multiplier: u32,
    /// Beast health is clamped to this (10-bit field on the ledger).
    pub max_health: u16,
    /// Gold reward divisor applied to the base reward.
    pub gold_divisor: u32,
    /// XP reward decay per adventurer level, in percent.
    pub xp_decay_percent_per_level: u32,
    /// Upper bound on the XP reward decay, in percent.
    pub xp_decay_cap_percent: u32,
    pub min_xp_reward: u32,
}

/// Market pricing and size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Price of one tier step; a T1 item costs `5 * price_unit`.
    pub price_unit: u32,
    pub min_price: u32,
    /// Gold discount per charisma point.
    pub charisma_discount: u32,
    /// Items offered per available stat upgrade.
    pub items_per_stat_upgrade: u32,
}

/// Lookahead limits and discovery odds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterConfig {
    /// Hard cap on the number of rows `list_all_encounters` produces.
    pub max_encounters: usize,
    /// Percentile width of the gold discovery band.
    pub gold_discovery_percent: u32,
    /// Percentile width of the health discovery band.
    pub health_discovery_percent: u32,
    /// Chance that a beast or obstacle strike is critical, in percent.
    pub critical_hit_percent: u32,
}

/// Derivation of adventurer maximum health.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdventurerConfig {
    pub starting_health: u32,
    pub health_per_vitality: u32,
    pub max_health: u16,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameConfig {
    pub combat: CombatConfig,
    pub beast: BeastConfig,
    pub market: MarketConfig,
    pub encounter: EncounterConfig,
    pub adventurer: AdventurerConfig,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            min_damage: 4,
            beast_min_damage: 2,
            obstacle_min_damage: 2,
            elemental_percent: 50,
            strength_bonus_percent: 10,
            prefix_match_multiplier: 8,
            suffix_match_multiplier: 2,
            armor_suffix_match_multiplier: 8,
            armor_prefix_match_multiplier: 2,
            jewelry_bonus_percent_per_level: 3,
            beast_no_armor_percent: 150,
        }
    }
}

impl Default for BeastConfig {
    fn default() -> Self {
        Self {
            starter_beast_health: 3,
            health_per_level: 20,
            level_multiplier: 3,
            max_health: 1023,
            gold_divisor: 2,
            xp_decay_percent_per_level: 2,
            xp_decay_cap_percent: 95,
            min_xp_reward: 4,
        }
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            price_unit: 4,
            min_price: 1,
            charisma_discount: 1,
            items_per_stat_upgrade: 21,
        }
    }
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            max_encounters: 50,
            gold_discovery_percent: 45,
            health_discovery_percent: 45,
            critical_hit_percent: 10,
        }
    }
}

impl Default for AdventurerConfig {
    fn default() -> Self {
        Self {
            starting_health: 100,
            health_per_vitality: 15,
            max_health: 1023,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, DelveError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(
            max_encounters = config.encounter.max_encounters,
            min_damage = config.combat.min_damage,
            "loaded game config"
        );
        Ok(config)
    }

    /// Reject values that would break an invariant downstream.
    pub fn validate(&self) -> Result<(), DelveError> {
        let problem = if self.encounter.max_encounters == 0 {
            Some("encounter.max_encounters must be at least 1")
        } else if self.market.price_unit == 0 {
            Some("market.price_unit must be at least 1")
        } else if self.combat.min_damage == 0 || self.combat.beast_min_damage == 0 {
            Some("combat damage floors must be at least 1")
        } else if self.beast.gold_divisor == 0 {
            Some("beast.gold_divisor must be at least 1")
        } else if self.beast.max_health > 1023 || self.adventurer.max_health > 1023 {
            Some("health caps must fit the 10-bit packed field")
        } else if self.combat.elemental_percent > 100 {
            Some("combat.elemental_percent must not exceed 100")
        } else if self.beast.xp_decay_cap_percent > 100 {
            Some("beast.xp_decay_cap_percent must not exceed 100")
        } else if self
            .encounter
            .gold_discovery_percent
            .checked_add(self.encounter.health_discovery_percent)
            .is_none_or(|total| total > 100)
        {
            Some("discovery bands must not exceed 100 percent")
        } else {
            None
        };
        match problem {
            Some(reason) => {
                tracing::debug!(reason, "rejected game config");
                Err(DelveError::InvalidConfig(reason))
            }
            None => Ok(()),
        }
    }
}
