// GameSnapshot: one decoded view of the ledger state.
//
// The host builds a snapshot from the two packed integers and the two seeds
// it last observed, then asks it for whatever the UI needs (the beast being
// fought, the market, combat stats, the lookahead). Derived values are
// computed on request from the decoded records; nothing is cached, so a
// snapshot can never hand out a value that disagrees with its own inputs.
//
// A snapshot is immutable. When the host observes new packed state it builds
// a new snapshot and drops the old one; there is no partial update path.
//
// See also: `codec.rs` for decoding, `encounter.rs` for the lookahead.

use crate::adventurer::{Adventurer, Bag};
use crate::beast::{Beast, get_beast};
use crate::codec::{parse_packed, unpack_adventurer, unpack_bag};
use crate::combat::{CombatStats, calculate_combat_stats};
use crate::config::GameConfig;
use crate::encounter::{Encounter, list_all_encounters};
use crate::error::DelveError;
use crate::market::{MarketItem, get_market};
use ruint::aliases::U256;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    adventurer: Adventurer,
    bag: Bag,
    beast_seed: u64,
    market_seed: u64,
    config: GameConfig,
}

impl GameSnapshot {
    pub fn new(
        packed_adventurer: U256,
        packed_bag: U256,
        beast_seed: u64,
        market_seed: u64,
        config: GameConfig,
    ) -> Self {
        let adventurer = unpack_adventurer(packed_adventurer);
        let bag = unpack_bag(packed_bag);
        tracing::debug!(
            xp = adventurer.xp,
            health = adventurer.health,
            in_battle = adventurer.in_battle(),
            bag_items = bag.len(),
            "snapshot rebuilt"
        );
        Self {
            adventurer,
            bag,
            beast_seed,
            market_seed,
            config,
        }
    }

    /// Build from host-supplied hex (or decimal) strings, rejecting text that
    /// does not parse.
    pub fn from_packed_strings(
        packed_adventurer: &str,
        packed_bag: &str,
        beast_seed: u64,
        market_seed: u64,
        config: GameConfig,
    ) -> Result<Self, DelveError> {
        let adventurer = parse_packed(packed_adventurer)?;
        let bag = parse_packed(packed_bag)?;
        Ok(Self::new(adventurer, bag, beast_seed, market_seed, config))
    }

    pub fn adventurer(&self) -> &Adventurer {
        &self.adventurer
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The beast currently engaged, with its live health. `None` outside
    /// battle.
    pub fn current_beast(&self) -> Option<Beast> {
        if !self.adventurer.in_battle() {
            return None;
        }
        let mut beast = get_beast(
            self.beast_seed,
            self.adventurer.xp,
            self.adventurer.equipment.weapon,
            &self.config,
        );
        beast.health = self.adventurer.beast_health;
        Some(beast)
    }

    /// The market open to the adventurer. Empty without stat upgrades.
    pub fn market(&self) -> Vec<MarketItem> {
        get_market(
            self.market_seed,
            self.adventurer.stat_upgrades_available,
            self.adventurer.stats.charisma,
            &self.config.market,
        )
    }

    /// Combat stats against the current beast, if any.
    pub fn combat_stats(&self) -> CombatStats {
        let beast = self.current_beast();
        calculate_combat_stats(&self.adventurer, &self.bag, beast.as_ref(), &self.config)
    }

    /// Lookahead from the adventurer's current xp.
    pub fn encounters(&self) -> Vec<Encounter> {
        list_all_encounters(
            self.adventurer.xp,
            self.beast_seed,
            self.adventurer.level(),
            self.adventurer.in_battle(),
            &self.config,
        )
    }
}
