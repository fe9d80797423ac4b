// Market generation.
//
// After a level-up the ledger opens a market whose stock is a pure function
// of the market seed and the number of stat upgrades the adventurer holds.
// The seed yields a stride `offset = seed % 100 + 1`, and item `i` of the
// listing is `(seed + offset * i) % 101 + 1`. Because 101 is prime and the
// stride is never a multiple of it, a listing never repeats an id.
//
// A listing is only valid for the `(market_seed, stat_upgrades)` pair that
// produced it; the host recomputes it on every new packed state.

use crate::config::MarketConfig;
use crate::items::{NUM_ITEMS, item_name, item_price, item_slot, item_tier, item_type};
use crate::types::{ItemType, Slot, Tier};
use serde::{Deserialize, Serialize};

/// One purchasable item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketItem {
    pub id: u8,
    pub name: String,
    pub tier: Tier,
    pub slot: Slot,
    pub item_type: ItemType,
    pub price: u32,
}

/// Number of items offered for a given count of unspent stat upgrades.
pub fn market_size(stat_upgrades_available: u8, config: &MarketConfig) -> usize {
    let size = u32::from(stat_upgrades_available) * config.items_per_stat_upgrade;
    size.min(u32::from(NUM_ITEMS)) as usize
}

/// Item ids on offer, in listing order.
pub fn market_ids(market_seed: u64, stat_upgrades_available: u8, config: &MarketConfig) -> Vec<u8> {
    let items = u64::from(NUM_ITEMS);
    let offset = market_seed % (items - 1) + 1;
    let seed = market_seed % items;
    (0..market_size(stat_upgrades_available, config) as u64)
        .map(|i| ((seed + offset * i) % items) as u8 + 1)
        .collect()
}

/// The full market listing with charisma-adjusted prices.
pub fn get_market(
    market_seed: u64,
    stat_upgrades_available: u8,
    charisma: u8,
    config: &MarketConfig,
) -> Vec<MarketItem> {
    market_ids(market_seed, stat_upgrades_available, config)
        .into_iter()
        .filter_map(|id| {
            let tier = item_tier(id)?;
            Some(MarketItem {
                id,
                name: item_name(id)?.to_string(),
                tier,
                slot: item_slot(id)?,
                item_type: item_type(id)?,
                price: item_price(tier, charisma, config),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn no_upgrades_means_no_market() {
        let config = MarketConfig::default();
        assert!(get_market(12345, 0, 0, &config).is_empty());
    }

    #[test]
    fn size_scales_with_upgrades_and_caps() {
        let config = MarketConfig::default();
        assert_eq!(market_size(1, &config), 21);
        assert_eq!(market_size(2, &config), 42);
        assert_eq!(market_size(15, &config), 101);
    }

    #[test]
    fn listing_has_no_duplicates() {
        let config = MarketConfig::default();
        for seed in [0u64, 1, 99, 100, 12345, u64::MAX] {
            let ids = market_ids(seed, 15, &config);
            let unique: BTreeSet<u8> = ids.iter().copied().collect();
            assert_eq!(unique.len(), ids.len(), "seed {seed}");
            assert!(ids.iter().all(|&id| (1..=NUM_ITEMS).contains(&id)));
        }
    }

    #[test]
    fn listing_formula() {
        let config = MarketConfig::default();
        // seed 250: offset 250 % 100 + 1 = 51, start 250 % 101 = 48.
        let ids = market_ids(250, 1, &config);
        assert_eq!(ids[0], 49);
        assert_eq!(ids[1], ((48 + 51) % 101) as u8 + 1);
        assert_eq!(ids[2], ((48 + 102) % 101) as u8 + 1);
    }

    #[test]
    fn prices_follow_charisma() {
        let config = MarketConfig::default();
        for item in get_market(777, 2, 3, &config) {
            assert_eq!(item.price, item_price(item.tier, 3, &config));
            assert!(item.price >= config.min_price);
        }
    }

    #[test]
    fn deterministic() {
        let config = MarketConfig::default();
        assert_eq!(get_market(4242, 3, 1, &config), get_market(4242, 3, 1, &config));
    }
}
