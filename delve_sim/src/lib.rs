// delve_sim: deterministic client core for the Delve dungeon crawler.
//
// The authoritative game runs on a remote ledger. This crate reproduces its
// rules bit-for-bit so a client can decode the compact on-chain state,
// predict outcomes before a transaction confirms, and preview upcoming
// encounters. It performs no I/O and never mutates ledger state.
//
// Module overview:
// - `codec.rs`:      Packed 238/240-bit integers <-> Adventurer / Bag.
// - `adventurer.rs`: Adventurer, Equipment, Stats, Item and Bag records with clamping setters.
// - `types.rs`:      Tier, Slot, ItemType, the elemental triangle, level math.
// - `items.rs`:      The 101-item table: tier/slot/type lookups, prices, specials seeds.
// - `specials.rs`:   Special name tables ("of Power", "Agony Bane").
// - `beast.rs`:      Beast generation, starter beasts, gold and xp rewards.
// - `obstacle.rs`:   Obstacle and discovery generation, loot rarity.
// - `market.rs`:     Seeded market listings.
// - `combat.rs`:     Attack, beast and obstacle damage; aggregate CombatStats.
// - `encounter.rs`:  Encounter rows and the bounded lookahead (FrontierQueue).
// - `snapshot.rs`:   GameSnapshot, the immutable per-state handle the host holds.
// - `config.rs`:     GameConfig, every tunable constant, JSON-loadable.
// - `error.rs`:      DelveError for the fallible host-boundary entry points.
// - `rng`:           Re-exported from `delve_rng`: Poseidon-derived rolls.
//
// **Critical constraint: determinism.** Every operation is a pure function of
// its inputs. All randomness comes from `rng::get_randomness(xp, seed)`. No
// floating point, no `HashMap`, no system time, no OS entropy.

pub mod adventurer;
pub mod beast;
pub mod codec;
pub mod combat;
pub mod config;
pub mod encounter;
pub mod error;
pub mod items;
pub mod market;
pub mod obstacle;
pub use delve_rng as rng;
pub mod snapshot;
pub mod specials;
pub mod types;
