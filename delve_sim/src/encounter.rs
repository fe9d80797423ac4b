// Encounter lookahead: every reachable near-future encounter from a state.
//
// An encounter at a given xp is a pure function of `(xp, seed)`: the rolls
// come from `get_randomness(xp, seed)` and `rnd8 % 3` picks Beast, Obstacle
// or Discovery. Resolving it moves the adventurer to a new xp:
// - Beast: `xp + xp_reward` after a kill, or `xp + 1` after fleeing.
// - Obstacle: `xp + xp_reward`.
// - Discovery: `xp + 1`.
//
// `list_all_encounters` walks this graph from the current xp with an explicit
// worklist (`FrontierQueue`): pop the smallest pending xp, emit its encounter,
// push its successors. Each xp is queued at most once, so no row repeats, and
// the walk stops at `max_encounters` rows. Successors are capped at `MAX_XP`
// (the 15-bit packed field) and are otherwise strictly greater than their
// source, so rows come out in ascending xp order.
//
// The lookahead ignores live equipment and stats. Rows carry the raw rolls
// (critical flag, struck slot, avoid roll) so the host can apply the
// adventurer's current numbers itself (see `combat::ability_avoids_threat`).
//
// **Critical constraint: determinism.** Same inputs, same rows, in the same
// order, on every client.

use crate::adventurer::Equipment;
use crate::beast::{Beast, beast_from_randomness, gold_reward, xp_reward};
use crate::codec::MAX_XP;
use crate::config::GameConfig;
use crate::obstacle::{Discovery, Obstacle, discovery_from_randomness, obstacle_from_randomness};
use crate::rng::{Randomness, get_randomness};
use crate::types::{Slot, level_from_xp};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap};
use std::fmt;

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// A pending xp value in the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    xp: u16,
}

// Min-heap: the smallest xp is "greatest" for `BinaryHeap`.
impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        other.xp.cmp(&self.xp)
    }
}

/// Worklist of xp values still to expand, smallest first. An xp that has
/// ever been queued is never queued again.
#[derive(Clone, Debug, Default)]
pub struct FrontierQueue {
    heap: BinaryHeap<Pending>,
    seen: BTreeSet<u16>,
}

impl FrontierQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `xp`. Returns false if it was already queued or expanded.
    pub fn push(&mut self, xp: u16) -> bool {
        if !self.seen.insert(xp) {
            return false;
        }
        self.heap.push(Pending { xp });
        true
    }

    pub fn pop(&mut self) -> Option<u16> {
        self.heap.pop().map(|p| p.xp)
    }

    /// Number of xp values waiting to be expanded.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Encounter rows
// ---------------------------------------------------------------------------

/// The three outcomes of exploring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterKind {
    Beast,
    Obstacle,
    Discovery,
}

impl EncounterKind {
    /// `rnd8 % 3`: 0 Beast, 1 Obstacle, 2 Discovery.
    pub fn from_roll(rnd8: u8) -> EncounterKind {
        match rnd8 % 3 {
            0 => EncounterKind::Beast,
            1 => EncounterKind::Obstacle,
            _ => EncounterKind::Discovery,
        }
    }
}

impl fmt::Display for EncounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EncounterKind::Beast => "Beast",
            EncounterKind::Obstacle => "Obstacle",
            EncounterKind::Discovery => "Discovery",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeastEncounter {
    pub xp: u16,
    pub adventurer_level: u8,
    pub beast: Beast,
    /// Slot the beast's opening strike lands on.
    pub location: Slot,
    pub critical_hit: bool,
    /// Compared against wisdom to dodge the ambush.
    pub avoid_roll: u16,
    /// Gold for the kill, before any Gold Ring bonus.
    pub gold_reward: u32,
    pub xp_reward: u32,
    /// Xp after the kill. Fleeing leads to `xp + 1` instead.
    pub next_xp: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleEncounter {
    pub xp: u16,
    pub adventurer_level: u8,
    pub obstacle: Obstacle,
    pub location: Slot,
    pub critical_hit: bool,
    /// Compared against intelligence (magic) or dexterity (otherwise).
    pub avoid_roll: u16,
    pub xp_reward: u32,
    pub next_xp: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryEncounter {
    pub xp: u16,
    pub adventurer_level: u8,
    pub discovery: Discovery,
    pub next_xp: u16,
}

/// One row of the lookahead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "encounter")]
pub enum Encounter {
    Beast(BeastEncounter),
    Obstacle(ObstacleEncounter),
    Discovery(DiscoveryEncounter),
}

impl Encounter {
    pub fn kind(&self) -> EncounterKind {
        match self {
            Encounter::Beast(_) => EncounterKind::Beast,
            Encounter::Obstacle(_) => EncounterKind::Obstacle,
            Encounter::Discovery(_) => EncounterKind::Discovery,
        }
    }

    pub fn xp(&self) -> u16 {
        match self {
            Encounter::Beast(row) => row.xp,
            Encounter::Obstacle(row) => row.xp,
            Encounter::Discovery(row) => row.xp,
        }
    }

    pub fn next_xp(&self) -> u16 {
        match self {
            Encounter::Beast(row) => row.next_xp,
            Encounter::Obstacle(row) => row.next_xp,
            Encounter::Discovery(row) => row.next_xp,
        }
    }
}

/// Successor xp, capped at the packable maximum. A node already at or past
/// the cap is its own successor.
fn advance(xp: u16, by: u32) -> u16 {
    let cap = u32::from(MAX_XP.max(xp));
    (u32::from(xp) + by).min(cap) as u16
}

fn strike_location(rnd7: u8) -> Slot {
    Slot::ARMOR[usize::from(rnd7) % Slot::ARMOR.len()]
}

fn avoid_roll(level: u16, rnd8: u8) -> u16 {
    (u32::from(level) * u32::from(rnd8) / 255) as u16
}

fn critical_hit(rnd: &Randomness, config: &GameConfig) -> bool {
    rnd.rnd2 % 100 < config.encounter.critical_hit_percent
}

/// Derive the single encounter waiting at `xp`.
pub fn encounter_at(xp: u16, seed: u64, adventurer_level: u8, kind: EncounterKind, config: &GameConfig) -> Encounter {
    build_row(xp, &get_randomness(xp, seed), adventurer_level, kind, config)
}

fn build_row(xp: u16, rnd: &Randomness, adventurer_level: u8, kind: EncounterKind, config: &GameConfig) -> Encounter {
    match kind {
        EncounterKind::Beast => {
            let beast = beast_from_randomness(rnd, adventurer_level, &config.beast);
            let reward = xp_reward(beast.tier, beast.level, adventurer_level, &config.beast);
            Encounter::Beast(BeastEncounter {
                xp,
                adventurer_level,
                location: strike_location(rnd.rnd7),
                critical_hit: critical_hit(rnd, config),
                avoid_roll: avoid_roll(beast.level, rnd.rnd8),
                gold_reward: gold_reward(beast.tier, beast.level, &Equipment::default(), config),
                xp_reward: reward,
                next_xp: advance(xp, reward),
                beast,
            })
        }
        EncounterKind::Obstacle => {
            let obstacle = obstacle_from_randomness(rnd, adventurer_level, config);
            let reward = xp_reward(obstacle.tier, obstacle.level, adventurer_level, &config.beast);
            Encounter::Obstacle(ObstacleEncounter {
                xp,
                adventurer_level,
                location: strike_location(rnd.rnd7),
                critical_hit: critical_hit(rnd, config),
                avoid_roll: avoid_roll(obstacle.level, rnd.rnd8),
                xp_reward: reward,
                next_xp: advance(xp, reward),
                obstacle,
            })
        }
        EncounterKind::Discovery => Encounter::Discovery(DiscoveryEncounter {
            xp,
            adventurer_level,
            discovery: discovery_from_randomness(rnd, adventurer_level, config),
            next_xp: advance(xp, 1),
        }),
    }
}

/// Enumerate the encounters reachable from `xp`, smallest xp first, at most
/// `config.encounter.max_encounters` rows.
///
/// `adventurer_level` applies to the starting xp only; later nodes derive
/// their level from their own xp. `has_beast` forces the first row to be the
/// beast already engaged.
pub fn list_all_encounters(
    xp: u16,
    seed: u64,
    adventurer_level: u8,
    has_beast: bool,
    config: &GameConfig,
) -> Vec<Encounter> {
    let cap = config.encounter.max_encounters;
    tracing::debug!(xp, seed, adventurer_level, has_beast, cap, "lookahead started");

    let mut frontier = FrontierQueue::new();
    frontier.push(xp);
    let mut rows = Vec::with_capacity(cap);
    let mut first = true;

    while rows.len() < cap {
        let Some(node) = frontier.pop() else {
            tracing::debug!(rows = rows.len(), "lookahead frontier exhausted");
            return rows;
        };
        let rnd = get_randomness(node, seed);
        let kind = if first && has_beast {
            EncounterKind::Beast
        } else {
            EncounterKind::from_roll(rnd.rnd8)
        };
        let level = if first { adventurer_level } else { level_from_xp(node) };
        first = false;

        let row = build_row(node, &rnd, level, kind, config);
        tracing::trace!(xp = node, kind = %row.kind(), next_xp = row.next_xp(), "lookahead row");
        frontier.push(row.next_xp());
        if kind == EncounterKind::Beast {
            frontier.push(advance(node, 1));
        }
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), pending = frontier.len(), "lookahead cap reached");
    rows
}
