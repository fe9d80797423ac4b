// Ledger-compatible randomness derivation.
//
// Every random decision in Delve (which beast appears, how hard it hits, what
// a discovery yields) is resolved on the authoritative ledger from a single
// Poseidon hash over `(adventurer_xp, seed)`. The client must reproduce those
// rolls bit-for-bit to preview outcomes, so this crate derives them the same
// way: hash with `poseidon_hash_many` over the Stark prime field, keep the low
// 128 bits, and carve them into eight named sub-values.
//
// The split is positional. Downstream generators read specific named slots
// (`rnd1` always seeds an id, `rnd5` always seeds a special prefix), so the
// carving order in `split_hash` is part of the wire contract with the ledger.
//
// This crate is the single entropy source for the workspace. `delve_sim`
// re-exports it as `delve_sim::rng`.
//
// **Critical constraint: determinism.** `get_randomness` is a pure function.
// No internal state, no floating point, no OS entropy.

use serde::{Deserialize, Serialize};
use starknet_crypto::{Felt, poseidon_hash_many};

/// The eight bounded sub-values carved out of one Poseidon hash.
///
/// Field names match the ledger's naming so cross-referencing generator code
/// against on-chain logic stays mechanical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Randomness {
    /// High quarter of the upper half. Seeds beast/obstacle ids.
    pub rnd1: u32,
    /// Low quarter of the upper half. Critical and discovery rolls.
    pub rnd2: u32,
    /// Upper 16 bits of the third quarter. Health and amounts.
    pub rnd3: u16,
    /// Lower 16 bits of the third quarter. Levels and rarity.
    pub rnd4: u16,
    /// Special prefix.
    pub rnd5: u8,
    /// Special suffix.
    pub rnd6: u8,
    /// Attack location.
    pub rnd7: u8,
    /// Encounter kind and ambush roll.
    pub rnd8: u8,
}

/// Derive the eight named rolls for an adventurer at `xp` with `seed`.
///
/// Identical inputs always produce an identical result.
pub fn get_randomness(xp: u16, seed: u64) -> Randomness {
    split_felt(&hash_pair(xp, seed))
}

/// Poseidon hash over the ordered pair `(xp, seed)`, as the ledger computes it.
pub fn hash_pair(xp: u16, seed: u64) -> Felt {
    poseidon_hash_many(&[Felt::from(xp), Felt::from(seed)])
}

/// Reduce a field element to its low 128 bits and split them.
pub fn split_felt(felt: &Felt) -> Randomness {
    let bytes = felt.to_bytes_be();
    let mut low = [0u8; 16];
    low.copy_from_slice(&bytes[16..]);
    split_hash(u128::from_be_bytes(low))
}

/// Carve a 128-bit value into the eight named rolls.
///
/// Layout, most significant first:
/// `| rnd1:32 | rnd2:32 | rnd3:16 | rnd4:16 | rnd5:8 | rnd6:8 | rnd7:8 | rnd8:8 |`
pub fn split_hash(value: u128) -> Randomness {
    let hi64 = (value >> 64) as u64;
    let lo64 = value as u64;

    let q3 = (lo64 >> 32) as u32;
    let q4 = lo64 as u32;

    Randomness {
        rnd1: (hi64 >> 32) as u32,
        rnd2: hi64 as u32,
        rnd3: (q3 >> 16) as u16,
        rnd4: q3 as u16,
        rnd5: (q4 >> 24) as u8,
        rnd6: (q4 >> 16) as u8,
        rnd7: (q4 >> 8) as u8,
        rnd8: q4 as u8,
    }
}
