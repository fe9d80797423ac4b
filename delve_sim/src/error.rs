// Errors raised at the host boundary.
//
// Every generator, combat formula and lookahead in this crate is total and
// returns plain values. The only fallible operations are the ones that accept
// untrusted text from the host: parsing a packed hex string and loading a
// `GameConfig` from JSON.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DelveError {
    /// The input is not a hex or decimal integer that fits 256 bits.
    #[error("invalid packed integer {input:?}: {reason}")]
    InvalidPacked { input: String, reason: String },

    /// The integer parsed but carries bits beyond the record's layout.
    #[error("packed value uses {bits} bits but the layout holds {max_bits}")]
    PackedOverflow { bits: usize, max_bits: usize },

    #[error("malformed config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
