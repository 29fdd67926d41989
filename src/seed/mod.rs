//! Seed bytes derived from a captured token sequence.
//!
//! Hex-byte input is used verbatim. Die rolls, coin flips and cards carry
//! fewer than eight bits per symbol, so their sequences are hashed down
//! to a fixed 16-byte seed.

mod bytes;
mod derive;

pub use bytes::{CapturedSeed, SeedBytes};
pub use derive::{deterministic_random, seed_bytes, SeedError, MAX_DETERMINISTIC_LEN, SEED_LEN};
