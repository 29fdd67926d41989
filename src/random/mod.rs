//! Process-wide secure random source.
//!
//! Every "roll", "flip" or "draw" goes through a generator that
//! implements [`rand_core::CryptoRng`]. Production code uses the shared
//! [`SecureRandom`]; tests pass a fixed-seed ChaCha20 generator instead.

mod secure;

pub use secure::{RandomError, SecureRandom};
