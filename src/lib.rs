//! Manual Entropy Library
//!
//! Captures cryptographic seed entropy entered by hand: dice rolls,
//! coin flips, playing cards or hex bytes. Keeps a running estimate of
//! how much entropy has been collected and turns the finished sequence
//! into raw seed bytes.
//!
//! # Architecture
//!
//! ```text
//! input events → session (append / delete / clear / paste)
//!                   ↓                 ↓
//!            tokens (codecs)    analysis (metrics, strength)
//!                   ↓
//!              seed bytes → downstream seed construction
//! ```
//!
//! # Design Principles
//!
//! - **One alphabet per session**: a session never mixes symbol kinds
//! - **Exact accounting**: bits per symbol are fixed constants
//! - **Strict codecs**: text decoding rejects, never truncates
//! - **No replayable randomness**: the shared generator cannot be seeded
//!
//! # Example
//!
//! ```no_run
//! use manual_entropy::{EntropySession, SecureRandom, StrengthGate, Variant};
//!
//! let mut rng = SecureRandom::shared().expect("secure randomness unavailable");
//! let mut session = EntropySession::new(Variant::Die);
//!
//! session.replace_from_text("3456").unwrap();
//! for _ in 0..46 {
//!     session.append_random(&mut rng);
//! }
//!
//! let metrics = session.metrics();
//! println!("{:.1} bits, {}", metrics.total_bits, metrics.strength);
//!
//! let seed = session.finish(&StrengthGate::default(), false).unwrap();
//! assert_eq!(seed.bytes().len(), 16);
//! ```

#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod keypad;
pub mod random;
pub mod seed;
pub mod session;
pub mod tokens;

// Re-export commonly used types at crate root
pub use analysis::{EntropyMetrics, EntropyStrength, GateDecision, StrengthGate};
pub use config::FileConfig;
pub use keypad::Keypad;
pub use random::{RandomError, SecureRandom};
pub use seed::{CapturedSeed, SeedBytes};
pub use session::{EntropySession, SessionError};
pub use tokens::{Card, Die, ParseError, Rank, Suit, Symbol, Token, Variant};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
