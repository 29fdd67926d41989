//! Entropy accounting and strength classification.
//!
//! Metrics are a pure function of the sequence length and alphabet;
//! nothing here holds state between calls.

mod metrics;
mod strength;
mod threshold;

pub use metrics::{EntropyMetrics, TARGET_BITS};
pub use strength::{EntropyStrength, StrengthColor};
pub use threshold::{GateDecision, StrengthGate};
