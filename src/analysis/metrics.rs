//! Derived entropy metrics for a token sequence.

use super::EntropyStrength;
use crate::tokens::Variant;

/// Entropy needed for a full progress bar.
pub const TARGET_BITS: f64 = 128.0;

/// Snapshot of how much entropy a sequence holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyMetrics {
    /// `count * bits_per_symbol`.
    pub total_bits: f64,
    /// `total_bits / TARGET_BITS`, clamped to `[0, 1]`.
    pub progress: f64,
    pub strength: EntropyStrength,
}

impl EntropyMetrics {
    /// Computes metrics for `count` symbols of `variant`.
    pub fn for_count(variant: Variant, count: usize) -> Self {
        Self::from_bits(count as f64 * variant.bits_per_symbol())
    }

    pub fn from_bits(total_bits: f64) -> Self {
        Self {
            total_bits,
            progress: (total_bits / TARGET_BITS).clamp(0.0, 1.0),
            strength: EntropyStrength::classify(total_bits),
        }
    }
}

impl Default for EntropyMetrics {
    fn default() -> Self {
        Self::from_bits(0.0)
    }
}
