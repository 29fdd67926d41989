//! Qualitative entropy strength buckets.
//!
//! Boundaries follow the KeePass password quality scale:
//! below 64 bits is very weak, 128 bits and above is very strong.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strength category derived from an entropy estimate in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntropyStrength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

/// Severity color used by display layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
}

impl EntropyStrength {
    /// All categories, weakest first.
    pub const ALL: [EntropyStrength; 5] = [
        EntropyStrength::VeryWeak,
        EntropyStrength::Weak,
        EntropyStrength::Moderate,
        EntropyStrength::Strong,
        EntropyStrength::VeryStrong,
    ];

    /// Classifies an entropy estimate. Intervals are half-open on the right.
    ///
    /// NaN is treated as no entropy.
    pub fn classify(bits: f64) -> Self {
        if bits.is_nan() || bits < 64.0 {
            EntropyStrength::VeryWeak
        } else if bits < 80.0 {
            EntropyStrength::Weak
        } else if bits < 112.0 {
            EntropyStrength::Moderate
        } else if bits < 128.0 {
            EntropyStrength::Strong
        } else {
            EntropyStrength::VeryStrong
        }
    }

    /// Smallest entropy estimate that falls in this category.
    pub fn min_bits(self) -> f64 {
        match self {
            EntropyStrength::VeryWeak => 0.0,
            EntropyStrength::Weak => 64.0,
            EntropyStrength::Moderate => 80.0,
            EntropyStrength::Strong => 112.0,
            EntropyStrength::VeryStrong => 128.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntropyStrength::VeryWeak => "Very Weak",
            EntropyStrength::Weak => "Weak",
            EntropyStrength::Moderate => "Moderate",
            EntropyStrength::Strong => "Strong",
            EntropyStrength::VeryStrong => "Very Strong",
        }
    }

    pub fn color(self) -> StrengthColor {
        match self {
            EntropyStrength::VeryWeak => StrengthColor::Red,
            EntropyStrength::Weak => StrengthColor::Orange,
            EntropyStrength::Moderate => StrengthColor::Yellow,
            EntropyStrength::Strong => StrengthColor::Green,
            EntropyStrength::VeryStrong => StrengthColor::Blue,
        }
    }
}

impl fmt::Display for EntropyStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
