//! Weak-entropy confirmation gate.
//!
//! Completing a capture below the configured strength is allowed only
//! after the user explicitly confirms it.

use super::{EntropyMetrics, EntropyStrength};
use serde::{Deserialize, Serialize};

/// Minimum strength accepted without confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthGate {
    /// Strengths below this one require confirmation.
    pub warn_below: EntropyStrength,
}

impl Default for StrengthGate {
    fn default() -> Self {
        Self {
            warn_below: EntropyStrength::Strong,
        }
    }
}

impl StrengthGate {
    pub fn new(warn_below: EntropyStrength) -> Self {
        Self { warn_below }
    }

    /// Only a full 128 bits passes unconfirmed.
    pub fn conservative() -> Self {
        Self::new(EntropyStrength::VeryStrong)
    }

    /// Never asks for confirmation.
    pub fn permissive() -> Self {
        Self::new(EntropyStrength::VeryWeak)
    }

    /// Checks metrics against the gate.
    pub fn check(&self, metrics: &EntropyMetrics) -> GateDecision {
        if metrics.strength < self.warn_below {
            GateDecision::ConfirmWeak {
                strength: metrics.strength,
                total_bits: metrics.total_bits,
            }
        } else {
            GateDecision::Proceed
        }
    }
}

/// Outcome of a gate check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateDecision {
    Proceed,
    /// The user must confirm before continuing.
    ConfirmWeak {
        strength: EntropyStrength,
        total_bits: f64,
    },
}

impl GateDecision {
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, GateDecision::ConfirmWeak { .. })
    }
}
