//! Keypad registry.
//!
//! A [`Keypad`] bundles everything an input surface needs for one
//! alphabet: its display name, entropy per symbol, random draws, the
//! text codec and seed derivation. A capture session picks one keypad
//! and keeps it for its whole lifetime.

use crate::analysis::TARGET_BITS;
use crate::seed::{seed_bytes, SeedBytes, SeedError};
use crate::tokens::{ParseError, Token, Variant};
use rand_core::{CryptoRng, RngCore};

/// Per-alphabet capability table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keypad {
    variant: Variant,
}

impl Keypad {
    /// Every available keypad, in menu order.
    pub const ALL: [Keypad; 4] = [
        Keypad::new(Variant::Byte),
        Keypad::new(Variant::Die),
        Keypad::new(Variant::Bit),
        Keypad::new(Variant::Card),
    ];

    pub const fn new(variant: Variant) -> Self {
        Self { variant }
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn name(&self) -> &'static str {
        self.variant.name()
    }

    pub fn bits_per_symbol(&self) -> f64 {
        self.variant.bits_per_symbol()
    }

    /// Symbols needed to reach the 128-bit target.
    pub fn symbols_for_target(&self) -> usize {
        self.variant.symbols_for_bits(TARGET_BITS)
    }

    /// Whether seeds from this keypad record their creation time.
    ///
    /// A shuffled deck is dealt once, so card seeds carry the date they
    /// were drawn.
    pub fn sets_creation_date(&self) -> bool {
        self.variant == Variant::Card
    }

    pub fn random<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Token {
        self.variant.random(rng)
    }

    pub fn to_text(&self, tokens: &[Token]) -> String {
        self.variant.to_text(tokens)
    }

    pub fn from_text(&self, text: &str) -> Result<Vec<Token>, ParseError> {
        self.variant.from_text(text)
    }

    pub fn seed(&self, tokens: &[Token]) -> Result<SeedBytes, SeedError> {
        seed_bytes(self.variant, tokens)
    }
}

impl From<Variant> for Keypad {
    fn from(variant: Variant) -> Self {
        Self::new(variant)
    }
}
