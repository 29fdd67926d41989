//! Coin flips: one bit per symbol.

use super::{ParseError, Variant};
use rand::Rng;
use rand_core::{CryptoRng, RngCore};

pub(super) const BITS_PER_SYMBOL: f64 = 1.0;

/// Helpers for the coin-flip alphabet. Heads is `true`.
pub struct Coin;

impl Coin {
    /// Flips a fair coin.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> bool {
        rng.gen()
    }

    /// Text form: `1` for heads, `0` for tails.
    #[inline]
    pub fn as_char(heads: bool) -> char {
        if heads {
            '1'
        } else {
            '0'
        }
    }

    /// Display symbol for a flip.
    #[inline]
    pub fn symbol(heads: bool) -> &'static str {
        if heads {
            "H"
        } else {
            "T"
        }
    }
}

pub(super) fn decode(text: &str) -> Result<Vec<bool>, ParseError> {
    text.char_indices()
        .map(|(offset, c)| match c {
            '1' => Ok(true),
            '0' => Ok(false),
            found => Err(ParseError::InvalidCharacter {
                variant: Variant::Bit,
                found,
                offset,
            }),
        })
        .collect()
}
