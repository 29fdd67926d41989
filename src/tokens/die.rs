//! Six-sided die rolls.

use super::{ParseError, Variant};
use rand::Rng;
use rand_core::{CryptoRng, RngCore};
use std::fmt;

pub(super) const BITS_PER_SYMBOL: f64 = 2.584962500721156;

/// One face of a six-sided die, always in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Die(u8);

impl Die {
    pub const FACES: u8 = 6;

    /// Returns `None` unless `face` is in `1..=6`.
    pub fn new(face: u8) -> Option<Self> {
        (1..=Self::FACES).contains(&face).then_some(Self(face))
    }

    /// Rolls a fair die.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self(rng.gen_range(1..=Self::FACES))
    }

    #[inline]
    pub fn face(self) -> u8 {
        self.0
    }

    #[inline]
    pub(super) fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub(super) fn decode(text: &str) -> Result<Vec<Die>, ParseError> {
    text.char_indices()
        .map(|(offset, c)| {
            c.to_digit(10)
                .and_then(|d| Die::new(d as u8))
                .ok_or(ParseError::InvalidCharacter {
                    variant: Variant::Die,
                    found: c,
                    offset,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    #[test]
    fn test_new_bounds() {
        assert!(Die::new(0).is_none());
        assert_eq!(Die::new(1).map(Die::face), Some(1));
        assert_eq!(Die::new(6).map(Die::face), Some(6));
        assert!(Die::new(7).is_none());
    }

    #[test]
    fn test_random_covers_all_faces() {
        let mut rng = ChaCha20Rng::from_seed([11u8; 32]);
        let mut seen = [false; 6];
        for _ in 0..600 {
            let face = Die::random(&mut rng).face();
            assert!((1..=6).contains(&face));
            seen[(face - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_decode_rejects_non_ascii_digit() {
        assert!(decode("12\u{0663}").is_err());
        assert!(decode("1 2").is_err());
    }
}
