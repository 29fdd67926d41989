//! Hex bytes: eight bits per symbol, two hex digits of text each.

use super::{ParseError, Variant};
use rand::Rng;
use rand_core::{CryptoRng, RngCore};

pub(super) const BITS_PER_SYMBOL: f64 = 8.0;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

pub(super) fn random<R: RngCore + CryptoRng>(rng: &mut R) -> u8 {
    rng.gen()
}

pub(super) fn encode(value: u8, out: &mut String) {
    out.push(HEX_DIGITS[(value >> 4) as usize] as char);
    out.push(HEX_DIGITS[(value & 0x0f) as usize] as char);
}

/// Decodes hex text of either case.
pub(super) fn decode(text: &str) -> Result<Vec<u8>, ParseError> {
    let mut nibbles = Vec::with_capacity(text.len());
    for (offset, c) in text.char_indices() {
        let nibble = c.to_digit(16).ok_or(ParseError::InvalidCharacter {
            variant: Variant::Byte,
            found: c,
            offset,
        })?;
        nibbles.push(nibble as u8);
    }

    if nibbles.len() % 2 != 0 {
        return Err(ParseError::OddLength {
            variant: Variant::Byte,
            len: nibbles.len(),
        });
    }

    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_pads_to_two_digits() {
        let mut out = String::new();
        encode(0x0a, &mut out);
        encode(0xff, &mut out);
        assert_eq!(out, "0aff");
    }

    #[test]
    fn test_decode_mixed_case() {
        assert_eq!(decode("DeAdBeEf").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_decode_rejects_whitespace() {
        assert!(matches!(
            decode("de ad"),
            Err(ParseError::InvalidCharacter { found: ' ', offset: 2, .. })
        ));
    }
}
