//! Per-alphabet seed derivation.
//!
//! - Byte: token values, byte for byte.
//! - Die, Bit: first 16 bytes of SHA-256 over the text encoding.
//! - Card: [`deterministic_random`] over the card indices, 16 bytes.

use super::SeedBytes;
use crate::tokens::{Symbol, Token, Variant};
use hkdf::Hkdf;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Length of seeds derived from sub-byte alphabets.
pub const SEED_LEN: usize = 16;

/// Largest output HKDF-SHA256 can expand to.
pub const MAX_DETERMINISTIC_LEN: usize = 255 * 32;

/// Errors that can occur during seed derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("requested {requested} bytes, at most {max} can be derived")]
    OutputTooLong { requested: usize, max: usize },
    #[error("{found} token found while deriving a {expected} seed")]
    MixedVariants { expected: Variant, found: Variant },
}

/// Derives seed bytes from a token sequence of a single variant.
pub fn seed_bytes(variant: Variant, tokens: &[Token]) -> Result<SeedBytes, SeedError> {
    if let Some(stray) = tokens.iter().find(|t| t.variant() != variant) {
        return Err(SeedError::MixedVariants {
            expected: variant,
            found: stray.variant(),
        });
    }

    let bytes: Vec<u8> = match variant {
        Variant::Byte => tokens
            .iter()
            .filter_map(|t| match t.symbol() {
                Symbol::Byte(value) => Some(value),
                _ => None,
            })
            .collect(),
        Variant::Die | Variant::Bit => {
            let digest = Sha256::digest(variant.to_text(tokens).as_bytes());
            digest[..SEED_LEN].to_vec()
        }
        Variant::Card => {
            let indices: Vec<u8> = tokens
                .iter()
                .filter_map(|t| match t.symbol() {
                    Symbol::Card(card) => Some(card.index()),
                    _ => None,
                })
                .collect();
            deterministic_random(&indices, SEED_LEN)?
        }
    };

    Ok(SeedBytes::new(bytes))
}

/// Stretches `entropy` into `count` pseudorandom bytes.
///
/// `HKDF-SHA256(salt = none, ikm = SHA-256(entropy), info = none)`,
/// expanded to `count` bytes.
pub fn deterministic_random(entropy: &[u8], count: usize) -> Result<Vec<u8>, SeedError> {
    if count > MAX_DETERMINISTIC_LEN {
        return Err(SeedError::OutputTooLong {
            requested: count,
            max: MAX_DETERMINISTIC_LEN,
        });
    }

    let ikm = Sha256::digest(entropy);
    let hk = Hkdf::<Sha256>::new(None, &ikm);
    let mut okm = vec![0u8; count];
    hk.expand(&[], &mut okm)
        .map_err(|_| SeedError::OutputTooLong {
            requested: count,
            max: MAX_DETERMINISTIC_LEN,
        })?;
    Ok(okm)
}
