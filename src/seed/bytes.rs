//! Seed byte containers handed to downstream seed construction.

use crate::tokens::Variant;
use chrono::{DateTime, Utc};

/// Raw seed bytes.
///
/// `Debug` prints only the length so seed material does not end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SeedBytes {
    data: Vec<u8>,
}

impl SeedBytes {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        self.data.iter().map(|b| format!("{:02x}", b)).collect()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl std::fmt::Debug for SeedBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedBytes")
            .field("len", &self.data.len())
            .finish_non_exhaustive()
    }
}

/// The result of a completed capture session.
#[derive(Debug, Clone)]
pub struct CapturedSeed {
    bytes: SeedBytes,
    variant: Variant,
    entropy_bits: f64,
    created_at: Option<DateTime<Utc>>,
}

impl CapturedSeed {
    pub(crate) fn new(
        bytes: SeedBytes,
        variant: Variant,
        entropy_bits: f64,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            bytes,
            variant,
            entropy_bits,
            created_at,
        }
    }

    #[inline]
    pub fn bytes(&self) -> &SeedBytes {
        &self.bytes
    }

    /// Alphabet the seed was captured with.
    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Entropy estimate of the captured sequence.
    #[inline]
    pub fn entropy_bits(&self) -> f64 {
        self.entropy_bits
    }

    /// Creation timestamp, set only for alphabets that date the seed.
    #[inline]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn into_bytes(self) -> SeedBytes {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_bytes() {
        let seed = SeedBytes::new(vec![0xde, 0xad, 0xbe, 0xef]);
        let printed = format!("{:?}", seed);
        assert!(printed.contains("len: 4"));
        assert!(!printed.contains("222"));
        assert!(!printed.contains("deadbeef"));
    }

    #[test]
    fn test_hex() {
        assert_eq!(SeedBytes::new(vec![0x00, 0x0f, 0xf0]).to_hex(), "000ff0");
        assert!(SeedBytes::new(Vec::new()).is_empty());
    }
}
