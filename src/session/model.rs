//! The entropy accumulation model.

use crate::analysis::{EntropyMetrics, EntropyStrength, GateDecision, StrengthGate};
use crate::keypad::Keypad;
use crate::seed::{CapturedSeed, SeedBytes, SeedError};
use crate::tokens::{ParseError, Token, Variant};
use chrono::Utc;
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

/// Errors returned by session operations.
///
/// None of these leave the sequence modified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("cannot add a {found} token to a {expected} session")]
    VariantMismatch { expected: Variant, found: Variant },
    #[error("paste refused: {0}")]
    Parse(#[from] ParseError),
    #[error("no entropy has been captured")]
    Empty,
    #[error("entropy is {strength} ({total_bits:.2} bits); confirmation required")]
    WeakEntropy {
        strength: EntropyStrength,
        total_bits: f64,
    },
    #[error("seed derivation failed: {0}")]
    Seed(#[from] SeedError),
}

/// Ordered, single-alphabet sequence of captured tokens.
///
/// Not internally synchronised: a session belongs to the task driving
/// its input surface.
#[derive(Debug, Clone)]
pub struct EntropySession {
    keypad: Keypad,
    tokens: Vec<Token>,
}

impl EntropySession {
    /// Starts an empty session for `variant`.
    pub fn new(variant: Variant) -> Self {
        Self {
            keypad: Keypad::new(variant),
            tokens: Vec::new(),
        }
    }

    #[inline]
    pub fn keypad(&self) -> Keypad {
        self.keypad
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.keypad.variant()
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Appends one token of this session's alphabet.
    pub fn append(&mut self, token: Token) -> Result<(), SessionError> {
        if token.variant() != self.variant() {
            return Err(SessionError::VariantMismatch {
                expected: self.variant(),
                found: token.variant(),
            });
        }

        self.tokens.push(token);
        tracing::trace!(count = self.tokens.len(), "Appended token");
        Ok(())
    }

    /// Draws a random symbol and appends it.
    pub fn append_random<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> Token {
        let token = self.keypad.random(rng);
        self.tokens.push(token);
        tracing::trace!(count = self.tokens.len(), "Appended random token");
        token
    }

    /// Appends random symbols until the sequence reaches
    /// [`EntropyStrength::VeryStrong`]. Returns how many were added.
    pub fn fill_random<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> usize {
        self.fill_random_capped(rng, None)
    }

    /// Like [`fill_random`](Self::fill_random), but stops once the sequence
    /// holds `cap` tokens.
    pub fn fill_random_capped<R: RngCore + CryptoRng>(
        &mut self,
        rng: &mut R,
        cap: Option<usize>,
    ) -> usize {
        let mut added = 0;
        while self.metrics().strength != EntropyStrength::VeryStrong
            && cap.map_or(true, |cap| self.tokens.len() < cap)
        {
            self.tokens.push(self.keypad.random(rng));
            added += 1;
        }
        tracing::debug!(added, count = self.tokens.len(), "Filled with random tokens");
        added
    }

    /// Removes the last token. Does nothing on an empty session.
    pub fn delete_last(&mut self) -> Option<Token> {
        let removed = self.tokens.pop();
        if removed.is_some() {
            tracing::trace!(count = self.tokens.len(), "Deleted last token");
        }
        removed
    }

    /// Removes every token.
    pub fn clear(&mut self) {
        let discarded = self.tokens.len();
        self.tokens.clear();
        tracing::debug!(discarded, "Session cleared");
    }

    /// Replaces the whole sequence with the decoded `text`.
    ///
    /// On a parse failure the current sequence is left exactly as it was.
    /// Returns the new token count.
    pub fn replace_from_text(&mut self, text: &str) -> Result<usize, SessionError> {
        let tokens = self.keypad.from_text(text).map_err(|e| {
            tracing::debug!(variant = %self.variant(), error = %e, "Paste refused");
            e
        })?;

        self.tokens = tokens;
        tracing::debug!(count = self.tokens.len(), "Sequence replaced from text");
        Ok(self.tokens.len())
    }

    /// Text form of the current sequence.
    pub fn export_text(&self) -> String {
        self.keypad.to_text(&self.tokens)
    }

    /// True if `text` would be accepted by [`replace_from_text`](Self::replace_from_text).
    pub fn can_paste(&self, text: &str) -> bool {
        self.keypad.from_text(text).is_ok()
    }

    /// Entropy metrics for the current sequence.
    pub fn metrics(&self) -> EntropyMetrics {
        EntropyMetrics::for_count(self.variant(), self.tokens.len())
    }

    /// Checks the current metrics against `gate`.
    pub fn check(&self, gate: &StrengthGate) -> GateDecision {
        gate.check(&self.metrics())
    }

    /// Seed bytes for the current sequence, without ending the session.
    pub fn seed_bytes(&self) -> Result<SeedBytes, SessionError> {
        Ok(self.keypad.seed(&self.tokens)?)
    }

    /// Completes the session.
    ///
    /// Refuses an empty sequence, and a sequence weaker than `gate` unless
    /// `confirmed` is set. On success the tokens are drained into the
    /// returned seed and the session is left empty; on failure nothing
    /// changes.
    pub fn finish(
        &mut self,
        gate: &StrengthGate,
        confirmed: bool,
    ) -> Result<CapturedSeed, SessionError> {
        if self.is_empty() {
            return Err(SessionError::Empty);
        }

        let metrics = self.metrics();
        if let GateDecision::ConfirmWeak {
            strength,
            total_bits,
        } = gate.check(&metrics)
        {
            if !confirmed {
                return Err(SessionError::WeakEntropy {
                    strength,
                    total_bits,
                });
            }
            tracing::warn!(
                %strength,
                total_bits,
                "Completing session with weak entropy after confirmation"
            );
        }

        let bytes = self.seed_bytes()?;
        let created_at = self.keypad.sets_creation_date().then(Utc::now);
        self.tokens.clear();

        tracing::debug!(
            variant = %self.variant(),
            total_bits = metrics.total_bits,
            seed_len = bytes.len(),
            "Session completed"
        );

        Ok(CapturedSeed::new(
            bytes,
            self.variant(),
            metrics.total_bits,
            created_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{Card, Die, Rank, Suit, Symbol};
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    fn die(face: u8) -> Token {
        Token::die(Die::new(face).unwrap())
    }

    #[test]
    fn test_starts_empty() {
        let session = EntropySession::new(Variant::Die);
        assert!(session.is_empty());
        assert_eq!(session.export_text(), "");
        assert_eq!(session.metrics().total_bits, 0.0);
    }

    #[test]
    fn test_append_increases_bits_by_symbol() {
        let mut session = EntropySession::new(Variant::Die);
        let mut previous = session.metrics().total_bits;
        for face in 1..=6 {
            session.append(die(face)).unwrap();
            let bits = session.metrics().total_bits;
            assert!((bits - previous - Variant::Die.bits_per_symbol()).abs() < 1e-9);
            previous = bits;
        }
    }

    #[test]
    fn test_append_rejects_other_variant() {
        let mut session = EntropySession::new(Variant::Bit);
        session.append(Token::bit(true)).unwrap();

        let result = session.append(Token::byte(0x01));
        assert_eq!(
            result,
            Err(SessionError::VariantMismatch {
                expected: Variant::Bit,
                found: Variant::Byte
            })
        );
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_delete_last_on_empty_is_noop() {
        let mut session = EntropySession::new(Variant::Byte);
        assert!(session.delete_last().is_none());
        assert!(session.is_empty());
    }

    #[test]
    fn test_delete_last_removes_tail() {
        let mut session = EntropySession::new(Variant::Die);
        session.replace_from_text("123").unwrap();
        assert_eq!(session.delete_last(), Some(die(3)));
        assert_eq!(session.export_text(), "12");
    }

    #[test]
    fn test_clear_resets_bits() {
        let mut session = EntropySession::new(Variant::Byte);
        session.replace_from_text("00112233").unwrap();
        session.clear();
        assert!(session.is_empty());
        assert_eq!(session.metrics().total_bits, 0.0);
        session.clear();
        assert!(session.is_empty());
    }

    #[test]
    fn test_failed_paste_leaves_sequence() {
        let mut session = EntropySession::new(Variant::Card);
        session
            .append(Token::card(Card::new(Rank::Queen, Suit::Hearts)))
            .unwrap();

        assert!(matches!(
            session.replace_from_text("qhz"),
            Err(SessionError::Parse(_))
        ));
        assert_eq!(session.export_text(), "qh");
    }

    #[test]
    fn test_can_paste_is_pure() {
        let session = EntropySession::new(Variant::Die);
        assert!(session.can_paste("654321"));
        assert!(!session.can_paste("6543210"));
        assert!(session.is_empty());
    }

    #[test]
    fn test_append_random_uses_session_variant() {
        let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
        let mut session = EntropySession::new(Variant::Card);
        for _ in 0..10 {
            let token = session.append_random(&mut rng);
            assert!(matches!(token.symbol(), Symbol::Card(_)));
            assert_eq!(session.tokens().last(), Some(&token));
        }
        assert_eq!(session.len(), 10);
    }

    #[test]
    fn test_fill_random_stops_at_very_strong() {
        let mut rng = ChaCha20Rng::from_seed([6u8; 32]);
        for (variant, expected) in [
            (Variant::Byte, 16),
            (Variant::Die, 50),
            (Variant::Bit, 128),
            (Variant::Card, 23),
        ] {
            let mut session = EntropySession::new(variant);
            assert_eq!(session.fill_random(&mut rng), expected, "{}", variant);
            assert_eq!(session.metrics().strength, EntropyStrength::VeryStrong);

            session.delete_last();
            assert_ne!(session.metrics().strength, EntropyStrength::VeryStrong);
        }
    }

    #[test]
    fn test_fill_random_keeps_existing_tokens() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        let mut session = EntropySession::new(Variant::Die);
        session.replace_from_text("3456").unwrap();

        assert_eq!(session.fill_random(&mut rng), 46);
        assert!(session.export_text().starts_with("3456"));
        assert_eq!(session.fill_random(&mut rng), 0);
        assert_eq!(session.len(), 50);
    }

    #[test]
    fn test_fill_random_capped_stops_at_cap() {
        let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
        let mut session = EntropySession::new(Variant::Bit);
        session.replace_from_text("0101").unwrap();

        assert_eq!(session.fill_random_capped(&mut rng, Some(10)), 6);
        assert_eq!(session.len(), 10);
        assert_eq!(session.fill_random_capped(&mut rng, Some(10)), 0);
    }

    #[test]
    fn test_finish_refuses_empty() {
        let mut session = EntropySession::new(Variant::Byte);
        assert_eq!(
            session.finish(&StrengthGate::permissive(), true).unwrap_err(),
            SessionError::Empty
        );
    }

    #[test]
    fn test_finish_requires_confirmation_when_weak() {
        let mut session = EntropySession::new(Variant::Die);
        session.replace_from_text("3456").unwrap();

        let err = session.finish(&StrengthGate::default(), false).unwrap_err();
        assert!(matches!(
            err,
            SessionError::WeakEntropy {
                strength: EntropyStrength::VeryWeak,
                ..
            }
        ));
        assert_eq!(session.export_text(), "3456");

        let seed = session.finish(&StrengthGate::default(), true).unwrap();
        assert_eq!(seed.bytes().len(), 16);
        assert_eq!(seed.variant(), Variant::Die);
        assert!(seed.created_at().is_none());
        assert!(session.is_empty());
    }

    #[test]
    fn test_finish_strong_bytes() {
        let mut session = EntropySession::new(Variant::Byte);
        session
            .replace_from_text("000102030405060708090a0b0c0d0e0f")
            .unwrap();

        let seed = session.finish(&StrengthGate::default(), false).unwrap();
        assert_eq!(seed.entropy_bits(), 128.0);
        assert_eq!(seed.bytes().as_bytes(), (0u8..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_card_seed_is_dated() {
        let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
        let mut session = EntropySession::new(Variant::Card);
        for _ in 0..23 {
            session.append_random(&mut rng);
        }
        let seed = session.finish(&StrengthGate::default(), false).unwrap();
        assert!(seed.created_at().is_some());
    }
}
