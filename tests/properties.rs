//! Property tests for the token text codecs and entropy accounting.

use manual_entropy::{Card, Die, EntropySession, Token, Variant};
use proptest::prelude::*;

fn byte_tokens() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec(any::<u8>(), 0..64)
        .prop_map(|values| values.into_iter().map(Token::byte).collect())
}

fn die_tokens() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec(1u8..=6, 0..64).prop_map(|faces| {
        faces
            .into_iter()
            .filter_map(Die::new)
            .map(Token::die)
            .collect()
    })
}

fn bit_tokens() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec(any::<bool>(), 0..64)
        .prop_map(|flips| flips.into_iter().map(Token::bit).collect())
}

fn card_tokens() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec(0u8..52, 0..64).prop_map(|indices| {
        indices
            .into_iter()
            .filter_map(Card::from_index)
            .map(Token::card)
            .collect()
    })
}

fn insert_char(text: &str, at: usize, c: char) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let at = at % (chars.len() + 1);
    chars.insert(at, c);
    chars.into_iter().collect()
}

proptest! {
    #[test]
    fn byte_round_trip(tokens in byte_tokens()) {
        let text = Variant::Byte.to_text(&tokens);
        prop_assert_eq!(text.len(), tokens.len() * 2);
        prop_assert_eq!(Variant::Byte.from_text(&text).unwrap(), tokens);
    }

    #[test]
    fn byte_round_trip_uppercase(tokens in byte_tokens()) {
        let text = Variant::Byte.to_text(&tokens).to_uppercase();
        prop_assert_eq!(Variant::Byte.from_text(&text).unwrap(), tokens);
    }

    #[test]
    fn die_round_trip(tokens in die_tokens()) {
        let text = Variant::Die.to_text(&tokens);
        prop_assert_eq!(Variant::Die.from_text(&text).unwrap(), tokens);
    }

    #[test]
    fn bit_round_trip(tokens in bit_tokens()) {
        let text = Variant::Bit.to_text(&tokens);
        prop_assert_eq!(Variant::Bit.from_text(&text).unwrap(), tokens);
    }

    #[test]
    fn card_round_trip(tokens in card_tokens()) {
        let text = Variant::Card.to_text(&tokens);
        prop_assert_eq!(text.chars().count(), tokens.len() * 2);
        prop_assert_eq!(Variant::Card.from_text(&text).unwrap(), tokens);
    }

    #[test]
    fn byte_rejects_foreign_character(
        text in "([0-9a-fA-F]{2}){0,16}",
        bad in "[^0-9a-fA-F]",
        at in any::<usize>(),
    ) {
        let c = bad.chars().next().unwrap();
        prop_assert!(Variant::Byte.from_text(&insert_char(&text, at, c)).is_err());
    }

    #[test]
    fn byte_rejects_odd_length(text in "[0-9a-f]{1,31}") {
        prop_assume!(text.len() % 2 == 1);
        prop_assert!(Variant::Byte.from_text(&text).is_err());
    }

    #[test]
    fn die_rejects_foreign_character(
        text in "[1-6]{0,32}",
        bad in "[^1-6]",
        at in any::<usize>(),
    ) {
        let c = bad.chars().next().unwrap();
        prop_assert!(Variant::Die.from_text(&insert_char(&text, at, c)).is_err());
    }

    #[test]
    fn bit_rejects_foreign_character(
        text in "[01]{0,32}",
        bad in "[^01]",
        at in any::<usize>(),
    ) {
        let c = bad.chars().next().unwrap();
        prop_assert!(Variant::Bit.from_text(&insert_char(&text, at, c)).is_err());
    }

    #[test]
    fn card_rejects_foreign_character(
        tokens in card_tokens(),
        bad in "[^a2-9tjqkcdhs]",
        at in any::<usize>(),
    ) {
        let text = Variant::Card.to_text(&tokens);
        let c = bad.chars().next().unwrap();
        prop_assert!(Variant::Card.from_text(&insert_char(&text, at, c)).is_err());
    }

    #[test]
    fn append_adds_exactly_bits_per_symbol(tokens in die_tokens()) {
        let mut session = EntropySession::new(Variant::Die);
        for (i, token) in tokens.into_iter().enumerate() {
            let before = session.metrics().total_bits;
            session.append(token).unwrap();
            let after = session.metrics().total_bits;
            prop_assert!((after - before - Variant::Die.bits_per_symbol()).abs() < 1e-9);
            prop_assert_eq!(session.len(), i + 1);
        }
        session.clear();
        prop_assert_eq!(session.metrics().total_bits, 0.0);
    }

    #[test]
    fn export_is_idempotent(tokens in card_tokens()) {
        let mut session = EntropySession::new(Variant::Card);
        for token in tokens {
            session.append(token).unwrap();
        }
        prop_assert_eq!(session.export_text(), session.export_text());
    }

    #[test]
    fn failed_paste_never_mutates(
        tokens in bit_tokens(),
        bad in "[01]{0,8}[2-9][01]{0,8}",
    ) {
        let mut session = EntropySession::new(Variant::Bit);
        for token in tokens {
            session.append(token).unwrap();
        }
        let before = session.export_text();

        prop_assert!(!session.can_paste(&bad));
        prop_assert!(session.replace_from_text(&bad).is_err());
        prop_assert_eq!(session.export_text(), before);
    }
}
