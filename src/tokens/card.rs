//! Playing cards drawn from a standard 52-card deck.
//!
//! Text form is two lowercase characters per card, rank then suit:
//! ranks `a23456789tjqk`, suits `cdhs`. `"th"` is the ten of hearts.

use super::{ParseError, Variant};
use rand::Rng;
use rand_core::{CryptoRng, RngCore};
use std::fmt;

pub(super) const BITS_PER_SYMBOL: f64 = 5.700439718141092;

/// Card rank, ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    const CHARS: [char; 13] = ['a', '2', '3', '4', '5', '6', '7', '8', '9', 't', 'j', 'q', 'k'];

    /// Character used in the text form.
    #[inline]
    pub fn as_char(self) -> char {
        Self::CHARS[self as usize]
    }

    pub fn from_char(c: char) -> Option<Self> {
        Self::CHARS
            .iter()
            .position(|&r| r == c)
            .map(|i| Self::ALL[i])
    }

    /// Label printed on the card face.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Card suit, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Clubs = 0,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }
}

/// A single playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const DECK_SIZE: u8 = 52;

    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Position in a deck ordered by suit, then rank: `suit * 13 + rank`.
    #[inline]
    pub fn index(self) -> u8 {
        self.suit as u8 * 13 + self.rank as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        if index >= Self::DECK_SIZE {
            return None;
        }
        Some(Self::at_position(index))
    }

    /// Draws one card; a single index draw keeps all 52 cards equally likely.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self::at_position(rng.gen_range(0..Self::DECK_SIZE))
    }

    /// Inverse of [`index`](Self::index). `index` must be below `DECK_SIZE`.
    fn at_position(index: u8) -> Self {
        Self {
            rank: Rank::ALL[(index % 13) as usize],
            suit: Suit::ALL[(index / 13) as usize],
        }
    }

    pub(super) fn encode(self, out: &mut String) {
        out.push(self.rank.as_char());
        out.push(self.suit.as_char());
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.glyph())
    }
}

pub(super) fn decode(text: &str) -> Result<Vec<Card>, ParseError> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    if chars.len() % 2 != 0 {
        return Err(ParseError::OddLength {
            variant: Variant::Card,
            len: chars.len(),
        });
    }

    chars
        .chunks_exact(2)
        .map(|pair| {
            let (rank_offset, rank_char) = pair[0];
            let (suit_offset, suit_char) = pair[1];
            let rank = Rank::from_char(rank_char).ok_or(ParseError::InvalidCharacter {
                variant: Variant::Card,
                found: rank_char,
                offset: rank_offset,
            })?;
            let suit = Suit::from_char(suit_char).ok_or(ParseError::InvalidCharacter {
                variant: Variant::Card,
                found: suit_char,
                offset: suit_offset,
            })?;
            Ok(Card { rank, suit })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    #[test]
    fn test_index_round_trip() {
        for index in 0..Card::DECK_SIZE {
            let card = Card::from_index(index).unwrap();
            assert_eq!(card.index(), index);
        }
        assert!(Card::from_index(52).is_none());
    }

    #[test]
    fn test_random_agrees_with_index_mapping() {
        let mut drawn = ChaCha20Rng::from_seed([8u8; 32]);
        let mut indices = ChaCha20Rng::from_seed([8u8; 32]);
        for _ in 0..200 {
            let card = Card::random(&mut drawn);
            let index = indices.gen_range(0..Card::DECK_SIZE);
            assert_eq!(Card::from_index(index), Some(card));
        }
    }

    #[test]
    fn test_index_layout() {
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).index(), 0);
        assert_eq!(Card::new(Rank::King, Suit::Clubs).index(), 12);
        assert_eq!(Card::new(Rank::Ace, Suit::Diamonds).index(), 13);
        assert_eq!(Card::new(Rank::King, Suit::Spades).index(), 51);
    }

    #[test]
    fn test_decode_pairs() {
        let cards = decode("ahtd2cks").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Hearts),
                Card::new(Rank::Ten, Suit::Diamonds),
                Card::new(Rank::Two, Suit::Clubs),
                Card::new(Rank::King, Suit::Spades),
            ]
        );
    }

    #[test]
    fn test_decode_rejects_unknown_pairs() {
        assert!(matches!(
            decode("xh"),
            Err(ParseError::InvalidCharacter { found: 'x', offset: 0, .. })
        ));
        assert!(matches!(
            decode("ax"),
            Err(ParseError::InvalidCharacter { found: 'x', offset: 1, .. })
        ));
        assert!(matches!(decode("ahk"), Err(ParseError::OddLength { len: 3, .. })));
        // Uppercase is not part of the alphabet.
        assert!(decode("AH").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
        assert_eq!(Card::new(Rank::Queen, Suit::Spades).to_string(), "Q♠");
    }

    #[test]
    fn test_random_stays_in_deck() {
        let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
        for _ in 0..500 {
            assert!(Card::random(&mut rng).index() < Card::DECK_SIZE);
        }
    }
}
