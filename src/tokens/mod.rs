//! Token alphabets for manually captured entropy.
//!
//! Each input method (hex bytes, die rolls, coin flips, playing cards)
//! is a [`Variant`]. A captured symbol is a [`Symbol`] of exactly one
//! variant, wrapped in a [`Token`] that carries a per-capture identifier.
//!
//! Every variant has a canonical text form. Encoding is total and
//! decoding rejects anything outside the alphabet, so
//! `from_text(to_text(s)) == s` holds for every valid sequence.

mod bit;
mod byte;
mod card;
mod die;

pub use bit::Coin;
pub use card::{Card, Rank, Suit};
pub use die::Die;

use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when decoding the text form of a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid {variant} character {found:?} at offset {offset}")]
    InvalidCharacter {
        variant: Variant,
        found: char,
        offset: usize,
    },
    #[error("{variant} text needs an even number of characters, got {len}")]
    OddLength { variant: Variant, len: usize },
}

/// The input alphabet used for a capture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Hex bytes, 256 symbols.
    Byte,
    /// Six-sided die rolls.
    Die,
    /// Coin flips.
    Bit,
    /// Playing cards from a 52-card deck.
    Card,
}

impl Variant {
    /// All variants, in keypad order.
    pub const ALL: [Variant; 4] = [Variant::Byte, Variant::Die, Variant::Bit, Variant::Card];

    /// Human-readable keypad name.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Byte => "Hex Bytes",
            Variant::Die => "Die Rolls",
            Variant::Bit => "Coin Flips",
            Variant::Card => "Playing Cards",
        }
    }

    /// Short identifier used in configuration files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Variant::Byte => "byte",
            Variant::Die => "die",
            Variant::Bit => "bit",
            Variant::Card => "card",
        }
    }

    /// Entropy contributed by one symbol, log2 of the alphabet size.
    pub fn bits_per_symbol(self) -> f64 {
        match self {
            Variant::Byte => byte::BITS_PER_SYMBOL,
            Variant::Die => die::BITS_PER_SYMBOL,
            Variant::Bit => bit::BITS_PER_SYMBOL,
            Variant::Card => card::BITS_PER_SYMBOL,
        }
    }

    /// Draws one symbol uniformly at random.
    pub fn random<R: RngCore + CryptoRng>(self, rng: &mut R) -> Token {
        let symbol = match self {
            Variant::Byte => Symbol::Byte(byte::random(rng)),
            Variant::Die => Symbol::Die(Die::random(rng)),
            Variant::Bit => Symbol::Bit(Coin::random(rng)),
            Variant::Card => Symbol::Card(Card::random(rng)),
        };
        Token::new(symbol)
    }

    /// Encodes a sequence as text.
    pub fn to_text(self, tokens: &[Token]) -> String {
        let mut out = String::with_capacity(tokens.len() * 2);
        for token in tokens {
            token.symbol.write_text(&mut out);
        }
        out
    }

    /// Decodes text into a fresh token sequence of this variant.
    pub fn from_text(self, text: &str) -> Result<Vec<Token>, ParseError> {
        let symbols: Vec<Symbol> = match self {
            Variant::Byte => byte::decode(text)?.into_iter().map(Symbol::Byte).collect(),
            Variant::Die => die::decode(text)?.into_iter().map(Symbol::Die).collect(),
            Variant::Bit => bit::decode(text)?.into_iter().map(Symbol::Bit).collect(),
            Variant::Card => card::decode(text)?.into_iter().map(Symbol::Card).collect(),
        };
        Ok(symbols.into_iter().map(Token::new).collect())
    }

    /// Number of symbols needed to reach `bits` of entropy.
    pub fn symbols_for_bits(self, bits: f64) -> usize {
        if bits <= 0.0 {
            return 0;
        }
        (bits / self.bits_per_symbol()).ceil() as usize
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a variant name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant {0:?} (expected byte, die, bit or card)")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "byte" | "bytes" | "hex" => Ok(Variant::Byte),
            "die" | "dice" => Ok(Variant::Die),
            "bit" | "bits" | "coin" | "coins" => Ok(Variant::Bit),
            "card" | "cards" => Ok(Variant::Card),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// The semantic value of one captured symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Byte(u8),
    Die(Die),
    /// `true` is heads.
    Bit(bool),
    Card(Card),
}

impl Symbol {
    /// The alphabet this symbol belongs to.
    pub fn variant(&self) -> Variant {
        match self {
            Symbol::Byte(_) => Variant::Byte,
            Symbol::Die(_) => Variant::Die,
            Symbol::Bit(_) => Variant::Bit,
            Symbol::Card(_) => Variant::Card,
        }
    }

    fn write_text(&self, out: &mut String) {
        match *self {
            Symbol::Byte(value) => byte::encode(value, out),
            Symbol::Die(die) => out.push(die.as_char()),
            Symbol::Bit(value) => out.push(Coin::as_char(value)),
            Symbol::Card(card) => card.encode(out),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Byte(value) => write!(f, "{:02X}", value),
            Symbol::Die(die) => write!(f, "{}", die),
            Symbol::Bit(value) => f.write_str(Coin::symbol(*value)),
            Symbol::Card(card) => write!(f, "{}", card),
        }
    }
}

/// One captured unit of entropy.
///
/// The identifier exists only so display layers can track tokens;
/// equality and hashing look at the symbol alone.
#[derive(Debug, Clone, Copy)]
pub struct Token {
    id: Uuid,
    symbol: Symbol,
}

impl Token {
    /// Wraps a symbol with a fresh identifier.
    pub fn new(symbol: Symbol) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol,
        }
    }

    pub fn byte(value: u8) -> Self {
        Self::new(Symbol::Byte(value))
    }

    pub fn die(die: Die) -> Self {
        Self::new(Symbol::Die(die))
    }

    pub fn bit(heads: bool) -> Self {
        Self::new(Symbol::Bit(heads))
    }

    pub fn card(card: Card) -> Self {
        Self::new(Symbol::Card(card))
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.symbol.variant()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbol.fmt(f)
    }
}
