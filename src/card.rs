//! Card types and deck constants.

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Card rank, from Ace (1) to King (13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank for a numeric value in `1..=13`.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1..=13 => Some(Self::ALL[value as usize - 1]),
            _ => None,
        }
    }

    /// Numeric value of the rank (Ace = 1, King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Human-readable name, e.g. `"Queen"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Single-character code: `A`, `2`..`9`, `T`, `J`, `Q`, `K`.
    #[must_use]
    pub const fn short(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card suit.
///
/// Suits order as Spades < Hearts < Diamonds < Clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spades = 1,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in ascending order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit for a numeric value in `1..=4`.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1..=4 => Some(Self::ALL[value as usize - 1]),
            _ => None,
        }
    }

    /// Numeric value of the suit (Spades = 1, Clubs = 4).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Human-readable name, e.g. `"Hearts"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }

    /// Single-character code: `S`, `H`, `D` or `C`.
    #[must_use]
    pub const fn short(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// The derived ordering puts jokers before every standard card, and orders
/// standard cards by suit first, then by rank.
///
/// `Display` renders the long form (`"Ace of Spades"`); the alternate flag
/// (`{:#}`) renders the two-character short form (`"AS"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Card {
    /// A joker, which has neither rank nor suit.
    Joker,
    /// A standard card.
    Standard {
        /// The suit of the card.
        suit: Suit,
        /// The rank of the card.
        rank: Rank,
    },
}

impl Card {
    /// Creates a new standard card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self::Standard { suit, rank }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self::Joker
    }

    /// Returns the rank, or `None` for a joker.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        match self {
            Self::Standard { rank, .. } => Some(*rank),
            Self::Joker => None,
        }
    }

    /// Returns the suit, or `None` for a joker.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        match self {
            Self::Standard { suit, .. } => Some(*suit),
            Self::Joker => None,
        }
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self, Self::Joker)
    }

    /// Two-character code, e.g. `"TH"` for the Ten of Hearts or `"JO"` for a joker.
    #[must_use]
    pub fn short(&self) -> String {
        alloc::format!("{self:#}")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, f.alternate()) {
            (Self::Joker, false) => f.write_str("Joker"),
            (Self::Joker, true) => f.write_str("JO"),
            (Self::Standard { suit, rank }, false) => write!(f, "{rank} of {suit}"),
            (Self::Standard { suit, rank }, true) => {
                write!(f, "{}{}", rank.short(), suit.short())
            }
        }
    }
}

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;
