//! Card types, ranking, and deck utilities.
//!
//! Big Two ranks every card of the deck on a single total order. Values are
//! compared first (`3` is the weakest, `2` the strongest), and suits break
//! ties between cards of the same value (`Diamond < Club < Heart < Spade`).

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

/// Card suit, declared weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Diamonds, the weakest suit.
    Diamond = 0,
    /// Clubs.
    Club = 1,
    /// Hearts.
    Heart = 2,
    /// Spades, the strongest suit.
    Spade = 3,
}

impl Suit {
    /// All suits, weakest first.
    pub const ALL: [Self; 4] = [Self::Diamond, Self::Club, Self::Heart, Self::Spade];

    /// Returns the 0-based tie-break index of the suit.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Diamond => "D",
            Self::Club => "C",
            Self::Heart => "H",
            Self::Spade => "S",
        };
        f.write_str(symbol)
    }
}

/// Face value of a card, declared weakest to strongest.
///
/// Ace and two sit above king: `2` is the strongest value in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Value {
    /// Three, the weakest value.
    Three = 0,
    /// Four.
    Four = 1,
    /// Five.
    Five = 2,
    /// Six.
    Six = 3,
    /// Seven.
    Seven = 4,
    /// Eight.
    Eight = 5,
    /// Nine.
    Nine = 6,
    /// Ten.
    Ten = 7,
    /// Jack.
    Jack = 8,
    /// Queen.
    Queen = 9,
    /// King.
    King = 10,
    /// Ace.
    Ace = 11,
    /// Two, the strongest value.
    Two = 12,
}

impl Value {
    /// All values, weakest first.
    pub const ALL: [Self; 13] = [
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
        Self::Ace,
        Self::Two,
    ];

    /// Returns the 0-based strength index of the value.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
            Self::Two => "2",
        };
        f.write_str(text)
    }
}

/// A playing card.
///
/// Cards are ordered by [`Card::rank`], so sorting a slice of cards puts the
/// weakest card first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The face value of the card.
    pub value: Value,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, value: Value) -> Self {
        Self { suit, value }
    }

    /// Returns the position of the card in the total strength order.
    ///
    /// The result is in `1..=52`: the three of diamonds is 1 and the two of
    /// spades is 52.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::{Card, Suit, Value};
    ///
    /// assert_eq!(Card::new(Suit::Diamond, Value::Three).rank(), 1);
    /// assert_eq!(Card::new(Suit::Club, Value::Four).rank(), 6);
    /// assert_eq!(Card::new(Suit::Spade, Value::Two).rank(), 52);
    /// ```
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.value.index() * 4 + self.suit.index() + 1
    }

    /// Returns the difference in rank between `self` and `other`.
    ///
    /// Positive when `self` is stronger, negative when weaker, and zero only
    /// for identical cards.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "ranks are at most 52")]
    pub const fn compare(self, other: Self) -> i8 {
        self.rank() as i8 - other.rank() as i8
    }

    /// Returns the strength of the face value alone, in `1..=13`.
    ///
    /// Suits are ignored. This is what straights are built from.
    #[must_use]
    pub const fn sequence_value(self) -> u8 {
        self.value.index() + 1
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Builds the 52 distinct cards of a standard deck, unshuffled.
///
/// Cards are grouped by suit (weakest suit first) and each group runs from
/// three up to two.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for value in Value::ALL {
            cards.push(Card::new(suit, value));
        }
    }
    cards
}

/// Returns a copy of `cards` sorted from weakest to strongest.
///
/// The sort is stable, so duplicate cards keep their input order.
///
/// # Example
///
/// ```
/// use bigtwo::{Card, Suit, Value, sort_ascending};
///
/// let sorted = sort_ascending(&[
///     Card::new(Suit::Diamond, Value::Two),
///     Card::new(Suit::Spade, Value::King),
/// ]);
/// assert_eq!(sorted[1], Card::new(Suit::Diamond, Value::Two));
/// ```
#[must_use]
pub fn sort_ascending(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|card| card.rank());
    sorted
}
