//! Five-card combinations and their classification.

use alloc::vec::Vec;
use core::fmt;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Value, sort_ascending};
use crate::error::ClassifyError;

/// Number of cards in a combination.
pub const COMBO_SIZE: usize = 5;

/// The five cards of a combination, in no particular order.
pub type ComboCards = [Card; COMBO_SIZE];

/// The recognized five-card combination types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComboType {
    /// Five cards of one suit.
    Flush,
    /// Five consecutive values.
    Straight,
    /// Three cards of one value and two of another.
    FullHouse,
    /// Four cards of one value and one other card.
    FourOfAKind,
    /// Five consecutive values of one suit.
    StraightFlush,
}

impl ComboType {
    /// Every combination type, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Flush,
        Self::Straight,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
    ];

    /// Returns the position of the type in [`ComboType::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Determines the type formed by five cards.
    ///
    /// When several types match, the rarest one wins: straight flush, then
    /// four of a kind, full house, flush, and finally straight.
    #[must_use]
    pub fn detect(cards: &ComboCards) -> Option<Self> {
        let flush = is_flush(cards);
        let straight = is_straight(cards);

        if flush && straight {
            Some(Self::StraightFlush)
        } else if is_four_of_a_kind(cards) {
            Some(Self::FourOfAKind)
        } else if is_full_house(cards) {
            Some(Self::FullHouse)
        } else if flush {
            Some(Self::Flush)
        } else if straight {
            Some(Self::Straight)
        } else {
            None
        }
    }
}

impl fmt::Display for ComboType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Flush => "flush",
            Self::Straight => "straight",
            Self::FullHouse => "full house",
            Self::FourOfAKind => "four of a kind",
            Self::StraightFlush => "straight flush",
        };
        f.write_str(name)
    }
}

/// How many cards of each face value appear in a set of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCounts {
    counts: HashMap<Value, u8>,
}

impl ValueCounts {
    /// Counts the face values of `cards`.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let counts = cards.iter().fold(HashMap::new(), |mut counts, card| {
            *counts.entry(card.value).or_insert(0) += 1;
            counts
        });
        Self { counts }
    }

    /// Returns the number of distinct values.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Returns how many cards carry `value`.
    #[must_use]
    pub fn count(&self, value: Value) -> u8 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Returns the multiplicities of the values present, smallest first.
    #[must_use]
    pub fn sorted_counts(&self) -> Vec<u8> {
        let mut counts: Vec<u8> = self.counts.values().copied().collect();
        counts.sort_unstable();
        counts
    }

    /// Returns the value that appears exactly `count` times.
    ///
    /// If several values qualify, the strongest one is returned.
    #[must_use]
    pub fn value_with_count(&self, count: u8) -> Option<Value> {
        self.counts
            .iter()
            .filter(|&(_, &n)| n == count)
            .map(|(&value, _)| value)
            .max()
    }
}

/// Returns whether all five cards share one suit.
#[must_use]
pub fn is_flush(cards: &ComboCards) -> bool {
    let suit = cards[0].suit;
    cards.iter().all(|card| card.suit == suit)
}

/// Returns whether the five values are consecutive.
///
/// Sequences do not wrap: two is the highest value, so nothing follows it.
#[must_use]
pub fn is_straight(cards: &ComboCards) -> bool {
    let mut sequence = cards.map(Card::sequence_value);
    sequence.sort_unstable();
    sequence.windows(2).all(|step| step[1] == step[0] + 1)
}

/// Returns whether the cards hold three of one value and two of another.
#[must_use]
pub fn is_full_house(cards: &ComboCards) -> bool {
    ValueCounts::from_cards(cards).sorted_counts() == [2, 3]
}

/// Returns whether the cards hold four of one value and one other card.
#[must_use]
pub fn is_four_of_a_kind(cards: &ComboCards) -> bool {
    ValueCounts::from_cards(cards).sorted_counts() == [1, 4]
}

/// Returns whether the cards are both a flush and a straight.
#[must_use]
pub fn is_straight_flush(cards: &ComboCards) -> bool {
    is_flush(cards) && is_straight(cards)
}

/// A classified five-card combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination {
    combo_type: ComboType,
    cards: ComboCards,
}

impl Combination {
    /// Tags `cards` with `combo_type` without checking that they match.
    pub(crate) const fn new_unchecked(combo_type: ComboType, cards: ComboCards) -> Self {
        Self { combo_type, cards }
    }

    /// Returns the combination type.
    #[must_use]
    pub const fn combo_type(&self) -> ComboType {
        self.combo_type
    }

    /// Returns the five cards in the order they were classified.
    #[must_use]
    pub const fn cards(&self) -> &ComboCards {
        &self.cards
    }

    /// Returns the strongest card of the combination.
    #[must_use]
    pub fn high_card(&self) -> Card {
        sort_ascending(&self.cards)[COMBO_SIZE - 1]
    }

    /// Returns the strongest card among the value appearing `count` times.
    ///
    /// For a full house, `count` 3 gives the top card of the triple; for four
    /// of a kind, `count` 4 gives the top card of the quad.
    #[must_use]
    pub fn group_high_card(&self, count: u8) -> Option<Card> {
        let value = ValueCounts::from_cards(&self.cards).value_with_count(count)?;
        sort_ascending(&self.cards)
            .into_iter()
            .rev()
            .find(|card| card.value == value)
    }
}

/// Classifies five cards as a combination.
///
/// Returns `Ok(None)` when the cards form no recognized combination.
///
/// # Errors
///
/// Returns [`ClassifyError::WrongSize`] if `cards` does not hold exactly five
/// cards.
///
/// # Example
///
/// ```
/// use bigtwo::{Card, ComboType, Suit, Value, classify};
///
/// let cards = [
///     Card::new(Suit::Heart, Value::Three),
///     Card::new(Suit::Club, Value::Four),
///     Card::new(Suit::Diamond, Value::Five),
///     Card::new(Suit::Spade, Value::Six),
///     Card::new(Suit::Spade, Value::Seven),
/// ];
/// let combo = classify(&cards)?.expect("a straight");
/// assert_eq!(combo.combo_type(), ComboType::Straight);
/// # Ok::<(), bigtwo::ClassifyError>(())
/// ```
pub fn classify(cards: &[Card]) -> Result<Option<Combination>, ClassifyError> {
    let combo_cards: ComboCards = cards.try_into().map_err(|_| ClassifyError::WrongSize {
        expected: COMBO_SIZE,
        actual: cards.len(),
    })?;

    Ok(ComboType::detect(&combo_cards)
        .map(|combo_type| Combination::new_unchecked(combo_type, combo_cards)))
}
