//! Single card and pair comparisons.

use crate::card::Card;
use crate::error::PairError;

/// Returns whether `base` beats `other` as a single card.
///
/// Identical cards are never bigger than each other.
///
/// # Example
///
/// ```
/// use bigtwo::{Card, Suit, Value, is_single_bigger};
///
/// let two = Card::new(Suit::Club, Value::Two);
/// let ace = Card::new(Suit::Heart, Value::Ace);
/// assert!(is_single_bigger(two, ace));
/// assert!(!is_single_bigger(ace, two));
/// ```
#[must_use]
pub const fn is_single_bigger(base: Card, other: Card) -> bool {
    base.compare(other) > 0
}

/// Returns whether `cards` form a valid pair: exactly two cards of one value.
#[must_use]
pub fn is_pair_valid(cards: &[Card]) -> bool {
    matches!(cards, [a, b] if a.value == b.value)
}

/// Two cards sharing one face value.
///
/// A `Pair` can only be built through validation, so every pair reaching
/// [`is_pair_bigger`] is well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    cards: [Card; 2],
}

impl Pair {
    /// Creates a pair from two cards.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::ValueMismatch`] if the cards have different values.
    pub fn new(first: Card, second: Card) -> Result<Self, PairError> {
        if first.value != second.value {
            return Err(PairError::ValueMismatch);
        }
        Ok(Self {
            cards: [first, second],
        })
    }

    /// Returns the two cards in the order they were given.
    #[must_use]
    pub const fn cards(&self) -> [Card; 2] {
        self.cards
    }

    /// Returns the stronger of the two cards.
    ///
    /// Both cards share a value, so this is decided by suit.
    #[must_use]
    pub fn high_card(&self) -> Card {
        let [first, second] = self.cards;
        first.max(second)
    }

    /// Returns whether this pair beats `other`.
    #[must_use]
    pub fn is_bigger(&self, other: &Self) -> bool {
        is_single_bigger(self.high_card(), other.high_card())
    }
}

impl TryFrom<&[Card]> for Pair {
    type Error = PairError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match *cards {
            [first, second] => Self::new(first, second),
            _ => Err(PairError::WrongSize {
                actual: cards.len(),
            }),
        }
    }
}

/// Returns whether `base` beats `other` by comparing their strongest cards.
///
/// # Example
///
/// ```
/// use bigtwo::{Card, Pair, Suit, Value, is_pair_bigger};
///
/// let eights_high = Pair::new(
///     Card::new(Suit::Heart, Value::Eight),
///     Card::new(Suit::Spade, Value::Eight),
/// )?;
/// let eights_low = Pair::new(
///     Card::new(Suit::Diamond, Value::Eight),
///     Card::new(Suit::Club, Value::Eight),
/// )?;
/// assert!(is_pair_bigger(&eights_high, &eights_low));
/// # Ok::<(), bigtwo::PairError>(())
/// ```
#[must_use]
pub fn is_pair_bigger(base: &Pair, other: &Pair) -> bool {
    base.is_bigger(other)
}
