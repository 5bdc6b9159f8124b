//! Rule configuration.

use crate::combo::ComboType;
use crate::error::RulesError;

/// Ranking of the combination types, used when two combinations of
/// different types meet.
///
/// House rules disagree on whether a flush beats a straight, so the order is
/// a swappable table rather than part of the comparison logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComboOrder {
    /// Combination types, weakest first.
    order: [ComboType; 5],
    /// Position of each type in `order`, indexed by [`ComboType::index`].
    strengths: [u8; 5],
}

impl ComboOrder {
    /// `Flush < Straight < FullHouse < FourOfAKind < StraightFlush`.
    pub const LEGACY: Self = Self::ranked([
        ComboType::Flush,
        ComboType::Straight,
        ComboType::FullHouse,
        ComboType::FourOfAKind,
        ComboType::StraightFlush,
    ]);

    /// `Straight < Flush < FullHouse < FourOfAKind < StraightFlush`.
    pub const STANDARD: Self = Self::ranked([
        ComboType::Straight,
        ComboType::Flush,
        ComboType::FullHouse,
        ComboType::FourOfAKind,
        ComboType::StraightFlush,
    ]);

    /// Builds the strength lookup for an order that lists each type once.
    const fn ranked(order: [ComboType; 5]) -> Self {
        let mut strengths = [0; 5];
        let mut position = 0;
        while position < order.len() {
            strengths[order[position].index()] = position as u8;
            position += 1;
        }
        Self { order, strengths }
    }

    /// Creates an order from combination types listed weakest first.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::NotAPermutation`] unless every combination type
    /// appears exactly once.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::{ComboOrder, ComboType};
    ///
    /// let order = ComboOrder::new([
    ///     ComboType::Straight,
    ///     ComboType::Flush,
    ///     ComboType::FullHouse,
    ///     ComboType::FourOfAKind,
    ///     ComboType::StraightFlush,
    /// ])?;
    /// assert_eq!(order, ComboOrder::STANDARD);
    /// # Ok::<(), bigtwo::RulesError>(())
    /// ```
    pub fn new(order: [ComboType; 5]) -> Result<Self, RulesError> {
        if ComboType::ALL.iter().all(|combo_type| order.contains(combo_type)) {
            Ok(Self::ranked(order))
        } else {
            Err(RulesError::NotAPermutation)
        }
    }

    /// Returns the combination types, weakest first.
    #[must_use]
    pub const fn types(&self) -> [ComboType; 5] {
        self.order
    }

    /// Returns the 0-based strength of `combo_type` in this order.
    #[must_use]
    pub const fn strength(&self, combo_type: ComboType) -> u8 {
        self.strengths[combo_type.index()]
    }
}

impl Default for ComboOrder {
    fn default() -> Self {
        Self::LEGACY
    }
}

/// Rules applied when comparing plays.
///
/// ```
/// use bigtwo::{ComboOrder, Rules};
///
/// let rules = Rules::default().with_combo_order(ComboOrder::STANDARD);
/// assert_eq!(rules.combo_order, ComboOrder::STANDARD);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rules {
    /// Ranking used between combinations of different types.
    pub combo_order: ComboOrder,
}

impl Rules {
    /// Sets the combination type order.
    #[must_use]
    pub const fn with_combo_order(mut self, combo_order: ComboOrder) -> Self {
        self.combo_order = combo_order;
        self
    }
}
