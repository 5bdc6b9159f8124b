//! Combination comparison.

use core::cmp::Ordering;

use crate::card::Card;
use crate::combo::{ComboType, Combination};
use crate::error::CompareError;
use crate::rules::Rules;

/// Checks that the cards of `combo` form the type it is tagged with.
fn check_tag(combo: &Combination) -> Result<(), CompareError> {
    if ComboType::detect(combo.cards()) == Some(combo.combo_type()) {
        Ok(())
    } else {
        Err(CompareError::TagMismatch {
            combo_type: combo.combo_type(),
        })
    }
}

/// Returns the card that decides between two combinations of one type.
///
/// Flushes and straights are decided by their strongest card; full houses by
/// the top card of the triple; four of a kind by the top card of the quad.
fn deciding_card(combo: &Combination) -> Result<Card, CompareError> {
    let mismatch = CompareError::TagMismatch {
        combo_type: combo.combo_type(),
    };
    match combo.combo_type() {
        ComboType::Flush | ComboType::Straight | ComboType::StraightFlush => {
            Ok(combo.high_card())
        }
        ComboType::FullHouse => combo.group_high_card(3).ok_or(mismatch),
        ComboType::FourOfAKind => combo.group_high_card(4).ok_or(mismatch),
    }
}

impl Rules {
    /// Orders two combinations from weakest to strongest.
    ///
    /// Different types are ordered by [`Rules::combo_order`]; matching types
    /// by their deciding card.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::TagMismatch`] if either combination's cards do
    /// not form the type it is tagged with.
    pub fn cmp_combos(
        &self,
        base: &Combination,
        other: &Combination,
    ) -> Result<Ordering, CompareError> {
        check_tag(base)?;
        check_tag(other)?;

        if base.combo_type() != other.combo_type() {
            let order = &self.combo_order;
            return Ok(order
                .strength(base.combo_type())
                .cmp(&order.strength(other.combo_type())));
        }

        let base_card = deciding_card(base)?;
        let other_card = deciding_card(other)?;
        Ok(base_card.cmp(&other_card))
    }

    /// Returns whether `base` beats `other`.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::TagMismatch`] if either combination's cards do
    /// not form the type it is tagged with.
    ///
    /// # Example
    ///
    /// ```
    /// use bigtwo::{Card, ComboOrder, Rules, Suit, Value, classify};
    ///
    /// let flush = classify(&[
    ///     Card::new(Suit::Spade, Value::Jack),
    ///     Card::new(Suit::Spade, Value::King),
    ///     Card::new(Suit::Spade, Value::Three),
    ///     Card::new(Suit::Spade, Value::Four),
    ///     Card::new(Suit::Spade, Value::Eight),
    /// ])?
    /// .expect("a flush");
    /// let straight = classify(&[
    ///     Card::new(Suit::Heart, Value::Three),
    ///     Card::new(Suit::Club, Value::Four),
    ///     Card::new(Suit::Diamond, Value::Five),
    ///     Card::new(Suit::Spade, Value::Six),
    ///     Card::new(Suit::Spade, Value::Seven),
    /// ])?
    /// .expect("a straight");
    ///
    /// let legacy = Rules::default();
    /// assert!(legacy.is_combo_bigger(&straight, &flush)?);
    ///
    /// let standard = Rules::default().with_combo_order(ComboOrder::STANDARD);
    /// assert!(standard.is_combo_bigger(&flush, &straight)?);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_combo_bigger(
        &self,
        base: &Combination,
        other: &Combination,
    ) -> Result<bool, CompareError> {
        Ok(self.cmp_combos(base, other)? == Ordering::Greater)
    }
}

/// Returns whether `base` beats `other` under the default [`Rules`].
///
/// # Errors
///
/// Returns [`CompareError::TagMismatch`] if either combination's cards do not
/// form the type it is tagged with.
pub fn is_combo_bigger(base: &Combination, other: &Combination) -> Result<bool, CompareError> {
    Rules::default().is_combo_bigger(base, other)
}
