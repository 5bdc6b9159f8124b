//! Error types for classification and comparison.

use thiserror::Error;

use crate::combo::ComboType;

/// Errors that can occur when classifying cards as a combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The input does not hold exactly five cards.
    #[error("expected {expected} cards, got {actual}")]
    WrongSize {
        /// Number of cards a combination needs.
        expected: usize,
        /// Number of cards supplied.
        actual: usize,
    },
}

/// Errors that can occur when building a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PairError {
    /// The input does not hold exactly two cards.
    #[error("a pair needs 2 cards, got {actual}")]
    WrongSize {
        /// Number of cards supplied.
        actual: usize,
    },
    /// The two cards have different face values.
    #[error("pair cards have different values")]
    ValueMismatch,
}

/// Errors that can occur when comparing two combinations.
///
/// These indicate a combination whose tag does not match its cards, which is
/// a bug in the caller rather than a game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompareError {
    /// The cards of a combination do not form the type it is tagged with.
    #[error("cards do not form the {combo_type} the combination is tagged with")]
    TagMismatch {
        /// The type the combination claims to be.
        combo_type: ComboType,
    },
}

/// Errors that can occur when configuring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    /// A combination order must list every combination type exactly once.
    #[error("combination order must list each type exactly once")]
    NotAPermutation,
}
