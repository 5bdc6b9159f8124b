//! A Big Two card ranking and combination engine with optional `no_std`
//! support.
//!
//! The crate ranks single cards, validates and compares pairs, classifies
//! five-card combinations, and orders combinations against each other. Every
//! operation is a pure function over small card sets, so the surrounding
//! game loop can call it freely from any thread.
//!
//! # Example
//!
//! ```
//! use bigtwo::{Card, ComboType, Suit, Value, classify, is_combo_bigger};
//!
//! let full_house = classify(&[
//!     Card::new(Suit::Heart, Value::Jack),
//!     Card::new(Suit::Spade, Value::Jack),
//!     Card::new(Suit::Diamond, Value::Jack),
//!     Card::new(Suit::Diamond, Value::Eight),
//!     Card::new(Suit::Spade, Value::Eight),
//! ])?
//! .expect("a full house");
//! assert_eq!(full_house.combo_type(), ComboType::FullHouse);
//!
//! let quads = classify(&[
//!     Card::new(Suit::Heart, Value::Four),
//!     Card::new(Suit::Spade, Value::Four),
//!     Card::new(Suit::Diamond, Value::Four),
//!     Card::new(Suit::Club, Value::Four),
//!     Card::new(Suit::Spade, Value::Eight),
//! ])?
//! .expect("four of a kind");
//! assert!(is_combo_bigger(&quads, &full_house)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod combo;
pub mod compare;
pub mod error;
pub mod pair;
pub mod rules;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit, Value, sort_ascending, standard_deck};
pub use combo::{
    COMBO_SIZE, ComboCards, ComboType, Combination, ValueCounts, classify, is_flush,
    is_four_of_a_kind, is_full_house, is_straight, is_straight_flush,
};
pub use compare::is_combo_bigger;
pub use error::{ClassifyError, CompareError, PairError, RulesError};
pub use pair::{Pair, is_pair_bigger, is_pair_valid, is_single_bigger};
pub use rules::{ComboOrder, Rules};
