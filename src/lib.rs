//! Playing cards and ordered groups of cards, with optional `no_std` support.
//!
//! The crate provides a [`Group`] type for decks, hands and piles: an ordered
//! sequence of cards where each card is face-up or face-down. Groups support
//! negative indexing, drawing and inserting blocks of cards, flipping ranges
//! over, sorting, and shuffling through the [`Arrange`] utilities.
//!
//! # Example
//!
//! ```
//! use cardpile::{Group, shuffle_seeded};
//!
//! let mut deck = Group::standard_deck();
//! shuffle_seeded(&mut deck, 42);
//!
//! let mut hand = deck.draw(5);
//! hand.flip_all();
//! assert_eq!(deck.len(), 47);
//! assert!(hand.face_up_flags().iter().all(|&up| up));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod arrange;
pub mod card;
pub mod error;
pub mod group;
pub mod options;

// Re-export main types
#[cfg(feature = "std")]
pub use arrange::perfect_shuffle;
pub use arrange::{Arrange, reverse, shuffle_seeded, shuffle_with};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::RangeError;
pub use group::Group;
pub use options::DeckOptions;
