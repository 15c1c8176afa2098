//! A blackjack basic-strategy decision engine with optional `no_std` support.
//!
//! The crate answers one question: given the player's cards and the dealer's
//! upcard, which action does basic strategy recommend? The chart is the
//! 6-8 deck, dealer-stands-on-soft-17, double-after-split chart. A small
//! [`Quiz`] type deals hands and grades a chosen action against it.
//!
//! # Example
//!
//! ```
//! use bjchart::{Action, Card, Rank, Suit, best_action};
//!
//! let player = [Card::new(Suit::Hearts, Rank::Eight), Card::new(Suit::Clubs, Rank::Eight)];
//! let dealer = Card::new(Suit::Spades, Rank::Six);
//! assert_eq!(best_action(&player, dealer), Action::Split);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod chart;
pub mod error;
pub mod hand;
pub mod options;
pub mod quiz;
pub mod result;
pub mod strategy;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use chart::{Action, DealerBucket};
pub use error::{OptionsError, ParseActionError, ParseCardError, QuizError};
pub use hand::{DealerHand, Hand, HandCategory, HandKind};
pub use options::QuizOptions;
pub use quiz::{CardSource, Quiz, RandomCards, Round};
pub use result::{RoundRecord, Score, Verdict};
pub use strategy::{Decision, Rule, best_action};
