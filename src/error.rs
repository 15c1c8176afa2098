//! Error types for parsing and quiz operations.
//!
//! The decision engine itself never fails; these errors come only from text
//! parsing and the quiz session.

use thiserror::Error;

/// Errors that can occur when parsing a card or rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input is empty.
    #[error("empty card")]
    Empty,
    /// The rank is not one of 2-10, J, Q, K, A.
    #[error("invalid rank")]
    InvalidRank,
    /// The suit is not one of h, d, c, s (or their symbols).
    #[error("invalid suit")]
    InvalidSuit,
}

/// Errors that can occur when parsing an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseActionError {
    /// The input does not name an action.
    #[error("unknown action (expected hit, stand, double or split)")]
    Unknown,
}

/// Errors that can occur when validating quiz options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// No two-card hand totals below the redeal threshold.
    #[error("redeal threshold must be at least 5")]
    RedealThresholdTooLow,
}

/// Errors that can occur while answering a quiz round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    /// No round has been dealt.
    #[error("no round has been dealt")]
    NoRound,
    /// The current round was already answered.
    #[error("round already answered")]
    AlreadyAnswered,
}
