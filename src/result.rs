//! Grading result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::chart::Action;
use crate::hand::HandKind;
use crate::strategy::Rule;

/// The grade of one chosen action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// The action the player chose.
    pub chosen: Action,
    /// The basic-strategy action.
    pub correct: Action,
    /// The rule that produced the basic-strategy action.
    pub rule: Rule,
    /// Classification of the graded hand.
    pub kind: HandKind,
}

impl Verdict {
    /// Returns whether the chosen action matches basic strategy.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.chosen == self.correct
    }
}

/// A running tally of graded answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    /// Number of correct answers.
    pub correct: u32,
    /// Number of graded answers.
    pub attempts: u32,
}

impl Score {
    /// Records one graded answer.
    pub const fn record(&mut self, correct: bool) {
        self.attempts = self.attempts.saturating_add(1);
        if correct {
            self.correct = self.correct.saturating_add(1);
        }
    }

    /// Returns the fraction of correct answers, or `None` before the first answer.
    #[must_use]
    pub fn accuracy(&self) -> Option<f64> {
        (self.attempts > 0).then(|| f64::from(self.correct) / f64::from(self.attempts))
    }
}

/// A graded round kept in the quiz history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    /// The player's cards.
    pub player: Vec<Card>,
    /// The dealer upcard.
    pub dealer_upcard: Card,
    /// The grade.
    pub verdict: Verdict,
}
