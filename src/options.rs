//! Quiz configuration options.

use crate::error::OptionsError;

/// Configuration options for a strategy quiz.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjchart::QuizOptions;
///
/// let options = QuizOptions::default()
///     .with_redeal_threshold(20)
///     .with_history_limit(10);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOptions {
    /// Player hands totalling this much or more are redealt.
    pub redeal_threshold: u8,
    /// Number of graded rounds kept in the history. 0 keeps none.
    pub history_limit: usize,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            redeal_threshold: 21,
            history_limit: 50,
        }
    }
}

impl QuizOptions {
    /// Lowest redeal threshold that still lets a hand be dealt (a pair of twos).
    pub const MIN_REDEAL_THRESHOLD: u8 = 5;

    /// Sets the redeal threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjchart::QuizOptions;
    ///
    /// let options = QuizOptions::default().with_redeal_threshold(18);
    /// assert_eq!(options.redeal_threshold, 18);
    /// ```
    #[must_use]
    pub const fn with_redeal_threshold(mut self, threshold: u8) -> Self {
        self.redeal_threshold = threshold;
        self
    }

    /// Sets how many graded rounds the history keeps.
    ///
    /// # Example
    ///
    /// ```
    /// use bjchart::QuizOptions;
    ///
    /// let options = QuizOptions::default().with_history_limit(0);
    /// assert_eq!(options.history_limit, 0);
    /// ```
    #[must_use]
    pub const fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Checks that the options can run a quiz.
    ///
    /// # Errors
    ///
    /// Returns an error if the redeal threshold would reject every hand.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.redeal_threshold < Self::MIN_REDEAL_THRESHOLD {
            return Err(OptionsError::RedealThresholdTooLow);
        }
        Ok(())
    }
}
