//! Strategy quiz session.
//!
//! A [`Quiz`] deals a player hand and a dealer upcard, grades the action the
//! player picks against basic strategy, and keeps a running score.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Rank, Suit};
use crate::chart::Action;
use crate::error::{OptionsError, QuizError};
use crate::hand::{self, DealerHand, Hand, HandCategory};
use crate::options::QuizOptions;
use crate::result::{RoundRecord, Score, Verdict};
use crate::strategy;
use crate::sync::Mutex;

/// A supply of cards for dealing quiz rounds.
pub trait CardSource {
    /// Draws the next card.
    fn draw(&mut self) -> Card;
}

/// Cards drawn uniformly at random, with replacement.
///
/// Every rank and suit is equally likely on every draw; there is no shoe.
#[derive(Debug, Clone)]
pub struct RandomCards {
    rng: ChaCha8Rng,
}

impl RandomCards {
    /// Creates a card source from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl CardSource for RandomCards {
    fn draw(&mut self) -> Card {
        let rank = Rank::ALL[self.rng.random_range(0..Rank::ALL.len())];
        let suit = Suit::ALL[self.rng.random_range(0..Suit::ALL.len())];
        Card::new(suit, rank)
    }
}

/// One dealt quiz round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    player: Hand,
    dealer: DealerHand,
    verdict: Option<Verdict>,
}

impl Round {
    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand. The hole card is revealed once the round is answered.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the grade, once the round has been answered.
    #[must_use]
    pub const fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    /// Returns whether the round has been answered.
    #[must_use]
    pub const fn is_answered(&self) -> bool {
        self.verdict.is_some()
    }
}

struct QuizState<S> {
    source: S,
    round: Option<Round>,
    score: Score,
    categories: HashMap<HandCategory, Score>,
    history: VecDeque<RoundRecord>,
}

/// A basic-strategy quiz.
///
/// The quiz owns its card source, the current round and the score. All
/// methods take `&self`; state lives behind a mutex.
///
/// ```
/// use bjchart::{Action, Quiz, QuizOptions};
///
/// let quiz = Quiz::new(QuizOptions::default(), 7).unwrap();
/// let round = quiz.deal();
/// assert_eq!(round.player().cards().len(), 2);
///
/// let verdict = quiz.answer(Action::Stand).unwrap();
/// assert_eq!(quiz.score().attempts, 1);
/// assert_eq!(quiz.score().correct, u32::from(verdict.is_correct()));
/// ```
pub struct Quiz<S = RandomCards> {
    /// Quiz options.
    pub options: QuizOptions,
    state: Mutex<QuizState<S>>,
}

impl Quiz<RandomCards> {
    /// Creates a quiz dealing random cards from the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn new(options: QuizOptions, seed: u64) -> Result<Self, OptionsError> {
        Self::with_source(options, RandomCards::new(seed))
    }
}

impl<S: CardSource> Quiz<S> {
    /// Creates a quiz dealing from the given card source.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn with_source(options: QuizOptions, source: S) -> Result<Self, OptionsError> {
        options.validate()?;

        Ok(Self {
            options,
            state: Mutex::new(QuizState {
                source,
                round: None,
                score: Score::default(),
                categories: HashMap::new(),
                history: VecDeque::new(),
            }),
        })
    }

    /// Deals a new round, replacing the current one.
    ///
    /// The player's two cards are redealt until their total is below the
    /// redeal threshold; then the dealer receives an upcard and a hole card.
    pub fn deal(&self) -> Round {
        let mut state = self.state.lock();

        let player = loop {
            let cards = [state.source.draw(), state.source.draw()];
            if hand::total(&cards) < self.options.redeal_threshold {
                break cards;
            }
            log::debug!("redealing player hand {} {}", cards[0], cards[1]);
        };
        let dealer = DealerHand::new(state.source.draw(), state.source.draw());

        let round = Round {
            player: Hand::from_cards(&player),
            dealer,
            verdict: None,
        };
        state.round = Some(round.clone());
        round
    }

    /// Returns the current round, if one has been dealt.
    pub fn current_round(&self) -> Option<Round> {
        self.state.lock().round.clone()
    }

    /// Grades the chosen action for the current round and updates the score.
    ///
    /// # Errors
    ///
    /// Returns an error if no round has been dealt or the round was already
    /// answered.
    pub fn answer(&self, choice: Action) -> Result<Verdict, QuizError> {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        let round = state.round.as_mut().ok_or(QuizError::NoRound)?;
        if round.is_answered() {
            return Err(QuizError::AlreadyAnswered);
        }

        let dealer_upcard = round.dealer.up_card();
        let verdict = grade(round.player.cards(), dealer_upcard, choice);
        round.verdict = Some(verdict);
        round.dealer.reveal_hole();

        let correct = verdict.is_correct();
        state.score.record(correct);
        state
            .categories
            .entry(verdict.kind.category())
            .or_default()
            .record(correct);

        let limit = self.options.history_limit;
        if limit > 0 {
            while state.history.len() >= limit {
                state.history.pop_front();
            }
            state.history.push_back(RoundRecord {
                player: round.player.cards().to_vec(),
                dealer_upcard,
                verdict,
            });
        }

        log::info!(
            "chose {choice}, basic strategy says {} ({}/{})",
            verdict.correct,
            state.score.correct,
            state.score.attempts,
        );

        Ok(verdict)
    }

    /// Returns the running score.
    pub fn score(&self) -> Score {
        self.state.lock().score
    }

    /// Returns the score for one hand category.
    pub fn category_score(&self, category: HandCategory) -> Score {
        self.state
            .lock()
            .categories
            .get(&category)
            .copied()
            .unwrap_or_default()
    }

    /// Returns the graded rounds kept in the history, oldest first.
    pub fn history(&self) -> Vec<RoundRecord> {
        self.state.lock().history.iter().cloned().collect()
    }

    /// Consumes the quiz and returns the final score.
    pub fn into_score(self) -> Score {
        self.state.into_inner().score
    }
}

/// Grades a chosen action without a quiz session.
///
/// ```
/// use bjchart::{Action, Card, Rank, Suit, quiz};
///
/// let player = [Card::new(Suit::Hearts, Rank::Six), Card::new(Suit::Clubs, Rank::Five)];
/// let ace = Card::new(Suit::Spades, Rank::Ace);
/// let verdict = quiz::grade(&player, ace, Action::Double);
/// assert!(!verdict.is_correct());
/// assert_eq!(verdict.correct, Action::Hit);
/// ```
#[must_use]
pub fn grade(player: &[Card], dealer_upcard: Card, choice: Action) -> Verdict {
    let decision = strategy::decide(player, dealer_upcard);
    Verdict {
        chosen: choice,
        correct: decision.action,
        rule: decision.rule,
        kind: hand::classify(player),
    }
}
