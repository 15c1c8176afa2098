//! Quiz session integration tests.

#![allow(clippy::float_cmp)]

use std::collections::VecDeque;

use bjchart::quiz::grade;
use bjchart::{
    Action, Card, CardSource, HandCategory, HandKind, OptionsError, Quiz, QuizError, QuizOptions,
    Rank, Rule, Score, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Deals a fixed sequence of cards, in order.
struct Scripted(VecDeque<Card>);

impl CardSource for Scripted {
    fn draw(&mut self) -> Card {
        self.0.pop_front().expect("scripted cards exhausted")
    }
}

fn scripted_quiz(options: QuizOptions, draws: &[Card]) -> Quiz<Scripted> {
    Quiz::with_source(options, Scripted(draws.iter().copied().collect())).unwrap()
}

#[test]
fn deal_order_and_grading() {
    env_logger::builder().is_test(true).try_init().ok();

    let quiz = scripted_quiz(
        QuizOptions::default(),
        &[
            card(Suit::Hearts, Rank::Eight), // player
            card(Suit::Clubs, Rank::Eight),  // player
            card(Suit::Spades, Rank::Six),   // dealer up
            card(Suit::Diamonds, Rank::King), // dealer hole
        ],
    );

    let round = quiz.deal();
    assert_eq!(round.player().value(), 16);
    assert!(round.player().is_pair());
    assert_eq!(round.dealer().up_card(), card(Suit::Spades, Rank::Six));
    assert_eq!(round.dealer().hole_card(), None);
    assert!(!round.is_answered());

    let verdict = quiz.answer(Action::Split).unwrap();
    assert!(verdict.is_correct());
    assert_eq!(verdict.correct, Action::Split);
    assert_eq!(verdict.rule, Rule::Pair);
    assert_eq!(verdict.kind, HandKind::Pair(Rank::Eight));

    let answered = quiz.current_round().unwrap();
    assert!(answered.is_answered());
    assert_eq!(answered.verdict(), Some(&verdict));
    assert_eq!(
        answered.dealer().hole_card(),
        Some(card(Suit::Diamonds, Rank::King))
    );
    assert_eq!(answered.dealer().visible_value(), 16);

    assert_eq!(
        quiz.score(),
        Score {
            correct: 1,
            attempts: 1
        }
    );
    assert_eq!(quiz.category_score(HandCategory::Pair).correct, 1);
    assert_eq!(quiz.category_score(HandCategory::Hard).attempts, 0);
}

#[test]
fn player_hands_at_or_above_threshold_are_redealt() {
    env_logger::builder().is_test(true).try_init().ok();

    let quiz = scripted_quiz(
        QuizOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::King), // 21, redealt
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Seven),
            card(Suit::Spades, Rank::Two),
            card(Suit::Diamonds, Rank::Nine),
        ],
    );

    let round = quiz.deal();
    assert_eq!(
        round.player().cards(),
        &[card(Suit::Hearts, Rank::Ten), card(Suit::Clubs, Rank::Seven)]
    );
    assert_eq!(round.dealer().up_card(), card(Suit::Spades, Rank::Two));

    let verdict = quiz.answer(Action::Hit).unwrap();
    assert!(!verdict.is_correct());
    assert_eq!(verdict.correct, Action::Stand);
    assert_eq!(quiz.score().correct, 0);
    assert_eq!(quiz.category_score(HandCategory::Hard).attempts, 1);
}

#[test]
fn custom_redeal_threshold() {
    let options = QuizOptions::default().with_redeal_threshold(12);
    let quiz = scripted_quiz(
        options,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Five), // 15, redealt
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::Ace), // 12, redealt
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::Three),
            card(Suit::Spades, Rank::Four),
            card(Suit::Diamonds, Rank::Nine),
        ],
    );

    let round = quiz.deal();
    assert_eq!(round.player().value(), 5);
}

#[test]
fn invalid_options_are_rejected() {
    let options = QuizOptions::default().with_redeal_threshold(4);
    assert_eq!(
        options.validate(),
        Err(OptionsError::RedealThresholdTooLow)
    );
    assert_eq!(
        Quiz::new(options, 1).err(),
        Some(OptionsError::RedealThresholdTooLow)
    );
    assert!(Quiz::new(QuizOptions::default().with_redeal_threshold(5), 1).is_ok());
}

#[test]
fn answer_errors() {
    let quiz = scripted_quiz(
        QuizOptions::default(),
        &[
            card(Suit::Hearts, Rank::Six),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Spades, Rank::Ace),
            card(Suit::Diamonds, Rank::Nine),
        ],
    );

    assert_eq!(quiz.answer(Action::Hit), Err(QuizError::NoRound));

    quiz.deal();
    let verdict = quiz.answer(Action::Hit).unwrap();
    assert!(verdict.is_correct());
    assert_eq!(quiz.answer(Action::Hit), Err(QuizError::AlreadyAnswered));
    assert_eq!(quiz.score().attempts, 1);
}

#[test]
fn dealing_replaces_the_round() {
    let quiz = scripted_quiz(
        QuizOptions::default(),
        &[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Clubs, Rank::Six),
            card(Suit::Spades, Rank::Two),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Two),
            card(Suit::Spades, Rank::Four),
            card(Suit::Diamonds, Rank::Nine),
        ],
    );

    assert!(quiz.current_round().is_none());
    quiz.deal();
    assert_eq!(quiz.answer(Action::Hit).unwrap().kind, HandKind::Soft(17));

    let second = quiz.deal();
    assert!(!second.is_answered());
    assert_eq!(second.player().value(), 12);
    assert_eq!(quiz.current_round(), Some(second));

    let verdict = quiz.answer(Action::Hit).unwrap();
    assert_eq!(verdict.correct, Action::Stand);
    assert_eq!(quiz.score().accuracy(), Some(0.5));
    assert_eq!(quiz.category_score(HandCategory::Soft).correct, 1);
    assert_eq!(quiz.category_score(HandCategory::Hard).correct, 0);
}

#[test]
fn history_is_bounded() {
    let mut draws = Vec::new();
    for rank in [Rank::Two, Rank::Three, Rank::Four] {
        draws.extend([
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, rank),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Diamonds, Rank::Seven),
        ]);
    }

    let quiz = scripted_quiz(QuizOptions::default().with_history_limit(2), &draws);
    for _ in 0..3 {
        quiz.deal();
        quiz.answer(Action::Hit).unwrap();
    }

    let history = quiz.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].player[1].rank, Rank::Three);
    assert_eq!(history[1].player[1].rank, Rank::Four);
    assert_eq!(history[1].dealer_upcard.rank, Rank::Seven);
    assert_eq!(quiz.into_score().attempts, 3);

    let quiz = scripted_quiz(QuizOptions::default().with_history_limit(0), &draws);
    quiz.deal();
    quiz.answer(Action::Hit).unwrap();
    assert!(quiz.history().is_empty());
}

#[test]
fn random_deals_respect_the_threshold_and_are_seeded() {
    let options = QuizOptions::default();
    let first = Quiz::new(options, 42).unwrap();
    let second = Quiz::new(options, 42).unwrap();

    for _ in 0..200 {
        let round = first.deal();
        assert_eq!(round.player().cards().len(), 2);
        assert!(round.player().value() < 21);
        assert_eq!(second.deal(), round);
    }
}

#[test]
fn random_source_reaches_every_rank() {
    let mut source = bjchart::RandomCards::new(3);
    let mut seen = Vec::new();
    for _ in 0..2000 {
        let drawn = source.draw();
        if !seen.contains(&drawn.rank) {
            seen.push(drawn.rank);
        }
    }
    assert_eq!(seen.len(), Rank::ALL.len());
}

#[test]
fn stateless_grading() {
    let player = [card(Suit::Hearts, Rank::Ten), card(Suit::Clubs, Rank::Seven)];
    let verdict = grade(&player, card(Suit::Spades, Rank::Two), Action::Stand);
    assert!(verdict.is_correct());
    assert_eq!(verdict.rule, Rule::Hard);
    assert_eq!(verdict.kind, HandKind::Hard(17));
}

#[test]
fn score_accuracy() {
    let mut score = Score::default();
    assert_eq!(score.accuracy(), None);
    score.record(true);
    score.record(true);
    score.record(false);
    score.record(true);
    assert_eq!(score.attempts, 4);
    assert_eq!(score.correct, 3);
    assert_eq!(score.accuracy(), Some(0.75));
}

#[test]
fn quiz_can_be_shared_between_threads() {
    fn assert_sync<T: Sync + Send>() {}
    assert_sync::<Quiz>();

    let quiz = Quiz::new(QuizOptions::default(), 9).unwrap();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let round = quiz.deal();
                assert!(round.player().value() < 21);
            });
        }
    });
    assert!(quiz.current_round().is_some());
}
