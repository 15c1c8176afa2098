//! Basic-strategy decision resolver.
//!
//! A decision runs an ordered chain of [`Rule`]s over the player's hand and
//! the dealer upcard; the first rule that produces an action wins. A `double`
//! recommendation is then downgraded to `hit` unless the hand still has its
//! first two cards.

use crate::card::{Card, Rank};
use crate::chart::{self, Action, DealerBucket};
use crate::hand;

/// A step of the decision chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Two cards of the same rank, answered by the pair chart.
    Pair,
    /// A soft total from 13 to 20, answered by the soft chart.
    Soft,
    /// A hard total from 5 to 17, answered by the hard chart.
    Hard,
    /// Any total above 17 stands.
    HighTotal,
    /// Nothing else matched; hit.
    Fallback,
}

impl Rule {
    /// The rules in precedence order.
    pub const ORDER: [Self; 5] = [
        Self::Pair,
        Self::Soft,
        Self::Hard,
        Self::HighTotal,
        Self::Fallback,
    ];

    /// Applies the rule, returning the chart action if the rule governs the hand.
    ///
    /// The returned action has not been through the double downgrade.
    #[must_use]
    pub fn apply(self, situation: &Situation) -> Option<Action> {
        match self {
            Self::Pair => situation
                .pair
                .map(|rank| chart::pair_action(rank, situation.dealer)),
            Self::Soft => {
                if situation.soft {
                    chart::SOFT.lookup(situation.total, situation.dealer)
                } else {
                    None
                }
            }
            Self::Hard => {
                if situation.soft || !(5..=17).contains(&situation.total) {
                    return None;
                }
                Some(
                    chart::HARD
                        .lookup(situation.total, situation.dealer)
                        .unwrap_or(if situation.total >= 17 {
                            Action::Stand
                        } else {
                            Action::Hit
                        }),
                )
            }
            Self::HighTotal => (situation.total > 17).then_some(Action::Stand),
            Self::Fallback => Some(Action::Hit),
        }
    }
}

/// The facts about a hand that the rules look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Situation {
    /// Hand total after ace reduction.
    pub total: u8,
    /// Whether the hand is soft.
    pub soft: bool,
    /// The shared rank if the hand is a pair.
    pub pair: Option<Rank>,
    /// Number of cards in the hand.
    pub cards: usize,
    /// Dealer upcard column.
    pub dealer: DealerBucket,
}

impl Situation {
    /// Evaluates the player's cards against the dealer upcard.
    #[must_use]
    pub fn new(player: &[Card], dealer_upcard: Card) -> Self {
        Self {
            total: hand::total(player),
            soft: hand::is_soft(player),
            pair: hand::is_pair(player).then(|| player[0].rank),
            cards: player.len(),
            dealer: DealerBucket::from_card(dealer_upcard),
        }
    }
}

/// The outcome of a decision, with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// The recommended action.
    pub action: Action,
    /// The rule that governed the hand.
    pub rule: Rule,
    /// Whether a `double` from the chart was replaced by `hit`.
    pub downgraded: bool,
}

/// Resolves the basic-strategy play and reports which rule made it.
///
/// ```
/// use bjchart::{Action, Card, Rank, Rule, Suit, strategy};
///
/// let player = [
///     Card::new(Suit::Hearts, Rank::Eight),
///     Card::new(Suit::Clubs, Rank::Eight),
/// ];
/// let decision = strategy::decide(&player, Card::new(Suit::Spades, Rank::Six));
/// assert_eq!(decision.action, Action::Split);
/// assert_eq!(decision.rule, Rule::Pair);
/// ```
#[must_use]
pub fn decide(player: &[Card], dealer_upcard: Card) -> Decision {
    let situation = Situation::new(player, dealer_upcard);

    let (rule, action) = Rule::ORDER
        .into_iter()
        .find_map(|rule| rule.apply(&situation).map(|action| (rule, action)))
        .unwrap_or((Rule::Fallback, Action::Hit));

    let downgraded = action == Action::Double && situation.cards != 2;
    let action = if downgraded { Action::Hit } else { action };

    log::debug!(
        "{rule:?} rule: total {} (soft {}, {} cards) vs dealer {dealer_upcard} -> {action}{}",
        situation.total,
        situation.soft,
        situation.cards,
        if downgraded { " (double downgraded)" } else { "" },
    );

    Decision {
        action,
        rule,
        downgraded,
    }
}

/// Returns the basic-strategy action for the player's cards against the
/// dealer upcard.
///
/// Every input yields an action; hands outside the charts fall through to
/// `stand` above 17 and `hit` otherwise. Busted hands are not detected.
///
/// ```
/// use bjchart::{Action, Card, Rank, Suit, best_action};
///
/// let soft_17 = [Card::new(Suit::Hearts, Rank::Ace), Card::new(Suit::Clubs, Rank::Six)];
/// let hard_17 = [Card::new(Suit::Hearts, Rank::Ten), Card::new(Suit::Clubs, Rank::Seven)];
/// let two = Card::new(Suit::Spades, Rank::Two);
///
/// assert_eq!(best_action(&soft_17, two), Action::Hit);
/// assert_eq!(best_action(&hard_17, two), Action::Stand);
/// ```
#[must_use]
pub fn best_action(player: &[Card], dealer_upcard: Card) -> Action {
    decide(player, dealer_upcard).action
}
