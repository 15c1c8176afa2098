//! Hand evaluation: totals, soft hands and pairs.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Raw sum with every ace at 11, and the number of aces.
fn tally(cards: &[Card]) -> (u32, u32) {
    cards.iter().fold((0, 0), |(sum, aces), card| {
        (
            sum.saturating_add(u32::from(card.value())),
            aces.saturating_add(u32::from(card.rank.is_ace())),
        )
    })
}

/// Returns the blackjack total of the cards.
///
/// Aces count as 11 until the total would exceed 21, then as 1, one ace at a
/// time. A busted total is returned as is, capped at `u8::MAX`.
///
/// ```
/// use bjchart::{Card, Rank, Suit, hand};
///
/// let cards = [
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Clubs, Rank::Nine),
/// ];
/// assert_eq!(hand::total(&cards), 21);
/// ```
#[must_use]
pub fn total(cards: &[Card]) -> u8 {
    let (raw, aces) = tally(cards);
    let reductions = raw.saturating_sub(21).div_ceil(10).min(aces);
    u8::try_from(raw - 10 * reductions).unwrap_or(u8::MAX)
}

/// Returns whether the hand is soft.
///
/// A hand is soft when it holds an ace and the sum with every ace counted as
/// 11 does not exceed 21.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    let (raw, aces) = tally(cards);
    aces > 0 && raw <= 21
}

/// Returns whether the hand is exactly two cards of the same rank.
///
/// Rank identity matters, not value: a king and a ten are not a pair.
#[must_use]
pub fn is_pair(cards: &[Card]) -> bool {
    matches!(cards, [first, second] if first.rank == second.rank)
}

/// Strategic classification of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandKind {
    /// Two cards of the same rank.
    Pair(Rank),
    /// A soft hand with its total.
    Soft(u8),
    /// A hard hand with its total.
    Hard(u8),
}

impl HandKind {
    /// Returns the broad category of the hand.
    #[must_use]
    pub const fn category(self) -> HandCategory {
        match self {
            Self::Pair(_) => HandCategory::Pair,
            Self::Soft(_) => HandCategory::Soft,
            Self::Hard(_) => HandCategory::Hard,
        }
    }
}

/// Category of a hand, used to break down quiz scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandCategory {
    /// Pairs.
    Pair,
    /// Soft totals.
    Soft,
    /// Hard totals.
    Hard,
}

impl HandCategory {
    /// All categories.
    pub const ALL: [Self; 3] = [Self::Pair, Self::Soft, Self::Hard];
}

/// Classifies the hand, checking pair first, then soft, then hard.
#[must_use]
pub fn classify(cards: &[Card]) -> HandKind {
    match cards {
        [first, second] if first.rank == second.rank => HandKind::Pair(first.rank),
        _ if is_soft(cards) => HandKind::Soft(total(cards)),
        _ => HandKind::Hard(total(cards)),
    }
}

/// A player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        total(&self.cards)
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is a pair.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        is_pair(&self.cards)
    }

    /// Returns the classification of the hand.
    #[must_use]
    pub fn kind(&self) -> HandKind {
        classify(&self.cards)
    }
}

/// The dealer's hand: an upcard and a hole card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerHand {
    up: Card,
    hole: Card,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a dealer hand with the hole card face down.
    #[must_use]
    pub const fn new(up: Card, hole: Card) -> Self {
        Self {
            up,
            hole,
            hole_revealed: false,
        }
    }

    /// Returns the visible card.
    #[must_use]
    pub const fn up_card(&self) -> Card {
        self.up
    }

    /// Returns the hole card once it has been revealed.
    #[must_use]
    pub const fn hole_card(&self) -> Option<Card> {
        if self.hole_revealed {
            Some(self.hole)
        } else {
            None
        }
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only the upcard if the hole is hidden).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            total(&[self.up, self.hole])
        } else {
            self.up.value()
        }
    }
}
