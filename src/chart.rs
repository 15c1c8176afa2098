//! Basic-strategy charts.
//!
//! The charts encode the 6-8 deck, dealer-stands-on-soft-17,
//! double-after-split basic strategy, abbreviated to the rows a two-card quiz
//! hand can reach. Each row has one entry per [`DealerBucket`].

use core::fmt;
use core::str::FromStr;

use crate::card::{Card, Rank};
use crate::error::ParseActionError;

/// A player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw a card.
    Hit,
    /// Keep the current total.
    Stand,
    /// Double the bet and draw exactly one card.
    Double,
    /// Split a pair into two hands.
    Split,
}

impl Action {
    /// All actions, in the order a quiz offers them.
    pub const ALL: [Self; 4] = [Self::Hit, Self::Stand, Self::Double, Self::Split];

    /// Returns the lowercase name of the action.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Double => "double",
            Self::Split => "split",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let is = |names: &[&str]| names.iter().any(|name| name.eq_ignore_ascii_case(s));
        if is(&["hit", "h"]) {
            Ok(Self::Hit)
        } else if is(&["stand", "stick", "s"]) {
            Ok(Self::Stand)
        } else if is(&["double", "d"]) {
            Ok(Self::Double)
        } else if is(&["split", "p"]) {
            Ok(Self::Split)
        } else {
            Err(ParseActionError::Unknown)
        }
    }
}

/// Number of dealer upcard columns in every chart row.
pub const BUCKETS: usize = 11;

/// Column index of a dealer upcard.
///
/// Buckets 0 through 8 are dealer values 2 through 10 and bucket 10 is an
/// ace. Bucket 9 is never produced by a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DealerBucket(u8);

impl DealerBucket {
    /// The bucket of a dealer ace.
    pub const ACE: Self = Self(10);

    /// Returns the bucket for a dealer card value, clamped to the chart.
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        if value == 11 {
            return Self::ACE;
        }
        let index = value.saturating_sub(2);
        if index > Self::ACE.0 {
            Self::ACE
        } else {
            Self(index)
        }
    }

    /// Returns the bucket for a dealer upcard.
    ///
    /// ```
    /// use bjchart::{Card, DealerBucket, Rank, Suit};
    ///
    /// let ace = Card::new(Suit::Spades, Rank::Ace);
    /// assert_eq!(DealerBucket::from_card(ace), DealerBucket::ACE);
    /// assert_eq!(DealerBucket::from_card(Card::new(Suit::Spades, Rank::Six)).index(), 4);
    /// ```
    #[must_use]
    pub const fn from_card(card: Card) -> Self {
        Self::from_value(card.value())
    }

    /// Returns the column index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One chart row: an action per dealer bucket.
pub type ChartRow = [Action; BUCKETS];

/// A chart keyed by a contiguous range of player totals.
#[derive(Debug)]
pub struct TotalChart<const N: usize> {
    first: u8,
    rows: [ChartRow; N],
}

impl<const N: usize> TotalChart<N> {
    /// Returns the lowest and highest totals the chart covers.
    #[must_use]
    pub const fn range(&self) -> (u8, u8) {
        (self.first, self.first + N as u8 - 1)
    }

    /// Returns the row for a player total, if the chart covers it.
    #[must_use]
    pub const fn row(&self, total: u8) -> Option<&ChartRow> {
        if total < self.first {
            return None;
        }
        let index = (total - self.first) as usize;
        if index < N {
            Some(&self.rows[index])
        } else {
            None
        }
    }

    /// Looks up the action for a player total against a dealer bucket.
    #[must_use]
    pub const fn lookup(&self, total: u8, dealer: DealerBucket) -> Option<Action> {
        match self.row(total) {
            Some(row) => Some(row[dealer.index()]),
            None => None,
        }
    }
}

const H: Action = Action::Hit;
const S: Action = Action::Stand;
const D: Action = Action::Double;
const P: Action = Action::Split;

const HARD_ROWS: [ChartRow; 13] = [
    /* 5 */ [H, H, H, H, H, H, H, H, H, H, H],
    /* 6 */ [H, H, H, H, H, H, H, H, H, H, H],
    /* 7 */ [H, H, H, H, H, H, H, H, H, H, H],
    /* 8 */ [H, H, H, H, H, H, H, H, H, H, H],
    /* 9 */ [H, D, D, D, D, H, H, H, H, H, H],
    /* 10 */ [D, D, D, D, D, D, D, D, H, H, H],
    /* 11 */ [D, D, D, D, D, D, D, D, D, D, H],
    /* 12 */ [H, H, S, S, S, H, H, H, H, H, H],
    /* 13 */ [S, S, S, S, S, H, H, H, H, H, H],
    /* 14 */ [S, S, S, S, S, H, H, H, H, H, H],
    /* 15 */ [S, S, S, S, S, H, H, H, H, H, H],
    /* 16 */ [S, S, S, S, S, H, H, H, H, H, H],
    /* 17 */ [S, S, S, S, S, S, S, S, S, S, S],
];

const SOFT_ROWS: [ChartRow; 8] = [
    /* 13 */ [H, H, H, D, D, H, H, H, H, H, H],
    /* 14 */ [H, H, H, D, D, H, H, H, H, H, H],
    /* 15 */ [H, H, D, D, D, H, H, H, H, H, H],
    /* 16 */ [H, H, D, D, D, H, H, H, H, H, H],
    /* 17 */ [H, D, D, D, D, H, H, H, H, H, H],
    /* 18 */ [D, D, D, D, D, S, S, H, H, H, H],
    /* 19 */ [S, D, D, D, D, S, S, S, S, S, S],
    /* 20 */ [S, S, S, S, S, S, S, S, S, S, S],
];

/// Hard totals 5 through 17.
pub static HARD: TotalChart<13> = TotalChart {
    first: 5,
    rows: HARD_ROWS,
};

/// Soft totals 13 through 20.
pub static SOFT: TotalChart<8> = TotalChart {
    first: 13,
    rows: SOFT_ROWS,
};

/// Pair rows, indexed by [`pair_index`]: 2 through 10, then aces.
static PAIRS: [ChartRow; 10] = [
    /* 2 */ [P, P, P, P, P, P, H, H, H, H, H],
    /* 3 */ [P, P, P, P, P, P, H, H, H, H, H],
    /* 4 */ [H, H, H, P, P, H, H, H, H, H, H],
    /* 5 */ [D, D, D, D, D, D, D, D, H, H, H],
    /* 6 */ [P, P, P, P, P, H, H, H, H, H, H],
    /* 7 */ [P, P, P, P, P, P, H, H, H, H, H],
    /* 8 */ [P, P, P, P, P, P, P, P, P, P, P],
    /* 9 */ [P, P, P, P, P, S, P, P, S, S, S],
    /* 10 */ [S, S, S, S, S, S, S, S, S, S, S],
    /* A */ [P, P, P, P, P, P, P, P, P, P, P],
];

const fn pair_index(rank: Rank) -> usize {
    match rank.pair_rank() {
        Rank::Two => 0,
        Rank::Three => 1,
        Rank::Four => 2,
        Rank::Five => 3,
        Rank::Six => 4,
        Rank::Seven => 5,
        Rank::Eight => 6,
        Rank::Nine => 7,
        Rank::Ace => 9,
        _ => 8,
    }
}

/// Returns the pair row for a rank. Face cards share the ten row.
#[must_use]
pub fn pair_row(rank: Rank) -> &'static ChartRow {
    &PAIRS[pair_index(rank)]
}

/// Looks up the pair action for a rank against a dealer bucket.
#[must_use]
pub fn pair_action(rank: Rank, dealer: DealerBucket) -> Action {
    pair_row(rank)[dealer.index()]
}

const fn has_split(rows: &[ChartRow]) -> bool {
    let mut row = 0;
    while row < rows.len() {
        let mut col = 0;
        while col < BUCKETS {
            if matches!(rows[row][col], Action::Split) {
                return true;
            }
            col += 1;
        }
        row += 1;
    }
    false
}

const _: () = assert!(!has_split(&HARD_ROWS), "hard chart must not split");
const _: () = assert!(!has_split(&SOFT_ROWS), "soft chart must not split");
