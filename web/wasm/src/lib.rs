use bjchart::{
    Action, Card, DealerHand, Hand, HandCategory, HandKind, Quiz, QuizOptions, Round, Rule, Score,
    Suit, Verdict,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmQuiz {
    quiz: Quiz,
}

#[wasm_bindgen]
impl WasmQuiz {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<WasmQuiz, JsValue> {
        let quiz = Quiz::new(QuizOptions::default(), u64::from(seed)).map_err(js_err)?;
        Ok(Self { quiz })
    }

    pub fn reset(&mut self, seed: u32) -> Result<(), JsValue> {
        self.quiz = Quiz::new(self.quiz.options, u64::from(seed)).map_err(js_err)?;
        Ok(())
    }

    pub fn deal(&self) -> Result<JsValue, JsValue> {
        let round = self.quiz.deal();
        to_js_value(&JsRound::from(&round))
    }

    pub fn answer(&self, choice: &str) -> Result<JsValue, JsValue> {
        let choice = choice.parse::<Action>().map_err(js_err)?;
        let verdict = self.quiz.answer(choice).map_err(js_err)?;
        to_js_value(&JsVerdict::from(verdict))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            round: self.quiz.current_round().as_ref().map(JsRound::from),
            score: JsScore::from(self.quiz.score()),
            categories: HandCategory::ALL
                .into_iter()
                .map(|category| JsCategoryScore {
                    category: category_to_str(category),
                    score: JsScore::from(self.quiz.category_score(category)),
                })
                .collect(),
        };

        to_js_value(&snapshot)
    }
}

/// Returns the basic-strategy action for cards written like `"10h"` or `"A♠"`.
#[wasm_bindgen]
pub fn best_action(player: Vec<String>, dealer_upcard: &str) -> Result<String, JsValue> {
    let player = player
        .iter()
        .map(|card| card.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(js_err)?;
    let dealer_upcard = dealer_upcard.parse::<Card>().map_err(js_err)?;
    Ok(bjchart::best_action(&player, dealer_upcard).name().to_string())
}

#[derive(Serialize)]
struct Snapshot {
    round: Option<JsRound>,
    score: JsScore,
    categories: Vec<JsCategoryScore>,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    image: String,
}

#[derive(Serialize)]
struct JsRound {
    player: JsHand,
    dealer: JsDealer,
    verdict: Option<JsVerdict>,
}

impl From<&Round> for JsRound {
    fn from(round: &Round) -> Self {
        Self {
            player: JsHand::from(round.player()),
            dealer: JsDealer::from(round.dealer()),
            verdict: round.verdict().copied().map(JsVerdict::from),
        }
    }
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<JsCard>,
    value: u8,
    is_soft: bool,
    is_pair: bool,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().iter().copied().map(card_to_js).collect(),
            value: hand.value(),
            is_soft: hand.is_soft(),
            is_pair: hand.is_pair(),
        }
    }
}

#[derive(Serialize)]
struct JsDealer {
    up_card: JsCard,
    hole_card: Option<JsCard>,
    visible_value: u8,
}

impl From<&DealerHand> for JsDealer {
    fn from(dealer: &DealerHand) -> Self {
        Self {
            up_card: card_to_js(dealer.up_card()),
            hole_card: dealer.hole_card().map(card_to_js),
            visible_value: dealer.visible_value(),
        }
    }
}

#[derive(Serialize)]
struct JsVerdict {
    chosen: &'static str,
    correct: &'static str,
    is_correct: bool,
    rule: &'static str,
    kind: String,
}

impl From<Verdict> for JsVerdict {
    fn from(verdict: Verdict) -> Self {
        Self {
            chosen: verdict.chosen.name(),
            correct: verdict.correct.name(),
            is_correct: verdict.is_correct(),
            rule: rule_to_str(verdict.rule),
            kind: kind_to_string(verdict.kind),
        }
    }
}

#[derive(Serialize)]
struct JsScore {
    correct: u32,
    attempts: u32,
}

impl From<Score> for JsScore {
    fn from(score: Score) -> Self {
        Self {
            correct: score.correct,
            attempts: score.attempts,
        }
    }
}

#[derive(Serialize)]
struct JsCategoryScore {
    category: &'static str,
    score: JsScore,
}

fn card_to_js(card: Card) -> JsCard {
    let suit = suit_to_str(card.suit);
    let rank = card.rank.label();
    JsCard {
        suit,
        rank,
        image: format!("cards/{rank}_of_{}.png", suit.to_lowercase()),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn rule_to_str(rule: Rule) -> &'static str {
    match rule {
        Rule::Pair => "Pair",
        Rule::Soft => "Soft",
        Rule::Hard => "Hard",
        Rule::HighTotal => "HighTotal",
        Rule::Fallback => "Fallback",
    }
}

fn category_to_str(category: HandCategory) -> &'static str {
    match category {
        HandCategory::Pair => "Pair",
        HandCategory::Soft => "Soft",
        HandCategory::Hard => "Hard",
    }
}

fn kind_to_string(kind: HandKind) -> String {
    match kind {
        HandKind::Pair(rank) => format!("pair of {rank}"),
        HandKind::Soft(total) => format!("soft {total}"),
        HandKind::Hard(total) => format!("hard {total}"),
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
