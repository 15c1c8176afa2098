//! CLI basic-strategy quiz.
//!
//! Run with `cargo run --example cli_quiz [seed]`. Set `BJCHART_LOG` to
//! `info`, `debug` or `trace` to see the engine's log output on stderr.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjchart::{Action, Card, DealerHand, Hand, HandCategory, Quiz, QuizOptions, Score, Suit};

fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::new()
            .filter_or("BJCHART_LOG", "off")
            .write_style("BJCHART_LOG_STYLE"),
    )
    .init();
}

fn main() {
    init_logging();

    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });

    let quiz = match Quiz::new(QuizOptions::default(), seed) {
        Ok(quiz) => quiz,
        Err(err) => {
            eprintln!("Invalid options: {err}");
            return;
        }
    };

    println!("Basic strategy quiz (seed {seed}, type 'q' to quit)");

    'rounds: loop {
        let round = quiz.deal();
        print_table(round.player(), round.dealer());

        let verdict = loop {
            let input = prompt_line(&format!("{}: ", format_actions()));
            if input == "q" || input == "quit" {
                break 'rounds;
            }

            let choice = match input.parse::<Action>() {
                Ok(choice) => choice,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            };

            match quiz.answer(choice) {
                Ok(verdict) => break verdict,
                Err(err) => {
                    println!("Answer error: {err}");
                    continue 'rounds;
                }
            }
        };

        if verdict.is_correct() {
            println!("{}", colorize("Correct!", "32"));
        } else {
            let message = format!(
                "Incorrect! The correct move was {}.",
                verdict.correct.name().to_uppercase()
            );
            println!("{}", colorize(&message, "31"));
        }

        if let Some(round) = quiz.current_round() {
            println!("Dealer had {}", format_dealer(round.dealer()));
        }
        println!("Score: {}", format_score(quiz.score()));
    }

    println!();
    for category in HandCategory::ALL {
        println!(
            "{category:?} hands: {}",
            format_score(quiz.category_score(category))
        );
    }
    println!("Final score: {}", format_score(quiz.into_score()));
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return "q".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn print_table(player: &Hand, dealer: &DealerHand) {
    println!(
        "\nDealer: {} (value {})",
        format_dealer(dealer),
        dealer.visible_value()
    );
    let soft = if player.is_soft() { "soft " } else { "" };
    println!(
        "You:    {} ({soft}{})",
        format_hand(player.cards()),
        player.value()
    );
}

fn format_actions() -> String {
    let parts: Vec<String> = Action::ALL
        .iter()
        .map(|action| {
            let name = action.name();
            let key = match action {
                Action::Split => "p",
                _ => &name[..1],
            };
            format!("[{}]{name}", colorize(key, "33"))
        })
        .collect();
    format!("Actions {}", parts.join(" "))
}

fn format_score(score: Score) -> String {
    match score.accuracy() {
        Some(accuracy) => format!(
            "{} / {} ({:.0}%)",
            score.correct,
            score.attempts,
            accuracy * 100.0
        ),
        None => "0 / 0".to_string(),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    let up = format_card(&dealer.up_card());
    match dealer.hole_card() {
        Some(hole) => format!("{up} {}", format_card(&hole)),
        None => format!("{up} ??"),
    }
}

fn format_hand(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
