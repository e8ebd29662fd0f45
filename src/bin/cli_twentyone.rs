//! Console front-end for the twenty-one engine.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{
    Card, DecisionSource, FirstSideSelector, Hand, OutcomeSink, Rank, ReplayPrompt, RoundOutcome,
    RoundReport, Session, Side, Suit, TurnDecision,
};

fn main() {
    println!("Twenty-One CLI (36-card deck, first to 21)");

    let name = prompt_raw("Your name: ");
    let name = if name.is_empty() { "Player" } else { &name };
    println!("Welcome, {name}!");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session = Session::new(seed);

    let mut selector = ConsoleSelector;
    let mut decisions = ConsoleDecisions;
    let mut sink = ConsoleSink;
    let mut replay = ConsoleReplay;

    match session.run(&mut selector, &mut decisions, &mut sink, &mut replay) {
        Ok((player, computer)) => {
            println!("\nFinal score for {name}:");
            println!("  You: {player}");
            println!("  Computer: {computer}");
        }
        Err(err) => println!("Session error: {err}"),
    }
}

struct ConsoleSelector;

impl FirstSideSelector for ConsoleSelector {
    fn choose_first_side(&mut self) -> Side {
        loop {
            match prompt_line("Who goes first? (p)layer / (c)omputer: ").as_str() {
                "p" | "player" => return Side::Player,
                "c" | "computer" => return Side::Computer,
                _ => println!("Please answer 'p' or 'c'."),
            }
        }
    }
}

struct ConsoleDecisions;

impl DecisionSource for ConsoleDecisions {
    fn decide_draw(&mut self, hand: &Hand) -> Option<TurnDecision> {
        println!(
            "\nYour hand: {} (total {})",
            format_hand(hand),
            hand.total_points()
        );
        loop {
            match prompt_line("Draw another card? (y/n): ").as_str() {
                "y" | "yes" => return Some(TurnDecision::Draw),
                "n" | "no" => return Some(TurnDecision::Stand),
                _ => println!("Please answer 'y' or 'n'."),
            }
        }
    }
}

struct ConsoleSink;

impl OutcomeSink for ConsoleSink {
    fn computer_drew(&mut self, hand: &Hand) {
        println!("Computer draws a card ({} in hand).", hand.len());
    }

    fn computer_stood(&mut self, hand: &Hand) {
        println!("Computer stands on {} cards.", hand.len());
    }

    fn round_finished(&mut self, report: &RoundReport) {
        println!(
            "\nRound over: you {} / computer {}",
            report.player_total, report.computer_total
        );
        println!("{}", describe_outcome(report.outcome));
    }
}

struct ConsoleReplay;

impl ReplayPrompt for ConsoleReplay {
    fn wants_another_round(&mut self) -> bool {
        loop {
            match prompt_line("\nPlay another round? (y/n): ").as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => println!("Please answer 'y' or 'n'."),
            }
        }
    }
}

fn describe_outcome(outcome: RoundOutcome) -> String {
    let text = match outcome {
        RoundOutcome::PlayerWinsTwoAces => "You win with two aces!",
        RoundOutcome::ComputerWinsTwoAces => "Computer wins with two aces.",
        RoundOutcome::PlayerWins21 => "You win with exactly 21!",
        RoundOutcome::ComputerWins21 => "Computer wins with exactly 21.",
        RoundOutcome::PlayerBusts => "You went over 21. Computer wins.",
        RoundOutcome::ComputerBusts => "Computer went over 21. You win!",
        RoundOutcome::PlayerWinsByPoints => "You win on points!",
        RoundOutcome::ComputerWinsByPoints => "Computer wins on points.",
        RoundOutcome::Tie => "It's a tie.",
    };
    match outcome {
        RoundOutcome::PlayerWinsTwoAces
        | RoundOutcome::PlayerWins21
        | RoundOutcome::ComputerBusts
        | RoundOutcome::PlayerWinsByPoints => colorize(text, "32"),
        RoundOutcome::Tie => colorize(text, "33"),
        _ => colorize(text, "31"),
    }
}

fn prompt_raw(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_line(prompt: &str) -> String {
    prompt_raw(prompt).to_lowercase()
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let (rank, is_face) = match card.rank {
        Rank::Jack => ("J".to_string(), true),
        Rank::Queen => ("Q".to_string(), true),
        Rank::King => ("K".to_string(), true),
        Rank::Ace => ("A".to_string(), true),
        _ => (card.points().to_string(), false),
    };

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
