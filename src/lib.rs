//! A two-player twenty-one engine over a 36-card deck.
//!
//! One side is driven by a [`DecisionSource`] (typically a human at a
//! console), the other by a fixed draw-below-17 policy. A round deals two
//! cards to each side, alternates turns, and ends with exactly one
//! [`RoundOutcome`]: a pair of aces wins instantly, an exact 21 wins, a
//! bust loses, and once the computer stands the higher total takes the
//! round.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{RoundEngine, Side, TurnDecision};
//!
//! let mut engine = RoundEngine::new(42);
//! let mut always_stand = |_: &twentyone::Hand| Some(TurnDecision::Stand);
//! let outcome = engine.play_round(Side::Player, &mut always_stand, &mut ());
//! println!("{outcome:?}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod decision;
pub mod deck;
pub mod engine;
pub mod error;
pub mod hand;
pub mod result;
pub mod scoreboard;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use decision::{DecisionSource, FirstSideSelector, OutcomeSink, ReplayPrompt, TurnDecision};
pub use deck::Deck;
pub use engine::{RoundEngine, RoundState, Side, WIN_TARGET, policy};
pub use error::{DeckError, RoundError};
pub use hand::Hand;
pub use result::{RoundOutcome, RoundReport};
pub use scoreboard::Scoreboard;
pub use session::Session;
