//! Multi-round session on top of the round engine.

use crate::deck::Deck;
use crate::decision::{DecisionSource, FirstSideSelector, OutcomeSink, ReplayPrompt};
use crate::engine::{RoundEngine, Side};
use crate::error::RoundError;
use crate::result::RoundOutcome;
use crate::scoreboard::Scoreboard;

/// Plays consecutive rounds and keeps the running score.
///
/// Each round outcome is folded into the [`Scoreboard`] as soon as the
/// round terminates; a tie leaves both counters untouched.
///
/// # Example
///
/// ```no_run
/// use twentyone::{Session, Side, TurnDecision};
///
/// let mut session = Session::new(7);
/// let mut stand = |_: &twentyone::Hand| Some(TurnDecision::Stand);
/// let outcome = session.play_round(Side::Player, &mut stand, &mut ());
/// let _ = outcome;
/// println!("{:?}", session.scoreboard().snapshot());
/// ```
pub struct Session {
    engine: RoundEngine,
    scoreboard: Scoreboard,
}

impl Session {
    /// Creates a session whose engine shuffles with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            engine: RoundEngine::new(seed),
            scoreboard: Scoreboard::new(),
        }
    }

    /// Plays one round with a fresh shuffled deck and records the winner.
    ///
    /// # Errors
    ///
    /// Propagates every [`RoundError`] from the engine; a failed round
    /// leaves the scoreboard unchanged.
    pub fn play_round(
        &mut self,
        first: Side,
        decisions: &mut dyn DecisionSource,
        sink: &mut dyn OutcomeSink,
    ) -> Result<RoundOutcome, RoundError> {
        let outcome = self.engine.play_round(first, decisions, sink)?;
        self.record(outcome);
        Ok(outcome)
    }

    /// Plays one round from `deck` in its current order and records the
    /// winner.
    ///
    /// # Errors
    ///
    /// Same contract as [`play_round`](Self::play_round).
    pub fn play_with_deck(
        &mut self,
        deck: Deck,
        first: Side,
        decisions: &mut dyn DecisionSource,
        sink: &mut dyn OutcomeSink,
    ) -> Result<RoundOutcome, RoundError> {
        let outcome = self.engine.play_with_deck(deck, first, decisions, sink)?;
        self.record(outcome);
        Ok(outcome)
    }

    /// Runs rounds until the replay prompt declines, asking the selector
    /// for the first-acting side before each round.
    ///
    /// Returns the final `(player wins, computer wins)` tally.
    ///
    /// # Errors
    ///
    /// Stops at the first round that fails and propagates its error; wins
    /// recorded by earlier rounds are kept.
    pub fn run(
        &mut self,
        selector: &mut dyn FirstSideSelector,
        decisions: &mut dyn DecisionSource,
        sink: &mut dyn OutcomeSink,
        replay: &mut dyn ReplayPrompt,
    ) -> Result<(u32, u32), RoundError> {
        loop {
            let first = selector.choose_first_side();
            self.play_round(first, decisions, sink)?;
            if !replay.wants_another_round() {
                break;
            }
        }
        Ok(self.scoreboard.snapshot())
    }

    fn record(&mut self, outcome: RoundOutcome) {
        if let Some(winner) = outcome.winner() {
            self.scoreboard.record_win(winner);
        }
    }

    /// Returns the running score.
    #[must_use]
    pub const fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the underlying round engine.
    #[must_use]
    pub const fn engine(&self) -> &RoundEngine {
        &self.engine
    }
}
