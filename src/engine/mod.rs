//! Round engine and state machine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::decision::{DecisionSource, OutcomeSink, TurnDecision};
use crate::error::RoundError;
use crate::hand::Hand;
use crate::result::{RoundOutcome, RoundReport};

pub mod policy;
pub mod state;

pub use state::{RoundState, Side};

/// Winning hand total.
pub const WIN_TARGET: u8 = 21;

/// Drives one round from deal to outcome.
///
/// The engine exclusively owns the deck and both hands while a round is in
/// progress. A fresh deck is generated and shuffled at every round start;
/// hands are cleared before dealing. Draw decisions for the player side
/// come from a [`DecisionSource`]; the computer side follows the fixed
/// draw-below-17 policy.
///
/// # Example
///
/// ```no_run
/// use twentyone::{RoundEngine, Side, TurnDecision};
///
/// let mut engine = RoundEngine::new(42);
/// let mut stand = |_: &twentyone::Hand| Some(TurnDecision::Stand);
/// let outcome = engine.play_round(Side::Player, &mut stand, &mut ());
/// let _ = outcome;
/// ```
pub struct RoundEngine {
    deck: Deck,
    player: Hand,
    computer: Hand,
    state: RoundState,
    rng: ChaCha8Rng,
}

impl RoundEngine {
    /// Creates a new engine with the given shuffle seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            deck: Deck::new(),
            player: Hand::new(),
            computer: Hand::new(),
            state: RoundState::Dealing,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Plays one full round with a freshly generated and shuffled deck.
    ///
    /// Which side acts first is decided externally and passed in; the deal
    /// gives that side its two cards before the other side's two.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::EmptyDeck`] if the deck is exhausted mid-round
    /// (unreachable under correct rules) and
    /// [`RoundError::InvalidDecision`] if the decision source yields a
    /// value outside the draw/stand domain.
    pub fn play_round(
        &mut self,
        first: Side,
        decisions: &mut dyn DecisionSource,
        sink: &mut dyn OutcomeSink,
    ) -> Result<RoundOutcome, RoundError> {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        self.play_with_deck(deck, first, decisions, sink)
    }

    /// Plays one round drawing from `deck` in its current order.
    ///
    /// Skips generation and shuffling, so a stacked deck produces a fully
    /// deterministic round.
    ///
    /// # Errors
    ///
    /// Same contract as [`play_round`](Self::play_round); a short deck makes
    /// [`RoundError::EmptyDeck`] reachable.
    pub fn play_with_deck(
        &mut self,
        deck: Deck,
        first: Side,
        decisions: &mut dyn DecisionSource,
        sink: &mut dyn OutcomeSink,
    ) -> Result<RoundOutcome, RoundError> {
        self.deck = deck;
        self.deal(first)?;

        if let Some(outcome) = self.evaluate() {
            return Ok(self.finish(outcome, sink));
        }

        let mut side = first;
        loop {
            self.state = RoundState::AwaitingTurn(side);
            match side {
                Side::Player => {
                    let decision = decisions
                        .decide_draw(&self.player)
                        .ok_or(RoundError::InvalidDecision)?;
                    if decision == TurnDecision::Draw {
                        let card = self.deck.draw()?;
                        self.player.add_card(card);
                    }
                    if let Some(outcome) = self.evaluate() {
                        return Ok(self.finish(outcome, sink));
                    }
                }
                Side::Computer => {
                    if policy::should_draw(self.computer.total_points()) {
                        let card = self.deck.draw()?;
                        self.computer.add_card(card);
                        sink.computer_drew(&self.computer);
                        if let Some(outcome) = self.evaluate() {
                            return Ok(self.finish(outcome, sink));
                        }
                    } else {
                        sink.computer_stood(&self.computer);
                        // Bust is checked before the point comparison.
                        let outcome = self
                            .evaluate()
                            .unwrap_or_else(|| self.compare_totals());
                        return Ok(self.finish(outcome, sink));
                    }
                }
            }
            side = side.other();
        }
    }

    /// Clears both hands and deals two cards to the first-acting side, then
    /// two to the other.
    fn deal(&mut self, first: Side) -> Result<(), RoundError> {
        self.state = RoundState::Dealing;
        self.player.reset();
        self.computer.reset();

        for side in [first, first.other()] {
            for _ in 0..2 {
                let card = self.deck.draw()?;
                self.hand_mut(side).add_card(card);
            }
        }

        Ok(())
    }

    /// Re-checks win conditions in fixed priority order.
    ///
    /// Two aces outrank an exact 21, which outranks a bust; the player's
    /// hand is checked before the computer's at every tier, independent of
    /// whose turn it is.
    fn evaluate(&mut self) -> Option<RoundOutcome> {
        self.state = RoundState::Evaluating;

        if self.player.has_two_aces() {
            return Some(RoundOutcome::PlayerWinsTwoAces);
        }
        if self.computer.has_two_aces() {
            return Some(RoundOutcome::ComputerWinsTwoAces);
        }
        if self.player.total_points() == WIN_TARGET {
            return Some(RoundOutcome::PlayerWins21);
        }
        if self.computer.total_points() == WIN_TARGET {
            return Some(RoundOutcome::ComputerWins21);
        }
        if self.player.total_points() > WIN_TARGET {
            return Some(RoundOutcome::PlayerBusts);
        }
        if self.computer.total_points() > WIN_TARGET {
            return Some(RoundOutcome::ComputerBusts);
        }
        None
    }

    /// Final comparison after the computer stands: higher total wins, equal
    /// totals tie.
    fn compare_totals(&self) -> RoundOutcome {
        let player = self.player.total_points();
        let computer = self.computer.total_points();
        match player.cmp(&computer) {
            core::cmp::Ordering::Greater => RoundOutcome::PlayerWinsByPoints,
            core::cmp::Ordering::Less => RoundOutcome::ComputerWinsByPoints,
            core::cmp::Ordering::Equal => RoundOutcome::Tie,
        }
    }

    /// Records the terminal state and reports it to the sink.
    fn finish(&mut self, outcome: RoundOutcome, sink: &mut dyn OutcomeSink) -> RoundOutcome {
        self.state = RoundState::Terminated(outcome);
        sink.round_finished(&RoundReport {
            outcome,
            player_total: self.player.total_points(),
            computer_total: self.computer.total_points(),
        });
        outcome
    }

    fn hand_mut(&mut self, side: Side) -> &mut Hand {
        match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        }
    }

    /// Returns the current state of the round machine.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the computer's hand.
    #[must_use]
    pub const fn computer_hand(&self) -> &Hand {
        &self.computer
    }
}
