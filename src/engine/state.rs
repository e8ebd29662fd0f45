//! Round state types.

use crate::result::RoundOutcome;

/// One of the two participants in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human-decision side.
    Player,
    /// The automated-policy side.
    Computer,
}

impl Side {
    /// Returns the opposing side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }
}

/// State of the round machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Initial cards are being dealt.
    Dealing,
    /// The named side is being asked whether to draw.
    AwaitingTurn(Side),
    /// Win conditions are being re-checked after a card grant or stand.
    Evaluating,
    /// The round ended with the recorded outcome.
    Terminated(RoundOutcome),
}
