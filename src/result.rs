//! Round outcome types.

use crate::engine::Side;

/// Terminal result of one round. Exactly one outcome ends each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player holds exactly two aces.
    PlayerWinsTwoAces,
    /// The computer holds exactly two aces.
    ComputerWinsTwoAces,
    /// The player's total is exactly 21.
    PlayerWins21,
    /// The computer's total is exactly 21.
    ComputerWins21,
    /// The player went over 21; the computer wins.
    PlayerBusts,
    /// The computer went over 21; the player wins.
    ComputerBusts,
    /// Both sides stood; the player had the higher total.
    PlayerWinsByPoints,
    /// Both sides stood; the computer had the higher total.
    ComputerWinsByPoints,
    /// Both sides stood on equal totals.
    Tie,
}

impl RoundOutcome {
    /// The side credited with the win, or `None` for a tie.
    ///
    /// A bust credits the opposite side.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::PlayerWinsTwoAces
            | Self::PlayerWins21
            | Self::ComputerBusts
            | Self::PlayerWinsByPoints => Some(Side::Player),
            Self::ComputerWinsTwoAces
            | Self::ComputerWins21
            | Self::PlayerBusts
            | Self::ComputerWinsByPoints => Some(Side::Computer),
            Self::Tie => None,
        }
    }
}

/// What the outcome sink receives when a round terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    /// The terminal outcome.
    pub outcome: RoundOutcome,
    /// The player's final hand total.
    pub player_total: u8,
    /// The computer's final hand total.
    pub computer_total: u8,
}
