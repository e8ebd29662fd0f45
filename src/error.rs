//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Draw attempted on a depleted deck.
    #[error("draw attempted on an empty deck")]
    EmptyDeck,
}

/// Errors that can occur while a round is being played.
///
/// Neither error is retried: both propagate to the session boundary, which
/// decides whether to abort the round or the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The deck ran out of cards mid-round.
    ///
    /// Unreachable under correct rules: 36 cards and the 21-point ceiling
    /// bound the cards drawable in one round.
    #[error("draw attempted on an empty deck")]
    EmptyDeck,
    /// A decision source returned a value outside the draw/stand domain.
    #[error("decision source returned a value outside the draw/stand domain")]
    InvalidDecision,
}

impl From<DeckError> for RoundError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::EmptyDeck => Self::EmptyDeck,
        }
    }
}
