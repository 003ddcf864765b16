//! Error types for game and training operations.

use alloc::string::String;

use thiserror::Error;

use crate::hand::HandStatus;

/// Errors that can occur while dealing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The deck has no cards left.
    #[error("the deck is empty")]
    EmptyDeck,
}

/// Errors that can occur when a hand status changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatusError {
    /// The hand cannot move from its current status to the requested one.
    #[error("hand status cannot change from {from} to {to}")]
    Settled {
        /// Current status.
        from: HandStatus,
        /// Requested status.
        to: HandStatus,
    },
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The turn index points past the last player.
    #[error("turn index {0} is out of range")]
    TurnOutOfRange(usize),
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
    /// A hand status transition was rejected.
    #[error(transparent)]
    Status(#[from] StatusError),
}

impl From<DealError> for ActionError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::InvalidState => Self::InvalidState,
            DealError::EmptyDeck => Self::NoCards,
        }
    }
}

/// Error returned when parsing an action name other than `hit` or `stand`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action `{0}`, expected `hit` or `stand`")]
pub struct ParseActionError(pub String);

/// Errors that can occur when validating training options.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OptionsError {
    /// Epsilon must lie in `[0, 1]`.
    #[error("epsilon {0} is outside [0, 1]")]
    EpsilonOutOfRange(f64),
    /// At least one episode is required.
    #[error("episode count must be positive")]
    ZeroEpisodes,
}

/// Errors that can abort a training episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EpisodeError {
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer has no visible card to observe.
    #[error("dealer has no visible card")]
    MissingUpCard,
}
