//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Players are seated but no cards have been dealt.
    WaitingForDeal,
    /// The player at the current turn index is acting.
    PlayerTurn,
    /// Scores and statuses are final.
    RoundOver,
}
