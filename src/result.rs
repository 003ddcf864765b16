//! Episode and training summaries.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::action::Action;
use crate::hand::HandStatus;
use crate::q_table::Observation;

/// Outcome of a single training episode.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeResult {
    /// The agent's final hand status.
    pub status: HandStatus,
    /// Terminal reward applied to every visited pair.
    pub reward: f64,
    /// State-action pairs the agent decided on, in order.
    pub visited: Vec<(Observation, Action)>,
    /// The agent's final hand total.
    pub agent_total: u8,
    /// The dealer's final hand total.
    pub dealer_total: u8,
}

/// Running tally over a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrainingStats {
    /// Episodes played.
    pub episodes: u64,
    /// Episodes the agent won.
    pub wins: u64,
    /// Episodes the agent lost.
    pub losses: u64,
    /// Episodes that ended in a draw.
    pub draws: u64,
}

impl TrainingStats {
    /// Counts one finished episode.
    pub const fn record(&mut self, status: HandStatus) {
        self.episodes += 1;
        match status {
            HandStatus::Win => self.wins += 1,
            HandStatus::Loss => self.losses += 1,
            _ => self.draws += 1,
        }
    }

    /// Returns the fraction of episodes won, or zero before any episode.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for episode counts"
    )]
    pub fn win_rate(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.wins as f64 / self.episodes as f64
        }
    }
}

impl fmt::Display for TrainingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "episodes: {}, wins: {}, losses: {}, draws: {} (win rate {:.4})",
            self.episodes,
            self.wins,
            self.losses,
            self.draws,
            self.win_rate()
        )
    }
}
