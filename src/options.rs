//! Training configuration and fixed game-rule constants.

use crate::error::OptionsError;

/// Default number of training episodes.
pub const DEFAULT_EPISODES: u64 = 5_000_000;

/// Default exploration probability.
pub const DEFAULT_EPSILON: f64 = 0.1;

/// The agent always hits while its total is below this value.
pub const AUTO_HIT_BELOW: u8 = 11;

/// The dealer hits while its total is below this value.
pub const DEALER_STANDS_AT: u8 = 17;

/// Highest total that does not bust.
pub const BUST_THRESHOLD: u8 = 21;

/// Configuration options for a training run.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjrl::TrainingOptions;
///
/// let options = TrainingOptions::default()
///     .with_episodes(10_000)
///     .with_epsilon(0.05);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingOptions {
    /// Total number of episodes to play.
    pub episodes: u64,
    /// Probability of picking a uniformly random action, in `[0, 1]`.
    pub epsilon: f64,
}

impl Default for TrainingOptions {
    fn default() -> Self {
        Self {
            episodes: DEFAULT_EPISODES,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl TrainingOptions {
    /// Sets the number of episodes.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrl::TrainingOptions;
    ///
    /// let options = TrainingOptions::default().with_episodes(500);
    /// assert_eq!(options.episodes, 500);
    /// ```
    #[must_use]
    pub const fn with_episodes(mut self, episodes: u64) -> Self {
        self.episodes = episodes;
        self
    }

    /// Sets the exploration probability.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrl::TrainingOptions;
    ///
    /// let options = TrainingOptions::default().with_epsilon(0.2);
    /// assert_eq!(options.epsilon, 0.2);
    /// ```
    #[must_use]
    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Checks that the options describe a runnable training loop.
    ///
    /// # Errors
    ///
    /// Returns an error if epsilon is outside `[0, 1]` (or NaN) or the
    /// episode count is zero.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(OptionsError::EpsilonOutOfRange(self.epsilon));
        }
        if self.episodes == 0 {
            return Err(OptionsError::ZeroEpisodes);
        }
        Ok(())
    }
}
