//! Monte Carlo control loop.

use alloc::vec::Vec;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::{DealError, EpisodeError, OptionsError};
use crate::game::{Game, GameState};
use crate::hand::HandStatus;
use crate::options::{AUTO_HIT_BELOW, TrainingOptions};
use crate::policy::EpsilonGreedy;
use crate::q_table::{Observation, QTable};
use crate::result::{EpisodeResult, TrainingStats};

/// Maps the agent's final status to the episode reward.
///
/// A win is worth `1`, a loss `-1` and anything else `0`.
#[must_use]
pub const fn reward_for(status: HandStatus) -> f64 {
    match status {
        HandStatus::Win => 1.0,
        HandStatus::Loss => -1.0,
        _ => 0.0,
    }
}

/// Plays episodes against the dealer and learns average rewards per
/// (observation, action) pair.
///
/// The trainer owns the only copy of the [`QTable`]; every episode reads it
/// to choose actions and writes it once the episode is over.
#[derive(Debug, Clone)]
pub struct Trainer {
    options: TrainingOptions,
    policy: EpsilonGreedy,
    q_table: QTable,
    stats: TrainingStats,
    rng: ChaCha8Rng,
}

impl Trainer {
    /// Creates a trainer with an empty table.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`TrainingOptions::validate`].
    pub fn new(options: TrainingOptions, seed: u64) -> Result<Self, OptionsError> {
        Self::with_q_table(options, seed, QTable::new())
    }

    /// Creates a trainer that continues from an existing table.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`TrainingOptions::validate`].
    pub fn with_q_table(
        options: TrainingOptions,
        seed: u64,
        q_table: QTable,
    ) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            options,
            policy: EpsilonGreedy::new(options.epsilon),
            q_table,
            stats: TrainingStats::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Returns the training options.
    #[must_use]
    pub const fn options(&self) -> &TrainingOptions {
        &self.options
    }

    /// Returns the learned table.
    #[must_use]
    pub const fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Consumes the trainer and returns the learned table.
    #[must_use]
    pub fn into_q_table(self) -> QTable {
        self.q_table
    }

    /// Returns the tally of episodes played so far.
    #[must_use]
    pub const fn stats(&self) -> &TrainingStats {
        &self.stats
    }

    /// Plays one episode on a freshly shuffled deck and updates the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the game reports an invariant violation.
    pub fn play_episode(&mut self) -> Result<EpisodeResult, EpisodeError> {
        let mut game = Game::new(Deck::new());
        game.run(&mut self.rng)?;
        self.play_dealt_episode(game)
    }

    /// Plays out a game whose opening cards are already dealt and updates the
    /// table.
    ///
    /// The agent hits without deciding while its total is below 11. From there
    /// every decision is recorded until the agent stands or busts; the dealer
    /// then plays and the round's reward is applied to all recorded pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the game was not dealt or reports an invariant
    /// violation.
    pub fn play_dealt_episode(&mut self, mut game: Game) -> Result<EpisodeResult, EpisodeError> {
        if game.state() != GameState::PlayerTurn {
            return Err(DealError::InvalidState.into());
        }

        let mut visited = Vec::new();

        while game.is_agent_turn() {
            while game.is_agent_turn() && game.agent().hand().total_value() < AUTO_HIT_BELOW {
                game.hit()?;
            }
            if !game.is_agent_turn() {
                break;
            }

            let observation = Observation::from_game(&game)?;
            let action = self
                .policy
                .choose_action(&self.q_table, observation, &mut self.rng);
            visited.push((observation, action));
            game.act(action)?;
        }

        let status = game.agent().hand().status();
        let reward = reward_for(status);
        self.q_table.update(&visited, reward);
        self.stats.record(status);

        debug!(
            "episode {}: {status} reward {reward} after {} decisions",
            self.stats.episodes,
            visited.len()
        );

        Ok(EpisodeResult {
            status,
            reward,
            visited,
            agent_total: game.agent().hand().total_value(),
            dealer_total: game.dealer().hand().total_value(),
        })
    }

    /// Plays the configured number of episodes.
    ///
    /// `on_episode` receives the 1-based episode number and its result after
    /// the table has been updated.
    ///
    /// # Errors
    ///
    /// Stops at the first episode that fails.
    pub fn train<F>(&mut self, mut on_episode: F) -> Result<&QTable, EpisodeError>
    where
        F: FnMut(u64, &EpisodeResult),
    {
        info!(
            "training for {} episodes with epsilon {}",
            self.options.episodes, self.options.epsilon
        );

        for episode in 1..=self.options.episodes {
            let result = self.play_episode()?;
            on_episode(episode, &result);
        }

        info!(
            "training done: {}, {} state-action pairs",
            self.stats,
            self.q_table.len()
        );

        Ok(&self.q_table)
    }
}
