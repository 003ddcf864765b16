//! Tabular action-value estimates.

use alloc::vec::Vec;
use core::fmt;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::action::{ACTIONS, Action};
use crate::error::EpisodeError;
use crate::game::Game;

/// The reduced state the agent decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Observation {
    /// Sum of the agent's card values.
    pub agent_total: u8,
    /// Value of the dealer's first dealt card.
    pub dealer_card: u8,
}

impl Observation {
    /// Creates an observation.
    #[must_use]
    pub const fn new(agent_total: u8, dealer_card: u8) -> Self {
        Self {
            agent_total,
            dealer_card,
        }
    }

    /// Observes the agent's total and the dealer's up card.
    ///
    /// # Errors
    ///
    /// Returns [`EpisodeError::MissingUpCard`] if the dealer holds no cards.
    pub fn from_game(game: &Game) -> Result<Self, EpisodeError> {
        let up_card = game
            .dealer()
            .hand()
            .cards()
            .first()
            .ok_or(EpisodeError::MissingUpCard)?;
        Ok(Self::new(game.agent().hand().total_value(), up_card.value()))
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.agent_total, self.dealer_card)
    }
}

/// Running mean reward for one state-action pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActionValue {
    /// Average reward observed so far.
    pub mean: f64,
    /// Number of rewards folded into the mean.
    pub count: u64,
}

impl ActionValue {
    /// Folds one more reward into the running mean.
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for encounter counts"
    )]
    pub fn record(&mut self, reward: f64) {
        let count = self.count + 1;
        self.mean = (self.mean * self.count as f64 + reward) / count as f64;
        self.count = count;
    }
}

/// Average reward per (observation, action) pair.
///
/// Pairs that were never updated read as a zero mean with a zero count.
#[derive(Debug, Clone, Default)]
pub struct QTable {
    values: HashMap<(Observation, Action), ActionValue>,
}

impl QTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the estimate for a pair, defaulting to zero.
    #[must_use]
    pub fn get(&self, observation: Observation, action: Action) -> ActionValue {
        self.values
            .get(&(observation, action))
            .copied()
            .unwrap_or_default()
    }

    /// Returns the average reward for a pair.
    #[must_use]
    pub fn value(&self, observation: Observation, action: Action) -> f64 {
        self.get(observation, action).mean
    }

    /// Returns how often a pair has been updated.
    #[must_use]
    pub fn count(&self, observation: Observation, action: Action) -> u64 {
        self.get(observation, action).count
    }

    /// Folds a reward into a single pair.
    pub fn record(&mut self, observation: Observation, action: Action, reward: f64) {
        self.values
            .entry((observation, action))
            .or_default()
            .record(reward);
    }

    /// Applies the same reward to every pair visited in an episode.
    pub fn update(&mut self, pairs: &[(Observation, Action)], reward: f64) {
        for &(observation, action) in pairs {
            self.record(observation, action, reward);
        }
    }

    /// Returns the action with the highest average reward.
    ///
    /// Ties go to the action listed first in [`ACTIONS`], so an unseen state
    /// yields [`Action::Hit`].
    #[must_use]
    pub fn greedy_action(&self, observation: Observation) -> Action {
        let mut best = ACTIONS[0];
        let mut best_value = self.value(observation, best);
        for action in &ACTIONS[1..] {
            let value = self.value(observation, *action);
            if value > best_value {
                best = *action;
                best_value = value;
            }
        }
        best
    }

    /// Returns the greedy action for every observed state, sorted by state.
    #[must_use]
    pub fn greedy_policy(&self) -> Vec<(Observation, Action)> {
        let mut observations: Vec<Observation> =
            self.values.keys().map(|&(observation, _)| observation).collect();
        observations.sort_unstable();
        observations.dedup();
        observations
            .into_iter()
            .map(|observation| (observation, self.greedy_action(observation)))
            .collect()
    }

    /// Returns all entries sorted by observation, then action.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(Observation, Action, ActionValue)> {
        let mut entries: Vec<_> = self
            .values
            .iter()
            .map(|(&(observation, action), &value)| (observation, action, value))
            .collect();
        entries.sort_unstable_by_key(|&(observation, action, _)| (observation, action));
        entries
    }

    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Observation, Action, ActionValue)> + '_ {
        self.values
            .iter()
            .map(|(&(observation, action), &value)| (observation, action, value))
    }

    /// Returns the number of recorded pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether no pair has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for QTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (observation, action, value) in self.sorted_entries() {
            writeln!(
                f,
                "{observation} {action}: {:.4} (n={})",
                value.mean, value.count
            )?;
        }
        Ok(())
    }
}
