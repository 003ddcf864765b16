//! Epsilon-greedy action selection.

use rand::Rng;

use crate::action::{ACTIONS, Action};
use crate::q_table::{Observation, QTable};

/// Explores with probability `epsilon`, otherwise exploits the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsilonGreedy {
    /// Probability of picking a uniformly random action.
    pub epsilon: f64,
}

impl EpsilonGreedy {
    /// Creates a policy with the given exploration probability.
    #[must_use]
    pub const fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Chooses an action for `observation`.
    ///
    /// With probability `epsilon` every action is equally likely; otherwise
    /// the greedy action from `q_table` is returned.
    pub fn choose_action<R: Rng + ?Sized>(
        &self,
        q_table: &QTable,
        observation: Observation,
        rng: &mut R,
    ) -> Action {
        if rng.random::<f64>() < self.epsilon {
            ACTIONS[rng.random_range(0..ACTIONS.len())]
        } else {
            q_table.greedy_action(observation)
        }
    }
}
