//! A tabular Monte Carlo control agent that learns to play blackjack, with
//! optional `no_std` support.
//!
//! The crate has two halves. The card-game simulation ([`Deck`], [`Hand`],
//! [`Player`], [`Game`]) plays one agent against a fixed-rule dealer. The
//! [`Trainer`] drives episodes of that game, chooses the agent's actions with
//! an [`EpsilonGreedy`] policy and folds every episode's outcome into a
//! [`QTable`] of running average rewards.
//!
//! # Example
//!
//! ```
//! use bjrl::{Trainer, TrainingOptions};
//!
//! let options = TrainingOptions::default().with_episodes(1_000);
//! let mut trainer = Trainer::new(options, 42).unwrap();
//! trainer.train(|_, _| {}).unwrap();
//! assert_eq!(trainer.stats().episodes, 1_000);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod policy;
pub mod q_table;
pub mod result;
pub mod trainer;

// Re-export main types
pub use action::{ACTIONS, Action};
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, DealError, EpisodeError, OptionsError, ParseActionError, StatusError,
};
pub use game::{AGENT, DEALER, Game, GameState};
pub use hand::{Hand, HandStatus};
pub use options::TrainingOptions;
pub use player::Player;
pub use policy::EpsilonGreedy;
pub use q_table::{ActionValue, Observation, QTable};
pub use result::{EpisodeResult, TrainingStats};
pub use trainer::Trainer;
