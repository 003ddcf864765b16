//! Game engine and turn sequencing.

use alloc::vec::Vec;

use rand::Rng;

use crate::deck::Deck;
use crate::error::DealError;
use crate::player::Player;

mod actions;
mod dealer;
pub mod state;

pub use state::GameState;

/// Seat index of the learning agent.
pub const AGENT: usize = 0;

/// Seat index of the dealer.
pub const DEALER: usize = 1;

/// One round of blackjack between the agent and a fixed-rule dealer.
///
/// The game owns the deck and both players. The agent acts first; once its
/// turn ends the dealer plays out its hand automatically and the round is
/// scored.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to deal.
    deck: Deck,
    /// Agent then dealer.
    players: Vec<Player>,
    /// Index of the acting player.
    turn: usize,
    /// Current game state.
    state: GameState,
    /// Final score per seat, filled at round end.
    scores: Vec<u8>,
    /// Seats holding the highest score, recorded before ties become draws.
    winners: Vec<usize>,
}

impl Game {
    /// Creates a game with players named `Agent` and `Dealer`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrl::{Deck, Game, GameState};
    ///
    /// let game = Game::new(Deck::new());
    /// assert_eq!(game.state(), GameState::WaitingForDeal);
    /// assert_eq!(game.dealer().name(), "Dealer");
    /// ```
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self::with_names("Agent", "Dealer", deck)
    }

    /// Creates a game with custom player names.
    #[must_use]
    pub fn with_names(agent: &str, dealer: &str, deck: Deck) -> Self {
        Self {
            deck,
            players: alloc::vec![Player::new(agent), Player::new(dealer)],
            turn: AGENT,
            state: GameState::WaitingForDeal,
            scores: Vec::new(),
            winners: Vec::new(),
        }
    }

    /// Shuffles the deck and deals the opening cards.
    ///
    /// # Errors
    ///
    /// Returns an error if cards were already dealt or the deck runs out.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DealError> {
        if self.state != GameState::WaitingForDeal {
            return Err(DealError::InvalidState);
        }
        self.deck.shuffle(rng);
        self.deal()
    }

    /// Deals two cards to each player in seat order without shuffling.
    ///
    /// # Errors
    ///
    /// Returns an error if cards were already dealt or the deck runs out.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::WaitingForDeal {
            return Err(DealError::InvalidState);
        }
        self.deck.deal_initial_cards(&mut self.players)?;
        self.state = GameState::PlayerTurn;
        Ok(())
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the index of the acting player.
    ///
    /// The index stays on the last player once the round is over.
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Returns whether the agent is the acting player.
    #[must_use]
    pub fn is_agent_turn(&self) -> bool {
        self.state == GameState::PlayerTurn && self.turn == AGENT
    }

    /// Returns all players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the learning agent.
    #[must_use]
    pub fn agent(&self) -> &Player {
        &self.players[AGENT]
    }

    /// Returns the dealer.
    #[must_use]
    pub fn dealer(&self) -> &Player {
        &self.players[DEALER]
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the final score per seat, or an empty slice before round end.
    #[must_use]
    pub fn scores(&self) -> &[u8] {
        &self.scores
    }

    /// Returns the seats that reached the highest score.
    ///
    /// On a tie this still lists every tied seat even though their hands are
    /// marked [`HandStatus::Draw`](crate::HandStatus::Draw).
    #[must_use]
    pub fn winners(&self) -> &[usize] {
        &self.winners
    }
}
