use crate::action::Action;
use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        if self.turn >= self.players.len() {
            return Err(ActionError::TurnOutOfRange(self.turn));
        }
        Ok(())
    }

    pub(super) fn current_hand(&self) -> Result<&Hand, ActionError> {
        self.players
            .get(self.turn)
            .map(crate::player::Player::hand)
            .ok_or(ActionError::TurnOutOfRange(self.turn))
    }

    /// Draws a card for the acting player and ends the turn on a bust.
    pub(super) fn hit_current(&mut self) -> Result<Card, ActionError> {
        let card = self.deck.deal_card()?;
        let player = self
            .players
            .get_mut(self.turn)
            .ok_or(ActionError::TurnOutOfRange(self.turn))?;
        let hand = player.hand_mut();
        hand.add_card(card);

        if hand.is_busted() {
            self.end_turn()?;
        }

        Ok(card)
    }

    /// Ends the acting player's turn.
    ///
    /// After the last player the round is scored. Otherwise the turn passes on
    /// and the next player plays the dealer's fixed policy.
    pub(super) fn end_turn(&mut self) -> Result<(), ActionError> {
        if self.turn + 1 >= self.players.len() {
            self.end_round()
        } else {
            self.turn += 1;
            self.dealer_play()
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the turn immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the turn
    /// index is corrupt, or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;
        self.hit_current()
    }

    /// Player action: Stand (end the turn without drawing).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the turn
    /// index is corrupt.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.end_turn()
    }

    /// Performs `action` for the acting player.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying [`hit`](Self::hit) or
    /// [`stand`](Self::stand).
    pub fn act(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::Hit => self.hit().map(|_| ()),
            Action::Stand => self.stand(),
        }
    }
}
