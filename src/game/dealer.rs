use alloc::vec::Vec;

use log::trace;

use crate::error::ActionError;
use crate::hand::HandStatus;
use crate::options::DEALER_STANDS_AT;

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand according to the fixed rule.
    ///
    /// The dealer hits while below 17 and stands on anything from 17 to 21.
    /// A bust ends the turn from inside the hit.
    pub(super) fn dealer_play(&mut self) -> Result<(), ActionError> {
        while self.state == GameState::PlayerTurn
            && self.current_hand()?.total_value() < DEALER_STANDS_AT
        {
            let card = self.hit_current()?;
            trace!("dealer draws {card}");
        }

        if self.state == GameState::PlayerTurn && !self.current_hand()?.is_busted() {
            self.end_turn()?;
        }

        Ok(())
    }

    pub(super) fn end_round(&mut self) -> Result<(), ActionError> {
        self.set_score();
        self.determine_winner()?;
        self.state = GameState::RoundOver;
        Ok(())
    }

    /// Scores each seat with its hand total, or zero when busted.
    fn set_score(&mut self) {
        self.scores = self
            .players
            .iter()
            .map(|player| {
                let hand = player.hand();
                if hand.is_busted() {
                    0
                } else {
                    hand.total_value()
                }
            })
            .collect();
    }

    /// Marks the highest-scoring seats as winners and everyone else as losers.
    ///
    /// Ties for the highest score turn every tied hand into a draw, but the
    /// winners list keeps all of them.
    fn determine_winner(&mut self) -> Result<(), ActionError> {
        let best = self.scores.iter().copied().max().unwrap_or(0);
        let winners: Vec<usize> = self
            .scores
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score == best)
            .map(|(seat, _)| seat)
            .collect();
        let tie = winners.len() > 1;

        for (seat, player) in self.players.iter_mut().enumerate() {
            let outcome = match (winners.contains(&seat), tie) {
                (true, true) => HandStatus::Draw,
                (true, false) => HandStatus::Win,
                (false, _) => HandStatus::Loss,
            };
            player.hand_mut().settle(outcome)?;
        }

        self.winners = winners;
        Ok(())
    }
}
