//! A single 52-card deck dealt from the front.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANKS, SUITS};
use crate::error::DealError;
use crate::player::Player;

/// An ordered deck of cards.
///
/// Cards are dealt from the front; a dealt card never returns to the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck in rank-major order (`A♣ A♦ A♥ A♠ 2♣ ...`).
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for rank in RANKS {
            for suit in SUITS {
                cards.push_back(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck that deals the given cards in order.
    ///
    /// Useful for replaying a fixed sequence of draws.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Randomly permutes the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain.
    pub fn deal_card(&mut self) -> Result<Card, DealError> {
        self.cards.pop_front().ok_or(DealError::EmptyDeck)
    }

    /// Deals two cards to each player, one player at a time, in order.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if the deck runs out.
    pub fn deal_initial_cards(&mut self, players: &mut [Player]) -> Result<(), DealError> {
        for player in players {
            for _ in 0..2 {
                let card = self.deal_card()?;
                player.hand_mut().add_card(card);
            }
        }
        Ok(())
    }

    /// Returns the remaining cards, front first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
