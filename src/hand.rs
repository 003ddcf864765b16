//! Hand representation and status tracking.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::StatusError;
use crate::options::BUST_THRESHOLD;

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandStatus {
    /// Hand is in play.
    Valid,
    /// Hand total went over 21.
    Busted,
    /// Hand finished with the unique highest score.
    Win,
    /// Hand finished below the highest score.
    Loss,
    /// Hand tied for the highest score.
    Draw,
}

impl HandStatus {
    /// Returns the lowercase status name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Busted => "busted",
            Self::Win => "win",
            Self::Loss => "loss",
            Self::Draw => "draw",
        }
    }

    /// Returns whether the round has been settled for this hand.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Win | Self::Loss | Self::Draw)
    }

    const fn can_become(self, next: Self) -> bool {
        match self {
            Self::Valid => !matches!(next, Self::Valid),
            Self::Busted => matches!(next, Self::Loss | Self::Draw),
            Self::Win | Self::Loss | Self::Draw => false,
        }
    }
}

impl fmt::Display for HandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A player's hand.
///
/// Aces always count as 1, so the total is a plain sum of card values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Running sum of card values.
    total_value: u8,
    /// Current status of the hand.
    status: HandStatus,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total_value: 0,
            status: HandStatus::Valid,
        }
    }

    /// Adds a card to the hand.
    ///
    /// A hand that goes over 21 is marked [`HandStatus::Busted`].
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.total_value = self.total_value.saturating_add(card.value());

        if self.status == HandStatus::Valid && self.total_value > BUST_THRESHOLD {
            self.status = HandStatus::Busted;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the sum of the card values.
    #[must_use]
    pub const fn total_value(&self) -> u8 {
        self.total_value
    }

    /// Returns [`HandStatus::Busted`] if the total is over 21, otherwise
    /// [`HandStatus::Valid`].
    ///
    /// A two-card 21 gets no special treatment.
    #[must_use]
    pub const fn evaluate(&self) -> HandStatus {
        if self.is_busted() {
            HandStatus::Busted
        } else {
            HandStatus::Valid
        }
    }

    /// Returns whether the total is over 21.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.total_value > BUST_THRESHOLD
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Moves the hand to a later status.
    ///
    /// Allowed transitions are `Valid -> {Busted, Win, Loss, Draw}` and
    /// `Busted -> {Loss, Draw}`.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::Settled`] for any other transition.
    pub const fn settle(&mut self, status: HandStatus) -> Result<(), StatusError> {
        if !self.status.can_become(status) {
            return Err(StatusError::Settled {
                from: self.status,
                to: status,
            });
        }
        self.status = status;
        Ok(())
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
