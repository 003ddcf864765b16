//! The agent's action space.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseActionError;

/// A move available to the acting player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// End the turn without drawing.
    Stand,
}

/// The full action set, in tie-breaking order.
pub const ACTIONS: [Action; 2] = [Action::Hit, Action::Stand];

impl Action {
    /// Returns the lowercase action name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hit" => Ok(Self::Hit),
            "stand" => Ok(Self::Stand),
            other => Err(ParseActionError(other.to_string())),
        }
    }
}
