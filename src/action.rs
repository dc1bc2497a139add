use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::{Card, Suit};

/// One of the two sides of the table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Player,
    Ai,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self {
            Seat::Player => Seat::Ai,
            Seat::Ai => Seat::Player,
        }
    }

    /// Short label used in action log lines.
    pub fn label(self) -> &'static str {
        match self {
            Seat::Player => "You",
            Seat::Ai => "The AI",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single command against the engine. `suit` accompanies a played eight
/// to declare the new required suit; the AI always supplies it up front,
/// the human path may omit it and resolve the choice in a follow-up play.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Draw,
    Play { card: Card, suit: Option<Suit> },
    Skip,
}
