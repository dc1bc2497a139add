use serde::{Deserialize, Serialize};

use crate::action::Seat;
use crate::card::{Card, Suit};

/// Status of the entire game. The won states are terminal: no further
/// transition is accepted until a fresh deal replaces the state.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    Dealing,
    Playing,
    PlayerWon,
    AiWon,
}

/// The single authoritative game snapshot.
///
/// This is a plain value: transitions in [`crate::game`] take a reference
/// to the previous snapshot and return a new one, so every state a test or
/// a presentation layer holds stays internally consistent. Only the
/// [`crate::session::Session`] shell keeps a mutable current-value cell.
///
/// Pile convention: the top of `deck` and of `discard_pile` is the last
/// element. `discard_pile` is never empty once the deal has finished.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub deck: Vec<Card>,
    pub player_hand: Vec<Card>,
    pub ai_hand: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub current_player: Seat,
    /// Suit demanded by the most recently played eight, overriding the top
    /// card's suit for legality. Cleared by any non-eight play.
    pub wild_suit: Option<Suit>,
    /// Eight awaiting its suit choice. While set, every command other than
    /// resolving or cancelling the choice is rejected; the card has not
    /// left the hand yet.
    pub pending_wild: Option<Card>,
    pub status: GameStatus,
    /// Human-readable description of the most recent transition, for a
    /// status line.
    pub last_action: String,
    /// Whether the active player has already drawn this turn; gates the
    /// skip action.
    pub has_drawn: bool,
}

impl GameState {
    /// The discard-pile card that determines legality (unless a wild suit
    /// overrides its suit). `None` only before the deal has finished.
    pub fn top_card(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    /// Suit a non-eight must match, when rank does not: the active wild
    /// suit, or the top card's own suit.
    pub fn required_suit(&self) -> Option<Suit> {
        self.wild_suit.or_else(|| self.top_card().map(|c| c.suit))
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        match seat {
            Seat::Player => &self.player_hand,
            Seat::Ai => &self.ai_hand,
        }
    }

    /// Total cards across deck, hands and discard pile. 52 in every
    /// reachable state.
    pub fn card_total(&self) -> usize {
        self.deck.len()
            + self.player_hand.len()
            + self.ai_hand.len()
            + self.discard_pile.len()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::PlayerWon | GameStatus::AiWon)
    }

    pub fn winner(&self) -> Option<Seat> {
        match self.status {
            GameStatus::PlayerWon => Some(Seat::Player),
            GameStatus::AiWon => Some(Seat::Ai),
            _ => None,
        }
    }
}

impl Default for GameState {
    /// The empty pre-deal state shown while a game is being set up.
    fn default() -> Self {
        Self {
            deck: Vec::new(),
            player_hand: Vec::new(),
            ai_hand: Vec::new(),
            discard_pile: Vec::new(),
            current_player: Seat::Player,
            wild_suit: None,
            pending_wild: None,
            status: GameStatus::Dealing,
            last_action: String::from("Setting up the game..."),
            has_drawn: false,
        }
    }
}
