use thiserror::Error;

use crate::action::Seat;
use crate::card::Card;

/// Errors that can occur when applying a command to the game state.
/// Rejections never mutate state; the caller keeps the previous snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("the game is not in play")]
    NotInPlay,
    #[error("not the acting seat's turn")]
    NotYourTurn(Seat),
    #[error("invalid action: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Details of commands that are well-formed but not currently allowed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("card {0} is not in the active player's hand")]
    CardNotInHand(Card),
    #[error("card {0} cannot be played on the current top card")]
    NotPlayable(Card),
    #[error("a suit may only be declared when playing an eight")]
    SuitNotAllowed,
    #[error("a suit must be chosen for the pending eight first")]
    SuitChoicePending,
    #[error("no suit choice is pending")]
    NoSuitChoicePending,
    #[error("the active player must draw before skipping")]
    MustDrawFirst,
    #[error("a playable card is in hand; skipping is not allowed")]
    PlayableCardInHand,
}
