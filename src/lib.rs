//! Crazy Eights engine for a human-versus-computer game.
//!
//! The game state is an immutable snapshot ([`GameState`]) and every rule
//! of the game lives in a pure transition function over it ([`game`]).
//! [`Session`] is the single mutable shell a presentation layer talks to:
//! it holds the latest snapshot, the RNG, and the epoch counter that keeps
//! deferred AI moves from being applied to superseded state. The computer
//! opponent is the deterministic policy in [`bot`].

pub mod action;
pub mod bot;
pub mod card;
pub mod error;
pub mod game;
pub mod rules;
pub mod session;
pub mod state;
pub mod visualize;

pub use crate::action::{Action, Seat};
pub use crate::card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit};
pub use crate::error::{GameError, InvalidAction};
pub use crate::session::{AiOutcome, AiTicket, GameBuilder, PlayOutcome, Session};
pub use crate::state::{GameState, GameStatus};
pub use crate::visualize::{VisualOptions, render_state, render_state_with_options};
