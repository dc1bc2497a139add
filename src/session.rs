use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::action::{Action, Seat};
use crate::bot;
use crate::card::{Card, Suit};
use crate::error::GameError;
use crate::game;
use crate::state::{GameState, GameStatus};

/// Outcome of a human `play` command.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PlayOutcome {
    /// The card hit the discard pile and the turn passed.
    Played,
    /// An eight needs its suit: the presentation layer should show a suit
    /// chooser and either `play` the same card again with a suit or
    /// `cancel_suit_choice`. The card has not left the hand.
    SuitRequired(Card),
}

/// Permission to run one deferred AI step, pinned to the epoch it was
/// issued at. A ticket from before any later transition (a reset
/// included) is stale and applying it is a no-op.
#[derive(Copy, Clone, Debug)]
pub struct AiTicket {
    epoch: u64,
}

/// Result of redeeming an [`AiTicket`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AiOutcome {
    Acted(Action),
    Stale,
}

/// Builder for a [`Session`], allowing seeded RNG and deck injection for
/// deterministic games.
#[derive(Default)]
pub struct GameBuilder {
    seed: Option<u64>,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use the given deck verbatim (no shuffle) for the initial deal.
    /// Reshuffles during play still use the session RNG.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn build(self) -> Result<Session, GameError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = match self.deck {
            Some(deck) => game::deal_from(deck)?,
            None => game::deal(&mut rng),
        };
        Ok(Session {
            state,
            rng,
            epoch: 0,
        })
    }
}

/// The one mutable holder of game state.
///
/// Transitions themselves are pure functions over [`GameState`]; the
/// session applies them one at a time to its current snapshot and bumps an
/// epoch counter on every accepted change. The epoch is what makes the
/// deferred AI move safe: a presentation layer schedules the AI step after
/// a visible delay, and if anything else happened in between (most
/// importantly a reset) the stale step is discarded instead of applied.
///
/// Human commands always act as [`Seat::Player`]; the AI side only moves
/// through [`Session::run_ai`].
pub struct Session {
    state: GameState,
    rng: StdRng,
    epoch: u64,
}

impl Session {
    /// Deals a fresh entropy-seeded game.
    pub fn new() -> Self {
        let mut rng = StdRng::from_entropy();
        let state = game::deal(&mut rng);
        Self {
            state,
            rng,
            epoch: 0,
        }
    }

    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    /// The latest snapshot, for rendering. Callers never mutate it; every
    /// change goes through a command.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    fn commit(&mut self, next: GameState) {
        self.state = next;
        self.epoch += 1;
    }

    pub fn draw(&mut self) -> Result<(), GameError> {
        let next = game::draw(&self.state, Seat::Player, &mut self.rng)?;
        self.commit(next);
        Ok(())
    }

    /// Plays a card for the human. Pass `suit` up front for an eight, or
    /// leave it `None` to get [`PlayOutcome::SuitRequired`] back and
    /// resolve the choice with a second call.
    pub fn play(&mut self, card: Card, suit: Option<Suit>) -> Result<PlayOutcome, GameError> {
        let next = game::play(&self.state, Seat::Player, card, suit)?;
        let outcome = match next.pending_wild {
            Some(pending) => PlayOutcome::SuitRequired(pending),
            None => PlayOutcome::Played,
        };
        self.commit(next);
        Ok(outcome)
    }

    pub fn cancel_suit_choice(&mut self) -> Result<(), GameError> {
        let next = game::cancel_suit_choice(&self.state, Seat::Player)?;
        self.commit(next);
        Ok(())
    }

    pub fn skip(&mut self) -> Result<(), GameError> {
        let next = game::skip(&self.state, Seat::Player)?;
        self.commit(next);
        Ok(())
    }

    /// Discards the current game and deals a new one. Bumps the epoch, so
    /// any AI ticket issued before the reset becomes stale.
    pub fn reset(&mut self) {
        let state = game::deal(&mut self.rng);
        self.commit(state);
    }

    /// Issues a ticket when the game is running and it is the AI's turn.
    /// The presentation layer decides when to redeem it (typically after a
    /// short delay so the move is visible to the human).
    pub fn ai_ticket(&self) -> Option<AiTicket> {
        let due = self.state.status == GameStatus::Playing
            && self.state.current_player == Seat::Ai;
        due.then_some(AiTicket { epoch: self.epoch })
    }

    /// Runs one AI decision step. One step is one command: a turn where
    /// the AI draws first produces a fresh ticket for the follow-up play
    /// or skip.
    pub fn run_ai(&mut self, ticket: AiTicket) -> Result<AiOutcome, GameError> {
        if ticket.epoch != self.epoch {
            return Ok(AiOutcome::Stale);
        }
        let action = bot::choose_action(&self.state, Seat::Ai);
        let next = game::apply(&self.state, Seat::Ai, action, &mut self.rng)?;
        self.commit(next);
        Ok(AiOutcome::Acted(action))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
