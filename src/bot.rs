//! Rule-based opponent that plays "sensible" moves without search.
//!
//! In plain English:
//! - Play any legal non-eight before spending an eight; eights are the only
//!   always-playable cards, so they are held back as insurance.
//! - When an eight must be played, declare the suit the rest of the hand
//!   holds most of, to maximize follow-up options.
//! - With no legal card, draw once, then pass the turn.
//!
//! The policy is a deterministic function of the current snapshot; it keeps
//! no memory between calls. It works for either seat so self-play runs can
//! drive both sides with it.

use crate::action::{Action, Seat};
use crate::card::{Card, Suit};
use crate::rules;
use crate::state::GameState;

/// Picks the seat's next move against the current snapshot.
///
/// Eights are always submitted together with their suit choice, so the
/// bot never enters the engine's pending-suit mode.
pub fn choose_action(state: &GameState, seat: Seat) -> Action {
    let hand = state.hand(seat);
    let Some(top) = state.top_card() else {
        // Pre-deal snapshot; nothing sensible to do but draw.
        return Action::Draw;
    };

    let playable = rules::playable_cards(hand, top, state.wild_suit);
    let choice = playable
        .iter()
        .find(|card| !card.is_eight())
        .or_else(|| playable.first());
    if let Some(&card) = choice {
        let suit = card.is_eight().then(|| best_wild_suit(hand, card));
        return Action::Play { card, suit };
    }

    if state.has_drawn { Action::Skip } else { Action::Draw }
}

/// Suit to declare when playing the eight `played`: the most common suit
/// among the rest of the hand. Ties go to the first suit reaching the
/// maximum in [`Suit::ALL`] order (hearts, diamonds, clubs, spades).
pub fn best_wild_suit(hand: &[Card], played: Card) -> Suit {
    let mut counts = [0usize; Suit::ALL.len()];
    for card in hand.iter().filter(|card| **card != played) {
        counts[card.suit as usize] += 1;
    }
    let mut best = Suit::Hearts;
    for suit in Suit::ALL {
        if counts[suit as usize] > counts[best as usize] {
            best = suit;
        }
    }
    best
}
