use std::fmt::Write;

use crate::action::Seat;
use crate::rules;
use crate::state::{GameState, GameStatus};

/// Customize state rendering for CLI output.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisualOptions {
    /// Show the AI's cards instead of just their count. Useful for
    /// debugging and self-play runs.
    pub reveal_ai: bool,
}

pub fn render_state(state: &GameState) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameState, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match state.status {
        GameStatus::Dealing => "Dealing",
        GameStatus::Playing => match state.current_player {
            Seat::Player => "Playing (your turn)",
            Seat::Ai => "Playing (AI's turn)",
        },
        GameStatus::PlayerWon => "You won!",
        GameStatus::AiWon => "The AI won.",
    };
    let _ = writeln!(out, "Status: {status}");
    let _ = writeln!(out, "Last action: {}", state.last_action);

    if options.reveal_ai {
        let cards: Vec<String> = state.ai_hand.iter().map(|c| c.to_string()).collect();
        let _ = writeln!(out, "AI hand: {}", cards.join(" "));
    } else {
        let _ = writeln!(out, "AI hand: {} cards", state.ai_hand.len());
    }

    match state.top_card() {
        Some(top) => {
            let wild = match state.wild_suit {
                Some(suit) => format!(" (wild suit: {suit})"),
                None => String::new(),
            };
            let _ = writeln!(
                out,
                "Draw pile: {} cards | Top card: {top}{wild}",
                state.deck.len()
            );
        }
        None => {
            let _ = writeln!(out, "Draw pile: {} cards", state.deck.len());
        }
    }

    if let Some(pending) = state.pending_wild {
        let _ = writeln!(out, "Choose a suit for {pending}.");
    }

    let _ = writeln!(out, "Your hand:");
    for (index, card) in state.player_hand.iter().enumerate() {
        let marker = match state.top_card() {
            Some(top) if rules::is_playable(*card, top, state.wild_suit) => "*",
            _ => " ",
        };
        let _ = writeln!(out, "  [{index}] {card}{marker}");
    }
    out
}
