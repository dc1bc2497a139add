use crate::card::{Card, Suit};

/// Whether `card` may be played on `top`, honoring an active wild suit.
///
/// Eights are always playable. Any other card must match either the
/// required suit (the declared wild suit when one is active, the top
/// card's suit otherwise) or the top card's rank. Pure; the same check is
/// used by the engine's validation, the skip precondition, and the bot.
pub fn is_playable(card: Card, top: Card, wild_suit: Option<Suit>) -> bool {
    if card.is_eight() {
        return true;
    }
    let required = wild_suit.unwrap_or(top.suit);
    card.suit == required || card.rank == top.rank
}

/// Cards in `hand` that are currently playable, in hand order.
pub fn playable_cards(hand: &[Card], top: Card, wild_suit: Option<Suit>) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|card| is_playable(*card, top, wild_suit))
        .collect()
}

/// True when at least one card in `hand` is playable.
pub fn has_playable(hand: &[Card], top: Card, wild_suit: Option<Suit>) -> bool {
    hand.iter()
        .any(|card| is_playable(*card, top, wild_suit))
}
