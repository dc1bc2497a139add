use rand::Rng;

use crate::action::{Action, Seat};
use crate::card::{Card, HAND_SIZE, Suit, full_deck, shuffled};
use crate::error::{GameError, InvalidAction};
use crate::rules;
use crate::state::{GameState, GameStatus};

/// Deals a fresh game from a shuffled full deck.
pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> GameState {
    deal_cards(shuffled(&full_deck(), rng))
}

/// Deals from an explicit deck, used as-is (top = last element). Lets
/// tests and experiments inject a known card order.
pub fn deal_from(deck: Vec<Card>) -> Result<GameState, GameError> {
    if deck.len() < 2 * HAND_SIZE + 1 {
        return Err(GameError::InvalidConfiguration(
            "deck does not contain enough cards to deal both hands and a starter",
        ));
    }
    Ok(deal_cards(deck))
}

fn deal_cards(mut deck: Vec<Card>) -> GameState {
    let mut player_hand = Vec::with_capacity(HAND_SIZE);
    let mut ai_hand = Vec::with_capacity(HAND_SIZE);
    for _ in 0..HAND_SIZE {
        if let Some(card) = deck.pop() {
            player_hand.push(card);
        }
    }
    for _ in 0..HAND_SIZE {
        if let Some(card) = deck.pop() {
            ai_hand.push(card);
        }
    }

    // Start the discard pile with the first non-eight so the opening top
    // card never demands a wild-suit choice. A full deck always has a
    // non-eight left at this point; the fallback covers injected decks.
    let starter_index = deck.iter().position(|card| !card.is_eight()).unwrap_or(0);
    let starter = deck.remove(starter_index);

    GameState {
        deck,
        player_hand,
        ai_hand,
        discard_pile: vec![starter],
        current_player: Seat::Player,
        wild_suit: None,
        pending_wild: None,
        status: GameStatus::Playing,
        last_action: String::from("New game dealt. Your turn."),
        has_drawn: false,
    }
}

fn ensure_turn(state: &GameState, seat: Seat) -> Result<(), GameError> {
    if state.status != GameStatus::Playing {
        return Err(GameError::NotInPlay);
    }
    if state.current_player != seat {
        return Err(GameError::NotYourTurn(seat));
    }
    Ok(())
}

/// Draws for the active player. Three shapes, per the deck state:
///
/// - deck has cards: the top card moves into the hand and `has_drawn` is
///   set; the turn does not pass;
/// - deck empty, discard pile has more than one card: the pile below the
///   top card is shuffled into a new deck. No card is consumed and the
///   turn does not pass; a subsequent draw takes from the new deck;
/// - deck empty, discard pile has one card or fewer: nothing can be drawn
///   and the turn passes to the other side.
pub fn draw<R: Rng + ?Sized>(
    state: &GameState,
    seat: Seat,
    rng: &mut R,
) -> Result<GameState, GameError> {
    ensure_turn(state, seat)?;
    if state.pending_wild.is_some() {
        return Err(InvalidAction::SuitChoicePending.into());
    }

    let mut next = state.clone();
    if next.deck.is_empty() {
        if next.discard_pile.len() <= 1 {
            next.current_player = seat.opponent();
            next.has_drawn = false;
            next.last_action = String::from("Draw pile empty, turn skipped.");
            return Ok(next);
        }
        let top = next.discard_pile[next.discard_pile.len() - 1];
        next.deck = shuffled(&next.discard_pile[..next.discard_pile.len() - 1], rng);
        next.discard_pile = vec![top];
        next.last_action = String::from("Reshuffled the discard pile into a new draw pile.");
        return Ok(next);
    }

    if let Some(card) = next.deck.pop() {
        match seat {
            Seat::Player => next.player_hand.push(card),
            Seat::Ai => next.ai_hand.push(card),
        }
        next.has_drawn = true;
        next.last_action = format!("{seat} drew a card.");
    }
    Ok(next)
}

/// Plays `card` from the seat's hand onto the discard pile.
///
/// Legality is re-validated here regardless of caller; the presentation
/// layer may offer cards optimistically and the bot's pre-filtering is not
/// trusted either. An eight without a `chosen_suit` does not move the
/// card: the returned state records it as the pending wild and waits for a
/// follow-up `play` with the same card and a suit (or a cancel). Declaring
/// a suit alongside a non-eight is rejected outright.
pub fn play(
    state: &GameState,
    seat: Seat,
    card: Card,
    chosen_suit: Option<Suit>,
) -> Result<GameState, GameError> {
    ensure_turn(state, seat)?;
    if let Some(pending) = state.pending_wild {
        if card != pending || chosen_suit.is_none() {
            return Err(InvalidAction::SuitChoicePending.into());
        }
    }
    if !state.hand(seat).contains(&card) {
        return Err(InvalidAction::CardNotInHand(card).into());
    }
    let top = state.top_card().ok_or(GameError::NotInPlay)?;
    if !rules::is_playable(card, top, state.wild_suit) {
        return Err(InvalidAction::NotPlayable(card).into());
    }
    if chosen_suit.is_some() && !card.is_eight() {
        return Err(InvalidAction::SuitNotAllowed.into());
    }

    let mut next = state.clone();
    if card.is_eight() && chosen_suit.is_none() {
        next.pending_wild = Some(card);
        next.last_action = format!("{seat} must choose a suit for {card}.");
        return Ok(next);
    }

    {
        let hand = match seat {
            Seat::Player => &mut next.player_hand,
            Seat::Ai => &mut next.ai_hand,
        };
        if let Some(position) = hand.iter().position(|c| *c == card) {
            hand.remove(position);
        }
    }
    next.discard_pile.push(card);
    // Some only for eights (checked above); any non-eight clears a
    // previously declared wild suit.
    next.wild_suit = chosen_suit;
    next.pending_wild = None;
    next.status = if next.hand(seat).is_empty() {
        match seat {
            Seat::Player => GameStatus::PlayerWon,
            Seat::Ai => GameStatus::AiWon,
        }
    } else {
        GameStatus::Playing
    };
    next.current_player = seat.opponent();
    next.has_drawn = false;
    next.last_action = match chosen_suit {
        Some(suit) => format!("{seat} played {card} (suit changed to {suit})."),
        None => format!("{seat} played {card}."),
    };
    Ok(next)
}

/// Passes the turn. Only valid once the active player has drawn this turn
/// and still holds no playable card; the engine checks both preconditions
/// rather than trusting the caller.
pub fn skip(state: &GameState, seat: Seat) -> Result<GameState, GameError> {
    ensure_turn(state, seat)?;
    if state.pending_wild.is_some() {
        return Err(InvalidAction::SuitChoicePending.into());
    }
    if !state.has_drawn {
        return Err(InvalidAction::MustDrawFirst.into());
    }
    if let Some(top) = state.top_card() {
        if rules::has_playable(state.hand(seat), top, state.wild_suit) {
            return Err(InvalidAction::PlayableCardInHand.into());
        }
    }

    let mut next = state.clone();
    next.current_player = seat.opponent();
    next.has_drawn = false;
    next.last_action = format!("{seat} skipped the turn.");
    Ok(next)
}

/// Abandons a pending wild-suit choice; the eight stays in hand and
/// normal play resumes.
pub fn cancel_suit_choice(state: &GameState, seat: Seat) -> Result<GameState, GameError> {
    ensure_turn(state, seat)?;
    if state.pending_wild.is_none() {
        return Err(InvalidAction::NoSuitChoicePending.into());
    }
    let mut next = state.clone();
    next.pending_wild = None;
    next.last_action = String::from("Suit choice cancelled.");
    Ok(next)
}

/// Applies one command for `seat`, dispatching to the transition above.
pub fn apply<R: Rng + ?Sized>(
    state: &GameState,
    seat: Seat,
    action: Action,
    rng: &mut R,
) -> Result<GameState, GameError> {
    match action {
        Action::Draw => draw(state, seat, rng),
        Action::Play { card, suit } => play(state, seat, card, suit),
        Action::Skip => skip(state, seat),
    }
}
