use eightsbot::card::{Card, Rank, Suit};
use eightsbot::state::{GameState, GameStatus};
use eightsbot::{Action, Seat, bot};

fn c(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn ai_turn(ai_hand: Vec<Card>, top: Card, wild_suit: Option<Suit>, has_drawn: bool) -> GameState {
    GameState {
        deck: vec![c(Suit::Clubs, Rank::King)],
        player_hand: vec![c(Suit::Clubs, Rank::Queen)],
        ai_hand,
        discard_pile: vec![top],
        current_player: Seat::Ai,
        wild_suit,
        pending_wild: None,
        status: GameStatus::Playing,
        last_action: String::new(),
        has_drawn,
    }
}

#[test]
fn prefers_a_non_eight_over_an_eight() {
    // 3♥ matches the top rank, 8♠ is always legal, 5♥ is dead. The eight
    // must be held back.
    let state = ai_turn(
        vec![
            c(Suit::Hearts, Rank::Three),
            c(Suit::Spades, Rank::Eight),
            c(Suit::Hearts, Rank::Five),
        ],
        c(Suit::Diamonds, Rank::Three),
        None,
        false,
    );
    assert_eq!(
        bot::choose_action(&state, Seat::Ai),
        Action::Play {
            card: c(Suit::Hearts, Rank::Three),
            suit: None,
        }
    );
}

#[test]
fn plays_the_eight_when_nothing_else_is_legal() {
    // Remaining hand after the eight: two hearts, one club.
    let state = ai_turn(
        vec![
            c(Suit::Spades, Rank::Eight),
            c(Suit::Hearts, Rank::Four),
            c(Suit::Hearts, Rank::Nine),
            c(Suit::Clubs, Rank::Two),
        ],
        c(Suit::Diamonds, Rank::Queen),
        None,
        false,
    );
    assert_eq!(
        bot::choose_action(&state, Seat::Ai),
        Action::Play {
            card: c(Suit::Spades, Rank::Eight),
            suit: Some(Suit::Hearts),
        }
    );
}

#[test]
fn wild_suit_choice_follows_the_hand_majority() {
    let hand = vec![
        c(Suit::Spades, Rank::Eight),
        c(Suit::Diamonds, Rank::Four),
        c(Suit::Diamonds, Rank::Nine),
        c(Suit::Clubs, Rank::Two),
    ];
    assert_eq!(
        bot::best_wild_suit(&hand, c(Suit::Spades, Rank::Eight)),
        Suit::Diamonds
    );
}

#[test]
fn wild_suit_ties_break_in_enumeration_order() {
    // One club, one spade: clubs comes first in hearts/diamonds/clubs/
    // spades order.
    let hand = vec![
        c(Suit::Spades, Rank::Eight),
        c(Suit::Clubs, Rank::Four),
        c(Suit::Spades, Rank::Nine),
    ];
    assert_eq!(
        bot::best_wild_suit(&hand, c(Suit::Spades, Rank::Eight)),
        Suit::Clubs
    );
}

#[test]
fn wild_suit_of_an_empty_remainder_defaults_to_hearts() {
    let hand = vec![c(Suit::Spades, Rank::Eight)];
    assert_eq!(
        bot::best_wild_suit(&hand, c(Suit::Spades, Rank::Eight)),
        Suit::Hearts
    );
}

#[test]
fn draws_when_stuck_and_not_yet_drawn() {
    let state = ai_turn(
        vec![c(Suit::Hearts, Rank::Four)],
        c(Suit::Spades, Rank::Nine),
        None,
        false,
    );
    assert_eq!(bot::choose_action(&state, Seat::Ai), Action::Draw);
}

#[test]
fn skips_when_stuck_after_drawing() {
    let state = ai_turn(
        vec![c(Suit::Hearts, Rank::Four)],
        c(Suit::Spades, Rank::Nine),
        None,
        true,
    );
    assert_eq!(bot::choose_action(&state, Seat::Ai), Action::Skip);
}

#[test]
fn honors_an_active_wild_suit() {
    // Top card is a spade eight but hearts is demanded; only the heart is
    // legal.
    let state = ai_turn(
        vec![c(Suit::Spades, Rank::Four), c(Suit::Hearts, Rank::Ten)],
        c(Suit::Spades, Rank::Eight),
        Some(Suit::Hearts),
        false,
    );
    assert_eq!(
        bot::choose_action(&state, Seat::Ai),
        Action::Play {
            card: c(Suit::Hearts, Rank::Ten),
            suit: None,
        }
    );
}

#[test]
fn the_policy_serves_either_seat() {
    // Same snapshot, player's turn: the policy reads the player hand.
    let mut state = ai_turn(
        vec![c(Suit::Hearts, Rank::Four)],
        c(Suit::Clubs, Rank::Nine),
        None,
        false,
    );
    state.current_player = Seat::Player;
    state.player_hand = vec![c(Suit::Clubs, Rank::Three)];
    assert_eq!(
        bot::choose_action(&state, Seat::Player),
        Action::Play {
            card: c(Suit::Clubs, Rank::Three),
            suit: None,
        }
    );
}
