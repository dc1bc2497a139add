use std::error::Error;
use std::process;

use clap::{ArgAction, Parser};

use eightsbot::{Action, DECK_SIZE, GameError, Seat, Session, bot};

const DEFAULT_SEED: u64 = 0x8888_5EED_8888_5EED;

/// Commands per game before a run is declared stalled. When both hands
/// and the draw pile are exhausted the turn can pass back and forth
/// indefinitely; seeds that reach that state are counted, not looped on.
const MAX_STEPS: usize = 10_000;

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Run seeded bot-versus-bot Crazy Eights games and summarize the results."
)]
struct Args {
    /// Number of games to run.
    #[arg(short, long, default_value_t = 100)]
    games: usize,

    /// Base RNG seed; game i plays with seed + i.
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Print every action of every game.
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let mut first_seat_wins = 0usize;
    let mut second_seat_wins = 0usize;
    let mut stalled = 0usize;
    let mut total_steps = 0usize;

    for game_index in 0..args.games {
        let mut session = Session::builder()
            .with_seed(args.seed.wrapping_add(game_index as u64))
            .build()?;

        let mut steps = 0usize;
        while !session.state().is_finished() && steps < MAX_STEPS {
            step(&mut session)?;
            steps += 1;
            debug_assert_eq!(session.state().card_total(), DECK_SIZE);
            if args.verbose {
                println!("[game {game_index}] {}", session.state().last_action);
            }
        }
        total_steps += steps;

        match session.state().winner() {
            Some(Seat::Player) => first_seat_wins += 1,
            Some(Seat::Ai) => second_seat_wins += 1,
            None => stalled += 1,
        }
    }

    println!(
        "Games: {} ({} finished, {} stalled)",
        args.games,
        first_seat_wins + second_seat_wins,
        stalled
    );
    println!("First seat wins: {first_seat_wins}");
    println!("Second seat wins: {second_seat_wins}");
    if args.games > 0 {
        println!(
            "Average commands per game: {:.1}",
            total_steps as f64 / args.games as f64
        );
    }
    Ok(())
}

/// Advances the game by one command, driving both seats with the policy.
/// The first seat goes through the human-facing session API, which doubles
/// as an exercise of that path.
fn step(session: &mut Session) -> Result<(), GameError> {
    if let Some(ticket) = session.ai_ticket() {
        session.run_ai(ticket)?;
        return Ok(());
    }
    match bot::choose_action(session.state(), Seat::Player) {
        Action::Draw => session.draw(),
        Action::Play { card, suit } => session.play(card, suit).map(|_| ()),
        Action::Skip => session.skip(),
    }
}
