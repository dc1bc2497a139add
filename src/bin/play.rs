use std::error::Error;
use std::io::{self, Write as _};
use std::process;
use std::thread;
use std::time::Duration;

use clap::Parser;

use eightsbot::{Session, Suit, render_state};

/// Delay before each AI step so computer turns stay visible to the human.
/// Purely presentational; the engine transitions are synchronous.
const AI_DELAY: Duration = Duration::from_millis(1500);

#[derive(Parser, Debug)]
#[command(
    name = "play",
    about = "Play Crazy Eights against the bot in the terminal."
)]
struct Args {
    /// RNG seed for a reproducible deal.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let mut builder = Session::builder();
    if let Some(seed) = args.seed {
        builder = builder.with_seed(seed);
    }
    let mut session = builder.build()?;

    loop {
        println!("\n{}", render_state(session.state()));

        if session.state().is_finished() {
            match prompt("(r)ematch or (q)uit? ")?.as_str() {
                "r" => session.reset(),
                "q" => return Ok(()),
                _ => {}
            }
            continue;
        }

        if let Some(ticket) = session.ai_ticket() {
            thread::sleep(AI_DELAY);
            session.run_ai(ticket)?;
            continue;
        }

        if let Some(pending) = session.state().pending_wild {
            let input = prompt(&format!(
                "Suit for {pending}: (h)earts, (d)iamonds, (c)lubs, (s)pades, (x) cancel: "
            ))?;
            let result = match parse_suit(&input) {
                Some(suit) => session.play(pending, Some(suit)).map(|_| ()),
                None if input == "x" => session.cancel_suit_choice(),
                None => {
                    println!("Unrecognized suit.");
                    Ok(())
                }
            };
            if let Err(err) = result {
                println!("Rejected: {err}");
            }
            continue;
        }

        let input = prompt("Card index to play, (d)raw, (s)kip, (n)ew game, (q)uit: ")?;
        let result = match input.as_str() {
            "d" => session.draw(),
            "s" => session.skip(),
            "n" => {
                session.reset();
                Ok(())
            }
            "q" => return Ok(()),
            other => match other.parse::<usize>() {
                Ok(index) => match session.state().player_hand.get(index).copied() {
                    Some(card) => session.play(card, None).map(|_| ()),
                    None => {
                        println!("No card at index {index}.");
                        Ok(())
                    }
                },
                Err(_) => {
                    println!("Unrecognized command.");
                    Ok(())
                }
            },
        };
        if let Err(err) = result {
            println!("Rejected: {err}");
        }
    }
}

fn prompt(message: &str) -> Result<String, Box<dyn Error>> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_ascii_lowercase())
}

fn parse_suit(input: &str) -> Option<Suit> {
    match input {
        "h" => Some(Suit::Hearts),
        "d" => Some(Suit::Diamonds),
        "c" => Some(Suit::Clubs),
        "s" => Some(Suit::Spades),
        _ => None,
    }
}
