//! Terminal front end for the guessing game.
//!
//! Usage: `guess-number [seed]`. Type a number to guess, `restart` to play
//! again once a round is over, `quit` to leave. Set `RUST_LOG=debug` to trace
//! the game. The seed is printed at start so a session can be replayed.

use std::error::Error;
use std::io::{self, BufRead, Write};

use guess_number::{GameView, GuessingGame, RoundStatus, SecretSource};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut game = game_from_arg(std::env::args().nth(1).as_deref())?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "Seed: {}", game.seed())?;
    play(&mut game, stdin.lock(), &mut stdout)
}

/// Seeded game when a seed is given, OS-seeded otherwise.
fn game_from_arg(arg: Option<&str>) -> Result<GuessingGame, Box<dyn Error>> {
    match arg {
        Some(arg) => {
            let seed: u64 = arg
                .parse()
                .map_err(|err| format!("invalid seed {:?}: {}", arg, err))?;
            Ok(GuessingGame::with_seed(seed))
        }
        None => Ok(GuessingGame::from_entropy()),
    }
}

/// Run the game over line-based input until `quit` or end of input.
fn play<S: SecretSource>(
    game: &mut GuessingGame<S>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let config = game.config();
    writeln!(out, "Guess the number!")?;
    writeln!(out, "Pick a number from {} to {}.", config.min, config.max)?;
    prompt(out, &game.view())?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "quit" | "q" => break,
            "restart" | "r" => {
                if game.can_restart() {
                    game.restart();
                    writeln!(out, "New round!")?;
                } else {
                    writeln!(out, "Finish this round first.")?;
                }
            }
            text => {
                if game.is_input_allowed() {
                    game.set_input(text);
                    game.submit_input();
                } else {
                    writeln!(out, "The round is over.")?;
                }
            }
        }

        let view = game.view();
        render(out, &view)?;
        prompt(out, &view)?;
    }

    Ok(())
}

fn render(out: &mut impl Write, view: &GameView) -> io::Result<()> {
    if !view.message.is_empty() {
        writeln!(out, "{}", view.message)?;
    }
    writeln!(out, "Attempts left: {}", view.remaining_attempts)?;

    if !view.history.is_empty() {
        writeln!(out, "Your guesses:")?;
        for (index, record) in view.history.iter().enumerate() {
            writeln!(out, "  Guess #{}: {} ({})", index + 1, record.number, record.outcome)?;
        }
    }

    Ok(())
}

fn prompt(out: &mut impl Write, view: &GameView) -> io::Result<()> {
    match view.status {
        RoundStatus::InProgress if view.input_allowed => write!(out, "> ")?,
        _ if view.can_restart => write!(out, "Type 'restart' to play again or 'quit' to leave: ")?,
        _ => write!(out, "> ")?,
    }
    out.flush()
}
