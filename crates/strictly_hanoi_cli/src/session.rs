//! Interactive text session.
//!
//! Reads one command per line, drives the [`Game`], and prints the board
//! after every change. Illegal moves snap back: they print a short note and
//! leave the board as it was.

use crate::render::{render_board, render_status};
use anyhow::Result;
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use strictly_hanoi::{
    Game, GameError, GameEvent, Move, PegId, format_elapsed, minimal_moves, next_optimal_move,
};
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  start              start the clock and accept moves
  move <from> <to>   move the top block (also just `<from> <to>`)
  hint               suggest the next optimal move
  solve              finish the puzzle optimally
  blocks <n>         use n blocks (3-10), only before start
  reset              put every block back on the first peg
  show               print the board
  help               this text
  quit               leave
Pegs are named by label or by number 1-3.";

/// A parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Start the game.
    Start,
    /// Move a block.
    Move(Move),
    /// Suggest a move.
    Hint,
    /// Auto-play to the end.
    Solve,
    /// Reconfigure the block count.
    Blocks(u8),
    /// Back to idle.
    Reset,
    /// Print the board.
    Show,
    /// Print help.
    Help,
    /// Leave the session.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{}", message)]
pub struct ParseError {
    /// What went wrong, for the player.
    pub message: String,
}

impl ParseError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl SessionCommand {
    /// Parses one line. Blank lines yield `Ok(None)`.
    #[instrument(skip(game))]
    pub fn parse(line: &str, game: &Game) -> Result<Option<Self>, ParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = tokens.first() else {
            return Ok(None);
        };

        let command = match (first.to_lowercase().as_str(), tokens.len()) {
            ("start", 1) => Self::Start,
            ("hint" | "h", 1) => Self::Hint,
            ("solve", 1) => Self::Solve,
            ("reset" | "r", 1) => Self::Reset,
            ("show" | "board", 1) => Self::Show,
            ("help" | "?", 1) => Self::Help,
            ("quit" | "exit" | "q", 1) => Self::Quit,
            ("move" | "m", 3) => Self::Move(parse_move(tokens[1], tokens[2], game)?),
            ("blocks", 2) => {
                let count = tokens[1]
                    .parse::<u8>()
                    .map_err(|_| ParseError::new(format!("Not a number: {}", tokens[1])))?;
                Self::Blocks(count)
            }
            (_, 2) => Self::Move(parse_move(tokens[0], tokens[1], game)?),
            _ => {
                return Err(ParseError::new(format!(
                    "Unknown command: {} (type `help`)",
                    line.trim()
                )));
            }
        };
        Ok(Some(command))
    }
}

fn parse_move(from: &str, to: &str, game: &Game) -> Result<Move, ParseError> {
    Ok(Move::new(resolve_peg(from, game)?, resolve_peg(to, game)?))
}

/// Finds a peg by its label (case-insensitive) or its 1-based number.
pub fn resolve_peg(token: &str, game: &Game) -> Result<PegId, ParseError> {
    if let Some(peg) = game
        .pegs()
        .iter()
        .find(|peg| peg.label().eq_ignore_ascii_case(token))
    {
        return Ok(peg.id());
    }
    token
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(PegId::from_index)
        .ok_or_else(|| ParseError::new(format!("No such peg: {}", token)))
}

/// Whether the loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Runs the session until `quit` or end of input.
#[instrument(skip_all, fields(block_count = game.block_count()))]
pub fn run_session(game: &mut Game, input: impl BufRead, output: &mut impl Write) -> Result<()> {
    info!("Session started");
    writeln!(output, "Tower of Hanoi. Type `help` for commands.")?;
    print_board(game, output)?;
    game.drain_events();

    for line in input.lines() {
        let line = line?;
        let flow = match SessionCommand::parse(&line, game) {
            Ok(Some(command)) => handle(game, command, output)?,
            Ok(None) => Flow::Continue,
            Err(error) => {
                writeln!(output, "{}", error)?;
                Flow::Continue
            }
        };
        report_events(game, output)?;
        if flow == Flow::Quit {
            break;
        }
    }

    info!(move_count = game.move_count(), status = %game.status(), "Session ended");
    Ok(())
}

#[instrument(skip(game, output))]
fn handle(game: &mut Game, command: SessionCommand, output: &mut impl Write) -> Result<Flow> {
    match command {
        SessionCommand::Start => match game.start() {
            Ok(()) => print_board(game, output)?,
            Err(error) => {
                debug!(%error, "Start refused");
                writeln!(
                    output,
                    "The game is already {}. Type `reset` to play again.",
                    game.status()
                )?;
            }
        },
        SessionCommand::Move(mov) => {
            if !game.status().is_running() {
                writeln!(output, "The game is not running. Type `start` first.")?;
            } else {
                play(game, mov, output)?;
            }
        }
        SessionCommand::Hint => match next_optimal_move(game) {
            Some(mov) => writeln!(output, "Try {}", describe(game, mov))?,
            None => writeln!(output, "No hint: the game is not running.")?,
        },
        SessionCommand::Solve => {
            if !game.status().is_running() {
                writeln!(output, "The game is not running. Type `start` first.")?;
            } else {
                while let Some(mov) = next_optimal_move(game) {
                    game.apply(mov)?;
                    writeln!(output, "{}", describe(game, mov))?;
                }
                print_board(game, output)?;
            }
        }
        SessionCommand::Blocks(count) => match game.configure(count) {
            Ok(()) => print_board(game, output)?,
            Err(GameError::InvalidState { .. }) => {
                writeln!(output, "Block count can only change before start. Type `reset` first.")?;
            }
            Err(error) => writeln!(output, "{}", error)?,
        },
        SessionCommand::Reset => {
            game.reset();
            print_board(game, output)?;
        }
        SessionCommand::Show => print_board(game, output)?,
        SessionCommand::Help => writeln!(output, "{}", HELP)?,
        SessionCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn play(game: &mut Game, mov: Move, output: &mut impl Write) -> Result<()> {
    match game.apply(mov) {
        Ok(outcome) => {
            debug!(?outcome, "Move accepted");
            print_board(game, output)?;
        }
        Err(error) if error.is_rejected_move() => {
            debug!(%error, "Move snapped back");
            writeln!(output, "Not a legal move: {}", describe(game, mov))?;
        }
        Err(error) => return Err(error.into()),
    }
    Ok(())
}

fn report_events(game: &mut Game, output: &mut impl Write) -> Result<()> {
    for event in game.drain_events() {
        match event {
            GameEvent::Finished {
                move_count,
                elapsed,
            } => {
                writeln!(
                    output,
                    "Solved in {} moves (best possible: {}) in {}.",
                    move_count,
                    minimal_moves(game.block_count()),
                    format_elapsed(elapsed)
                )?;
            }
            other => debug!(event = ?other, "Game event"),
        }
    }
    Ok(())
}

fn describe(game: &Game, mov: Move) -> String {
    format!(
        "{} -> {}",
        game.peg(mov.from).label(),
        game.peg(mov.to).label()
    )
}

fn print_board(game: &Game, output: &mut impl Write) -> Result<()> {
    writeln!(output, "{}", render_board(game))?;
    writeln!(output, "{}", render_status(game))?;
    Ok(())
}
