//! Non-interactive optimal solution printer.

use crate::render::render_board;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use strictly_hanoi::{Game, GameSnapshot, Move, minimal_moves, optimal_moves};
use tracing::{info, instrument};

/// JSON report for `solve --json`.
#[derive(Debug, Serialize)]
struct SolveReport {
    block_count: u8,
    minimal_moves: u64,
    moves: Vec<Move>,
    final_state: GameSnapshot,
}

/// Replays the optimal solution through `game` and prints it.
///
/// `game` must be idle; it ends up finished.
#[instrument(skip(game, output), fields(block_count = game.block_count()))]
pub fn run_solve(game: &mut Game, json: bool, output: &mut impl Write) -> Result<()> {
    let moves = optimal_moves(game.block_count());
    game.start().context("Failed to start game")?;

    if !json {
        writeln!(output, "{}", render_board(game))?;
    }
    for (step, mov) in moves.iter().enumerate() {
        let outcome = game
            .apply(*mov)
            .with_context(|| format!("Optimal move {} ({}) was rejected", step + 1, mov))?;
        if !json {
            writeln!(
                output,
                "{:>4}. {} -> {}  (block {})",
                outcome.move_count,
                game.peg(mov.from).label(),
                game.peg(mov.to).label(),
                outcome.block_moved
            )?;
        }
    }
    info!(move_count = game.move_count(), "Solution replayed");

    if json {
        let report = SolveReport {
            block_count: game.block_count(),
            minimal_moves: minimal_moves(game.block_count()),
            moves,
            final_state: game.snapshot(),
        };
        let text = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        writeln!(output, "{}", text)?;
    } else {
        writeln!(output, "{}", render_board(game))?;
        writeln!(
            output,
            "Solved {} blocks in {} moves.",
            game.block_count(),
            game.move_count()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_hanoi::GameStatus;

    #[test]
    fn test_text_output() {
        let mut game = Game::new(3).unwrap();
        let mut output = Vec::new();
        run_solve(&mut game, false, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("   1. A -> C  (block 1)"));
        assert!(text.contains("   7. A -> C  (block 1)"));
        assert!(text.contains("Solved 3 blocks in 7 moves."));
        assert_eq!(game.status(), GameStatus::Finished);
    }

    #[test]
    fn test_json_output() {
        let mut game = Game::new(4).unwrap();
        let mut output = Vec::new();
        run_solve(&mut game, true, &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["block_count"], 4);
        assert_eq!(value["minimal_moves"], 15);
        assert_eq!(value["moves"].as_array().map(Vec::len), Some(15));
        assert_eq!(value["moves"][0]["from"], "A");
        assert_eq!(value["final_state"]["status"], "Finished");
        assert_eq!(value["final_state"]["pegs"][2]["sizes"], serde_json::json!([1, 2, 3, 4]));
    }

    #[test]
    fn test_requires_idle_game() {
        let mut game = Game::new(3).unwrap();
        game.start().unwrap();
        assert!(run_solve(&mut game, false, &mut Vec::<u8>::new()).is_err());
    }
}
