//! Lifecycle phases of a game.

use serde::{Deserialize, Serialize};

/// Where a game is in its lifecycle.
///
/// `Idle` accepts configuration, `Running` accepts moves, `Finished` only
/// accepts a reset.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum GameStatus {
    /// Blocks are seeded on the first peg; waiting for start.
    #[default]
    Idle,
    /// Moves are being accepted.
    Running,
    /// Every block reached the goal peg.
    Finished,
}

impl GameStatus {
    /// Returns true if the game accepts moves.
    pub fn is_running(self) -> bool {
        matches!(self, GameStatus::Running)
    }

    /// Returns true if the game has been solved.
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Finished)
    }
}
