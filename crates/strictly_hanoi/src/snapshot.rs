//! Serializable views of a game for front ends and logs.

use super::phases::GameStatus;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One peg as seen from outside.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PegSnapshot {
    /// Display label.
    label: String,
    /// Block sizes, top first.
    sizes: Vec<u8>,
}

impl PegSnapshot {
    /// Creates a peg snapshot.
    pub fn new(label: String, sizes: Vec<u8>) -> Self {
        Self { label, sizes }
    }
}

/// Whole-game view.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Lifecycle phase.
    status: GameStatus,
    /// Blocks in play.
    block_count: u8,
    /// Moves made since start.
    move_count: u32,
    /// Elapsed time in milliseconds.
    elapsed_ms: u64,
    /// Pegs in board order.
    pegs: Vec<PegSnapshot>,
}

impl GameSnapshot {
    /// Creates a game snapshot.
    pub fn new(
        status: GameStatus,
        block_count: u8,
        move_count: u32,
        elapsed_ms: u64,
        pegs: Vec<PegSnapshot>,
    ) -> Self {
        Self {
            status,
            block_count,
            move_count,
            elapsed_ms,
            pegs,
        }
    }
}
