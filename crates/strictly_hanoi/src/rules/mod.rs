//! Game rules for Tower of Hanoi.
//!
//! Pure functions over board state, kept apart from the controller so they
//! can be reused by contracts, hints and front ends.

pub mod solver;
pub mod win;

pub use solver::{minimal_moves, next_optimal_move, optimal_moves};
pub use win::is_solved;
