//! Strictly Hanoi - Tower of Hanoi game logic
//!
//! Three pegs, `N` blocks, one rule: a block may only land on an empty peg
//! or on a larger block. This crate holds the rules and the game state
//! machine and nothing else; front ends drive it through [`Game`].
//!
//! # Architecture
//!
//! - **Block / Peg**: blocks carry a placement rank; a peg's top block is
//!   the member with the highest rank
//! - **Game**: lifecycle (`Idle` → `Running` → `Finished`), atomic moves,
//!   move counter, elapsed time, events
//! - **Contracts / Invariants**: move preconditions and debug-build
//!   postconditions
//! - **Rules**: win detection, optimal solution, hints
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::{Game, GameStatus, optimal_moves};
//!
//! # fn main() -> Result<(), strictly_hanoi::GameError> {
//! let mut game = Game::new(3)?;
//! game.start()?;
//! for mov in optimal_moves(3) {
//!     game.apply(mov)?;
//! }
//! assert_eq!(game.status(), GameStatus::Finished);
//! assert_eq!(game.move_count(), 7);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod clock;
mod contracts;
mod game;
mod peg;
mod phases;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use types::{Block, MAX_BLOCKS, MIN_BLOCKS, OrderCounter, PEG_COUNT, PegId};

// Crate-level exports - Pegs and the controller
pub use game::{Game, GameEvent};
pub use peg::Peg;
pub use phases::GameStatus;

// Crate-level exports - Actions and errors
pub use action::{GameError, Move, MoveOutcome};

// Crate-level exports - Contracts
pub use contracts::{
    Contract, DestinationAccepts, DistinctPegs, GameRunning, LegalMove, MoveContract,
    SourceNotEmpty,
};

// Crate-level exports - Time
pub use clock::{Clock, ManualClock, SystemClock, format_elapsed};

// Crate-level exports - Snapshots
pub use snapshot::{GameSnapshot, PegSnapshot};

// Crate-level exports - Rules
pub use rules::{is_solved, minimal_moves, next_optimal_move, optimal_moves};
