//! Game controller for Tower of Hanoi.
//!
//! Owns the three pegs, the placement-rank counter, the move counter and
//! the lifecycle phase. Every mutation goes through a method here, and each
//! one either completes fully or leaves the game untouched.

use super::action::{GameError, Move, MoveOutcome};
use super::clock::{Clock, SystemClock};
use super::contracts::{Contract, MoveContract};
use super::peg::Peg;
use super::phases::GameStatus;
use super::rules;
use super::snapshot::{GameSnapshot, PegSnapshot};
use super::types::{Block, MAX_BLOCKS, MIN_BLOCKS, OrderCounter, PEG_COUNT, PegId};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// State change reported to the presentation layer.
///
/// Collected on every transition and handed out by [`Game::drain_events`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// Blocks were reseeded for a new block count.
    Configured {
        /// New block count.
        block_count: u8,
    },
    /// The game started accepting moves.
    Started,
    /// A block moved.
    Moved {
        /// The move that was applied.
        mov: Move,
        /// Size of the block that moved.
        block: u8,
        /// Move count after the move.
        move_count: u32,
    },
    /// The puzzle was solved.
    Finished {
        /// Total moves used.
        move_count: u32,
        /// Time from start to the final move.
        elapsed: Duration,
    },
    /// The game went back to idle.
    Reset,
}

/// A Tower of Hanoi game.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) pegs: [Peg; PEG_COUNT],
    pub(crate) block_count: u8,
    pub(crate) move_count: u32,
    pub(crate) status: GameStatus,
    pub(crate) orders: OrderCounter,
    history: Vec<Move>,
    events: Vec<GameEvent>,
    clock: Arc<dyn Clock>,
    started_at: Option<Duration>,
    finished_at: Option<Duration>,
}

impl Game {
    /// Creates an idle game with `block_count` blocks on peg A.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBlockCount`] unless `3 <= block_count <= 10`.
    #[instrument]
    pub fn new(block_count: u8) -> Result<Self, GameError> {
        Self::with_clock(block_count, Arc::new(SystemClock::new()))
    }

    /// Creates an idle game reading time from `clock`.
    #[instrument(skip(clock))]
    pub fn with_clock(block_count: u8, clock: Arc<dyn Clock>) -> Result<Self, GameError> {
        let labels = PegId::ALL.map(|peg| peg.label().to_string());
        Self::with_options(block_count, labels, clock)
    }

    /// Creates an idle game with custom peg labels.
    #[instrument(skip(labels, clock))]
    pub fn with_options(
        block_count: u8,
        labels: [String; PEG_COUNT],
        clock: Arc<dyn Clock>,
    ) -> Result<Self, GameError> {
        let [a, b, c] = labels;
        let mut game = Self {
            pegs: [
                Peg::new(PegId::A, a),
                Peg::new(PegId::B, b),
                Peg::new(PegId::C, c),
            ],
            block_count: 0,
            move_count: 0,
            status: GameStatus::Idle,
            orders: OrderCounter::new(1),
            history: Vec::new(),
            events: Vec::new(),
            clock,
            started_at: None,
            finished_at: None,
        };
        game.configure(block_count)?;
        Ok(game)
    }

    /// Replays `moves` on a fresh, started game.
    ///
    /// Stops at the first move that fails and returns its error.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(block_count: u8, moves: &[Move]) -> Result<Self, GameError> {
        let mut game = Self::new(block_count)?;
        game.start()?;
        for mov in moves {
            game.apply(*mov)?;
        }
        Ok(game)
    }

    // ─────────────────────────────────────────────────────────────
    //  Lifecycle
    // ─────────────────────────────────────────────────────────────

    /// Rebuilds peg A with `block_count` fresh blocks.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidState`] unless the game is idle.
    /// - [`GameError::InvalidBlockCount`] unless `3 <= block_count <= 10`.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn configure(&mut self, block_count: u8) -> Result<(), GameError> {
        if self.status != GameStatus::Idle {
            return Err(GameError::InvalidState {
                operation: "configure",
                status: self.status,
            });
        }
        if !(MIN_BLOCKS..=MAX_BLOCKS).contains(&block_count) {
            return Err(GameError::InvalidBlockCount(block_count));
        }

        self.reseed(block_count)?;
        info!(block_count, "Game configured");
        self.events.push(GameEvent::Configured { block_count });
        Ok(())
    }

    /// Starts accepting moves and starts the elapsed-time counter.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] unless the game is idle.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.status != GameStatus::Idle {
            return Err(GameError::InvalidState {
                operation: "start",
                status: self.status,
            });
        }

        self.status = GameStatus::Running;
        self.move_count = 0;
        self.started_at = Some(self.clock.now());
        self.finished_at = None;
        info!(block_count = self.block_count, "Game started");
        self.events.push(GameEvent::Started);
        Ok(())
    }

    /// Returns to idle from any phase and reseeds peg A.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn reset(&mut self) {
        self.status = GameStatus::Idle;
        self.started_at = None;
        self.finished_at = None;
        // block_count was validated when it was set.
        if let Err(error) = self.reseed(self.block_count) {
            tracing::error!(%error, "Reseed failed during reset");
        }
        info!(block_count = self.block_count, "Game reset");
        self.events.push(GameEvent::Reset);
    }

    fn reseed(&mut self, block_count: u8) -> Result<(), GameError> {
        let blocks = (1..=block_count)
            .map(|size| {
                let mut block = Block::new(size)?;
                block.bump_order(u64::from(block_count - size) + 1);
                Ok(block)
            })
            .collect::<Result<Vec<_>, GameError>>()?;

        for peg in &mut self.pegs {
            peg.clear();
        }
        self.pegs[PegId::A.index()].seed(blocks);
        self.block_count = block_count;
        self.orders = OrderCounter::new(u64::from(block_count) + 1);
        self.move_count = 0;
        self.history.clear();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    //  Moves
    // ─────────────────────────────────────────────────────────────

    /// Moves the top block of peg `from` onto peg `to`, by board index.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidPeg`] for an index outside 0-2, then everything
    /// [`Game::apply`] can return.
    #[instrument(skip(self))]
    pub fn move_block(&mut self, from: usize, to: usize) -> Result<MoveOutcome, GameError> {
        let mov = Move::from_indices(from, to)?;
        self.apply(mov)
    }

    /// Applies a move.
    ///
    /// Either the block leaves the source and lands on the destination, or
    /// nothing changes. Moving the last block onto peg C finishes the game.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`GameError::InvalidState`] unless running.
    /// - [`GameError::SamePeg`] if `from == to`.
    /// - [`GameError::EmptyPeg`] if the source has no blocks.
    /// - [`GameError::Duplicate`] / [`GameError::IllegalMove`] from the
    ///   destination peg.
    #[instrument(skip(self), fields(move_count = self.move_count))]
    pub fn apply(&mut self, mov: Move) -> Result<MoveOutcome, GameError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        MoveContract::pre(self, &mov)?;

        let block = self.pegs[mov.from.index()].remove_top()?;
        let order = self.orders.peek();
        if let Err(error) = self.pegs[mov.to.index()].try_place(block, order) {
            self.pegs[mov.from.index()].restore(block);
            return Err(error);
        }
        self.orders.advance();

        self.move_count += 1;
        self.history.push(mov);
        self.events.push(GameEvent::Moved {
            mov,
            block: block.size(),
            move_count: self.move_count,
        });
        debug!(size = block.size(), move_count = self.move_count, "Move applied");

        let finished = rules::is_solved(&self.pegs, self.block_count);
        if finished {
            let now = self.clock.now();
            self.status = GameStatus::Finished;
            self.finished_at = Some(now);
            let elapsed = self.elapsed();
            info!(move_count = self.move_count, ?elapsed, "Puzzle solved");
            self.events.push(GameEvent::Finished {
                move_count: self.move_count,
                elapsed,
            });
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(MoveOutcome {
            move_count: self.move_count,
            block_moved: block.size(),
            finished,
        })
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Current phase.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Successful moves since start.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Number of blocks in play.
    pub fn block_count(&self) -> u8 {
        self.block_count
    }

    /// The rank the next placement will receive.
    pub fn next_global_order(&self) -> u64 {
        self.orders.peek()
    }

    /// Returns a peg.
    pub fn peg(&self, id: PegId) -> &Peg {
        &self.pegs[id.index()]
    }

    /// All pegs in board order.
    pub fn pegs(&self) -> &[Peg; PEG_COUNT] {
        &self.pegs
    }

    /// Blocks on peg `index`, top first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPeg`] for an index outside 0-2.
    pub fn peg_contents(&self, index: usize) -> Result<Vec<Block>, GameError> {
        let id = PegId::from_index(index).ok_or(GameError::InvalidPeg(index))?;
        Ok(self.peg(id).contents_top_first())
    }

    /// Which peg holds the block of this size.
    pub fn peg_of(&self, size: u8) -> Option<PegId> {
        self.pegs
            .iter()
            .find(|peg| peg.contains_size(size))
            .map(Peg::id)
    }

    /// Moves applied since start, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Time since start; frozen once finished, zero while idle.
    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.saturating_sub(start),
            (Some(start), None) => self.clock.now().saturating_sub(start),
            _ => Duration::ZERO,
        }
    }

    /// Takes every event recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Serializable view of the whole game.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> GameSnapshot {
        let pegs = self
            .pegs
            .iter()
            .map(|peg| PegSnapshot::new(peg.label().to_string(), peg.sizes_top_first()))
            .collect();
        GameSnapshot::new(
            self.status,
            self.block_count,
            self.move_count,
            u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX),
            pegs,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn running(block_count: u8) -> Game {
        let mut game = Game::new(block_count).unwrap();
        game.start().unwrap();
        game
    }

    #[test]
    fn test_new_game_is_idle_with_blocks_on_first_peg() {
        let game = Game::new(4).unwrap();
        assert_eq!(game.status(), GameStatus::Idle);
        assert_eq!(game.peg(PegId::A).sizes_top_first(), vec![1, 2, 3, 4]);
        assert!(game.peg(PegId::B).is_empty());
        assert!(game.peg(PegId::C).is_empty());
    }

    #[test]
    fn test_initial_orders_put_smallest_on_top() {
        let game = Game::new(3).unwrap();
        let blocks = game.peg_contents(0).unwrap();
        let orders: Vec<u64> = blocks.iter().map(Block::order).collect();
        assert_eq!(orders, vec![3, 2, 1]);
        assert_eq!(game.next_global_order(), 4);
    }

    #[test]
    fn test_block_count_bounds() {
        assert_eq!(Game::new(2).err(), Some(GameError::InvalidBlockCount(2)));
        assert_eq!(Game::new(11).err(), Some(GameError::InvalidBlockCount(11)));
        assert!(Game::new(10).is_ok());
    }

    #[test]
    fn test_configure_only_while_idle() {
        let mut game = running(3);
        assert!(matches!(
            game.configure(5),
            Err(GameError::InvalidState {
                operation: "configure",
                status: GameStatus::Running
            })
        ));
        assert_eq!(game.block_count(), 3);
    }

    #[test]
    fn test_start_twice_rejected() {
        let mut game = running(3);
        assert!(matches!(game.start(), Err(GameError::InvalidState { .. })));
    }

    #[test]
    fn test_move_before_start_rejected() {
        let mut game = Game::new(3).unwrap();
        assert!(matches!(
            game.move_block(0, 2),
            Err(GameError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_move_consumes_one_rank() {
        let mut game = running(3);
        let outcome = game.move_block(0, 2).unwrap();
        assert_eq!(outcome.block_moved, 1);
        assert_eq!(outcome.move_count, 1);
        assert!(!outcome.finished);
        assert_eq!(game.peg(PegId::C).top_block().map(Block::order), Some(4));
        assert_eq!(game.next_global_order(), 5);
    }

    #[test]
    fn test_failed_move_keeps_rank_and_pegs() {
        let mut game = running(3);
        game.move_block(0, 2).unwrap();
        let pegs = game.pegs().clone();
        let next = game.next_global_order();

        assert_eq!(
            game.move_block(0, 2),
            Err(GameError::IllegalMove { block: 2, onto: 1 })
        );
        assert_eq!(game.pegs(), &pegs);
        assert_eq!(game.next_global_order(), next);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_invalid_peg_index() {
        let mut game = running(3);
        assert_eq!(game.move_block(0, 3), Err(GameError::InvalidPeg(3)));
        assert_eq!(game.peg_contents(5), Err(GameError::InvalidPeg(5)));
    }

    #[test]
    fn test_elapsed_tracks_clock_and_freezes_on_finish() {
        let clock = ManualClock::new();
        let mut game = Game::with_clock(3, Arc::new(clock.clone())).unwrap();
        assert_eq!(game.elapsed(), Duration::ZERO);

        game.start().unwrap();
        clock.advance(Duration::from_millis(250));
        assert_eq!(game.elapsed(), Duration::from_millis(250));

        for (from, to) in [(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)] {
            game.move_block(from, to).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Finished);
        clock.advance(Duration::from_secs(5));
        assert_eq!(game.elapsed(), Duration::from_millis(250));
    }

    #[test]
    fn test_events_follow_transitions() {
        let mut game = Game::new(3).unwrap();
        assert_eq!(
            game.drain_events(),
            vec![GameEvent::Configured { block_count: 3 }]
        );

        game.start().unwrap();
        game.move_block(0, 1).unwrap();
        let events = game.drain_events();
        assert_eq!(events[0], GameEvent::Started);
        assert_eq!(
            events[1],
            GameEvent::Moved {
                mov: Move::new(PegId::A, PegId::B),
                block: 1,
                move_count: 1,
            }
        );
        assert!(game.drain_events().is_empty());

        game.reset();
        assert_eq!(game.drain_events(), vec![GameEvent::Reset]);
    }

    #[test]
    fn test_peg_of() {
        let mut game = running(3);
        game.move_block(0, 1).unwrap();
        assert_eq!(game.peg_of(1), Some(PegId::B));
        assert_eq!(game.peg_of(3), Some(PegId::A));
        assert_eq!(game.peg_of(9), None);
    }

    #[test]
    fn test_custom_labels() {
        let labels = ["left", "middle", "right"].map(String::from);
        let game = Game::with_options(3, labels, Arc::new(ManualClock::new())).unwrap();
        assert_eq!(game.peg(PegId::B).label(), "middle");
        assert_eq!(game.snapshot().pegs()[2].label(), "right");
    }
}
