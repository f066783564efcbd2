//! Renju rule engine
//!
//! A rule engine for five-in-a-row on a 15x15 board, supporting three rule
//! sets:
//! - **Freestyle**: only five-in-a-row ends the match
//! - **Forbidden**: overline, double-four and double-three lose the match
//!   for Black
//! - **Balanced**: forbidden moves plus an opening protocol (announce, swap,
//!   dot submission and dot choice) that evens out the first-move advantage
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: the 15x15 grid, coordinates and compass directions
//! - [`rules`]: line scanning, shape classification and move verdicts
//! - [`protocol`]: the opening-protocol phase machine
//! - [`log`]: the append-only operation log and replay support
//! - [`engine`]: the match aggregate tying everything together
//!
//! # Quick Start
//!
//! ```
//! use renju::{MatchState, RuleMode, Stone};
//!
//! let mut game = MatchState::new(RuleMode::Freestyle);
//! game.play(7, 7, Stone::Black)?;
//! game.play(8, 8, Stone::White)?;
//! assert_eq!(game.next_color(), Stone::Black);
//! # Ok::<(), renju::EngineError>(())
//! ```

pub mod board;
pub mod engine;
pub mod log;
pub mod protocol;
pub mod rules;

use thiserror::Error;

// Re-export commonly used types for convenience
pub use board::{Board, Direction, Pos, Stone, BOARD_SIZE};
pub use engine::{MatchResult, MatchState, PlayOutcome, Side};
pub use log::{Operation, OperationLog};
pub use protocol::Phase;
pub use rules::{RuleMode, Shape, Verdict};

/// Why an action was rejected.
///
/// Every rejection is synchronous and leaves the match untouched; the engine
/// never retries or recovers on the caller's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The action is not valid in the current phase.
    #[error("action is not valid in the current phase")]
    IllegalPhase,
    /// Occupied cell, out-of-range coordinate, or wrong color to move.
    #[error("illegal move")]
    IllegalMove,
    /// Wrong candidate count, occupied candidate cell, or a symmetry
    /// violation between candidates.
    #[error("illegal dot submission")]
    IllegalSubmission,
}
