//! Append-only operation log
//!
//! Every accepted action is recorded in timeline order. The log is the
//! source of truth for the protocol's move counter, supplies the reference
//! stones for the dot-phase symmetry check, and carries enough payload to
//! replay a match from scratch (see [`MatchState::replay`]).
//!
//! [`MatchState::replay`]: crate::engine::MatchState::replay

use serde::{Deserialize, Serialize};

use crate::board::{Pos, Stone};

/// One accepted action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// A stone placement, or a pass when `pos` is `None`.
    Move { color: Stone, pos: Option<Pos> },
    /// The dot-count announcement.
    Announce { color: Stone, count: usize },
    /// The swap decision.
    Swap { color: Stone, accepted: bool },
    /// The submitted dot candidates.
    Dot { color: Stone, candidates: Vec<Pos> },
    /// The chosen candidate, placed as `color`.
    Choice { color: Stone, pos: Pos },
}

impl Operation {
    /// Whether this entry counts toward the protocol's move counter.
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, Operation::Move { .. })
    }
}

/// The match timeline. Entries are immutable once appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationLog {
    entries: Vec<Operation>,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, op: Operation) {
        self.entries.push(op);
    }

    /// All entries in timeline order.
    pub fn entries(&self) -> &[Operation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of move entries, passes included.
    pub fn move_count(&self) -> usize {
        self.entries.iter().filter(|op| op.is_move()).count()
    }

    /// Coordinates of placed (non-pass) moves in timeline order.
    pub fn placed_moves(&self) -> impl Iterator<Item = Pos> + '_ {
        self.entries.iter().filter_map(|op| match op {
            Operation::Move { pos: Some(pos), .. } => Some(*pos),
            _ => None,
        })
    }
}

impl From<Vec<Operation>> for OperationLog {
    fn from(entries: Vec<Operation>) -> Self {
        Self { entries }
    }
}
