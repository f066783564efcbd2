//! Opening-protocol phase machine
//!
//! The Balanced rule set layers an opening protocol over normal play: after
//! the third stone the mover announces how many fifth-stone candidates will
//! be offered, the opponent may swap sides, the fourth stone is played, the
//! candidates are submitted (dot phase) and one of them is chosen. Freestyle
//! and Forbidden matches never leave the `Move` phase until they end.
//!
//! The phase is a closed variant so each action's legality check is an
//! exhaustive match rather than a flag comparison. Move counting includes
//! passes: a pass logs a move without a coordinate.

use std::fmt;

use crate::board::Pos;
use crate::rules::RuleMode;

/// Which action the match currently accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// A stone placement (or a pass, where legal).
    Move,
    /// The dot-count announcement after the third stone.
    Announce,
    /// The opponent's accept/decline of a side swap.
    Swap,
    /// Submission of the announced number of candidate points.
    Dot {
        /// How many candidates the announcement promised.
        count: usize,
    },
    /// Selection of one submitted candidate.
    Choice {
        /// The candidates submitted during the dot phase.
        candidates: Vec<Pos>,
    },
    /// Terminal: no further action is legal.
    End,
}

impl Phase {
    /// Whether the match is over.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::End)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Move => "move",
            Phase::Announce => "announce",
            Phase::Swap => "swap",
            Phase::Dot { .. } => "dot",
            Phase::Choice { .. } => "choice",
            Phase::End => "end",
        };
        f.write_str(name)
    }
}

/// Where a just-logged move sends the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveStep {
    /// Alternate the color to move; the scoring side stays put.
    Alternate,
    /// Alternate the color and flip the scoring side (normal play).
    AlternateAndFlipSide,
    /// Third stone under the opening protocol: announcement is due.
    EnterAnnounce,
    /// Fourth stone under the opening protocol: dots are due.
    EnterDot,
}

/// Transition for the `Move` phase, given the move count after logging.
///
/// Only Balanced matches branch on the count; the first two stones alternate
/// color without touching the scoring side, the third and fourth hand the
/// match to the announcement and dot sub-protocols, and everything after
/// that is normal play.
pub(crate) fn after_move(mode: RuleMode, moves: usize) -> MoveStep {
    if mode.has_opening_protocol() {
        match moves {
            0..=2 => return MoveStep::Alternate,
            3 => return MoveStep::EnterAnnounce,
            4 => return MoveStep::EnterDot,
            _ => {}
        }
    }
    MoveStep::AlternateAndFlipSide
}
