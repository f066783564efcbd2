//! Move verdicts
//!
//! Aggregates the shapes on the 4 axes through a just-placed stone. A five
//! anywhere wins outright; otherwise the forbidden patterns are ranked
//! overline, double-four, double-three. Whether a forbidden verdict actually
//! terminates the match depends on the rule mode and the moving color, which
//! is the engine's call, not this module's.

use super::shape::{shapes_on_axis, Shape};
use crate::board::{Board, Direction, Pos};

/// Outcome of evaluating one placed stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Five in a row: immediate win for the mover under every rule set.
    Connect5,
    /// Six or more in a row on some axis.
    Overline,
    /// Two or more axes carrying an open or semi-open four.
    DoubleFour,
    /// Two or more axes carrying an open three.
    DoubleThree,
    /// Nothing decisive.
    Ordinary,
}

/// Evaluate the stone at `pos` across all 4 axes.
pub fn evaluate(board: &Board, pos: Pos) -> Verdict {
    let mut overline_axes = 0u8;
    let mut four_axes = 0u8;
    let mut three_axes = 0u8;

    for axis in Direction::AXES {
        let shapes = shapes_on_axis(board, pos, axis);
        if shapes.contains(&Shape::Five) {
            return Verdict::Connect5;
        }
        if shapes.contains(&Shape::Overline) {
            overline_axes += 1;
        }
        if shapes.contains(&Shape::OpenFour) || shapes.contains(&Shape::SemiOpenFour) {
            four_axes += 1;
        }
        if shapes.contains(&Shape::OpenThree) {
            three_axes += 1;
        }
    }

    if overline_axes > 0 {
        Verdict::Overline
    } else if four_axes > 1 {
        Verdict::DoubleFour
    } else if three_axes > 1 {
        Verdict::DoubleThree
    } else {
        Verdict::Ordinary
    }
}
