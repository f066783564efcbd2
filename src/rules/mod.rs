//! Game rules: line scanning, shape classification and move verdicts
//!
//! This module turns a just-placed stone into a verdict:
//! - [`scan`]: gap-tolerant run scanner along one direction
//! - [`shape`]: shapes of the line through a stone on one axis
//! - [`verdict`]: aggregation of the 4 axes into win/forbidden/ordinary
//! - [`symmetry`]: fairness check for dot candidates in the opening protocol

pub mod scan;
pub mod shape;
pub mod symmetry;
pub mod verdict;

use crate::board::Stone;

// Re-exports for convenient access
pub use scan::{scan, Run};
pub use shape::{shapes_on_axis, Shape};
pub use symmetry::validate_dots;
pub use verdict::{evaluate, Verdict};

/// Rule set governing a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMode {
    /// Only five-in-a-row ends the match; no forbidden moves.
    Freestyle,
    /// Overline, double-four and double-three lose the match for the
    /// constrained color.
    Forbidden,
    /// Forbidden moves plus the opening protocol (announce/swap/dot/choice).
    Balanced,
}

impl RuleMode {
    /// Whether forbidden-move penalties apply.
    #[inline]
    pub fn has_forbidden_moves(self) -> bool {
        !matches!(self, RuleMode::Freestyle)
    }

    /// Whether the opening protocol phases are active.
    #[inline]
    pub fn has_opening_protocol(self) -> bool {
        matches!(self, RuleMode::Balanced)
    }

    /// The color subject to forbidden-move penalties, if any.
    ///
    /// Black takes the penalties under both penalty rule sets; the opening
    /// protocol exists so the disadvantage can be traded away.
    #[inline]
    pub fn constrained(self) -> Option<Stone> {
        if self.has_forbidden_moves() {
            Some(Stone::Black)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_flags() {
        assert!(!RuleMode::Freestyle.has_forbidden_moves());
        assert!(RuleMode::Forbidden.has_forbidden_moves());
        assert!(RuleMode::Balanced.has_forbidden_moves());

        assert!(!RuleMode::Freestyle.has_opening_protocol());
        assert!(!RuleMode::Forbidden.has_opening_protocol());
        assert!(RuleMode::Balanced.has_opening_protocol());
    }

    #[test]
    fn test_constrained_color() {
        assert_eq!(RuleMode::Freestyle.constrained(), None);
        assert_eq!(RuleMode::Forbidden.constrained(), Some(Stone::Black));
        assert_eq!(RuleMode::Balanced.constrained(), Some(Stone::Black));
    }
}
