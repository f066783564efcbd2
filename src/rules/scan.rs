//! Gap-tolerant run scanner
//!
//! Walks cell by cell from an origin stone in one direction and reports how
//! far the origin's color reaches. One empty cell may be bridged; the scan
//! remembers how many stones sat before that gap so the classifier can split
//! gapped patterns apart later.

use crate::board::{Board, Direction, Pos, Stone};

/// What one directional walk found. The origin stone itself is not counted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Same-colored stones seen, including any counted past the gap.
    pub stones: u8,
    /// Stones counted before the tolerated gap (meaningful only with `gap`).
    pub before_gap: u8,
    /// Whether one empty cell was bridged.
    pub gap: bool,
    /// Whether the walk ended at the board edge or an enemy stone.
    pub blocked: bool,
}

impl Run {
    /// Contiguous stones directly adjacent to the origin on this side.
    #[inline]
    pub fn solid(&self) -> u8 {
        if self.gap {
            self.before_gap
        } else {
            self.stones
        }
    }
}

/// Scan from `origin` (exclusive) in `dir` for stones of `color`.
///
/// Termination rules:
/// - an enemy stone or the board edge stops the walk and marks it blocked
/// - one empty cell is bridged; a second empty cell directly after it stops
///   the walk and cancels the gap (nothing usable sits beyond it)
/// - a second separate empty cell stops the walk with the first gap intact
///
/// Scanning for `Stone::Empty` is meaningless and returns an empty run.
pub fn scan(board: &Board, origin: Pos, dir: Direction, color: Stone) -> Run {
    let mut run = Run::default();
    if color == Stone::Empty {
        return run;
    }
    let mut cur = origin;
    let mut in_gap = false;
    loop {
        let Some(next) = cur.step(dir) else {
            run.blocked = true;
            return run;
        };
        match board.get(next) {
            cell if cell == color => {
                run.stones += 1;
                in_gap = false;
            }
            Stone::Empty => {
                if in_gap {
                    // two empties in a row: the gap is not usable after all
                    run.gap = false;
                    return run;
                }
                if run.gap {
                    // a second gap ends the run; the first one stands
                    return run;
                }
                run.gap = true;
                run.before_gap = run.stones;
                in_gap = true;
            }
            _ => {
                run.blocked = true;
                return run;
            }
        }
        cur = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new();
        for &(x, y, color) in stones {
            board.place(Pos::new(x, y), color).unwrap();
        }
        board
    }

    #[test]
    fn test_scan_empty_color_is_skipped() {
        let board = Board::new();
        let run = scan(&board, Pos::new(7, 7), Direction::Right, Stone::Empty);
        assert_eq!(run, Run::default());
    }

    #[test]
    fn test_scan_plain_run_ends_open() {
        // X X X . . to the right of the origin
        let board = board_with(&[
            (8, 7, Stone::Black),
            (9, 7, Stone::Black),
            (10, 7, Stone::Black),
        ]);
        let run = scan(&board, Pos::new(7, 7), Direction::Right, Stone::Black);
        assert_eq!(run.stones, 3);
        assert!(!run.gap, "consecutive empties cancel the gap");
        assert!(!run.blocked);
    }

    #[test]
    fn test_scan_blocked_by_enemy() {
        let board = board_with(&[
            (8, 7, Stone::Black),
            (9, 7, Stone::Black),
            (10, 7, Stone::White),
        ]);
        let run = scan(&board, Pos::new(7, 7), Direction::Right, Stone::Black);
        assert_eq!(run.stones, 2);
        assert!(run.blocked);
        assert!(!run.gap);
    }

    #[test]
    fn test_scan_blocked_by_edge() {
        let board = board_with(&[(1, 7, Stone::Black), (0, 7, Stone::Black)]);
        let run = scan(&board, Pos::new(2, 7), Direction::Left, Stone::Black);
        assert_eq!(run.stones, 2);
        assert!(run.blocked);
    }

    #[test]
    fn test_scan_bridges_one_gap() {
        // X . X X then open space
        let board = board_with(&[
            (8, 7, Stone::Black),
            (10, 7, Stone::Black),
            (11, 7, Stone::Black),
        ]);
        let run = scan(&board, Pos::new(7, 7), Direction::Right, Stone::Black);
        assert_eq!(run.stones, 3);
        assert!(run.gap);
        assert_eq!(run.before_gap, 1);
        assert!(!run.blocked);
        assert_eq!(run.solid(), 1);
    }

    #[test]
    fn test_scan_second_separate_gap_ends_run() {
        // X . X . X: the walk stops at the second gap, the first gap stands
        let board = board_with(&[
            (8, 7, Stone::Black),
            (10, 7, Stone::Black),
            (12, 7, Stone::Black),
        ]);
        let run = scan(&board, Pos::new(7, 7), Direction::Right, Stone::Black);
        assert_eq!(run.stones, 2);
        assert!(run.gap);
        assert_eq!(run.before_gap, 1);
        assert!(!run.blocked);
    }

    #[test]
    fn test_scan_double_empty_cancels_gap() {
        // X . . X: nothing usable beyond the double gap
        let board = board_with(&[(8, 7, Stone::Black), (11, 7, Stone::Black)]);
        let run = scan(&board, Pos::new(7, 7), Direction::Right, Stone::Black);
        assert_eq!(run.stones, 1);
        assert!(!run.gap);
        assert_eq!(run.solid(), 1);
    }

    #[test]
    fn test_scan_gap_then_enemy() {
        // . O directly after the origin: gap recorded, then blocked
        let board = board_with(&[(9, 7, Stone::White)]);
        let run = scan(&board, Pos::new(7, 7), Direction::Right, Stone::Black);
        assert_eq!(run.stones, 0);
        assert!(run.gap);
        assert_eq!(run.before_gap, 0);
        assert!(run.blocked);
    }

    #[test]
    fn test_scan_diagonal() {
        let board = board_with(&[(8, 6, Stone::White), (9, 5, Stone::White)]);
        let run = scan(&board, Pos::new(7, 7), Direction::UpRight, Stone::White);
        assert_eq!(run.stones, 2);
    }
}
