//! Shape classification for the line through a stone on one axis
//!
//! A shape is the category of a same-colored line: its stone count plus how
//! many of its ends are shut by an enemy stone or the board edge. Gapped
//! patterns are first-class: `X X . X` through the right pivot is both a
//! short solid run and a longer gapped one, and forbidden-move detection has
//! to see both.

use arrayvec::ArrayVec;

use super::scan::scan;
use crate::board::{Board, Direction, Pos, Stone};

/// Line categories, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shape {
    One,
    Two,
    /// Three stones, both ends shut.
    Three,
    /// Three stones, one end shut.
    SemiOpenThree,
    /// Three stones, both ends free.
    OpenThree,
    /// Four stones, both ends shut.
    Four,
    /// Four stones, one end shut.
    SemiOpenFour,
    /// Four stones, both ends free.
    OpenFour,
    Five,
    /// Six or more in a row.
    Overline,
}

impl Shape {
    /// Category for a line of `len` stones with `closed` shut ends.
    ///
    /// Lengths above five are always `Overline` and exactly five is always
    /// `Five`, no matter how many ends are shut.
    pub fn of_length(len: u8, closed: u8) -> Shape {
        if len > 5 {
            return Shape::Overline;
        }
        match (len, closed) {
            (5, _) => Shape::Five,
            (4, 0) => Shape::OpenFour,
            (4, 1) => Shape::SemiOpenFour,
            (4, _) => Shape::Four,
            (3, 0) => Shape::OpenThree,
            (3, 1) => Shape::SemiOpenThree,
            (3, _) => Shape::Three,
            (2, _) => Shape::Two,
            _ => Shape::One,
        }
    }
}

/// Shapes formed through `pos` along one axis (`axis` and its opposite).
///
/// An empty origin yields no shapes. A solid or single-gap line below five
/// stones yields exactly one shape. Otherwise the line is split around the
/// gaps: the contiguous center through the origin, plus one flank per side
/// bridging that side's gap. Up to three shapes total.
pub fn shapes_on_axis(board: &Board, pos: Pos, axis: Direction) -> ArrayVec<Shape, 3> {
    let mut shapes = ArrayVec::new();
    let color = board.get(pos);
    if color == Stone::Empty {
        return shapes;
    }

    let ahead = scan(board, pos, axis, color);
    let behind = scan(board, pos, axis.opposite(), color);

    let total = ahead.stones + 1 + behind.stones;
    let gaps = u8::from(ahead.gap) + u8::from(behind.gap);
    let closed = u8::from(ahead.blocked) + u8::from(behind.blocked);

    if gaps < 2 {
        let len = total - gaps;
        if len < 5 {
            shapes.push(Shape::of_length(len, closed));
            return shapes;
        }
    }

    // Gapped on both sides, or five-plus reach: split the line around the
    // gaps so the evaluator sees the solid center and the bridged flanks.
    let solid_ahead = ahead.solid();
    let solid_behind = behind.solid();
    let center = solid_ahead + 1 + solid_behind;
    if center >= 5 {
        shapes.push(Shape::of_length(center, closed));
        return shapes;
    }
    shapes.push(match center {
        // A gap on each side keeps both center ends free
        4 => Shape::OpenFour,
        3 => Shape::OpenThree,
        len => Shape::of_length(len, closed),
    });
    shapes.push(Shape::of_length(
        center + (ahead.stones - solid_ahead),
        u8::from(ahead.blocked),
    ));
    shapes.push(Shape::of_length(
        center + (behind.stones - solid_behind),
        u8::from(behind.blocked),
    ));
    shapes
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
    fn test_of_length_mapping() {
        assert_eq!(Shape::of_length(6, 0), Shape::Overline);
        assert_eq!(Shape::of_length(9, 2), Shape::Overline);
        assert_eq!(Shape::of_length(5, 0), Shape::Five);
        assert_eq!(Shape::of_length(5, 2), Shape::Five);
        assert_eq!(Shape::of_length(4, 0), Shape::OpenFour);
        assert_eq!(Shape::of_length(4, 1), Shape::SemiOpenFour);
        assert_eq!(Shape::of_length(4, 2), Shape::Four);
        assert_eq!(Shape::of_length(3, 0), Shape::OpenThree);
        assert_eq!(Shape::of_length(3, 1), Shape::SemiOpenThree);
        assert_eq!(Shape::of_length(3, 2), Shape::Three);
        assert_eq!(Shape::of_length(2, 0), Shape::Two);
        assert_eq!(Shape::of_length(2, 2), Shape::Two);
        assert_eq!(Shape::of_length(1, 0), Shape::One);
        assert_eq!(Shape::of_length(0, 1), Shape::One);
    }

    #[test]
    fn test_of_length_is_pure() {
        for len in 0..=10u8 {
            for closed in 0..=2u8 {
                assert_eq!(
                    Shape::of_length(len, closed),
                    Shape::of_length(len, closed)
                );
            }
        }
    }

    #[test]
    fn test_empty_origin_has_no_shapes() {
        let board = Board::new();
        let shapes = shapes_on_axis(&board, Pos::new(7, 7), Direction::Left);
        assert!(shapes.is_empty());
    }

    #[test]
    fn test_lone_stone_is_one() {
        let board = board_with(&[(7, 7, Stone::Black)]);
        let shapes = shapes_on_axis(&board, Pos::new(7, 7), Direction::Left);
        assert_eq!(shapes.as_slice(), &[Shape::One]);
    }

    #[test]
    fn test_open_three() {
        // . X X X . across the middle of the board
        let board = board_with(&[
            (6, 7, Stone::Black),
            (7, 7, Stone::Black),
            (8, 7, Stone::Black),
        ]);
        let shapes = shapes_on_axis(&board, Pos::new(7, 7), Direction::Left);
        assert_eq!(shapes.as_slice(), &[Shape::OpenThree]);
    }

    #[test]
    fn test_blocked_three_is_semi_open() {
        // O X X X . with the enemy shutting the left end
        let board = board_with(&[
            (5, 7, Stone::White),
            (6, 7, Stone::Black),
            (7, 7, Stone::Black),
            (8, 7, Stone::Black),
        ]);
        let shapes = shapes_on_axis(&board, Pos::new(7, 7), Direction::Left);
        assert_eq!(shapes.as_slice(), &[Shape::SemiOpenThree]);
    }

    #[test]
    fn test_gapped_pair_discounts_the_gap() {
        // . X X . X .: three stones spanning a gap count one short
        let board = board_with(&[
            (6, 7, Stone::Black),
            (7, 7, Stone::Black),
            (9, 7, Stone::Black),
        ]);
        let shapes = shapes_on_axis(&board, Pos::new(7, 7), Direction::Left);
        assert_eq!(shapes.as_slice(), &[Shape::Two]);
    }

    #[test]
    fn test_gapped_four_stones_count_as_three() {
        // . X X X . X .: four stones spanning a gap make an open three
        let board = board_with(&[
            (5, 7, Stone::Black),
            (6, 7, Stone::Black),
            (7, 7, Stone::Black),
            (9, 7, Stone::Black),
        ]);
        let shapes = shapes_on_axis(&board, Pos::new(7, 7), Direction::Left);
        assert_eq!(shapes.as_slice(), &[Shape::OpenThree]);
    }

    #[test]
    fn test_centered_five_is_five() {
        // X X X X X with the pivot in the middle
        let board = board_with(&[
            (5, 7, Stone::Black),
            (6, 7, Stone::Black),
            (7, 7, Stone::Black),
            (8, 7, Stone::Black),
            (9, 7, Stone::Black),
        ]);
        let shapes = shapes_on_axis(&board, Pos::new(7, 7), Direction::Left);
        assert_eq!(shapes.as_slice(), &[Shape::Five]);
    }

    #[test]
    fn test_centered_five_shut_by_enemies_is_still_five() {
        // O X X X X X O: closed ends never demote a five
        let board = board_with(&[
            (4, 7, Stone::White),
            (5, 7, Stone::Black),
            (6, 7, Stone::Black),
            (7, 7, Stone::Black),
            (8, 7, Stone::Black),
            (9, 7, Stone::Black),
            (10, 7, Stone::White),
        ]);
        let shapes = shapes_on_axis(&board, Pos::new(7, 7), Direction::Left);
        assert_eq!(shapes.as_slice(), &[Shape::Five]);
    }

    #[test]
    fn test_contiguous_six_is_overline() {
        let board = board_with(&[
            (4, 7, Stone::Black),
            (5, 7, Stone::Black),
            (6, 7, Stone::Black),
            (7, 7, Stone::Black),
            (8, 7, Stone::Black),
            (9, 7, Stone::Black),
        ]);
        let shapes = shapes_on_axis(&board, Pos::new(7, 7), Direction::Left);
        assert_eq!(shapes.as_slice(), &[Shape::Overline]);
    }

    #[test]
    fn test_gap_on_each_side_yields_center_and_flanks() {
        // X . X X . X with the pivot at the second X of the middle pair:
        // center X X plus a bridged three on each side
        let board = board_with(&[
            (4, 7, Stone::Black),
            (6, 7, Stone::Black),
            (7, 7, Stone::Black),
            (9, 7, Stone::Black),
        ]);
        let shapes = shapes_on_axis(&board, Pos::new(7, 7), Direction::Left);
        assert_eq!(shapes.len(), 3);
        assert!(shapes.contains(&Shape::Two), "solid center: {shapes:?}");
        assert_eq!(
            shapes.iter().filter(|&&s| s == Shape::OpenThree).count(),
            2,
            "one bridged three per side: {shapes:?}"
        );
    }

    #[test]
    fn test_gapped_four_reaching_past_the_gap() {
        // X X X X . X placing no blocker: the pivot at the right end of the
        // solid four sees a semi-solid five-reach pattern
        let board = board_with(&[
            (3, 7, Stone::Black),
            (4, 7, Stone::Black),
            (5, 7, Stone::Black),
            (6, 7, Stone::Black),
            (8, 7, Stone::Black),
        ]);
        let shapes = shapes_on_axis(&board, Pos::new(6, 7), Direction::Left);
        // total 5 with one gap discounted: a straight four
        assert_eq!(shapes.as_slice(), &[Shape::OpenFour]);
    }
}
