//! Symmetry check for dot candidates
//!
//! During the dot phase the proposing side submits candidate points for the
//! fifth stone, and the other side later picks one. The candidates must be
//! mutually non-equivalent under whatever symmetry the first four stones
//! impose, or the choice could be gamed by offering the same position twice.
//!
//! The reference stones are Black's first and second placements and White's
//! first and second placements. Depending on how those two pairs lie, the
//! position may be symmetric under a 180-degree rotation about a shared
//! midpoint, a mirror about a horizontal or vertical axis, or a mirror about
//! a 45-degree diagonal. The condition set below reproduces the tournament
//! rule as it was handed down, overlapping branches included; it is not a
//! minimized formulation, and comparisons are exact IEEE doubles throughout
//! (slopes of vertical pairs divide by zero and compare as infinities).

use crate::board::{Board, Pos, Stone};

/// Geometric point; board coordinates promoted to doubles so midpoints can
/// sit between cells.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

impl Point {
    fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn midpoint(a: Point, b: Point) -> Point {
        Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }
}

impl From<Pos> for Point {
    fn from(pos: Pos) -> Self {
        Point::new(f64::from(pos.x), f64::from(pos.y))
    }
}

/// Check a dot submission against the position's symmetries.
///
/// `black` and `white` are each side's two reference stones in placement
/// order. Returns `false` if any candidate cell is occupied or any candidate
/// is the symmetry image of another.
pub fn validate_dots(board: &Board, black: [Pos; 2], white: [Pos; 2], dots: &[Pos]) -> bool {
    for &dot in dots {
        if board.get(dot) != Stone::Empty {
            return false;
        }
    }

    let mut black = black;
    if black[1].x < black[0].x {
        black.swap(0, 1);
    }
    let mut white = white;
    if white[1].x < white[0].x {
        white.swap(0, 1);
    }
    let b = [Point::from(black[0]), Point::from(black[1])];
    let w = [Point::from(white[0]), Point::from(white[1])];

    let images: Vec<Vec<Point>> = dots
        .iter()
        .map(|&dot| images_of(Point::from(dot), b, w))
        .collect();

    for (i, imgs) in images.iter().enumerate() {
        for (j, &dot) in dots.iter().enumerate() {
            if i == j {
                continue;
            }
            if imgs.contains(&Point::from(dot)) {
                return false;
            }
        }
    }
    true
}

/// Symmetry images of `p` implied by the two reference pairs (each pair
/// sorted by ascending x). Zero, one or several images per candidate.
fn images_of(p: Point, b: [Point; 2], w: [Point; 2]) -> Vec<Point> {
    let mut images = Vec::new();
    let [b1, b2] = b;
    let [w1, w2] = w;
    let cb = Point::midpoint(b1, b2);
    let cw = Point::midpoint(w1, w2);

    // Shared midpoint: 180-degree rotation about it
    if cb.x == cw.x && cb.y == cw.y {
        images.push(Point::new(cb.x * 2.0 - p.x, cb.y * 2.0 - p.y));
    }

    let kb = (b2.y - b1.y) / (b2.x - b1.x);
    let kw = (w2.y - w1.y) / (w2.x - w1.x);

    // Mirror about a horizontal axis
    if w1.x == w2.x && b1.x == b2.x && cb.y == cw.y {
        images.push(Point::new(p.x, cb.y * 2.0 - p.y));
    } else if w1.x == w2.x && b1.y == b2.y && cb.y == cw.y && b2.y == cw.y {
        images.push(Point::new(p.x, cb.y * 2.0 - p.y));
    } else if b1.x == b2.x && w1.y == w2.y && cb.y == cw.y && w2.y == cb.y {
        images.push(Point::new(p.x, cb.y * 2.0 - p.y));
    } else if cb.x == cw.x && cb.y == cw.y && (w1.y == w2.y && b1.y == b2.y && w1.y == b1.y) {
        images.push(Point::new(cb.x * 2.0 - p.x, p.y));
    }

    // Mirror about a vertical axis
    if w1.y == w2.y && b1.y == b2.y && cb.x == cw.x {
        images.push(Point::new(cb.x * 2.0 - p.x, p.y));
    } else if w1.y == w2.y && b1.x == b2.x && cb.x == cw.x && b2.x == cb.x {
        images.push(Point::new(cb.x * 2.0 - p.x, p.y));
    } else if b1.y == b2.y && w1.x == w2.x && cb.x == cw.x && w2.x == cb.x {
        images.push(Point::new(cb.x * 2.0 - p.x, p.y));
    } else if cb.x == cw.x && cb.y == cw.y && (w1.x == w2.x && b1.x == b2.x && w1.x == b1.x) {
        images.push(Point::new(cb.x * 2.0 - p.x, p.y));
    }

    let kc = (cw.y - cb.y) / (cw.x - cb.x);

    // Mirror about a 45-degree diagonal
    if kb != 0.0 && kb == -kw && (kc == 1.0 || kc == -1.0) {
        // Crossing slopes
        if kc < 0.0 {
            // Mirror line rising to the upper right
            if kb < 0.0 {
                images.push(Point::new(
                    (cw.x - (p.y - cw.y)).abs(),
                    (cw.y - (p.x - cw.x)).abs(),
                ));
            } else {
                images.push(Point::new(
                    (cb.x - (p.y - cb.y)).abs(),
                    (cb.y - (p.x - cb.x)).abs(),
                ));
            }
        } else {
            // Mirror line rising to the upper left; both slope signs land on
            // the same image here
            if kb > 0.0 {
                images.push(Point::new(
                    (cw.x + (p.y - cw.y)).abs(),
                    (cw.y + (p.x - cw.x)).abs(),
                ));
            } else {
                images.push(Point::new(
                    (cw.x + (p.y - cw.y)).abs(),
                    (cw.y + (p.x - cw.x)).abs(),
                ));
            }
        }
    } else if kb == kw && kc == -kb {
        // Parallel slopes with the midpoint line perpendicular to them
        if kc < 0.0 {
            images.push(Point::new(
                (cw.x - (p.y - cw.y)).abs(),
                (cw.y - (p.x - cw.x)).abs(),
            ));
        } else {
            images.push(Point::new(
                (cw.x + (p.y - cw.y)).abs(),
                (cw.y + (p.x - cw.x)).abs(),
            ));
        }
    }

    images
}
