//! The eight winning lines and the parameterized scan over them.

use super::super::{Board, Mark, Position, Square};
use tracing::{instrument, trace};

/// Three positions that win when marked uniformly.
pub type Line = [Position; 3];

/// Rows, columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// True when `mark` holds exactly `count` squares of `line` and the rest are empty.
pub(crate) fn line_matches(board: &Board, line: &Line, mark: Mark, count: usize) -> bool {
    let held = line
        .iter()
        .filter(|&&pos| board.get(pos) == Square::Occupied(mark))
        .count();
    let open = line.iter().filter(|&&pos| board.is_empty(pos)).count();
    held == count && held + open == line.len()
}

/// Lines in which `mark` holds exactly `count` squares and every other square is open.
///
/// `count == 3` finds completed lines, `count == 2` finds lines one move
/// from completion. Lines are yielded in [`LINES`] order.
pub fn scan_lines(
    board: &Board,
    mark: Mark,
    count: usize,
) -> impl Iterator<Item = &'static Line> {
    LINES
        .iter()
        .filter(move |line| line_matches(board, line, mark, count))
}

/// First open position on `line`, if any.
pub fn open_square(board: &Board, line: &Line) -> Option<Position> {
    line.iter().copied().find(|&pos| board.is_empty(pos))
}

/// The square that would give `mark` three in a row, if one exists.
///
/// Ties go to the first qualifying line in [`LINES`] order.
#[instrument(skip(board))]
pub fn completing_square(board: &Board, mark: Mark) -> Option<Position> {
    let square = scan_lines(board, mark, 2).find_map(|line| open_square(board, line));
    trace!(?square, "Scanned for completing square");
    square
}
