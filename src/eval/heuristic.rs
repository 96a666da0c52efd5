//! Heuristic evaluation function for Gomoku board positions
//!
//! Every stone is used as an anchor on each of the four axes, so a run of
//! `n` stones is scored once per stone it contains, which weights longer
//! runs up.

use crate::board::{Board, Pos, Stone, DIRECTIONS};
use crate::rules::win::run_length;

use super::patterns::pattern_score;

/// Evaluate the board from the perspective of the given color.
///
/// Returns the pattern total of `color`'s stones minus the total of the
/// opponent's stones. Positive values favor `color`. The result is
/// zero-sum: `evaluate(b, Black) == -evaluate(b, White)`.
///
/// # Example
///
/// ```
/// use gomoku::{eval::evaluate, Board, Pos, Stone};
///
/// let mut board = Board::new(15).unwrap();
/// board.place(Pos::new(7, 7), Stone::Black);
/// assert!(evaluate(&board, Stone::Black) > 0);
/// ```
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    let opponent = color.opponent();
    evaluate_stones(board, color) - evaluate_stones(board, opponent)
}

/// Sum of line scores over every stone of `color` and every axis.
#[must_use]
pub fn evaluate_stones(board: &Board, color: Stone) -> i32 {
    board
        .stones(color)
        .map(|pos| {
            DIRECTIONS
                .iter()
                .map(|&(dr, dc)| line_score(board, pos, dr, dc))
                .sum::<i32>()
        })
        .sum()
}

/// Score the run through `pos` along axis `(dr, dc)`.
///
/// Counts consecutive stones of the anchor's color forward and backward
/// (the anchor once), then checks whether the cell just past each end is
/// on the board and empty.
#[must_use]
pub fn line_score(board: &Board, pos: Pos, dr: i32, dc: i32) -> i32 {
    let color = board.get(pos);
    if color == Stone::Empty {
        return 0;
    }
    let size = board.size();

    let forward = run_length(board, pos, dr, dc, color);
    let backward = run_length(board, pos, -dr, -dc, color);
    let consecutive = 1 + forward + backward;

    let is_open = |steps: usize, sign: i32| {
        let steps = (steps + 1) as i32 * sign;
        pos.offset(dr * steps, dc * steps, size)
            .is_some_and(|end| board.get(end) == Stone::Empty)
    };
    let open_ends = u8::from(is_open(forward, 1)) + u8::from(is_open(backward, -1));

    pattern_score(consecutive, open_ends)
}
