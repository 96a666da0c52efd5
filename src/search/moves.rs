//! Candidate move generation
//!
//! Only empty cells near existing stones are searched. A cell far from every
//! stone cannot take part in a five without support, and skipping it keeps
//! the branching factor small enough for fixed-depth search on 15x15.

use crate::board::{Board, Pos, Stone};

/// Neighborhood radius for interior search nodes
pub const SEARCH_RADIUS: u8 = 1;
/// Wider neighborhood used for the agent's root candidates
pub const ROOT_RADIUS: u8 = 2;

/// Empty cells within Chebyshev distance `radius` of any stone, row-major.
///
/// An empty board yields only the center. If no stone has a free neighbor
/// in range, every empty cell is returned instead.
///
/// # Example
///
/// ```
/// use gomoku::{search::neighbor_moves, Board, Pos};
///
/// let board = Board::new(15).unwrap();
/// assert_eq!(neighbor_moves(&board, 1), vec![Pos::new(7, 7)]);
/// ```
pub fn neighbor_moves(board: &Board, radius: u8) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    let size = board.size();
    let radius = i32::from(radius);
    let mut near = vec![false; board.cell_count()];

    for stone_pos in board.stones(Stone::Black).chain(board.stones(Stone::White)) {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if let Some(pos) = stone_pos.offset(dr, dc, size) {
                    if board.is_empty(pos) {
                        near[pos.row as usize * size + pos.col as usize] = true;
                    }
                }
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    let moves: Vec<Pos> = near
        .iter()
        .enumerate()
        .filter(|&(_, &is_near)| is_near)
        .map(|(idx, _)| Pos::new((idx / size) as u8, (idx % size) as u8))
        .collect();

    if moves.is_empty() {
        board.empty_cells()
    } else {
        moves
    }
}
