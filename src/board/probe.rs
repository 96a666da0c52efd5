//! Scoped trial placement for search

use std::ops::{Deref, DerefMut};

use super::{Board, Pos, Stone};

/// A stone placed for exploration that is removed again when the guard drops.
///
/// The guard dereferences to the board, so the placed position can be
/// searched through it. Every exit path, including an early `break` on a
/// cutoff, runs the undo and restores `last_move`.
///
/// ```
/// use gomoku::{Board, Pos, Probe, Stone};
///
/// let mut board = Board::new(15).unwrap();
/// {
///     let probe = Probe::place(&mut board, Pos::new(7, 7), Stone::Black).unwrap();
///     assert_eq!(probe.get(Pos::new(7, 7)), Stone::Black);
/// }
/// assert_eq!(board.get(Pos::new(7, 7)), Stone::Empty);
/// ```
pub struct Probe<'a> {
    board: &'a mut Board,
    pos: Pos,
    previous_last_move: Option<Pos>,
}

impl<'a> Probe<'a> {
    /// Place `stone` at `pos`, or return `None` if the cell is not free.
    pub fn place(board: &'a mut Board, pos: Pos, stone: Stone) -> Option<Self> {
        let previous_last_move = board.last_move();
        if !board.place(pos, stone) {
            return None;
        }
        Some(Self {
            board,
            pos,
            previous_last_move,
        })
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.unplace(self.pos, self.previous_last_move);
    }
}
