//! Board structure with turn and result tracking

use std::fmt;

use super::bitboard::Bitboard;
use super::{Outcome, Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{ConfigError, MoveError};
use crate::rules::check_win;

/// Game board: an N×N grid plus whose turn it is and how the game ended.
///
/// Cells change only through [`Board::make_move`] (a real game move) or
/// [`Board::place`] (raw placement, used by search through
/// [`Probe`](super::Probe) so the placement is always undone).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
    current_player: Stone,
    last_move: Option<Pos>,
    /// Set once a five or a full board is reached; cleared only by `reset`
    outcome: Option<Outcome>,
}

impl Board {
    /// Create an empty `size`×`size` board with Black to move.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(ConfigError::InvalidBoardSize { size });
        }
        Ok(Self::empty(size))
    }

    /// Empty board of an already validated size
    fn empty(size: usize) -> Self {
        let cells = size * size;
        Self {
            size,
            black: Bitboard::new(cells),
            white: Bitboard::new(cells),
            current_player: Stone::Black,
            last_move: None,
            outcome: None,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    #[inline]
    fn pos_at(&self, idx: usize) -> Pos {
        #[allow(clippy::cast_possible_truncation)]
        Pos::new((idx / self.size) as u8, (idx % self.size) as u8)
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get stone at position (`Empty` for off-board positions)
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if !self.in_bounds(pos) {
            return Stone::Empty;
        }
        let idx = self.index(pos);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if an on-board position holds no stone
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.get(pos) == Stone::Empty
    }

    /// In bounds and unoccupied. Does not look at whether the game is over.
    #[inline]
    pub fn is_valid_move(&self, pos: Pos) -> bool {
        self.is_empty(pos)
    }

    /// Put `stone` at `pos` and record it as the last move.
    ///
    /// Returns false without touching the board if the move is invalid or
    /// `stone` is `Empty`. Turn order and game result are left alone.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> bool {
        if !self.is_valid_move(pos) {
            return false;
        }
        let idx = self.index(pos);
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => return false,
        }
        self.last_move = Some(pos);
        true
    }

    /// Reverse a `place`: empty the cell and restore the previous last move.
    pub(crate) fn unplace(&mut self, pos: Pos, previous_last_move: Option<Pos>) {
        let idx = self.index(pos);
        self.black.clear(idx);
        self.white.clear(idx);
        self.last_move = previous_last_move;
    }

    /// Play the current player's stone at `pos` and advance the game.
    ///
    /// A completed five ends the game with the mover as winner; otherwise a
    /// full board ends it as a draw; otherwise the turn passes. On error the
    /// board is unchanged.
    pub fn make_move(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.in_bounds(pos) {
            return Err(MoveError::OutOfBounds { pos, size: self.size });
        }

        let mover = self.current_player;
        if !self.place(pos, mover) {
            return Err(MoveError::Occupied { pos });
        }

        // Win check uses the mover's identity, before the turn flips
        if check_win(self, pos) {
            self.outcome = Some(Outcome::Win(mover));
        } else if self.is_full() {
            self.outcome = Some(Outcome::Draw);
        } else {
            self.current_player = mover.opponent();
        }
        Ok(())
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Winner or draw, `None` while the game is still running
    #[inline]
    pub fn winner(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Positions of all stones of one color, row-major
    pub fn stones(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        let bits = match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        };
        bits.into_iter()
            .flat_map(Bitboard::iter_ones)
            .map(move |idx| self.pos_at(idx))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// True iff no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.cell_count()
    }

    /// All empty cells, row-major
    pub fn empty_cells(&self) -> Vec<Pos> {
        (0..self.cell_count())
            .filter(|&idx| !self.black.get(idx) && !self.white.get(idx))
            .map(|idx| self.pos_at(idx))
            .collect()
    }

    /// Center cell (`size / 2`, `size / 2`)
    #[inline]
    pub fn center(&self) -> Pos {
        #[allow(clippy::cast_possible_truncation)]
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }

    /// Clear the board for a new game, keeping its size
    pub fn reset(&mut self) {
        self.black.clear_all();
        self.white.clear_all();
        self.current_player = Stone::Black;
        self.last_move = None;
        self.outcome = None;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{c:3}")?;
        }
        writeln!(f)?;

        for r in 0..self.size {
            write!(f, "{r:3}")?;
            for c in 0..self.size {
                #[allow(clippy::cast_possible_truncation)]
                let stone = self.get(Pos::new(r as u8, c as u8));
                write!(f, "{:>3}", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
