//! Error types for the Gomoku engine

use thiserror::Error;

use crate::board::{Pos, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Rejected construction parameters.
///
/// These are caught when a board, agent or game is built so that the search
/// never runs with an unusable configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("board size {size} is outside {}..={}", MIN_BOARD_SIZE, MAX_BOARD_SIZE)]
    InvalidBoardSize { size: usize },

    #[error("search depth must be at least 1")]
    InvalidDepth,

    #[error("an agent must play Black or White, not an empty stone")]
    InvalidPlayer,

    #[error("move limit must be at least 1")]
    InvalidMoveLimit,

    #[error("unknown algorithm '{0}' (expected minimax or alphabeta)")]
    UnknownAlgorithm(String),
}

/// Reason a move was refused by [`Board::make_move`](crate::Board::make_move).
///
/// The board is left untouched whenever one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,

    #[error("({}, {}) is off the {size}x{size} board", .pos.row, .pos.col)]
    OutOfBounds { pos: Pos, size: usize },

    #[error("({}, {}) is already occupied", .pos.row, .pos.col)]
    Occupied { pos: Pos },
}

/// Failure while running a console game session.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("engine produced an illegal move: {0}")]
    IllegalMove(#[from] MoveError),
}
