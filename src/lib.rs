//! Gomoku AI with minimax and alpha-beta search
//!
//! Standard free-style Gomoku: two players alternate on a square board
//! (15x15 by default), and the first to line up five or more stones
//! horizontally, vertically or diagonally wins. A full board with no line
//! is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards and scoped undo
//! - [`rules`]: Win, full-board and terminal detection
//! - [`eval`]: Pattern scoring of runs and open ends
//! - [`search`]: Candidate generation, minimax and alpha-beta
//! - [`agent`]: AI player choosing a move with a selected search
//! - [`game`]: Text-mode game session
//! - [`ui`]: egui window
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Agent, Algorithm, Board, Pos, Stone};
//!
//! let mut board = Board::new(15).unwrap();
//! board.make_move(Pos::new(7, 7)).unwrap();
//!
//! // AI responds as White
//! let mut agent = Agent::new(Stone::White, Algorithm::AlphaBeta, 2).unwrap();
//! let pos = agent.choose_move(&board);
//! board.make_move(pos).unwrap();
//! println!("AI plays at ({}, {})", pos.row, pos.col);
//! ```
//!
//! # Search
//!
//! Both searchers run to a fixed depth over the same candidate order and
//! the same evaluation, so they always agree on the score and the move.
//! Alpha-beta only visits fewer nodes.

pub mod agent;
pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use agent::{Agent, Algorithm, MoveResult};
pub use board::{Board, Outcome, Pos, Probe, Stone, DEFAULT_BOARD_SIZE};
pub use config::{GameConfig, GameMode, PlayerConfig};
pub use error::{ConfigError, GameError, MoveError};
pub use game::{ConsoleGame, GameEnd};
