//! AI player wrapping one of the search strategies
//!
//! An [`Agent`] owns its color, its search depth and the algorithm it
//! searches with. Asked for a move, it expands the wider root neighborhood,
//! searches every candidate on a private copy of the board and returns the
//! best one.
//!
//! # Example
//!
//! ```
//! use gomoku::{Agent, Algorithm, Board, Pos, Stone};
//!
//! let mut board = Board::new(15).unwrap();
//! board.make_move(Pos::new(7, 7)).unwrap();
//!
//! let mut agent = Agent::new(Stone::White, Algorithm::AlphaBeta, 2).unwrap();
//! let result = agent.choose_move_with_stats(&board);
//! println!("Best move: {}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::info;

use crate::board::{Board, Pos, Stone};
use crate::error::ConfigError;
use crate::search::{neighbor_moves, AlphaBeta, Minimax, Search, ROOT_RADIUS};

/// Search strategy used by an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    /// Full minimax, no pruning
    Minimax,
    /// Minimax with alpha-beta pruning
    #[value(name = "alphabeta")]
    AlphaBeta,
}

impl Algorithm {
    /// Fresh searcher for one move decision
    fn searcher(self) -> Box<dyn Search> {
        match self {
            Algorithm::Minimax => Box::new(Minimax::new()),
            Algorithm::AlphaBeta => Box::new(AlphaBeta::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alphabeta",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" | "alpha-beta" => Ok(Algorithm::AlphaBeta),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move
    pub best_move: Pos,
    /// Score of the chosen move from the agent's point of view
    pub score: i32,
    /// Strategy that produced the move
    pub algorithm: Algorithm,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// AI player.
#[derive(Debug, Clone)]
pub struct Agent {
    player: Stone,
    algorithm: Algorithm,
    depth: u8,
}

impl Agent {
    /// Create an agent playing `player` with a fixed search `depth` (plies).
    ///
    /// Fails if `depth` is zero or `player` is `Stone::Empty`.
    pub fn new(player: Stone, algorithm: Algorithm, depth: u8) -> Result<Self, ConfigError> {
        if player == Stone::Empty {
            return Err(ConfigError::InvalidPlayer);
        }
        if depth == 0 {
            return Err(ConfigError::InvalidDepth);
        }
        Ok(Self {
            player,
            algorithm,
            depth,
        })
    }

    #[must_use]
    pub fn player(&self) -> Stone {
        self.player
    }

    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Pick a move for the position. The given board is never modified.
    ///
    /// On an empty board this is the center. The result is a valid move
    /// whenever the board has an empty cell.
    #[must_use]
    pub fn choose_move(&mut self, board: &Board) -> Pos {
        self.choose_move_with_stats(board).best_move
    }

    /// Pick a move and report score, timing and node count.
    #[must_use]
    pub fn choose_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();

        let candidates = neighbor_moves(board, ROOT_RADIUS);
        if candidates.is_empty() {
            return MoveResult {
                best_move: board.center(),
                score: 0,
                algorithm: self.algorithm,
                time_ms: start.elapsed().as_millis() as u64,
                nodes: 0,
            };
        }

        let mut work_board = board.clone();
        let mut searcher = self.algorithm.searcher();
        let result = searcher.search_root(&mut work_board, &candidates, self.depth, self.player);

        let best_move = result.best_move.unwrap_or(candidates[0]);
        let time_ms = start.elapsed().as_millis() as u64;
        info!(
            "{} ({}, depth {}) plays {} [score {}, {} nodes, {}ms]",
            self.player.name(),
            self.algorithm,
            self.depth,
            best_move,
            result.score,
            result.nodes,
            time_ms
        );

        MoveResult {
            best_move,
            score: result.score,
            algorithm: self.algorithm,
            time_ms,
            nodes: result.nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from_moves(moves: &[(u8, u8)]) -> Board {
        let mut board = Board::new(15).unwrap();
        for &(r, c) in moves {
            board.make_move(Pos::new(r, c)).unwrap();
        }
        board
    }

    #[test]
    fn test_agent_config_validation() {
        assert_eq!(
            Agent::new(Stone::Black, Algorithm::Minimax, 0).unwrap_err(),
            ConfigError::InvalidDepth
        );
        assert_eq!(
            Agent::new(Stone::Empty, Algorithm::AlphaBeta, 2).unwrap_err(),
            ConfigError::InvalidPlayer
        );
        let agent = Agent::new(Stone::White, Algorithm::AlphaBeta, 3).unwrap();
        assert_eq!(agent.player(), Stone::White);
        assert_eq!(agent.algorithm(), Algorithm::AlphaBeta);
        assert_eq!(agent.depth(), 3);
    }

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("minimax".parse::<Algorithm>(), Ok(Algorithm::Minimax));
        assert_eq!("AlphaBeta".parse::<Algorithm>(), Ok(Algorithm::AlphaBeta));
        assert_eq!("alpha-beta".parse::<Algorithm>(), Ok(Algorithm::AlphaBeta));
        assert_eq!(
            "NegaMax".parse::<Algorithm>(),
            Err(ConfigError::UnknownAlgorithm("NegaMax".to_string()))
        );
        assert_eq!(Algorithm::AlphaBeta.to_string(), "alphabeta");
    }

    #[test]
    fn test_empty_board_plays_center() {
        let board = Board::new(15).unwrap();
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
            let mut agent = Agent::new(Stone::Black, algorithm, 2).unwrap();
            assert_eq!(agent.choose_move(&board), Pos::new(7, 7));
        }
    }

    #[test]
    fn test_finds_immediate_win() {
        // Black: (7,3)..(7,6); White scattered on row 0
        let board = board_from_moves(&[(7, 3), (0, 0), (7, 4), (0, 2), (7, 5), (0, 4), (7, 6), (0, 6)]);
        let mut agent = Agent::new(Stone::Black, Algorithm::AlphaBeta, 2).unwrap();
        let m = agent.choose_move(&board);
        assert!(m == Pos::new(7, 2) || m == Pos::new(7, 7), "expected a winning move, got {m}");
    }

    #[test]
    fn test_blocks_open_four_end() {
        // White has four in a column with one end blocked; Black must take the other end
        let board = board_from_moves(&[(4, 7), (5, 7), (10, 10), (6, 7), (10, 12), (7, 7), (11, 3), (8, 7)]);
        let mut agent = Agent::new(Stone::Black, Algorithm::AlphaBeta, 2).unwrap();
        assert_eq!(agent.choose_move(&board), Pos::new(9, 7));
    }

    #[test]
    fn test_board_not_modified() {
        let board = board_from_moves(&[(7, 7), (7, 8), (8, 8)]);
        let before = board.clone();
        let mut agent = Agent::new(Stone::White, Algorithm::Minimax, 2).unwrap();
        let m = agent.choose_move(&board);
        assert_eq!(board, before);
        assert!(board.is_valid_move(m));
    }

    #[test]
    fn test_algorithms_agree() {
        let board = board_from_moves(&[(7, 7), (8, 8), (7, 8)]);
        let mut minimax = Agent::new(Stone::White, Algorithm::Minimax, 2).unwrap();
        let mut alphabeta = Agent::new(Stone::White, Algorithm::AlphaBeta, 2).unwrap();

        let full = minimax.choose_move_with_stats(&board);
        let pruned = alphabeta.choose_move_with_stats(&board);

        assert_eq!(full.best_move, pruned.best_move);
        assert_eq!(full.score, pruned.score);
        assert!(pruned.nodes <= full.nodes);
        assert_eq!(pruned.algorithm, Algorithm::AlphaBeta);
    }
}
