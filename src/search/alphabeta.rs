//! Minimax with alpha-beta pruning
//!
//! Same tree, same evaluation and same move order as [`Minimax`](super::Minimax);
//! branches that cannot change the parent's choice are skipped.
//!
//! # Example
//!
//! ```
//! use gomoku::search::{AlphaBeta, Search};
//! use gomoku::{Board, Pos, Stone};
//!
//! let mut board = Board::new(15).unwrap();
//! board.place(Pos::new(7, 7), Stone::Black);
//!
//! let mut searcher = AlphaBeta::new();
//! let result = searcher.search(&mut board, 2, true, Stone::White);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use log::debug;

use crate::board::{Board, Pos, Probe, Stone};
use crate::eval::evaluate;
use crate::rules::is_terminal;

use super::{mover, neighbor_moves, Search, SearchResult, INF, SEARCH_RADIUS};

/// Alpha-beta search engine.
#[derive(Debug, Default)]
pub struct AlphaBeta {
    nodes: u64,
    /// Sibling loops stopped early in the last search
    cutoffs: u64,
}

impl AlphaBeta {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cutoffs taken by the most recent call
    #[must_use]
    pub fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    fn reset(&mut self) {
        self.nodes = 0;
        self.cutoffs = 0;
    }

    /// Recursive alpha-beta. `alpha` is what the maximizer is already
    /// guaranteed, `beta` what the minimizer is already guaranteed.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        alpha: i32,
        beta: i32,
        maximizing: bool,
        player: Stone,
    ) -> SearchResult {
        self.nodes += 1;

        if depth == 0 || is_terminal(board) {
            return SearchResult::leaf(evaluate(board, player));
        }

        let moves = neighbor_moves(board, SEARCH_RADIUS);
        self.expand(board, &moves, depth, alpha, beta, maximizing, player)
    }

    #[allow(clippy::too_many_arguments)]
    fn expand(
        &mut self,
        board: &mut Board,
        moves: &[Pos],
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        player: Stone,
    ) -> SearchResult {
        let stone = mover(maximizing, player);
        let mut best = SearchResult::worst(maximizing);

        for &mov in moves {
            let Some(mut probe) = Probe::place(board, mov, stone) else {
                continue;
            };
            let score = self
                .alpha_beta(&mut probe, depth - 1, alpha, beta, !maximizing, player)
                .score;
            drop(probe);

            best.consider(maximizing, mov, score);

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if alpha >= beta {
                self.cutoffs += 1;
                break;
            }
        }

        if best.best_move.is_none() {
            return SearchResult::leaf(evaluate(board, player));
        }
        best
    }
}

impl Search for AlphaBeta {
    fn search(&mut self, board: &mut Board, depth: u8, maximizing: bool, player: Stone) -> SearchResult {
        self.reset();
        let mut result = self.alpha_beta(board, depth, -INF, INF, maximizing, player);
        result.nodes = self.nodes;
        result
    }

    fn search_root(&mut self, board: &mut Board, moves: &[Pos], depth: u8, player: Stone) -> SearchResult {
        self.reset();
        self.nodes = 1;
        let mut result = if depth == 0 {
            SearchResult::leaf(evaluate(board, player))
        } else {
            self.expand(board, moves, depth, -INF, INF, true, player)
        };
        result.nodes = self.nodes;
        debug!(
            "alpha-beta depth {} over {} candidates: score {}, {} nodes, {} cutoffs",
            depth,
            moves.len(),
            result.score,
            result.nodes,
            self.cutoffs
        );
        result
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }
}
