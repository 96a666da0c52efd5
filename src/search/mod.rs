//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation restricted to the neighborhood of stones
//! - Plain minimax
//! - Minimax with alpha-beta pruning
//!
//! Both searchers run to a fixed depth from a maximizing root, place and
//! undo stones on one scratch board through [`Probe`](crate::Probe), and
//! return identical scores for the same position.

pub mod alphabeta;
pub mod minimax;
pub mod moves;

pub use alphabeta::AlphaBeta;
pub use minimax::Minimax;
pub use moves::{neighbor_moves, ROOT_RADIUS, SEARCH_RADIUS};

use crate::board::{Board, Pos, Stone};

/// Bound larger than any evaluation
pub const INF: i32 = i32::MAX;

/// Outcome of one search call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Move achieving `score`; `None` at leaves
    pub best_move: Option<Pos>,
    /// Score from the searching player's point of view
    pub score: i32,
    /// Nodes visited by the call
    pub nodes: u64,
}

impl SearchResult {
    #[inline]
    fn leaf(score: i32) -> Self {
        Self {
            best_move: None,
            score,
            nodes: 0,
        }
    }

    /// Starting point for an extremum scan: worst possible score for the side
    #[inline]
    fn worst(maximizing: bool) -> Self {
        Self {
            best_move: None,
            score: if maximizing { -INF } else { INF },
            nodes: 0,
        }
    }

    /// Record `score` for `mov` if it beats the current best.
    /// Ties keep the earlier move.
    #[inline]
    fn consider(&mut self, maximizing: bool, mov: Pos, score: i32) {
        let better = if maximizing {
            score > self.score
        } else {
            score < self.score
        };
        if better {
            self.score = score;
            self.best_move = Some(mov);
        }
    }
}

/// A fixed-depth adversarial search over a scratch board.
///
/// `player` is the side the scores are computed for and stays fixed for the
/// whole search; `maximizing` says whether `player` is the one to move.
/// Implementations must leave `board` exactly as they found it.
pub trait Search {
    /// Search `depth` plies below `board`, expanding neighbor candidates.
    fn search(&mut self, board: &mut Board, depth: u8, maximizing: bool, player: Stone)
        -> SearchResult;

    /// Maximizing root over an explicit candidate list. Each candidate gets
    /// `player`'s stone and is searched `depth - 1` further plies.
    fn search_root(&mut self, board: &mut Board, moves: &[Pos], depth: u8, player: Stone)
        -> SearchResult;

    /// Nodes visited by the most recent call
    fn nodes(&self) -> u64;
}

/// Stone placed at a node: the player's own when maximizing, else the opponent's.
#[inline]
fn mover(maximizing: bool, player: Stone) -> Stone {
    if maximizing {
        player
    } else {
        player.opponent()
    }
}
