//! Plain minimax search
//!
//! Explores every candidate at every node. Used as the reference the pruned
//! search is checked against, and selectable as an agent strategy.

use log::debug;

use crate::board::{Board, Pos, Probe, Stone};
use crate::eval::evaluate;
use crate::rules::is_terminal;

use super::{mover, neighbor_moves, Search, SearchResult, SEARCH_RADIUS};

/// Unpruned fixed-depth minimax.
#[derive(Debug, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn minimax(&mut self, board: &mut Board, depth: u8, maximizing: bool, player: Stone) -> SearchResult {
        self.nodes += 1;

        if depth == 0 || is_terminal(board) {
            return SearchResult::leaf(evaluate(board, player));
        }

        let moves = neighbor_moves(board, SEARCH_RADIUS);
        self.expand(board, &moves, depth, maximizing, player)
    }

    fn expand(
        &mut self,
        board: &mut Board,
        moves: &[Pos],
        depth: u8,
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
                .minimax(&mut probe, depth - 1, !maximizing, player)
                .score;
            drop(probe);

            best.consider(maximizing, mov, score);
        }

        if best.best_move.is_none() {
            // Nothing playable: score the position as it stands
            return SearchResult::leaf(evaluate(board, player));
        }
        best
    }
}

impl Search for Minimax {
    fn search(&mut self, board: &mut Board, depth: u8, maximizing: bool, player: Stone) -> SearchResult {
        self.nodes = 0;
        let mut result = self.minimax(board, depth, maximizing, player);
        result.nodes = self.nodes;
        result
    }

    fn search_root(&mut self, board: &mut Board, moves: &[Pos], depth: u8, player: Stone) -> SearchResult {
        self.nodes = 1;
        let mut result = if depth == 0 {
            SearchResult::leaf(evaluate(board, player))
        } else {
            self.expand(board, moves, depth, true, player)
        };
        result.nodes = self.nodes;
        debug!(
            "minimax depth {} over {} candidates: score {}, {} nodes",
            depth,
            moves.len(),
            result.score,
            result.nodes
        );
        result
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new(15).unwrap();
        for &(r, c, s) in stones {
            assert!(board.place(Pos::new(r, c), s));
        }
        board
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        let mut board = board_with(&[(7, 7, Stone::Black)]);
        let result = Minimax::new().search(&mut board, 0, true, Stone::Black);
        assert_eq!(result.score, evaluate(&board, Stone::Black));
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_terminal_position_is_leaf() {
        let stones: Vec<_> = (0..5).map(|c| (3, c, Stone::White)).collect();
        let mut board = board_with(&stones);
        let result = Minimax::new().search(&mut board, 3, true, Stone::Black);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, evaluate(&board, Stone::Black));
    }

    #[test]
    fn test_five_behind_last_move_is_leaf() {
        let mut stones: Vec<_> = (0..5).map(|c| (3, c, Stone::Black)).collect();
        stones.push((10, 10, Stone::White));
        let mut board = board_with(&stones);

        let result = Minimax::new().search(&mut board, 2, true, Stone::White);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, evaluate(&board, Stone::White));
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_depth_one_picks_best_static_move() {
        let mut board = board_with(&[
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
            (7, 8, Stone::Black),
            (6, 6, Stone::White),
            (8, 8, Stone::White),
        ]);
        let result = Minimax::new().search(&mut board, 1, true, Stone::Black);
        let best = result.best_move.unwrap();
        assert!(
            best == Pos::new(7, 4) || best == Pos::new(7, 9),
            "expected a completing move, got {best}"
        );
    }

    #[test]
    fn test_minimizer_blocks() {
        // White to move, scored for Black: White should take an end of the four
        let mut board = board_with(&[
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
            (7, 8, Stone::Black),
            (6, 6, Stone::White),
        ]);
        let result = Minimax::new().search(&mut board, 1, false, Stone::Black);
        let best = result.best_move.unwrap();
        assert!(best == Pos::new(7, 4) || best == Pos::new(7, 9), "got {best}");
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = board_with(&[(7, 7, Stone::Black), (7, 8, Stone::White)]);
        let before = board.clone();
        Minimax::new().search(&mut board, 2, true, Stone::Black);
        assert_eq!(board, before);
    }

    #[test]
    fn test_search_root_uses_given_candidates() {
        let mut board = board_with(&[(7, 7, Stone::Black)]);
        let moves = [Pos::new(0, 0), Pos::new(7, 8)];
        let result = Minimax::new().search_root(&mut board, &moves, 1, Stone::Black);
        assert_eq!(result.best_move, Some(Pos::new(7, 8)));
    }

    #[test]
    fn test_ties_keep_first_candidate() {
        // Symmetric position: both candidates score the same
        let mut board = board_with(&[(7, 7, Stone::Black)]);
        let moves = [Pos::new(7, 6), Pos::new(7, 8)];
        let result = Minimax::new().search_root(&mut board, &moves, 1, Stone::Black);
        assert_eq!(result.best_move, Some(Pos::new(7, 6)));
    }
}
