//! Win and terminal condition checking
//!
//! Only a move that touches the new stone can create a new five, so the win
//! check is anchored at the last placed stone. Terminal detection falls back
//! to a full scan for boards assembled stone by stone.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// Stones needed in an unbroken line to win (overlines also win)
pub const WIN_LENGTH: usize = 5;

/// Count same-color stones walking from `pos` (exclusive) along `(dr, dc)`.
#[inline]
pub(crate) fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let size = board.size();
    let mut count = 0;
    let mut cur = pos;
    while let Some(next) = cur.offset(dr, dc, size) {
        if board.get(next) != color {
            break;
        }
        count += 1;
        cur = next;
    }
    count
}

/// Does the stone at `pos` complete five or more in a row for its owner?
///
/// Each of the four axes is walked forward and backward from `pos`; the
/// stone at `pos` counts once. An empty `pos` never wins.
pub fn check_win(board: &Board, pos: Pos) -> bool {
    let color = board.get(pos);
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + run_length(board, pos, dr, dc, color) + run_length(board, pos, -dr, -dc, color)
            >= WIN_LENGTH
    })
}

/// True iff no empty cell remains
#[inline]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Does `color` have five in a row anywhere on the board?
pub fn has_five(board: &Board, color: Stone) -> bool {
    board.stones(color).any(|pos| check_win(board, pos))
}

/// Terminal position: either side has five, or the board is full.
///
/// The last move and the game-over flag settle most positions; the scan over
/// both colors only runs when they do not.
pub fn is_terminal(board: &Board) -> bool {
    board.is_game_over()
        || board.last_move().is_some_and(|pos| check_win(board, pos))
        || is_full(board)
        || [Stone::Black, Stone::White].into_iter().any(|color| has_five(board, color))
}

/// The full winning run through `pos`, ordered from one end to the other.
///
/// Returns `None` if the stone at `pos` is not part of a five.
pub fn winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }
    let size = board.size();

    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, pos, -dr, -dc, color);
        let forward = run_length(board, pos, dr, dc, color);
        if 1 + back + forward < WIN_LENGTH {
            continue;
        }

        let back = back as i32;
        let line = (-back..=forward as i32)
            .filter_map(|i| pos.offset(dr * i, dc * i, size))
            .collect();
        return Some(line);
    }
    None
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
    fn test_five_horizontal_from_any_stone() {
        let stones: Vec<_> = (3..8).map(|c| (9, c, Stone::Black)).collect();
        let board = board_with(&stones);
        for c in 3..8 {
            assert!(check_win(&board, Pos::new(9, c)), "anchor (9, {c})");
        }
    }

    #[test]
    fn test_four_is_not_a_win() {
        let stones: Vec<_> = (3..7).map(|c| (9, c, Stone::Black)).collect();
        let board = board_with(&stones);
        assert!(!check_win(&board, Pos::new(9, 6)));
    }

    #[test]
    fn test_overline_wins() {
        let stones: Vec<_> = (0..6).map(|r| (r, 4, Stone::White)).collect();
        let board = board_with(&stones);
        assert!(check_win(&board, Pos::new(5, 4)));
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let board = board_with(&[
            (4, 0, Stone::Black),
            (4, 1, Stone::Black),
            (4, 2, Stone::White),
            (4, 3, Stone::Black),
            (4, 4, Stone::Black),
            (4, 5, Stone::Black),
        ]);
        assert!(!check_win(&board, Pos::new(4, 3)));
    }

    #[test]
    fn test_diagonals() {
        let diag: Vec<_> = (0..5).map(|i| (i, i, Stone::Black)).collect();
        assert!(check_win(&board_with(&diag), Pos::new(2, 2)));

        let anti: Vec<_> = (0..5).map(|i| (i, 10 - i, Stone::White)).collect();
        assert!(check_win(&board_with(&anti), Pos::new(4, 6)));
    }

    #[test]
    fn test_empty_anchor_never_wins() {
        let board = Board::new(15).unwrap();
        assert!(!check_win(&board, Pos::new(7, 7)));
    }

    #[test]
    fn test_is_terminal() {
        let mut board = Board::new(15).unwrap();
        assert!(!is_terminal(&board));

        for c in 0..5 {
            board.place(Pos::new(0, c), Stone::Black);
        }
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_five_away_from_last_move_is_terminal() {
        let mut stones: Vec<_> = (0..5).map(|c| (3, c, Stone::Black)).collect();
        stones.push((10, 10, Stone::White));
        let board = board_with(&stones);

        assert_eq!(board.last_move(), Some(Pos::new(10, 10)));
        assert!(!board.is_game_over());
        assert!(has_five(&board, Stone::Black));
        assert!(!has_five(&board, Stone::White));
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_is_full_without_five_is_terminal() {
        let mut board = Board::new(5).unwrap();
        // Pattern (c + r/2) even for Black leaves no five of either color
        for r in 0..5u8 {
            for c in 0..5u8 {
                let stone = if (c + r / 2) % 2 == 0 { Stone::Black } else { Stone::White };
                board.place(Pos::new(r, c), stone);
            }
        }
        assert!(is_full(&board));
        assert!(!has_five(&board, Stone::Black));
        assert!(!has_five(&board, Stone::White));
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_winning_line_ordered() {
        let stones: Vec<_> = (2..7).map(|i| (i, 9 - i, Stone::Black)).collect();
        let board = board_with(&stones);
        let line = winning_line(&board, Pos::new(4, 5)).unwrap();
        assert_eq!(
            line,
            vec![
                Pos::new(2, 7),
                Pos::new(3, 6),
                Pos::new(4, 5),
                Pos::new(5, 4),
                Pos::new(6, 3),
            ]
        );
        assert_eq!(winning_line(&board, Pos::new(0, 0)), None);
    }
}
