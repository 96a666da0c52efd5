use gomoku::eval::{evaluate, line_score};
use gomoku::search::{neighbor_moves, AlphaBeta, Minimax, Search, ROOT_RADIUS};
use gomoku::{Agent, Algorithm, Board, MoveError, Outcome, Pos, Stone};

fn play(moves: &[(u8, u8)]) -> Board {
    let mut board = Board::new(15).unwrap();
    for &(r, c) in moves {
        board.make_move(Pos::new(r, c)).unwrap();
    }
    board
}

/// A handful of early positions reached through legal play
fn sample_positions() -> Vec<Board> {
    vec![
        play(&[(7, 7)]),
        play(&[(7, 7), (7, 8)]),
        play(&[(7, 7), (8, 8), (6, 6), (7, 8)]),
        play(&[(7, 7), (7, 8), (8, 7), (6, 7), (9, 7), (10, 7)]),
        play(&[(0, 0), (14, 14), (0, 1), (14, 13), (1, 0)]),
    ]
}

#[test]
fn evaluation_is_zero_sum() {
    for (i, board) in sample_positions().iter().enumerate() {
        assert_eq!(
            evaluate(board, Stone::Black),
            -evaluate(board, Stone::White),
            "position {i} is not zero-sum"
        );
    }
}

#[test]
fn open_four_scores_five_thousand() {
    let mut board = Board::new(15).unwrap();
    for c in 5..=8 {
        board.place(Pos::new(7, c), Stone::Black);
    }
    assert_eq!(line_score(&board, Pos::new(7, 5), 0, 1), 5000);
    assert!(evaluate(&board, Stone::Black) >= 5000);
}

#[test]
fn minimax_and_alphabeta_agree_from_the_root() {
    for (i, board) in sample_positions().into_iter().enumerate() {
        let player = board.current_player();
        let moves = neighbor_moves(&board, ROOT_RADIUS);

        for depth in 1..=2 {
            let full = Minimax::new().search_root(&mut board.clone(), &moves, depth, player);
            let pruned = AlphaBeta::new().search_root(&mut board.clone(), &moves, depth, player);

            assert_eq!(full.score, pruned.score, "position {i}, depth {depth}");
            assert_eq!(full.best_move, pruned.best_move, "position {i}, depth {depth}");
            assert!(
                pruned.nodes <= full.nodes,
                "position {i}, depth {depth}: alpha-beta {} nodes, minimax {}",
                pruned.nodes,
                full.nodes
            );
        }
    }
}

#[test]
fn minimax_and_alphabeta_agree_at_depth_three() {
    // Cutoffs at depth 3 depend on bounds handed down two levels
    for (i, board) in sample_positions().into_iter().enumerate().skip(1).take(3) {
        let player = board.current_player();
        let moves = neighbor_moves(&board, ROOT_RADIUS);

        let full = Minimax::new().search_root(&mut board.clone(), &moves, 3, player);
        let mut searcher = AlphaBeta::new();
        let pruned = searcher.search_root(&mut board.clone(), &moves, 3, player);

        assert_eq!(full.score, pruned.score, "position {i}");
        assert_eq!(full.best_move, pruned.best_move, "position {i}");
        assert!(
            pruned.nodes <= full.nodes,
            "position {i}: alpha-beta {} nodes, minimax {}",
            pruned.nodes,
            full.nodes
        );
        assert!(searcher.cutoffs() > 0, "position {i}: no cutoffs at depth 3");
    }
}

#[test]
fn search_stops_at_a_five_placed_before_the_last_move() {
    let mut board = Board::new(15).unwrap();
    for c in 0..5 {
        board.place(Pos::new(3, c), Stone::Black);
    }
    board.place(Pos::new(10, 10), Stone::White);
    let expected = evaluate(&board, Stone::White);

    let full = Minimax::new().search(&mut board, 2, true, Stone::White);
    let pruned = AlphaBeta::new().search(&mut board, 2, true, Stone::White);
    for result in [full, pruned] {
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, expected);
        assert_eq!(result.nodes, 1);
    }
}

#[test]
fn agents_choose_the_same_move() {
    for board in sample_positions() {
        let player = board.current_player();
        let full = Agent::new(player, Algorithm::Minimax, 2)
            .unwrap()
            .choose_move_with_stats(&board);
        let pruned = Agent::new(player, Algorithm::AlphaBeta, 2)
            .unwrap()
            .choose_move_with_stats(&board);
        assert_eq!(full.best_move, pruned.best_move);
        assert_eq!(full.score, pruned.score);
        assert!(pruned.nodes <= full.nodes);
    }
}

#[test]
fn choose_move_leaves_board_untouched() {
    for board in sample_positions() {
        let before = board.clone();
        let mut agent = Agent::new(board.current_player(), Algorithm::AlphaBeta, 3).unwrap();
        let chosen = agent.choose_move(&board);
        assert_eq!(board, before);
        assert!(board.is_valid_move(chosen), "agent chose occupied {chosen}");
    }
}

#[test]
fn win_is_detected_on_the_completing_move() {
    // Anti-diagonal five for White
    let mut board = play(&[(0, 0), (2, 6), (0, 2), (3, 5), (0, 4), (4, 4), (0, 6), (5, 3), (14, 14)]);
    assert!(!board.is_game_over());
    board.make_move(Pos::new(6, 2)).unwrap();
    assert!(board.is_game_over());
    assert_eq!(board.winner(), Some(Outcome::Win(Stone::White)));
}

#[test]
fn moves_after_game_over_are_refused() {
    let mut board = play(&[(7, 0), (8, 0), (7, 1), (8, 1), (7, 2), (8, 2), (7, 3), (8, 3), (7, 4)]);
    assert_eq!(board.winner(), Some(Outcome::Win(Stone::Black)));

    let snapshot = board.clone();
    assert_eq!(board.make_move(Pos::new(8, 4)), Err(MoveError::GameOver));
    assert_eq!(board, snapshot);
}

#[test]
fn filled_board_without_five_is_a_draw() {
    let mut board = Board::new(5).unwrap();
    // Black cells follow (c + r/2) even; no color gets five on any line
    let black: Vec<Pos> = (0..5u8)
        .flat_map(|r| (0..5u8).map(move |c| Pos::new(r, c)))
        .filter(|p| (p.col + p.row / 2) % 2 == 0)
        .collect();
    let white: Vec<Pos> = board
        .empty_cells()
        .into_iter()
        .filter(|p| !black.contains(p))
        .collect();

    let mut black_iter = black.iter();
    let mut white_iter = white.iter();
    while let Some(&b) = black_iter.next() {
        board.make_move(b).unwrap();
        if let Some(&w) = white_iter.next() {
            board.make_move(w).unwrap();
        }
    }

    assert!(board.is_full());
    assert!(board.is_game_over());
    assert_eq!(board.winner(), Some(Outcome::Draw));
}

#[test]
fn empty_board_has_single_center_candidate() {
    let board = Board::new(15).unwrap();
    assert_eq!(neighbor_moves(&board, 1), vec![Pos::new(7, 7)]);
    assert_eq!(neighbor_moves(&board, ROOT_RADIUS), vec![Pos::new(7, 7)]);
}
