extern crate game_core;

use std::collections::HashMap;

use game_core::{evaluate, Board, GameStatus, Mark};

/// Walks every game reachable by alternating legal moves, player first.
fn walk(board: &mut Board, to_move: Mark, seen: &mut HashMap<String, GameStatus>) {
    let status = evaluate(board);
    let previous = seen.insert(board.to_string(), status);
    if let Some(previous) = previous {
        assert_eq!(previous, status, "same board evaluated differently:\n{board}");
    }
    if status.is_terminal() {
        return;
    }
    for index in board.empty_cells() {
        let mut trial = board.trial(index, to_move).unwrap();
        walk(&mut trial, to_move.other(), seen);
    }
}

#[test]
fn evaluation_depends_only_on_board_contents() {
    let mut board = Board::new();
    let mut seen = HashMap::new();
    walk(&mut board, Mark::Player, &mut seen);

    assert_eq!(board, Board::new(), "trial moves must leave the board empty");
    // 5478 distinct positions are reachable in tic-tac-toe.
    assert_eq!(seen.len(), 5478);
    assert_eq!(
        seen.values().filter(|s| **s == GameStatus::Draw).count(),
        16
    );
}

#[test]
fn mark_counts_stay_balanced_in_legal_play() {
    fn check(board: &mut Board, to_move: Mark) {
        let diff = board.count(Mark::Player) as isize - board.count(Mark::Opponent) as isize;
        match to_move {
            Mark::Player => assert_eq!(diff, 0),
            Mark::Opponent => assert_eq!(diff, 1),
        }
        if evaluate(board).is_terminal() {
            return;
        }
        for index in board.empty_cells() {
            let mut trial = board.trial(index, to_move).unwrap();
            check(&mut trial, to_move.other());
        }
    }
    check(&mut Board::new(), Mark::Player);
}

#[test]
fn player_completing_row_wins_immediately() {
    let mut board: Board = "XX. OO. ...".parse().unwrap();
    assert_eq!(evaluate(&board), GameStatus::InProgress);
    board.place_mark(2, Mark::Player).unwrap();
    assert_eq!(evaluate(&board), GameStatus::PlayerWon);
}
