extern crate tic_tac_toe_ai;

use game_core::{Board, GameError, Mark};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tic_tac_toe_ai::{Blended, ChooseMove, Difficulty, Minimax, MoveStrategy, Random};

fn board(notation: &str) -> Board {
    notation.parse().unwrap()
}

#[test]
fn difficulty_selects_strategy() {
    assert_eq!(MoveStrategy::from(Difficulty::Easy), MoveStrategy::Random(Random));
    assert_eq!(MoveStrategy::from(Difficulty::Medium), MoveStrategy::Blended(Blended));
    assert_eq!(MoveStrategy::from(Difficulty::Hard), MoveStrategy::Minimax(Minimax));
}

#[test]
fn every_strategy_reports_full_board() {
    let full = board("XOX XOO OXX");
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for difficulty in Difficulty::ALL {
        assert_eq!(
            MoveStrategy::from(difficulty).choose_move(&full, &mut rng),
            Err(GameError::NoMoveAvailable),
            "{difficulty}"
        );
    }
}

#[test]
fn same_seed_replays_same_moves() {
    for difficulty in Difficulty::ALL {
        let strategy = MoveStrategy::from(difficulty);
        let mut rng1 = ChaCha8Rng::seed_from_u64(42);
        let mut rng2 = ChaCha8Rng::seed_from_u64(42);
        let mut b1 = Board::new();
        let mut b2 = Board::new();
        for _ in 0..4 {
            let m1 = strategy.choose_move(&b1, &mut rng1).unwrap();
            let m2 = strategy.choose_move(&b2, &mut rng2).unwrap();
            assert_eq!(m1, m2);
            b1.place_mark(m1, Mark::Opponent).unwrap();
            b2.place_mark(m2, Mark::Opponent).unwrap();
        }
    }
}

#[test]
fn random_spreads_over_all_empty_cells() {
    let b = board("X...O....");
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut hits = [0usize; 9];
    for _ in 0..700 {
        hits[Random.choose_move(&b, &mut rng).unwrap()] += 1;
    }
    assert_eq!(hits[0], 0);
    assert_eq!(hits[4], 0);
    for index in b.empty_cells() {
        assert!(hits[index] > 50, "cell {index} chosen {} times", hits[index]);
    }
}

#[test]
fn blended_mixes_minimax_and_random() {
    // Minimax has a single best answer here, the center.
    let b = board("X........");
    let best = Minimax.best_move(&b).unwrap();
    assert_eq!(best, 4);

    let mut agreed = 0;
    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let index = Blended.choose_move(&b, &mut rng).unwrap();
        assert!(b.is_empty_at(index));
        if index == best {
            agreed += 1;
        }
    }
    // Expected 200 * (1/2 + 1/2 * 1/8) = 112.5
    assert!((80..=145).contains(&agreed), "agreed {agreed} times");
}

#[test]
fn strategies_do_not_modify_board() {
    let b = board("X...O..X.");
    let before = b.clone();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for difficulty in Difficulty::ALL {
        MoveStrategy::from(difficulty).choose_move(&b, &mut rng).unwrap();
        assert_eq!(b, before);
    }
}
