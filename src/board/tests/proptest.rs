//! Property-based tests using proptest.

use proptest::prelude::*;

use super::{legal_moves, pseudo_legal_moves};
use crate::board::{Board, Move, UnmakeInfo};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

proptest! {
    /// Property: make_move followed by unmake_move restores the board exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = board.clone();

        let mut history: Vec<(Move, UnmakeInfo)> = Vec::new();

        for _ in 0..num_moves {
            let moves = legal_moves(&mut board);
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            let info = board.make_move(mv);
            history.push((mv, info));
        }

        while let Some((mv, info)) = history.pop() {
            board.unmake_move(mv, info);
        }

        prop_assert_eq!(board, initial);
    }

    /// Property: every legal move is also pseudo-legal
    #[test]
    fn prop_legal_is_subset_of_pseudo_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let pseudo = pseudo_legal_moves(&board);
            let moves = legal_moves(&mut board);

            for mv in &moves {
                prop_assert!(
                    pseudo.find(mv.from, mv.to, mv.promotion).is_some(),
                    "legal move {} missing from pseudo-legal set", mv
                );
            }

            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            board.make_move(mv);
        }
    }

    /// Property: no legal move leaves its own king attacked
    #[test]
    fn prop_legal_moves_never_leave_check(seed in seed_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..10 {
            let moves = legal_moves(&mut board);
            if moves.is_empty() {
                break;
            }

            let mover = board.side_to_move;
            for &mv in &moves {
                let info = board.make_move(mv);
                prop_assert!(
                    !board.side_in_check(mover),
                    "legal move left the king in check: {}", mv
                );
                board.unmake_move(mv, info);
            }

            let mv = moves[rng.gen_range(0..moves.len())];
            board.make_move(mv);
        }
    }

    /// Property: evaluation stays inside total-material bounds
    #[test]
    fn prop_eval_bounded(seed in seed_strategy(), num_moves in 0..30usize) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = legal_moves(&mut board);
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            board.make_move(mv);
        }

        prop_assert!(board.evaluate().abs() <= 10_000);
    }
}
