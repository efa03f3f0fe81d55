//! Fixed-depth negamax search with alpha-beta pruning.

use super::types::{Move, MoveList, Side};
use super::Board;

/// Score bound; no reachable score has a larger magnitude.
pub const INFINITY_SCORE: i32 = 1_000_000;

/// Base score for checkmate. Mate scores carry the remaining depth so
/// shallower (faster) mates score higher, and they can never collide with a
/// material score.
pub const CHECKMATE_SCORE: i32 = 999_999;

impl Board {
    /// Negamax over legal moves, scored from the side to move's perspective.
    ///
    /// Depth 0 returns the static evaluation (sign-adjusted). A position
    /// with no legal move scores `-(CHECKMATE_SCORE + depth)` in check and 0
    /// otherwise. The board is restored before every return.
    pub(crate) fn negamax(&mut self, depth: u32, mut alpha: i32, beta: i32) -> i32 {
        if depth == 0 {
            let sign = match self.side_to_move {
                Side::White => 1,
                Side::Black => -1,
            };
            return self.evaluate() * sign;
        }

        let mut moves = MoveList::new();
        self.generate_legal_moves(&mut moves);

        if moves.is_empty() {
            if self.is_in_check() {
                return -(CHECKMATE_SCORE + depth as i32);
            }
            return 0; // stalemate
        }

        let mut best = -INFINITY_SCORE;
        for &mv in &moves {
            let undo = self.make_move(mv);
            let score = -self.negamax(depth - 1, -beta, -alpha);
            self.unmake_move(mv, undo);

            best = best.max(score);
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }

        best
    }

    /// Pick the best move for the side to move by a fixed-depth search.
    ///
    /// Ties break toward the first move in generation order, so the result
    /// is deterministic for a given position and depth. Returns `None` only
    /// when no legal move exists; callers normally detect terminal positions
    /// first.
    #[must_use]
    pub fn find_best_move(&mut self, depth: u32) -> Option<Move> {
        let mut moves = MoveList::new();
        self.generate_legal_moves(&mut moves);

        let mut alpha = -INFINITY_SCORE;
        let beta = INFINITY_SCORE;
        let mut best_move = None;

        for &mv in &moves {
            let undo = self.make_move(mv);
            let score = -self.negamax(depth.saturating_sub(1), -beta, -alpha);
            self.unmake_move(mv, undo);

            if score > alpha {
                alpha = score;
                best_move = Some(mv);
            }
        }

        #[cfg(feature = "logging")]
        if let Some(mv) = best_move {
            log::debug!("depth {depth}: best move {mv}, score {alpha}");
        }

        best_move
    }
}
