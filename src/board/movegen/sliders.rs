use super::super::attack_tables::{BISHOP_DIRS, QUEEN_DIRS, RAYS, ROOK_DIRS};
use super::super::types::{Move, MoveList, Square};
use super::super::Board;

impl Board {
    /// Rook, bishop, and queen moves: walk each applicable ray until a piece
    /// or the board edge stops it.
    pub(crate) fn generate_sliding_moves(&self, from: Square, moves: &mut MoveList) {
        let piece = self.pieces[from.index()];
        let dirs = if piece.is_rook() {
            ROOK_DIRS
        } else if piece.is_bishop() {
            BISHOP_DIRS
        } else {
            QUEEN_DIRS
        };

        for dir in dirs {
            for &to in &RAYS[from.index()][dir] {
                let target = self.pieces[to.index()];
                if self.is_our_piece(target) {
                    break;
                }
                moves.push(Move::new(from, to));
                if !target.is_empty() {
                    break;
                }
            }
        }
    }
}
