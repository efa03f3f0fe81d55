use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::types::{Move, MoveList, Square};
use super::super::Board;

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        for &to in &KNIGHT_TARGETS[from.index()] {
            if !self.is_our_piece(self.pieces[to.index()]) {
                moves.push(Move::new(from, to));
            }
        }
    }
}
