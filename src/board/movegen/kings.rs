use super::super::attack_tables::KING_TARGETS;
use super::super::types::{kingside_right, queenside_right, Move, MoveList, Piece, Side, Square};
use super::super::Board;

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        for &to in &KING_TARGETS[from.index()] {
            if !self.is_our_piece(self.pieces[to.index()]) {
                moves.push(Move::new(from, to));
            }
        }

        // castling: rights intact, path clear, home rook in place. Check
        // constraints on the king's path are enforced by the legal filter.
        let side = self.side_to_move;
        let back_rank = match side {
            Side::White => 0,
            Side::Black => 7,
        };
        if from != Square::new(back_rank, 4) {
            return;
        }

        if self.castling_rights & kingside_right(side) != 0
            && self.pieces[Square::new(back_rank, 5).index()].is_empty()
            && self.pieces[Square::new(back_rank, 6).index()].is_empty()
            && self.pieces[Square::new(back_rank, 7).index()] == Piece::rook(side)
        {
            moves.push(Move::new(from, Square::new(back_rank, 6)));
        }
        if self.castling_rights & queenside_right(side) != 0
            && self.pieces[Square::new(back_rank, 1).index()].is_empty()
            && self.pieces[Square::new(back_rank, 2).index()].is_empty()
            && self.pieces[Square::new(back_rank, 3).index()].is_empty()
            && self.pieces[Square::new(back_rank, 0).index()] == Piece::rook(side)
        {
            moves.push(Move::new(from, Square::new(back_rank, 2)));
        }
    }
}
