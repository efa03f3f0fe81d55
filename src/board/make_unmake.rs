//! Reversible move application.
//!
//! `make_move` returns the minimal undo record and `unmake_move` replays it
//! backwards; a paired call restores the piece array, side to move, en
//! passant target, and castling rights bit-exactly. The search depends on
//! that roundtrip instead of position snapshots.

use super::types::{
    rook_home_right, Move, Piece, Side, Square, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K,
    CASTLE_WHITE_Q,
};
use super::{Board, UnmakeInfo};

/// Rook relocation for a castling king destination: (from, to) indices.
const fn castling_rook_squares(king_to: usize) -> (usize, usize) {
    match king_to {
        6 => (7, 5),
        2 => (0, 3),
        62 => (63, 61),
        58 => (56, 59),
        _ => unreachable!(),
    }
}

impl Board {
    /// Apply a move and return the record needed to take it back.
    ///
    /// The move must come from this position's move generation; applying an
    /// arbitrary move is a programmer error.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let piece = self.pieces[mv.from.index()];
        let captured = self.pieces[mv.to.index()];

        let mut undo = UnmakeInfo {
            captured_piece: captured,
            previous_en_passant: self.en_passant_square,
            previous_castling_rights: self.castling_rights,
        };

        self.pieces[mv.to.index()] = piece;
        self.pieces[mv.from.index()] = Piece::Empty;

        if let Some(promotion) = mv.promotion {
            self.pieces[mv.to.index()] = promotion;
        }

        self.en_passant_square = None;

        if piece.is_pawn() {
            if undo.previous_en_passant == Some(mv.to) {
                // en passant: the captured pawn sits behind the target square
                let capture_square = match self.side_to_move {
                    Side::White => mv.to.index() - 8,
                    Side::Black => mv.to.index() + 8,
                };
                undo.captured_piece = self.pieces[capture_square];
                self.pieces[capture_square] = Piece::Empty;
            } else if mv.to.index().abs_diff(mv.from.index()) == 16 {
                let skipped = match self.side_to_move {
                    Side::White => mv.from.index() + 8,
                    Side::Black => mv.from.index() - 8,
                };
                self.en_passant_square = Some(Square::from_index(skipped));
            }
        }

        if piece.is_king() && mv.to.index().abs_diff(mv.from.index()) == 2 {
            let (rook_from, rook_to) = castling_rook_squares(mv.to.index());
            self.pieces[rook_to] = self.pieces[rook_from];
            self.pieces[rook_from] = Piece::Empty;
        }

        match piece {
            Piece::WhiteKing => self.castling_rights &= !(CASTLE_WHITE_K | CASTLE_WHITE_Q),
            Piece::BlackKing => self.castling_rights &= !(CASTLE_BLACK_K | CASTLE_BLACK_Q),
            _ => {}
        }
        // a rook leaving its corner or anything landing on one kills the right
        self.castling_rights &= !rook_home_right(mv.from);
        self.castling_rights &= !rook_home_right(mv.to);

        self.side_to_move = self.side_to_move.opponent();

        undo
    }

    /// Exactly reverse a [`make_move`](Board::make_move) call.
    pub fn unmake_move(&mut self, mv: Move, undo: UnmakeInfo) {
        self.side_to_move = self.side_to_move.opponent();
        self.en_passant_square = undo.previous_en_passant;
        self.castling_rights = undo.previous_castling_rights;

        let mover = self.side_to_move;
        let mut piece = self.pieces[mv.to.index()];
        if mv.promotion.is_some() {
            piece = Piece::pawn(mover);
        }
        self.pieces[mv.from.index()] = piece;
        self.pieces[mv.to.index()] = undo.captured_piece;

        if piece.is_pawn() && undo.previous_en_passant == Some(mv.to) {
            // the pawn captured en passant never stood on the target square
            self.pieces[mv.to.index()] = Piece::Empty;
            let capture_square = match mover {
                Side::White => mv.to.index() - 8,
                Side::Black => mv.to.index() + 8,
            };
            self.pieces[capture_square] = undo.captured_piece;
        }

        if piece.is_king() && mv.to.index().abs_diff(mv.from.index()) == 2 {
            let (rook_from, rook_to) = castling_rook_squares(mv.to.index());
            self.pieces[rook_from] = self.pieces[rook_to];
            self.pieces[rook_to] = Piece::Empty;
        }
    }
}
