//! Move generation: pseudo-legal, legal, and the derived game queries.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::types::{MoveList, Piece, Square};
use super::Board;

impl Board {
    /// Generate every pseudo-legal move for the side to move.
    ///
    /// Pseudo-legal means geometry, blocking, and capture targeting are
    /// enforced, but the mover's king may be left in check. The buffer is
    /// cleared first; squares are scanned in ascending index order and each
    /// piece emits in its fixed offset order, so enumeration order is
    /// deterministic.
    pub fn generate_pseudo_legal_moves(&self, moves: &mut MoveList) {
        moves.clear();
        for idx in 0..64 {
            let piece = self.pieces[idx];
            if !self.is_our_piece(piece) {
                continue;
            }
            let from = Square::from_index(idx);
            match piece {
                Piece::WhitePawn | Piece::BlackPawn => self.generate_pawn_moves(from, moves),
                Piece::WhiteKnight | Piece::BlackKnight => self.generate_knight_moves(from, moves),
                Piece::WhiteKing | Piece::BlackKing => self.generate_king_moves(from, moves),
                Piece::WhiteBishop
                | Piece::BlackBishop
                | Piece::WhiteRook
                | Piece::BlackRook
                | Piece::WhiteQueen
                | Piece::BlackQueen => self.generate_sliding_moves(from, moves),
                Piece::Empty => {}
            }
        }
    }

    /// Generate every legal move for the side to move.
    ///
    /// Filters the pseudo-legal set: each candidate is made, rejected if it
    /// leaves the mover in check, and unmade. Castling is additionally
    /// rejected when the king starts in check or crosses an attacked square.
    pub fn generate_legal_moves(&mut self, moves: &mut MoveList) {
        let mut pseudo = MoveList::new();
        self.generate_pseudo_legal_moves(&mut pseudo);

        moves.clear();
        let mover = self.side_to_move;
        let opponent = mover.opponent();

        for &mv in &pseudo {
            let piece = self.pieces[mv.from.index()];
            if piece.is_king() && mv.to.index().abs_diff(mv.from.index()) == 2 {
                let crossed = Square::from_index(usize::midpoint(mv.from.index(), mv.to.index()));
                if self.is_square_attacked(mv.from, opponent)
                    || self.is_square_attacked(crossed, opponent)
                    || self.is_square_attacked(mv.to, opponent)
                {
                    continue;
                }
            }

            let undo = self.make_move(mv);
            if !self.side_in_check(mover) {
                moves.push(mv);
            }
            self.unmake_move(mv, undo);
        }
    }

    /// The side to move is checkmated.
    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check() && self.no_legal_moves()
    }

    /// The side to move has no legal move but is not in check.
    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check() && self.no_legal_moves()
    }

    fn no_legal_moves(&mut self) -> bool {
        let mut moves = MoveList::new();
        self.generate_legal_moves(&mut moves);
        moves.is_empty()
    }

    /// Count leaf nodes of the legal move tree to the given depth.
    #[must_use]
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut moves = MoveList::new();
        self.generate_legal_moves(&mut moves);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for &mv in &moves {
            let undo = self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(mv, undo);
        }

        nodes
    }
}
