use super::super::types::{Move, MoveList, Piece, Side, Square};
use super::super::Board;

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let side = self.side_to_move;
        let dir: isize = match side {
            Side::White => 1,
            Side::Black => -1,
        };
        let start_rank = match side {
            Side::White => 1,
            Side::Black => 6,
        };

        // single push, expanding to promotions on the last rank
        if let Some(single) = Square::try_from_index(from.index() as isize + 8 * dir) {
            if self.pieces[single.index()].is_empty() {
                self.add_pawn_move(from, single, moves);

                // double push only from the start rank, over two empty squares
                if from.rank() == start_rank {
                    let double = Square::from_index((from.index() as isize + 16 * dir) as usize);
                    if self.pieces[double.index()].is_empty() {
                        moves.push(Move::new(from, double));
                    }
                }
            }
        }

        // diagonal captures, lower file first
        for file_delta in [-1, 1] {
            if let Some(target) = self.pawn_capture_target(from, dir, file_delta) {
                if self.is_opponent_piece(self.pieces[target.index()]) {
                    self.add_pawn_move(from, target, moves);
                }
            }
        }

        // en passant lands on the square the enemy pawn skipped over
        if let Some(en_passant) = self.en_passant_square {
            for file_delta in [-1, 1] {
                if self.pawn_capture_target(from, dir, file_delta) == Some(en_passant) {
                    moves.push(Move::new(from, en_passant));
                }
            }
        }
    }

    /// Diagonal capture square for a pawn, `None` off the board or across a
    /// file wrap.
    fn pawn_capture_target(&self, from: Square, dir: isize, file_delta: isize) -> Option<Square> {
        let target = Square::try_from_index(from.index() as isize + 8 * dir + file_delta)?;
        if target.file() as isize == from.file() as isize + file_delta {
            Some(target)
        } else {
            None
        }
    }

    /// Emit a pawn arrival: four promotion moves (queen, rook, bishop,
    /// knight, in that order) on the last rank, one quiet move otherwise.
    fn add_pawn_move(&self, from: Square, to: Square, moves: &mut MoveList) {
        let side = self.side_to_move;
        let promotion_rank = match side {
            Side::White => 7,
            Side::Black => 0,
        };

        if to.rank() == promotion_rank {
            for promotion in Piece::promotions(side) {
                moves.push(Move::new_promotion(from, to, promotion));
            }
        } else {
            moves.push(Move::new(from, to));
        }
    }
}
