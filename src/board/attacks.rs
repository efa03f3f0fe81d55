//! Attack detection.

use super::attack_tables::{FIRST_DIAGONAL_DIR, KING_TARGETS, KNIGHT_TARGETS, PAWN_ATTACK_SOURCES, RAYS};
use super::types::{Piece, Side, Square};
use super::Board;

impl Board {
    /// True when any piece of `attacking_side` could capture onto `square`,
    /// regardless of whose turn it is.
    ///
    /// Tests attacker kinds in turn and short-circuits on the first hit:
    /// pawns, knights, sliders along each ray (the first occupied square
    /// blocks), then the king.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacking_side: Side) -> bool {
        let target = square.index();

        for &source in &PAWN_ATTACK_SOURCES[attacking_side.index()][target] {
            if self.pieces[source.index()] == Piece::pawn(attacking_side) {
                return true;
            }
        }

        for &source in &KNIGHT_TARGETS[target] {
            if self.pieces[source.index()] == Piece::knight(attacking_side) {
                return true;
            }
        }

        for (dir, ray) in RAYS[target].iter().enumerate() {
            for &sq in ray {
                let piece = self.pieces[sq.index()];
                if piece.is_empty() {
                    continue;
                }
                let matches_ray = if dir >= FIRST_DIAGONAL_DIR {
                    piece == Piece::bishop(attacking_side) || piece == Piece::queen(attacking_side)
                } else {
                    piece == Piece::rook(attacking_side) || piece == Piece::queen(attacking_side)
                };
                if matches_ray {
                    return true;
                }
                // any other piece of either color blocks this ray
                break;
            }
        }

        for &source in &KING_TARGETS[target] {
            if self.pieces[source.index()] == Piece::king(attacking_side) {
                return true;
            }
        }

        false
    }

    /// True when the king of the side to move is attacked.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.side_in_check(self.side_to_move)
    }

    /// Check test for an arbitrary side; reports "not in check" when that
    /// king is absent so hand-built positions stay queryable.
    pub(crate) fn side_in_check(&self, side: Side) -> bool {
        match self.find_king(side) {
            Some(king_square) => self.is_square_attacked(king_square, side.opponent()),
            None => false,
        }
    }
}
