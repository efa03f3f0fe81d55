//! Board state: the piece array plus the derived game fields.

use std::fmt;

use super::types::{castling_string, Piece, Side, Square, ALL_CASTLING_RIGHTS};

/// Information required to restore a position after `make_move`.
///
/// Returned by [`Board::make_move`] and passed back to
/// [`Board::unmake_move`]. It carries only the fields a move cannot
/// reconstruct from its own geometry: the captured piece, the previous en
/// passant target, and the previous castling rights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    /// Captured piece, `Piece::Empty` when the move captured nothing. For an
    /// en passant capture this is the pawn removed from the shifted square.
    pub captured_piece: Piece,
    /// Previous en passant target square (if any).
    pub previous_en_passant: Option<Square>,
    /// Previous castling rights bitmask.
    pub previous_castling_rights: u8,
}

/// A chess position: 64 mailbox squares plus side to move, en passant
/// target, and castling rights.
///
/// The board is mutated only by [`make_move`](Board::make_move) /
/// [`unmake_move`](Board::unmake_move); paired calls restore it bit-exactly,
/// which is what lets the search recurse without snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: [Piece; 64],
    pub side_to_move: Side,
    pub en_passant_square: Option<Square>,
    pub castling_rights: u8,
}

impl Board {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let white_back_rank = [
            Piece::WhiteRook,
            Piece::WhiteKnight,
            Piece::WhiteBishop,
            Piece::WhiteQueen,
            Piece::WhiteKing,
            Piece::WhiteBishop,
            Piece::WhiteKnight,
            Piece::WhiteRook,
        ];
        let black_back_rank = [
            Piece::BlackRook,
            Piece::BlackKnight,
            Piece::BlackBishop,
            Piece::BlackQueen,
            Piece::BlackKing,
            Piece::BlackBishop,
            Piece::BlackKnight,
            Piece::BlackRook,
        ];
        for file in 0..8 {
            board.pieces[Square::new(0, file).index()] = white_back_rank[file];
            board.pieces[Square::new(1, file).index()] = Piece::WhitePawn;
            board.pieces[Square::new(6, file).index()] = Piece::BlackPawn;
            board.pieces[Square::new(7, file).index()] = black_back_rank[file];
        }

        board.castling_rights = ALL_CASTLING_RIGHTS;
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [Piece::Empty; 64],
            side_to_move: Side::White,
            en_passant_square: None,
            castling_rights: 0,
        }
    }

    /// The piece standing on a square (`Piece::Empty` for none).
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.pieces[square.index()]
    }

    pub(crate) fn set_piece(&mut self, square: Square, piece: Piece) {
        self.pieces[square.index()] = piece;
    }

    /// True when the piece belongs to the side to move.
    #[inline]
    #[must_use]
    pub(crate) fn is_our_piece(&self, piece: Piece) -> bool {
        piece.side() == Some(self.side_to_move)
    }

    /// True when the piece belongs to the opponent of the side to move.
    #[inline]
    #[must_use]
    pub(crate) fn is_opponent_piece(&self, piece: Piece) -> bool {
        match piece.side() {
            Some(side) => side != self.side_to_move,
            None => false,
        }
    }

    pub(crate) fn find_king(&self, side: Side) -> Option<Square> {
        let king = Piece::king(side);
        (0..64)
            .find(|&idx| self.pieces[idx] == king)
            .map(Square::from_index)
    }

    /// Render the position to stdout.
    pub fn print_board(&self) {
        println!("{self}");
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// Grid from rank 8 down to rank 1, then side to move, castling rights,
    /// and the en passant target square index (or `none`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for rank in (0..8).rev() {
            write!(f, "{} | ", rank + 1)?;
            for file in 0..8 {
                write!(f, "{} ", self.piece_at(Square::new(rank, file)).to_char())?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    a b c d e f g h")?;
        writeln!(f)?;
        writeln!(f, "Side to move: {}", self.side_to_move)?;
        writeln!(f, "Castling: {}", castling_string(self.castling_rights))?;
        match self.en_passant_square {
            Some(square) => write!(f, "En passant: {}", square.index()),
            None => write!(f, "En passant: none"),
        }
    }
}
