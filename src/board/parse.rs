//! Long-algebraic move parsing.

use super::error::MoveParseError;
use super::types::{Move, MoveList, Piece, Side, Square};
use super::Board;

impl Board {
    /// Parse a long-algebraic move (`e2e4`, `a7a8q`) and match it against
    /// the legal moves of the current position.
    ///
    /// A five-character move ends with a promotion letter from `q r b n`,
    /// interpreted for the side to move. Anything that does not resolve to a
    /// legal move is an error; drivers reprompt on it.
    pub fn parse_move(&mut self, input: &str) -> Result<Move, MoveParseError> {
        if !input.is_ascii() || !(4..=5).contains(&input.len()) {
            return Err(MoveParseError::InvalidLength {
                len: input.chars().count(),
            });
        }

        let from: Square = input[0..2].parse().map_err(|_| MoveParseError::InvalidSquare {
            notation: input.to_string(),
        })?;
        let to: Square = input[2..4].parse().map_err(|_| MoveParseError::InvalidSquare {
            notation: input.to_string(),
        })?;

        let promotion = match input.as_bytes().get(4) {
            None => None,
            Some(&letter) => Some(promotion_piece(letter as char, self.side_to_move)?),
        };

        let mut moves = MoveList::new();
        self.generate_legal_moves(&mut moves);

        moves
            .find(from, to, promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: input.to_string(),
            })
    }
}

fn promotion_piece(letter: char, side: Side) -> Result<Piece, MoveParseError> {
    let piece = match (letter, side) {
        ('q', Side::White) => Piece::WhiteQueen,
        ('r', Side::White) => Piece::WhiteRook,
        ('b', Side::White) => Piece::WhiteBishop,
        ('n', Side::White) => Piece::WhiteKnight,
        ('q', Side::Black) => Piece::BlackQueen,
        ('r', Side::Black) => Piece::BlackRook,
        ('b', Side::Black) => Piece::BlackBishop,
        ('n', Side::Black) => Piece::BlackKnight,
        _ => return Err(MoveParseError::InvalidPromotion { char: letter }),
    };
    Ok(piece)
}
