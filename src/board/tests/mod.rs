//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - pseudo-legal and legal move generation
//! - `make_unmake.rs` - make/unmake move correctness
//! - `attacks.rs` - attack detection
//! - `eval.rs` - material evaluation
//! - `search.rs` - negamax and best-move selection
//! - `perft.rs` - move generation node counts
//! - `proptest.rs` - property-based tests

mod proptest;

use super::{Board, BoardBuilder, MoveList, Piece, Side, Square};

/// Build a position from eight rank strings, rank 8 first, using the same
/// characters the board rendering prints (`.` for an empty square).
fn position(rows: [&str; 8], side: Side) -> BoardBuilder {
    let mut builder = BoardBuilder::new().side_to_move(side);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), 8, "rank string needs 8 squares");
        let rank = 7 - i;
        for (file, c) in row.chars().enumerate() {
            let piece = Piece::from_char(c).expect("unknown piece character");
            if piece.is_empty() {
                continue;
            }
            builder = builder.piece(Square::new(rank, file), piece);
        }
    }
    builder
}

fn legal_moves(board: &mut Board) -> MoveList {
    let mut moves = MoveList::new();
    board.generate_legal_moves(&mut moves);
    moves
}

fn pseudo_legal_moves(board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    board.generate_pseudo_legal_moves(&mut moves);
    moves
}

/// Moves starting from one square, in generation order.
fn moves_from(board: &mut Board, from: Square) -> Vec<super::Move> {
    legal_moves(board)
        .iter()
        .copied()
        .filter(|m| m.from == from)
        .collect()
}
