//! Chess board representation and game logic.
//!
//! A 64-square mailbox array with reversible make/unmake, ray-and-offset
//! attack detection, and a fixed-depth negamax search. Supports the full
//! move rules: castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use woodpusher::board::{Board, MoveList};
//!
//! let mut board = Board::new();
//! let mut moves = MoveList::new();
//! board.generate_legal_moves(&mut moves);
//! assert_eq!(moves.len(), 20);
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod error;
mod eval;
mod make_unmake;
mod movegen;
mod parse;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{MoveParseError, SquareError};
pub use state::{Board, UnmakeInfo};
pub use types::{move_to_string, Move, MoveList, Piece, Side, Square};

// Search score bounds
pub use search::{CHECKMATE_SCORE, INFINITY_SCORE};
