//! Chess board representation and rules.
//!
//! Uses bitboards for piece placement and generates fully legal moves,
//! including castling, en passant and promotions.
//!
//! # Example
//! ```
//! use board_replay::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod attack_tables;
mod display;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use display::EMPTY_SQUARE;
pub use error::{FenError, MoveParseError, SquareError};
pub use fen::START_FEN;
pub use state::{Board, UnmakeInfo};
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, Square,
};

pub(crate) use types::PROMOTION_PIECES;
