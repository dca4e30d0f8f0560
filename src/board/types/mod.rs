//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - board square as (rank, file)
//! - `Bitboard` - 64-bit set of squares
//! - `Move` and `MoveList` - compact move representation
//! - `CastlingRights` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
