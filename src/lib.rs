//! Replay chess moves given in coordinate notation and print the board.
//!
//! The [`board`] module is a self-contained rules engine; [`replay`] drives
//! it through the [`replay::RulesEngine`] trait.

pub mod board;
pub mod replay;
mod zobrist;

pub use board::{Board, Color, Move, Piece, Square};
pub use replay::{BoardRenderer, MoveApplier, ReplayError, RulesEngine, StandardRules};
