//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation correctness
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod make_unmake;

use crate::board::{Board, Move, Piece, Square};

pub(super) fn board(fen: &str) -> Board {
    Board::try_from_fen(fen).unwrap_or_else(|e| panic!("bad test FEN {fen}: {e}"))
}

pub(super) fn find_move(board: &mut Board, from: Square, to: Square, promotion: Option<Piece>) -> Move {
    board
        .generate_moves()
        .into_iter()
        .find(|m| m.from() == from && m.to() == to && m.promotion() == promotion)
        .unwrap_or_else(|| panic!("expected move {from}{to} not found"))
}
