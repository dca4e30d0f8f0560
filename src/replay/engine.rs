//! The capability a rules engine offers to the replay layer.

use std::fmt;

use crate::board::{Board, Move};

use super::error::TokenRejection;

/// What the replay layer needs from a chess rules implementation.
///
/// The applier and renderer only talk to this trait, so any engine that can
/// build the start position, validate coordinate-notation tokens, play moves
/// and draw a position can drive a replay.
pub trait RulesEngine {
    type Position: Clone;
    type Move: Copy + PartialEq + fmt::Display;

    /// The standard starting position
    fn initial_position(&self) -> Self::Position;

    /// Resolve a token such as `e2e4` or `e7e8q` to a legal move
    fn parse_move(
        &self,
        position: &mut Self::Position,
        token: &str,
    ) -> Result<Self::Move, TokenRejection>;

    /// Every legal move for the side to move
    fn legal_moves(&self, position: &mut Self::Position) -> Vec<Self::Move>;

    /// Play a legal move
    fn apply(&self, position: &mut Self::Position, mv: Self::Move);

    /// 8x8 text diagram, rank 8 first
    fn render(&self, position: &Self::Position) -> String;

    /// One-line description of a position for log output
    fn describe(&self, position: &Self::Position) -> String;
}

/// Standard chess rules backed by [`Board`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardRules;

impl RulesEngine for StandardRules {
    type Position = Board;
    type Move = Move;

    fn initial_position(&self) -> Board {
        Board::new()
    }

    fn parse_move(&self, position: &mut Board, token: &str) -> Result<Move, TokenRejection> {
        position.parse_move(token).map_err(TokenRejection::from)
    }

    fn legal_moves(&self, position: &mut Board) -> Vec<Move> {
        position.generate_moves().into_iter().collect()
    }

    fn apply(&self, position: &mut Board, mv: Move) {
        position.make_move(mv);
    }

    fn render(&self, position: &Board) -> String {
        position.render()
    }

    fn describe(&self, position: &Board) -> String {
        position.to_fen()
    }
}
