//! Replaying a sequence of coordinate-notation moves.
//!
//! # Example
//! ```
//! use board_replay::replay::render_line;
//!
//! let text = render_line("e2e4 e7e5").unwrap();
//! assert_eq!(text.lines().nth(3), Some("....p..."));
//! assert_eq!(text.lines().nth(4), Some("....P..."));
//! ```

mod applier;
mod engine;
mod error;
mod renderer;

pub use applier::MoveApplier;
pub use engine::{RulesEngine, StandardRules};
pub use error::{ReplayError, TokenRejection};
pub use renderer::BoardRenderer;

use crate::board::Board;

/// Split a move list on whitespace; blank input yields no tokens.
pub fn tokenize(input: &str) -> impl Iterator<Item = &str> {
    input.split_whitespace()
}

/// Replay a whitespace-separated move list from the starting position.
pub fn replay_line(input: &str) -> Result<Board, ReplayError> {
    let mut applier = MoveApplier::new();
    applier.replay(tokenize(input))?;
    Ok(applier.into_position())
}

/// Replay a move list and render the final position.
pub fn render_line(input: &str) -> Result<String, ReplayError> {
    let board = replay_line(input)?;
    Ok(BoardRenderer::new(StandardRules).render(&board))
}
