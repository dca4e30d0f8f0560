//! Text rendering of a position.

use super::engine::{RulesEngine, StandardRules};

/// Read-only projection of a position to its 8x8 text diagram.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardRenderer<R: RulesEngine = StandardRules> {
    rules: R,
}

impl<R: RulesEngine> BoardRenderer<R> {
    pub fn new(rules: R) -> Self {
        BoardRenderer { rules }
    }

    /// Eight lines of eight characters, rank 8 first, no trailing newline
    pub fn render(&self, position: &R::Position) -> String {
        self.rules.render(position)
    }
}
