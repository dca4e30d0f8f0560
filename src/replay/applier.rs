//! Sequential application of move tokens.

use log::{debug, info, warn};

use super::engine::{RulesEngine, StandardRules};
use super::error::ReplayError;

/// Owns a position and advances it one token at a time.
///
/// The first rejected token aborts a [`replay`](MoveApplier::replay); the
/// position then holds every move before it.
#[derive(Clone)]
pub struct MoveApplier<R: RulesEngine = StandardRules> {
    rules: R,
    position: R::Position,
    plies: usize,
}

impl MoveApplier<StandardRules> {
    /// Applier over standard rules, starting from the initial position
    #[must_use]
    pub fn new() -> Self {
        MoveApplier::with_rules(StandardRules)
    }
}

impl Default for MoveApplier<StandardRules> {
    fn default() -> Self {
        MoveApplier::new()
    }
}

impl<R: RulesEngine> MoveApplier<R> {
    /// Applier over `rules`, starting from their initial position
    pub fn with_rules(rules: R) -> Self {
        let position = rules.initial_position();
        MoveApplier::from_position(rules, position)
    }

    /// Applier over `rules`, starting from an arbitrary position
    pub fn from_position(rules: R, position: R::Position) -> Self {
        MoveApplier {
            rules,
            position,
            plies: 0,
        }
    }

    /// Validate `token` against the current position and play it.
    pub fn apply(&mut self, token: &str) -> Result<R::Move, ReplayError> {
        let ply = self.plies + 1;
        let mv = self
            .rules
            .parse_move(&mut self.position, token)
            .map_err(|rejection| {
                let err = ReplayError::from_rejection(rejection, ply, token);
                warn!("{err}");
                err
            })?;

        self.rules.apply(&mut self.position, mv);
        self.plies = ply;
        debug!("ply {ply}: {mv} -> {}", self.rules.describe(&self.position));
        Ok(mv)
    }

    /// Apply every token in order, stopping at the first failure.
    ///
    /// Returns the number of plies applied by this call.
    pub fn replay<'a, I>(&mut self, tokens: I) -> Result<usize, ReplayError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let start = self.plies;
        for token in tokens {
            self.apply(token)?;
        }
        let applied = self.plies - start;
        info!("replayed {applied} plies");
        Ok(applied)
    }

    /// The position reached so far
    pub fn position(&self) -> &R::Position {
        &self.position
    }

    /// Give up ownership of the position
    pub fn into_position(self) -> R::Position {
        self.position
    }

    /// Number of plies applied since construction
    pub fn plies(&self) -> usize {
        self.plies
    }

    /// The rules engine driving this replay
    pub fn rules(&self) -> &R {
        &self.rules
    }
}
