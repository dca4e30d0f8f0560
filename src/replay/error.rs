//! Replay error types.

use std::fmt;

use crate::board::MoveParseError;

/// Why a rules engine turned down a move token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenRejection {
    /// The token is not `<from><to>[promotion]` in coordinate notation
    Malformed(String),
    /// The token is well formed but names no legal move
    Illegal,
}

impl From<MoveParseError> for TokenRejection {
    fn from(err: MoveParseError) -> Self {
        if err.is_illegal() {
            TokenRejection::Illegal
        } else {
            TokenRejection::Malformed(err.to_string())
        }
    }
}

/// A replay stopped at the first bad token.
///
/// `ply` is 1-based: the first token of the sequence is ply 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// Token does not parse into squares and an optional promotion letter
    MalformedToken {
        ply: usize,
        token: String,
        reason: String,
    },
    /// Token parses but is not legal in the position reached so far
    IllegalMove { ply: usize, token: String },
}

impl ReplayError {
    pub(crate) fn from_rejection(rejection: TokenRejection, ply: usize, token: &str) -> Self {
        let token = token.to_string();
        match rejection {
            TokenRejection::Malformed(reason) => ReplayError::MalformedToken { ply, token, reason },
            TokenRejection::Illegal => ReplayError::IllegalMove { ply, token },
        }
    }

    /// 1-based index of the offending token
    #[must_use]
    pub fn ply(&self) -> usize {
        match self {
            ReplayError::MalformedToken { ply, .. } | ReplayError::IllegalMove { ply, .. } => *ply,
        }
    }

    /// The offending token as given
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            ReplayError::MalformedToken { token, .. } | ReplayError::IllegalMove { token, .. } => {
                token
            }
        }
    }
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::MalformedToken { ply, token, reason } => {
                write!(f, "malformed move '{token}' at ply {ply}: {reason}")
            }
            ReplayError::IllegalMove { ply, token } => {
                write!(f, "illegal move '{token}' at ply {ply}")
            }
        }
    }
}

impl std::error::Error for ReplayError {}
