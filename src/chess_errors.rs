//! Errors used throughout the crate.
//!
//! Malformed move *text* (`ParseMoveError`) is caught before the engine is
//! called. A well-formed move that the current rules reject is an
//! `IllegalMove`. Neither is raised after the board has been touched.

use thiserror::Error;

use crate::game_state::chess_types::ChessMove;

/// A move the current position does not permit.
///
/// Returned by `apply_move`; the game state is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal move {0}")]
pub struct IllegalMove(pub ChessMove);

/// Failure to read coordinate move text such as `e2e4` or `e7e8q`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("empty move")]
    Empty,
    #[error("expected 4 or 5 characters, like e2e4 or e7e8q")]
    IncorrectLength,
    #[error("invalid square {0}")]
    InvalidSquare(String),
    #[error("unknown promotion piece: {0}")]
    InvalidPromotion(char),
}

/// A configuration value that could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be an unsigned integer, got {value:?}")]
    InvalidInteger { name: &'static str, value: String },
    #[error("{name} must be true or false, got {value:?}")]
    InvalidBool { name: &'static str, value: String },
}

/// Anything the interactive session can report for a single input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseMoveError),
    #[error("{0}")]
    Illegal(#[from] IllegalMove),
    #[error("no moves to undo")]
    NothingToUndo,
}
