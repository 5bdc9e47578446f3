//! Coordinate move text, the format typed at the interactive prompt.
//!
//! A move is the origin square, the destination square, and an optional
//! promotion letter: `e2e4`, `e7e8q`. Spaces and `-` between squares are
//! accepted, as is upper case. Text that does not parse never reaches the
//! engine.

use std::str::FromStr;

use crate::chess_errors::ParseMoveError;
use crate::game_state::chess_types::{ChessMove, PieceKind};
use crate::utils::algebraic::algebraic_to_position;

/// Parse coordinate move text into a move. Legality is not checked.
pub fn long_algebraic_to_move(text: &str) -> Result<ChessMove, ParseMoveError> {
    let normalized: String = text
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '>')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if normalized.is_empty() {
        return Err(ParseMoveError::Empty);
    }
    if !normalized.is_ascii() || (normalized.len() != 4 && normalized.len() != 5) {
        return Err(ParseMoveError::IncorrectLength);
    }

    let from = algebraic_to_position(&normalized[0..2])?;
    let to = algebraic_to_position(&normalized[2..4])?;
    let promotion = match normalized.chars().nth(4) {
        Some(c) => Some(char_to_promotion(c)?),
        None => None,
    };

    Ok(ChessMove {
        from,
        to,
        promotion,
    })
}

/// The four promotion letters. Anything else is rejected.
pub fn char_to_promotion(ch: char) -> Result<PieceKind, ParseMoveError> {
    match ch.to_ascii_lowercase() {
        'q' => Ok(PieceKind::Queen),
        'r' => Ok(PieceKind::Rook),
        'b' => Ok(PieceKind::Bishop),
        'n' => Ok(PieceKind::Knight),
        _ => Err(ParseMoveError::InvalidPromotion(ch)),
    }
}

impl FromStr for ChessMove {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        long_algebraic_to_move(s)
    }
}
