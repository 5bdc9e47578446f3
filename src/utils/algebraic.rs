//! Square conversions for coordinate text.
//!
//! Converts human-readable coordinates (e.g., `e4`) to board positions for
//! move parsing. `Position`'s `Display` goes the other way.

use crate::chess_errors::ParseMoveError;
use crate::game_state::chess_types::Position;

/// Convert a square name (for example: "e4") to a position.
#[inline]
pub fn algebraic_to_position(square: &str) -> Result<Position, ParseMoveError> {
    let invalid = || ParseMoveError::InvalidSquare(square.to_owned());

    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(invalid());
    }

    Ok(Position::new((file - b'a') as i8, (rank - b'1') as i8))
}
