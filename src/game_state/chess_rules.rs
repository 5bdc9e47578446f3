//! Canonical chess-rule constants.
//!
//! Home ranks, promotion ranks, castling squares and the starting layout.
//! Everything here is indexed by color so rule code never branches on it.

use crate::game_state::chess_types::{CastlingSide, Color, PieceKind, Position};

/// Seed used for the swap stream of a freshly created game.
pub const DEFAULT_RAND_SEED: u64 = 1;

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Rank holding the king and rooks at the start of the game.
#[inline]
pub const fn home_rank(color: Color) -> i8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// Rank pawns start on, and may double-step from.
#[inline]
pub const fn pawn_home_rank(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

/// Rank on which a pawn of this color promotes.
#[inline]
pub const fn promotion_rank(color: Color) -> i8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn rook_home_square(color: Color, side: CastlingSide) -> Position {
    let file = match side {
        CastlingSide::KingSide => 7,
        CastlingSide::QueenSide => 0,
    };
    Position::new(file, home_rank(color))
}

/// Where the rook lands after castling on `side`.
#[inline]
pub const fn rook_castled_square(color: Color, side: CastlingSide) -> Position {
    let file = match side {
        CastlingSide::KingSide => 5,
        CastlingSide::QueenSide => 3,
    };
    Position::new(file, home_rank(color))
}

/// Castling side for a horizontal king displacement, if it is a castling one.
#[inline]
pub const fn castling_side_for(d_file: i8) -> Option<CastlingSide> {
    match d_file {
        2 => Some(CastlingSide::KingSide),
        -2 => Some(CastlingSide::QueenSide),
        _ => None,
    }
}
