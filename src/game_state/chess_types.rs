//! Plain value types shared by every part of the engine.
//!
//! Pieces, colors, squares and moves carry no behavior beyond small
//! accessors; the rules live in `move_generation`.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a pawn of this color advances by.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase letter used in coordinate move text (`e7e8q`).
    pub const fn as_lowercase_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    #[inline]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }
}

/// A board coordinate. File 0 is the a-file, rank 0 is the first rank.
///
/// Coordinates are signed so that out-of-range moves can be represented and
/// rejected by the legality gate rather than at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub file: i8,
    pub rank: i8,
}

impl Position {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < 8 && self.rank >= 0 && self.rank < 8
    }

    #[inline]
    pub const fn offset(self, d_file: i8, d_rank: i8) -> Self {
        Self {
            file: self.file + d_file,
            rank: self.rank + d_rank,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(
                f,
                "{}{}",
                char::from(b'a' + self.file as u8),
                char::from(b'1' + self.rank as u8)
            )
        } else {
            write!(f, "({},{})", self.file, self.rank)
        }
    }
}

/// A candidate move. `promotion` is only consulted when a pawn reaches its
/// far rank; `None` promotes to a queen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Position,
    pub to: Position,
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Position, to: Position, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    #[inline]
    pub const fn d_file(self) -> i8 {
        self.to.file - self.from.file
    }

    #[inline]
    pub const fn d_rank(self) -> i8 {
        self.to.rank - self.from.rank
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.as_lowercase_char())?;
        }
        Ok(())
    }
}

/// Castling side relative to the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

/// Compact castling rights bitmask.
pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;
pub type CastlingRights = u8;

#[inline]
pub const fn castling_flag(color: Color, side: CastlingSide) -> CastlingRights {
    match (color, side) {
        (Color::White, CastlingSide::KingSide) => CASTLE_WHITE_KINGSIDE,
        (Color::White, CastlingSide::QueenSide) => CASTLE_WHITE_QUEENSIDE,
        (Color::Black, CastlingSide::KingSide) => CASTLE_BLACK_KINGSIDE,
        (Color::Black, CastlingSide::QueenSide) => CASTLE_BLACK_QUEENSIDE,
    }
}
