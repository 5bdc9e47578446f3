//! The single mutable aggregate of a game session.
//!
//! `GameState` owns its board by value, so `Clone` is a full, alias-free
//! copy. Callers keep cloned states for undo history and fork them to compare
//! seeded swap outcomes.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    home_rank, pawn_home_rank, BACK_RANK_LAYOUT, DEFAULT_RAND_SEED,
};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,

    /// Set by a checking move; the following move skips its swap.
    pub suppress_next_swap: bool,
    /// Seed for the next swap draw. Advances by one per swap performed.
    pub rand_seed: u64,

    /// Square passed over by the last move if it was a pawn double-step.
    pub en_passant: Option<Position>,
    pub castling_rights: CastlingRights,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            turn: Color::White,
            suppress_next_swap: false,
            rand_seed: DEFAULT_RAND_SEED,
            en_passant: None,
            castling_rights: 0,
        }
    }
}

impl GameState {
    /// Empty board, White to move, no castling rights. Used for ad-hoc setups.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        Self::new_game_with_seed(DEFAULT_RAND_SEED)
    }

    /// Standard starting position whose swap stream starts at `seed`.
    pub fn new_game_with_seed(seed: u64) -> Self {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                board.place(Position::new(file as i8, home_rank(color)), *kind, color);
            }
            for file in 0..8 {
                board.place(
                    Position::new(file, pawn_home_rank(color)),
                    PieceKind::Pawn,
                    color,
                );
            }
        }

        Self {
            board,
            turn: Color::White,
            suppress_next_swap: false,
            rand_seed: seed,
            en_passant: None,
            castling_rights: CASTLE_ALL,
        }
    }

    #[inline]
    pub fn can_castle(&self, color: Color, side: CastlingSide) -> bool {
        self.castling_rights & castling_flag(color, side) != 0
    }

    /// Clear a castling right. Rights are never granted back.
    #[inline]
    pub fn revoke_castling(&mut self, color: Color, side: CastlingSide) {
        self.castling_rights &= !castling_flag(color, side);
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.board.get(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_game_has_standard_layout() {
        let game = GameState::new_game();

        assert_eq!(game.board.pieces().count(), 32);
        assert_eq!(
            game.piece_at(Position::new(4, 0)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            game.piece_at(Position::new(3, 7)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(
            game.piece_at(Position::new(6, 6)),
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert_eq!(game.turn, Color::White);
        assert_eq!(game.rand_seed, DEFAULT_RAND_SEED);
        assert_eq!(game.en_passant, None);
        assert!(!game.suppress_next_swap);
        for color in [Color::White, Color::Black] {
            assert!(game.can_castle(color, CastlingSide::KingSide));
            assert!(game.can_castle(color, CastlingSide::QueenSide));
        }
    }

    #[test]
    fn clone_is_independent() {
        let original = GameState::new_game();
        let mut copy = original.clone();

        copy.board.set(Position::new(4, 1), None);
        copy.rand_seed += 5;
        copy.revoke_castling(Color::White, CastlingSide::KingSide);

        assert_eq!(
            original.piece_at(Position::new(4, 1)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(original.rand_seed, DEFAULT_RAND_SEED);
        assert!(original.can_castle(Color::White, CastlingSide::KingSide));
    }

    #[test]
    fn revoked_rights_stay_revoked() {
        let mut game = GameState::new_game();
        game.revoke_castling(Color::Black, CastlingSide::QueenSide);
        game.revoke_castling(Color::Black, CastlingSide::QueenSide);

        assert!(!game.can_castle(Color::Black, CastlingSide::QueenSide));
        assert!(game.can_castle(Color::Black, CastlingSide::KingSide));
    }
}
