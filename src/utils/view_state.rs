//! Render-agnostic snapshot of a game for display layers.
//!
//! A `ViewState` is derived from a `GameState` and carries no way back into
//! the engine. Pieces are listed in board scan order.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::swap::SwapEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewPiece {
    pub kind: PieceKind,
    pub color: Color,
    pub file: i8,
    pub rank: i8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub pieces: Vec<ViewPiece>,
    pub turn: Color,
    /// The swap performed by the last move, when the caller knows it.
    pub swap_event: Option<SwapEvent>,
}

impl ViewState {
    pub fn from_game_state(game_state: &GameState) -> Self {
        let pieces = game_state
            .board
            .pieces()
            .map(|(pos, piece)| ViewPiece {
                kind: piece.kind,
                color: piece.color,
                file: pos.file,
                rank: pos.rank,
            })
            .collect();

        Self {
            pieces,
            turn: game_state.turn,
            swap_event: None,
        }
    }

    pub fn with_swap_event(mut self, swap_event: Option<SwapEvent>) -> Self {
        self.swap_event = swap_event;
        self
    }

    pub fn piece_at(&self, file: i8, rank: i8) -> Option<&ViewPiece> {
        self.pieces
            .iter()
            .find(|piece| piece.file == file && piece.rank == rank)
    }
}
