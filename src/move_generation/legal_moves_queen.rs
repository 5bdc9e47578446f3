use crate::game_state::{chess_types::ChessMove, game_state::GameState};
use crate::move_generation::legal_moves_bishop::is_legal_bishop_move;
use crate::move_generation::legal_moves_rook::is_legal_rook_move;

#[inline]
pub fn is_legal_queen_move(game_state: &GameState, mv: ChessMove) -> bool {
    is_legal_rook_move(game_state, mv) || is_legal_bishop_move(game_state, mv)
}
