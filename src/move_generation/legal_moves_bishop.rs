use crate::game_state::{chess_types::ChessMove, game_state::GameState};
use crate::move_generation::legal_move_shared::{is_diagonal, path_clear_between};

#[inline]
pub fn is_legal_bishop_move(game_state: &GameState, mv: ChessMove) -> bool {
    is_diagonal(mv.d_file(), mv.d_rank()) && path_clear_between(&game_state.board, mv.from, mv.to)
}
