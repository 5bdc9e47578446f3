use crate::game_state::chess_types::ChessMove;
use crate::move_generation::legal_move_shared::is_knight_jump;

/// Knights jump, so nothing in between matters.
#[inline]
pub fn is_legal_knight_move(mv: ChessMove) -> bool {
    is_knight_jump(mv.d_file(), mv.d_rank())
}
