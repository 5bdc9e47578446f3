use crate::game_state::chess_rules::{castling_side_for, home_rank, rook_home_square};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{is_king_step, path_clear_between};

/// One step in any direction, or a castling move.
pub fn is_legal_king_move(game_state: &GameState, mv: ChessMove, color: Color) -> bool {
    if is_king_step(mv.d_file(), mv.d_rank()) {
        return true;
    }

    if mv.d_rank() != 0 {
        return false;
    }
    match castling_side_for(mv.d_file()) {
        Some(side) => is_legal_castling(game_state, mv, color, side),
        None => false,
    }
}

/// Castling needs the right, the rook on its home square, an empty path
/// between king and destination, and no attack on the king's origin, the
/// square it crosses, or its destination. Being in check is covered by the
/// origin test.
fn is_legal_castling(
    game_state: &GameState,
    mv: ChessMove,
    color: Color,
    side: CastlingSide,
) -> bool {
    if mv.from.rank != home_rank(color) {
        return false;
    }
    if !game_state.can_castle(color, side) {
        return false;
    }

    let rook_ok = game_state
        .board
        .get(rook_home_square(color, side))
        .is_some_and(|rook| rook.is(PieceKind::Rook, color));
    if !rook_ok {
        return false;
    }

    let board = &game_state.board;
    if !path_clear_between(board, mv.from, mv.to) {
        return false;
    }

    let enemy = color.opposite();
    let crossed = mv.from.offset(mv.d_file().signum(), 0);
    ![mv.from, crossed, mv.to]
        .into_iter()
        .any(|square| is_square_attacked(board, square, enemy))
}
