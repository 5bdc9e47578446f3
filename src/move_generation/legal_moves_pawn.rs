use crate::game_state::chess_rules::pawn_home_rank;
use crate::game_state::{chess_types::*, game_state::GameState};

/// Pawn pushes, the double step from the home rank, diagonal captures and
/// en-passant captures onto the current en-passant square.
pub fn is_legal_pawn_move(game_state: &GameState, mv: ChessMove, color: Color) -> bool {
    let forward = color.forward();
    let d_file = mv.d_file();
    let d_rank = mv.d_rank();
    let dest = game_state.board.get(mv.to);

    if d_file == 0 && d_rank == forward {
        return dest.is_none();
    }

    if d_file == 0 && d_rank == 2 * forward && mv.from.rank == pawn_home_rank(color) {
        let passed = mv.from.offset(0, forward);
        return dest.is_none() && game_state.board.is_empty(passed);
    }

    if d_file.abs() == 1 && d_rank == forward {
        return match dest {
            Some(target) => target.color != color,
            None => game_state.en_passant == Some(mv.to),
        };
    }

    false
}
