//! The game state transition.
//!
//! `apply_move` is the only mutator of a `GameState`. It gates on legality,
//! applies the move with its special-move side effects, then decides whether
//! the swap fires, and finally updates en-passant, castling rights and turn.
//! The step order is load-bearing: check detection must see the moved
//! position before any swap, and rights updates use the pre-move snapshot.

use tracing::{debug, trace};

use crate::chess_errors::IllegalMove;
use crate::game_state::chess_rules::{
    castling_side_for, pawn_home_rank, promotion_rank, rook_castled_square, rook_home_square,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{
    attackers_to_square, king_square, move_gives_check,
};
use crate::move_generation::legal_move_generator::is_legal_move;
use crate::move_generation::swap::{apply_swap, SwapEvent};

/// What happened while applying a move, for callers that display it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveReport {
    pub gives_check: bool,
    /// True when a pending suppression from the previous check was consumed.
    pub swap_suppressed: bool,
    pub swap: Option<SwapEvent>,
}

/// Apply `mv` to `game_state` in place.
///
/// On `Err` the state is untouched. Once the move is legal the transition
/// cannot fail.
#[inline]
pub fn apply_move(game_state: &mut GameState, mv: ChessMove) -> Result<(), IllegalMove> {
    apply_move_with_report(game_state, mv).map(|_| ())
}

pub fn apply_move_with_report(
    game_state: &mut GameState,
    mv: ChessMove,
) -> Result<MoveReport, IllegalMove> {
    if !is_legal_move(game_state, mv) {
        debug!(%mv, turn = %game_state.turn, "rejected illegal move");
        return Err(IllegalMove(mv));
    }

    // Legality guarantees a piece of the side to move on `from`.
    let Some(moved_piece) = game_state.board.get(mv.from) else {
        return Err(IllegalMove(mv));
    };
    let mover = moved_piece.color;
    let dest = game_state.board.get(mv.to);

    let is_en_passant_capture = moved_piece.kind == PieceKind::Pawn
        && dest.is_none()
        && mv.d_file() != 0
        && game_state.en_passant == Some(mv.to);
    let castling_side = if moved_piece.kind == PieceKind::King {
        castling_side_for(mv.d_file())
    } else {
        None
    };

    game_state.board.set(mv.from, None);
    game_state.board.set(mv.to, Some(moved_piece));

    if is_en_passant_capture {
        let captured = Position::new(mv.to.file, mv.from.rank);
        trace!(%captured, "en passant capture");
        game_state.board.set(captured, None);
    }

    if let Some(side) = castling_side {
        let rook_from = rook_home_square(mover, side);
        let rook_to = rook_castled_square(mover, side);
        trace!(?side, %rook_from, %rook_to, "castling rook relocation");
        let rook = game_state.board.take(rook_from);
        game_state.board.set(rook_to, rook);
    }

    let mut placed_piece = moved_piece;
    if moved_piece.kind == PieceKind::Pawn && mv.to.rank == promotion_rank(mover) {
        placed_piece.kind = match mv.promotion {
            None | Some(PieceKind::Pawn) => PieceKind::Queen,
            Some(kind) => kind,
        };
        game_state.board.set(mv.to, Some(placed_piece));
    }

    let gives_check = move_gives_check(&game_state.board, mover);
    let mut report = MoveReport {
        gives_check,
        ..MoveReport::default()
    };

    if gives_check {
        let checkers = king_square(&game_state.board, mover.opposite())
            .map(|king| attackers_to_square(&game_state.board, king, mover))
            .unwrap_or_default();
        debug!(%mv, ?checkers, "move gives check, swap suppressed");
        game_state.suppress_next_swap = true;
    } else if game_state.suppress_next_swap {
        debug!(%mv, "suppression consumed, no swap");
        game_state.suppress_next_swap = false;
        report.swap_suppressed = true;
    } else {
        report.swap = apply_swap(game_state, mv.to);
    }

    game_state.en_passant = None;
    if moved_piece.kind == PieceKind::Pawn
        && mv.from.rank == pawn_home_rank(mover)
        && mv.d_rank() == 2 * mover.forward()
    {
        game_state.en_passant = Some(mv.from.offset(0, mover.forward()));
    }

    update_castling_rights(game_state, mv, placed_piece, dest);

    game_state.turn = mover.opposite();

    Ok(report)
}

/// Moving the king drops both of its rights; a rook leaving its home square,
/// or being captured on it, drops that side's right.
fn update_castling_rights(
    game_state: &mut GameState,
    mv: ChessMove,
    moved_piece: Piece,
    dest: Option<Piece>,
) {
    let mover = moved_piece.color;

    for side in [CastlingSide::KingSide, CastlingSide::QueenSide] {
        match moved_piece.kind {
            PieceKind::King => game_state.revoke_castling(mover, side),
            PieceKind::Rook if mv.from == rook_home_square(mover, side) => {
                game_state.revoke_castling(mover, side)
            }
            _ => {}
        }

        if let Some(captured) = dest {
            if captured.kind == PieceKind::Rook
                && mv.to == rook_home_square(captured.color, side)
            {
                game_state.revoke_castling(captured.color, side);
            }
        }
    }
}
