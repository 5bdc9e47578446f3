//! Attack queries.
//!
//! One geometric attack test serves both castling safety during legality
//! checks and check detection after a move has been applied.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    is_diagonal, is_king_step, is_knight_jump, is_straight_line, path_clear_between,
};

/// Whether `piece` standing on `from` attacks `target`.
///
/// Pawns attack only diagonally forward. Sliders need a clear path strictly
/// between the two squares. A piece does not attack its own square.
pub fn piece_attacks(board: &Board, from: Position, piece: Piece, target: Position) -> bool {
    let d_file = target.file - from.file;
    let d_rank = target.rank - from.rank;

    match piece.kind {
        PieceKind::Pawn => d_file.abs() == 1 && d_rank == piece.color.forward(),
        PieceKind::Knight => is_knight_jump(d_file, d_rank),
        PieceKind::King => is_king_step(d_file, d_rank),
        PieceKind::Bishop => {
            is_diagonal(d_file, d_rank) && path_clear_between(board, from, target)
        }
        PieceKind::Rook => {
            is_straight_line(d_file, d_rank) && path_clear_between(board, from, target)
        }
        PieceKind::Queen => {
            (is_straight_line(d_file, d_rank) || is_diagonal(d_file, d_rank))
                && path_clear_between(board, from, target)
        }
    }
}

/// Whether any piece of `attacker_color` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| piece_attacks(board, from, piece, square))
}

/// Every piece of `attacker_color` attacking `square`, in board scan order.
pub fn attackers_to_square(
    board: &Board,
    square: Position,
    attacker_color: Color,
) -> Vec<(Position, PieceKind)> {
    board
        .pieces_of(attacker_color)
        .filter(|(from, piece)| piece_attacks(board, *from, *piece, square))
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Position> {
    board.find(Piece::new(PieceKind::King, color))
}

/// Whether `color`'s king is attacked. A missing king is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// Whether the side that just moved now attacks the opponent's king.
///
/// Called on the board after the move has been applied, so direct,
/// discovered and double checks all read as `true`. Without an opposing king
/// on the board this is `false`.
#[inline]
pub fn move_gives_check(board: &Board, mover: Color) -> bool {
    is_king_in_check(board, mover.opposite())
}
