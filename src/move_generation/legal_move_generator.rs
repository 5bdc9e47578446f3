//! Move legality gate and legal move enumeration.
//!
//! Legality here follows the variant's rules: piece ownership, no
//! self-capture, piece movement patterns with path clearance, and castling
//! preconditions. A move that leaves the mover's own king attacked is still
//! legal.

use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::is_legal_bishop_move;
use crate::move_generation::legal_moves_king::is_legal_king_move;
use crate::move_generation::legal_moves_knight::is_legal_knight_move;
use crate::move_generation::legal_moves_pawn::is_legal_pawn_move;
use crate::move_generation::legal_moves_queen::is_legal_queen_move;
use crate::move_generation::legal_moves_rook::is_legal_rook_move;

const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Whether `mv` may be played in `game_state`. Has no side effects.
pub fn is_legal_move(game_state: &GameState, mv: ChessMove) -> bool {
    if !mv.from.is_on_board() || !mv.to.is_on_board() {
        return false;
    }

    let Some(piece) = game_state.board.get(mv.from) else {
        return false;
    };
    if piece.color != game_state.turn {
        return false;
    }

    if game_state
        .board
        .get(mv.to)
        .is_some_and(|dest| dest.color == piece.color)
    {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => is_legal_pawn_move(game_state, mv, piece.color),
        PieceKind::Knight => is_legal_knight_move(mv),
        PieceKind::Bishop => is_legal_bishop_move(game_state, mv),
        PieceKind::Rook => is_legal_rook_move(game_state, mv),
        PieceKind::Queen => is_legal_queen_move(game_state, mv),
        PieceKind::King => is_legal_king_move(game_state, mv, piece.color),
    }
}

/// True when `mv` moves a pawn of the side to move onto its promotion rank
/// without naming a promotion piece. Interactive callers use this to ask.
pub fn needs_promotion_choice(game_state: &GameState, mv: ChessMove) -> bool {
    if mv.promotion.is_some() || !mv.from.is_on_board() {
        return false;
    }
    game_state.board.get(mv.from).is_some_and(|piece| {
        piece.is(PieceKind::Pawn, game_state.turn) && mv.to.rank == promotion_rank(piece.color)
    })
}

/// Every legal move for the side to move, by origin square in board scan
/// order. Pawn moves onto the promotion rank are listed once per promotion
/// piece.
pub fn legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut out = Vec::<ChessMove>::with_capacity(64);

    for (from, piece) in game_state.board.pieces_of(game_state.turn) {
        for file in 0..8 {
            for rank in 0..8 {
                let mv = ChessMove::new(from, Position::new(file, rank));
                if !is_legal_move(game_state, mv) {
                    continue;
                }

                if piece.kind == PieceKind::Pawn && rank == promotion_rank(piece.color) {
                    out.extend(
                        PROMOTION_CHOICES
                            .iter()
                            .map(|&kind| ChessMove::with_promotion(mv.from, mv.to, kind)),
                    );
                } else {
                    out.push(mv);
                }
            }
        }
    }

    out
}
