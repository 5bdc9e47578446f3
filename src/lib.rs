//! Crate root module declarations for the swap chess rule engine.
//!
//! Swap chess plays by the usual movement rules, but after most moves the
//! piece that moved trades places with a seeded-random piece of its own
//! color. A move that gives check is never swapped, and neither is the move
//! that answers it.
//!
//! The engine is `game_state` plus `move_generation`. `utils`, `session` and
//! `config` are the collaborators a front end uses: move text parsing, a
//! read-only view for rendering, and an undo-capable session.

pub mod chess_errors;
pub mod config;
pub mod session;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    #[allow(clippy::module_inception)]
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod swap;
}

pub mod utils {
    pub mod algebraic;
    pub mod long_algebraic;
    pub mod render_game_state;
    pub mod view_state;
}

pub use chess_errors::{IllegalMove, ParseMoveError};
pub use game_state::chess_types::{ChessMove, Color, Piece, PieceKind, Position};
pub use game_state::game_state::GameState;
pub use move_generation::legal_move_apply::{apply_move, apply_move_with_report, MoveReport};
pub use move_generation::legal_move_generator::{is_legal_move, legal_moves};
pub use move_generation::swap::SwapEvent;
pub use utils::view_state::{ViewPiece, ViewState};
