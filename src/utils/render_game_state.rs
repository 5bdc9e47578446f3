//! Terminal-oriented board renderer.
//!
//! Draws a `ViewState` as text, White at the bottom. Letters are used by
//! default (upper case for White); Unicode glyphs are available too.

use crate::game_state::chess_types::{Color, PieceKind};
use crate::utils::view_state::ViewState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlyphSet {
    #[default]
    Letters,
    Unicode,
}

/// Render the board to a string for terminal output.
pub fn render_view(view: &ViewState, glyphs: GlyphSet) -> String {
    let mut grid = [['.'; 8]; 8];
    for piece in &view.pieces {
        if (0..8).contains(&piece.file) && (0..8).contains(&piece.rank) {
            grid[piece.rank as usize][piece.file as usize] =
                piece_glyph(piece.color, piece.kind, glyphs);
        }
    }

    let mut out = String::new();
    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        for file in 0..8 {
            out.push(' ');
            out.push(grid[rank][file]);
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    out.push_str(&format!("Turn: {}\n", view.turn));

    if let Some(swap) = view.swap_event {
        out.push_str(&format!("Swapped: {} <-> {}\n", swap.a, swap.b));
    }

    out
}

fn piece_glyph(color: Color, piece: PieceKind, glyphs: GlyphSet) -> char {
    match glyphs {
        GlyphSet::Letters => {
            let ch = piece.as_lowercase_char();
            match color {
                Color::White => ch.to_ascii_uppercase(),
                Color::Black => ch,
            }
        }
        GlyphSet::Unicode => match (color, piece) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        },
    }
}
