//! Fixed 8x8 board container.
//!
//! Squares are addressed `[file][rank]`. Accessors do not validate bounds;
//! moves reach the board only after the legality gate has checked them.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.file as usize][pos.rank as usize]
    }

    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.file as usize][pos.rank as usize] = piece;
    }

    #[inline]
    pub fn place(&mut self, pos: Position, kind: PieceKind, color: Color) {
        self.set(pos, Some(Piece::new(kind, color)));
    }

    #[inline]
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.file as usize][pos.rank as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Exchange the contents of two squares in place.
    pub fn swap(&mut self, a: Position, b: Position) {
        let piece_a = self.get(a);
        let piece_b = self.get(b);
        self.set(a, piece_b);
        self.set(b, piece_a);
    }

    /// Occupied squares in file-major, then rank, order.
    ///
    /// Callers that pick among the results by index depend on this order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        (0..8i8).flat_map(move |file| {
            (0..8i8).filter_map(move |rank| {
                let pos = Position::new(file, rank);
                self.get(pos).map(|piece| (pos, piece))
            })
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// First square holding `piece` in scan order.
    pub fn find(&self, piece: Piece) -> Option<Position> {
        self.pieces()
            .find(|(_, candidate)| *candidate == piece)
            .map(|(pos, _)| pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pieces_scan_file_major_then_rank() {
        let mut board = Board::empty();
        board.place(Position::new(2, 0), PieceKind::Rook, Color::White);
        board.place(Position::new(0, 5), PieceKind::Knight, Color::White);
        board.place(Position::new(0, 1), PieceKind::Pawn, Color::Black);

        let order: Vec<Position> = board.pieces().map(|(pos, _)| pos).collect();
        assert_eq!(
            order,
            vec![
                Position::new(0, 1),
                Position::new(0, 5),
                Position::new(2, 0)
            ]
        );
    }

    #[test]
    fn swap_exchanges_occupants() {
        let mut board = Board::empty();
        let a = Position::new(0, 0);
        let b = Position::new(7, 7);
        board.place(a, PieceKind::Queen, Color::White);

        board.swap(a, b);

        assert!(board.is_empty(a));
        assert_eq!(board.get(b), Some(Piece::new(PieceKind::Queen, Color::White)));
    }

    #[test]
    fn find_returns_none_without_match() {
        let board = Board::empty();
        assert_eq!(board.find(Piece::new(PieceKind::King, Color::Black)), None);
    }
}
