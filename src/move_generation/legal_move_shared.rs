//! Board geometry shared by legality and attack detection.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// True if every square strictly between `a` and `b` is empty.
///
/// `a` and `b` must lie on a common rank, file or diagonal.
pub fn path_clear_between(board: &Board, a: Position, b: Position) -> bool {
    let step_file = (b.file - a.file).signum();
    let step_rank = (b.rank - a.rank).signum();

    let mut cursor = a.offset(step_file, step_rank);
    while cursor != b {
        if !board.is_empty(cursor) {
            return false;
        }
        cursor = cursor.offset(step_file, step_rank);
    }
    true
}

/// Same file or same rank, non-zero length.
#[inline]
pub fn is_straight_line(d_file: i8, d_rank: i8) -> bool {
    (d_file == 0) != (d_rank == 0)
}

/// Equal file and rank displacement, non-zero length.
#[inline]
pub fn is_diagonal(d_file: i8, d_rank: i8) -> bool {
    d_file.abs() == d_rank.abs() && d_file != 0
}

#[inline]
pub fn is_knight_jump(d_file: i8, d_rank: i8) -> bool {
    matches!((d_file.abs(), d_rank.abs()), (2, 1) | (1, 2))
}

/// One square in any direction, excluding standing still.
#[inline]
pub fn is_king_step(d_file: i8, d_rank: i8) -> bool {
    d_file.abs() <= 1 && d_rank.abs() <= 1 && (d_file, d_rank) != (0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_clear_ignores_endpoints() {
        let mut board = Board::empty();
        let a = Position::new(0, 0);
        let h = Position::new(7, 0);
        board.place(a, PieceKind::Rook, Color::White);
        board.place(h, PieceKind::Rook, Color::Black);
        assert!(path_clear_between(&board, a, h));

        board.place(Position::new(3, 0), PieceKind::Bishop, Color::White);
        assert!(!path_clear_between(&board, a, h));
        assert!(path_clear_between(&board, a, Position::new(3, 0)));
    }

    #[test]
    fn path_clear_on_diagonals() {
        let mut board = Board::empty();
        board.place(Position::new(2, 2), PieceKind::Pawn, Color::Black);
        assert!(!path_clear_between(
            &board,
            Position::new(0, 0),
            Position::new(4, 4)
        ));
        assert!(path_clear_between(
            &board,
            Position::new(0, 7),
            Position::new(4, 3)
        ));
    }

    #[test]
    fn line_shapes() {
        assert!(is_straight_line(0, 5));
        assert!(!is_straight_line(0, 0));
        assert!(!is_straight_line(1, 1));
        assert!(is_diagonal(-3, 3));
        assert!(!is_diagonal(0, 0));
        assert!(is_knight_jump(-1, 2));
        assert!(!is_knight_jump(2, 2));
        assert!(is_king_step(1, -1));
        assert!(!is_king_step(0, 0));
    }
}
