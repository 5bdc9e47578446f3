//! The random swap applied after most non-checking moves.
//!
//! The moved piece trades places with another piece of its own color chosen
//! by a generator seeded from `GameState::rand_seed`. Candidates are
//! collected in board scan order (file-major, then rank), so a given seed
//! always selects the same square for the same position.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::game_state::{chess_types::*, game_state::GameState};

/// The two squares whose pieces were exchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapEvent {
    /// Destination of the move that triggered the swap.
    pub a: Position,
    /// The chosen same-color square.
    pub b: Position,
}

/// Squares holding a piece of `color`, other than `exclude`, in scan order.
pub fn swap_candidates(game_state: &GameState, color: Color, exclude: Position) -> Vec<Position> {
    game_state
        .board
        .pieces_of(color)
        .map(|(pos, _)| pos)
        .filter(|pos| *pos != exclude)
        .collect()
}

/// Swap the piece on `moved_pos` with a seeded-random friendly piece.
///
/// No-op when `moved_pos` is empty or the piece has no friendly company.
/// Otherwise draws one candidate, exchanges the two squares, and advances
/// the seed by one.
pub fn apply_swap(game_state: &mut GameState, moved_pos: Position) -> Option<SwapEvent> {
    let moved_piece = game_state.board.get(moved_pos)?;

    let candidates = swap_candidates(game_state, moved_piece.color, moved_pos);
    if candidates.is_empty() {
        return None;
    }

    let seed = game_state.rand_seed;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let target = candidates[rng.random_range(0..candidates.len())];

    game_state.board.swap(moved_pos, target);
    game_state.rand_seed = seed.wrapping_add(1);

    debug!(
        seed,
        from = %moved_pos,
        to = %target,
        candidates = candidates.len(),
        "swapped moved piece"
    );

    Some(SwapEvent {
        a: moved_pos,
        b: target,
    })
}
