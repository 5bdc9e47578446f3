//! Line-oriented game session used by the interactive binary.
//!
//! Owns the live `GameState`, an undo history of cloned states, and the
//! pending move while a promotion piece is being chosen. Each input line is
//! either a command or coordinate move text.

use tracing::info;

use crate::chess_errors::{ParseMoveError, SessionError};
use crate::config::SessionConfig;
use crate::game_state::{chess_types::ChessMove, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move_with_report, MoveReport};
use crate::move_generation::legal_move_generator::{legal_moves, needs_promotion_choice};
use crate::move_generation::swap::SwapEvent;
use crate::utils::long_algebraic::{char_to_promotion, long_algebraic_to_move};
use crate::utils::view_state::ViewState;

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Applied(MoveReport),
    /// The move reaches the back rank; the next line names the piece.
    AwaitingPromotion(ChessMove),
    PromotionCancelled,
    Undone,
    LegalMoves(Vec<ChessMove>),
    Redraw,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    history: Vec<GameState>,
    pending_promotion: Option<ChessMove>,
    last_swap: Option<SwapEvent>,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            state: GameState::new_game_with_seed(config.seed),
            history: Vec::new(),
            pending_promotion: None,
            last_swap: None,
            config,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn awaiting_promotion(&self) -> bool {
        self.pending_promotion.is_some()
    }

    /// Snapshot for rendering, including the last swap if configured to show it.
    pub fn view(&self) -> ViewState {
        let swap = if self.config.show_swaps {
            self.last_swap
        } else {
            None
        };
        ViewState::from_game_state(&self.state).with_swap_event(swap)
    }

    pub fn handle_line(&mut self, line: &str) -> Result<SessionOutcome, SessionError> {
        let input = line.trim();

        if let Some(pending) = self.pending_promotion {
            return self.resolve_promotion(pending, input);
        }

        match input.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => return Ok(SessionOutcome::Quit),
            "u" | "undo" => return self.undo(),
            "moves" => return Ok(SessionOutcome::LegalMoves(legal_moves(&self.state))),
            "board" => return Ok(SessionOutcome::Redraw),
            _ => {}
        }

        let mv = long_algebraic_to_move(input)?;
        if needs_promotion_choice(&self.state, mv) {
            self.pending_promotion = Some(mv);
            return Ok(SessionOutcome::AwaitingPromotion(mv));
        }

        self.play(mv)
    }

    /// Apply a move, recording the prior state for undo on success.
    pub fn play(&mut self, mv: ChessMove) -> Result<SessionOutcome, SessionError> {
        let snapshot = self.state.clone();
        let report = apply_move_with_report(&mut self.state, mv)?;

        self.history.push(snapshot);
        self.last_swap = report.swap;
        info!(%mv, gives_check = report.gives_check, swapped = report.swap.is_some(), "move applied");

        Ok(SessionOutcome::Applied(report))
    }

    fn resolve_promotion(
        &mut self,
        pending: ChessMove,
        input: &str,
    ) -> Result<SessionOutcome, SessionError> {
        let mut chars = input.chars();
        let choice = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            (None, _) => return Err(ParseMoveError::Empty.into()),
            (Some(c), Some(_)) => return Err(ParseMoveError::InvalidPromotion(c).into()),
        };

        if choice.eq_ignore_ascii_case(&'c') {
            self.pending_promotion = None;
            return Ok(SessionOutcome::PromotionCancelled);
        }

        let kind = char_to_promotion(choice)?;
        self.pending_promotion = None;
        self.play(ChessMove {
            promotion: Some(kind),
            ..pending
        })
    }

    fn undo(&mut self) -> Result<SessionOutcome, SessionError> {
        let previous = self.history.pop().ok_or(SessionError::NothingToUndo)?;
        self.state = previous;
        self.last_swap = None;
        Ok(SessionOutcome::Undone)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::IllegalMove;
    use crate::game_state::chess_types::{Color, PieceKind, Position};
    use pretty_assertions::assert_eq;

    #[test]
    fn plays_and_undoes_moves() {
        let mut session = Session::default();
        let start = session.state().clone();

        let outcome = session.handle_line("e2e4").expect("e2e4 is legal");
        assert!(matches!(outcome, SessionOutcome::Applied(_)));
        assert_eq!(session.state().turn, Color::Black);

        assert_eq!(session.handle_line("u"), Ok(SessionOutcome::Undone));
        assert_eq!(session.state(), &start);
        assert_eq!(session.handle_line("undo"), Err(SessionError::NothingToUndo));
    }

    #[test]
    fn parse_and_rule_errors_are_distinct() {
        let mut session = Session::default();
        let start = session.state().clone();

        assert_eq!(
            session.handle_line("e2"),
            Err(SessionError::Parse(ParseMoveError::IncorrectLength))
        );
        let illegal = ChessMove::new(Position::new(4, 1), Position::new(4, 4));
        assert_eq!(
            session.handle_line("e2e5"),
            Err(SessionError::Illegal(IllegalMove(illegal)))
        );
        assert_eq!(session.state(), &start);
        assert_eq!(session.handle_line("u"), Err(SessionError::NothingToUndo));
    }

    #[test]
    fn asks_for_promotion_piece() {
        let mut session = Session::default();
        session.state = GameState::new_empty();
        session
            .state
            .board
            .place(Position::new(0, 6), PieceKind::Pawn, Color::White);

        let outcome = session.handle_line("a7a8").expect("move text parses");
        assert!(matches!(outcome, SessionOutcome::AwaitingPromotion(_)));
        assert!(session.awaiting_promotion());

        assert_eq!(
            session.handle_line("x"),
            Err(SessionError::Parse(ParseMoveError::InvalidPromotion('x')))
        );
        assert!(session.awaiting_promotion());

        session.handle_line("n").expect("knight promotion is legal");
        assert!(!session.awaiting_promotion());
        assert_eq!(
            session.state().piece_at(Position::new(0, 7)).map(|p| p.kind),
            Some(PieceKind::Knight)
        );
    }

    #[test]
    fn promotion_can_be_cancelled() {
        let mut session = Session::default();
        session.state = GameState::new_empty();
        session
            .state
            .board
            .place(Position::new(0, 6), PieceKind::Pawn, Color::White);

        session.handle_line("a7a8").expect("move text parses");
        assert_eq!(session.handle_line("c"), Ok(SessionOutcome::PromotionCancelled));
        assert_eq!(session.state().turn, Color::White);
    }

    #[test]
    fn commands() {
        let mut session = Session::default();
        assert_eq!(session.handle_line("QUIT"), Ok(SessionOutcome::Quit));
        assert_eq!(session.handle_line("board"), Ok(SessionOutcome::Redraw));
        match session.handle_line("moves") {
            Ok(SessionOutcome::LegalMoves(moves)) => assert_eq!(moves.len(), 20),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn view_hides_swaps_when_configured() {
        let mut session = Session::new(SessionConfig {
            show_swaps: false,
            ..SessionConfig::default()
        });
        session.handle_line("g1f3").expect("knight move is legal");
        assert_eq!(session.view().swap_event, None);

        let mut shown = Session::default();
        shown.handle_line("g1f3").expect("knight move is legal");
        assert!(shown.view().swap_event.is_some());
    }
}
