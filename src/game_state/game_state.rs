//! Externally observed game snapshot.
//!
//! `GameState` bundles the board with the selection and its legal candidates,
//! the side to move, the game condition, the cumulative move counter and the
//! pawn open to an en passant capture. The controller never edits a published
//! snapshot; every transition builds a new one.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::coordinates::Coordinate;
use crate::moves::move_descriptions::MoveCandidate;

/// Closed set of advisory and terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameCondition {
    #[default]
    NothingSpecial,
    Check,
    Mate,
    Stalemate,
    /// A pawn of `color` waits on `cell` for its promotion choice.
    PawnMutation { cell: Coordinate, color: Color },
}

impl GameCondition {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameCondition::Mate | GameCondition::Stalemate)
    }

    #[inline]
    pub const fn pending_promotion(self) -> Option<(Coordinate, Color)> {
        match self {
            GameCondition::PawnMutation { cell, color } => Some((cell, color)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub selected: Option<Coordinate>,
    pub candidates: Option<Vec<MoveCandidate>>,
    pub turn: Color,
    pub condition: GameCondition,
    pub move_count: u32,
    /// Pawn that double-stepped on the previous ply. Closed by any other move.
    pub en_passant: Option<Coordinate>,
}

impl GameState {
    /// Standard layout, White to move, nothing selected.
    pub fn new_game() -> Self {
        Self {
            board: Board::initial_layout(),
            selected: None,
            candidates: None,
            turn: Color::White,
            condition: GameCondition::NothingSpecial,
            move_count: 0,
            en_passant: None,
        }
    }

    /// Candidate whose destination is `to`, if a selection offers one.
    pub fn candidate_to(&self, to: Coordinate) -> Option<&MoveCandidate> {
        self.candidates
            .as_deref()?
            .iter()
            .find(|candidate| candidate.to == to)
    }

    /// Copy with selection and candidates cleared.
    #[must_use]
    pub fn deselected(&self) -> Self {
        Self {
            selected: None,
            candidates: None,
            ..self.clone()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

#[cfg(test)]
mod tests {
    use super::{GameCondition, GameState};
    use crate::game_state::chess_types::Color;
    use crate::moves::move_descriptions::MoveCandidate;
    use crate::utils::algebraic::coordinate;

    #[test]
    fn new_game_is_white_to_move_with_nothing_selected() {
        let state = GameState::new_game();
        assert_eq!(state.turn, Color::White);
        assert_eq!(state.condition, GameCondition::NothingSpecial);
        assert_eq!(state.move_count, 0);
        assert!(state.selected.is_none());
        assert!(state.candidates.is_none());
        assert!(state.en_passant.is_none());
    }

    #[test]
    fn candidate_lookup_and_deselect() {
        let mut state = GameState::new_game();
        state.selected = Some(coordinate("g1"));
        state.candidates = Some(vec![
            MoveCandidate::new(coordinate("g1"), coordinate("f3")),
            MoveCandidate::new(coordinate("g1"), coordinate("h3")),
        ]);

        assert!(state.candidate_to(coordinate("f3")).is_some());
        assert!(state.candidate_to(coordinate("g3")).is_none());

        let cleared = state.deselected();
        assert!(cleared.selected.is_none());
        assert!(cleared.candidate_to(coordinate("f3")).is_none());
        assert_eq!(cleared.board, state.board);
    }

    #[test]
    fn only_mate_and_stalemate_are_terminal() {
        assert!(GameCondition::Mate.is_terminal());
        assert!(GameCondition::Stalemate.is_terminal());
        assert!(!GameCondition::Check.is_terminal());
        let pending = GameCondition::PawnMutation {
            cell: coordinate("a8"),
            color: Color::White,
        };
        assert!(!pending.is_terminal());
        assert_eq!(pending.pending_promotion(), Some((coordinate("a8"), Color::White)));
    }
}
