//! Game Controller state machine.
//!
//! Holds the current `GameState` snapshot and replaces it wholesale on every
//! accepted transition: selection, move application, promotion resolution,
//! new game and remote synchronization. Snapshots are shared as
//! `Arc<GameState>`, so observers see either the old or the new state, never
//! a half-built one.
//!
//! The controller is single-threaded. Callers serialize operations on one
//! instance; observers receive snapshots through `subscribe()`.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use tracing::{debug, info, instrument, trace, warn};

use crate::controller::game_condition::game_condition;
use crate::errors::SyncError;
use crate::game_state::board::Board;
use crate::game_state::cell::Cell;
use crate::game_state::chess_rules::{double_step_rank, pawn_rank};
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::coordinates::{Coordinate, Offset};
use crate::game_state::game_state::{GameCondition, GameState};
use crate::move_generation::legal_move_apply::{apply_move, en_passant_window, pending_promotion};
use crate::move_generation::legal_move_generator::legal_moves_from;
use crate::moves::move_descriptions::MoveCandidate;
use crate::utils::board_codec::decompress_board;

/// Who sits at this end of a remote game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalPlayer {
    pub identity: String,
    pub color: Color,
}

impl LocalPlayer {
    pub fn new(identity: impl Into<String>, color: Color) -> Self {
        Self {
            identity: identity.into(),
            color,
        }
    }
}

#[derive(Debug)]
pub struct GameController {
    state: Arc<GameState>,
    subscribers: Vec<Sender<Arc<GameState>>>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    pub fn new() -> Self {
        Self {
            state: Arc::new(GameState::new_game()),
            subscribers: Vec::new(),
        }
    }

    /// Current snapshot.
    #[inline]
    pub fn state(&self) -> Arc<GameState> {
        Arc::clone(&self.state)
    }

    /// Receive every snapshot published from now on. The current snapshot is
    /// delivered first.
    pub fn subscribe(&mut self) -> Receiver<Arc<GameState>> {
        let (tx, rx) = mpsc::channel();
        // A fresh channel cannot be disconnected yet.
        let _ = tx.send(self.state());
        self.subscribers.push(tx);
        rx
    }

    /// Standard layout, White to move, move count 0.
    pub fn start_new_game(&mut self) {
        info!("starting a new game");
        self.publish(GameState::new_game());
    }

    /// Drive the selection state machine with a click on `coordinate`.
    ///
    /// Returns `false` when the click is ignored and nothing is published.
    #[instrument(level = "trace", skip(self))]
    pub fn on_cell_click(&mut self, coordinate: Coordinate) -> bool {
        let current = self.state();
        if current.condition.is_terminal() || current.condition.pending_promotion().is_some() {
            trace!(condition = ?current.condition, "click ignored");
            return false;
        }

        if let Some(candidate) = current.candidate_to(coordinate).copied() {
            self.apply_candidate(&current, &candidate);
            return true;
        }

        if current.board.cell(coordinate).holds(current.turn) {
            let candidates = legal_moves_from(&current.board, coordinate, current.en_passant);
            debug!(cell = %coordinate, destinations = candidates.len(), "piece selected");
            self.publish(GameState {
                selected: Some(coordinate),
                candidates: Some(candidates),
                ..current.deselected()
            });
            return true;
        }

        if current.selected.is_some() {
            debug!(cell = %coordinate, "selection cancelled");
            self.publish(current.deselected());
            return true;
        }

        trace!(cell = %coordinate, "click ignored");
        false
    }

    /// Resolve a pending promotion on `cell` with a piece of `kind`.
    ///
    /// Returns `false` when no promotion waits on `cell` or `kind` is not a
    /// promotion target.
    pub fn on_promotion_selected(&mut self, cell: Coordinate, kind: PieceKind) -> bool {
        let current = self.state();
        let Some((pending, color)) = current.condition.pending_promotion() else {
            trace!(cell = %cell, "no promotion pending");
            return false;
        };
        if pending != cell || !kind.is_promotion_target() {
            trace!(cell = %cell, ?kind, "promotion choice rejected");
            return false;
        }

        let board = current
            .board
            .with_replaced_cells([Cell::occupied(cell, Piece::new(kind, color))]);
        let turn = color.opposite();
        let condition = game_condition(&board, turn, None);
        debug!(cell = %cell, ?kind, ?condition, "promotion resolved");

        self.publish(GameState {
            board,
            selected: None,
            candidates: None,
            turn,
            condition,
            move_count: current.move_count,
            en_passant: None,
        });
        true
    }

    /// Replace the live state with an authoritative remote snapshot.
    ///
    /// The side to move is the local colour when `turn_owner` is the local
    /// identity, the opposite colour otherwise. Nothing is merged: the
    /// remote board and move count win even when they are older than the
    /// local state. The wire carries no last move, so the en passant window
    /// is kept for an echo of the local snapshot, opened when the snapshot is
    /// exactly one pawn double step ahead of it, and closed otherwise.
    pub fn apply_remote_snapshot(
        &mut self,
        board: Board,
        turn_owner: &str,
        local: &LocalPlayer,
        move_count: u32,
    ) -> Result<(), SyncError> {
        for color in [Color::White, Color::Black] {
            if board.king_cell(color).is_none() {
                warn!(?color, "remote board rejected: king missing");
                return Err(SyncError::MissingKing(color));
            }
        }

        let turn = if turn_owner == local.identity {
            local.color
        } else {
            local.color.opposite()
        };
        let en_passant = remote_en_passant(&self.state, &board, turn, move_count);
        let condition = game_condition(&board, turn, en_passant);
        info!(?turn, move_count, ?condition, ?en_passant, "applied remote snapshot");

        self.publish(GameState {
            board,
            selected: None,
            candidates: None,
            turn,
            condition,
            move_count,
            en_passant,
        });
        Ok(())
    }

    /// Decode a base64url board and apply it as a remote snapshot.
    pub fn apply_compressed_snapshot(
        &mut self,
        board: &str,
        turn_owner: &str,
        local: &LocalPlayer,
        move_count: u32,
    ) -> Result<(), SyncError> {
        let board = decompress_board(board).inspect_err(|err| {
            warn!(error = %err, "remote board rejected: undecodable");
        })?;
        self.apply_remote_snapshot(board, turn_owner, local, move_count)
    }

    fn apply_candidate(&mut self, current: &GameState, candidate: &MoveCandidate) {
        let board = apply_move(&current.board, candidate);
        let move_count = current.move_count + 1;

        let (turn, condition, en_passant) = match pending_promotion(&board, candidate) {
            Some(cell) => (
                current.turn,
                GameCondition::PawnMutation {
                    cell,
                    color: current.turn,
                },
                None,
            ),
            None => {
                let turn = current.turn.opposite();
                let en_passant = en_passant_window(&current.board, candidate);
                (turn, game_condition(&board, turn, en_passant), en_passant)
            }
        };
        debug!(
            from = %candidate.from,
            to = %candidate.to,
            effect = ?candidate.effect,
            ?condition,
            "move applied"
        );

        self.publish(GameState {
            board,
            selected: None,
            candidates: None,
            turn,
            condition,
            move_count,
            en_passant,
        });
    }

    fn publish(&mut self, next: GameState) {
        self.state = Arc::new(next);
        let snapshot = &self.state;
        self.subscribers
            .retain(|subscriber| subscriber.send(Arc::clone(snapshot)).is_ok());
    }
}

fn remote_en_passant(
    current: &GameState,
    board: &Board,
    turn: Color,
    move_count: u32,
) -> Option<Coordinate> {
    let changed = placement_changes(&current.board, board);
    if move_count == current.move_count && turn == current.turn && changed.is_empty() {
        return current.en_passant;
    }
    if current.move_count.checked_add(1) != Some(move_count) {
        return None;
    }

    // One ply ahead: open the window only if that ply was a pawn double step.
    let mover = turn.opposite();
    let &[first, second] = changed.as_slice() else {
        return None;
    };
    let (home, landing) = if first.rank == pawn_rank(mover) {
        (first, second)
    } else {
        (second, first)
    };
    let skipped = (home + Offset::new(0, mover.forward()))?;
    let was_pawn = |board: &Board, cell: Coordinate| {
        board
            .cell(cell)
            .occupant()
            .is_some_and(|piece| piece.is(PieceKind::Pawn, mover))
    };

    let double_step = home.file == landing.file
        && home.rank == pawn_rank(mover)
        && landing.rank == double_step_rank(mover)
        && was_pawn(&current.board, home)
        && was_pawn(board, landing)
        && board.cell(home).is_empty()
        && current.board.cell(skipped).is_empty();
    double_step.then_some(landing)
}

/// Cells whose occupant kind or colour differs. Move counters are ignored:
/// the wire keeps only a moved bit.
fn placement_changes(before: &Board, after: &Board) -> Vec<Coordinate> {
    let placement = |cell: &Cell| cell.occupant().map(|piece| (piece.kind, piece.color));
    before
        .cells()
        .zip(after.cells())
        .filter(|(old, new)| placement(*old) != placement(*new))
        .map(|(old, _)| old.coordinate())
        .collect()
}
