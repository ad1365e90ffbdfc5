//! Candidate application.
//!
//! Turns a move candidate into the set of replaced cells and the resulting
//! board. Used both for real moves and for the look-ahead boards of the
//! legality filter.

use crate::game_state::board::Board;
use crate::game_state::cell::Cell;
use crate::game_state::chess_rules::promotion_rank;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::coordinates::Coordinate;
use crate::moves::move_descriptions::{MoveCandidate, MoveEffect};

/// Board after `candidate`: piece relocated with one more move on its
/// counter, origin cleared, en passant victim removed or castling rook
/// relocated (the rook's counter is bumped as well).
///
/// # Panics
/// Panics if the candidate's origin (or castling rook cell) is empty. Only
/// candidates generated from `board` may be applied to it.
pub fn apply_move(board: &Board, candidate: &MoveCandidate) -> Board {
    board.with_replaced_cells(modified_cells(board, candidate))
}

/// Cells changed by `candidate`, in application order.
pub fn modified_cells(board: &Board, candidate: &MoveCandidate) -> Vec<Cell> {
    let piece = occupant_or_panic(board, candidate.from);
    let mut changes = Vec::with_capacity(4);

    changes.push(Cell::empty(candidate.from));
    changes.push(Cell::occupied(candidate.to, piece.moved()));

    match candidate.effect {
        MoveEffect::Default | MoveEffect::PawnSpecial { captured: None } => {}
        MoveEffect::PawnSpecial {
            captured: Some(victim),
        } => changes.push(Cell::empty(victim)),
        MoveEffect::CastlingSpecial { rook_from, rook_to } => {
            let rook = occupant_or_panic(board, rook_from);
            changes.push(Cell::empty(rook_from));
            changes.push(Cell::occupied(rook_to, rook.moved()));
        }
    }

    changes
}

/// True when `candidate` moves a pawn onto its promotion rank.
pub fn is_promotion_move(board: &Board, candidate: &MoveCandidate) -> bool {
    board.cell(candidate.from).occupant().is_some_and(|piece| {
        piece.kind == PieceKind::Pawn && candidate.to.rank == promotion_rank(piece.color)
    })
}

/// Pawn of the side that moved waiting on its promotion rank, if any.
pub fn pending_promotion(board: &Board, last_move: &MoveCandidate) -> Option<Coordinate> {
    let piece = board.cell(last_move.to).occupant()?;
    (piece.kind == PieceKind::Pawn && last_move.to.rank == promotion_rank(piece.color))
        .then_some(last_move.to)
}

/// Cell of the pawn `candidate` double-steps, which the opponent may take en
/// passant on the next ply only. `board` is the board before the move.
pub fn en_passant_window(board: &Board, candidate: &MoveCandidate) -> Option<Coordinate> {
    let piece = board.cell(candidate.from).occupant()?;
    let double_step = piece.kind == PieceKind::Pawn
        && candidate.from.file == candidate.to.file
        && candidate.from.rank.index().abs_diff(candidate.to.rank.index()) == 2;
    double_step.then_some(candidate.to)
}

fn occupant_or_panic(board: &Board, coordinate: Coordinate) -> Piece {
    match board.cell(coordinate).occupant() {
        Some(piece) => piece,
        None => panic!("move candidate refers to empty cell {coordinate}"),
    }
}
