//! Move Legality Filter.
//!
//! Each raw candidate is applied to a look-ahead board together with its side
//! effects; it survives only if the mover's king is not attacked there.
//! Castling also requires the king not to start in check and not to cross an
//! attacked cell. Nothing is memoised: callers invoke this lazily on
//! selection and once per side when evaluating the game condition.

use crate::game_state::board::Board;
use crate::game_state::cell::Cell;
use crate::game_state::chess_types::Color;
use crate::game_state::coordinates::Coordinate;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::move_descriptions::{MoveCandidate, MoveEffect};
use crate::moves::piece_moves::{candidate_moves, push_candidate_moves};

/// Legal candidates of the piece on `from`.
pub fn legal_moves_from(
    board: &Board,
    from: Coordinate,
    en_passant: Option<Coordinate>,
) -> Vec<MoveCandidate> {
    let Some(piece) = board.cell(from).occupant() else {
        return Vec::new();
    };
    filter_legal_moves(board, piece.color, candidate_moves(board, from, en_passant))
}

/// Every legal candidate for the side `color`.
pub fn all_legal_moves(
    board: &Board,
    color: Color,
    en_passant: Option<Coordinate>,
) -> Vec<MoveCandidate> {
    let mut pseudo = Vec::with_capacity(64);
    for cell in board.pieces_of(color) {
        if let Some(piece) = cell.occupant() {
            push_candidate_moves(board, cell.coordinate(), piece, en_passant, &mut pseudo);
        }
    }
    filter_legal_moves(board, color, pseudo)
}

/// Drop the candidates that leave `color`'s king attacked.
pub fn filter_legal_moves(
    board: &Board,
    color: Color,
    candidates: Vec<MoveCandidate>,
) -> Vec<MoveCandidate> {
    candidates
        .into_iter()
        .filter(|candidate| is_move_legal(board, color, candidate))
        .collect()
}

pub fn is_move_legal(board: &Board, color: Color, candidate: &MoveCandidate) -> bool {
    if let MoveEffect::CastlingSpecial { rook_to, .. } = candidate.effect {
        if !castling_path_is_safe(board, color, candidate.from, rook_to) {
            return false;
        }
    }

    let next = apply_move(board, candidate);
    !is_king_in_check(&next, color)
}

/// The king may not castle out of check nor through the cell the rook lands on.
fn castling_path_is_safe(board: &Board, color: Color, king_from: Coordinate, transit: Coordinate) -> bool {
    if is_king_in_check(board, color) {
        return false;
    }
    let king = board.cell(king_from).occupant();
    let through =
        board.with_replaced_cells([Cell::empty(king_from), Cell::empty(transit).with_occupant(king)]);
    !is_king_in_check(&through, color)
}
