//! Kind dispatch over the per-piece generators.
//!
//! Produces raw candidates (before king-safety filtering) and the attack
//! geometry used for check and castling-path detection.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::coordinates::{Coordinate, Offset};
use crate::moves::bishop_moves::{bishop_moves, BISHOP_RAYS};
use crate::moves::king_moves::{king_moves, KING_RAYS};
use crate::moves::knight_moves::{knight_moves, KNIGHT_RAYS};
use crate::moves::move_descriptions::MoveCandidate;
use crate::moves::move_rays::walk_ray;
use crate::moves::pawn_moves::{pawn_attack_cells, pawn_moves};
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::{rook_moves, ROOK_RAYS};

/// Raw candidates for the piece standing on `from`; empty for an empty cell.
/// `en_passant` is the pawn open to an en passant capture this ply.
pub fn candidate_moves(
    board: &Board,
    from: Coordinate,
    en_passant: Option<Coordinate>,
) -> Vec<MoveCandidate> {
    let mut out = Vec::with_capacity(32);
    if let Some(piece) = board.cell(from).occupant() {
        push_candidate_moves(board, from, piece, en_passant, &mut out);
    }
    out
}

pub fn push_candidate_moves(
    board: &Board,
    from: Coordinate,
    piece: Piece,
    en_passant: Option<Coordinate>,
    out: &mut Vec<MoveCandidate>,
) {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece, en_passant, out),
        PieceKind::Knight => knight_moves(board, from, piece.color, out),
        PieceKind::Bishop => bishop_moves(board, from, piece.color, out),
        PieceKind::Rook => rook_moves(board, from, piece.color, out),
        PieceKind::Queen => queen_moves(board, from, piece.color, out),
        PieceKind::King => king_moves(board, from, piece, out),
    }
}

/// True when `piece` standing on `from` attacks `target`.
///
/// Non-pawns attack what their ray walk reaches (castling never captures).
/// Pawns attack both forward diagonals whether or not anything stands there.
pub fn attacks_cell(board: &Board, from: Coordinate, piece: Piece, target: Coordinate) -> bool {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn_attack_cells(from, color).any(|cell| cell == target),
        PieceKind::Knight => rays_reach(board, from, color, &KNIGHT_RAYS, target),
        PieceKind::King => rays_reach(board, from, color, &KING_RAYS, target),
        PieceKind::Bishop => rays_reach(board, from, color, &BISHOP_RAYS, target),
        PieceKind::Rook => rays_reach(board, from, color, &ROOK_RAYS, target),
        PieceKind::Queen => {
            rays_reach(board, from, color, &ROOK_RAYS, target)
                || rays_reach(board, from, color, &BISHOP_RAYS, target)
        }
    }
}

fn rays_reach<R: AsRef<[Offset]>>(
    board: &Board,
    from: Coordinate,
    color: Color,
    rays: &[R],
    target: Coordinate,
) -> bool {
    rays.iter()
        .any(|ray| walk_ray(board, from, color, ray.as_ref()).contains(&target))
}
