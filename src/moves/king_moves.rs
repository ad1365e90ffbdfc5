//! King candidate generation.
//!
//! Adjacent steps come from the shared ray walk. Castling candidates are
//! emitted whenever the king and the corner rook are unmoved and the cells
//! between them are empty; attacks on the king's path are checked later by
//! the legality filter, not here.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::CASTLING_ROOK_FILES;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::coordinates::{Coordinate, Offset};
use crate::moves::move_descriptions::MoveCandidate;
use crate::moves::move_rays::{push_ray_moves, step_rays};

pub const KING_RAYS: [[Offset; 1]; 8] = step_rays([
    Offset::new(0, 1),
    Offset::new(0, -1),
    Offset::new(1, 0),
    Offset::new(1, 1),
    Offset::new(1, -1),
    Offset::new(-1, 0),
    Offset::new(-1, 1),
    Offset::new(-1, -1),
]);

pub fn king_moves(board: &Board, from: Coordinate, king: Piece, out: &mut Vec<MoveCandidate>) {
    push_ray_moves(board, from, king.color, &KING_RAYS, out);
    castling_moves(board, from, king, out);
}

fn castling_moves(board: &Board, from: Coordinate, king: Piece, out: &mut Vec<MoveCandidate>) {
    if king.has_moved() {
        return;
    }

    for rook_file in CASTLING_ROOK_FILES {
        let rook_from = Coordinate::new(rook_file, from.rank);
        if rook_from == from {
            continue;
        }

        let rook_ready = board
            .cell(rook_from)
            .occupant()
            .is_some_and(|rook| rook.is(PieceKind::Rook, king.color) && !rook.has_moved());
        if !rook_ready {
            continue;
        }

        let direction: i8 = if rook_file > from.file { 1 } else { -1 };
        let (Some(rook_to), Some(king_to)) = (
            from + Offset::new(direction, 0),
            from + Offset::new(2 * direction, 0),
        ) else {
            continue;
        };

        // King lands strictly between its square and the rook.
        let king_to_index = king_to.file.index() as i8;
        let rook_index = rook_file.index() as i8;
        if (rook_index - king_to_index) * direction <= 0 {
            continue;
        }

        if !path_is_empty(board, from, rook_from, direction) {
            continue;
        }

        out.push(MoveCandidate::castling(from, king_to, rook_from, rook_to));
    }
}

/// True when every cell strictly between `from` and `to` on one rank is empty.
fn path_is_empty(board: &Board, from: Coordinate, to: Coordinate, direction: i8) -> bool {
    let mut current = from + Offset::new(direction, 0);
    while let Some(coordinate) = current {
        if coordinate == to {
            return true;
        }
        if !board.cell(coordinate).is_empty() {
            return false;
        }
        current = coordinate + Offset::new(direction, 0);
    }
    false
}
