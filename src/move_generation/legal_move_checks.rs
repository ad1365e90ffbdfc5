use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::coordinates::Coordinate;
use crate::moves::piece_moves::attacks_cell;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Coordinate> {
    board.king_cell(color).map(|cell| cell.coordinate())
}

/// True when `color`'s king stands on an attacked cell. A board without that
/// king is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// True when any piece of `attacker_color` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Coordinate, attacker_color: Color) -> bool {
    board.pieces_of(attacker_color).any(|cell| {
        cell.occupant()
            .is_some_and(|piece| attacks_cell(board, cell.coordinate(), piece, square))
    })
}
