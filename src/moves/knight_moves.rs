use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::coordinates::{Coordinate, Offset};
use crate::moves::move_descriptions::MoveCandidate;
use crate::moves::move_rays::{push_ray_moves, step_rays};

pub const KNIGHT_RAYS: [[Offset; 1]; 8] = step_rays([
    Offset::new(1, 2),
    Offset::new(2, 1),
    Offset::new(2, -1),
    Offset::new(1, -2),
    Offset::new(-1, -2),
    Offset::new(-2, -1),
    Offset::new(-2, 1),
    Offset::new(-1, 2),
]);

#[inline]
pub fn knight_moves(board: &Board, from: Coordinate, color: Color, out: &mut Vec<MoveCandidate>) {
    push_ray_moves(board, from, color, &KNIGHT_RAYS, out);
}
