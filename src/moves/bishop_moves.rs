use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::coordinates::{Coordinate, Offset};
use crate::moves::move_descriptions::MoveCandidate;
use crate::moves::move_rays::{push_ray_moves, slide_ray, SLIDE_LENGTH};

pub const BISHOP_RAYS: [[Offset; SLIDE_LENGTH]; 4] = [
    slide_ray(1, 1),
    slide_ray(-1, 1),
    slide_ray(1, -1),
    slide_ray(-1, -1),
];

#[inline]
pub fn bishop_moves(board: &Board, from: Coordinate, color: Color, out: &mut Vec<MoveCandidate>) {
    push_ray_moves(board, from, color, &BISHOP_RAYS, out);
}

#[cfg(test)]
mod tests {
    use super::bishop_moves;
    use crate::game_state::board::Board;
    use crate::game_state::cell::Cell;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::utils::algebraic::coordinate;

    #[test]
    fn bishop_in_corner_sees_one_diagonal() {
        let a1 = coordinate("a1");
        let board = Board::empty()
            .with_replaced_cells([Cell::occupied(a1, Piece::new(PieceKind::Bishop, Color::Black))]);

        let mut out = Vec::new();
        bishop_moves(&board, a1, Color::Black, &mut out);

        assert_eq!(out.len(), 7);
        assert!(out.iter().all(|mv| mv.to.file.index() == mv.to.rank.index()));
    }
}
