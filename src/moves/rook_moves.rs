use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::coordinates::{Coordinate, Offset};
use crate::moves::move_descriptions::MoveCandidate;
use crate::moves::move_rays::{push_ray_moves, slide_ray, SLIDE_LENGTH};

pub const ROOK_RAYS: [[Offset; SLIDE_LENGTH]; 4] = [
    slide_ray(0, 1),
    slide_ray(0, -1),
    slide_ray(1, 0),
    slide_ray(-1, 0),
];

#[inline]
pub fn rook_moves(board: &Board, from: Coordinate, color: Color, out: &mut Vec<MoveCandidate>) {
    push_ray_moves(board, from, color, &ROOK_RAYS, out);
}

#[cfg(test)]
mod tests {
    use super::rook_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::cell::Cell;
    use crate::utils::algebraic::coordinate;

    #[test]
    fn rook_on_d4_of_empty_board_has_fourteen_moves() {
        let d4 = coordinate("d4");
        let board = Board::empty()
            .with_replaced_cells([Cell::occupied(d4, Piece::new(PieceKind::Rook, Color::White))]);

        let mut out = Vec::new();
        rook_moves(&board, d4, Color::White, &mut out);

        assert_eq!(out.len(), 14);
        assert_eq!(out.iter().filter(|mv| mv.to.file == d4.file).count(), 7);
        assert_eq!(out.iter().filter(|mv| mv.to.rank == d4.rank).count(), 7);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let a1 = coordinate("a1");
        let board = Board::empty().with_replaced_cells([
            Cell::occupied(a1, Piece::new(PieceKind::Rook, Color::White)),
            Cell::occupied(coordinate("a4"), Piece::new(PieceKind::Pawn, Color::Black)),
        ]);

        let mut out = Vec::new();
        rook_moves(&board, a1, Color::White, &mut out);

        assert!(out.iter().any(|mv| mv.to == coordinate("a4")));
        assert!(!out.iter().any(|mv| mv.to == coordinate("a5")));
    }
}
