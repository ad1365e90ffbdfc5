use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::coordinates::Coordinate;
use crate::moves::bishop_moves::BISHOP_RAYS;
use crate::moves::move_descriptions::MoveCandidate;
use crate::moves::move_rays::push_ray_moves;
use crate::moves::rook_moves::ROOK_RAYS;

/// Queen rays are the rook rays followed by the bishop rays.
#[inline]
pub fn queen_moves(board: &Board, from: Coordinate, color: Color, out: &mut Vec<MoveCandidate>) {
    push_ray_moves(board, from, color, &ROOK_RAYS, out);
    push_ray_moves(board, from, color, &BISHOP_RAYS, out);
}

#[cfg(test)]
mod tests {
    use super::queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::cell::Cell;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::utils::algebraic::coordinate;

    #[test]
    fn queen_on_d4_of_empty_board_has_twenty_seven_moves() {
        let d4 = coordinate("d4");
        let board = Board::empty()
            .with_replaced_cells([Cell::occupied(d4, Piece::new(PieceKind::Queen, Color::White))]);

        let mut out = Vec::new();
        queen_moves(&board, d4, Color::White, &mut out);

        assert_eq!(out.len(), 27);
    }

    #[test]
    fn queen_has_no_moves_in_initial_layout() {
        let board = Board::initial_layout();
        let mut out = Vec::new();
        queen_moves(&board, coordinate("d1"), Color::White, &mut out);
        assert!(out.is_empty());
    }
}
