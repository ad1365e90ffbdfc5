//! Terminal condition evaluation for the side about to move.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::coordinates::Coordinate;
use crate::game_state::game_state::GameCondition;
use crate::move_generation::legal_move_generator::all_legal_moves;

/// Mate, Stalemate, Check or NothingSpecial for `side_to_move`, with
/// `en_passant` the pawn open to an en passant capture this ply.
///
/// # Panics
/// Panics if `side_to_move` has no king on `board`. Every board the
/// controller accepts carries both kings, so a missing one is a bug upstream.
pub fn game_condition(
    board: &Board,
    side_to_move: Color,
    en_passant: Option<Coordinate>,
) -> GameCondition {
    let Some(king) = board.king_cell(side_to_move) else {
        panic!("no {side_to_move:?} king on the board");
    };

    let in_check = board.is_square_under_attack(king.coordinate(), side_to_move);
    let has_moves = !all_legal_moves(board, side_to_move, en_passant).is_empty();

    match (in_check, has_moves) {
        (true, false) => GameCondition::Mate,
        (false, false) => GameCondition::Stalemate,
        (true, true) => GameCondition::Check,
        (false, true) => GameCondition::NothingSpecial,
    }
}
