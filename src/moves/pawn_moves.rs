//! Pawn candidate generation.
//!
//! Pawns do not use the shared ray walk: pushes need empty cells, diagonals
//! need an enemy or the en passant window. Every pawn candidate is tagged
//! `PawnSpecial` so the controller can spot promotions and en passant
//! captures without looking at the board again.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::double_step_rank;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::coordinates::{Coordinate, Offset};
use crate::moves::move_descriptions::MoveCandidate;

const ATTACK_FILE_DELTAS: [i8; 2] = [1, -1];

/// `en_passant` is the cell of the pawn that double-stepped on the previous
/// ply, the only pawn that may be taken en passant.
pub fn pawn_moves(
    board: &Board,
    from: Coordinate,
    pawn: Piece,
    en_passant: Option<Coordinate>,
    out: &mut Vec<MoveCandidate>,
) {
    let forward = pawn.color.forward();

    // Pushes: one step, two from an unmoved pawn, both onto empty cells.
    let max_steps = if pawn.has_moved() { 1 } else { 2 };
    for steps in 1..=max_steps {
        let Some(cell) = board.cell_at_offset(from, Offset::new(0, forward * steps)) else {
            break;
        };
        if !cell.is_empty() {
            break;
        }
        out.push(MoveCandidate::pawn(from, cell.coordinate(), None));
    }

    for target in pawn_attack_cells(from, pawn.color) {
        let cell = board.cell(target);
        match cell.occupant() {
            Some(victim) if victim.color != pawn.color => {
                out.push(MoveCandidate::pawn(from, target, None));
            }
            Some(_) => {}
            None => {
                if let Some(captured) = en_passant_victim(board, target, pawn.color, en_passant) {
                    out.push(MoveCandidate::pawn(from, target, Some(captured)));
                }
            }
        }
    }
}

/// The two forward diagonals of a pawn, whatever stands on them.
pub fn pawn_attack_cells(from: Coordinate, color: Color) -> impl Iterator<Item = Coordinate> {
    ATTACK_FILE_DELTAS
        .into_iter()
        .filter_map(move |d_file| from + Offset::new(d_file, color.forward()))
}

/// Cell of the enemy pawn that can be taken en passant by moving onto the
/// empty `target`, if any.
///
/// The victim stands directly behind `target` from the mover's point of view,
/// is the pawn of the open window, has moved exactly once and sits on its own
/// double-step landing rank.
fn en_passant_victim(
    board: &Board,
    target: Coordinate,
    mover: Color,
    en_passant: Option<Coordinate>,
) -> Option<Coordinate> {
    let window = en_passant?;
    let behind = board.cell_at_offset(target, Offset::new(0, -mover.forward()))?;
    let victim = behind.occupant()?;
    let eligible = behind.coordinate() == window
        && victim.is(PieceKind::Pawn, mover.opposite())
        && victim.move_count == 1
        && behind.coordinate().rank == double_step_rank(victim.color);
    eligible.then_some(behind.coordinate())
}

#[cfg(test)]
mod tests {
    use super::pawn_moves;
    use crate::game_state::board::Board;
    use crate::game_state::cell::Cell;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::moves::move_descriptions::{MoveCandidate, MoveEffect};
    use crate::utils::algebraic::coordinate;
    use crate::utils::board_diagram::parse_diagram;

    fn targets(moves: &[MoveCandidate]) -> Vec<String> {
        let mut out: Vec<String> = moves.iter().map(|mv| mv.to.to_string()).collect();
        out.sort();
        out
    }

    fn generate(board: &Board, square: &str) -> Vec<MoveCandidate> {
        generate_with_window(board, square, None)
    }

    fn generate_with_window(
        board: &Board,
        square: &str,
        window: Option<&str>,
    ) -> Vec<MoveCandidate> {
        let from = coordinate(square);
        let pawn = board.cell(from).occupant().expect("pawn should be on the square");
        let mut out = Vec::new();
        pawn_moves(board, from, pawn, window.map(coordinate), &mut out);
        out
    }

    #[test]
    fn unmoved_pawn_can_push_one_or_two() {
        let board = Board::initial_layout();
        assert_eq!(targets(&generate(&board, "e2")), vec!["e3", "e4"]);
        assert_eq!(targets(&generate(&board, "d7")), vec!["d5", "d6"]);
    }

    #[test]
    fn moved_pawn_pushes_once() {
        let board = Board::empty().with_replaced_cells([Cell::occupied(
            coordinate("c3"),
            Piece::new(PieceKind::Pawn, Color::White).with_move_count(1),
        )]);
        assert_eq!(targets(&generate(&board, "c3")), vec!["c4"]);
    }

    #[test]
    fn blocked_pawn_cannot_jump_on_double_step() {
        let board = parse_diagram(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . n . . .
            . . . . P . . .
            . . . . . . . .
            ",
        )
        .expect("diagram should parse");
        assert!(generate(&board, "e2").is_empty());
    }

    #[test]
    fn diagonal_needs_an_enemy() {
        let board = parse_diagram(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . r . N . .
            . . . . P . . .
            . . . . . . . .
            ",
        )
        .expect("diagram should parse");
        assert_eq!(targets(&generate(&board, "e2")), vec!["d3", "e3", "e4"]);
    }

    #[test]
    fn en_passant_targets_pawn_that_just_double_stepped() {
        let mut board = parse_diagram(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . P p . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        )
        .expect("diagram should parse");
        board = board.with_replaced_cells([
            Cell::occupied(
                coordinate("d5"),
                Piece::new(PieceKind::Pawn, Color::White).with_move_count(2),
            ),
            Cell::occupied(
                coordinate("e5"),
                Piece::new(PieceKind::Pawn, Color::Black).with_move_count(1),
            ),
        ]);

        let moves = generate_with_window(&board, "d5", Some("e5"));
        let capture = moves
            .iter()
            .find(|mv| mv.to == coordinate("e6"))
            .expect("en passant capture should be offered");
        assert!(capture.is_en_passant());
        assert_eq!(
            capture.effect,
            MoveEffect::PawnSpecial {
                captured: Some(coordinate("e5"))
            }
        );
    }

    #[test]
    fn pawn_that_moved_twice_is_not_en_passant_target() {
        let board = Board::empty().with_replaced_cells([
            Cell::occupied(
                coordinate("d5"),
                Piece::new(PieceKind::Pawn, Color::White).with_move_count(2),
            ),
            Cell::occupied(
                coordinate("e5"),
                Piece::new(PieceKind::Pawn, Color::Black).with_move_count(2),
            ),
        ]);
        assert!(!generate_with_window(&board, "d5", Some("e5"))
            .iter()
            .any(|mv| mv.is_en_passant()));
    }

    #[test]
    fn en_passant_needs_the_open_window() {
        let board = Board::empty().with_replaced_cells([
            Cell::occupied(
                coordinate("e4"),
                Piece::new(PieceKind::Pawn, Color::Black).with_move_count(2),
            ),
            Cell::occupied(
                coordinate("d4"),
                Piece::new(PieceKind::Pawn, Color::White).with_move_count(1),
            ),
            Cell::occupied(
                coordinate("f4"),
                Piece::new(PieceKind::Pawn, Color::White).with_move_count(1),
            ),
        ]);
        // Both neighbours look eligible by their counters; only f4 just moved.
        let moves = generate_with_window(&board, "e4", Some("f4"));
        let captured: Vec<_> = moves
            .iter()
            .filter(|mv| mv.is_en_passant())
            .map(|mv| mv.to)
            .collect();
        assert_eq!(captured, vec![coordinate("f3")]);

        assert!(!generate(&board, "e4").iter().any(|mv| mv.is_en_passant()));
    }
}
