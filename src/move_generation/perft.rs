//! Perft node counting over the legal move tree.
//!
//! A pending promotion is expanded into the four promotion kinds so the
//! counts line up with conventional perft tables.

use crate::game_state::board::Board;
use crate::game_state::cell::Cell;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::coordinates::Coordinate;
use crate::move_generation::legal_move_apply::{apply_move, en_passant_window, is_promotion_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::move_descriptions::MoveCandidate;

pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

/// Count the leaves `depth` plies below `board` with `side_to_move` to play
/// and `en_passant` the pawn that double-stepped on the previous ply.
pub fn perft(
    board: &Board,
    side_to_move: Color,
    en_passant: Option<Coordinate>,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in all_legal_moves(board, side_to_move, en_passant) {
        let window = en_passant_window(board, &mv);
        for (next, promoted) in successors(board, &mv, side_to_move) {
            if depth == 1 {
                total.merge(leaf_counts(board, &next, &mv, promoted, side_to_move));
            } else {
                total.merge(perft(&next, side_to_move.opposite(), window, depth - 1));
            }
        }
    }
    total
}

/// Perft split by root move, labelled "e2e4"-style.
pub fn perft_divide(
    board: &Board,
    side_to_move: Color,
    en_passant: Option<Coordinate>,
    depth: u8,
) -> Vec<(String, usize)> {
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }

    for mv in all_legal_moves(board, side_to_move, en_passant) {
        let window = en_passant_window(board, &mv);
        for (next, promoted) in successors(board, &mv, side_to_move) {
            let nodes = perft(&next, side_to_move.opposite(), window, depth - 1).nodes;
            let suffix = match promoted {
                Some(PieceKind::Knight) => "n",
                Some(PieceKind::Bishop) => "b",
                Some(PieceKind::Rook) => "r",
                Some(_) => "q",
                None => "",
            };
            out.push((format!("{}{}{}", mv.from, mv.to, suffix), nodes));
        }
    }
    out
}

fn successors(board: &Board, mv: &MoveCandidate, mover: Color) -> Vec<(Board, Option<PieceKind>)> {
    let next = apply_move(board, mv);
    if !is_promotion_move(board, mv) {
        return vec![(next, None)];
    }

    PROMOTION_KINDS
        .into_iter()
        .map(|kind| {
            let promoted = next.with_replaced_cells([Cell::occupied(mv.to, Piece::new(kind, mover))]);
            (promoted, Some(kind))
        })
        .collect()
}

fn leaf_counts(
    before: &Board,
    after: &Board,
    mv: &MoveCandidate,
    promoted: Option<PieceKind>,
    mover: Color,
) -> PerftCounts {
    let captured_on_target = !before.cell(mv.to).is_empty();
    PerftCounts {
        nodes: 1,
        captures: usize::from(captured_on_target || mv.is_en_passant()),
        en_passant: usize::from(mv.is_en_passant()),
        castles: usize::from(mv.is_castling()),
        promotions: usize::from(promoted.is_some()),
        checks: usize::from(is_king_in_check(after, mover.opposite())),
    }
}
