//! Canonical chess-rule constants.
//!
//! Home ranks, double-step landing ranks and the back-rank ordering used to
//! build the initial layout and to drive pawn special moves.

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::coordinates::{File, Rank};

/// Back-rank ordering from file A to file H.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Files holding the castling rooks (queen side, king side).
pub const CASTLING_ROOK_FILES: [File; 2] = [File::A, File::H];

#[inline]
pub const fn back_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::R1,
        Color::Black => Rank::R8,
    }
}

#[inline]
pub const fn pawn_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::R2,
        Color::Black => Rank::R7,
    }
}

/// Rank a pawn of `color` lands on after its double step.
#[inline]
pub const fn double_step_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::R4,
        Color::Black => Rank::R5,
    }
}

/// Rank on which a pawn of `color` must be promoted.
#[inline]
pub const fn promotion_rank(color: Color) -> Rank {
    back_rank(color.opposite())
}
