//! Move candidates produced by the per-piece generators.
//!
//! A candidate names its destination and the extra cells it touches, so the
//! controller can apply exactly the right side effects without inspecting the
//! board again.

use crate::game_state::coordinates::Coordinate;

/// Side effects attached to a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveEffect {
    /// Plain relocation, capturing whatever stands on the destination.
    Default,
    /// Pawn move. `captured` is set for en passant: the cell whose pawn is
    /// removed is not the destination.
    PawnSpecial { captured: Option<Coordinate> },
    /// King castling move carrying the rook relocation.
    CastlingSpecial {
        rook_from: Coordinate,
        rook_to: Coordinate,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCandidate {
    pub from: Coordinate,
    pub to: Coordinate,
    pub effect: MoveEffect,
}

impl MoveCandidate {
    #[inline]
    pub const fn new(from: Coordinate, to: Coordinate) -> Self {
        Self {
            from,
            to,
            effect: MoveEffect::Default,
        }
    }

    #[inline]
    pub const fn pawn(from: Coordinate, to: Coordinate, captured: Option<Coordinate>) -> Self {
        Self {
            from,
            to,
            effect: MoveEffect::PawnSpecial { captured },
        }
    }

    #[inline]
    pub const fn castling(
        from: Coordinate,
        to: Coordinate,
        rook_from: Coordinate,
        rook_to: Coordinate,
    ) -> Self {
        Self {
            from,
            to,
            effect: MoveEffect::CastlingSpecial { rook_from, rook_to },
        }
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        matches!(
            self.effect,
            MoveEffect::PawnSpecial {
                captured: Some(_)
            }
        )
    }

    #[inline]
    pub const fn is_castling(&self) -> bool {
        matches!(self.effect, MoveEffect::CastlingSpecial { .. })
    }
}
