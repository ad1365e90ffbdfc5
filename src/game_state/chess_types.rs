//! Core value types shared by the board, the move generators and the codec.
//! Pieces are plain values: kind, owner and how often they have moved. They
//! never point back at the board they stand on.

pub use crate::game_state::board::Board;
pub use crate::game_state::cell::Cell;
pub use crate::game_state::coordinates::{Coordinate, File, Offset, Rank};
pub use crate::game_state::game_state::{GameCondition, GameState};

/// Side colour, also used for square colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction of a pawn push for this side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may turn into on its last rank.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// A piece value. `move_count` is how many times this piece has moved; it
/// drives the pawn double step, castling and en passant eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub move_count: u32,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            move_count: 0,
        }
    }

    #[inline]
    pub const fn with_move_count(self, move_count: u32) -> Self {
        Self { move_count, ..self }
    }

    /// The same piece after one more move.
    #[inline]
    pub const fn moved(self) -> Self {
        Self {
            move_count: self.move_count.saturating_add(1),
            ..self
        }
    }

    #[inline]
    pub const fn has_moved(self) -> bool {
        self.move_count > 0
    }

    #[inline]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }
}
