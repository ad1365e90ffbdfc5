//! 8x8 grid of cells.
//!
//! The board is immutable by replacement: every change produces a new board
//! through `with_replaced_cells`. Outer index is the file, inner the rank,
//! matching the wire order of the board codec.

use crate::game_state::cell::Cell;
use crate::game_state::chess_rules::{back_rank, pawn_rank, BACK_RANK_ORDER};
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::coordinates::{Coordinate, File, Offset, Rank};
use crate::move_generation::legal_move_checks::is_square_attacked;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// Board with no pieces.
    pub fn empty() -> Self {
        let cells = std::array::from_fn(|file_idx| {
            std::array::from_fn(|rank_idx| {
                let coordinate = Coordinate::new(File::ALL[file_idx], Rank::ALL[rank_idx]);
                Cell::empty(coordinate)
            })
        });
        Self { cells }
    }

    /// Standard starting position, every piece with a zero move counter.
    pub fn initial_layout() -> Self {
        let mut changes = Vec::with_capacity(32);
        for color in [Color::White, Color::Black] {
            for (file, kind) in File::ALL.into_iter().zip(BACK_RANK_ORDER) {
                changes.push(Cell::occupied(
                    Coordinate::new(file, back_rank(color)),
                    Piece::new(kind, color),
                ));
                changes.push(Cell::occupied(
                    Coordinate::new(file, pawn_rank(color)),
                    Piece::new(PieceKind::Pawn, color),
                ));
            }
        }
        Self::empty().with_replaced_cells(changes)
    }

    #[inline]
    pub fn cell(&self, coordinate: Coordinate) -> &Cell {
        &self.cells[coordinate.file.index() as usize][coordinate.rank.index() as usize]
    }

    /// Cell reached from `from` by `offset`, `None` off the board.
    #[inline]
    pub fn cell_at_offset(&self, from: Coordinate, offset: Offset) -> Option<&Cell> {
        (from + offset).map(|coordinate| self.cell(coordinate))
    }

    /// All cells in file-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Occupied cells belonging to `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Cell> {
        self.cells().filter(move |cell| cell.holds(color))
    }

    pub fn king_cell(&self, color: Color) -> Option<&Cell> {
        self.cells().find(|cell| {
            cell.occupant()
                .is_some_and(|piece| piece.is(PieceKind::King, color))
        })
    }

    /// New board where each given cell replaces the cell with the same
    /// coordinate; all other cells carry over.
    #[must_use]
    pub fn with_replaced_cells<I>(&self, changes: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut next = *self;
        for cell in changes {
            let coordinate = cell.coordinate();
            next.cells[coordinate.file.index() as usize][coordinate.rank.index() as usize] = cell;
        }
        next
    }

    /// True when a piece opposing `color` attacks `coordinate`.
    #[inline]
    pub fn is_square_under_attack(&self, coordinate: Coordinate, color: Color) -> bool {
        is_square_attacked(self, coordinate, color.opposite())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial_layout()
    }
}
