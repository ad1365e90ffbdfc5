use crate::game_state::chess_types::{Color, Piece};
use crate::game_state::coordinates::Coordinate;

/// One square of the board and its optional occupant.
///
/// Square colour is derived from the coordinate on demand, so it cannot drift
/// away from the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    coordinate: Coordinate,
    occupant: Option<Piece>,
}

impl Cell {
    #[inline]
    pub const fn empty(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            occupant: None,
        }
    }

    #[inline]
    pub const fn occupied(coordinate: Coordinate, piece: Piece) -> Self {
        Self {
            coordinate,
            occupant: Some(piece),
        }
    }

    #[inline]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[inline]
    pub const fn occupant(&self) -> Option<Piece> {
        self.occupant
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Square colour: A1 is dark, colours alternate along files and ranks.
    #[inline]
    pub const fn color(&self) -> Color {
        let file_color = if self.coordinate.file.index() % 2 == 0 {
            Color::Black
        } else {
            Color::White
        };
        if self.coordinate.rank.index() % 2 == 0 {
            file_color
        } else {
            file_color.opposite()
        }
    }

    /// Same square with a different occupant.
    #[inline]
    pub const fn with_occupant(self, occupant: Option<Piece>) -> Self {
        Self {
            coordinate: self.coordinate,
            occupant,
        }
    }

    #[inline]
    pub fn holds(&self, color: Color) -> bool {
        self.occupant.is_some_and(|piece| piece.color == color)
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;
    use crate::game_state::chess_types::Color;
    use crate::game_state::coordinates::{Coordinate, File, Rank};

    #[test]
    fn square_colors_form_a_checkerboard_with_dark_a1() {
        let color_of = |file, rank| Cell::empty(Coordinate::new(file, rank)).color();
        assert_eq!(color_of(File::A, Rank::R1), Color::Black);
        assert_eq!(color_of(File::B, Rank::R1), Color::White);
        assert_eq!(color_of(File::A, Rank::R2), Color::White);
        assert_eq!(color_of(File::H, Rank::R1), Color::White);
        assert_eq!(color_of(File::H, Rank::R8), Color::Black);
        assert_eq!(color_of(File::D, Rank::R1), Color::White);
        assert_eq!(color_of(File::E, Rank::R1), Color::Black);
    }
}
