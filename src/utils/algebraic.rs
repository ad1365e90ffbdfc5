//! Coordinate conversions for algebraic squares such as `e4`.

use crate::errors::AlgebraicError;
use crate::game_state::coordinates::{Coordinate, File, Rank};

/// Parse a two-character square such as `e4` (case-insensitive file).
pub fn parse_coordinate(square: &str) -> Result<Coordinate, AlgebraicError> {
    let invalid = || AlgebraicError::InvalidSquare(square.to_owned());
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(invalid());
    }

    let file = File::from_index(file - b'a').ok_or_else(invalid)?;
    let rank = Rank::from_index(rank - b'1').ok_or_else(invalid)?;
    Ok(Coordinate::new(file, rank))
}

/// Test shorthand for squares known to be valid.
#[cfg(test)]
pub(crate) fn coordinate(square: &str) -> Coordinate {
    parse_coordinate(square).expect("test square should parse")
}

#[cfg(test)]
mod tests {
    use super::parse_coordinate;
    use crate::errors::AlgebraicError;
    use crate::game_state::coordinates::{Coordinate, File, Rank};

    #[test]
    fn corners_round_trip() {
        let a1 = parse_coordinate("a1").expect("a1 should parse");
        let h8 = parse_coordinate("H8").expect("H8 should parse");
        assert_eq!(a1, Coordinate::new(File::A, Rank::R1));
        assert_eq!(h8, Coordinate::new(File::H, Rank::R8));
        assert_eq!(a1.to_string(), "a1");
        assert_eq!(h8.to_string(), "h8");
    }

    #[test]
    fn rejects_out_of_range_text() {
        for text in ["", "e", "e9", "i1", "e10", "44"] {
            assert_eq!(
                parse_coordinate(text),
                Err(AlgebraicError::InvalidSquare(text.to_owned()))
            );
        }
    }
}
