//! ASCII board diagrams.
//!
//! Eight rows from rank 8 down to rank 1, each with eight whitespace
//! separated tokens: `.` for an empty cell, `PNBRQK` for White pieces and
//! `pnbrqk` for Black. Blank lines are ignored. Every
//! parsed piece starts with a zero move counter.

use crate::errors::AlgebraicError;
use crate::game_state::board::Board;
use crate::game_state::cell::Cell;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::coordinates::{Coordinate, File, Rank};

pub fn parse_diagram(text: &str) -> Result<Board, AlgebraicError> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if rows.len() != 8 {
        return Err(AlgebraicError::RowCount(rows.len()));
    }

    let mut changes = Vec::with_capacity(32);
    for (row, line) in rows.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 8 {
            return Err(AlgebraicError::RowWidth {
                row,
                actual: tokens.len(),
            });
        }

        let rank = Rank::ALL[7 - row];
        for (file, token) in File::ALL.into_iter().zip(tokens) {
            if token == "." {
                continue;
            }
            let piece = piece_from_token(token).ok_or_else(|| AlgebraicError::UnknownToken {
                row,
                token: token.to_owned(),
            })?;
            changes.push(Cell::occupied(Coordinate::new(file, rank), piece));
        }
    }

    Ok(Board::empty().with_replaced_cells(changes))
}

pub fn piece_to_letter(piece: Piece) -> char {
    let letter = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => letter.to_ascii_uppercase(),
        Color::Black => letter,
    }
}

fn piece_from_token(token: &str) -> Option<Piece> {
    let mut chars = token.chars();
    let letter = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    let kind = match letter.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    let color = if letter.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    Some(Piece::new(kind, color))
}
