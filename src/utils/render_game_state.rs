//! Text board renderer.
//!
//! Draws the board of a game snapshot with file and rank labels for the
//! console front-end and test diagnostics. Rank 8 is printed first.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::coordinates::{Coordinate, File, Rank};
use crate::game_state::game_state::{GameCondition, GameState};
use crate::utils::board_diagram::piece_to_letter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyphs {
    #[default]
    Ascii,
    Unicode,
}

/// Render the board followed by a one-line status.
///
/// A selected cell is bracketed as `[x]`, legal destinations of the
/// selection are marked with `*` when empty.
pub fn render_game_state(state: &GameState, glyphs: Glyphs) -> String {
    let destinations: Vec<Coordinate> = state
        .candidates
        .iter()
        .flatten()
        .map(|candidate| candidate.to)
        .collect();

    let mut out = render_with_marks(&state.board, glyphs, state.selected, &destinations);
    out.push('\n');
    out.push_str(&status_line(state));
    out
}

pub fn status_line(state: &GameState) -> String {
    let turn = match state.turn {
        Color::White => "white",
        Color::Black => "black",
    };
    let condition = match state.condition {
        GameCondition::NothingSpecial => "-".to_owned(),
        GameCondition::Check => "check".to_owned(),
        GameCondition::Mate => "mate".to_owned(),
        GameCondition::Stalemate => "stalemate".to_owned(),
        GameCondition::PawnMutation { cell, .. } => format!("promote {cell}"),
    };
    format!("turn {turn} moves {} condition {condition}", state.move_count)
}

fn render_with_marks(
    board: &Board,
    glyphs: Glyphs,
    selected: Option<Coordinate>,
    destinations: &[Coordinate],
) -> String {
    let mut out = String::new();
    out.push_str("   a  b  c  d  e  f  g  h\n");

    for rank in Rank::ALL.into_iter().rev() {
        out.push(rank.to_char());
        out.push(' ');

        for file in File::ALL {
            let coordinate = Coordinate::new(file, rank);
            let symbol = match board.cell(coordinate).occupant() {
                Some(piece) => piece_symbol(piece, glyphs),
                None if destinations.contains(&coordinate) => '*',
                None => '.',
            };
            if selected == Some(coordinate) {
                out.push('[');
                out.push(symbol);
                out.push(']');
            } else {
                out.push(' ');
                out.push(symbol);
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank.to_char());
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");
    out
}

fn piece_symbol(piece: Piece, glyphs: Glyphs) -> char {
    match glyphs {
        Glyphs::Ascii => piece_to_letter(piece),
        Glyphs::Unicode => piece_to_unicode(piece),
    }
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_game_state, Glyphs};
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::MoveCandidate;
    use crate::utils::algebraic::coordinate;

    #[test]
    fn initial_board_rows() {
        let text = render_game_state(&GameState::new_game(), Glyphs::Ascii);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "8  r  n  b  q  k  b  n  r  8");
        assert_eq!(lines[8], "1  R  N  B  Q  K  B  N  R  1");

        let unicode = render_game_state(&GameState::new_game(), Glyphs::Unicode);
        assert!(unicode.contains('♔'));
        assert!(unicode.contains('♚'));
    }

    #[test]
    fn selection_and_destinations_are_marked() {
        let mut state = GameState::new_game();
        state.selected = Some(coordinate("g1"));
        state.candidates = Some(vec![
            MoveCandidate::new(coordinate("g1"), coordinate("f3")),
            MoveCandidate::new(coordinate("g1"), coordinate("h3")),
        ]);
        let text = render_game_state(&state, Glyphs::Ascii);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[6], "3  .  .  .  .  .  *  .  *  3");
        assert_eq!(lines[8], "1  R  N  B  Q  K  B [N] R  1");
        assert_eq!(lines[10], "turn white moves 0 condition -");
    }
}
