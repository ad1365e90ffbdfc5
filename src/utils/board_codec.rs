//! Packed board wire format.
//!
//! Each cell is one 16-bit word (bit 0 least significant):
//!
//! | bits  | meaning                                   |
//! |-------|-------------------------------------------|
//! | 0     | piece has moved                           |
//! | 1     | piece colour, 1 = White                   |
//! | 2-4   | piece kind, 0 = empty (see `kind_code`)   |
//! | 5-7   | rank index                                |
//! | 8-10  | file index                                |
//! | 11    | square colour, 1 = white square           |
//! | 12-15 | reserved, always zero                     |
//!
//! The 64 words are written big-endian in file-major order (A1, A2, .., H8),
//! giving a 128-byte buffer that travels as base64url text.
//!
//! The moved bit only records whether a piece has moved. Decoding gives every
//! flagged piece a move counter of 1, so counters above 1 do not survive the
//! trip.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

use crate::errors::CodecError;
use crate::game_state::board::Board;
use crate::game_state::cell::Cell;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::coordinates::Coordinate;

pub const ENCODED_BOARD_LEN: usize = 128;

const MOVED_BIT: u16 = 1;
const WHITE_PIECE_BIT: u16 = 1 << 1;
const KIND_SHIFT: u16 = 2;
const RANK_SHIFT: u16 = 5;
const FILE_SHIFT: u16 = 8;
const WHITE_SQUARE_BIT: u16 = 1 << 11;
const RESERVED_MASK: u16 = 0xF000;
const PIECE_MASK: u16 = MOVED_BIT | WHITE_PIECE_BIT | (0b111 << KIND_SHIFT);

/// Accepts base64url with or without trailing `=`.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const fn kind_code(kind: PieceKind) -> u16 {
    match kind {
        PieceKind::Pawn => 0b001,
        PieceKind::Bishop => 0b010,
        PieceKind::Knight => 0b011,
        PieceKind::Rook => 0b100,
        PieceKind::Queen => 0b101,
        PieceKind::King => 0b110,
    }
}

const fn kind_from_code(code: u16) -> Option<PieceKind> {
    match code {
        0b001 => Some(PieceKind::Pawn),
        0b010 => Some(PieceKind::Bishop),
        0b011 => Some(PieceKind::Knight),
        0b100 => Some(PieceKind::Rook),
        0b101 => Some(PieceKind::Queen),
        0b110 => Some(PieceKind::King),
        _ => None,
    }
}

pub fn encode_cell(cell: &Cell) -> u16 {
    let coordinate = cell.coordinate();
    let mut word = (u16::from(coordinate.file.index()) << FILE_SHIFT)
        | (u16::from(coordinate.rank.index()) << RANK_SHIFT);
    if cell.color() == Color::White {
        word |= WHITE_SQUARE_BIT;
    }

    if let Some(piece) = cell.occupant() {
        word |= kind_code(piece.kind) << KIND_SHIFT;
        if piece.color == Color::White {
            word |= WHITE_PIECE_BIT;
        }
        if piece.has_moved() {
            word |= MOVED_BIT;
        }
    }
    word
}

/// Decode the word found at position `index` of the file-major order.
pub fn decode_cell(index: usize, word: u16) -> Result<Cell, CodecError> {
    if word & RESERVED_MASK != 0 {
        return Err(CodecError::ReservedBitsSet { index, word });
    }

    let file = ((word >> FILE_SHIFT) & 0b111) as u8;
    let rank = ((word >> RANK_SHIFT) & 0b111) as u8;
    let expected = expected_coordinate(index);
    if (file, rank) != (expected.file.index(), expected.rank.index()) {
        return Err(CodecError::CoordinateMismatch { index, file, rank });
    }

    let empty = Cell::empty(expected);
    let white_square = word & WHITE_SQUARE_BIT != 0;
    if white_square != (empty.color() == Color::White) {
        return Err(CodecError::SquareColorMismatch { index });
    }

    let code = (word >> KIND_SHIFT) & 0b111;
    if code == 0 {
        if word & PIECE_MASK != 0 {
            return Err(CodecError::FlagsOnEmptyCell { index });
        }
        return Ok(empty);
    }

    let kind = kind_from_code(code).ok_or(CodecError::InvalidPieceCode {
        index,
        code: code as u8,
    })?;
    let color = if word & WHITE_PIECE_BIT != 0 {
        Color::White
    } else {
        Color::Black
    };
    let move_count = u32::from(word & MOVED_BIT != 0);
    Ok(empty.with_occupant(Some(Piece::new(kind, color).with_move_count(move_count))))
}

fn expected_coordinate(index: usize) -> Coordinate {
    Coordinate::all()
        .nth(index)
        .unwrap_or_else(|| panic!("cell index {index} outside the board"))
}

/// Pack `board` into its 128-byte wire buffer.
pub fn encode_board(board: &Board) -> [u8; ENCODED_BOARD_LEN] {
    let mut out = [0u8; ENCODED_BOARD_LEN];
    for (chunk, cell) in out.chunks_exact_mut(2).zip(board.cells()) {
        chunk.copy_from_slice(&encode_cell(cell).to_be_bytes());
    }
    out
}

/// Rebuild a board from its 128-byte wire buffer.
pub fn decode_board(bytes: &[u8]) -> Result<Board, CodecError> {
    if bytes.len() != ENCODED_BOARD_LEN {
        return Err(CodecError::InvalidLength {
            expected: ENCODED_BOARD_LEN,
            actual: bytes.len(),
        });
    }

    let cells = bytes
        .chunks_exact(2)
        .enumerate()
        .map(|(index, pair)| decode_cell(index, u16::from_be_bytes([pair[0], pair[1]])))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Board::empty().with_replaced_cells(cells))
}

/// Encode `board` as padded base64url text.
pub fn compress_board(board: &Board) -> String {
    URL_SAFE.encode(encode_board(board))
}

/// Decode base64url text (padding optional) into a board.
pub fn decompress_board(text: &str) -> Result<Board, CodecError> {
    let bytes = URL_SAFE_LENIENT.decode(text.trim())?;
    decode_board(&bytes)
}
