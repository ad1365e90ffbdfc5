//! Errors surfaced by the engine.
//!
//! Only malformed input is reported through these types: a corrupt wire
//! board, a remote snapshot that cannot be played, or unreadable coordinate
//! and diagram text. Illegal clicks are absorbed by the controller and
//! invariant violations panic.

use thiserror::Error;

use crate::game_state::chess_types::Color;

/// Failure to decode the packed board wire format.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("board payload is not valid base64url: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("board payload must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The coordinate bits of word `index` do not name the cell at that
    /// position of the file-major order.
    #[error("word {index} encodes file {file} rank {rank}, which is not its position")]
    CoordinateMismatch { index: usize, file: u8, rank: u8 },

    #[error("word {index} has the wrong square colour bit")]
    SquareColorMismatch { index: usize },

    #[error("word {index} has unknown piece code {code}")]
    InvalidPieceCode { index: usize, code: u8 },

    #[error("word {index} has reserved bits set: {word:#06x}")]
    ReservedBitsSet { index: usize, word: u16 },

    #[error("word {index} is an empty cell with piece flags set")]
    FlagsOnEmptyCell { index: usize },
}

/// Failure to apply a remote snapshot to the local controller.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("remote board has no {0:?} king")]
    MissingKing(Color),
}

/// Failure to read "e4"-style coordinates or ASCII board diagrams.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlgebraicError {
    #[error("invalid algebraic square: {0:?}")]
    InvalidSquare(String),

    #[error("diagram must have 8 rows, got {0}")]
    RowCount(usize),

    #[error("diagram row {row} must have 8 cells, got {actual}")]
    RowWidth { row: usize, actual: usize },

    #[error("unknown diagram token {token:?} in row {row}")]
    UnknownToken { row: usize, token: String },
}
