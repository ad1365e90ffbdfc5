//! File/rank identifiers and offset arithmetic.
//!
//! Every move generator walks the board through `Coordinate + Offset`. The
//! arithmetic fails with `None` past the board edge instead of clamping or
//! wrapping, so a ray simply ends where the board does.

use std::fmt;
use std::ops::Add;

/// Column identifier, `A` is index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Shift by `delta` files, `None` when the result leaves `A..=H`.
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<Self> {
        let shifted = self.index() as i8 + delta;
        if shifted < 0 || shifted > 7 {
            None
        } else {
            Self::from_index(shifted as u8)
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self.index()) as char
    }
}

/// Row identifier, `R1` is index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Shift by `delta` ranks, `None` when the result leaves `R1..=R8`.
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<Self> {
        let shifted = self.index() as i8 + delta;
        if shifted < 0 || shifted > 7 {
            None
        } else {
            Self::from_index(shifted as u8)
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self.index()) as char
    }
}

/// Relative displacement used by ray tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub d_file: i8,
    pub d_rank: i8,
}

impl Offset {
    #[inline]
    pub const fn new(d_file: i8, d_rank: i8) -> Self {
        Self { d_file, d_rank }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub file: File,
    pub rank: Rank,
}

impl Coordinate {
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn offset(self, offset: Offset) -> Option<Self> {
        match (self.file.offset(offset.d_file), self.rank.offset(offset.d_rank)) {
            (Some(file), Some(rank)) => Some(Self { file, rank }),
            _ => None,
        }
    }

    /// Every coordinate in file-major order (A1, A2, .., A8, B1, ..).
    pub fn all() -> impl Iterator<Item = Coordinate> {
        File::ALL
            .into_iter()
            .flat_map(|file| Rank::ALL.into_iter().map(move |rank| Coordinate { file, rank }))
    }
}

impl Add<Offset> for Coordinate {
    type Output = Option<Coordinate>;

    #[inline]
    fn add(self, rhs: Offset) -> Option<Coordinate> {
        self.offset(rhs)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.to_char(), self.rank.to_char())
    }
}
