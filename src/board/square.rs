use std::fmt::Debug;

use strum::{EnumCount, EnumIter};

macro_rules! rank {
    (1) => {
        crate::board::square::Rank::One
    };
    (2) => {
        crate::board::square::Rank::Two
    };
    (3) => {
        crate::board::square::Rank::Three
    };
    (4) => {
        crate::board::square::Rank::Four
    };
    (5) => {
        crate::board::square::Rank::Five
    };
    (6) => {
        crate::board::square::Rank::Six
    };
    (7) => {
        crate::board::square::Rank::Seven
    };
    (8) => {
        crate::board::square::Rank::Eight
    };
}

macro_rules! file {
    (a) => {
        crate::board::square::File::A
    };
    (b) => {
        crate::board::square::File::B
    };
    (c) => {
        crate::board::square::File::C
    };
    (d) => {
        crate::board::square::File::D
    };
    (e) => {
        crate::board::square::File::E
    };
    (f) => {
        crate::board::square::File::F
    };
    (g) => {
        crate::board::square::File::G
    };
    (h) => {
        crate::board::square::File::H
    };
}

macro_rules! sq {
    ($file:ident $rank:tt) => {
        crate::board::square::Square::from_rank_file(
            crate::board::square::rank!($rank),
            crate::board::square::file!($file),
        )
    };
}

pub(crate) use file;
pub(crate) use rank;
pub(crate) use sq;

/// A board square, index 0-63, rank-major with a1 = 0.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct Square {
    idx: u8,
}

impl Debug for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (rank, file) = self.to_rank_file();
        file.fmt(f)?;
        rank.fmt(f)?;

        Ok(())
    }
}

#[derive(EnumIter, Clone, Copy, PartialEq, EnumCount)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Debug for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "1"),
            Self::Two => write!(f, "2"),
            Self::Three => write!(f, "3"),
            Self::Four => write!(f, "4"),
            Self::Five => write!(f, "5"),
            Self::Six => write!(f, "6"),
            Self::Seven => write!(f, "7"),
            Self::Eight => write!(f, "8"),
        }
    }
}

impl Rank {
    const fn from_idx(value: u8) -> Self {
        match value {
            0 => Self::One,
            1 => Self::Two,
            2 => Self::Three,
            3 => Self::Four,
            4 => Self::Five,
            5 => Self::Six,
            6 => Self::Seven,
            7 => Self::Eight,
            _ => unreachable!(),
        }
    }
}

#[derive(Debug, EnumIter, Clone, Copy, PartialEq)]
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
    const fn from_idx(value: u8) -> Self {
        match value {
            0 => Self::A,
            1 => Self::B,
            2 => Self::C,
            3 => Self::D,
            4 => Self::E,
            5 => Self::F,
            6 => Self::G,
            7 => Self::H,
            _ => unreachable!(),
        }
    }
}

impl Square {
    pub const fn north(self) -> Option<Square> {
        let idx = self.idx + 8;

        if idx >= 64 {
            None
        } else {
            Some(Self { idx })
        }
    }

    pub const fn south(self) -> Option<Square> {
        if self.idx < 8 {
            None
        } else {
            Some(Self { idx: self.idx - 8 })
        }
    }

    pub const fn east(self) -> Option<Square> {
        match self.file() {
            File::H => None,
            _ => Some(Self { idx: self.idx + 1 }),
        }
    }

    pub const fn west(self) -> Option<Square> {
        match self.file() {
            File::A => None,
            _ => Some(Self { idx: self.idx - 1 }),
        }
    }

    pub const fn from_idx(idx: u8) -> Option<Square> {
        if idx >= 64 {
            None
        } else {
            Some(Self { idx })
        }
    }

    pub const fn to_idx(self) -> u8 {
        self.idx
    }

    pub const fn from_rank_file(rank: Rank, file: File) -> Square {
        Self {
            idx: file as u8 + rank as u8 * 8,
        }
    }

    pub const fn rank(self) -> Rank {
        Rank::from_idx(self.idx / 8)
    }

    pub const fn file(self) -> File {
        File::from_idx(self.idx % 8)
    }

    pub const fn to_rank_file(self) -> (Rank, File) {
        (self.rank(), self.file())
    }

    pub const fn to_bitboard(self) -> super::bitboard::BitBoard {
        super::bitboard::BitBoard::new(1 << self.idx)
    }

    pub fn iter_all() -> AllSquareIter {
        AllSquareIter { idx: 0 }
    }
}

pub struct AllSquareIter {
    idx: u8,
}

impl Iterator for AllSquareIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let ret = Square::from_idx(self.idx);

        self.idx += 1;

        ret
    }
}
