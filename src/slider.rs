use std::fmt::Display;

use num_enum::TryFromPrimitive;
use paste::paste;
use strum::{EnumCount, EnumIter};

use crate::board::Square;

macro_rules! mk_diag_step {
    ($dir1:ident, $dir2:ident) => {
        paste! {
            const fn [<step_ $dir1 _ $dir2>](sq: Square) -> Option<Square> {
                match sq.$dir1() {
                    Some(s) => s.$dir2(),
                    None => None,
                }
            }
        }
    };
}

mk_diag_step!(north, east);
mk_diag_step!(north, west);
mk_diag_step!(south, east);
mk_diag_step!(south, west);

/// One of the eight ray directions a slider can travel.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Direction {
    North,
    East,
    South,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// One step from `sq`, or `None` at the board edge.
    pub const fn step(self, sq: Square) -> Option<Square> {
        match self {
            Self::North => sq.north(),
            Self::East => sq.east(),
            Self::South => sq.south(),
            Self::West => sq.west(),
            Self::NorthEast => step_north_east(sq),
            Self::NorthWest => step_north_west(sq),
            Self::SouthEast => step_south_east(sq),
            Self::SouthWest => step_south_west(sq),
        }
    }
}

/// The two sliding movement patterns. Iteration order (rook first) fixes
/// the order results are emitted in.
#[derive(Clone, Copy, PartialEq, EnumCount, EnumIter, TryFromPrimitive, Debug)]
#[repr(u8)]
pub enum SliderKind {
    Rook,
    Bishop,
}

impl SliderKind {
    pub const fn directions(self) -> [Direction; 4] {
        match self {
            Self::Rook => [
                Direction::North,
                Direction::East,
                Direction::South,
                Direction::West,
            ],
            Self::Bishop => [
                Direction::NorthEast,
                Direction::NorthWest,
                Direction::SouthEast,
                Direction::SouthWest,
            ],
        }
    }
}

impl Display for SliderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rook => write!(f, "rook"),
            Self::Bishop => write!(f, "bishop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::square::sq;

    use super::Direction;

    #[test]
    fn diagonal_steps() {
        assert_eq!(Direction::NorthEast.step(sq!(d 4)), Some(sq!(e 5)));
        assert_eq!(Direction::NorthWest.step(sq!(d 4)), Some(sq!(c 5)));
        assert_eq!(Direction::SouthEast.step(sq!(d 4)), Some(sq!(e 3)));
        assert_eq!(Direction::SouthWest.step(sq!(d 4)), Some(sq!(c 3)));
    }

    #[test]
    fn diagonal_boundaries() {
        assert_eq!(Direction::NorthEast.step(sq!(h 4)), None);
        assert_eq!(Direction::NorthEast.step(sq!(d 8)), None);
        assert_eq!(Direction::SouthWest.step(sq!(a 4)), None);
        assert_eq!(Direction::SouthWest.step(sq!(d 1)), None);
    }
}
