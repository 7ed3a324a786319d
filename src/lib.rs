//! Magic multiplier search for rook and bishop attack tables.

pub mod board;
pub mod emit;
pub mod magic;
pub mod slider;
