use arrayvec::ArrayVec;

use crate::board::{BitBoard, Square};

/// The set bit positions of a mask, ascending. A relevant occupancy mask
/// never holds more than 12 bits.
pub fn mask_squares(mask: BitBoard) -> ArrayVec<Square, 12> {
    mask.iter_squares().collect()
}

pub fn subset_count(mask: BitBoard) -> usize {
    1 << mask.popcount()
}

/// The `index`-th subset of `mask`: bit k of `index` decides whether the
/// mask's k-th set square (ascending) is occupied. Bijective over
/// [0, 2^popcount(mask)).
pub fn occupancy_at(mask: BitBoard, index: usize) -> BitBoard {
    let mut occ = BitBoard::empty();

    for (k, sq) in mask_squares(mask).iter().enumerate() {
        if index & 1 << k != 0 {
            occ = occ.set(*sq);
        }
    }

    occ
}

/// Inverse of [`occupancy_at`] for subsets of `mask`.
pub fn index_of(mask: BitBoard, occ: BitBoard) -> usize {
    let mut index = 0;

    for (k, sq) in mask_squares(mask).iter().enumerate() {
        if occ.contains(*sq) {
            index |= 1 << k;
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use itertools::Itertools;

    use crate::board::square::sq;
    use crate::magic::mask::relevant_mask;
    use crate::slider::SliderKind;

    use super::{index_of, mask_squares, occupancy_at, subset_count};

    #[test]
    fn round_trips_every_index() {
        let mask = relevant_mask(SliderKind::Rook, sq!(a 1));

        for i in 0..subset_count(mask) {
            let occ = occupancy_at(mask, i);
            assert_eq!(index_of(mask, occ), i);
        }
    }

    #[test]
    fn enumerates_the_full_powerset() {
        // small enough to cross-check against an independent enumeration
        let mask = relevant_mask(SliderKind::Bishop, sq!(a 1));

        let enumerated: BTreeSet<u64> = (0..subset_count(mask))
            .map(|i| u64::from(occupancy_at(mask, i)))
            .collect();

        let powerset: BTreeSet<u64> = mask_squares(mask)
            .iter()
            .powerset()
            .map(|subset| {
                subset
                    .iter()
                    .fold(0u64, |accum, sq| accum | 1 << sq.to_idx())
            })
            .collect();

        assert_eq!(enumerated.len(), subset_count(mask));
        assert_eq!(enumerated, powerset);
    }

    #[test]
    fn index_zero_is_empty() {
        for kind in [SliderKind::Rook, SliderKind::Bishop] {
            let mask = relevant_mask(kind, sq!(e 4));
            assert!(occupancy_at(mask, 0).is_empty());
        }
    }

    #[test]
    fn last_index_is_the_mask() {
        let mask = relevant_mask(SliderKind::Rook, sq!(e 4));
        assert_eq!(occupancy_at(mask, subset_count(mask) - 1), mask);
    }
}
