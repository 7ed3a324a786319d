use crate::board::{BitBoard, Square};
use crate::slider::SliderKind;

pub const ROOK_MASKS: [BitBoard; 64] = mk_mask_table(SliderKind::Rook);
pub const BISHOP_MASKS: [BitBoard; 64] = mk_mask_table(SliderKind::Bishop);

/// The squares whose occupancy can change a slider's attack set from
/// `sq`: every square on the four rays except each ray's terminal edge
/// square, which can never be jumped over.
pub const fn relevant_mask(kind: SliderKind, sq: Square) -> BitBoard {
    match kind {
        SliderKind::Rook => ROOK_MASKS[sq.to_idx() as usize],
        SliderKind::Bishop => BISHOP_MASKS[sq.to_idx() as usize],
    }
}

const fn mk_mask(kind: SliderKind, sq: Square) -> BitBoard {
    let dirs = kind.directions();
    let mut mask = BitBoard::empty();

    let mut d = 0;
    while d < 4 {
        let mut cur = sq;
        loop {
            match dirs[d].step(cur) {
                Some(next) => match dirs[d].step(next) {
                    Some(_) => {
                        mask = mask.set(next);
                        cur = next;
                    }
                    None => break,
                },
                None => break,
            }
        }
        d += 1;
    }

    mask
}

const fn mk_mask_table(kind: SliderKind) -> [BitBoard; 64] {
    let mut table = [BitBoard::empty(); 64];

    let mut idx = 0;
    while idx < 64 {
        match Square::from_idx(idx as u8) {
            Some(sq) => table[idx] = mk_mask(kind, sq),
            None => unreachable!(),
        }
        idx += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use paste::paste;
    use strum::IntoEnumIterator;

    use crate::board::square::{sq, Square};
    use crate::board::BitBoard;
    use crate::slider::SliderKind;

    use super::relevant_mask;

    macro_rules! mk_mask_tests {
        ($kind:ident, $max_bits:expr) => {
            paste! {
                #[test]
                fn [<$kind:lower _mask_excludes_ray_terminals>]() {
                    for sq in Square::iter_all() {
                        let mask = relevant_mask(SliderKind::$kind, sq);

                        for dir in SliderKind::$kind.directions() {
                            // walk to the last square on this ray
                            let mut cur = sq;
                            while let Some(next) = dir.step(cur) {
                                cur = next;
                            }

                            if cur != sq {
                                assert!(
                                    !mask.contains(cur),
                                    "{:?} mask for {:?} contains ray terminal {:?}",
                                    SliderKind::$kind,
                                    sq,
                                    cur
                                );
                            }
                        }
                    }
                }

                #[test]
                fn [<$kind:lower _mask_popcount_bound>]() {
                    for sq in Square::iter_all() {
                        let mask = relevant_mask(SliderKind::$kind, sq);
                        assert!(mask.popcount() <= $max_bits);
                    }
                }
            }
        };
    }

    mk_mask_tests!(Rook, 12);
    mk_mask_tests!(Bishop, 9);

    #[test]
    fn rook_mask_a1() {
        // b1..g1 and a2..a7, excluding the h1 and a8 terminals
        let expected = BitBoard::empty()
            .set(sq!(b 1))
            .set(sq!(c 1))
            .set(sq!(d 1))
            .set(sq!(e 1))
            .set(sq!(f 1))
            .set(sq!(g 1))
            .set(sq!(a 2))
            .set(sq!(a 3))
            .set(sq!(a 4))
            .set(sq!(a 5))
            .set(sq!(a 6))
            .set(sq!(a 7));

        assert_eq!(relevant_mask(SliderKind::Rook, sq!(a 1)), expected);
    }

    #[test]
    fn bishop_mask_d4() {
        let expected = BitBoard::empty()
            .set(sq!(e 5))
            .set(sq!(f 6))
            .set(sq!(g 7))
            .set(sq!(c 5))
            .set(sq!(b 6))
            .set(sq!(e 3))
            .set(sq!(f 2))
            .set(sq!(c 3))
            .set(sq!(b 2));

        assert_eq!(relevant_mask(SliderKind::Bishop, sq!(d 4)), expected);
    }

    #[test]
    fn corner_bit_counts() {
        assert_eq!(relevant_mask(SliderKind::Rook, sq!(a 1)).popcount(), 12);
        assert_eq!(relevant_mask(SliderKind::Rook, sq!(h 8)).popcount(), 12);
        assert_eq!(relevant_mask(SliderKind::Bishop, sq!(a 1)).popcount(), 6);
        assert_eq!(relevant_mask(SliderKind::Bishop, sq!(d 4)).popcount(), 9);
    }

    #[test]
    fn masks_never_contain_origin() {
        for kind in SliderKind::iter() {
            for sq in Square::iter_all() {
                assert!(!relevant_mask(kind, sq).contains(sq));
            }
        }
    }
}
