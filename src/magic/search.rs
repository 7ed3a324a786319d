use anyhow::{Context, Result};
use rand::RngCore;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::board::{BitBoard, Square};
use crate::magic::attacks::sliding_attacks;
use crate::magic::mask::relevant_mask;
use crate::magic::occupancy::{occupancy_at, subset_count};
use crate::magic::{magic_index, FoundMagic};
use crate::slider::SliderKind;

/// Draws magic candidates from an explicitly supplied RNG. A candidate
/// is the AND of three independent draws, biasing it toward sparse bit
/// patterns.
pub struct CandidateGen<R> {
    rng: R,
}

impl<R: RngCore> CandidateGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn next_candidate(&mut self) -> u64 {
        self.rng.next_u64() & self.rng.next_u64() & self.rng.next_u64()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no valid magic after {attempts} candidates")]
pub struct SearchExhausted {
    pub attempts: u64,
}

struct Slot {
    stamp: u64,
    attack: BitBoard,
}

/// Search for a multiplier that hashes every occupancy subset of the
/// relevant mask to an index holding at most one distinct attack set.
///
/// With `limit = None` the loop retries forever; success is probabilistic
/// but empirically near-certain within a small number of attempts. A
/// ceiling turns exhaustion into a `SearchExhausted` error instead.
pub fn find_magic<R: RngCore>(
    gen: &mut CandidateGen<R>,
    kind: SliderKind,
    sq: Square,
    limit: Option<u64>,
) -> Result<u64, SearchExhausted> {
    let mask = relevant_mask(kind, sq);
    let bits = mask.popcount();
    let count = subset_count(mask);

    let mut occupancies = Vec::with_capacity(count);
    let mut attacks = Vec::with_capacity(count);
    for i in 0..count {
        let occ = occupancy_at(mask, i);
        occupancies.push(occ);
        attacks.push(sliding_attacks(kind, sq, occ));
    }

    // One slot per hash value, stamped with the attempt that last wrote
    // it. A stale stamp reads as vacant, so nothing is cleared between
    // candidates.
    let mut slots: Vec<Slot> = (0..count)
        .map(|_| Slot {
            stamp: 0,
            attack: BitBoard::empty(),
        })
        .collect();

    let mut attempt: u64 = 0;
    loop {
        if let Some(max) = limit {
            if attempt == max {
                return Err(SearchExhausted { attempts: attempt });
            }
        }
        attempt += 1;

        let magic = gen.next_candidate();

        if accepts(magic, bits, &occupancies, &attacks, &mut slots, attempt) {
            return Ok(magic);
        }
    }
}

fn accepts(
    magic: u64,
    bits: u32,
    occupancies: &[BitBoard],
    attacks: &[BitBoard],
    slots: &mut [Slot],
    stamp: u64,
) -> bool {
    for (occ, attack) in occupancies.iter().zip(attacks.iter()) {
        let idx = magic_index(*occ, magic, bits);

        if slots[idx].stamp != stamp {
            slots[idx] = Slot {
                stamp,
                attack: *attack,
            };
        } else if slots[idx].attack != *attack {
            // two subsets with different attack sets share a slot
            return false;
        }
    }

    true
}

/// Run all 128 searches in emit order: rook squares ascending, then
/// bishop squares ascending.
pub fn find_all_magics<R: RngCore>(
    gen: &mut CandidateGen<R>,
    limit: Option<u64>,
) -> Result<Vec<FoundMagic>> {
    let mut found = Vec::with_capacity(128);

    for kind in SliderKind::iter() {
        for square in Square::iter_all() {
            let magic = find_magic(gen, kind, square, limit)
                .with_context(|| format!("searching the {kind} magic for {square:?}"))?;

            found.push(FoundMagic {
                kind,
                square,
                magic,
            });
        }
    }

    Ok(found)
}
