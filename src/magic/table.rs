use anyhow::{bail, Result};

use crate::board::{BitBoard, Square};
use crate::magic::attacks::sliding_attacks;
use crate::magic::magic_index;
use crate::magic::mask::relevant_mask;
use crate::magic::occupancy::{occupancy_at, subset_count};
use crate::slider::SliderKind;

/// Per-square attack tables for one slider kind, indexed through the
/// magic hash. This is the consumer side of the emitted constants: any
/// engine using them must rebuild exactly these masks and exactly this
/// indexing.
pub struct AttackTables {
    kind: SliderKind,
    magics: [u64; 64],
    tables: [Vec<BitBoard>; 64],
}

impl AttackTables {
    /// Build the tables, validating every magic on the way: two subsets
    /// may share a slot only when they share an attack set.
    pub fn build(kind: SliderKind, magics: &[u64; 64]) -> Result<Self> {
        let mut tables = [const { Vec::new() }; 64];

        for sq in Square::iter_all() {
            let magic = magics[sq.to_idx() as usize];
            let mask = relevant_mask(kind, sq);
            let bits = mask.popcount();

            let mut table = vec![BitBoard::empty(); subset_count(mask)];
            let mut filled = vec![false; subset_count(mask)];

            for i in 0..subset_count(mask) {
                let occ = occupancy_at(mask, i);
                let attack = sliding_attacks(kind, sq, occ);
                let idx = magic_index(occ, magic, bits);

                if filled[idx] && table[idx] != attack {
                    bail!(
                        "{kind} magic {magic:#x} for {sq:?} collides two distinct attack sets"
                    );
                }

                table[idx] = attack;
                filled[idx] = true;
            }

            tables[sq.to_idx() as usize] = table;
        }

        Ok(Self {
            kind,
            magics: *magics,
            tables,
        })
    }

    #[inline(always)]
    pub fn lookup(&self, sq: Square, blockers: BitBoard) -> BitBoard {
        let mask = relevant_mask(self.kind, sq);
        let relevant = blockers.and(mask);
        let idx = magic_index(relevant, self.magics[sq.to_idx() as usize], mask.popcount());

        self.tables[sq.to_idx() as usize][idx]
    }
}
