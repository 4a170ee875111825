use rustc_hash::FxHashMap;

use crate::slot::Slot;

/// Precomputed crossing relation between slots: for every ordered pair that
/// shares a cell, the character offsets of that cell within each slot.
/// Read-only once built.
pub struct OverlapIndex {
    overlaps: FxHashMap<(Slot, Slot), (usize, usize)>,
    neighbors: FxHashMap<Slot, Vec<Slot>>,
}

impl OverlapIndex {
    pub fn build(slots: &[Slot]) -> OverlapIndex {
        let mut by_cell: FxHashMap<(usize, usize), Vec<(Slot, usize)>> = FxHashMap::default();

        for &slot in slots {
            for (offset, cell) in slot.cells().enumerate() {
                by_cell.entry(cell).or_default().push((slot, offset));
            }
        }

        let mut overlaps = FxHashMap::default();
        let mut neighbors: FxHashMap<Slot, Vec<Slot>> =
            slots.iter().map(|&slot| (slot, vec![])).collect();

        for entries in by_cell.values() {
            for &(a, offset_a) in entries {
                for &(b, offset_b) in entries {
                    if a == b {
                        continue;
                    }
                    overlaps.insert((a, b), (offset_a, offset_b));
                    neighbors.get_mut(&a).unwrap().push(b);
                }
            }
        }

        for list in neighbors.values_mut() {
            list.sort();
        }

        OverlapIndex {
            overlaps,
            neighbors,
        }
    }

    /// The crossing offsets of `a` and `b`, if the slots share a cell.
    pub fn get(&self, a: &Slot, b: &Slot) -> Option<(usize, usize)> {
        self.overlaps.get(&(*a, *b)).copied()
    }

    /// Like `get`, for pairs already known to cross.
    pub(crate) fn offsets(&self, a: &Slot, b: &Slot) -> (usize, usize) {
        self.overlaps[&(*a, *b)]
    }

    pub fn neighbors(&self, slot: &Slot) -> &[Slot] {
        self.neighbors
            .get(slot)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn degree(&self, slot: &Slot) -> usize {
        self.neighbors(slot).len()
    }
}
