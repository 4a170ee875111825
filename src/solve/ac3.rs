use std::collections::VecDeque;

use log::trace;
use rustc_hash::FxHashSet;

use crate::slot::Slot;

use super::Solver;

impl Solver {
    /// Remove from `x`'s domain every word with no partner left in `y`'s
    /// domain at their crossing. Returns whether `x`'s domain shrank; `y`'s
    /// domain is never touched. Slots that do not cross are left alone.
    pub fn revise(&mut self, x: &Slot, y: &Slot) -> bool {
        let (offset_x, offset_y) = match self.overlaps.get(x, y) {
            Some(offsets) => offsets,
            None => return false,
        };

        // the letters y can still put in the shared cell, as of right now
        let supported: FxHashSet<u8> = self
            .domains
            .candidates(y)
            .iter()
            .map(|word| word.as_bytes()[offset_y])
            .collect();

        let before = self.domains.len(x);
        self.domains.retain(x, |word| {
            debug_assert_eq!(word.len(), x.length);
            supported.contains(&word.as_bytes()[offset_x])
        });

        before != self.domains.len(x)
    }

    /// Propagate crossing constraints until every domain is arc-consistent
    /// with its neighbors, or some domain empties. `arcs` seeds the work
    /// queue; `None` means every crossing pair, an explicit set re-checks
    /// incrementally after an assignment. Returns false on a wipeout.
    pub fn ac3(&mut self, arcs: Option<VecDeque<(Slot, Slot)>>) -> bool {
        if self.slots.iter().any(|slot| self.domains.is_empty(slot)) {
            return false;
        }

        let mut queue = arcs.unwrap_or_else(|| self.all_arcs());

        while let Some((x, y)) = queue.pop_front() {
            if !self.revise(&x, &y) {
                continue;
            }
            trace!("revised {}: {} candidates left", x, self.domains.len(&x));

            if self.domains.is_empty(&x) {
                trace!("domain of {} wiped out", x);
                return false;
            }
            for &z in self.overlaps.neighbors(&x) {
                if z != y {
                    queue.push_back((z, x));
                }
            }
        }

        true
    }

    fn all_arcs(&self) -> VecDeque<(Slot, Slot)> {
        let mut queue = VecDeque::new();
        for &x in &self.slots {
            for &y in self.overlaps.neighbors(&x) {
                queue.push_back((x, y));
            }
        }
        queue
    }
}
