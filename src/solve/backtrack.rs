use std::collections::VecDeque;

use log::debug;

use crate::order::{elimination_count, SlotScore};
use crate::slot::Slot;

use super::{Assignment, Solver};

impl Solver {
    /// Depth-first search over partial assignments. Returns the first
    /// complete consistent assignment reachable from `assignment`, or None
    /// once the branch is exhausted.
    ///
    /// Each tentative assignment is propagated through the arcs into the
    /// chosen slot before recursing, on a scratch copy of the domains;
    /// backtracking restores the previous domains by dropping the copy.
    pub fn backtrack(&mut self, assignment: Assignment) -> Option<Assignment> {
        if self.assignment_complete(&assignment) {
            return Some(assignment);
        }

        self.nodes += 1;
        if self.nodes % 10_000 == 0 {
            debug!("searched {} partial assignments", self.nodes);
        }

        let slot = self.select_unassigned_slot(&assignment)?;

        for word in self.order_domain_values(&slot, &assignment) {
            let mut extended = assignment.clone();
            extended.insert(slot, word.clone());

            if !self.consistent(&extended) {
                continue;
            }

            let saved = self.domains.clone();
            self.domains.restrict(&slot, &word);

            if self.ac3(Some(self.arcs_into(&slot))) {
                if let Some(solution) = self.backtrack(extended) {
                    return Some(solution);
                }
            }

            self.domains = saved;
        }

        None
    }

    /// Most constrained slot first (fewest remaining candidates), most
    /// connected as the tie-break.
    fn select_unassigned_slot(&self, assignment: &Assignment) -> Option<Slot> {
        self.slots
            .iter()
            .filter(|slot| !assignment.contains_key(slot))
            .copied()
            .max_by_key(|slot| SlotScore::new(slot, &self.domains, &self.overlaps))
    }

    /// Least constraining value first.
    fn order_domain_values(&self, slot: &Slot, assignment: &Assignment) -> Vec<String> {
        let mut values: Vec<String> = self.domains.candidates(slot).iter().cloned().collect();
        values.sort_by_cached_key(|word| {
            elimination_count(slot, word, &self.domains, &self.overlaps, assignment)
        });
        values
    }

    fn arcs_into(&self, slot: &Slot) -> VecDeque<(Slot, Slot)> {
        self.overlaps
            .neighbors(slot)
            .iter()
            .map(|&neighbor| (neighbor, *slot))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::solve::tests::{number_words, structure0, structure0_slots};
    use crate::solve::{Assignment, Solver};

    #[test]
    fn select_unassigned_slot_returns_the_last_open_slot() {
        let grid = structure0();
        let solver = Solver::new(&grid, &number_words());
        let (across3, across4, down5, down4) = structure0_slots();

        let mut assignment = Assignment::default();
        assignment.insert(across3, String::from("SIX"));
        assignment.insert(across4, String::from("NINE"));
        assignment.insert(down5, String::from("SEVEN"));

        assert_eq!(Some(down4), solver.select_unassigned_slot(&assignment));

        assignment.insert(down4, String::from("FIVE"));
        assert_eq!(None, solver.select_unassigned_slot(&assignment));
    }

    #[test]
    fn select_unassigned_slot_prefers_small_domains() {
        let grid = structure0();
        let mut solver = Solver::new(&grid, &number_words());
        solver.enforce_node_consistency();
        assert!(solver.ac3(None));

        // down-4 still has two candidates; every other slot has one
        let (across3, across4, down5, _) = structure0_slots();
        let mut assignment = Assignment::default();
        assignment.insert(across4, String::from("NINE"));
        assignment.insert(down5, String::from("SEVEN"));

        assert_eq!(Some(across3), solver.select_unassigned_slot(&assignment));
    }

    #[test]
    fn backtrack_returns_a_complete_assignment_unchanged() {
        let grid = structure0();
        let mut solver = Solver::new(&grid, &number_words());
        solver.enforce_node_consistency();

        let (across3, across4, down5, down4) = structure0_slots();
        let mut assignment = Assignment::default();
        for (slot, word) in [
            (across3, "SIX"),
            (across4, "NINE"),
            (down5, "SEVEN"),
            (down4, "FIVE"),
        ] {
            assignment.insert(slot, String::from(word));
        }

        assert_eq!(Some(assignment.clone()), solver.backtrack(assignment));
    }

    #[test]
    fn backtrack_finds_a_solution_after_propagation() {
        let grid = structure0();
        let mut solver = Solver::new(&grid, &number_words());
        solver.enforce_node_consistency();
        assert!(solver.ac3(None));

        let solution = solver.backtrack(Assignment::default()).unwrap();
        assert!(solver.assignment_complete(&solution));
        assert!(solver.consistent(&solution));
    }

    #[test]
    fn backtrack_exhausts_without_looping() {
        let grid = structure0();
        // SEVEN fits down-5 but nothing four letters long starts with N
        let words: Vec<String> = ["ONE", "TWO", "SIX", "TEN", "SEVEN", "FOUR", "FIVE"]
            .iter()
            .map(|w| w.to_string())
            .collect();

        let mut solver = Solver::new(&grid, &words);
        solver.enforce_node_consistency();

        assert_eq!(None, solver.backtrack(Assignment::default()));
    }

    #[test]
    fn backtrack_restores_domains_when_a_branch_dies() {
        let grid = structure0();
        let words: Vec<String> = ["ONE", "TWO", "SIX", "TEN", "SEVEN", "FOUR", "FIVE"]
            .iter()
            .map(|w| w.to_string())
            .collect();

        let mut solver = Solver::new(&grid, &words);
        solver.enforce_node_consistency();
        let sizes: Vec<usize> = solver
            .slots()
            .iter()
            .map(|slot| solver.domains().len(slot))
            .collect();

        assert_eq!(None, solver.backtrack(Assignment::default()));

        let after: Vec<usize> = solver
            .slots()
            .iter()
            .map(|slot| solver.domains().len(slot))
            .collect();
        assert_eq!(sizes, after);
    }
}
