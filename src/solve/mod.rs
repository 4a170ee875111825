use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::domain::Domains;
use crate::grid::Grid;
use crate::overlap::OverlapIndex;
use crate::parse::parse_slots;
use crate::slot::Slot;

mod ac3;
mod backtrack;

/// A word for every slot (or for the slots filled so far, during search).
pub type Assignment = FxHashMap<Slot, String>;

pub fn check_length(slot: &Slot, word: &str) -> bool {
    word.len() == slot.length
}

/// Crosswords never repeat a word, even across unrelated slots.
pub fn check_uniqueness(assignment: &Assignment) -> bool {
    let mut seen = FxHashSet::default();
    assignment.values().all(|word| seen.insert(word.as_str()))
}

/// One grid-filling search. Owns the domains exclusively; solving mutates
/// them, so a solver is good for a single `solve` call.
pub struct Solver {
    slots: Vec<Slot>,
    overlaps: OverlapIndex,
    domains: Domains,
    nodes: u64,
}

impl Solver {
    /// Inputs are assumed well-formed: the word list is non-empty and the
    /// grid parses. Both are validated upstream, at the CLI boundary.
    pub fn new(grid: &Grid, words: &[String]) -> Solver {
        let slots = parse_slots(grid);
        let overlaps = OverlapIndex::build(&slots);
        let domains = Domains::seed(&slots, words);

        Solver {
            slots,
            overlaps,
            domains,
            nodes: 0,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    /// Drop every candidate whose length disagrees with its slot. Running
    /// this twice changes nothing.
    pub fn enforce_node_consistency(&mut self) {
        for &slot in &self.slots {
            self.domains.retain(&slot, |word| check_length(&slot, word));
        }
    }

    /// Fill every slot, or report that no fill exists.
    pub fn solve(&mut self) -> Option<Assignment> {
        debug!("solving {} slots", self.slots.len());

        self.enforce_node_consistency();
        if !self.ac3(None) {
            debug!("arc consistency wiped out a domain before search began");
            return None;
        }
        self.backtrack(Assignment::default())
    }

    pub fn assignment_complete(&self, assignment: &Assignment) -> bool {
        self.slots.iter().all(|slot| assignment.contains_key(slot))
    }

    /// Every pair of assigned crossing slots agrees on the shared cell.
    pub fn check_overlaps(&self, assignment: &Assignment) -> bool {
        for (slot, word) in assignment {
            for neighbor in self.overlaps.neighbors(slot) {
                if let Some(other) = assignment.get(neighbor) {
                    let (offset, neighbor_offset) = self.overlaps.offsets(slot, neighbor);
                    if word.as_bytes()[offset] != other.as_bytes()[neighbor_offset] {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Whether the assigned words agree with each other. Only assigned
    /// slots are consulted; an unassigned neighbor imposes no constraint
    /// yet.
    pub fn consistent(&self, assignment: &Assignment) -> bool {
        check_uniqueness(assignment)
            && assignment
                .iter()
                .all(|(slot, word)| check_length(slot, word))
            && self.check_overlaps(assignment)
    }

    /// Write every assigned word into a copy of `grid` for display.
    pub fn render(&self, grid: &Grid, assignment: &Assignment) -> Grid {
        let mut result = grid.clone();
        for (slot, word) in assignment {
            result = result.write_word(slot, word);
        }
        result
    }
}
