use core::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::domain::Domains;
use crate::overlap::OverlapIndex;
use crate::slot::Slot;

/// Ranking key for picking the next slot to fill. The best slot is the
/// maximum under this ordering.
#[derive(Eq, PartialEq, Debug)]
pub(crate) struct SlotScore {
    candidates: usize,
    degree: usize,
}

impl SlotScore {
    pub(crate) fn new(slot: &Slot, domains: &Domains, overlaps: &OverlapIndex) -> SlotScore {
        SlotScore {
            candidates: domains.len(slot),
            degree: overlaps.degree(slot),
        }
    }
}

impl PartialOrd for SlotScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlotScore {
    fn cmp(&self, other: &Self) -> Ordering {
        // fewer remaining candidates wins
        if self.candidates != other.candidates {
            return other.candidates.cmp(&self.candidates);
        }
        // more crossings wins
        self.degree.cmp(&other.degree)
    }
}

/// How many candidates assigning `word` to `slot` would strike from the
/// domains of its still-unassigned neighbors. Lower is less constraining.
pub(crate) fn elimination_count(
    slot: &Slot,
    word: &str,
    domains: &Domains,
    overlaps: &OverlapIndex,
    assignment: &FxHashMap<Slot, String>,
) -> usize {
    let mut eliminated = 0;

    for neighbor in overlaps.neighbors(slot) {
        if assignment.contains_key(neighbor) {
            continue;
        }
        let (offset, neighbor_offset) = overlaps.offsets(slot, neighbor);
        let letter = word.as_bytes()[offset];

        eliminated += domains
            .candidates(neighbor)
            .iter()
            .filter(|candidate| candidate.as_bytes()[neighbor_offset] != letter)
            .count();
    }

    eliminated
}
