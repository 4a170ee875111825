use rustc_hash::{FxHashMap, FxHashSet};

use crate::slot::Slot;

/// The candidate words still legal for each slot. Every slot starts with the
/// whole word list; solving only ever removes candidates. One search owns
/// the store exclusively. Speculative inference clones it and drops the
/// clone to undo.
#[derive(Clone, Debug)]
pub struct Domains {
    by_slot: FxHashMap<Slot, FxHashSet<String>>,
}

impl Domains {
    pub fn seed(slots: &[Slot], words: &[String]) -> Domains {
        let by_slot = slots
            .iter()
            .map(|&slot| (slot, words.iter().cloned().collect()))
            .collect();
        Domains { by_slot }
    }

    pub fn candidates(&self, slot: &Slot) -> &FxHashSet<String> {
        &self.by_slot[slot]
    }

    pub fn len(&self, slot: &Slot) -> usize {
        self.by_slot[slot].len()
    }

    pub fn is_empty(&self, slot: &Slot) -> bool {
        self.len(slot) == 0
    }

    /// Keep only the candidates `keep` accepts.
    pub fn retain<F>(&mut self, slot: &Slot, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.by_slot
            .get_mut(slot)
            .unwrap()
            .retain(|word| keep(word));
    }

    /// Collapse the slot to a single candidate, as a tentative assignment
    /// does before propagation.
    pub fn restrict(&mut self, slot: &Slot, word: &str) {
        self.retain(slot, |candidate| candidate == word);
    }
}
