//! Crossword grid filling as constraint satisfaction: slots are variables,
//! candidate words are domain values, crossings are binary constraints.
//! Node consistency and AC-3 prune the domains, then heuristic backtracking
//! search fills the grid.

pub mod domain;
pub mod error;
pub mod grid;
mod order;
pub mod overlap;
pub mod parse;
pub mod slot;
pub mod solve;
pub mod words;

pub use error::Error;
pub use grid::Grid;
pub use slot::{Direction, Slot};
pub use solve::{Assignment, Solver};

/// The bundled sample word list; tests and benches start here.
pub fn default_words() -> Vec<String> {
    words::parse_words(include_str!("../data/words0.txt"))
}

#[cfg(test)]
mod tests {
    use crate::default_words;

    #[test]
    fn default_words_works() {
        let words = default_words();
        assert_eq!(10, words.len());
        assert!(words.contains(&String::from("SEVEN")));
    }
}
