use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::error::Error;

/// Parse a candidate word list: one word per line, upper-cased. Blank and
/// non-alphabetic lines are skipped, duplicates keep their first position.
pub fn parse_words(contents: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut words = vec![];

    for line in contents.lines() {
        let word = line.trim();
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            continue;
        }
        let word = word.to_ascii_uppercase();
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    words
}

pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Error> {
    let words = parse_words(&fs::read_to_string(path)?);
    if words.is_empty() {
        return Err(Error::EmptyWordList);
    }
    Ok(words)
}
