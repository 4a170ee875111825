use std::fmt;

use crate::error::Error;
use crate::slot::Slot;

pub(crate) const BLOCKED: char = '*';

/// A crossword grid in row-major order. `' '` is a playable, unfilled cell,
/// `'*'` is blocked, anything else is a filled letter.
#[derive(PartialEq, Eq, Debug, Hash, Clone)]
pub struct Grid {
    pub(crate) contents: String,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl Grid {
    pub fn square(contents: String) -> Result<Grid, Error> {
        let without_newlines: String = contents.chars().filter(|c| *c != '\n').collect();

        let width = (without_newlines.len() as f64).sqrt() as usize;
        if width * width != without_newlines.len() {
            return Err(Error::NotSquare {
                cells: without_newlines.len(),
            });
        }
        Ok(Grid {
            contents: without_newlines,
            width,
            height: width,
        })
    }

    pub fn rectangle(contents: String, width: usize, height: usize) -> Result<Grid, Error> {
        let without_newlines: String = contents.chars().filter(|c| *c != '\n').collect();

        if width * height != without_newlines.len() {
            return Err(Error::DimensionMismatch {
                width,
                height,
                cells: without_newlines.len(),
            });
        }
        Ok(Grid {
            contents: without_newlines,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn char_at(&self, row: usize, col: usize) -> char {
        self.contents.as_bytes()[row * self.width + col] as char
    }

    /// Whether the cell is playable, filled or not.
    pub(crate) fn is_open(&self, row: usize, col: usize) -> bool {
        self.char_at(row, col) != BLOCKED
    }

    /// A copy of this grid with `word` written along `slot`. Contents are
    /// single-byte cells, so the word must be ASCII.
    pub fn write_word(&self, slot: &Slot, word: &str) -> Grid {
        debug_assert!(word.is_ascii());

        let mut bytes = self.contents.clone().into_bytes();

        for (index, c) in word.chars().enumerate() {
            let (row, col) = slot.cell(index);
            bytes[row * self.width + col] = c as u8;
        }

        Grid {
            contents: String::from_utf8(bytes).expect("grid contents must stay ASCII"),
            ..*self
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                write!(f, "{}", self.char_at(row, col))?;
                if col != self.width - 1 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;

            if row != self.height - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::slot::{Direction, Slot};

    use super::Grid;

    #[test]
    fn square_works() {
        let result = Grid::square(String::from(
            "
abc
def
ghi
",
        ));

        assert!(result.is_ok());

        let grid = result.unwrap();
        assert_eq!(String::from("abcdefghi"), grid.contents);
        assert_eq!(3, grid.width);
        assert_eq!(3, grid.height);
    }

    #[test]
    fn square_rejects_ragged_contents() {
        assert!(Grid::square(String::from("abcde")).is_err());
    }

    #[test]
    fn rectangle_works() {
        let grid = Grid::rectangle(String::from("abcdef"), 3, 2).unwrap();
        assert_eq!(3, grid.width);
        assert_eq!(2, grid.height);
        assert_eq!('f', grid.char_at(1, 2));

        assert!(Grid::rectangle(String::from("abcdef"), 4, 2).is_err());
    }

    #[test]
    fn display_works() {
        let grid = Grid::square(String::from("abcdefghi")).unwrap();
        assert_eq!("a b c\n\nd e f\n\ng h i\n", grid.to_string());
    }

    #[test]
    fn write_word_works() {
        let grid = Grid::square(String::from(
            "
abc
def
ghi
",
        ))
        .unwrap();

        assert_eq!(
            grid.write_word(&Slot::new(0, 0, Direction::Across, 3), "cat"),
            Grid::square(String::from(
                "
cat
def
ghi
",
            ))
            .unwrap()
        );

        assert_eq!(
            grid.write_word(&Slot::new(0, 0, Direction::Down, 3), "cat"),
            Grid::square(String::from(
                "
cbc
aef
thi
",
            ))
            .unwrap()
        );
    }
}
