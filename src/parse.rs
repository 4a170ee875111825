use crate::grid::Grid;
use crate::slot::{Direction, Slot};

/// Scan the grid for slots: maximal runs of playable cells, rows first and
/// then columns. A run must span at least two cells; a lone playable cell
/// belongs only to whatever crosses it.
pub fn parse_slots(grid: &Grid) -> Vec<Slot> {
    let mut result = vec![];

    for row in 0..grid.height() {
        let mut run_start = None;
        for col in 0..=grid.width() {
            let open = col < grid.width() && grid.is_open(row, col);
            match (open, run_start) {
                (true, None) => run_start = Some(col),
                (false, Some(start)) => {
                    if col - start >= 2 {
                        result.push(Slot::new(row, start, Direction::Across, col - start));
                    }
                    run_start = None;
                }
                _ => {}
            }
        }
    }

    for col in 0..grid.width() {
        let mut run_start = None;
        for row in 0..=grid.height() {
            let open = row < grid.height() && grid.is_open(row, col);
            match (open, run_start) {
                (true, None) => run_start = Some(row),
                (false, Some(start)) => {
                    if row - start >= 2 {
                        result.push(Slot::new(start, col, Direction::Down, row - start));
                    }
                    run_start = None;
                }
                _ => {}
            }
        }
    }

    result
}
