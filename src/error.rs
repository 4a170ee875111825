use thiserror::Error;

/// Input-validation failures surfaced before the solver runs. An
/// unsatisfiable puzzle is not an error; `Solver::solve` reports that as
/// `None`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{cells} cells do not form a square grid")]
    NotSquare { cells: usize },

    #[error("{cells} cells do not form a {width}x{height} grid")]
    DimensionMismatch {
        width: usize,
        height: usize,
        cells: usize,
    },

    #[error("word list contains no usable words")]
    EmptyWordList,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
