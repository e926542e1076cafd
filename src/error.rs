use thiserror::Error;

/// Rejected puzzle input. Raised while reading tokens or building a `Board`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("no board size given")]
    MissingSize,
    #[error("expected a non-negative integer, got {token:?}")]
    InvalidToken { token: String },
    #[error("unsupported board size {size}")]
    InvalidSize { size: usize },
    #[error("expected {expected} tiles, found {found}")]
    WrongTileCount { expected: usize, found: usize },
    #[error("tile {value} is out of range (max {max})")]
    OutOfRange { value: u32, max: u32 },
    #[error("tile {value} appears more than once")]
    DuplicateTile { value: u32 },
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("board is {found}x{found} but the solver targets {expected}x{expected}")]
    SizeMismatch { expected: usize, found: usize },
}
