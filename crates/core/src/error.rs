use thiserror::Error;

/// Startup invariant violations. All of them are fatal.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board needs to have an even number of boxes for pairs of matches ({cells} boxes)")]
    OddCellCount { cells: usize },
    #[error("Board is too big for the number of shapes/colors defined (needs {needed} icons, only {available} available)")]
    NotEnoughIcons { needed: usize, available: usize },
    #[error("Board must have at least one column and one row")]
    EmptyBoard,
    #[error("Frame rate must be positive")]
    ZeroFps,
    #[error("Reveal speed must be positive")]
    ZeroRevealSpeed,
    #[error("Box size must be positive")]
    ZeroBoxSize,
    #[error("Preview group size must be positive")]
    ZeroGroupSize,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Expected {expected} icons for the board, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("Every icon must appear in exactly two cells")]
    Unpaired,
}

pub type Result<T> = core::result::Result<T, BoardError>;
