//! Errors raised while constructing a game. Play itself never fails.

use thiserror::Error;

/// Constants that can never yield a playable board.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigurationError {
    /// The grid radius must be at least one cell.
    #[error("grid radius must be positive (received {radius})")]
    NonPositiveRadius {
        /// Rejected radius.
        radius: i32,
    },
    /// Cells need a finite, positive size.
    #[error("cell size must be finite and positive (received {cell_size})")]
    InvalidCellSize {
        /// Rejected size.
        cell_size: f32,
    },
    /// A path needs at least an entry and an exit.
    #[error("path length must be at least 2 (received {path_length})")]
    PathTooShort {
        /// Rejected length.
        path_length: usize,
    },
    /// Hazards must leave at least one interior cell free.
    #[error("hazard count {hazard_count} must be below the {interior} interior path cells")]
    TooManyHazards {
        /// Requested hazard count.
        hazard_count: usize,
        /// Cells between entry and exit.
        interior: usize,
    },
    /// The path cannot be longer than the grid holds cells.
    #[error("path length {path_length} exceeds the {cell_count} cells of the grid")]
    PathExceedsGrid {
        /// Requested length.
        path_length: usize,
        /// Cells generated for the configured radius.
        cell_count: usize,
    },
    /// Damage range must be non-empty.
    #[error("damage range {min}..={max} is empty")]
    InvertedDamageRange {
        /// Lower bound.
        min: u32,
        /// Upper bound.
        max: u32,
    },
    /// The random walk needs at least one candidate per step.
    #[error("random walk needs at least one candidate per step")]
    NoWalkCandidates,
    /// Path construction needs at least one attempt.
    #[error("path construction needs at least one attempt")]
    NoPathAttempts,
    /// Visibility radius must be finite and not negative.
    #[error("visibility radius must be finite and non-negative (received {radius})")]
    InvalidVisibilityRadius {
        /// Rejected radius.
        radius: f32,
    },
    /// Adjacency tolerance below one would disconnect neighbouring cells.
    #[error("adjacency tolerance must be finite and at least 1.0 (received {tolerance})")]
    InvalidAdjacencyTolerance {
        /// Rejected tolerance.
        tolerance: f32,
    },
}

/// Failure of the board setup pipeline. No partial board survives one.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SetupError {
    /// The configuration is unusable.
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    /// Every attempt to lay a path of the requested length got stuck.
    #[error(
        "failed to build a path of {target_length} cells after {attempts} attempts \
         (longest reached {best_length})"
    )]
    PathGenerationFailed {
        /// Requested path length.
        target_length: usize,
        /// Longest path any attempt produced.
        best_length: usize,
        /// Attempts made across all thresholds.
        attempts: u32,
    },
}
