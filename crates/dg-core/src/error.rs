//! Construction errors.

use thiserror::Error;

use crate::dungeon::Coord;

/// Errors raised synchronously while constructing a dungeon.
///
/// Every variant aborts the build; no partially generated dungeon is ever
/// returned to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DungeonError {
    /// Row or column count of zero, or a cell count too large to represent.
    #[error("invalid dungeon dimensions {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// An explicit start or end coordinate lies outside the grid.
    #[error("coordinate {coord} lies outside the {rows}x{cols} grid")]
    InvalidCoordinate {
        coord: Coord,
        rows: usize,
        cols: usize,
    },

    /// Treasure percentage above 100.
    #[error("treasure percentage {0} is not in 0..=100")]
    InvalidPercentage(u32),

    /// The grid holds fewer cells than the required minimum.
    #[error("{total} cells is below the minimum of {min}")]
    InsufficientCells { total: usize, min: usize },

    /// More extra edges requested than the redundant pool can supply. The
    /// pool size is a function of grid shape: a rows x cols grid has exactly
    /// `(rows-1)*(cols-1)` candidate edges beyond its spanning tree.
    #[error("interconnectivity {requested} exceeds the {available} redundant edges available")]
    InfeasibleInterconnectivity { requested: usize, available: usize },

    /// The start/end pair (explicit or sampled) cannot satisfy the minimum
    /// path length between them.
    #[error("start {start} and end {end} are closer than the minimum path length {min}")]
    InfeasiblePathLength {
        start: Coord,
        end: Coord,
        min: usize,
    },

    /// A selected edge joins cells that are neither row- nor column-aligned.
    /// Indicates a construction defect, not a caller error.
    #[error("edge {src} -> {dest} joins unaligned cells")]
    InternalTopology { src: usize, dest: usize },
}
