//! Grid topology: vertex/coordinate mappings and candidate edge generation.

use crate::DungeonRng;

use super::graph::Edge;
use super::grid::Coord;

/// Edge weights are drawn uniformly from `0..WEIGHT_RANGE`.
const WEIGHT_RANGE: u32 = 100;

/// Flat vertex index for a grid cell.
pub fn coord_to_vertex(row: usize, col: usize, cols: usize) -> usize {
    row * cols + col
}

/// Inverse of [`coord_to_vertex`].
pub fn vertex_to_coord(id: usize, cols: usize) -> Coord {
    Coord::new(id / cols, id % cols)
}

/// Candidate edges for a rows x cols grid: one edge per right neighbor
/// (row-major), then one per down neighbor (row-major), each with an
/// independently sampled random weight.
///
/// Produces exactly `rows*(cols-1) + (rows-1)*cols` edges, covering every
/// orthogonal adjacency once.
pub fn candidate_edges(rows: usize, cols: usize, rng: &mut DungeonRng) -> Vec<Edge> {
    let count = rows * cols.saturating_sub(1) + rows.saturating_sub(1) * cols;
    let mut edges = Vec::with_capacity(count);

    for row in 0..rows {
        for col in 0..cols.saturating_sub(1) {
            let src = coord_to_vertex(row, col, cols);
            edges.push(Edge::new(src, src + 1, rng.below(WEIGHT_RANGE) as u8));
        }
    }
    for row in 0..rows.saturating_sub(1) {
        for col in 0..cols {
            let src = coord_to_vertex(row, col, cols);
            edges.push(Edge::new(src, src + cols, rng.below(WEIGHT_RANGE) as u8));
        }
    }

    edges
}

/// Wraparound edges joining opposite grid boundaries: column `cols-1` to
/// column 0 in every row, and row `rows-1` to row 0 in every column.
///
/// These are added to the final edge set unconditionally (never passed
/// through MST selection) and materialized directly as neighbor links.
/// Degenerate single-row or single-column axes produce no wrap edges, since
/// a cell cannot wrap onto itself.
pub fn wrap_edges(rows: usize, cols: usize, rng: &mut DungeonRng) -> Vec<Edge> {
    let mut edges = Vec::new();

    if cols > 1 {
        for row in 0..rows {
            let west = coord_to_vertex(row, 0, cols);
            let east = coord_to_vertex(row, cols - 1, cols);
            edges.push(Edge::new(west, east, rng.below(WEIGHT_RANGE) as u8));
        }
    }
    if rows > 1 {
        for col in 0..cols {
            let north = coord_to_vertex(0, col, cols);
            let south = coord_to_vertex(rows - 1, col, cols);
            edges.push(Edge::new(north, south, rng.below(WEIGHT_RANGE) as u8));
        }
    }

    edges
}
