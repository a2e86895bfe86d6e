//! Dungeon construction: input validation, edge selection, materialization,
//! and the final structural checks.
//!
//! Construction walks a fixed sequence — validate inputs, generate topology,
//! select edges, materialize the grid, verify path length — and is
//! all-or-nothing: every failure aborts the build before a dungeon escapes.

use serde::{Deserialize, Serialize};

use crate::{DungeonError, DungeonRng};

use super::graph::{Edge, WeightedGraph};
use super::grid::{Coord, Direction, Node, NodeGrid, Treasure};
use super::topology::{candidate_edges, vertex_to_coord, wrap_edges};

/// Minimum Manhattan distance between the start and end cells.
pub const MIN_PATH_LENGTH: usize = 5;

/// Minimum number of grid cells.
const MIN_CELLS: usize = 10;

/// Attempts at sampling a start/end pair before construction gives up.
const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Construction input for [`Dungeon::generate`].
///
/// `start` and `end` default to random placement when left unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DungeonConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Option<Coord>,
    pub end: Option<Coord>,
    /// Percentage of cells holding treasure, 0..=100.
    pub treasure_percentage: u32,
    /// Extra non-tree edges added beyond the spanning tree.
    pub interconnectivity: u32,
    /// Connect opposite grid boundaries with wraparound passages.
    pub wrap_allowed: bool,
}

impl DungeonConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            start: None,
            end: None,
            treasure_percentage: 0,
            interconnectivity: 0,
            wrap_allowed: false,
        }
    }

    fn validate(&self) -> Result<(), DungeonError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(DungeonError::InvalidDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        for coord in [self.start, self.end].into_iter().flatten() {
            if coord.row >= self.rows || coord.col >= self.cols {
                return Err(DungeonError::InvalidCoordinate {
                    coord,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
        }
        if self.treasure_percentage > 100 {
            return Err(DungeonError::InvalidPercentage(self.treasure_percentage));
        }
        let total = self
            .rows
            .checked_mul(self.cols)
            .ok_or(DungeonError::InvalidDimension {
                rows: self.rows,
                cols: self.cols,
            })?;
        if total < MIN_CELLS {
            return Err(DungeonError::InsufficientCells {
                total,
                min: MIN_CELLS,
            });
        }
        Ok(())
    }
}

/// A fully generated dungeon: the navigable grid, the frozen final edge set,
/// and the validated start and end cells.
///
/// The topology and edge list are immutable after construction; only
/// treasure lists change, through [`Dungeon::take_treasures`].
#[derive(Debug, Clone)]
pub struct Dungeon {
    grid: NodeGrid,
    edges: Vec<Edge>,
    start: Coord,
    end: Coord,
}

impl Dungeon {
    /// Generate a dungeon from the given configuration.
    ///
    /// The final edge set is the spanning tree, plus the
    /// `interconnectivity` cheapest redundant edges, plus wrap edges when
    /// wraparound is enabled.
    pub fn generate(config: &DungeonConfig, rng: &mut DungeonRng) -> Result<Self, DungeonError> {
        config.validate()?;

        let vertex_count = config.rows * config.cols;
        let candidates = candidate_edges(config.rows, config.cols, rng);
        let graph = WeightedGraph::new(vertex_count, candidates);
        let partition = graph.compute_mst();

        let requested = config.interconnectivity as usize;
        if requested > partition.redundant.len() {
            return Err(DungeonError::InfeasibleInterconnectivity {
                requested,
                available: partition.redundant.len(),
            });
        }

        let mut edges = partition.tree;
        edges.extend_from_slice(&partition.redundant[..requested]);

        let mut grid = NodeGrid::materialize(config.rows, config.cols, &edges)?;
        if config.wrap_allowed {
            edges.extend(wrap_edges(config.rows, config.cols, rng));
            grid.apply_wrap_links();
        }

        let (start, end) = place_start_end(config, rng)?;

        grid.place_treasures(config.treasure_percentage, rng);

        Ok(Self {
            grid,
            edges,
            start,
            end,
        })
    }

    /// Coordinates reachable from `coord` through one neighbor link, in
    /// stable up, down, left, right order.
    pub fn possible_moves(&self, coord: Coord) -> Vec<Coord> {
        self.grid.possible_moves(coord)
    }

    /// The neighbor one step in `dir` from `coord`, if a passage exists.
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        self.grid.get(coord).and_then(|node| node.neighbor(dir))
    }

    /// The authoritative final edge list, frozen at construction.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn total_nodes(&self) -> usize {
        self.grid.len()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.grid.contains(coord)
    }

    pub fn node(&self, coord: Coord) -> Option<&Node> {
        self.grid.get(coord)
    }

    pub fn start_position(&self) -> Coord {
        self.start
    }

    pub fn end_position(&self) -> Coord {
        self.end
    }

    /// Override the start cell without re-validation. The caller keeps the
    /// path-length invariant meaningful.
    pub fn force_set_start(&mut self, coord: Coord) {
        self.start = coord;
    }

    /// Override the end cell without re-validation.
    pub fn force_set_end(&mut self, coord: Coord) {
        self.end = coord;
    }

    /// Nodes currently holding treasure, in row-major order.
    pub fn treasure_bearing_nodes(&self) -> Vec<&Node> {
        self.grid.treasure_bearing()
    }

    pub fn treasures_at(&self, coord: Coord) -> &[Treasure] {
        self.grid.get(coord).map_or(&[], |node| node.treasures())
    }

    /// Drain the treasure at a cell, for pickup by external collaborators.
    pub fn take_treasures(&mut self, coord: Coord) -> Vec<Treasure> {
        self.grid.take_treasures(coord)
    }
}

/// Pick or accept the start/end pair, enforcing the minimum path length.
///
/// A fully explicit pair that fails the invariant is fatal. Pairs with a
/// sampled member are retried up to [`MAX_PLACEMENT_ATTEMPTS`]; exhausting
/// the attempts reports the last sampled pair as infeasible.
fn place_start_end(
    config: &DungeonConfig,
    rng: &mut DungeonRng,
) -> Result<(Coord, Coord), DungeonError> {
    if let (Some(start), Some(end)) = (config.start, config.end) {
        if start.manhattan(end) < MIN_PATH_LENGTH {
            return Err(DungeonError::InfeasiblePathLength {
                start,
                end,
                min: MIN_PATH_LENGTH,
            });
        }
        return Ok((start, end));
    }

    let mut last = (Coord::new(0, 0), Coord::new(0, 0));
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let start = config.start.unwrap_or_else(|| sample_cell(config, rng));
        let end = config.end.unwrap_or_else(|| sample_cell(config, rng));
        if start.manhattan(end) >= MIN_PATH_LENGTH {
            return Ok((start, end));
        }
        last = (start, end);
    }

    Err(DungeonError::InfeasiblePathLength {
        start: last.0,
        end: last.1,
        min: MIN_PATH_LENGTH,
    })
}

fn sample_cell(config: &DungeonConfig, rng: &mut DungeonRng) -> Coord {
    let cell = rng.below((config.rows * config.cols) as u32) as usize;
    vertex_to_coord(cell, config.cols)
}
