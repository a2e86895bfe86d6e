//! Navigable node grid materialized from a selected edge set.
//!
//! Neighbor links are stored as coordinate back-references rather than
//! mutual object pointers: each node names its neighbors and the owning grid
//! resolves them, so links can be kept symmetric without ownership cycles.

use core::fmt;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::{DungeonError, DungeonRng};

use super::graph::Edge;
use super::topology::vertex_to_coord;

/// Grid cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another cell.
    pub fn manhattan(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Movement direction between linked cells.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A treasure item placed at generation time and consumed by external
/// gameplay logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treasure;

/// A cell in the navigable grid.
///
/// Colloquially a "tunnel" when exactly two neighbor links are populated and
/// a "cave" otherwise; the engine does not enforce the distinction, it
/// emerges from generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    coord: Coord,
    up: Option<Coord>,
    down: Option<Coord>,
    left: Option<Coord>,
    right: Option<Coord>,
    treasures: Vec<Treasure>,
}

impl Node {
    fn new(coord: Coord) -> Self {
        Self {
            coord,
            up: None,
            down: None,
            left: None,
            right: None,
            treasures: Vec::new(),
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Coord> {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn neighbor_slot(&mut self, dir: Direction) -> &mut Option<Coord> {
        match dir {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    /// Number of populated neighbor links.
    pub fn degree(&self) -> usize {
        [self.up, self.down, self.left, self.right]
            .iter()
            .filter(|slot| slot.is_some())
            .count()
    }

    pub fn is_tunnel(&self) -> bool {
        self.degree() == 2
    }
}

/// The rows x cols grid of nodes, row-major.
///
/// The neighbor topology is frozen after materialization; only treasure
/// lists change afterwards, through [`NodeGrid::take_treasures`].
#[derive(Debug, Clone)]
pub struct NodeGrid {
    rows: usize,
    cols: usize,
    nodes: Vec<Node>,
}

impl NodeGrid {
    /// Materialize the grid from the selected orthogonal edges, linking both
    /// endpoints of every edge symmetrically.
    pub fn materialize(rows: usize, cols: usize, edges: &[Edge]) -> Result<Self, DungeonError> {
        let mut grid = Self::empty(rows, cols);
        for edge in edges {
            grid.link(edge)?;
        }
        Ok(grid)
    }

    fn empty(rows: usize, cols: usize) -> Self {
        let nodes = (0..rows * cols)
            .map(|id| Node::new(vertex_to_coord(id, cols)))
            .collect();
        Self { rows, cols, nodes }
    }

    /// Link the two endpoints of an orthogonal edge as a mutually consistent
    /// pair: same-row edges set right/left, same-column edges set down/up.
    /// Any other relation indicates a candidate-generation defect.
    fn link(&mut self, edge: &Edge) -> Result<(), DungeonError> {
        let a = vertex_to_coord(edge.src, self.cols);
        let b = vertex_to_coord(edge.dest, self.cols);

        if a.row == b.row {
            let (west, east) = if a.col < b.col { (a, b) } else { (b, a) };
            *self.node_mut(west).neighbor_slot(Direction::Right) = Some(east);
            *self.node_mut(east).neighbor_slot(Direction::Left) = Some(west);
        } else if a.col == b.col {
            let (north, south) = if a.row < b.row { (a, b) } else { (b, a) };
            *self.node_mut(north).neighbor_slot(Direction::Down) = Some(south);
            *self.node_mut(south).neighbor_slot(Direction::Up) = Some(north);
        } else {
            return Err(DungeonError::InternalTopology {
                src: edge.src,
                dest: edge.dest,
            });
        }
        Ok(())
    }

    /// Link opposite boundaries so movement wraps toroidally. Wrap links
    /// bypass MST selection and are applied directly; degenerate single-row
    /// or single-column axes are left alone.
    pub(crate) fn apply_wrap_links(&mut self) {
        if self.cols > 1 {
            for row in 0..self.rows {
                let west = Coord::new(row, 0);
                let east = Coord::new(row, self.cols - 1);
                *self.node_mut(west).neighbor_slot(Direction::Left) = Some(east);
                *self.node_mut(east).neighbor_slot(Direction::Right) = Some(west);
            }
        }
        if self.rows > 1 {
            for col in 0..self.cols {
                let north = Coord::new(0, col);
                let south = Coord::new(self.rows - 1, col);
                *self.node_mut(north).neighbor_slot(Direction::Up) = Some(south);
                *self.node_mut(south).neighbor_slot(Direction::Down) = Some(north);
            }
        }
    }

    /// Place treasure on `ceil(total * percentage / 100)` distinct cells,
    /// chosen uniformly without replacement, 1 or 2 items each. Runs exactly
    /// once, after the topology is frozen.
    pub(crate) fn place_treasures(&mut self, percentage: u32, rng: &mut DungeonRng) {
        let total = self.rows * self.cols;
        let wanted = (total * percentage as usize).div_ceil(100);

        let mut chosen: HashSet<usize> = HashSet::with_capacity(wanted);
        while chosen.len() < wanted {
            let cell = rng.below(total as u32) as usize;
            if !chosen.insert(cell) {
                continue;
            }
            let count = if rng.one_in(2) { 2 } else { 1 };
            self.nodes[cell].treasures = vec![Treasure; count];
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    pub fn get(&self, coord: Coord) -> Option<&Node> {
        if self.contains(coord) {
            Some(&self.nodes[self.index(coord)])
        } else {
            None
        }
    }

    /// Coordinates reachable through one populated link, in stable
    /// up, down, left, right order. Empty for out-of-range coordinates.
    pub fn possible_moves(&self, coord: Coord) -> Vec<Coord> {
        let Some(node) = self.get(coord) else {
            return Vec::new();
        };
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
        .into_iter()
        .filter_map(|dir| node.neighbor(dir))
        .collect()
    }

    /// Nodes currently holding treasure, in row-major order.
    pub fn treasure_bearing(&self) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|node| !node.treasures.is_empty())
            .collect()
    }

    /// Drain the treasure at a cell. Out-of-range coordinates yield nothing.
    pub(crate) fn take_treasures(&mut self, coord: Coord) -> Vec<Treasure> {
        if !self.contains(coord) {
            return Vec::new();
        }
        let idx = self.index(coord);
        core::mem::take(&mut self.nodes[idx].treasures)
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    fn node_mut(&mut self, coord: Coord) -> &mut Node {
        let idx = self.index(coord);
        &mut self.nodes[idx]
    }
}
