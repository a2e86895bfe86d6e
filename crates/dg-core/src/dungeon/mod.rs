//! Dungeon generation.
//!
//! The engine builds the full set of orthogonal neighbor edges for a grid,
//! runs Kruskal's algorithm over it, reinserts a controlled number of
//! redundant edges, and materializes the selected edge set into a navigable
//! grid of nodes.

mod builder;
mod graph;
mod grid;
mod topology;

pub use builder::{Dungeon, DungeonConfig, MIN_PATH_LENGTH};
pub use graph::{Edge, MstPartition, WeightedGraph};
pub use grid::{Coord, Direction, Node, NodeGrid, Treasure};
pub use topology::{candidate_edges, coord_to_vertex, vertex_to_coord, wrap_edges};
