//! dg-core: grid-graph dungeon generation engine
//!
//! Builds a fully connected weighted grid graph, computes its minimum
//! spanning tree, reinserts a controlled number of redundant edges for extra
//! connectivity, and materializes the result into a navigable grid of caves
//! and tunnels.
//!
//! This crate contains the generation logic only, with no I/O dependencies.
//! It is designed to be pure and testable: all randomness flows through an
//! explicit seeded [`DungeonRng`].

pub mod dungeon;

mod error;
mod rng;

pub use error::DungeonError;
pub use rng::DungeonRng;
