//! Weighted undirected graph and the Kruskal MST solver.
//!
//! The solver partitions the candidate edge set into the spanning tree and
//! the cycle-closing remainder; the remainder doubles as the prioritized
//! pool for extra-connectivity edges.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Weighted undirected edge between two grid vertices.
///
/// Vertices are flat indices (`row * cols + col`). Weights are drawn once at
/// graph construction and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub src: usize,
    pub dest: usize,
    pub weight: u8,
}

impl Edge {
    pub fn new(src: usize, dest: usize, weight: u8) -> Self {
        Self { src, dest, weight }
    }
}

/// Result of running Kruskal's algorithm: the spanning tree plus every
/// candidate edge that closed a cycle, ascending by weight.
#[derive(Debug, Clone)]
pub struct MstPartition {
    pub tree: Vec<Edge>,
    pub redundant: Vec<Edge>,
}

/// Union-find over vertex indices, with path compression and union by rank.
#[derive(Debug)]
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, vertex: usize) -> usize {
        let mut root = vertex;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression.
        let mut cur = vertex;
        while self.parent[cur] != root {
            cur = core::mem::replace(&mut self.parent[cur], root);
        }
        root
    }

    /// Merge the components of `a` and `b`. Returns false if they were
    /// already in the same component.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            Ordering::Less => self.parent[root_a] = root_b,
            Ordering::Greater => self.parent[root_b] = root_a,
            Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }
}

/// Weighted grid graph: a fixed vertex count plus the ordered candidate edge
/// list. Immutable once built.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl WeightedGraph {
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Self {
        Self {
            vertex_count,
            edges,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Partition the candidate set into a minimum spanning tree and the
    /// cycle-closing remainder.
    ///
    /// Candidates are processed in ascending weight order. The sort is
    /// stable, so edges of equal weight keep their generation order and the
    /// partition is deterministic for a fixed candidate list.
    ///
    /// When the candidate set connects all vertices (always true for a full
    /// grid), the tree holds exactly `vertex_count - 1` edges.
    pub fn compute_mst(&self) -> MstPartition {
        let mut ordered = self.edges.clone();
        ordered.sort_by_key(|edge| edge.weight);

        let mut components = DisjointSet::new(self.vertex_count);
        let mut tree = Vec::with_capacity(self.vertex_count.saturating_sub(1));
        let mut redundant = Vec::new();

        for edge in ordered {
            if components.union(edge.src, edge.dest) {
                tree.push(edge);
            } else {
                redundant.push(edge);
            }
        }

        MstPartition { tree, redundant }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjoint_set_unions_and_finds() {
        let mut set = DisjointSet::new(5);
        assert!(set.union(0, 1));
        assert!(set.union(3, 4));
        assert!(!set.union(1, 0));
        assert_eq!(set.find(0), set.find(1));
        assert_ne!(set.find(1), set.find(3));
        assert!(set.union(1, 4));
        assert_eq!(set.find(0), set.find(3));
    }

    #[test]
    fn mst_on_square_picks_three_cheapest_acyclic() {
        // 2x2 grid: 0-1 (w5), 2-3 (w1), 0-2 (w9), 1-3 (w2)
        let edges = vec![
            Edge::new(0, 1, 5),
            Edge::new(2, 3, 1),
            Edge::new(0, 2, 9),
            Edge::new(1, 3, 2),
        ];
        let graph = WeightedGraph::new(4, edges);
        let partition = graph.compute_mst();

        assert_eq!(partition.tree.len(), 3);
        assert_eq!(partition.redundant.len(), 1);
        // The expensive 0-2 edge closes the cycle.
        assert_eq!(partition.redundant[0], Edge::new(0, 2, 9));
    }

    #[test]
    fn equal_weights_keep_generation_order() {
        // All weights equal: the tree must be the first three candidates.
        let edges = vec![
            Edge::new(0, 1, 7),
            Edge::new(1, 3, 7),
            Edge::new(2, 3, 7),
            Edge::new(0, 2, 7),
        ];
        let graph = WeightedGraph::new(4, edges.clone());
        let partition = graph.compute_mst();

        assert_eq!(partition.tree, edges[..3]);
        assert_eq!(partition.redundant, edges[3..]);
    }

    #[test]
    fn redundant_edges_sorted_ascending() {
        let edges = vec![
            Edge::new(0, 1, 1),
            Edge::new(1, 2, 1),
            Edge::new(2, 0, 90),
            Edge::new(0, 2, 10),
        ];
        let graph = WeightedGraph::new(3, edges);
        let partition = graph.compute_mst();

        assert_eq!(partition.tree.len(), 2);
        let weights: Vec<u8> = partition.redundant.iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![10, 90]);
    }

    #[test]
    fn input_edges_not_mutated() {
        let edges = vec![Edge::new(0, 1, 3), Edge::new(1, 2, 2)];
        let graph = WeightedGraph::new(3, edges.clone());
        let _ = graph.compute_mst();
        assert_eq!(graph.edges(), &edges[..]);
    }
}
