//! Property tests over randomly shaped dungeons.

use std::collections::VecDeque;

use proptest::prelude::*;

use dg_core::DungeonRng;
use dg_core::dungeon::{
    Coord, Dungeon, DungeonConfig, MIN_PATH_LENGTH, WeightedGraph, candidate_edges,
};

fn reachable_from_origin(dungeon: &Dungeon) -> usize {
    let cols = dungeon.cols();
    let mut visited = vec![false; dungeon.total_nodes()];
    let mut queue = VecDeque::new();
    visited[0] = true;
    queue.push_back(Coord::new(0, 0));
    while let Some(coord) = queue.pop_front() {
        for next in dungeon.possible_moves(coord) {
            let idx = next.row * cols + next.col;
            if !visited[idx] {
                visited[idx] = true;
                queue.push_back(next);
            }
        }
    }
    visited.iter().filter(|&&seen| seen).count()
}

proptest! {
    #[test]
    fn mst_partition_invariants(rows in 2usize..9, cols in 2usize..9, seed in any::<u64>()) {
        let mut rng = DungeonRng::new(seed);
        let candidates = candidate_edges(rows, cols, &mut rng);
        let total = candidates.len();
        let partition = WeightedGraph::new(rows * cols, candidates).compute_mst();

        prop_assert_eq!(partition.tree.len(), rows * cols - 1);
        prop_assert_eq!(partition.tree.len() + partition.redundant.len(), total);
        prop_assert!(
            partition.redundant.windows(2).all(|p| p[0].weight <= p[1].weight)
        );
    }

    #[test]
    fn generated_dungeons_hold_structural_invariants(
        rows in 2usize..8,
        cols in 2usize..8,
        seed in any::<u64>(),
        interconnectivity in 0u32..4,
        treasure in 0u32..=100,
        wrap in any::<bool>(),
    ) {
        prop_assume!(rows * cols >= 10);

        let mut rng = DungeonRng::new(seed);
        let mut config = DungeonConfig::new(rows, cols);
        config.interconnectivity = interconnectivity;
        config.treasure_percentage = treasure;
        config.wrap_allowed = wrap;

        // (rows-1)*(cols-1) >= 4 redundant edges exist for every accepted
        // shape, so interconnectivity below 4 is always feasible.
        let dungeon = Dungeon::generate(&config, &mut rng).unwrap();

        // Connectivity: the spanning tree alone already reaches every cell.
        prop_assert_eq!(reachable_from_origin(&dungeon), rows * cols);

        // Start/end invariant.
        let dist = dungeon.start_position().manhattan(dungeon.end_position());
        prop_assert!(dist >= MIN_PATH_LENGTH);

        // Treasure cells: exact count, 1 or 2 items each.
        let wanted = (rows * cols * treasure as usize).div_ceil(100);
        let bearing = dungeon.treasure_bearing_nodes();
        prop_assert_eq!(bearing.len(), wanted);
        for node in bearing {
            prop_assert!(matches!(node.treasures().len(), 1 | 2));
        }
    }

    #[test]
    fn excessive_interconnectivity_always_rejected(
        rows in 2usize..8,
        cols in 2usize..8,
        seed in any::<u64>(),
    ) {
        prop_assume!(rows * cols >= 10);

        let mut rng = DungeonRng::new(seed);
        let mut config = DungeonConfig::new(rows, cols);
        // One past the exact redundant pool size.
        let pool = (rows - 1) * (cols - 1);
        config.interconnectivity = pool as u32 + 1;

        let err = Dungeon::generate(&config, &mut rng).unwrap_err();
        prop_assert_eq!(
            err,
            dg_core::DungeonError::InfeasibleInterconnectivity {
                requested: pool + 1,
                available: pool,
            }
        );
    }
}
