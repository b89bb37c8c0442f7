//! Property tests for path search over random grids.
//!
//! Random grids come from seeded `StdRng`s so failures are reproducible;
//! each assertion message carries the seed.

mod common;

use common::{
    assert_valid_path, brute_force_tour, distances_from, grid_from_rows, random_grid,
    random_passable,
};
use marga::pathfinding::{
    SearchConfig, SearchFailure, SearchMode, find_path, joint_search, nearest_target, search,
};
use marga::{CellStatus, Grid, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SEEDS: std::ops::Range<u64> = 1..120;

// ============================================================================
// Single-target BFS
// ============================================================================

#[test]
fn test_bfs_matches_true_shortest_distance() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = random_grid(&mut rng, 6, 7, 0.25);
        let picks = random_passable(&mut rng, &grid, 2);
        if picks.len() < 2 {
            continue;
        }
        let (start, target) = (picks[0], picks[1]);
        grid.set_status_at(target, CellStatus::Target);

        let result = nearest_target(&grid, start, &SearchConfig::default());
        let truth = distances_from(&grid, start).get(&target).copied();

        match truth {
            Some(d) => {
                assert!(result.found, "seed {}", seed);
                assert_eq!(result.path_length() as u32, d, "seed {}", seed);
                assert_eq!(result.path.last(), Some(&target), "seed {}", seed);
                assert_valid_path(&grid, &result.path);
            }
            None => {
                assert!(!result.found, "seed {}", seed);
                assert!(result.path.is_empty(), "seed {}", seed);
            }
        }
    }
}

#[test]
fn test_astar_matches_true_shortest_distance() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = random_grid(&mut rng, 7, 7, 0.3);
        let picks = random_passable(&mut rng, &grid, 2);
        if picks.len() < 2 {
            continue;
        }

        let result = find_path(&grid, picks[0], picks[1], &SearchConfig::default());
        let truth = distances_from(&grid, picks[0]).get(&picks[1]).copied();
        assert_eq!(result.found, truth.is_some(), "seed {}", seed);
        if let Some(d) = truth {
            assert_eq!(result.path_length() as u32, d, "seed {}", seed);
            assert_valid_path(&grid, &result.path);
        }
    }
}

#[test]
fn test_search_never_mutates_grid() {
    for seed in 1..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = random_grid(&mut rng, 5, 5, 0.2);
        let picks = random_passable(&mut rng, &grid, 4);
        if picks.len() < 4 {
            continue;
        }
        grid.set_status_at(picks[1], CellStatus::Target);
        grid.set_status_at(picks[2], CellStatus::Dirty);
        let before = grid.clone();

        let _ = nearest_target(&grid, picks[0], &SearchConfig::default());
        let _ = search(&grid, picks[0], picks[1..].to_vec(), SearchMode::Bfs);
        let _ = search(&grid, picks[0], picks[1..].to_vec(), SearchMode::AStar);
        assert_eq!(grid, before, "seed {}", seed);
    }
}

// ============================================================================
// Joint-target search
// ============================================================================

#[test]
fn test_joint_bfs_is_optimal_tour() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = random_grid(&mut rng, 5, 6, 0.2);
        let picks = random_passable(&mut rng, &grid, 4);
        if picks.len() < 2 {
            continue;
        }
        let (start, targets) = (picks[0], &picks[1..]);

        let result = search(&grid, start, targets.to_vec(), SearchMode::Bfs);
        match brute_force_tour(&grid, start, targets) {
            Some(best) => {
                assert!(result.found, "seed {}", seed);
                assert_eq!(result.path_length() as u32, best, "seed {}", seed);
            }
            None => assert!(!result.found, "seed {}", seed),
        }
    }
}

#[test]
fn test_joint_search_visits_every_target() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = random_grid(&mut rng, 6, 6, 0.15);
        let picks = random_passable(&mut rng, &grid, 5);
        if picks.len() < 2 {
            continue;
        }
        let (start, targets) = (picks[0], &picks[1..]);
        if brute_force_tour(&grid, start, targets).is_none() {
            continue;
        }

        for mode in [SearchMode::Bfs, SearchMode::AStar] {
            let result = search(&grid, start, targets.to_vec(), mode);
            assert!(result.found, "seed {} {:?}", seed, mode);
            assert_eq!(result.path[0], start);
            assert_valid_path(&grid, &result.path);
            for t in targets {
                assert!(result.path.contains(t), "seed {} {:?} missed {}", seed, mode, t);
            }
        }
    }
}

#[test]
fn test_fewer_targets_never_open_more_nodes() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = random_grid(&mut rng, 5, 5, 0.2);
        let picks = random_passable(&mut rng, &grid, 4);
        if picks.len() < 3 {
            continue;
        }
        let (start, targets) = (picks[0], &picks[1..]);
        if brute_force_tour(&grid, start, targets).is_none() {
            continue;
        }

        let full = search(&grid, start, targets.to_vec(), SearchMode::Bfs);
        for skip in 0..targets.len() {
            let fewer: Vec<Position> = targets
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &t)| t)
                .collect();
            let smaller = search(&grid, start, fewer, SearchMode::Bfs);
            assert!(
                smaller.nodes_opened <= full.nodes_opened,
                "seed {}: dropping {} opened {} > {}",
                seed,
                targets[skip],
                smaller.nodes_opened,
                full.nodes_opened
            );
        }
    }
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_center_target_scenario() {
    let grid = grid_from_rows(&["CCC", "CTC", "CCC"]);
    let start = Position::new(0, 0);

    let bfs = nearest_target(&grid, start, &SearchConfig::default());
    assert!(bfs.found);
    assert_eq!(bfs.path_length(), 2);
    assert_eq!(bfs.nodes_opened, 3);

    for mode in [SearchMode::Bfs, SearchMode::AStar] {
        let joint = search(&grid, start, grid.positions_with(CellStatus::Target), mode);
        assert!(joint.found);
        assert_eq!(joint.path_length(), 2);
    }
}

#[test]
fn test_walled_in_scenario() {
    let mut grid = Grid::new(4, 4, CellStatus::Impassable);
    let start = Position::new(2, 1);
    grid.set_status_at(start, CellStatus::Clean);

    let result = nearest_target(&grid, start, &SearchConfig::default());
    assert!(!result.found);
    assert!(result.path.is_empty());
    assert_eq!(result.nodes_opened, 1);
    assert_eq!(result.failure_reason, Some(SearchFailure::NoPath));
}

#[test]
fn test_first_discovered_target_in_neighbor_order() {
    // Two targets at distance 1: up is checked before right
    let grid = grid_from_rows(&["CTC", "CCT", "CCC"]);
    let result = nearest_target(&grid, Position::new(1, 1), &SearchConfig::default());
    assert_eq!(result.path, vec![Position::new(1, 1), Position::new(0, 1)]);
}

#[test]
fn test_many_targets_on_map() {
    let grid = grid_from_rows(&[
        "RCCWCCT", //
        "CWCWCWC", //
        "CWCCCWC", //
        "TWWWCCC", //
        "CCCCCWT",
    ]);
    let targets = grid.positions_with(CellStatus::Target);
    assert_eq!(targets.len(), 3);

    let config = SearchConfig::with_mode(SearchMode::Bfs);
    let result = joint_search(&grid, Position::new(0, 0), targets.iter().copied(), &config);
    assert!(result.found);
    assert_eq!(
        result.path_length() as u32,
        brute_force_tour(&grid, Position::new(0, 0), &targets).unwrap()
    );
}
