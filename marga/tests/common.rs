//! Test utilities for marga planning tests.
//!
//! Random grid generation plus brute-force oracles for shortest paths.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use marga::io::parse_map;
use marga::{CellStatus, Grid, Position};
use rand::Rng;
use rand::rngs::StdRng;

/// Grid from map rows (`C`, `D`, `W`, `T`, `R`)
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    parse_map(&rows.join("\n")).expect("test map must parse").grid
}

/// Random grid with each cell a wall with probability `wall_probability`
pub fn random_grid(rng: &mut StdRng, rows: usize, cols: usize, wall_probability: f64) -> Grid {
    let cells = (0..rows * cols)
        .map(|_| {
            if rng.random::<f64>() < wall_probability {
                CellStatus::Impassable
            } else {
                CellStatus::Clean
            }
        })
        .collect();
    Grid::from_cells(rows, cols, cells).expect("shape matches")
}

/// Pick `n` distinct passable cells, or fewer if the grid runs out
pub fn random_passable(rng: &mut StdRng, grid: &Grid, n: usize) -> Vec<Position> {
    let mut free: Vec<Position> = grid
        .iter()
        .filter(|(_, s)| s.is_passable())
        .map(|(p, _)| p)
        .collect();
    let mut picked = Vec::new();
    while picked.len() < n && !free.is_empty() {
        let i = rng.random_range(0..free.len());
        picked.push(free.swap_remove(i));
    }
    picked
}

/// Exact move distances from `from` to every reachable passable cell
pub fn distances_from(grid: &Grid, from: Position) -> HashMap<Position, u32> {
    let mut dist = HashMap::new();
    if !grid.is_passable(from) {
        return dist;
    }
    let mut queue = VecDeque::new();
    dist.insert(from, 0);
    queue.push_back(from);
    while let Some(current) = queue.pop_front() {
        let d = dist[&current];
        for (_, next) in current.neighbors_4() {
            if grid.is_passable(next) && !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Fewest moves from `start` visiting every target, by trying every order.
///
/// `None` if some target is unreachable.
pub fn brute_force_tour(grid: &Grid, start: Position, targets: &[Position]) -> Option<u32> {
    let mut points = vec![start];
    points.extend(targets.iter().copied().filter(|t| *t != start));
    let tables: Vec<HashMap<Position, u32>> =
        points.iter().map(|&p| distances_from(grid, p)).collect();

    let mut order: Vec<usize> = (1..points.len()).collect();
    let mut best: Option<u32> = None;
    permute(&mut order, 0, &mut |perm| {
        let mut total = 0;
        let mut at = 0;
        for &next in perm {
            match tables[at].get(&points[next]) {
                Some(d) => total += d,
                None => return,
            }
            at = next;
        }
        best = Some(best.map_or(total, |b| b.min(total)));
    });
    best
}

fn permute(items: &mut [usize], k: usize, visit: &mut impl FnMut(&[usize])) {
    if k == items.len() {
        visit(items);
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute(items, k + 1, visit);
        items.swap(k, i);
    }
}

/// Every step is one cell onto a passable cell
pub fn assert_valid_path(grid: &Grid, path: &[Position]) {
    for pos in path {
        assert!(grid.is_passable(*pos), "path crosses wall at {}", pos);
    }
    for pair in path.windows(2) {
        assert_eq!(
            pair[0].manhattan_distance(&pair[1]),
            1,
            "non-adjacent step {} -> {}",
            pair[0],
            pair[1]
        );
    }
}
