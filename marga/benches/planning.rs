//! Benchmark joint-target search and value iteration.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use marga::pathfinding::{SearchConfig, SearchMode, SearchPlanner, nearest_target};
use marga::policy::{ValueIteration, ValueIterationConfig};
use marga::{CellStatus, Grid, Position};

/// Open room with a wall ring, a comb of interior walls, and `dirt` dirty cells
/// spread along the bottom rows.
fn comb_room(size: usize, dirt: usize) -> Grid {
    let mut grid = Grid::new(size, size, CellStatus::Clean);
    let last = size as i32 - 1;

    for i in 0..size as i32 {
        grid.set_status(0, i, CellStatus::Impassable);
        grid.set_status(last, i, CellStatus::Impassable);
        grid.set_status(i, 0, CellStatus::Impassable);
        grid.set_status(i, last, CellStatus::Impassable);
    }

    // Teeth hang from the top wall, leaving two rows free at the bottom
    for col in (3..last).step_by(3) {
        for row in 1..last - 2 {
            grid.set_status(row, col, CellStatus::Impassable);
        }
    }

    let step = ((size - 2) / dirt.max(1)).max(1) as i32;
    for k in 0..dirt as i32 {
        let col = 1 + (k * step) % (last - 1);
        let row = if k % 2 == 0 { last - 1 } else { 1 };
        if grid.is_passable(Position::new(row, col)) {
            grid.set_status(row, col, CellStatus::Dirty);
        } else {
            grid.set_status(last - 2, col, CellStatus::Dirty);
        }
    }
    grid
}

fn bench_nearest_target(c: &mut Criterion) {
    let mut grid = comb_room(40, 0);
    grid.set_status(38, 37, CellStatus::Target);
    let config = SearchConfig::default();

    c.bench_function("nearest_target_40x40", |b| {
        b.iter(|| {
            let result = nearest_target(black_box(&grid), Position::new(1, 1), &config);
            black_box(result)
        })
    });
}

fn bench_joint_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("joint_search_targets");

    for dirt in [2usize, 4, 6, 8].iter() {
        let grid = comb_room(20, *dirt);
        let goals = grid.goal_cells();

        for mode in [SearchMode::Bfs, SearchMode::AStar] {
            let planner = SearchPlanner::new(SearchConfig::with_mode(mode));
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", mode), dirt),
                dirt,
                |b, _| {
                    b.iter(|| {
                        let result = planner.search(
                            black_box(&grid),
                            Position::new(1, 1),
                            goals.iter().copied(),
                        );
                        black_box(result)
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_value_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_iteration_size");
    let solver = ValueIteration::new(ValueIterationConfig::default());

    for size in [10usize, 20, 40].iter() {
        let grid = comb_room(*size, 3);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let solution = solver.solve_all(black_box(&grid));
                black_box(solution)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_nearest_target,
    bench_joint_search,
    bench_value_iteration
);
criterion_main!(benches);
