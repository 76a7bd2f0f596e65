//! End-to-end checks of the searches running on generated grids.

use std::collections::HashSet;

use gridsearch_core::Coord;
use gridsearch_paths::{Algorithm, Explorer, Pather, is_adjacent};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::grid::{Grid, assert_consistent};
use crate::mapgen::TRAP_OPENING;

fn c(r: i32, col: i32) -> Coord {
    Coord::new(r, col)
}

fn assert_route(grid: &Grid, path: &[Coord], start: Coord, target: Coord) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&target));
    assert_eq!(path.iter().collect::<HashSet<_>>().len(), path.len());
    for w in path.windows(2) {
        assert!(is_adjacent(w[0], w[1]));
        assert!(grid.passable(w[1]));
    }
}

#[test]
fn open_five_by_five_corner_to_corner() {
    let g = Grid::new(5);
    let mut ex = Explorer::new();
    let path = ex.bfs(c(0, 0), c(4, 4), &g, |_| {}).unwrap();
    assert_eq!(path.len(), 5);
    for a in Algorithm::ALL {
        let p = ex.run(a, c(0, 0), c(4, 4), &g, |_| {}).unwrap();
        assert_route(&g, &p, c(0, 0), c(4, 4));
        assert!(p.len() >= 5, "{a}");
    }
}

#[test]
fn maze_corners_are_connected() {
    let mut ex = Explorer::new();
    for size in 1..24 {
        for seed in 0..3 {
            let mut g = Grid::new(size);
            g.generate_maze(&mut StdRng::seed_from_u64(seed));
            let far = c(size - 1, size - 1);
            let path = ex.bfs(Coord::ZERO, far, &g, |_| {});
            let path = path.unwrap_or_else(|| panic!("size {size} seed {seed}\n{}", g.to_ascii()));
            assert_route(&g, &path, Coord::ZERO, far);
        }
    }
}

#[test]
fn every_algorithm_solves_a_maze() {
    let mut g = Grid::new(20);
    g.generate_maze(&mut StdRng::seed_from_u64(11));
    let (s, t) = (c(2, 2), c(17, 17));
    let mut ex = Explorer::new();
    let shortest = ex.bfs(s, t, &g, |_| {}).unwrap().len();
    assert_eq!(ex.ucs(s, t, &g, |_| {}).map(|p| p.len()), Some(shortest));
    for a in [Algorithm::Dfs, Algorithm::Bidirectional] {
        let p = ex.run(a, s, t, &g, |_| {}).unwrap();
        assert_route(&g, &p, s, t);
        assert!(p.len() >= shortest);
    }
    // Maze corridors are long; bound the deepening runs by the known length.
    let depth = shortest as u32;
    let p = ex.iddfs(s, t, &g, depth, |_| {}).unwrap();
    assert_eq!(p.len(), shortest);
    assert_eq!(ex.iddfs(s, t, &g, depth - 1, |_| {}), None);
    assert_eq!(ex.dls(s, t, &g, depth - 2, |_| {}), None);
}

#[test]
fn trap_with_opening_is_escapable() {
    let mut g = Grid::new(10);
    let anchor = c(5, 5);
    g.generate_trap(anchor);
    let mut ex = Explorer::new();
    for a in Algorithm::ALL {
        let p = ex.run(a, anchor, c(0, 9), &g, |_| {}).unwrap_or_else(|| panic!("{a}"));
        assert_eq!(p[1], anchor + TRAP_OPENING, "{a}");
    }
}

#[test]
fn sealed_trap_blocks_every_algorithm() {
    let mut g = Grid::new(10);
    let target = c(6, 6);
    g.generate_trap(target);
    let gap = target + TRAP_OPENING;
    g.toggle_obstacle(gap.row, gap.col);
    assert_consistent(&g);
    let start = c(0, 0);
    // Everything except the walls and the sealed target itself.
    let reachable = g.free_count() - 1;

    let mut ex = Explorer::new();
    for a in Algorithm::ALL {
        let mut explored = 0;
        let path = ex.run(a, start, target, &g, |s| explored = s.explored.len());
        assert_eq!(path, None, "{a}");
        if a != Algorithm::Bidirectional {
            assert_eq!(explored, reachable, "{a}");
        }
    }

    // The other way round: starting inside, nothing is discovered at all.
    for a in Algorithm::ALL {
        let mut calls = 0;
        assert_eq!(ex.run(a, target, start, &g, |_| calls += 1), None, "{a}");
        if a != Algorithm::Bidirectional {
            assert_eq!(calls, 0, "{a}");
        }
    }
}

#[test]
fn blocked_endpoints_degrade_to_no_path() {
    let mut g = Grid::new(6);
    g.toggle_obstacle(5, 5);
    let mut ex = Explorer::new();
    for a in Algorithm::ALL {
        assert_eq!(ex.run(a, c(0, 0), c(5, 5), &g, |_| {}), None, "{a}");
        assert_eq!(ex.run(a, c(5, 5), c(5, 5), &g, |_| {}), Some(vec![c(5, 5)]), "{a}");
    }
}

#[test]
fn blocked_start_is_never_expanded() {
    let mut g = Grid::new(6);
    g.toggle_obstacle(0, 0);
    let mut ex = Explorer::new();
    for a in Algorithm::ALL {
        let mut calls = 0;
        assert_eq!(ex.run(a, c(0, 0), c(5, 5), &g, |_| calls += 1), None, "{a}");
        assert_eq!(calls, 0, "{a}");
        assert_eq!(ex.stats().expanded, 0, "{a}");
        assert_eq!(ex.run(a, c(-1, 0), c(5, 5), &g, |_| {}), None, "{a}");
        assert_eq!(ex.run(a, c(5, 5), c(6, 6), &g, |_| {}), None, "{a}");
    }
}

#[test]
fn edits_between_searches_are_visible() {
    let mut g = Grid::new(5);
    let mut ex = Explorer::new();
    let (s, t) = (c(0, 2), c(4, 2));
    assert_eq!(ex.bfs(s, t, &g, |_| {}).map(|p| p.len()), Some(5));
    for col in 0..5 {
        g.toggle_obstacle(2, col);
    }
    assert_eq!(ex.bfs(s, t, &g, |_| {}), None);
    g.toggle_obstacle(2, 4);
    assert!(ex.bfs(s, t, &g, |_| {}).is_some());
    g.add_dynamic_obstacle(c(2, 4));
    assert_eq!(ex.bfs(s, t, &g, |_| {}), None);
    g.clean_dynamic();
    assert!(ex.bfs(s, t, &g, |_| {}).is_some());
}
