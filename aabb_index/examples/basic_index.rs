// Copyright 2025 the aabb-collide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of `aabb_index`: insert boxes into a grid and query them.

use aabb_index::{Grid, Rect};

fn main() {
    let mut grid: Grid<u32> = Grid::new(64.0);
    grid.insert(1, &Rect::new(0.0, 0.0, 10.0, 10.0));
    grid.insert(2, &Rect::new(5.0, 5.0, 15.0, 15.0));

    let hits = grid.query_point(6.0, 6.0);
    println!("hits at (6,6): {hits:?}");

    let along = grid.query_rect(&Rect::new(0.0, 0.0, 20.0, 20.0));
    println!("hits overlapping (0,0,20,20): {along:?}");
}
