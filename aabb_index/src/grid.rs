// Copyright 2025 the aabb-collide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform spatial grid: a sparse mapping from integer cell coordinates to the
//! set of items whose box overlaps that cell.
//!
//! Cells are created lazily on first insertion and pruned immediately on last
//! removal, so the backing map's size is always proportional to occupied
//! cells rather than to the bounding extent of all items — this is the
//! "non-empty tracking" the grid needs without a separate side-set, since an
//! absent map entry already means "empty".
//!
//! Cell coordinates are 0-based (`floor(coordinate / cell_size)`); the
//! 1-based convention in some descriptions of this algorithm is an
//! implementation detail that does not leak through this API.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::geometry::Rect;

/// A uniform spatial grid over items of type `Item`.
#[derive(Debug)]
pub struct Grid<Item: Clone + Eq + Hash> {
    cell_size: f64,
    // row -> (column -> items in that cell)
    rows: HashMap<i64, HashMap<i64, HashSet<Item>>>,
}

/// Diagnostic snapshot of a [`Grid`]'s occupancy, for `tracing` spans and
/// tests. Not part of the resolver's behavioral contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridStats {
    /// Number of cells with at least one item.
    pub occupied_cells: usize,
    /// Total item-in-cell memberships, summed over all occupied cells. An
    /// item spanning `k` cells contributes `k` to this total.
    pub total_memberships: usize,
}

impl<Item: Clone + Eq + Hash> Grid<Item> {
    /// Create an empty grid with the given strictly-positive cell size.
    pub fn new(cell_size: f64) -> Self {
        assert!(cell_size > 0.0, "cell size must be strictly positive");
        Self {
            cell_size,
            rows: HashMap::new(),
        }
    }

    /// The grid's cell size.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Occupied-cell count and total item-in-cell memberships, for
    /// diagnostics.
    pub fn stats(&self) -> GridStats {
        let mut occupied_cells = 0;
        let mut total_memberships = 0;
        for row in self.rows.values() {
            occupied_cells += row.len();
            total_memberships += row.values().map(HashSet::len).sum::<usize>();
        }
        GridStats {
            occupied_cells,
            total_memberships,
        }
    }

    fn cell_of(&self, x: f64, y: f64) -> (i64, i64) {
        (
            (x / self.cell_size).floor() as i64,
            (y / self.cell_size).floor() as i64,
        )
    }

    /// The inclusive column and row range `(col_min, row_min, col_max, row_max)`
    /// a box occupies.
    fn cell_range(&self, rect: &Rect) -> (i64, i64, i64, i64) {
        let (col_min, row_min) = self.cell_of(rect.left, rect.top);
        let col_max = (rect.right() / self.cell_size).ceil() as i64 - 1;
        let row_max = (rect.bottom() / self.cell_size).ceil() as i64 - 1;
        (col_min, row_min, col_max.max(col_min), row_max.max(row_min))
    }

    /// Insert `item` into every cell its box overlaps.
    pub fn insert(&mut self, item: Item, rect: &Rect) {
        let (cl, ct, cr, cb) = self.cell_range(rect);
        for cy in ct..=cb {
            let row = self.rows.entry(cy).or_default();
            for cx in cl..=cr {
                row.entry(cx).or_default().insert(item.clone());
            }
        }
    }

    /// Remove `item` from every cell its box overlaps, pruning any cell (and
    /// row) that becomes empty as a result.
    pub fn remove(&mut self, item: &Item, rect: &Rect) {
        let (cl, ct, cr, cb) = self.cell_range(rect);
        for cy in ct..=cb {
            let Some(row) = self.rows.get_mut(&cy) else {
                continue;
            };
            for cx in cl..=cr {
                if let Some(cell) = row.get_mut(&cx) {
                    cell.remove(item);
                    if cell.is_empty() {
                        row.remove(&cx);
                    }
                }
            }
            if row.is_empty() {
                self.rows.remove(&cy);
            }
        }
    }

    /// All distinct items whose box overlaps the given cell rectangle.
    ///
    /// Deduplicates items that appear in more than one cell.
    pub fn query_rect(&self, rect: &Rect) -> HashSet<Item> {
        let (cl, ct, cr, cb) = self.cell_range(rect);
        let mut out = HashSet::new();
        for cy in ct..=cb {
            let Some(row) = self.rows.get(&cy) else {
                continue;
            };
            for cx in cl..=cr {
                if let Some(cell) = row.get(&cx) {
                    out.extend(cell.iter().cloned());
                }
            }
        }
        out
    }

    /// All distinct items in the single cell containing the world point `(x, y)`.
    pub fn query_point(&self, x: f64, y: f64) -> HashSet<Item> {
        let (cx, cy) = self.cell_of(x, y);
        self.items_in_cell(cx, cy)
    }

    /// All distinct items in the cell at the given integer cell coordinates.
    pub fn items_in_cell(&self, cx: i64, cy: i64) -> HashSet<Item> {
        self.rows
            .get(&cy)
            .and_then(|row| row.get(&cx))
            .cloned()
            .unwrap_or_default()
    }

    /// Enumerate every cell coordinate a segment's interior touches, in
    /// traversal order from `(x1, y1)` toward `(x2, y2)`.
    ///
    /// Uses a digital differential analyzer (DDA): at each step, advances
    /// whichever axis has the smaller accumulated parameter. When both
    /// parameters tie exactly, both axes advance and the two off-diagonal
    /// cells adjacent to the jump are emitted as well, preserving the order
    /// in which a perfectly diagonal ray would touch every cell it grazes.
    /// A safety bound of twice the Manhattan distance in cells terminates
    /// the walk in degenerate floating-point cases.
    pub fn segment_cells(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<(i64, i64)> {
        let cs = self.cell_size;
        let (mut cx, mut cy) = self.cell_of(x1, y1);
        let (cx2, cy2) = self.cell_of(x2, y2);

        let vx = x2 - x1;
        let vy = y2 - y1;

        let (step_x, dx, mut tx) = Self::axis_step(cs, cx, x1, vx);
        let (step_y, dy, mut ty) = Self::axis_step(cs, cy, y1, vy);

        let mut out = Vec::new();
        out.push((cx, cy));

        let manhattan = (cx - cx2).abs() + (cy - cy2).abs();
        let mut budget = manhattan * 2;

        while (cx, cy) != (cx2, cy2) {
            if budget < 0 {
                break;
            }
            budget -= 1;

            match tx.partial_cmp(&ty) {
                Some(std::cmp::Ordering::Less) => {
                    cx += step_x;
                    tx += dx;
                }
                Some(std::cmp::Ordering::Greater) => {
                    cy += step_y;
                    ty += dy;
                }
                _ => {
                    // Exact tie: advance both axes, but emit the two
                    // off-diagonal cells a diagonal ray would graze first.
                    out.push((cx + step_x, cy));
                    out.push((cx, cy + step_y));
                    cx += step_x;
                    cy += step_y;
                    tx += dx;
                    ty += dy;
                }
            }
            out.push((cx, cy));
        }

        out
    }

    /// Per-axis DDA step: `(step, param_increment, param_to_first_crossing)`.
    fn axis_step(cell_size: f64, c0: i64, p1: f64, v: f64) -> (i64, f64, f64) {
        if v > 0.0 {
            let next_boundary = (c0 + 1) as f64 * cell_size;
            (1, cell_size / v, (next_boundary - p1) / v)
        } else if v < 0.0 {
            let next_boundary = c0 as f64 * cell_size;
            (-1, cell_size / -v, (next_boundary - p1) / v)
        } else {
            (0, f64::INFINITY, f64::INFINITY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_remove_is_indistinguishable_from_empty() {
        let mut grid: Grid<u32> = Grid::new(64.0);
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        grid.insert(1, &r);
        assert!(!grid.rows.is_empty());
        grid.remove(&1, &r);
        assert!(grid.rows.is_empty());
    }

    #[test]
    fn query_rect_dedups_large_items_spanning_many_cells() {
        let mut grid: Grid<u32> = Grid::new(10.0);
        let big = Rect::new(0.0, 0.0, 100.0, 10.0);
        grid.insert(1, &big);
        let hits = grid.query_rect(&Rect::new(0.0, 0.0, 100.0, 10.0));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn query_point_finds_single_cell_membership() {
        let mut grid: Grid<u32> = Grid::new(64.0);
        grid.insert(1, &Rect::new(0.0, 0.0, 10.0, 10.0));
        let hits = grid.query_point(5.0, 5.0);
        assert_eq!(hits.len(), 1);
        assert!(grid.query_point(200.0, 200.0).is_empty());
    }

    #[test]
    fn segment_cells_straight_horizontal_traversal() {
        let grid: Grid<u32> = Grid::new(10.0);
        let cells = grid.segment_cells(0.0, 5.0, 35.0, 5.0);
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn segment_cells_diagonal_tie_emits_off_diagonal_cells() {
        let grid: Grid<u32> = Grid::new(10.0);
        // A perfectly diagonal ray from one cell corner to another ties tx/ty at every step.
        let cells = grid.segment_cells(0.0, 0.0, 20.0, 20.0);
        assert_eq!(
            cells,
            vec![(0, 0), (1, 0), (0, 1), (1, 1), (2, 1), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn stats_counts_occupied_cells_and_memberships() {
        let mut grid: Grid<u32> = Grid::new(10.0);
        assert_eq!(grid.stats(), GridStats::default());

        // Spans columns 0..=1 in a single row: 2 occupied cells, 1 item each.
        grid.insert(1, &Rect::new(0.0, 0.0, 15.0, 5.0));
        assert_eq!(
            grid.stats(),
            GridStats {
                occupied_cells: 2,
                total_memberships: 2,
            }
        );

        // A second item sharing one of those cells adds one more membership
        // without adding an occupied cell.
        grid.insert(2, &Rect::new(5.0, 0.0, 1.0, 1.0));
        assert_eq!(
            grid.stats(),
            GridStats {
                occupied_cells: 2,
                total_memberships: 3,
            }
        );

        grid.remove(&1, &Rect::new(0.0, 0.0, 15.0, 5.0));
        grid.remove(&2, &Rect::new(5.0, 0.0, 1.0, 1.0));
        assert_eq!(grid.stats(), GridStats::default());
    }

    #[test]
    fn cell_range_half_open_membership_on_exact_boundary() {
        let grid: Grid<u32> = Grid::new(10.0);
        // A box of width exactly one cell, aligned to the grid, occupies only column 0.
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let (cl, ct, cr, cb) = grid.cell_range(&r);
        assert_eq!((cl, ct, cr, cb), (0, 0, 0, 0));
    }
}
