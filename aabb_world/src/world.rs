// Copyright 2025 the aabb-collide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`World`]: the facade coordinating the grid broad phase and the resolver.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use aabb_collision::{try_resolve, Collision};
use aabb_index::{liang_barsky, Grid, Rect};

use crate::error::WorldError;

/// Result type for fallible [`World`] operations.
pub type WorldResult<T, Item> = Result<T, WorldError<Item>>;

/// A single item reported by [`World::query_segment_with_coords`]: the world
/// coordinates and entry/exit parameters at which a segment crosses an
/// item's box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentHit<Item> {
    /// The item the segment crosses.
    pub item: Item,
    /// Entry parameter along the segment, in `[0, 1]`.
    pub ti1: f64,
    /// Exit parameter along the segment, in `[0, 1]`.
    pub ti2: f64,
    /// World-space point at `ti1`.
    pub entry: (f64, f64),
    /// World-space point at `ti2`.
    pub exit: (f64, f64),
}

/// Top-level facade owning the authoritative item-to-box mapping and the
/// uniform grid that indexes it.
///
/// `Item` is an opaque caller-supplied handle: the world never inspects it,
/// only stores and returns it. It must remain a stable identity for as long
/// as the item is present in the world.
#[derive(Debug)]
pub struct World<Item: Clone + Eq + Hash + Debug> {
    cell_size: f64,
    boxes: HashMap<Item, Rect>,
    grid: Grid<Item>,
}

impl<Item: Clone + Eq + Hash + Debug> World<Item> {
    /// Create a world with the given strictly-positive grid cell size.
    pub fn new(cell_size: f64) -> WorldResult<Self, Item> {
        if cell_size <= 0.0 {
            return Err(WorldError::NonPositiveCellSize(cell_size));
        }
        Ok(Self {
            cell_size,
            boxes: HashMap::new(),
            grid: Grid::new(cell_size),
        })
    }

    /// The world's immutable cell size.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Insert a new item with the given box. Rejects duplicate items and
    /// non-positive dimensions; leaves the world unchanged on error.
    #[tracing::instrument(level = "debug", skip(self), fields(occupied_cells, total_memberships))]
    pub fn add(&mut self, item: Item, l: f64, t: f64, w: f64, h: f64) -> WorldResult<(), Item> {
        if self.boxes.contains_key(&item) {
            return Err(WorldError::DuplicateItem(item));
        }
        if w <= 0.0 || h <= 0.0 {
            return Err(WorldError::NonPositiveDimension { width: w, height: h });
        }
        let rect = Rect::new(l, t, w, h);
        self.grid.insert(item.clone(), &rect);
        self.boxes.insert(item, rect);
        self.record_grid_stats();
        Ok(())
    }

    /// Remove an item. Rejects unknown items.
    #[tracing::instrument(level = "debug", skip(self), fields(occupied_cells, total_memberships))]
    pub fn remove(&mut self, item: &Item) -> WorldResult<(), Item> {
        let rect = self
            .boxes
            .remove(item)
            .ok_or_else(|| WorldError::UnknownItem(item.clone()))?;
        self.grid.remove(item, &rect);
        self.record_grid_stats();
        Ok(())
    }

    /// Record the grid's current occupancy on the active `tracing` span, for
    /// the `add`/`remove`/`move_item` instrumentation. `Grid::stats()` walks
    /// every occupied row, so this is skipped unless the span is actually
    /// being collected (e.g. no subscriber installed, or one filtering below
    /// `debug`) to keep the diagnostic from costing anything on the hot path.
    fn record_grid_stats(&self) {
        let span = tracing::Span::current();
        if !span.is_disabled() {
            let stats = self.grid.stats();
            span.record("occupied_cells", stats.occupied_cells)
                .record("total_memberships", stats.total_memberships);
        }
    }

    /// Replace an item's box entirely (remove then add), changing its
    /// dimensions as well as its position.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn teleport(&mut self, item: Item, l: f64, t: f64, w: f64, h: f64) -> WorldResult<(), Item> {
        self.remove(&item)?;
        self.add(item, l, t, w, h)
    }

    /// The current box of an item, as `(left, top, width, height)`. Fails if
    /// unknown.
    pub fn get_box(&self, item: &Item) -> WorldResult<(f64, f64, f64, f64), Item> {
        let r = self
            .boxes
            .get(item)
            .ok_or_else(|| WorldError::UnknownItem(item.clone()))?;
        Ok((r.left, r.top, r.width, r.height))
    }

    /// Broad phase plus resolver: candidates are every other item whose box
    /// overlaps the swept rectangle covering `item`'s current box and its
    /// target position, minus `item` itself, anything in `ignore`, and
    /// anything `filter` excludes. Does not mutate the world. Returns
    /// collisions sorted ascending by time of impact.
    #[tracing::instrument(level = "debug", skip(self, ignore, filter))]
    pub fn check(
        &self,
        item: &Item,
        future_l: f64,
        future_t: f64,
        ignore: &HashSet<Item>,
        filter: Option<&dyn Fn(&Item) -> bool>,
    ) -> WorldResult<Vec<Collision<Item>>, Item> {
        let item_box = *self
            .boxes
            .get(item)
            .ok_or_else(|| WorldError::UnknownItem(item.clone()))?;

        let swept = swept_rect(&item_box, future_l, future_t);
        let candidates = self.grid.query_rect(&swept);

        let mut hits = Vec::new();
        for other in candidates {
            if &other == item {
                continue;
            }
            if ignore.contains(&other) {
                continue;
            }
            if let Some(f) = filter
                && f(&other)
            {
                continue;
            }
            let Some(&other_box) = self.boxes.get(&other) else {
                continue;
            };
            if let Some(collision) = try_resolve(item.clone(), other, item_box, other_box, future_l, future_t) {
                hits.push(collision);
            }
        }

        hits.sort_by(|a, b| a.ti().partial_cmp(&b.ti()).expect("ti is never NaN"));
        Ok(hits)
    }

    /// Run [`check`](Self::check), then unconditionally relocate `item` to
    /// `(new_l, new_t)` in the grid regardless of whether any collision was
    /// found. Returns the sorted collision list from the check.
    #[tracing::instrument(level = "debug", skip(self, ignore, filter), fields(occupied_cells, total_memberships))]
    pub fn move_item(
        &mut self,
        item: &Item,
        new_l: f64,
        new_t: f64,
        ignore: &HashSet<Item>,
        filter: Option<&dyn Fn(&Item) -> bool>,
    ) -> WorldResult<Vec<Collision<Item>>, Item> {
        let collisions = self.check(item, new_l, new_t, ignore, filter)?;

        let old_box = *self.boxes.get(item).expect("checked to exist above");
        let new_box = Rect::new(new_l, new_t, old_box.width, old_box.height);
        self.grid.remove(item, &old_box);
        self.grid.insert(item.clone(), &new_box);
        self.boxes.insert(item.clone(), new_box);
        self.record_grid_stats();

        Ok(collisions)
    }

    /// Every item whose box overlaps `(l, t, w, h)` under precise
    /// rect-rect overlap (grid range query pre-filter, exact filter
    /// afterwards). Unspecified order.
    pub fn query_box(&self, l: f64, t: f64, w: f64, h: f64) -> HashSet<Item> {
        let rect = Rect::new(l, t, w, h);
        self.grid
            .query_rect(&rect)
            .into_iter()
            .filter(|i| self.boxes[i].overlaps(&rect))
            .collect()
    }

    /// Every item whose box contains `(x, y)` under the tolerant
    /// point-in-box test.
    pub fn query_point(&self, x: f64, y: f64) -> HashSet<Item> {
        self.grid
            .query_point(x, y)
            .into_iter()
            .filter(|i| self.boxes[i].contains_point(x, y))
            .collect()
    }

    /// Items a directed segment crosses, in traversal order from
    /// `(x1, y1)` to `(x2, y2)`.
    ///
    /// Candidates come from rasterizing the segment across grid cells; each
    /// is kept only if the bounded cast `[0, 1]` against its box finds an
    /// entry or exit strictly inside `(0, 1)`. The sort key is the entry
    /// parameter of the *unbounded* cast, so items whose box the infinite
    /// line crosses behind the segment's start still sort sensibly relative
    /// to each other.
    pub fn query_segment(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<Item> {
        self.query_segment_with_coords(x1, y1, x2, y2)
            .into_iter()
            .map(|hit| hit.item)
            .collect()
    }

    /// Same as [`query_segment`](Self::query_segment), but each result also
    /// carries the clipped entry/exit parameters and world-space points.
    pub fn query_segment_with_coords(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<SegmentHit<Item>> {
        let dx = x2 - x1;
        let dy = y2 - y1;

        let mut candidates = HashSet::new();
        for (cx, cy) in self.grid.segment_cells(x1, y1, x2, y2) {
            candidates.extend(self.grid.items_in_cell(cx, cy));
        }

        let mut hits: Vec<(f64, SegmentHit<Item>)> = Vec::new();
        for item in candidates {
            let Some(rect) = self.boxes.get(&item) else {
                continue;
            };
            let Some(bounded) = liang_barsky(rect, x1, y1, x2, y2, 0.0, 1.0) else {
                continue;
            };
            let in_range = (0.0 < bounded.ti1 && bounded.ti1 < 1.0) || (0.0 < bounded.ti2 && bounded.ti2 < 1.0);
            if !in_range {
                continue;
            }
            let weight = liang_barsky(rect, x1, y1, x2, y2, f64::NEG_INFINITY, f64::INFINITY)
                .map(|c| c.ti1)
                .unwrap_or(bounded.ti1);
            hits.push((
                weight,
                SegmentHit {
                    item,
                    ti1: bounded.ti1,
                    ti2: bounded.ti2,
                    entry: (x1 + dx * bounded.ti1, y1 + dy * bounded.ti1),
                    exit: (x1 + dx * bounded.ti2, y1 + dy * bounded.ti2),
                },
            ));
        }

        hits.sort_by(|a, b| a.0.partial_cmp(&b.0).expect("ti is never NaN"));
        hits.into_iter().map(|(_, hit)| hit).collect()
    }
}

fn swept_rect(current: &Rect, future_l: f64, future_t: f64) -> Rect {
    let l = current.left.min(future_l);
    let t = current.top.min(future_t);
    let r = current.right().max(future_l + current.width);
    let b = current.bottom().max(future_t + current.height);
    Rect::new(l, t, r - l, b - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World<&'static str> {
        World::new(64.0).unwrap()
    }

    #[test]
    fn scenario_1_empty_world_add_returns_no_collisions() {
        let mut w = world();
        w.add("x", 0.0, 0.0, 10.0, 10.0).unwrap();
        assert!(w.query_box(0.0, 0.0, 10.0, 10.0).contains("x"));
    }

    #[test]
    fn scenario_2_static_overlap_on_add_resolves_minimum_translation() {
        let mut w = world();
        w.add("a", 0.0, 0.0, 10.0, 10.0).unwrap();
        w.add("b", 4.0, 6.0, 10.0, 10.0).unwrap();
        let collisions = w.check(&"b", 4.0, 6.0, &HashSet::new(), None).unwrap();
        assert_eq!(collisions.len(), 1);
        let c = &collisions[0];
        assert!(c.is_intersection());
        let touch = c.touch();
        let dx = touch.x - 4.0;
        let dy = touch.y - 6.0;
        assert!((dx.abs() - 6.0).abs() < 1e-9 || (dy.abs() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn scenario_3_tunneling_along_x_matches_fixture() {
        let mut w = world();
        w.add("a", 1.0, 0.0, 2.0, 1.0).unwrap();
        w.add("b", 5.0, 0.0, 4.0, 1.0).unwrap();
        // B passes through the 2-unit gap to A's right, moving left.
        let collisions = w.check(&"b", -5.0, 0.0, &HashSet::new(), None).unwrap();
        assert_eq!(collisions.len(), 1);
        assert!(!collisions[0].is_intersection());
        assert!((collisions[0].ti() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn sort_order_with_multiple_tunneled_hits() {
        let mut w = world();
        w.add("a", 0.0, 0.0, 1.0, 1.0).unwrap();
        w.add("c", 5.0, 0.0, 1.0, 1.0).unwrap();
        w.add("b", 10.0, 0.0, 1.0, 1.0).unwrap();
        w.add("d", 15.0, 0.0, 1.0, 1.0).unwrap();
        let collisions = w.check(&"a", 20.0, 0.0, &HashSet::new(), None).unwrap();
        let order: Vec<&str> = collisions.iter().map(|c| c.other).collect();
        assert_eq!(order, vec!["c", "b", "d"]);
    }

    #[test]
    fn scenario_6_segment_query_ordering() {
        let mut w = world();
        w.add("a", 10.0, 0.0, 1.0, 10.0).unwrap();
        w.add("b", 20.0, 0.0, 1.0, 10.0).unwrap();
        let hits = w.query_segment(0.0, 5.0, 30.0, 5.0);
        assert_eq!(hits, vec!["a", "b"]);
    }

    #[test]
    fn move_unconditionally_relocates_even_with_collisions() {
        let mut w = world();
        w.add("a", 0.0, 0.0, 10.0, 10.0).unwrap();
        w.add("b", 100.0, 0.0, 10.0, 10.0).unwrap();
        let _ = w.move_item(&"b", 4.0, 6.0, &HashSet::new(), None).unwrap();
        let (l, t, _, _) = w.get_box(&"b").unwrap();
        assert_eq!((l, t), (4.0, 6.0));
    }

    #[test]
    fn add_rejects_duplicate_items() {
        let mut w = world();
        w.add("a", 0.0, 0.0, 1.0, 1.0).unwrap();
        assert!(matches!(
            w.add("a", 1.0, 1.0, 1.0, 1.0),
            Err(WorldError::DuplicateItem("a"))
        ));
    }

    #[test]
    fn add_rejects_non_positive_dimensions() {
        let mut w = world();
        assert!(matches!(
            w.add("a", 0.0, 0.0, 0.0, 1.0),
            Err(WorldError::NonPositiveDimension { .. })
        ));
    }

    #[test]
    fn operations_on_unknown_items_fail() {
        let w = world();
        assert!(matches!(w.get_box(&"ghost"), Err(WorldError::UnknownItem("ghost"))));
    }

    #[test]
    fn new_world_rejects_non_positive_cell_size() {
        assert!(matches!(
            World::<&str>::new(0.0),
            Err(WorldError::NonPositiveCellSize(_))
        ));
    }
}
