// Copyright 2025 the aabb-collide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=aabb_index --heading-base-level=0

//! AABB geometry kernel and uniform spatial grid.
//!
//! `aabb_index` is the broad-phase and narrow-phase geometry vocabulary shared by
//! `aabb_collision` (the resolver) and `aabb_world` (the facade): a [`Rect`] type,
//! pure geometric predicates ([`Rect::contains_point`], [`Rect::overlaps`],
//! [`Rect::minkowski_diff`]), the generalized Liang–Barsky segment-vs-box cast
//! ([`liang_barsky`]), and the [`Grid`] uniform spatial index that narrows
//! "everything" down to "plausibly colliding" before the resolver runs.
//!
//! # Example
//!
//! ```rust
//! use aabb_index::{Grid, Rect};
//!
//! let mut grid: Grid<u32> = Grid::new(64.0);
//! grid.insert(1, &Rect::new(0.0, 0.0, 10.0, 10.0));
//! grid.insert(2, &Rect::new(5.0, 5.0, 15.0, 15.0));
//!
//! let hits = grid.query_point(6.0, 6.0);
//! assert_eq!(hits.len(), 2);
//! ```

pub mod geometry;
pub mod grid;

pub use geometry::{liang_barsky, Cast, Normal, Rect, EPSILON};
pub use grid::{Grid, GridStats};
