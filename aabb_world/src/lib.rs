// Copyright 2025 the aabb-collide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=aabb_world --heading-base-level=0

//! A World facade over the uniform grid ([`aabb_index`]) and the swept-AABB
//! resolver ([`aabb_collision`]): add, remove, move, and query items.
//!
//! ## API overview
//!
//! - [`World`]: owns the authoritative item→box mapping and the grid.
//! - [`World::add`] / [`World::remove`] / [`World::teleport`]: lifecycle.
//! - [`World::check`]: broad phase plus resolver, no mutation.
//! - [`World::move_item`]: `check`, then unconditional relocation.
//! - [`World::get_box`] / [`World::query_box`] / [`World::query_point`] /
//!   [`World::query_segment`] / [`World::query_segment_with_coords`]: queries.
//! - [`WorldError`]: the fatal-error taxonomy every fallible operation returns.
//!
//! This crate is a pure geometric service: it has no game-object model, no
//! per-item response callbacks, and performs no physical simulation. Response
//! policy (touch, slide, bounce, or something bespoke) is for the caller to
//! derive from the [`aabb_collision::Collision`] values a check or move
//! returns.

mod error;
mod world;

pub use aabb_collision::{bounce, resolve, slide, touch, Bounce, Collision, Resolution, Slide, Touch};
pub use aabb_index::{Grid, Rect};
pub use error::WorldError;
pub use world::{SegmentHit, World, WorldResult};
