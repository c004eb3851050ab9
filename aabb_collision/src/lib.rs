// Copyright 2025 the aabb-collide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=aabb_collision --heading-base-level=0

//! Swept-AABB collision descriptor and resolver.
//!
//! `aabb_collision` turns a candidate pair of overlapping boxes (as surfaced
//! by `aabb_index`'s [`Grid`](aabb_index::Grid)) into a classified
//! [`Collision`]: whether the pair was already intersecting or would collide
//! partway through an attempted move, the time of impact, the contact
//! normal, and the derived touch/slide/bounce response positions.
//!
//! The resolver is a pure function over box geometry and displacement
//! ([`resolve`]), not a stateful object — see [`resolver`] for the full
//! narrow-phase algorithm.

pub mod resolver;
pub mod types;

pub use resolver::{bounce, resolve, slide, touch, Bounce, Resolution, Slide, Touch};
pub use types::{try_resolve, Collision};
