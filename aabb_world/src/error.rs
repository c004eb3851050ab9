// Copyright 2025 the aabb-collide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`WorldError`] taxonomy: every fatal error kind a [`World`](crate::World)
//! operation can report. All are fatal to the calling operation — there is no
//! retry or partial completion, and the world's state is left unchanged.

use core::fmt::Debug;

/// Errors reported by [`World`](crate::World) operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WorldError<Item: Debug> {
    /// `add` was called with an item already present in the world.
    #[error("item {0:?} is already in the world")]
    DuplicateItem(Item),
    /// `add` or `teleport` was called with a non-positive width or height.
    #[error("box dimensions must be strictly positive, got width={width}, height={height}")]
    NonPositiveDimension {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },
    /// The world was constructed with a non-positive cell size.
    #[error("cell size must be strictly positive, got {0}")]
    NonPositiveCellSize(f64),
    /// `move_item`, `remove`, `check`, `teleport`, or `get_box` was called
    /// with an item not present in the world.
    #[error("item {0:?} is not in the world")]
    UnknownItem(Item),
}
