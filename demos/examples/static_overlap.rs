// Copyright 2025 the aabb-collide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two boxes placed overlapping. Checking a move back to the same position
//! resolves via minimum translation rather than a time-of-impact.
//!
//! Run:
//! - `cargo run -p aabb_demos --example static_overlap`
//! - `RUST_LOG=debug cargo run -p aabb_demos --example static_overlap` to see
//!   the `World::add`/`check` instrumentation spans.

use std::collections::HashSet;

use aabb_world::World;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let mut world = World::new(64.0).expect("positive cell size");
    world.add("a", 0.0, 0.0, 10.0, 10.0).unwrap();
    world.add("b", 4.0, 6.0, 10.0, 10.0).unwrap();

    let collisions = world.check(&"b", 4.0, 6.0, &HashSet::new(), None).unwrap();
    let hit = &collisions[0];
    let touch = hit.touch();
    println!(
        "b overlaps a: ti={:.3} touch=({:.1}, {:.1}) normal={:?}",
        hit.ti(),
        touch.x,
        touch.y,
        touch.normal
    );
}
