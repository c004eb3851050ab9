// Copyright 2025 the aabb-collide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A ray crossing two boxes, reported in traversal order with entry/exit
//! parameters and world-space crossing points.
//!
//! Run:
//! - `cargo run -p aabb_demos --example segment_query`
//! - `RUST_LOG=debug cargo run -p aabb_demos --example segment_query` to see
//!   the `World::add` instrumentation spans.

use aabb_world::World;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let mut world = World::new(64.0).expect("positive cell size");
    world.add("a", 10.0, 0.0, 1.0, 10.0).unwrap();
    world.add("b", 20.0, 0.0, 1.0, 10.0).unwrap();

    for hit in world.query_segment_with_coords(0.0, 5.0, 30.0, 5.0) {
        println!(
            "{}: ti1={:.3} ti2={:.3} entry={:?} exit={:?}",
            hit.item, hit.ti1, hit.ti2, hit.entry, hit.exit
        );
    }
}
