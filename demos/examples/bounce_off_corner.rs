// Copyright 2025 the aabb-collide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bouncing a fast-moving box off a stationary one, reflecting the
//! remaining displacement across the contact normal's axis.
//!
//! Run:
//! - `cargo run -p aabb_demos --example bounce_off_corner`
//! - `RUST_LOG=debug cargo run -p aabb_demos --example bounce_off_corner` to
//!   see the `World::add`/`check` instrumentation spans.

use std::collections::HashSet;

use aabb_world::World;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let mut world = World::new(64.0).expect("positive cell size");
    world.add("obstacle", 0.0, 0.0, 10.0, 10.0).unwrap();
    world.add("puck", 30.0, 4.0, 10.0, 10.0).unwrap();

    let collisions = world.check(&"puck", -5.0, 4.0, &HashSet::new(), None).unwrap();
    let hit = &collisions[0];
    let bounce = hit.bounce();
    println!(
        "puck hits obstacle: touch=({:.2}, {:.2}) normal={:?}, bounce-to=({:.2}, {:.2})",
        bounce.touch.x, bounce.touch.y, bounce.touch.normal, bounce.x, bounce.y
    );
}
