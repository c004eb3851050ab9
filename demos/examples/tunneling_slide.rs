// Copyright 2025 the aabb-collide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A box moving fast enough to tunnel through another in a single step;
//! resolve the collision with a slide response and move there instead.
//!
//! Run:
//! - `cargo run -p aabb_demos --example tunneling_slide`
//! - `RUST_LOG=debug cargo run -p aabb_demos --example tunneling_slide` to
//!   see the `World::add`/`check`/`move_item` instrumentation spans.

use std::collections::HashSet;

use aabb_world::World;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let mut world = World::new(64.0).expect("positive cell size");
    world.add("wall", 0.0, 0.0, 10.0, 10.0).unwrap();
    world.add("ball", 20.0, 0.0, 10.0, 10.0).unwrap();

    let ignore = HashSet::new();
    let collisions = world.move_item(&"ball", 5.0, 3.0, &ignore, None).unwrap();
    let hit = &collisions[0];
    println!("ball tunnels into wall at ti={:.3}", hit.ti());

    let slide = hit.slide();
    println!(
        "touch=({:.2}, {:.2}) normal={:?}, slide-to=({:.2}, {:.2})",
        slide.touch.x, slide.touch.y, slide.touch.normal, slide.x, slide.y
    );

    world.move_item(&"ball", slide.x, slide.y, &ignore, None).unwrap();
    let (l, t, _, _) = world.get_box(&"ball").unwrap();
    println!("ball settled at ({l:.2}, {t:.2})");
}
