// Copyright 2025 the aabb-collide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Narrow-phase resolution: classify one candidate pair and derive response geometry.
//!
//! Per the "collision as value, not object" design: [`resolve`] and the response
//! helpers ([`touch`], [`slide`], [`bounce`]) are pure functions over a
//! [`Resolution`], not methods on a descriptor with mutable "not yet classified"
//! state. A [`Resolution`] only ever exists once a collision has actually been
//! found, so there is no "misuse before resolve" state to guard against.

use aabb_index::{liang_barsky, Normal, Rect};

/// Outcome of [`resolve`]: a classified collision between a moving box and a
/// stationary one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    /// `true` if the boxes were already overlapping at the start of the move
    /// (resolved via minimum-translation vector); `false` if the collision
    /// would occur partway through the attempted displacement (tunneling).
    pub is_intersection: bool,
    /// Time of impact. Negative (magnitude equal to overlap area) for
    /// intersections so they always sort before tunneling collisions
    /// (`ti` in `[0, 1)`). Never `>= 1`.
    pub ti: f64,
    /// Contact normal, outward from the stationary box. `(0, 0)` for a
    /// stationary intersection, where the normal is not yet determined at
    /// this stage.
    pub normal: Normal,
    /// The Minkowski difference `other - item`, kept so response helpers
    /// don't need to recompute it.
    pub minkowski: Rect,
}

#[inline]
fn sign(v: f64) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Classify the collision between `item_box` moving by `(vx, vy)` and a
/// stationary `other_box`. Returns `None` if no collision occurs during the
/// attempted displacement.
///
/// Case A (already intersecting): detected when the origin lies strictly
/// inside the Minkowski difference box. Resolved via the minimum-translation
/// vector — the real-box overlap area on each axis — with `ti` set to the
/// negative of that overlap area, so deeper intersections sort first and
/// always before any tunneling collision.
///
/// Case B (tunneling): the segment `(0,0) -> (vx,vy)` is cast against the
/// Minkowski box with an unbounded parameter interval (so normals come out).
/// A hit is only reported if the entry parameter is in `[0, 1)`, with the
/// boundary case `ti1 == 0` requiring a strictly positive exit parameter to
/// avoid calling a graze a collision.
pub fn resolve(item_box: &Rect, other_box: &Rect, vx: f64, vy: f64) -> Option<Resolution> {
    let minkowski = item_box.minkowski_diff(other_box);

    if minkowski.contains_point(0.0, 0.0) {
        let (px, py) = minkowski.nearest_corner(0.0, 0.0);
        let wi = item_box.width.min(px.abs());
        let hi = item_box.height.min(py.abs());
        return Some(Resolution {
            is_intersection: true,
            ti: -(wi * hi),
            normal: (0, 0),
            minkowski,
        });
    }

    let cast = liang_barsky(&minkowski, 0.0, 0.0, vx, vy, f64::NEG_INFINITY, f64::INFINITY)?;
    let tunneling = cast.ti1 < 1.0 && (cast.ti1 > 0.0 || (cast.ti1 == 0.0 && cast.ti2 > 0.0));
    if !tunneling {
        return None;
    }
    Some(Resolution {
        is_intersection: false,
        ti: cast.ti1,
        normal: cast.entry_normal,
        minkowski,
    })
}

/// The point and contact normal at which the moving box first touches the
/// other, given a [`Resolution`] already classified by [`resolve`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Touch {
    /// World-space x of the item's top-left at first touch.
    pub x: f64,
    /// World-space y of the item's top-left at first touch.
    pub y: f64,
    /// Contact normal, outward from the stationary box.
    pub normal: Normal,
}

/// Compute the touch point and normal for a resolved collision.
///
/// - Tunneling: the position at time of impact along the attempted
///   displacement, using the resolver's stored entry normal.
/// - Intersecting and stationary (`vx == vy == 0`): resolved via minimum
///   translation — the axis with the smaller overlap wins; an exact tie goes
///   to the y-axis (preserved exactly as documented, via `<` rather than `<=`).
/// - Intersecting and moving: the segment `(0,0) -> (vx,vy)` is cast against
///   the Minkowski box with interval `[-inf, 1]` to find the last moment
///   before now at which the boxes were not overlapping; the touch point uses
///   that cast's exit parameter and exit normal.
pub fn touch(item_box: &Rect, vx: f64, vy: f64, resolution: &Resolution) -> Touch {
    if !resolution.is_intersection {
        return Touch {
            x: item_box.left + vx * resolution.ti,
            y: item_box.top + vy * resolution.ti,
            normal: resolution.normal,
        };
    }

    if vx == 0.0 && vy == 0.0 {
        let (px, py) = resolution.minkowski.nearest_corner(0.0, 0.0);
        return if px.abs() < py.abs() {
            Touch {
                x: item_box.left + px,
                y: item_box.top,
                normal: (sign(px), 0),
            }
        } else {
            Touch {
                x: item_box.left,
                y: item_box.top + py,
                normal: (0, sign(py)),
            }
        };
    }

    let cast = liang_barsky(&resolution.minkowski, 0.0, 0.0, vx, vy, f64::NEG_INFINITY, 1.0)
        .expect("a box already classified as intersecting must re-cast successfully");
    Touch {
        x: item_box.left + vx * cast.ti2,
        y: item_box.top + vy * cast.ti2,
        normal: cast.exit_normal,
    }
}

/// Touch info plus the position obtained by sliding along the contact surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slide {
    /// The touch point and normal this slide is derived from.
    pub touch: Touch,
    /// Slide-corrected target x.
    pub x: f64,
    /// Slide-corrected target y.
    pub y: f64,
}

/// Compute the slide response: start at the touch position, then restore the
/// component of the originally requested target that is perpendicular to the
/// contact normal. With no attempted motion, the slide position equals touch.
pub fn slide(item_box: &Rect, future_l: f64, future_t: f64, vx: f64, vy: f64, resolution: &Resolution) -> Slide {
    let t = touch(item_box, vx, vy, resolution);
    if vx == 0.0 && vy == 0.0 {
        return Slide { touch: t, x: t.x, y: t.y };
    }
    let (x, y) = if t.normal.0 != 0 {
        (t.x, future_t)
    } else if t.normal.1 != 0 {
        (future_l, t.y)
    } else {
        (t.x, t.y)
    };
    Slide { touch: t, x, y }
}

/// Touch info plus the position obtained by bouncing off the contact surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounce {
    /// The touch point and normal this bounce is derived from.
    pub touch: Touch,
    /// Bounce-corrected target x.
    pub x: f64,
    /// Bounce-corrected target y.
    pub y: f64,
}

/// Compute the bounce response: from the touch position, reflect the
/// remaining displacement (`future - touch`) across the contact normal's
/// axis. With no attempted motion, the bounce position equals touch.
pub fn bounce(item_box: &Rect, future_l: f64, future_t: f64, vx: f64, vy: f64, resolution: &Resolution) -> Bounce {
    let t = touch(item_box, vx, vy, resolution);
    if vx == 0.0 && vy == 0.0 {
        return Bounce { touch: t, x: t.x, y: t.y };
    }
    let remaining_x = future_l - t.x;
    let remaining_y = future_t - t.y;
    let (x, y) = if t.normal.0 != 0 {
        (t.x - remaining_x, t.y + remaining_y)
    } else if t.normal.1 != 0 {
        (t.x + remaining_x, t.y - remaining_y)
    } else {
        (t.x, t.y)
    };
    Bounce { touch: t, x, y }
}
