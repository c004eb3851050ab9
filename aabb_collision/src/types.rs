// Copyright 2025 the aabb-collide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Collision`] descriptor: a plain-data record binding one moving item
//! to one stationary item it was found to collide with.

use aabb_index::Rect;

use crate::resolver::{self, Bounce, Resolution, Slide, Touch};

/// A single resolved collision between a moving `item` and a stationary
/// `other`, produced by [`try_resolve`].
///
/// Unlike a mutable descriptor that starts unresolved and is classified in a
/// second step, a `Collision` only exists once [`resolve`](resolver::resolve)
/// has already found a hit — there is no "query a field before resolving"
/// state to misuse.
#[derive(Clone, Debug, PartialEq)]
pub struct Collision<Item> {
    /// The item that was moving.
    pub item: Item,
    /// The stationary item it collided with.
    pub other: Item,
    /// `item`'s box at the start of the attempted move.
    pub item_box: Rect,
    /// `other`'s box (stationary for the duration of this move).
    pub other_box: Rect,
    /// `item`'s box's requested left coordinate after the move.
    pub future_l: f64,
    /// `item`'s box's requested top coordinate after the move.
    pub future_t: f64,
    /// The classification produced by the resolver.
    pub resolution: Resolution,
}

impl<Item> Collision<Item> {
    /// Attempted x displacement, `future_l - item_box.left`.
    pub fn vx(&self) -> f64 {
        self.future_l - self.item_box.left
    }

    /// Attempted y displacement, `future_t - item_box.top`.
    pub fn vy(&self) -> f64 {
        self.future_t - self.item_box.top
    }

    /// Time of impact. Negative for an already-overlapping pair, in `[0, 1)`
    /// for a pair that would collide partway through the attempted move.
    pub fn ti(&self) -> f64 {
        self.resolution.ti
    }

    /// `true` if `item` and `other` already overlapped before the move.
    pub fn is_intersection(&self) -> bool {
        self.resolution.is_intersection
    }

    /// The point and normal at which `item` first touches `other`.
    pub fn touch(&self) -> Touch {
        resolver::touch(&self.item_box, self.vx(), self.vy(), &self.resolution)
    }

    /// Touch position plus the position reached by sliding along the contact
    /// surface toward the originally requested target.
    pub fn slide(&self) -> Slide {
        resolver::slide(
            &self.item_box,
            self.future_l,
            self.future_t,
            self.vx(),
            self.vy(),
            &self.resolution,
        )
    }

    /// Touch position plus the position reached by bouncing the remaining
    /// displacement off the contact surface.
    pub fn bounce(&self) -> Bounce {
        resolver::bounce(
            &self.item_box,
            self.future_l,
            self.future_t,
            self.vx(),
            self.vy(),
            &self.resolution,
        )
    }
}

/// Construct and classify a `Collision` in one step. Returns `None` if `item`
/// moving from `item_box` to `(future_l, future_t)` never meets `other_box`.
pub fn try_resolve<Item>(
    item: Item,
    other: Item,
    item_box: Rect,
    other_box: Rect,
    future_l: f64,
    future_t: f64,
) -> Option<Collision<Item>> {
    let vx = future_l - item_box.left;
    let vy = future_t - item_box.top;
    let resolution = resolver::resolve(&item_box, &other_box, vx, vy)?;
    Some(Collision {
        item,
        other,
        item_box,
        other_box,
        future_l,
        future_t,
        resolution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_resolve_reports_none_when_boxes_never_meet() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(100.0, 100.0, 1.0, 1.0);
        assert!(try_resolve("a", "b", a, b, 0.0, 0.0).is_none());
    }

    #[test]
    fn try_resolve_exposes_derived_vx_vy() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(4.0, 6.0, 10.0, 10.0);
        let c = try_resolve("a", "b", a, b, 0.0, 0.0).expect("overlapping boxes collide");
        assert_eq!(c.vx(), 0.0);
        assert_eq!(c.vy(), 0.0);
        assert!(c.is_intersection());
    }
}
