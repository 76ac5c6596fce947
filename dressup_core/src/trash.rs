// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-delete geometry.
//!
//! A [`TrashZone`] is a circle on screen. A dragged sticker is judged by its
//! frame *center*, which is `S/2` right of and below the proposed top-left
//! corner. Two radii are tracked independently:
//!
//! - [`hit_radius`](TrashZone::hit_radius) decides deletion on release
//!   ([`should_delete`](TrashZone::should_delete)).
//! - [`visual_radius`](TrashZone::visual_radius) drives live hover feedback
//!   while dragging ([`shows_feedback`](TrashZone::shows_feedback)).
//!
//! Both comparisons are strict: a center exactly on the boundary is outside.
//! Every query is a pure function of its input and may be called on every
//! drag tick.

use kurbo::{Point, Vec2};

use crate::placement::STICKER_SIZE;

/// Circular delete target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrashZone {
    /// Center of the zone in canvas coordinates.
    pub center: Point,
    /// Release inside this distance deletes the sticker.
    pub hit_radius: f64,
    /// Hover feedback threshold.
    pub visual_radius: f64,
    /// Sticker frame edge length, used to find the dragged center.
    pub sticker_size: f64,
}

impl TrashZone {
    /// Zone under the trash button of the standard layout.
    pub const DEFAULT: Self = Self {
        center: Point::new(194.0, 155.0),
        hit_radius: 100.0,
        visual_radius: 80.0,
        sticker_size: STICKER_SIZE,
    };

    /// Returns the sticker frame center for a proposed top-left corner.
    #[inline]
    #[must_use]
    pub fn sticker_center(&self, proposed: Point) -> Point {
        let half = self.sticker_size / 2.0;
        proposed + Vec2::new(half, half)
    }

    /// Distance from the zone center to the sticker center.
    #[inline]
    #[must_use]
    pub fn distance(&self, proposed: Point) -> f64 {
        self.sticker_center(proposed).distance(self.center)
    }

    /// Would releasing a sticker at `proposed` delete it?
    #[inline]
    #[must_use]
    pub fn should_delete(&self, proposed: Point) -> bool {
        self.distance(proposed) < self.hit_radius
    }

    /// Should the presentation layer show trash hover feedback for a sticker
    /// currently dragged to `proposed`?
    #[inline]
    #[must_use]
    pub fn shows_feedback(&self, proposed: Point) -> bool {
        self.distance(proposed) < self.visual_radius
    }

    /// Returns the top-left corner that puts a sticker's center on the zone
    /// center.
    #[must_use]
    pub fn dead_center(&self) -> Point {
        let half = self.sticker_size / 2.0;
        self.center - Vec2::new(half, half)
    }
}

impl Default for TrashZone {
    fn default() -> Self {
        Self::DEFAULT
    }
}
