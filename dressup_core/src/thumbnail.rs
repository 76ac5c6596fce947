// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection of full-canvas placements into gallery thumbnails.
//!
//! A thumbnail of edge `T` shows the composition shrunk by `k = T / R`, where
//! `R` is the reference content size. Offsets from the canvas-center origin
//! shrink by `k`, and the origin itself maps to the corner where a full-size
//! sticker shrunk by `k` about its own center sits centered in the thumbnail:
//!
//! ```text
//! thumb_x = (T/2 − S/2) + (x − Cx)·k
//! thumb_y = (T/2 − S/2) + (y − Cy)·k
//! ```
//!
//! Rotation is scale-invariant and passes through unchanged.

use kurbo::Point;

use crate::placement::{CanvasConfig, Placement};

/// Canonical full-size content bounds used to derive the thumbnail scale.
pub const DEFAULT_REFERENCE_SIZE: f64 = 350.0;

/// Edge length of gallery thumbnails.
pub const DEFAULT_THUMBNAIL_SIZE: f64 = 100.0;

/// Maps full-canvas placements into thumbnail space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbnailProjector {
    /// Full-canvas center origin `(Cx, Cy)`.
    pub canvas_center: Point,
    /// Sticker frame edge length `S`.
    pub sticker_size: f64,
    /// Reference content size `R`.
    pub reference_size: f64,
}

impl ThumbnailProjector {
    /// Creates a projector for `canvas` with the default reference size.
    #[must_use]
    pub const fn new(canvas: &CanvasConfig) -> Self {
        Self {
            canvas_center: canvas.center,
            sticker_size: canvas.sticker_size,
            reference_size: DEFAULT_REFERENCE_SIZE,
        }
    }

    /// Returns a copy with a different reference content size.
    #[must_use]
    pub const fn with_reference_size(self, reference_size: f64) -> Self {
        Self {
            reference_size,
            ..self
        }
    }

    /// Scale factor `k` for a thumbnail of edge `size`.
    #[inline]
    #[must_use]
    pub fn scale_factor(&self, size: f64) -> f64 {
        size / self.reference_size
    }

    /// Thumbnail-space position of the canvas-center origin.
    #[inline]
    #[must_use]
    pub fn origin(&self, size: f64) -> Point {
        let o = size / 2.0 - self.sticker_size / 2.0;
        Point::new(o, o)
    }

    /// Projects a full-canvas placement into a thumbnail of edge `size`.
    #[must_use]
    pub fn project(&self, placement: &Placement, size: f64) -> Placement {
        let k = self.scale_factor(size);
        let origin = self.origin(size);
        Placement {
            x: origin.x + (placement.x - self.canvas_center.x) * k,
            y: origin.y + (placement.y - self.canvas_center.y) * k,
            scale_x: placement.scale_x * k,
            scale_y: placement.scale_y * k,
            rotation: placement.rotation,
        }
    }
}

impl Default for ThumbnailProjector {
    fn default() -> Self {
        Self::new(&CanvasConfig::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn projector() -> ThumbnailProjector {
        ThumbnailProjector {
            canvas_center: Point::new(110.0, 325.0),
            sticker_size: 300.0,
            reference_size: 350.0,
        }
    }

    /// Algebraic inverse of [`ThumbnailProjector::project`].
    fn unproject(p: &ThumbnailProjector, thumb: &Placement, size: f64) -> Placement {
        let k = p.scale_factor(size);
        let origin = p.origin(size);
        Placement {
            x: p.canvas_center.x + (thumb.x - origin.x) / k,
            y: p.canvas_center.y + (thumb.y - origin.y) / k,
            scale_x: thumb.scale_x / k,
            scale_y: thumb.scale_y / k,
            rotation: thumb.rotation,
        }
    }

    #[test]
    fn center_maps_to_thumbnail_origin() {
        for (size, sticker) in [(100.0, 300.0), (64.0, 128.0), (350.0, 300.0), (1.0, 0.0)] {
            let p = ThumbnailProjector {
                sticker_size: sticker,
                ..projector()
            };
            let at_center = Placement::new(110.0, 325.0, 0.7, 0.3, 0.2);
            let t = p.project(&at_center, size);
            let expected = size / 2.0 - sticker / 2.0;
            assert_eq!((t.x, t.y), (expected, expected), "T={size} S={sticker}");
        }
    }

    #[test]
    fn offsets_and_scale_shrink_by_k() {
        let p = projector();
        let t = p.project(&Placement::new(110.0 + 35.0, 325.0 - 70.0, 0.5, -0.5, 1.25), 100.0);
        assert!((t.x - (-100.0 + 10.0)).abs() < EPS);
        assert!((t.y - (-100.0 - 20.0)).abs() < EPS);
        assert!((t.scale_x - 0.5 / 3.5).abs() < EPS);
        assert!((t.scale_y + 0.5 / 3.5).abs() < EPS);
        assert_eq!(t.rotation, 1.25);
    }

    #[test]
    fn reference_sized_thumbnail_is_translation_only() {
        let p = projector();
        let src = Placement::new(17.0, 400.0, 0.4, 0.6, -0.3);
        let t = p.project(&src, 350.0);
        assert_eq!((t.scale_x, t.scale_y), (0.4, 0.6));
        assert!((t.x - (25.0 + (17.0 - 110.0))).abs() < EPS);
    }

    #[test]
    fn inverse_recovers_source() {
        let p = projector().with_reference_size(420.0);
        let src = Placement::new(-12.5, 812.0, 1.3, 0.45, 3.0);
        let back = unproject(&p, &p.project(&src, 90.0), 90.0);
        assert!((back.x - src.x).abs() < EPS);
        assert!((back.y - src.y).abs() < EPS);
        assert!((back.scale_x - src.scale_x).abs() < EPS);
        assert!((back.scale_y - src.scale_y).abs() < EPS);
        assert_eq!(back.rotation, src.rotation);
    }
}
