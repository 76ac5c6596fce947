// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessory placement on the composition canvas.
//!
//! A [`Placement`] is the decomposed 2-D transform of one sticker: the
//! top-left corner of its square frame, a non-uniform scale, and a rotation
//! in radians. Scale and rotation pivot around the frame center, matching how
//! the presentation layer draws stickers.

use kurbo::{Affine, Point, Vec2};

/// Edge length of the square frame every accessory sticker is drawn in.
pub const STICKER_SIZE: f64 = 300.0;

/// Decomposed transform of one sticker.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Left edge of the sticker frame.
    pub x: f64,
    /// Top edge of the sticker frame.
    pub y: f64,
    /// Horizontal scale. Negative values mirror the sticker.
    pub scale_x: f64,
    /// Vertical scale.
    pub scale_y: f64,
    /// Rotation in radians around the frame center.
    pub rotation: f64,
}

impl Placement {
    /// Unscaled, unrotated placement at the canvas origin.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
        rotation: 0.0,
    };

    /// Creates a placement from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, scale_x: f64, scale_y: f64, rotation: f64) -> Self {
        Self {
            x,
            y,
            scale_x,
            scale_y,
            rotation,
        }
    }

    /// Returns the frame's top-left corner.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns a copy moved so its top-left corner is at `p`.
    #[inline]
    #[must_use]
    pub const fn with_position(self, p: Point) -> Self {
        Self {
            x: p.x,
            y: p.y,
            ..self
        }
    }

    /// Returns a horizontally mirrored copy (`scale_x` negated).
    #[inline]
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self {
            scale_x: -self.scale_x,
            ..self
        }
    }

    /// Converts to an affine map from sticker-local coordinates (a
    /// `sticker_size` square with its origin at the top-left) to canvas
    /// coordinates.
    #[must_use]
    pub fn to_affine(&self, sticker_size: f64) -> Affine {
        let pivot = Vec2::new(sticker_size / 2.0, sticker_size / 2.0);
        Affine::translate(Vec2::new(self.x, self.y) + pivot)
            * Affine::scale_non_uniform(self.scale_x, self.scale_y)
            * Affine::rotate(self.rotation)
            * Affine::translate(-pivot)
    }

    /// Is every component [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.scale_x.is_finite()
            && self.scale_y.is_finite()
            && self.rotation.is_finite()
    }
}

impl Default for Placement {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Geometry of the composition canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasConfig {
    /// Canvas-center origin `(Cx, Cy)`: the top-left corner a sticker takes
    /// when it sits horizontally centered on the character.
    pub center: Point,
    /// Sticker frame edge length.
    pub sticker_size: f64,
}

impl CanvasConfig {
    /// Canvas for a 390×844 window.
    pub const DEFAULT: Self = Self::from_window(390.0, 844.0);

    /// Derives the canvas center from the window size.
    ///
    /// The display area spans 95% of the window, and the origin is offset by
    /// half of the 150 px character frame.
    #[must_use]
    pub const fn from_window(width: f64, height: f64) -> Self {
        Self {
            center: Point::new(width * 0.95 / 2.0 - 75.0, height * 0.95 / 2.0 - 75.0),
            sticker_size: STICKER_SIZE,
        }
    }

    /// Converts an offset from the canvas-center origin into an absolute
    /// position.
    #[inline]
    #[must_use]
    pub fn at_offset(&self, offset: Vec2) -> Point {
        self.center + offset
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
