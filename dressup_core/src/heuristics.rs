// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Initial placement of newly added accessories.
//!
//! Where an accessory first lands depends on two pieces of data: the
//! character's [`FitProfile`] and the category's [`PlacementRule`]. Rules live
//! in the static [`PLACEMENT_RULES`] table indexed by
//! [`Category::index`](crate::category::Category::index); profiles live in a
//! [`FitTable`]. Neither dispatches on character identity, so new characters
//! and retuned categories are pure data edits.
//!
//! Every new placement is horizontally centered (`x = Cx`) and unrotated.

use kurbo::Vec2;

use crate::category::Category;
use crate::fit::{FitProfile, FitTable};
use crate::placement::{CanvasConfig, Placement};

/// Width of the canonical top asset at unit scale, in pixels.
pub const REFERENCE_TOP_WIDTH: f64 = 240.0;

/// Height of the canonical top asset at unit scale, in pixels.
pub const REFERENCE_TOP_HEIGHT: f64 = 200.0;

/// How a category derives its initial scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleRule {
    /// Uniform scale from the profile's hat slot.
    Hat,
    /// Uniform scale from the profile's glasses slot.
    Glasses,
    /// Non-uniform stretch of the reference top onto the profile's torso box.
    FitTorso,
    /// Fixed uniform scale, independent of the character.
    Uniform(f64),
}

impl ScaleRule {
    /// Resolves `(scale_x, scale_y)` against a profile.
    #[must_use]
    pub fn resolve(self, profile: &FitProfile) -> (f64, f64) {
        match self {
            Self::Hat => (profile.hat.scale, profile.hat.scale),
            Self::Glasses => (profile.glasses.scale, profile.glasses.scale),
            Self::FitTorso => (
                profile.torso.width / REFERENCE_TOP_WIDTH,
                profile.torso.height / REFERENCE_TOP_HEIGHT,
            ),
            Self::Uniform(s) => (s, s),
        }
    }
}

/// How a category derives its vertical offset from the canvas-center origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorRule {
    /// The profile's hat offset.
    Hat,
    /// The profile's glasses offset.
    Glasses,
    /// The profile's torso offset plus a fixed delta.
    Torso(f64),
}

impl AnchorRule {
    /// Resolves the vertical offset against a profile.
    #[must_use]
    pub fn y_offset(self, profile: &FitProfile) -> f64 {
        match self {
            Self::Hat => profile.hat.y_offset,
            Self::Glasses => profile.glasses.y_offset,
            Self::Torso(delta) => profile.torso.y_offset + delta,
        }
    }
}

/// Initial-placement policy for one category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementRule {
    /// Scale policy.
    pub scale: ScaleRule,
    /// Vertical anchor policy.
    pub anchor: AnchorRule,
}

/// Placement policy per category, in [`Category::ALL`] order.
pub const PLACEMENT_RULES: [PlacementRule; Category::COUNT] = [
    // Hat
    PlacementRule {
        scale: ScaleRule::Hat,
        anchor: AnchorRule::Hat,
    },
    // Glasses
    PlacementRule {
        scale: ScaleRule::Glasses,
        anchor: AnchorRule::Glasses,
    },
    // Jewelry: neck area.
    PlacementRule {
        scale: ScaleRule::Uniform(0.4),
        anchor: AnchorRule::Torso(-30.0),
    },
    // Neckwear: slightly lower on the neck.
    PlacementRule {
        scale: ScaleRule::Uniform(0.4),
        anchor: AnchorRule::Torso(-20.0),
    },
    // Top
    PlacementRule {
        scale: ScaleRule::FitTorso,
        anchor: AnchorRule::Torso(0.0),
    },
    // Bottoms: lower body.
    PlacementRule {
        scale: ScaleRule::Uniform(0.5),
        anchor: AnchorRule::Torso(100.0),
    },
    // Shoes: feet.
    PlacementRule {
        scale: ScaleRule::Uniform(0.4),
        anchor: AnchorRule::Torso(180.0),
    },
];

/// Returns the rule for `category`.
#[inline]
#[must_use]
pub const fn rule_for(category: Category) -> &'static PlacementRule {
    &PLACEMENT_RULES[category.index()]
}

/// Computes the initial placement of `category` on a character described by
/// `profile`.
#[must_use]
pub fn initial_placement(
    profile: &FitProfile,
    category: Category,
    canvas: &CanvasConfig,
) -> Placement {
    let rule = rule_for(category);
    let (scale_x, scale_y) = rule.scale.resolve(profile);
    let origin = canvas.at_offset(Vec2::new(0.0, rule.anchor.y_offset(profile)));
    Placement::new(origin.x, origin.y, scale_x, scale_y, 0.0)
}

/// Fit-table lookup combined with the per-category rules.
#[derive(Clone, Debug, Default)]
pub struct PlacementHeuristics {
    fits: FitTable,
    canvas: CanvasConfig,
}

impl PlacementHeuristics {
    /// Creates heuristics over the given table and canvas.
    #[must_use]
    pub const fn new(fits: FitTable, canvas: CanvasConfig) -> Self {
        Self { fits, canvas }
    }

    /// Computes where a new `category` accessory lands on `character`.
    ///
    /// Unknown character ids use the table's fallback profile.
    #[must_use]
    pub fn initial_transform(&self, character: &str, category: Category) -> Placement {
        initial_placement(self.fits.resolve(character), category, &self.canvas)
    }

    /// Returns the fit table.
    #[must_use]
    pub const fn fits(&self) -> &FitTable {
        &self.fits
    }

    /// Returns the fit table for extension.
    pub fn fits_mut(&mut self) -> &mut FitTable {
        &mut self.fits
    }

    /// Returns the canvas geometry.
    #[must_use]
    pub const fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;
    use crate::fit::DEFAULT_FIT;

    const EPS: f64 = 1e-12;

    fn heuristics() -> PlacementHeuristics {
        let canvas = CanvasConfig {
            center: Point::new(100.0, 300.0),
            ..CanvasConfig::DEFAULT
        };
        PlacementHeuristics::new(FitTable::builtin(), canvas)
    }

    #[test]
    fn rules_follow_category_index() {
        assert_eq!(rule_for(Category::Hat).scale, ScaleRule::Hat);
        assert_eq!(rule_for(Category::Top).scale, ScaleRule::FitTorso);
        assert_eq!(rule_for(Category::Shoes).anchor, AnchorRule::Torso(180.0));
    }

    #[test]
    fn bear_hat() {
        let p = heuristics().initial_transform("bear", Category::Hat);
        assert_eq!(p, Placement::new(100.0, 150.0, 0.5, 0.5, 0.0));
    }

    #[test]
    fn top_stretches_to_torso() {
        let p = heuristics().initial_transform("bunny", Category::Top);
        assert!((p.scale_x - 140.0 / 240.0).abs() < EPS);
        assert!((p.scale_y - 180.0 / 200.0).abs() < EPS);
        assert_eq!(p.y, 300.0 + 120.0);
    }

    #[test]
    fn body_categories_hang_off_torso() {
        let h = heuristics();
        // Bear torso sits at +110.
        let cases = [
            (Category::Jewelry, 80.0, 0.4),
            (Category::Neckwear, 90.0, 0.4),
            (Category::Bottoms, 210.0, 0.5),
            (Category::Shoes, 290.0, 0.4),
        ];
        for (category, offset, scale) in cases {
            let p = h.initial_transform("bear", category);
            assert_eq!(p.y, 300.0 + offset, "{category} offset");
            assert_eq!((p.scale_x, p.scale_y), (scale, scale), "{category} scale");
        }
    }

    #[test]
    fn every_category_is_centered_and_unrotated() {
        let h = heuristics();
        for category in Category::ALL {
            let p = h.initial_transform("owl", category);
            assert_eq!(p.x, 100.0, "{category} x");
            assert_eq!(p.rotation, 0.0, "{category} rotation");
        }
    }

    #[test]
    fn unknown_character_uses_default_profile() {
        let h = heuristics();
        for category in Category::ALL {
            assert_eq!(
                h.initial_transform("unknown_character", category),
                initial_placement(&DEFAULT_FIT, category, h.canvas()),
            );
        }
        let hat = h.initial_transform("unknown_character", Category::Hat);
        assert_eq!(hat, Placement::new(100.0, 200.0, 0.5, 0.5, 0.0));
    }

    #[test]
    fn default_top_is_unit_scale() {
        // The default torso matches the reference top exactly.
        let p = initial_placement(&DEFAULT_FIT, Category::Top, &CanvasConfig::DEFAULT);
        assert_eq!((p.scale_x, p.scale_y), (1.0, 1.0));
    }
}
