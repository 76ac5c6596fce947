// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-character fit profiles.
//!
//! A [`FitProfile`] records where a character's head and torso sit relative to
//! the canvas-center origin, measured against the 300 px sticker frame. The
//! [`FitTable`] maps character type ids to profiles and falls back to
//! [`DEFAULT_FIT`] for anything it does not know, so supporting a new
//! character is a data change rather than a code change.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// Target torso box for stretching tops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TorsoFit {
    /// Target width in pixels.
    pub width: f64,
    /// Target height in pixels.
    pub height: f64,
    /// Vertical offset of the torso from the canvas-center origin.
    pub y_offset: f64,
}

/// Head-mounted slot (hat or glasses).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadFit {
    /// Vertical offset from the canvas-center origin.
    pub y_offset: f64,
    /// Uniform scale applied to the sticker.
    pub scale: f64,
}

/// Placement constants for one character type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitProfile {
    /// Torso box, shared by every body-mounted category.
    pub torso: TorsoFit,
    /// Hat slot.
    pub hat: HeadFit,
    /// Glasses slot.
    pub glasses: HeadFit,
}

impl FitProfile {
    /// Builds a profile from raw constants: torso `(width, height, y)`, hat
    /// `(y, scale)`, glasses `(y, scale)`.
    #[must_use]
    pub const fn from_parts(torso: (f64, f64, f64), hat: (f64, f64), glasses: (f64, f64)) -> Self {
        Self {
            torso: TorsoFit {
                width: torso.0,
                height: torso.1,
                y_offset: torso.2,
            },
            hat: HeadFit {
                y_offset: hat.0,
                scale: hat.1,
            },
            glasses: HeadFit {
                y_offset: glasses.0,
                scale: glasses.1,
            },
        }
    }
}

/// Profile used for character types without an entry.
pub const DEFAULT_FIT: FitProfile =
    FitProfile::from_parts((240.0, 200.0, 50.0), (-100.0, 0.5), (-30.0, 0.5));

/// Profiles for the built-in animal characters.
pub const BUILTIN_FITS: [(&str, FitProfile); 12] = [
    // Wide and short.
    ("bear", FitProfile::from_parts((260.0, 200.0, 110.0), (-150.0, 0.5), (-50.0, 0.5))),
    // Thin and tall.
    ("bunny", FitProfile::from_parts((140.0, 180.0, 120.0), (-180.0, 0.4), (-40.0, 0.4))),
    ("cat", FitProfile::from_parts((160.0, 160.0, 110.0), (-140.0, 0.45), (-50.0, 0.45))),
    ("dog", FitProfile::from_parts((180.0, 170.0, 110.0), (-140.0, 0.48), (-55.0, 0.42))),
    ("mouse", FitProfile::from_parts((120.0, 120.0, 100.0), (-140.0, 0.35), (-40.0, 0.35))),
    ("lion", FitProfile::from_parts((250.0, 200.0, 110.0), (-150.0, 0.5), (-50.0, 0.5))),
    ("tiger", FitProfile::from_parts((250.0, 200.0, 110.0), (-150.0, 0.5), (-50.0, 0.5))),
    // Head sits very high.
    ("giraffe", FitProfile::from_parts((160.0, 250.0, 150.0), (-220.0, 0.45), (-120.0, 0.45))),
    ("monkey", FitProfile::from_parts((150.0, 180.0, 110.0), (-140.0, 0.45), (-55.0, 0.4))),
    ("capybara", FitProfile::from_parts((220.0, 160.0, 110.0), (-120.0, 0.5), (-50.0, 0.5))),
    ("owl", FitProfile::from_parts((160.0, 160.0, 130.0), (-130.0, 0.4), (-50.0, 0.4))),
    ("penguin", FitProfile::from_parts((180.0, 220.0, 120.0), (-140.0, 0.42), (-60.0, 0.4))),
];

/// Character type id → [`FitProfile`] mapping with a fallback entry.
#[derive(Clone, Debug)]
pub struct FitTable {
    profiles: BTreeMap<String, FitProfile>,
    fallback: FitProfile,
}

impl FitTable {
    /// Creates a table with no entries; every lookup yields `fallback`.
    #[must_use]
    pub const fn empty(fallback: FitProfile) -> Self {
        Self {
            profiles: BTreeMap::new(),
            fallback,
        }
    }

    /// Creates a table holding [`BUILTIN_FITS`] with [`DEFAULT_FIT`] as
    /// fallback.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::empty(DEFAULT_FIT);
        for (id, profile) in BUILTIN_FITS {
            table.insert(id, profile);
        }
        table
    }

    /// Adds or replaces the profile for `character`.
    pub fn insert(&mut self, character: &str, profile: FitProfile) {
        self.profiles.insert(String::from(character), profile);
    }

    /// Resolves the profile for `character`, falling back to the default.
    #[must_use]
    pub fn resolve(&self, character: &str) -> &FitProfile {
        self.profiles.get(character).unwrap_or(&self.fallback)
    }

    /// Returns whether `character` has its own entry.
    #[must_use]
    pub fn contains(&self, character: &str) -> bool {
        self.profiles.contains_key(character)
    }

    /// Returns the fallback profile.
    #[must_use]
    pub const fn fallback(&self) -> &FitProfile {
        &self.fallback
    }
}

impl Default for FitTable {
    fn default() -> Self {
        Self::builtin()
    }
}
