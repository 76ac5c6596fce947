// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessory slot types.
//!
//! Every placed accessory belongs to exactly one [`Category`]. Paint order is
//! fixed by category ([`Category::RENDER_ORDER`]) and is not user-configurable;
//! within a category, instances paint in insertion order.

use core::fmt;
use core::str::FromStr;

/// One accessory slot type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Hats, caps, and beanies.
    Hat,
    /// Glasses of any kind.
    Glasses,
    /// Earrings, necklaces, and watches.
    Jewelry,
    /// Scarves and ties.
    Neckwear,
    /// Shirts.
    Top,
    /// Shorts and trousers.
    Bottoms,
    /// Footwear.
    Shoes,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 7;

    /// All categories in declaration order (the order of [`index`](Self::index)).
    pub const ALL: [Self; Self::COUNT] = [
        Self::Hat,
        Self::Glasses,
        Self::Jewelry,
        Self::Neckwear,
        Self::Top,
        Self::Bottoms,
        Self::Shoes,
    ];

    /// All categories back to front: the first entry paints first and ends up
    /// underneath everything else.
    pub const RENDER_ORDER: [Self; Self::COUNT] = [
        Self::Shoes,
        Self::Bottoms,
        Self::Top,
        Self::Neckwear,
        Self::Jewelry,
        Self::Glasses,
        Self::Hat,
    ];

    /// Dense index in `0..COUNT`, suitable for per-category arrays.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Hat => 0,
            Self::Glasses => 1,
            Self::Jewelry => 2,
            Self::Neckwear => 3,
            Self::Top => 4,
            Self::Bottoms => 5,
            Self::Shoes => 6,
        }
    }

    /// Returns the lowercase name used in persisted data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hat => "hat",
            Self::Glasses => "glasses",
            Self::Jewelry => "jewelry",
            Self::Neckwear => "neckwear",
            Self::Top => "top",
            Self::Bottoms => "bottoms",
            Self::Shoes => "shoes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized category name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown accessory category")]
pub struct UnknownCategory;

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(UnknownCategory)
    }
}
