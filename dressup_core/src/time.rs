// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wall-clock timestamps for saved outfits.
//!
//! [`Timestamp`] is milliseconds since the Unix epoch. The core never reads
//! the system clock itself; it calls a [`Clock`] function supplied through
//! [`EditorConfig`](crate::editor::EditorConfig). With the `std` feature the
//! default clock is [`system_clock`]; without it the default reports
//! [`Timestamp::ZERO`] and embedders are expected to install their own.

use core::fmt;

/// Milliseconds since the Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// The Unix epoch.
    pub const ZERO: Self = Self(0);

    /// Returns the raw millisecond value.
    #[inline]
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`, or zero if `earlier` is
    /// later.
    #[inline]
    #[must_use]
    pub const fn saturating_millis_since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({}ms)", self.0)
    }
}

/// Source of the current wall-clock time.
pub type Clock = fn() -> Timestamp;

/// Clock that always reports the epoch.
#[must_use]
pub fn epoch_clock() -> Timestamp {
    Timestamp::ZERO
}

/// Clock backed by [`std::time::SystemTime`].
///
/// Times before the epoch report [`Timestamp::ZERO`]; times past `u64`
/// milliseconds saturate.
#[cfg(feature = "std")]
#[must_use]
pub fn system_clock() -> Timestamp {
    let since_epoch = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    Timestamp(u64::try_from(since_epoch.as_millis()).unwrap_or(u64::MAX))
}

/// Default clock for this build.
#[cfg(feature = "std")]
pub const DEFAULT_CLOCK: Clock = system_clock;

/// Default clock for this build.
#[cfg(not(feature = "std"))]
pub const DEFAULT_CLOCK: Clock = epoch_clock;
