// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instance, asset, and saved-outfit identity types.

use core::fmt;

/// Identity of one placed accessory.
///
/// Minted by an [`IdAllocator`]; never reused within a session, even after the
/// instance is deleted.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct InstanceId(pub u64);

impl fmt::Debug for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstanceId({})", self.0)
    }
}

/// An opaque reference to an image asset (accessory, background, or
/// character artwork).
///
/// Assets are resolved by the presentation layer; the core only compares and
/// stores these handles.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AssetRef(pub u32);

impl fmt::Debug for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetRef({})", self.0)
    }
}

/// Identity of a [`SavedOutfit`](crate::gallery::SavedOutfit).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OutfitId(pub u64);

impl fmt::Debug for OutfitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OutfitId({})", self.0)
    }
}

/// Monotonic [`InstanceId`] source.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Creates an allocator whose first id is `InstanceId(0)`.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Creates an allocator whose first id is `InstanceId(next)`.
    #[must_use]
    pub const fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Mints a fresh id, or `None` once the id space is exhausted.
    ///
    /// `InstanceId(u64::MAX)` is never minted.
    pub fn mint(&mut self) -> Option<InstanceId> {
        let id = self.next;
        self.next = id.checked_add(1)?;
        Some(InstanceId(id))
    }

    /// Ensures no future [`mint`](Self::mint) returns `id` or anything below it.
    ///
    /// Used when snapshots minted elsewhere (a loaded saved outfit) enter the
    /// session. Reserving `InstanceId(u64::MAX)` exhausts the allocator.
    pub fn reserve_through(&mut self, id: InstanceId) {
        self.next = self.next.max(id.0.saturating_add(1));
    }

    /// Returns whether every id has been handed out or reserved.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.next == u64::MAX
    }

    /// Returns the id the next [`mint`](Self::mint) will produce.
    #[must_use]
    pub const fn peek(&self) -> InstanceId {
        InstanceId(self.next)
    }
}
