// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable outfit state.
//!
//! An [`OutfitSnapshot`] holds every placed [`AccessoryInstance`], grouped by
//! [`Category`] in insertion order, plus an optional background. Snapshots are
//! values: every edit returns a new snapshot built by structural copy, and a
//! snapshot committed to the [`HistoryTimeline`](crate::history::HistoryTimeline)
//! is never modified again.

use alloc::vec::Vec;

use crate::category::Category;
use crate::id::{AssetRef, InstanceId};
use crate::placement::Placement;

/// One placed copy of an accessory.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessoryInstance {
    /// Session-unique identity.
    pub id: InstanceId,
    /// Slot the instance lives in.
    pub category: Category,
    /// Artwork drawn for the instance.
    pub asset: AssetRef,
    /// Current transform on the full canvas.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub placement: Placement,
}

type Slots = [Vec<AccessoryInstance>; Category::COUNT];

/// One complete outfit state.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutfitSnapshot {
    #[cfg_attr(feature = "serde", serde(with = "category_map"))]
    categories: Slots,
    background: Option<AssetRef>,
}

impl OutfitSnapshot {
    /// Creates a snapshot with no accessories and no background.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the instances of `category`, back to front.
    #[inline]
    #[must_use]
    pub fn items(&self, category: Category) -> &[AccessoryInstance] {
        &self.categories[category.index()]
    }

    /// Returns the background, if any.
    #[inline]
    #[must_use]
    pub const fn background(&self) -> Option<AssetRef> {
        self.background
    }

    /// Finds an instance by id within `category`.
    #[must_use]
    pub fn find(&self, category: Category, id: InstanceId) -> Option<&AccessoryInstance> {
        self.items(category).iter().find(|item| item.id == id)
    }

    /// Returns whether `asset` is placed at least once in `category`.
    #[must_use]
    pub fn contains_asset(&self, category: Category, asset: AssetRef) -> bool {
        self.items(category).iter().any(|item| item.asset == asset)
    }

    /// Total number of placed instances across all categories.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.categories.iter().map(Vec::len).sum()
    }

    /// Returns whether nothing is placed and no background is set.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.background.is_none() && self.categories.iter().all(Vec::is_empty)
    }

    /// Largest instance id present, if any.
    #[must_use]
    pub fn max_instance_id(&self) -> Option<InstanceId> {
        self.categories.iter().flatten().map(|item| item.id).max()
    }

    /// Iterates every instance in paint order: categories in
    /// [`Category::RENDER_ORDER`], insertion order within each.
    #[must_use]
    pub fn layers(&self) -> Layers<'_> {
        Layers::new(self)
    }

    // -- Derivation (each returns a new snapshot) --

    /// Returns a copy with `instance` appended to the end of its category.
    #[must_use]
    pub fn with_added(&self, instance: AccessoryInstance) -> Self {
        let mut next = self.clone();
        next.categories[instance.category.index()].push(instance);
        next
    }

    /// Returns a copy without the instance `id` in `category`, or `None` if it
    /// is not there.
    #[must_use]
    pub fn without(&self, category: Category, id: InstanceId) -> Option<Self> {
        let pos = self.position(category, id)?;
        let mut next = self.clone();
        next.categories[category.index()].remove(pos);
        Some(next)
    }

    /// Returns a copy where instance `id` in `category` has `placement`, in the
    /// same paint position, or `None` if it is not there.
    #[must_use]
    pub fn with_placement(
        &self,
        category: Category,
        id: InstanceId,
        placement: Placement,
    ) -> Option<Self> {
        let pos = self.position(category, id)?;
        let mut next = self.clone();
        next.categories[category.index()][pos].placement = placement;
        Some(next)
    }

    /// Returns a copy with a different background.
    #[must_use]
    pub fn with_background(&self, background: Option<AssetRef>) -> Self {
        Self {
            categories: self.categories.clone(),
            background,
        }
    }

    /// Returns a copy whose instances are numbered densely from
    /// `InstanceId(0)`, category by category, together with the first unused
    /// id. Paint order and placements are unchanged.
    #[must_use]
    pub fn renumbered(&self) -> (Self, u64) {
        let mut next = self.clone();
        let mut id = 0;
        for item in next.categories.iter_mut().flatten() {
            item.id = InstanceId(id);
            id += 1;
        }
        (next, id)
    }

    fn position(&self, category: Category, id: InstanceId) -> Option<usize> {
        self.items(category).iter().position(|item| item.id == id)
    }
}

/// Paint-order iterator over a snapshot's instances.
///
/// Created by [`OutfitSnapshot::layers`].
#[derive(Debug)]
pub struct Layers<'a> {
    snapshot: &'a OutfitSnapshot,
    order: usize,
    item: usize,
}

impl<'a> Layers<'a> {
    fn new(snapshot: &'a OutfitSnapshot) -> Self {
        Self {
            snapshot,
            order: 0,
            item: 0,
        }
    }
}

impl<'a> Iterator for Layers<'a> {
    type Item = &'a AccessoryInstance;

    fn next(&mut self) -> Option<&'a AccessoryInstance> {
        while let Some(category) = Category::RENDER_ORDER.get(self.order) {
            let items = self.snapshot.items(*category);
            if let Some(item) = items.get(self.item) {
                self.item += 1;
                return Some(item);
            }
            self.order += 1;
            self.item = 0;
        }
        None
    }
}

#[cfg(feature = "serde")]
mod category_map {
    //! Serializes the per-category slots as a map keyed by category name.

    use alloc::vec::Vec;
    use core::fmt;

    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};

    use super::{AccessoryInstance, Category, Slots};

    pub(super) fn serialize<S: Serializer>(slots: &Slots, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for category in Category::ALL {
            map.serialize_entry(&category, &slots[category.index()])?;
        }
        map.end()
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Slots, D::Error> {
        deserializer.deserialize_map(SlotsVisitor)
    }

    struct SlotsVisitor;

    impl<'de> Visitor<'de> for SlotsVisitor {
        type Value = Slots;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from category to accessory instances")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Slots, A::Error> {
            let mut slots = Slots::default();
            while let Some((category, items)) =
                access.next_entry::<Category, Vec<AccessoryInstance>>()?
            {
                if let Some(stray) = items.iter().find(|item| item.category != category) {
                    return Err(de::Error::custom(format_args!(
                        "{:?} filed under {category} but tagged {}",
                        stray.id, stray.category
                    )));
                }
                slots[category.index()] = items;
            }
            Ok(slots)
        }
    }
}
