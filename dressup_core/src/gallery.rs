// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named, timestamped saved outfits.
//!
//! A [`SavedOutfit`] captures a value copy of one [`OutfitSnapshot`] together
//! with the character it was dressed on. Saved outfits are immutable once
//! created and never expire; the [`SavedOutfitRegistry`] lists them newest
//! first, the order a gallery shows them in.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::category::Category;
use crate::error::EditError;
use crate::id::{AssetRef, OutfitId};
use crate::placement::Placement;
use crate::snapshot::OutfitSnapshot;
use crate::thumbnail::ThumbnailProjector;
use crate::time::Timestamp;

/// One saved outfit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedOutfit {
    /// Registry-unique identity.
    pub id: OutfitId,
    /// Display name, trimmed and never blank.
    pub name: String,
    /// Character artwork the outfit was composed on.
    pub character: AssetRef,
    /// Character type used for fit lookups (`"bear"`, `"owl"`, ...).
    pub character_type: String,
    /// The captured composition.
    pub snapshot: OutfitSnapshot,
    /// When the outfit was saved.
    pub saved_at: Timestamp,
}

/// One instance of a saved outfit, projected into thumbnail space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbnailLayer {
    /// Slot the instance lives in.
    pub category: Category,
    /// Artwork to draw.
    pub asset: AssetRef,
    /// Transform within the thumbnail.
    pub placement: Placement,
}

/// Saved outfits, newest first.
#[derive(Clone, Debug)]
pub struct SavedOutfitRegistry {
    outfits: Vec<SavedOutfit>,
    /// `None` once `OutfitId(u64::MAX)` is taken.
    next_id: Option<u64>,
}

impl Default for SavedOutfitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SavedOutfitRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outfits: Vec::new(),
            next_id: Some(0),
        }
    }

    /// Saves `snapshot` under `name` and returns the new record.
    ///
    /// The name is trimmed before it is stored. A name that is empty after
    /// trimming is rejected with [`EditError::BlankName`] and nothing is
    /// saved. Once every outfit id is taken, saving fails with
    /// [`EditError::OutfitIdsExhausted`].
    pub fn save(
        &mut self,
        name: &str,
        character: AssetRef,
        character_type: &str,
        snapshot: OutfitSnapshot,
        saved_at: Timestamp,
    ) -> Result<&SavedOutfit, EditError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EditError::BlankName);
        }
        let Some(raw) = self.next_id else {
            return Err(EditError::OutfitIdsExhausted);
        };
        let id = OutfitId(raw);
        self.next_id = raw.checked_add(1);
        self.outfits.insert(
            0,
            SavedOutfit {
                id,
                name: name.to_string(),
                character,
                character_type: character_type.to_string(),
                snapshot,
                saved_at,
            },
        );
        Ok(&self.outfits[0])
    }

    /// Looks up a saved outfit by id.
    #[must_use]
    pub fn get(&self, id: OutfitId) -> Option<&SavedOutfit> {
        self.outfits.iter().find(|o| o.id == id)
    }

    /// Iterates saved outfits, newest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &SavedOutfit> + '_ {
        self.outfits.iter()
    }

    /// Number of saved outfits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    /// Returns whether nothing has been saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }

    /// Replaces the registry contents with previously persisted outfits.
    ///
    /// The outfits are ordered newest first (ties broken by id), and later
    /// saves receive ids above every restored one.
    pub fn restore(&mut self, mut outfits: Vec<SavedOutfit>) {
        outfits.sort_by(|a, b| b.saved_at.cmp(&a.saved_at).then(b.id.cmp(&a.id)));
        self.next_id = match outfits.iter().map(|o| o.id.0).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        };
        self.outfits = outfits;
    }

    /// Projects every instance of `outfit` into a thumbnail of edge `size`,
    /// in paint order.
    #[must_use]
    pub fn thumbnail_layers(
        outfit: &SavedOutfit,
        projector: &ThumbnailProjector,
        size: f64,
    ) -> Vec<ThumbnailLayer> {
        outfit
            .snapshot
            .layers()
            .map(|item| ThumbnailLayer {
                category: item.category,
                asset: item.asset,
                placement: projector.project(&item.placement, size),
            })
            .collect()
    }
}
