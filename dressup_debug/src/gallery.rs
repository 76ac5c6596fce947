// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON persistence for saved outfits.
//!
//! The file is a JSON array of [`SavedOutfit`] records, newest first. Reading
//! it back goes through [`SavedOutfitRegistry::restore`], so outfits saved
//! after a reload never reuse a persisted id.

use std::io::{self, Read, Write};

use dressup_core::gallery::{SavedOutfit, SavedOutfitRegistry};

/// Writes every outfit in `gallery` as a JSON array.
pub fn write_gallery(gallery: &SavedOutfitRegistry, writer: &mut dyn Write) -> io::Result<()> {
    let outfits: Vec<&SavedOutfit> = gallery.iter().collect();
    serde_json::to_writer_pretty(writer, &outfits)?;
    Ok(())
}

/// Reads a JSON array written by [`write_gallery`] into a new registry.
///
/// Malformed JSON, and snapshots whose instances are filed under the wrong
/// category, are reported as [`io::ErrorKind::InvalidData`].
pub fn read_gallery(reader: &mut dyn Read) -> io::Result<SavedOutfitRegistry> {
    let outfits: Vec<SavedOutfit> = serde_json::from_reader(reader)?;
    let mut gallery = SavedOutfitRegistry::new();
    gallery.restore(outfits);
    Ok(gallery)
}
