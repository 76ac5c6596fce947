// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outfit composition, placement heuristics, and undo history for layered
//! dress-up.
//!
//! `dressup_core` owns the parts of a dress-up application that have real
//! invariants: which accessories are placed on the character, where a newly
//! added accessory lands, when a drag ends in the trash, and how the whole
//! composition moves through an undoable history. It is `no_std` compatible
//! (with `alloc`) and never touches gestures, images, or storage directly.
//!
//! # Architecture
//!
//! Resolved user intents flow through the editor, which computes a candidate
//! snapshot and commits it to the timeline:
//!
//! ```text
//!   add / move / flip / background / reset
//!       │
//!       ▼
//!   OutfitEditor ──► PlacementHeuristics (new items)
//!       │        ──► TrashZone          (drag release)
//!       ▼
//!   OutfitSnapshot ──► HistoryTimeline::commit()
//!                           │
//!          undo / redo ─────┤  (cursor only)
//!                           ▼
//!   SavedOutfitRegistry ◄── current() ──► ThumbnailProjector (gallery)
//! ```
//!
//! **[`snapshot`]** — Immutable outfit state: per-category instance lists in
//! insertion order plus an optional background.
//!
//! **[`history`]** — Linear, cursor-addressed snapshot timeline. Committing
//! after an undo discards the redo branch.
//!
//! **[`editor`]** — The mutation API consumed by the presentation layer.
//!
//! **[`heuristics`]** and **[`fit`]** — Data-driven initial placement keyed by
//! character type, with a default profile for unknown characters.
//!
//! **[`trash`]** — Drag-to-delete geometry with separate hit and feedback
//! radii.
//!
//! **[`thumbnail`]** — Projection of full-canvas placements into gallery
//! thumbnail space.
//!
//! **[`gallery`]** — Named, timestamped saved outfits.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! editor instrumentation.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies and a
//!   system-time default clock.
//! - `serde` (disabled by default): Derives `Serialize`/`Deserialize` for the
//!   persisted types ([`gallery::SavedOutfit`] and everything it embeds).
//! - `trace` (disabled by default): Delivers editor events to the configured
//!   [`TraceSink`](trace::TraceSink). Without it the sink is never called.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod category;
pub mod editor;
pub mod error;
pub mod fit;
pub mod gallery;
pub mod heuristics;
pub mod history;
pub mod id;
pub mod placement;
pub mod snapshot;
pub mod thumbnail;
pub mod time;
pub mod trace;
pub mod trash;
