// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The outfit editor: the mutation API the presentation layer drives.
//!
//! [`OutfitEditor`] receives already-resolved intents (add this asset, move
//! that instance here, undo) and turns each successful one into exactly one
//! commit on its [`HistoryTimeline`]. Every mutating method builds a
//! candidate [`OutfitSnapshot`] from the current one and commits it; nothing
//! edits a committed snapshot.
//!
//! # Drag release
//!
//! [`update_accessory_transform`](OutfitEditor::update_accessory_transform)
//! checks the trash zone *first*. If the proposed position puts the sticker's
//! center inside the hit radius, the instance is removed and the proposed
//! scale and rotation are dropped. Otherwise the whole transform replaces the
//! instance's placement in place.
//!
//! While a drag is in flight, [`trash_feedback`](OutfitEditor::trash_feedback)
//! and [`would_delete`](OutfitEditor::would_delete) may be polled on every
//! tick. They read only configuration and never commit.
//!
//! # Failure
//!
//! Naming an instance that is not in the current snapshot is reported as
//! [`EditError::InstanceNotFound`] and a [`MissEvent`] on the trace sink; the
//! timeline is left untouched. Undo and redo at a boundary are silent no-ops.
//!
//! # Instance ids
//!
//! Ids come from a per-editor counter that loading a saved outfit advances
//! past the loaded ids. If the counter runs out (a loaded outfit carrying
//! ids at the top of the `u64` range), the next add renumbers the current
//! snapshot from zero and drops the undo history, so ids stay unique without
//! the add failing.
//!
//! # Tracing
//!
//! Events reach the sink only with the `trace` feature. Without it the sink
//! is never called.

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Point;

use crate::category::Category;
use crate::error::EditError;
use crate::fit::FitTable;
use crate::gallery::{SavedOutfit, SavedOutfitRegistry, ThumbnailLayer};
use crate::heuristics::PlacementHeuristics;
use crate::history::{HistoryConfig, HistoryTimeline};
use crate::id::{AssetRef, IdAllocator, InstanceId, OutfitId};
use crate::placement::{CanvasConfig, Placement};
use crate::snapshot::{AccessoryInstance, OutfitSnapshot};
use crate::thumbnail::{DEFAULT_REFERENCE_SIZE, ThumbnailProjector};
use crate::time::{Clock, DEFAULT_CLOCK};
use crate::trace::{EditKind, NavDirection, NoopSink, TraceSink};
#[cfg(feature = "trace")]
use crate::trace::{CommitEvent, LoadEvent, MissEvent, NavigateEvent, SaveEvent};
use crate::trash::TrashZone;

/// Configuration for an [`OutfitEditor`].
#[derive(Clone, Copy, Debug)]
pub struct EditorConfig {
    /// Canvas geometry used for initial placement and thumbnails.
    pub canvas: CanvasConfig,
    /// Drag-to-delete zone. Its sticker size is ignored; the editor uses
    /// `canvas.sticker_size` so deletion and thumbnails agree.
    pub trash: TrashZone,
    /// Reference content size `R` for thumbnail projection.
    pub thumbnail_reference_size: f64,
    /// History retention.
    pub history: HistoryConfig,
    /// Time source for saved outfits.
    pub clock: Clock,
}

impl EditorConfig {
    /// Standard layout, unbounded history, and the build's default clock.
    pub const DEFAULT: Self = Self {
        canvas: CanvasConfig::DEFAULT,
        trash: TrashZone::DEFAULT,
        thumbnail_reference_size: DEFAULT_REFERENCE_SIZE,
        history: HistoryConfig::UNBOUNDED,
        clock: DEFAULT_CLOCK,
    };
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What a transform update did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformOutcome {
    /// The instance took the proposed transform.
    Moved,
    /// The instance was released over the trash zone and removed.
    Deleted,
}

/// Outfit composition with undo/redo and a saved-outfit gallery.
#[derive(Debug)]
pub struct OutfitEditor<S: TraceSink = NoopSink> {
    history: HistoryTimeline,
    heuristics: PlacementHeuristics,
    trash: TrashZone,
    projector: ThumbnailProjector,
    ids: IdAllocator,
    gallery: SavedOutfitRegistry,
    clock: Clock,
    sink: S,
    #[cfg(feature = "trace")]
    commit_seq: u64,
}

impl OutfitEditor {
    /// Creates an editor with the built-in fit table and no tracing.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self::with_sink(config, NoopSink)
    }

    /// Creates an editor with a custom fit table and no tracing.
    #[must_use]
    pub fn with_fits(config: EditorConfig, fits: FitTable) -> Self {
        Self::with_fits_and_sink(config, fits, NoopSink)
    }
}

impl Default for OutfitEditor {
    fn default() -> Self {
        Self::new(EditorConfig::DEFAULT)
    }
}

impl<S: TraceSink> OutfitEditor<S> {
    /// Creates an editor with the built-in fit table reporting to `sink`.
    #[must_use]
    pub fn with_sink(config: EditorConfig, sink: S) -> Self {
        Self::with_fits_and_sink(config, FitTable::builtin(), sink)
    }

    /// Creates an editor with a custom fit table reporting to `sink`.
    #[must_use]
    pub fn with_fits_and_sink(config: EditorConfig, fits: FitTable, sink: S) -> Self {
        Self {
            history: HistoryTimeline::with_config(config.history),
            heuristics: PlacementHeuristics::new(fits, config.canvas),
            trash: TrashZone {
                sticker_size: config.canvas.sticker_size,
                ..config.trash
            },
            projector: ThumbnailProjector::new(&config.canvas)
                .with_reference_size(config.thumbnail_reference_size),
            ids: IdAllocator::new(),
            gallery: SavedOutfitRegistry::new(),
            clock: config.clock,
            sink,
            #[cfg(feature = "trace")]
            commit_seq: 0,
        }
    }

    // -- Composition --

    /// Places a new `asset` in `category`, positioned for `character_type`.
    ///
    /// Unknown character types use the default fit profile. Existing
    /// instances are never displaced; the new one paints above the others in
    /// its category.
    pub fn add_accessory(
        &mut self,
        category: Category,
        asset: AssetRef,
        character_type: &str,
    ) -> InstanceId {
        let placement = self.heuristics.initial_transform(character_type, category);
        let id = self.fresh_id();
        let next = self.history.current().with_added(AccessoryInstance {
            id,
            category,
            asset,
            placement,
        });
        self.commit(next, EditKind::AddAccessory, Some((category, id)));
        id
    }

    /// Applies a drag release (or pinch/rotate end) to instance `id`.
    ///
    /// If `proposed` puts the sticker center inside the trash zone's hit
    /// radius, the instance is deleted and the rest of `proposed` is ignored.
    ///
    /// # Errors
    ///
    /// [`EditError::InstanceNotFound`] if `id` is not in `category`; nothing
    /// is committed.
    pub fn update_accessory_transform(
        &mut self,
        category: Category,
        id: InstanceId,
        proposed: Placement,
    ) -> Result<TransformOutcome, EditError> {
        let current = self.history.current();
        if self.trash.should_delete(proposed.position()) {
            let Some(next) = current.without(category, id) else {
                return Err(self.miss(category, id));
            };
            self.commit(next, EditKind::TrashAccessory, Some((category, id)));
            Ok(TransformOutcome::Deleted)
        } else {
            let Some(next) = current.with_placement(category, id, proposed) else {
                return Err(self.miss(category, id));
            };
            self.commit(next, EditKind::MoveAccessory, Some((category, id)));
            Ok(TransformOutcome::Moved)
        }
    }

    /// Mirrors instance `id` horizontally by negating its x scale.
    ///
    /// # Errors
    ///
    /// [`EditError::InstanceNotFound`] if `id` is not in `category`.
    pub fn flip_accessory(&mut self, category: Category, id: InstanceId) -> Result<(), EditError> {
        let current = self.history.current();
        let next = current
            .find(category, id)
            .and_then(|item| current.with_placement(category, id, item.placement.mirrored()));
        let Some(next) = next else {
            return Err(self.miss(category, id));
        };
        self.commit(next, EditKind::FlipAccessory, Some((category, id)));
        Ok(())
    }

    /// Should hover feedback show for a sticker dragged to `proposed`?
    #[must_use]
    pub fn trash_feedback(&self, proposed: Point) -> bool {
        self.trash.shows_feedback(proposed)
    }

    /// Would releasing a sticker at `proposed` delete it?
    #[must_use]
    pub fn would_delete(&self, proposed: Point) -> bool {
        self.trash.should_delete(proposed)
    }

    /// Replaces (or clears) the background.
    pub fn set_background(&mut self, background: Option<AssetRef>) {
        let next = self.history.current().with_background(background);
        self.commit(next, EditKind::SetBackground, None);
    }

    /// Clears every category and the background.
    ///
    /// Confirmation, if any, is the caller's job.
    pub fn reset_all(&mut self) {
        self.commit(OutfitSnapshot::new(), EditKind::ResetAll, None);
    }

    /// Clears everything because the active character changed.
    pub fn reset_for_new_character(&mut self) {
        self.commit(OutfitSnapshot::new(), EditKind::NewCharacter, None);
    }

    // -- History --

    /// Steps back one snapshot. Returns whether the cursor moved.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        self.navigated(NavDirection::Undo, moved);
        moved
    }

    /// Steps forward one snapshot. Returns whether the cursor moved.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        self.navigated(NavDirection::Redo, moved);
        moved
    }

    /// Returns whether [`undo`](Self::undo) would move the cursor.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns whether [`redo`](Self::redo) would move the cursor.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Returns the snapshot at the history cursor.
    #[must_use]
    pub fn current_snapshot(&self) -> &OutfitSnapshot {
        self.history.current()
    }

    /// Returns a shared handle to the current snapshot, for holding across
    /// later edits.
    #[must_use]
    pub fn share_current(&self) -> Arc<OutfitSnapshot> {
        Arc::clone(self.history.current())
    }

    /// Returns the history timeline.
    #[must_use]
    pub fn history(&self) -> &HistoryTimeline {
        &self.history
    }

    // -- Gallery --

    /// Saves the current snapshot under `name`, stamped with the configured
    /// clock.
    ///
    /// # Errors
    ///
    /// [`EditError::BlankName`] if `name` is empty or whitespace only, and
    /// [`EditError::OutfitIdsExhausted`] if the gallery has no id left.
    pub fn save_named(
        &mut self,
        name: &str,
        character: AssetRef,
        character_type: &str,
    ) -> Result<&SavedOutfit, EditError> {
        let snapshot = OutfitSnapshot::clone(self.history.current());
        let saved_at = (self.clock)();
        let saved = self
            .gallery
            .save(name, character, character_type, snapshot, saved_at)?;
        #[cfg(feature = "trace")]
        self.sink.on_save(&SaveEvent {
            outfit: saved.id,
            instance_count: saved.snapshot.instance_count(),
            saved_at,
        });
        Ok(saved)
    }

    /// Replaces the whole timeline with `outfit`'s snapshot.
    ///
    /// Undo history is discarded. Instance ids minted afterwards never collide
    /// with ids in the loaded snapshot.
    pub fn load_saved(&mut self, outfit: &SavedOutfit) {
        self.load(outfit.id, outfit.snapshot.clone());
    }

    /// Loads a saved outfit from this editor's gallery.
    ///
    /// # Errors
    ///
    /// [`EditError::UnknownOutfit`] if no outfit has this id.
    pub fn load_saved_by_id(&mut self, id: OutfitId) -> Result<(), EditError> {
        let snapshot = self
            .gallery
            .get(id)
            .ok_or(EditError::UnknownOutfit(id))?
            .snapshot
            .clone();
        self.load(id, snapshot);
        Ok(())
    }

    /// Returns the saved-outfit gallery.
    #[must_use]
    pub fn gallery(&self) -> &SavedOutfitRegistry {
        &self.gallery
    }

    /// Returns the gallery for rehydration from storage.
    pub fn gallery_mut(&mut self) -> &mut SavedOutfitRegistry {
        &mut self.gallery
    }

    // -- Thumbnails --

    /// Projects `instance` into a gallery thumbnail of edge `size`.
    #[must_use]
    pub fn thumbnail_transform(&self, instance: &AccessoryInstance, size: f64) -> Placement {
        self.projector.project(&instance.placement, size)
    }

    /// Projects every instance of `outfit` into a thumbnail, in paint order.
    #[must_use]
    pub fn thumbnail_layers(&self, outfit: &SavedOutfit, size: f64) -> Vec<ThumbnailLayer> {
        SavedOutfitRegistry::thumbnail_layers(outfit, &self.projector, size)
    }

    /// Returns the thumbnail projector.
    #[must_use]
    pub fn projector(&self) -> &ThumbnailProjector {
        &self.projector
    }

    // -- Configuration and instrumentation --

    /// Returns the placement heuristics.
    #[must_use]
    pub fn heuristics(&self) -> &PlacementHeuristics {
        &self.heuristics
    }

    /// Returns the fit table for registering new character types.
    pub fn fits_mut(&mut self) -> &mut FitTable {
        self.heuristics.fits_mut()
    }

    /// Returns the trash zone.
    #[must_use]
    pub fn trash_zone(&self) -> &TrashZone {
        &self.trash
    }

    /// Returns the trace sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the trace sink mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the editor and returns its trace sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    // -- Internals --

    fn fresh_id(&mut self) -> InstanceId {
        loop {
            if let Some(id) = self.ids.mint() {
                return id;
            }
            // Ids exhausted: keep only the current snapshot, numbered from zero.
            let (compacted, next) = self.history.current().renumbered();
            self.history.reset_to(compacted);
            self.ids = IdAllocator::starting_at(next);
        }
    }

    fn commit(
        &mut self,
        next: OutfitSnapshot,
        kind: EditKind,
        target: Option<(Category, InstanceId)>,
    ) {
        self.history.commit(next);
        #[cfg(feature = "trace")]
        {
            self.commit_seq += 1;
            self.sink.on_commit(&CommitEvent {
                seq: self.commit_seq,
                kind,
                category: target.map(|(c, _)| c),
                instance: target.map(|(_, i)| i),
                cursor: self.history.cursor(),
                len: self.history.snapshot_count(),
            });
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = (kind, target);
        }
    }

    fn miss(&mut self, category: Category, instance: InstanceId) -> EditError {
        #[cfg(feature = "trace")]
        self.sink.on_miss(&MissEvent { category, instance });
        EditError::InstanceNotFound { category, instance }
    }

    fn navigated(&mut self, direction: NavDirection, moved: bool) {
        #[cfg(feature = "trace")]
        self.sink.on_navigate(&NavigateEvent {
            direction,
            moved,
            cursor: self.history.cursor(),
            len: self.history.snapshot_count(),
        });
        #[cfg(not(feature = "trace"))]
        {
            _ = (direction, moved);
        }
    }

    fn load(&mut self, outfit: OutfitId, snapshot: OutfitSnapshot) {
        if let Some(max) = snapshot.max_instance_id() {
            self.ids.reserve_through(max);
        }
        self.history.reset_to(snapshot);
        #[cfg(feature = "trace")]
        self.sink.on_load(&LoadEvent {
            outfit,
            instance_count: self.history.current().instance_count(),
        });
        #[cfg(not(feature = "trace"))]
        {
            _ = outfit;
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Vec2;

    use super::*;
    use crate::time::Timestamp;
    use crate::trace::{CommitEvent, LoadEvent, MissEvent, NavigateEvent, SaveEvent};

    #[derive(Debug, Default)]
    struct Log {
        commits: Vec<CommitEvent>,
        navigations: Vec<NavigateEvent>,
        misses: Vec<MissEvent>,
        saves: Vec<SaveEvent>,
        loads: Vec<LoadEvent>,
    }

    impl TraceSink for Log {
        fn on_commit(&mut self, e: &CommitEvent) {
            self.commits.push(*e);
        }
        fn on_navigate(&mut self, e: &NavigateEvent) {
            self.navigations.push(*e);
        }
        fn on_miss(&mut self, e: &MissEvent) {
            self.misses.push(*e);
        }
        fn on_save(&mut self, e: &SaveEvent) {
            self.saves.push(*e);
        }
        fn on_load(&mut self, e: &LoadEvent) {
            self.loads.push(*e);
        }
    }

    fn fixed_clock() -> Timestamp {
        Timestamp(1_700_000_000_000)
    }

    const CONFIG: EditorConfig = EditorConfig {
        clock: fixed_clock,
        ..EditorConfig::DEFAULT
    };

    fn editor() -> OutfitEditor<Log> {
        OutfitEditor::with_sink(CONFIG, Log::default())
    }

    /// A proposal whose sticker center is far from the trash zone.
    fn away(x: f64) -> Placement {
        Placement::new(x, 500.0, 0.7, 0.8, 0.25)
    }

    #[test]
    fn add_places_from_fit_profile() {
        let mut ed = editor();
        let id = ed.add_accessory(Category::Hat, AssetRef(1), "bear");
        let c = CONFIG.canvas.center;
        let hats = ed.current_snapshot().items(Category::Hat);
        assert_eq!(hats.len(), 1);
        assert_eq!(hats[0].id, id);
        assert_eq!(hats[0].placement, Placement::new(c.x, c.y - 150.0, 0.5, 0.5, 0.0));
        assert_eq!(ed.history().snapshot_count(), 2);
        assert_eq!(ed.history().cursor(), 1);
    }

    #[test]
    fn repeated_adds_never_displace() {
        let mut ed = editor();
        let a = ed.add_accessory(Category::Glasses, AssetRef(5), "owl");
        let b = ed.add_accessory(Category::Glasses, AssetRef(5), "owl");
        ed.add_accessory(Category::Top, AssetRef(6), "owl");
        assert_ne!(a, b);
        let ids: Vec<_> = ed
            .current_snapshot()
            .items(Category::Glasses)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![a, b]);
        assert!(ed.current_snapshot().contains_asset(Category::Glasses, AssetRef(5)));
    }

    #[test]
    fn move_replaces_transform_in_place() {
        let mut ed = editor();
        let a = ed.add_accessory(Category::Hat, AssetRef(1), "cat");
        let b = ed.add_accessory(Category::Hat, AssetRef(2), "cat");
        assert_eq!(
            ed.update_accessory_transform(Category::Hat, a, away(20.0)),
            Ok(TransformOutcome::Moved)
        );
        let hats = ed.current_snapshot().items(Category::Hat);
        assert_eq!(hats[0].id, a);
        assert_eq!(hats[0].placement, away(20.0));
        assert_eq!(hats[1].id, b);
    }

    #[test]
    fn release_over_trash_deletes_and_drops_transform() {
        let mut ed = editor();
        let hat = ed.add_accessory(Category::Hat, AssetRef(1), "bear");
        ed.add_accessory(Category::Shoes, AssetRef(2), "bear");
        let before = ed.share_current();
        let corner = ed.trash_zone().dead_center();
        let drop = Placement::new(corner.x, corner.y, 9.0, 9.0, 3.0);
        assert_eq!(
            ed.update_accessory_transform(Category::Hat, hat, drop),
            Ok(TransformOutcome::Deleted)
        );
        let now = ed.current_snapshot();
        assert!(now.items(Category::Hat).is_empty());
        assert_eq!(now.items(Category::Shoes), before.items(Category::Shoes));
        if cfg!(feature = "trace") {
            let last = ed.sink().commits.last().map(|e| e.kind);
            assert_eq!(last, Some(EditKind::TrashAccessory));
        }
    }

    #[test]
    fn unknown_instance_is_a_traced_miss_without_commit() {
        let mut ed = editor();
        ed.add_accessory(Category::Hat, AssetRef(1), "bear");
        let len = ed.history().snapshot_count();
        let ghost = InstanceId(77);
        let expected = Err(EditError::InstanceNotFound {
            category: Category::Hat,
            instance: ghost,
        });
        assert_eq!(ed.update_accessory_transform(Category::Hat, ghost, away(0.0)), expected);
        let in_trash = ed.trash_zone().dead_center();
        assert_eq!(
            ed.update_accessory_transform(
                Category::Hat,
                ghost,
                Placement::IDENTITY.with_position(in_trash)
            ),
            expected
        );
        assert_eq!(ed.flip_accessory(Category::Hat, ghost), expected.map(|_| ()));
        assert_eq!(ed.history().snapshot_count(), len);
        if cfg!(feature = "trace") {
            assert_eq!(ed.sink().misses.len(), 3);
            assert_eq!(ed.sink().commits.len(), 1);
        }
    }

    #[test]
    fn wrong_category_is_not_found() {
        let mut ed = editor();
        let id = ed.add_accessory(Category::Hat, AssetRef(1), "bear");
        assert!(ed.update_accessory_transform(Category::Glasses, id, away(0.0)).is_err());
        assert_eq!(ed.current_snapshot().items(Category::Hat).len(), 1);
    }

    #[test]
    fn flip_negates_x_scale_only() {
        let mut ed = editor();
        let id = ed.add_accessory(Category::Glasses, AssetRef(3), "dog");
        let before = ed.current_snapshot().items(Category::Glasses)[0].placement;
        ed.flip_accessory(Category::Glasses, id).unwrap();
        let after = ed.current_snapshot().items(Category::Glasses)[0].placement;
        assert_eq!(after.scale_x, -before.scale_x);
        assert_eq!(after.scale_y, before.scale_y);
        assert_eq!(after.position(), before.position());
        ed.flip_accessory(Category::Glasses, id).unwrap();
        assert_eq!(ed.current_snapshot().items(Category::Glasses)[0].placement, before);
    }

    #[test]
    fn trash_queries_do_not_commit() {
        let ed = editor();
        let center = ed.trash_zone().dead_center();
        assert!(ed.would_delete(center));
        assert!(ed.trash_feedback(center));
        // Between the feedback and hit radii.
        let armed = center + Vec2::new(90.0, 0.0);
        assert!(ed.would_delete(armed));
        assert!(!ed.trash_feedback(armed));
        assert_eq!(ed.history().snapshot_count(), 1);
        assert!(ed.sink().commits.is_empty());
    }

    #[test]
    fn background_and_resets() {
        let mut ed = editor();
        ed.add_accessory(Category::Top, AssetRef(1), "lion");
        ed.set_background(Some(AssetRef(40)));
        assert_eq!(ed.current_snapshot().background(), Some(AssetRef(40)));
        ed.reset_all();
        assert!(ed.current_snapshot().is_blank());
        assert!(ed.undo());
        assert_eq!(ed.current_snapshot().background(), Some(AssetRef(40)));
        ed.reset_for_new_character();
        assert!(ed.current_snapshot().is_blank());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn commits_are_traced_by_kind() {
        let mut ed = editor();
        ed.add_accessory(Category::Top, AssetRef(1), "lion");
        ed.set_background(Some(AssetRef(40)));
        ed.reset_all();
        ed.reset_for_new_character();
        let kinds: Vec<_> = ed.sink().commits.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EditKind::AddAccessory,
                EditKind::SetBackground,
                EditKind::ResetAll,
                EditKind::NewCharacter,
            ]
        );
    }

    #[cfg(feature = "trace")]
    #[test]
    fn undo_redo_emit_navigation_even_at_bounds() {
        let mut ed = editor();
        assert!(!ed.undo());
        ed.add_accessory(Category::Shoes, AssetRef(1), "mouse");
        assert!(ed.undo());
        assert!(ed.redo());
        assert!(!ed.redo());
        let moved: Vec<_> = ed.sink().navigations.iter().map(|e| e.moved).collect();
        assert_eq!(moved, vec![false, true, true, false]);
        assert_eq!(ed.sink().navigations[1].cursor, 0);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn commit_seq_counts_from_one() {
        let mut ed = editor();
        ed.set_background(None);
        ed.set_background(None);
        let seqs: Vec<_> = ed.sink().commits.iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![1, 2]);
        assert_eq!(ed.sink().commits[1].len, 3);
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut ed = editor();
        let hat = ed.add_accessory(Category::Hat, AssetRef(1), "bear");
        ed.set_background(Some(AssetRef(9)));
        let saved = ed.save_named(" Picnic ", AssetRef(100), "bear").unwrap().clone();
        assert_eq!(saved.name, "Picnic");
        assert_eq!(saved.saved_at, fixed_clock());
        assert_eq!(&saved.snapshot, ed.current_snapshot());

        ed.reset_all();
        ed.load_saved_by_id(saved.id).unwrap();
        assert_eq!(ed.current_snapshot(), &saved.snapshot);
        assert_eq!(ed.history().snapshot_count(), 1);
        assert!(!ed.can_undo());
        assert!(!ed.can_redo());

        let fresh = ed.add_accessory(Category::Hat, AssetRef(1), "bear");
        assert!(fresh > hat);
        if cfg!(feature = "trace") {
            assert_eq!(ed.sink().saves.len(), 1);
            assert_eq!(ed.sink().loads[0].instance_count, 1);
        }
    }

    #[test]
    fn load_advances_ids_past_foreign_snapshot() {
        let mut ed = editor();
        let foreign = SavedOutfit {
            id: OutfitId(3),
            name: "imported".into(),
            character: AssetRef(0),
            character_type: "penguin".into(),
            snapshot: OutfitSnapshot::new().with_added(AccessoryInstance {
                id: InstanceId(500),
                category: Category::Neckwear,
                asset: AssetRef(2),
                placement: Placement::IDENTITY,
            }),
            saved_at: Timestamp::ZERO,
        };
        ed.load_saved(&foreign);
        let id = ed.add_accessory(Category::Neckwear, AssetRef(2), "penguin");
        assert_eq!(id, InstanceId(501));
    }

    #[test]
    fn add_after_loading_top_id_renumbers() {
        let mut ed = editor();
        ed.add_accessory(Category::Hat, AssetRef(1), "bear");
        let foreign = SavedOutfit {
            id: OutfitId(0),
            name: "edge".into(),
            character: AssetRef(0),
            character_type: "bear".into(),
            snapshot: OutfitSnapshot::new()
                .with_added(AccessoryInstance {
                    id: InstanceId(u64::MAX),
                    category: Category::Shoes,
                    asset: AssetRef(2),
                    placement: Placement::IDENTITY,
                })
                .with_background(Some(AssetRef(7))),
            saved_at: Timestamp::ZERO,
        };
        ed.load_saved(&foreign);
        let hat = ed.add_accessory(Category::Hat, AssetRef(3), "bear");
        let again = ed.add_accessory(Category::Hat, AssetRef(4), "bear");

        let now = ed.current_snapshot();
        let shoe = now.items(Category::Shoes)[0].id;
        assert_eq!(shoe, InstanceId(0));
        assert_eq!((hat, again), (InstanceId(1), InstanceId(2)));
        assert_eq!(now.background(), Some(AssetRef(7)));
        assert_eq!(now.instance_count(), 3);
        // Renumbering starts a fresh timeline at the loaded outfit.
        assert!(ed.undo());
        assert!(ed.undo());
        assert!(!ed.undo());
        assert_eq!(ed.current_snapshot().instance_count(), 1);
        assert_eq!(ed.current_snapshot().items(Category::Shoes)[0].id, shoe);
    }

    #[test]
    fn blank_save_and_unknown_load_are_rejected() {
        let mut ed = editor();
        assert_eq!(
            ed.save_named("  ", AssetRef(0), "cat").map(|s| s.id),
            Err(EditError::BlankName)
        );
        assert_eq!(
            ed.load_saved_by_id(OutfitId(12)),
            Err(EditError::UnknownOutfit(OutfitId(12)))
        );
        assert!(ed.gallery().is_empty());
        assert!(ed.sink().saves.is_empty());
        assert!(ed.sink().loads.is_empty());
    }

    #[test]
    fn trash_zone_uses_canvas_sticker_size() {
        let mut config = CONFIG;
        config.canvas.sticker_size = 100.0;
        config.trash.sticker_size = 400.0;
        let ed = OutfitEditor::new(config);
        assert_eq!(ed.trash_zone().sticker_size, 100.0);
        assert_eq!(ed.projector().sticker_size, 100.0);
        // A 100-point sticker whose corner sits 50 short of the zone center
        // is centered on it.
        let corner = ed.trash_zone().center - Vec2::new(50.0, 50.0);
        assert!(ed.would_delete(corner));
    }

    #[test]
    fn thumbnail_of_centered_instance_sits_at_origin() {
        let ed = OutfitEditor::new(EditorConfig::DEFAULT);
        let c = EditorConfig::DEFAULT.canvas.center;
        let instance = AccessoryInstance {
            id: InstanceId(0),
            category: Category::Top,
            asset: AssetRef(0),
            placement: Placement::new(c.x, c.y, 1.0, 1.0, 0.5),
        };
        let t = ed.thumbnail_transform(&instance, 100.0);
        assert_eq!((t.x, t.y), (-100.0, -100.0));
        assert_eq!(t.rotation, 0.5);
    }

    #[test]
    fn windowed_history_keeps_editing() {
        let config = EditorConfig {
            history: HistoryConfig::window(2),
            ..CONFIG
        };
        let mut ed = OutfitEditor::with_sink(config, Log::default());
        for n in 0..4 {
            ed.set_background(Some(AssetRef(n)));
        }
        assert_eq!(ed.history().snapshot_count(), 2);
        assert!(ed.undo());
        assert!(!ed.undo());
        assert_eq!(ed.current_snapshot().background(), Some(AssetRef(2)));
    }

    #[test]
    fn custom_fit_profiles_drive_placement() {
        use crate::fit::FitProfile;

        let mut ed = OutfitEditor::with_fits(CONFIG, FitTable::empty(crate::fit::DEFAULT_FIT));
        ed.fits_mut().insert(
            "robot",
            FitProfile::from_parts((480.0, 100.0, 10.0), (-10.0, 2.0), (0.0, 1.0)),
        );
        ed.add_accessory(Category::Top, AssetRef(0), "robot");
        let top = ed.current_snapshot().items(Category::Top)[0].placement;
        assert_eq!((top.scale_x, top.scale_y), (2.0, 0.5));
        assert_eq!(top.y, CONFIG.canvas.center.y + 10.0);
    }
}
