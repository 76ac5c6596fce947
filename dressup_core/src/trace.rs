// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instrumentation for the outfit editor.
//!
//! The [`OutfitEditor`](crate::editor::OutfitEditor) reports every commit,
//! cursor move, miss, save, and load to a [`TraceSink`]. All sink methods
//! default to no-ops, so implementing only the events you care about is fine.
//!
//! The editor's default sink is [`NoopSink`], which the optimizer removes
//! entirely. A pair `(A, B)` of sinks is itself a sink that forwards every
//! event to both, in order.
//!
//! Pure queries (trash feedback, thumbnail projection, `can_undo`) never
//! emit events.

use crate::category::Category;
use crate::id::{InstanceId, OutfitId};
use crate::time::Timestamp;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which editor operation produced a commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// A new instance was placed.
    AddAccessory,
    /// An instance's transform was replaced.
    MoveAccessory,
    /// An instance was dropped on the trash zone and removed.
    TrashAccessory,
    /// An instance was mirrored horizontally.
    FlipAccessory,
    /// The background changed (or was cleared).
    SetBackground,
    /// Everything was cleared on request.
    ResetAll,
    /// Everything was cleared because the character changed.
    NewCharacter,
}

impl EditKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::AddAccessory,
        Self::MoveAccessory,
        Self::TrashAccessory,
        Self::FlipAccessory,
        Self::SetBackground,
        Self::ResetAll,
        Self::NewCharacter,
    ];

    /// Short name used by text and JSON exporters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddAccessory => "add",
            Self::MoveAccessory => "move",
            Self::TrashAccessory => "trash",
            Self::FlipAccessory => "flip",
            Self::SetBackground => "background",
            Self::ResetAll => "reset",
            Self::NewCharacter => "new-character",
        }
    }
}

/// Direction of a cursor move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavDirection {
    /// Toward older snapshots.
    Undo,
    /// Toward newer snapshots.
    Redo,
}

impl NavDirection {
    /// Short name used by text and JSON exporters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after a snapshot is committed to the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommitEvent {
    /// Editor-local commit counter, starting at 1.
    pub seq: u64,
    /// Which operation committed.
    pub kind: EditKind,
    /// Category touched, for per-instance operations.
    pub category: Option<Category>,
    /// Instance touched, for per-instance operations.
    pub instance: Option<InstanceId>,
    /// Timeline cursor after the commit.
    pub cursor: usize,
    /// Timeline length after the commit.
    pub len: usize,
}

/// Emitted for every undo or redo request, including boundary no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigateEvent {
    /// Requested direction.
    pub direction: NavDirection,
    /// Whether the cursor actually moved.
    pub moved: bool,
    /// Cursor after the request.
    pub cursor: usize,
    /// Timeline length.
    pub len: usize,
}

/// Emitted when an operation names an instance that does not exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MissEvent {
    /// Category that was searched.
    pub category: Category,
    /// Id that was not found.
    pub instance: InstanceId,
}

/// Emitted after the current snapshot is saved to the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaveEvent {
    /// Id of the new saved outfit.
    pub outfit: OutfitId,
    /// Number of instances captured.
    pub instance_count: usize,
    /// Save time.
    pub saved_at: Timestamp,
}

/// Emitted after a saved outfit replaces the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadEvent {
    /// Id of the loaded outfit.
    pub outfit: OutfitId,
    /// Number of instances restored.
    pub instance_count: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the editor.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a commit.
    fn on_commit(&mut self, e: &CommitEvent) {
        _ = e;
    }

    /// Called after an undo or redo request.
    fn on_navigate(&mut self, e: &NavigateEvent) {
        _ = e;
    }

    /// Called when an instance lookup fails.
    fn on_miss(&mut self, e: &MissEvent) {
        _ = e;
    }

    /// Called after a save.
    fn on_save(&mut self, e: &SaveEvent) {
        _ = e;
    }

    /// Called after a load.
    fn on_load(&mut self, e: &LoadEvent) {
        _ = e;
    }
}

impl<T: TraceSink + ?Sized> TraceSink for &mut T {
    fn on_commit(&mut self, e: &CommitEvent) {
        (**self).on_commit(e);
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        (**self).on_navigate(e);
    }

    fn on_miss(&mut self, e: &MissEvent) {
        (**self).on_miss(e);
    }

    fn on_save(&mut self, e: &SaveEvent) {
        (**self).on_save(e);
    }

    fn on_load(&mut self, e: &LoadEvent) {
        (**self).on_load(e);
    }
}

impl<A: TraceSink, B: TraceSink> TraceSink for (A, B) {
    fn on_commit(&mut self, e: &CommitEvent) {
        self.0.on_commit(e);
        self.1.on_commit(e);
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.0.on_navigate(e);
        self.1.on_navigate(e);
    }

    fn on_miss(&mut self, e: &MissEvent) {
        self.0.on_miss(e);
        self.1.on_miss(e);
    }

    fn on_save(&mut self, e: &SaveEvent) {
        self.0.on_save(e);
        self.1.on_save(e);
    }

    fn on_load(&mut self, e: &LoadEvent) {
        self.0.on_load(e);
        self.1.on_load(e);
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}
