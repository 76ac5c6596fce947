// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear undo/redo timeline of outfit snapshots.
//!
//! The [`HistoryTimeline`] is an append-only sequence of snapshots with a
//! cursor naming the current one. It is never empty: construction seeds it
//! with a blank snapshot.
//!
//! The model is **linear**. [`commit`](HistoryTimeline::commit) after one or
//! more undos truncates everything past the cursor, so the abandoned future
//! becomes unreachable. There is no tree of alternate branches.
//!
//! [`undo`](HistoryTimeline::undo) and [`redo`](HistoryTimeline::redo) only
//! move the cursor; snapshots themselves are shared behind [`Arc`] and never
//! mutated once committed.
//!
//! # Retention
//!
//! By default the timeline grows without bound. A [`HistoryConfig`] window
//! drops the oldest snapshots when a commit would exceed it; the current
//! snapshot is always retained.

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use crate::snapshot::OutfitSnapshot;

/// Retention policy for a [`HistoryTimeline`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistoryConfig {
    max_snapshots: Option<usize>,
}

impl HistoryConfig {
    /// Retain every snapshot.
    pub const UNBOUNDED: Self = Self {
        max_snapshots: None,
    };

    /// Retain at most `max` snapshots.
    ///
    /// # Panics
    ///
    /// Panics if `max` is zero.
    #[must_use]
    pub const fn window(max: usize) -> Self {
        assert!(max > 0, "history window must retain at least one snapshot");
        Self {
            max_snapshots: Some(max),
        }
    }

    /// Maximum number of retained snapshots, or `None` for unbounded.
    #[must_use]
    pub const fn max_snapshots(&self) -> Option<usize> {
        self.max_snapshots
    }
}

/// Cursor-addressed snapshot sequence.
#[derive(Clone, Debug)]
pub struct HistoryTimeline {
    snapshots: Vec<Arc<OutfitSnapshot>>,
    cursor: usize,
    config: HistoryConfig,
}

impl Default for HistoryTimeline {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTimeline {
    /// Creates an unbounded timeline seeded with one blank snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::UNBOUNDED)
    }

    /// Creates a timeline seeded with one blank snapshot.
    #[must_use]
    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            snapshots: vec![Arc::new(OutfitSnapshot::new())],
            cursor: 0,
            config,
        }
    }

    /// Discards the redo branch, appends `snapshot`, and makes it current.
    pub fn commit(&mut self, snapshot: OutfitSnapshot) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(Arc::new(snapshot));
        if let Some(max) = self.config.max_snapshots {
            let excess = self.snapshots.len().saturating_sub(max.max(1));
            if excess > 0 {
                self.snapshots.drain(..excess);
            }
        }
        self.cursor = self.snapshots.len() - 1;
        self.debug_check();
    }

    /// Steps back one snapshot. Returns `false` (and does nothing) at the
    /// oldest snapshot.
    pub fn undo(&mut self) -> bool {
        if self.can_undo() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Steps forward one snapshot. Returns `false` (and does nothing) at the
    /// newest snapshot.
    pub fn redo(&mut self) -> bool {
        if self.can_redo() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Returns whether [`undo`](Self::undo) would move the cursor.
    #[inline]
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Returns whether [`redo`](Self::redo) would move the cursor.
    #[inline]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Returns the snapshot at the cursor.
    #[inline]
    #[must_use]
    pub fn current(&self) -> &Arc<OutfitSnapshot> {
        &self.snapshots[self.cursor]
    }

    /// Replaces the whole timeline with `snapshot` as its only entry.
    pub fn reset_to(&mut self, snapshot: OutfitSnapshot) {
        self.snapshots.clear();
        self.snapshots.push(Arc::new(snapshot));
        self.cursor = 0;
    }

    /// Returns the cursor index.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of retained snapshots (always at least one).
    #[inline]
    #[must_use]
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns the snapshot at `index`, if retained.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<OutfitSnapshot>> {
        self.snapshots.get(index)
    }

    /// Returns the retention policy.
    #[must_use]
    pub const fn config(&self) -> HistoryConfig {
        self.config
    }

    fn debug_check(&self) {
        debug_assert!(!self.snapshots.is_empty(), "timeline is never empty");
        debug_assert!(self.cursor < self.snapshots.len(), "cursor out of range");
    }
}
