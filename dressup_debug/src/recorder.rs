// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].
//!
//! Counts and cursor positions are stored as `u64`. Optional categories use
//! the byte [`NO_CATEGORY`].

use dressup_core::category::Category;
use dressup_core::id::{InstanceId, OutfitId};
use dressup_core::time::Timestamp;
use dressup_core::trace::{
    CommitEvent, EditKind, LoadEvent, MissEvent, NavDirection, NavigateEvent, SaveEvent,
    TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_COMMIT: u8 = 1;
const TAG_NAVIGATE: u8 = 2;
const TAG_MISS: u8 = 3;
const TAG_SAVE: u8 = 4;
const TAG_LOAD: u8 = 5;

/// Category byte written when a commit touched no single category.
pub const NO_CATEGORY: u8 = u8::MAX;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_usize(&mut self, v: usize) {
        self.write_u64(u64::try_from(v).unwrap_or(u64::MAX));
    }

    fn write_option_u64(&mut self, v: Option<u64>) {
        match v {
            Some(val) => {
                self.write_u8(1);
                self.write_u64(val);
            }
            None => {
                self.write_u8(0);
                self.write_u64(0);
            }
        }
    }

    fn write_category(&mut self, c: Option<Category>) {
        let byte = c.map_or(NO_CATEGORY, |c| {
            u8::try_from(c.index()).unwrap_or(NO_CATEGORY)
        });
        self.write_u8(byte);
    }

    fn write_kind(&mut self, k: EditKind) {
        self.write_u8(match k {
            EditKind::AddAccessory => 0,
            EditKind::MoveAccessory => 1,
            EditKind::TrashAccessory => 2,
            EditKind::FlipAccessory => 3,
            EditKind::SetBackground => 4,
            EditKind::ResetAll => 5,
            EditKind::NewCharacter => 6,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_commit(&mut self, e: &CommitEvent) {
        self.write_u8(TAG_COMMIT);
        self.write_u64(e.seq);
        self.write_kind(e.kind);
        self.write_category(e.category);
        self.write_option_u64(e.instance.map(|i| i.0));
        self.write_usize(e.cursor);
        self.write_usize(e.len);
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.write_u8(TAG_NAVIGATE);
        self.write_u8(match e.direction {
            NavDirection::Undo => 0,
            NavDirection::Redo => 1,
        });
        self.write_u8(u8::from(e.moved));
        self.write_usize(e.cursor);
        self.write_usize(e.len);
    }

    fn on_miss(&mut self, e: &MissEvent) {
        self.write_u8(TAG_MISS);
        self.write_category(Some(e.category));
        self.write_u64(e.instance.0);
    }

    fn on_save(&mut self, e: &SaveEvent) {
        self.write_u8(TAG_SAVE);
        self.write_u64(e.outfit.0);
        self.write_usize(e.instance_count);
        self.write_u64(e.saved_at.as_millis());
    }

    fn on_load(&mut self, e: &LoadEvent) {
        self.write_u8(TAG_LOAD);
        self.write_u64(e.outfit.0);
        self.write_usize(e.instance_count);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// A [`CommitEvent`].
    Commit(CommitEvent),
    /// A [`NavigateEvent`].
    Navigate(NavigateEvent),
    /// A [`MissEvent`].
    Miss(MissEvent),
    /// A [`SaveEvent`].
    Save(SaveEvent),
    /// A [`LoadEvent`].
    Load(LoadEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first truncated record or unknown tag.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u64(&mut self) -> Option<u64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = u64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_usize(&mut self) -> Option<usize> {
        Some(usize::try_from(self.read_u64()?).unwrap_or(usize::MAX))
    }

    fn read_option_u64(&mut self) -> Option<Option<u64>> {
        let present = self.read_u8()?;
        let val = self.read_u64()?;
        Some(if present != 0 { Some(val) } else { None })
    }

    fn read_category(&mut self) -> Option<Option<Category>> {
        match self.read_u8()? {
            NO_CATEGORY => Some(None),
            i => Category::ALL.get(usize::from(i)).copied().map(Some),
        }
    }

    fn read_kind(&mut self) -> Option<EditKind> {
        EditKind::ALL.get(usize::from(self.read_u8()?)).copied()
    }

    fn decode_commit(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Commit(CommitEvent {
            seq: self.read_u64()?,
            kind: self.read_kind()?,
            category: self.read_category()?,
            instance: self.read_option_u64()?.map(InstanceId),
            cursor: self.read_usize()?,
            len: self.read_usize()?,
        }))
    }

    fn decode_navigate(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Navigate(NavigateEvent {
            direction: match self.read_u8()? {
                0 => NavDirection::Undo,
                _ => NavDirection::Redo,
            },
            moved: self.read_u8()? != 0,
            cursor: self.read_usize()?,
            len: self.read_usize()?,
        }))
    }

    fn decode_miss(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Miss(MissEvent {
            category: self.read_category()??,
            instance: InstanceId(self.read_u64()?),
        }))
    }

    fn decode_save(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Save(SaveEvent {
            outfit: OutfitId(self.read_u64()?),
            instance_count: self.read_usize()?,
            saved_at: Timestamp(self.read_u64()?),
        }))
    }

    fn decode_load(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Load(LoadEvent {
            outfit: OutfitId(self.read_u64()?),
            instance_count: self.read_usize()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_COMMIT => self.decode_commit(),
            TAG_NAVIGATE => self.decode_navigate(),
            TAG_MISS => self.decode_miss(),
            TAG_SAVE => self.decode_save(),
            TAG_LOAD => self.decode_load(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn trash_commit() -> CommitEvent {
        CommitEvent {
            seq: 7,
            kind: EditKind::TrashAccessory,
            category: Some(Category::Neckwear),
            instance: Some(InstanceId(12)),
            cursor: 6,
            len: 7,
        }
    }

    #[test]
    fn every_edit_kind_survives_recording() {
        let mut rec = RecorderSink::new();
        for (seq, kind) in (1..).zip(EditKind::ALL) {
            rec.on_commit(&CommitEvent {
                seq,
                kind,
                category: None,
                instance: None,
                cursor: 0,
                len: 1,
            });
        }
        let kinds: Vec<_> = decode(rec.as_bytes())
            .map(|e| match e {
                RecordedEvent::Commit(c) => c.kind,
                other => panic!("expected Commit, got {other:?}"),
            })
            .collect();
        assert_eq!(kinds, EditKind::ALL);
    }

    #[test]
    fn mixed_session_decodes_in_order() {
        let mut rec = RecorderSink::new();
        let nav = NavigateEvent {
            direction: NavDirection::Redo,
            moved: true,
            cursor: 2,
            len: 3,
        };
        let miss = MissEvent {
            category: Category::Shoes,
            instance: InstanceId(99),
        };
        let save = SaveEvent {
            outfit: OutfitId(4),
            instance_count: 5,
            saved_at: Timestamp(1_700_000_000_123),
        };
        let load = LoadEvent {
            outfit: OutfitId(4),
            instance_count: 5,
        };
        rec.on_commit(&trash_commit());
        rec.on_navigate(&nav);
        rec.on_miss(&miss);
        rec.on_save(&save);
        rec.on_load(&load);

        let events: Vec<_> = decode(rec.as_bytes()).collect();
        assert_eq!(
            events,
            vec![
                RecordedEvent::Commit(trash_commit()),
                RecordedEvent::Navigate(nav),
                RecordedEvent::Miss(miss),
                RecordedEvent::Save(save),
                RecordedEvent::Load(load),
            ]
        );
    }

    #[test]
    fn truncated_record_stops_iteration() {
        let mut rec = RecorderSink::new();
        rec.on_commit(&trash_commit());
        rec.on_commit(&trash_commit());
        let bytes = rec.into_bytes();
        let cut = &bytes[..bytes.len() - 3];
        assert_eq!(decode(cut).count(), 1);
    }

    #[test]
    fn unknown_tag_stops_iteration() {
        let mut rec = RecorderSink::new();
        rec.on_load(&LoadEvent {
            outfit: OutfitId(0),
            instance_count: 0,
        });
        let mut bytes = rec.into_bytes();
        bytes.push(0xEE);
        assert_eq!(decode(&bytes).count(), 1);
    }

    #[test]
    fn empty_buffer_decodes_to_nothing() {
        let events: Vec<_> = decode(&[]).collect();
        assert!(events.is_empty());
    }
}
