// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! Editor events carry no wall-clock time, so each event's `ts` is its
//! position in the recording. Commits and cursor moves land on separate
//! tracks (`tid` 0 and 1); gallery events share track 2.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, decode};

const TRACK_EDITS: u32 = 0;
const TRACK_HISTORY: u32 = 1;
const TRACK_GALLERY: u32 = 2;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of instant events, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for (ts, recorded) in decode(bytes).enumerate() {
        let event = match recorded {
            RecordedEvent::Commit(e) => json!({
                "ph": "i",
                "name": e.kind.as_str(),
                "cat": "Edit",
                "ts": ts,
                "pid": 0,
                "tid": TRACK_EDITS,
                "s": "t",
                "args": {
                    "seq": e.seq,
                    "category": e.category.map(|c| c.as_str()),
                    "instance": e.instance.map(|i| i.0),
                    "cursor": e.cursor,
                    "len": e.len,
                }
            }),
            RecordedEvent::Navigate(e) => json!({
                "ph": "i",
                "name": e.direction.as_str(),
                "cat": "History",
                "ts": ts,
                "pid": 0,
                "tid": TRACK_HISTORY,
                "s": "t",
                "args": {
                    "moved": e.moved,
                    "cursor": e.cursor,
                    "len": e.len,
                }
            }),
            RecordedEvent::Miss(e) => json!({
                "ph": "i",
                "name": "miss",
                "cat": "Edit",
                "ts": ts,
                "pid": 0,
                "tid": TRACK_EDITS,
                "s": "t",
                "args": {
                    "category": e.category.as_str(),
                    "instance": e.instance.0,
                }
            }),
            RecordedEvent::Save(e) => json!({
                "ph": "i",
                "name": "save",
                "cat": "Gallery",
                "ts": ts,
                "pid": 0,
                "tid": TRACK_GALLERY,
                "s": "g",
                "args": {
                    "outfit": e.outfit.0,
                    "instance_count": e.instance_count,
                    "saved_at_ms": e.saved_at.as_millis(),
                }
            }),
            RecordedEvent::Load(e) => json!({
                "ph": "i",
                "name": "load",
                "cat": "Gallery",
                "ts": ts,
                "pid": 0,
                "tid": TRACK_GALLERY,
                "s": "g",
                "args": {
                    "outfit": e.outfit.0,
                    "instance_count": e.instance_count,
                }
            }),
        };
        events.push(event);
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}
