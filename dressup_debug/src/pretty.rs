// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use dressup_core::category::Category;
use dressup_core::id::InstanceId;
use dressup_core::trace::{
    CommitEvent, LoadEvent, MissEvent, NavigateEvent, SaveEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn target(category: Option<Category>, instance: Option<InstanceId>) -> String {
    match (category, instance) {
        (Some(c), Some(i)) => format!(" {c}#{}", i.0),
        (Some(c), None) => format!(" {c}"),
        _ => String::new(),
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_commit(&mut self, e: &CommitEvent) {
        let _ = writeln!(
            self.writer,
            "[commit] #{} {}{} cursor={}/{}",
            e.seq,
            e.kind.as_str(),
            target(e.category, e.instance),
            e.cursor,
            e.len,
        );
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        let moved = if e.moved { "" } else { " (at bound)" };
        let _ = writeln!(
            self.writer,
            "[{}] cursor={}/{}{moved}",
            e.direction.as_str(),
            e.cursor,
            e.len,
        );
    }

    fn on_miss(&mut self, e: &MissEvent) {
        let _ = writeln!(
            self.writer,
            "[miss] {}#{} not found",
            e.category, e.instance.0,
        );
    }

    fn on_save(&mut self, e: &SaveEvent) {
        let _ = writeln!(
            self.writer,
            "[save] outfit={} items={} at={}ms",
            e.outfit.0,
            e.instance_count,
            e.saved_at.as_millis(),
        );
    }

    fn on_load(&mut self, e: &LoadEvent) {
        let _ = writeln!(
            self.writer,
            "[load] outfit={} items={}",
            e.outfit.0, e.instance_count,
        );
    }
}
