// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON persistence for dressup sessions.
//!
//! This crate provides [`TraceSink`](dressup_core::trace::TraceSink)
//! implementations for development and post-mortem analysis, plus gallery
//! storage:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`export::export`]: writes recorded bytes as Chrome Trace Event Format
//!   JSON.
//! - [`gallery::write_gallery`] and [`gallery::read_gallery`]: persist saved
//!   outfits as JSON.

pub mod export;
pub mod gallery;
pub mod pretty;
pub mod recorder;
