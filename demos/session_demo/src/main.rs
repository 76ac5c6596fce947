// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted dress-up session that exercises the editor and diagnostics.
//!
//! Dresses a bear, drags items around (including one into the trash), walks
//! the undo history, and saves two outfits. Events go to both a
//! [`PrettyPrintSink`](dressup_debug::pretty::PrettyPrintSink) on stdout and a
//! [`RecorderSink`](dressup_debug::recorder::RecorderSink). The recording is
//! exported as a Chrome trace and the gallery is written as JSON.

use std::fs::File;
use std::io::BufWriter;

use dressup_core::category::Category;
use dressup_core::editor::{EditorConfig, OutfitEditor, TransformOutcome};
use dressup_core::id::AssetRef;
use dressup_core::placement::Placement;
use dressup_core::thumbnail::DEFAULT_THUMBNAIL_SIZE;
use kurbo::Vec2;

use dressup_debug::pretty::PrettyPrintSink;
use dressup_debug::recorder::RecorderSink;

const CHARACTER: AssetRef = AssetRef(1000);
const CHARACTER_TYPE: &str = "bear";

fn main() {
    // -- sinks -------------------------------------------------------------
    let pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let recorder = RecorderSink::new();
    let mut editor = OutfitEditor::with_sink(EditorConfig::DEFAULT, (pretty, recorder));

    // -- dress up ----------------------------------------------------------
    let hat = editor.add_accessory(Category::Hat, AssetRef(10), CHARACTER_TYPE);
    let glasses = editor.add_accessory(Category::Glasses, AssetRef(20), CHARACTER_TYPE);
    editor.add_accessory(Category::Top, AssetRef(30), CHARACTER_TYPE);
    editor.add_accessory(Category::Shoes, AssetRef(40), CHARACTER_TYPE);
    editor.set_background(Some(AssetRef(500)));

    // Tilt the hat and nudge it right.
    let tilted = editor
        .current_snapshot()
        .find(Category::Hat, hat)
        .map(|item| {
            let p = item.placement;
            Placement {
                rotation: 0.2,
                ..p.with_position(p.position() + Vec2::new(25.0, 0.0))
            }
        });
    if let Some(tilted) = tilted {
        report(editor.update_accessory_transform(Category::Hat, hat, tilted));
    }
    let _ = editor.flip_accessory(Category::Glasses, glasses);

    editor
        .save_named("Sunny day", CHARACTER, CHARACTER_TYPE)
        .expect("name is not blank");

    // -- drag the glasses into the trash -----------------------------------
    let trash = *editor.trash_zone();
    let start = trash.dead_center() + Vec2::new(160.0, 0.0);
    for step in 0..=8 {
        let p = start - Vec2::new(f64::from(step) * 20.0, 0.0);
        if editor.trash_feedback(p) {
            println!("  drag tick {step}: over trash");
        }
    }
    let drop = Placement::IDENTITY.with_position(trash.dead_center());
    report(editor.update_accessory_transform(Category::Glasses, glasses, drop));
    // A second release for the same instance races the first and misses.
    report(editor.update_accessory_transform(Category::Glasses, glasses, drop));

    // -- history -----------------------------------------------------------
    editor.undo();
    editor.undo();
    editor.redo();
    editor.add_accessory(Category::Neckwear, AssetRef(60), CHARACTER_TYPE);
    editor.redo();

    editor
        .save_named("  Scarf weather ", CHARACTER, CHARACTER_TYPE)
        .expect("name is not blank");

    // -- switch characters and come back -----------------------------------
    editor.reset_for_new_character();
    editor.add_accessory(Category::Hat, AssetRef(11), "penguin");
    let first = editor.gallery().iter().last().map(|o| o.id);
    if let Some(id) = first {
        editor.load_saved_by_id(id).expect("outfit was just saved");
    }

    for outfit in editor.gallery().iter() {
        let layers = editor.thumbnail_layers(outfit, DEFAULT_THUMBNAIL_SIZE);
        println!("  gallery: {:?} ({} layers)", outfit.name, layers.len());
    }

    // -- export ------------------------------------------------------------
    let path = "session_trace.json";
    let file = File::create(path).expect("failed to create session_trace.json");
    let mut writer = BufWriter::new(file);
    dressup_debug::export::export(editor.sink().1.as_bytes(), &mut writer)
        .expect("failed to write Chrome trace");

    let gallery_path = "gallery.json";
    let file = File::create(gallery_path).expect("failed to create gallery.json");
    let mut writer = BufWriter::new(file);
    dressup_debug::gallery::write_gallery(editor.gallery(), &mut writer)
        .expect("failed to write gallery");

    println!(
        "Wrote {path} and {gallery_path} ({} outfits)",
        editor.gallery().len()
    );
}

fn report<E: std::fmt::Display>(result: Result<TransformOutcome, E>) {
    match result {
        Ok(TransformOutcome::Moved) => println!("  moved"),
        Ok(TransformOutcome::Deleted) => println!("  dropped in trash"),
        Err(e) => println!("  ignored: {e}"),
    }
}
