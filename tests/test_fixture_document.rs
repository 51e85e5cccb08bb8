//! Integration tests for the renderer validation document.
//!
//! Builds the five-page document, writes it the way `generate_fixture` does
//! and checks what a renderer would read back.

use pagecraft::compositing::composite;
use pagecraft::fixture::{renderer_test_document, STRESS_SHAPES};
use pagecraft::writer::ContentStreamBuilder;
use pagecraft::Rgba;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_json_round_trip_through_file() {
    let doc = renderer_test_document().expect("fixture should build");
    let dir = tempdir().unwrap();
    let path = dir.path().join("renderer_test_document.json");
    fs::write(&path, doc.to_json_pretty().unwrap()).unwrap();

    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let pages = value["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 5);
    assert_eq!(pages[4]["ops"].as_array().unwrap().len(), STRESS_SHAPES);
    assert_eq!(value["metadata"]["title"], "Renderer test document");

    // Field names and values survive verbatim
    let widgets = pages[1]["widgets"].as_array().unwrap();
    assert_eq!(widgets[0]["name"], "nombre");
    assert_eq!(widgets[0]["value"], "Juan Pérez");
    assert_eq!(widgets[2]["flags"], 1 << 12);
    let radios: Vec<_> = widgets.iter().filter(|w| w["type"] == "Radio").collect();
    assert_eq!(radios.len(), 3);
    assert!(radios.iter().all(|r| r["group_name"] == "radio_group"));

    let annotations = pages[2]["annotations"].as_array().unwrap();
    assert_eq!(annotations[0]["target"], "https://www.example.com");
    assert_eq!(annotations[1]["label"], "APROBADO");
}

#[test]
fn test_content_streams_written_per_page() {
    let doc = renderer_test_document().unwrap();
    let dir = tempdir().unwrap();

    for (i, page) in doc.pages().iter().enumerate() {
        let stream = ContentStreamBuilder::for_page(page).unwrap();
        fs::write(dir.path().join(format!("page-{}.content", i + 1)), &stream.bytes).unwrap();
    }

    let first = fs::read_to_string(dir.path().join("page-1.content")).unwrap();
    let saves = first.lines().filter(|l| *l == "q").count();
    let restores = first.lines().filter(|l| *l == "Q").count();
    assert_eq!(saves, 59);
    assert_eq!(saves, restores);

    // The form page draws nothing
    let second = fs::read(dir.path().join("page-2.content")).unwrap();
    assert!(second.is_empty());
}

#[test]
fn test_alpha_ramp_registers_distinct_states() {
    let doc = renderer_test_document().unwrap();
    let stream = ContentStreamBuilder::for_page(&doc.pages()[0]).unwrap();

    // Every ramp step i/50 is its own state; the 40% rects and 50% circles
    // reuse the ramp's 0.4 and 0.5 entries
    assert_eq!(stream.alpha_states.len(), 50);
    assert_eq!(stream.alpha_states[0].name, "GS1");
    assert_eq!(stream.alpha_states[0].fill_alpha, 0.4);
    assert_eq!(stream.alpha_states[1].fill_alpha, 0.0);
    assert!(stream.alpha_states.iter().all(|s| s.stroke_alpha == 1.0));
}

#[test]
fn test_overlap_matches_source_over() {
    let doc = renderer_test_document().unwrap();
    let overlap: Vec<Rgba> = doc.pages()[0].fill_colors().take(3).collect();
    let color = composite(Rgba::white(), &overlap);
    assert!((color.r() - 0.36).abs() < 1e-5);
    assert!((color.g() - 0.496).abs() < 1e-5);
    assert!((color.b() - 0.456).abs() < 1e-5);
    assert_eq!(color.a(), 1.0);
}
