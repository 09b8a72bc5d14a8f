// Copyright 2026 the Inkpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end export tests: every format through the pipeline, against real
//! destination paths.

use doc_export::{load_plain_text, save_plain_text, ExportError, ExportFormat, ExportPipeline};
use styled_buffer::{AttributedDocument, StyleAttribute};

#[test]
fn plain_text_round_trips_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("note.txt");
    let mut doc = AttributedDocument::from_text("Hello wörld\nsecond line");
    doc.apply_attribute(0..5, StyleAttribute::Bold).unwrap();

    let mut pipeline = ExportPipeline::new();
    let status = pipeline
        .export(&doc, ExportFormat::PlainText, &path)
        .unwrap();
    assert!(status.contains("note.txt"));

    let reloaded = load_plain_text(&path).unwrap();
    assert_eq!(reloaded.plain_text(), doc.plain_text());
    // Styling is session-only and does not survive the round trip.
    assert!(reloaded.spans().is_empty());
}

#[test]
fn save_and_load_plain_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.txt");
    let doc = AttributedDocument::from_text("content");
    save_plain_text(&doc, &path).unwrap();
    assert_eq!(load_plain_text(&path).unwrap().plain_text(), "content");
}

#[test]
fn every_format_exports_an_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let mut pipeline = ExportPipeline::new();
    let doc = AttributedDocument::new();
    for format in [
        ExportFormat::PlainText,
        ExportFormat::Pdf,
        ExportFormat::Docx,
        ExportFormat::Png,
        ExportFormat::Jpeg,
    ] {
        let path = dir.path().join(format!("empty.{}", format.extension()));
        pipeline.export(&doc, format, &path).unwrap();
        assert!(path.exists(), "missing {} output", format.label());
    }
}

#[test]
fn pdf_output_has_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");
    let mut pipeline = ExportPipeline::new();
    let doc = AttributedDocument::from_text("some paragraph text");
    pipeline.export(&doc, ExportFormat::Pdf, &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn docx_output_is_a_zip_package() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.docx");
    let mut pipeline = ExportPipeline::new();
    let doc = AttributedDocument::from_text("one paragraph");
    pipeline.export(&doc, ExportFormat::Docx, &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"PK");
    // The mandatory parts are present by name in the archive directory.
    let body = String::from_utf8_lossy(&bytes).into_owned();
    assert!(body.contains("word/document.xml"));
    assert!(body.contains("[Content_Types].xml"));
}

#[test]
fn unwritable_destination_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no_such_dir").join("x.pdf");
    let mut pipeline = ExportPipeline::new();
    let doc = AttributedDocument::from_text("text");
    let err = pipeline
        .export(&doc, ExportFormat::Pdf, &missing)
        .unwrap_err();
    assert!(matches!(err, ExportError::Unwritable { .. }));
    assert!(!missing.exists());
}

#[test]
fn export_failure_leaves_previous_file_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keep.txt");
    let mut pipeline = ExportPipeline::new();
    let doc = AttributedDocument::from_text("first");
    pipeline
        .export(&doc, ExportFormat::PlainText, &path)
        .unwrap();

    let bad = dir.path().join("gone").join("x.txt");
    let _ = pipeline.export(&doc, ExportFormat::PlainText, &bad);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");
}

#[test]
fn status_strings_name_the_format() {
    let dir = tempfile::tempdir().unwrap();
    let mut pipeline = ExportPipeline::new();
    let doc = AttributedDocument::from_text("x");
    let path = dir.path().join("x.png");
    let status = pipeline.export(&doc, ExportFormat::Png, &path).unwrap();
    assert!(status.starts_with("Exported to PNG:"));
}
