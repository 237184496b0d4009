//! Edge case and boundary condition tests
//!
//! These tests drive the designer, export and page state end to end the
//! way the pages do, with unusual inputs and failing collaborators.

use std::path::PathBuf;

use image::RgbaImage;
use memorial_core::designer::{designer_document, ids};
use memorial_core::export::{ExportJob, EXPORT_SCALE, FAILURE_LABEL, IDLE_LABEL};
use memorial_core::renderer::update_stone;
use memorial_core::{
    CardSnapshot, DirectorySink, DownloadSink, ExportButton, ExportError, PreferenceStore,
    Rasterizer, SilhouetteRasterizer, ThemePreference,
};
use tempfile::TempDir;

// ============================================================================
// Designer Tests
// ============================================================================

/// A page without the cracks control still renders
#[test]
fn test_document_without_cracks_control() {
    let mut doc = designer_document();
    doc.remove(ids::TOGGLE_CRACKS);
    doc.set_checked(ids::TOGGLE_MOSS, true);
    update_stone(&mut doc);

    let card = doc.get(ids::CARD).unwrap();
    assert!(card.classes.contains("mossy-effect"));
    assert!(!card.classes.contains("cracked"));
}

/// Empty inscription fields render as empty text
#[test]
fn test_blank_inscription() {
    let mut doc = designer_document();
    for id in [ids::INPUT_NAME, ids::INPUT_DATES, ids::INPUT_EPITAPH] {
        doc.set_value(id, "");
    }
    update_stone(&mut doc);

    assert_eq!(doc.text_of(ids::NAME), "");
    assert_eq!(doc.text_of(ids::DATES), "");
    assert_eq!(doc.text_of(ids::EPITAPH), "");
}

/// Non-ASCII names upper-case by Unicode rules
#[test]
fn test_unicode_name_display() {
    let mut doc = designer_document();
    doc.set_value(ids::INPUT_NAME, "straße ångström");
    update_stone(&mut doc);
    assert_eq!(doc.text_of(ids::NAME), "STRASSE ÅNGSTRÖM");
}

/// Toggles switched on and back off leave no trace
#[test]
fn test_toggles_round_trip() {
    let mut doc = designer_document();
    update_stone(&mut doc);
    let before = doc.class_attr(ids::CARD);

    for on in [true, false] {
        doc.set_checked(ids::TOGGLE_BLOOD_DRIP, on);
        doc.set_checked(ids::TOGGLE_MOSS, on);
        doc.set_checked(ids::TOGGLE_CRACKS, on);
        update_stone(&mut doc);
    }

    assert_eq!(doc.class_attr(ids::CARD), before);
    assert!(!doc.get(ids::BLOOD_DRIP).unwrap().classes.contains("active"));
}

// ============================================================================
// Export Tests
// ============================================================================

struct BrokenRasterizer;

impl Rasterizer for BrokenRasterizer {
    fn rasterize(&self, _card: &CardSnapshot, _scale: u32) -> Result<RgbaImage, ExportError> {
        Err(ExportError::Rasterize("canvas lost".to_string()))
    }
}

struct ReadOnlySink;

impl DownloadSink for ReadOnlySink {
    fn save(&self, _filename: &str, _bytes: &[u8]) -> Result<PathBuf, ExportError> {
        Err(ExportError::Save(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        )))
    }
}

/// A rendered oval card exports as a PNG twice its CSS size
#[test]
fn test_export_writes_png() {
    let dir = TempDir::new().unwrap();
    let mut doc = designer_document();
    doc.set_value(ids::SELECT_SHAPE, "oval");
    doc.set_checked(ids::TOGGLE_MOSS, true);
    update_stone(&mut doc);

    let job = ExportJob::prepare(&doc, 1_700_000_000_000).unwrap();
    assert_eq!(job.filename, "gravestone-edgar-allan-poe-1700000000000.png");

    let path = job
        .run(&SilhouetteRasterizer, &DirectorySink::new(dir.path().join("downloads")))
        .unwrap();
    assert!(path.exists());

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (250 * EXPORT_SCALE, 400 * EXPORT_SCALE));
    // Transparent outside the oval
    assert_eq!(img.get_pixel(0, 0)[3], 0);
}

/// The export reads the rendered card, not unrendered control values
#[test]
fn test_export_uses_rendered_state() {
    let mut doc = designer_document();
    update_stone(&mut doc);
    doc.set_value(ids::SELECT_SHAPE, "oval");

    let job = ExportJob::prepare(&doc, 0).unwrap();
    assert_eq!(job.card.height_px, None);
    assert_eq!(job.card.shape.key(), "arched");
}

/// Exporting a document without the card fails cleanly
#[test]
fn test_export_without_card() {
    let mut doc = designer_document();
    doc.remove(ids::CARD);
    assert!(matches!(
        ExportJob::prepare(&doc, 0),
        Err(ExportError::MissingCard(_))
    ));
}

/// Every failing collaborator leaves the button usable again
#[test]
fn test_failed_export_reenables_button() {
    let mut doc = designer_document();
    update_stone(&mut doc);
    let job = ExportJob::prepare(&doc, 0).unwrap();
    let dir = TempDir::new().unwrap();
    let sink = DirectorySink::new(dir.path());

    let attempts: [(&dyn Rasterizer, &dyn DownloadSink); 2] =
        [(&BrokenRasterizer, &sink), (&SilhouetteRasterizer, &ReadOnlySink)];

    for (rasterizer, sink) in attempts {
        let mut button = ExportButton::new();
        button.begin().unwrap();
        assert!(button.begin().is_err(), "re-entry must be rejected");

        assert!(job.run(rasterizer, sink).is_err());
        button.fail();
        assert_eq!(button.label(), FAILURE_LABEL);
        assert!(button.is_disabled());

        button.revert();
        assert_eq!(button.label(), IDLE_LABEL);
        assert!(!button.is_disabled());
    }
}

// ============================================================================
// Preference Tests
// ============================================================================

/// A corrupt database file is reported, not panicked on
#[test]
fn test_corrupt_preference_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.redb");
    std::fs::write(&path, b"definitely not a database").unwrap();
    assert!(PreferenceStore::open(&path).is_err());
}

/// The theme toggle persists through a reopen
#[test]
fn test_theme_toggle_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.redb");

    {
        let store = PreferenceStore::open(&path).unwrap();
        let theme = ThemePreference::load(&store);
        assert_eq!(theme, ThemePreference::Dark);
        theme.toggled().save(&store).unwrap();
    }

    let store = PreferenceStore::open(&path).unwrap();
    assert_eq!(ThemePreference::load(&store), ThemePreference::Light);
}
