//! Exporting the rendered card as a PNG download.
//!
//! The export captures the *rendered* card (classes, inline style and text
//! of the card subtree), hands it to a [`Rasterizer`] at 2x scale, encodes
//! PNG and saves it through a [`DownloadSink`]. [`ExportButton`] is the
//! busy/success/failure label state of the export control.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::{ImageFormat, RgbaImage};
use serde::Serialize;

use crate::designer::ids;
use crate::dom::{Document, Node};
use crate::error::ExportError;
use crate::stone::{EngravingColor, Shape, StoneColor};
use crate::tokens::{Choice, TokenFamily};

/// Capture scale relative to the on-screen card.
pub const EXPORT_SCALE: u32 = 2;

/// Pause before capture so the busy label gets painted.
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Height of non-oval cards when no inline height is set.
pub const DEFAULT_CARD_HEIGHT: u32 = 320;

/// Filename-safe form of free text.
///
/// Every UTF-16 code unit that is not an ASCII letter or digit becomes a
/// hyphen, one for one, and the result is lower-cased.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else {
            for _ in 0..c.len_utf16() {
                out.push('-');
            }
        }
    }
    out
}

/// `gravestone-<slug(name)>-<timestamp_ms>.png`
pub fn export_filename(name: &str, timestamp_ms: i64) -> String {
    format!("gravestone-{}-{}.png", slug(name), timestamp_ms)
}

/// Everything a rasterizer needs to know about the rendered card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSnapshot {
    pub shape: Choice<Shape>,
    pub color: Choice<StoneColor>,
    pub engraving: Choice<EngravingColor>,
    pub width_px: u32,
    pub height_px: Option<u32>,
    pub mossy: bool,
    pub cracked: bool,
    pub dripping: bool,
    pub icon: String,
    pub name: String,
    pub dates: String,
    pub epitaph: String,
}

impl CardSnapshot {
    /// Read the card subtree of a rendered designer document.
    pub fn capture(doc: &Document) -> Result<Self, ExportError> {
        let card = doc
            .get(ids::CARD)
            .ok_or_else(|| ExportError::MissingCard(ids::CARD.to_string()))?;
        let engraved = doc.get(ids::NAME).unwrap_or(card);

        Ok(Self {
            shape: family_choice(card),
            color: family_choice(card),
            engraving: family_choice(engraved),
            width_px: card.style_of("width").and_then(parse_px).unwrap_or(250),
            height_px: card.style_of("height").and_then(parse_px),
            mossy: card.classes.contains("mossy-effect"),
            cracked: card.classes.contains("cracked"),
            dripping: doc
                .get(ids::BLOOD_DRIP)
                .is_some_and(|n| n.classes.contains("active")),
            icon: doc.text_of(ids::ICON).to_string(),
            name: doc.text_of(ids::NAME).to_string(),
            dates: doc.text_of(ids::DATES).to_string(),
            epitaph: doc.text_of(ids::EPITAPH).to_string(),
        })
    }

    /// Height used for rasterizing, before scaling.
    pub fn effective_height(&self) -> u32 {
        self.height_px.unwrap_or(DEFAULT_CARD_HEIGHT)
    }
}

/// The applied token of family `T` on `node`, ignoring creation-time classes.
fn family_choice<T: TokenFamily>(node: &Node) -> Choice<T> {
    node.classes
        .iter()
        .filter(|t| !node.is_base_class(t))
        .find_map(|t| t.strip_prefix(T::PREFIX))
        .map(Choice::parse)
        .unwrap_or_else(|| Choice::Unrecognized(String::new()))
}

fn parse_px(value: &str) -> Option<u32> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}

/// Renders a card snapshot to a bitmap.
pub trait Rasterizer {
    /// Render at `scale` times the card's CSS size, transparent outside the silhouette.
    fn rasterize(&self, card: &CardSnapshot, scale: u32) -> Result<RgbaImage, ExportError>;
}

/// Receives the encoded image, e.g. by writing it to the downloads folder.
pub trait DownloadSink {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, ExportError>;
}

/// Saves downloads into a directory, creating it if needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        std::fs::write(&path, bytes)?;
        Ok(path)
    }
}

/// Encode a bitmap as PNG.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// A prepared export: what to draw and where to save it.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub card: CardSnapshot,
    pub filename: String,
}

impl ExportJob {
    /// Snapshot the rendered card and name the file after the name control.
    pub fn prepare(doc: &Document, timestamp_ms: i64) -> Result<Self, ExportError> {
        Ok(Self {
            card: CardSnapshot::capture(doc)?,
            filename: export_filename(doc.value_of(ids::INPUT_NAME), timestamp_ms),
        })
    }

    /// Rasterize, encode and save. Blocking; run off the UI thread.
    pub fn run(
        &self,
        rasterizer: &dyn Rasterizer,
        sink: &dyn DownloadSink,
    ) -> Result<PathBuf, ExportError> {
        let bitmap = rasterizer.rasterize(&self.card, EXPORT_SCALE)?;
        let png = encode_png(&bitmap)?;
        let path = sink.save(&self.filename, &png)?;
        tracing::info!(path = %path.display(), bytes = png.len(), "exported gravestone");
        Ok(path)
    }
}

pub const IDLE_LABEL: &str = "💾 Download Image";
pub const BUSY_LABEL: &str = "Generating Image...";
pub const SUCCESS_LABEL: &str = "✅ Downloaded Successfully!";
pub const FAILURE_LABEL: &str = "❌ Export Failed - Try Again";

/// How long the success label stays before reverting.
pub const SUCCESS_REVERT: Duration = Duration::from_millis(2500);
/// How long the failure label stays before reverting.
pub const FAILURE_REVERT: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportPhase {
    Idle,
    Busy,
    Succeeded,
    Failed,
}

/// Label and enabled state of the export control.
///
/// The control stays disabled from [`begin`](Self::begin) until
/// [`revert`](Self::revert), which the caller schedules with the delay
/// returned by `succeed`/`fail`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportButton {
    phase: ExportPhase,
}

impl Default for ExportButton {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportButton {
    pub fn new() -> Self {
        Self {
            phase: ExportPhase::Idle,
        }
    }

    pub fn phase(&self) -> ExportPhase {
        self.phase
    }

    pub fn label(&self) -> &'static str {
        match self.phase {
            ExportPhase::Idle => IDLE_LABEL,
            ExportPhase::Busy => BUSY_LABEL,
            ExportPhase::Succeeded => SUCCESS_LABEL,
            ExportPhase::Failed => FAILURE_LABEL,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.phase != ExportPhase::Idle
    }

    /// Enter the busy state; rejected while a previous export has not reverted.
    pub fn begin(&mut self) -> Result<(), ExportError> {
        if self.is_disabled() {
            return Err(ExportError::InFlight);
        }
        self.phase = ExportPhase::Busy;
        Ok(())
    }

    /// Show the success label. Returns the delay before [`revert`](Self::revert).
    pub fn succeed(&mut self) -> Duration {
        self.phase = ExportPhase::Succeeded;
        SUCCESS_REVERT
    }

    /// Show the failure label. Returns the delay before [`revert`](Self::revert).
    pub fn fail(&mut self) -> Duration {
        self.phase = ExportPhase::Failed;
        FAILURE_REVERT
    }

    /// Restore the idle label and re-enable the control.
    pub fn revert(&mut self) {
        self.phase = ExportPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::designer::designer_document;
    use crate::renderer::update_stone;

    #[test]
    fn test_slug_replaces_one_for_one() {
        assert_eq!(slug("Jane O'Brien!!"), "jane-o-brien--");
        assert_eq!(slug("Edgar Allan Poe"), "edgar-allan-poe");
        assert_eq!(slug(""), "");
    }

    #[test]
    fn test_slug_counts_utf16_units() {
        // é is one unit, the skull emoji is a surrogate pair
        assert_eq!(slug("é"), "-");
        assert_eq!(slug("a💀b"), "a--b");
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(
            export_filename("Jane Doe", 1_700_000_000_000),
            "gravestone-jane-doe-1700000000000.png"
        );
    }

    #[test]
    fn test_capture_reads_rendered_card() {
        let mut doc = designer_document();
        doc.set_value(ids::SELECT_SHAPE, "oval");
        doc.set_value(ids::SELECT_COLOR, "rose-red");
        doc.set_checked(ids::TOGGLE_MOSS, true);
        update_stone(&mut doc);

        let card = CardSnapshot::capture(&doc).unwrap();
        assert_eq!(card.shape, Choice::Known(Shape::Oval));
        assert_eq!(card.color, Choice::Known(StoneColor::RoseRed));
        assert_eq!(card.engraving, Choice::Known(EngravingColor::Gold));
        assert_eq!(card.width_px, 250);
        assert_eq!(card.height_px, Some(400));
        assert!(card.mossy);
        assert!(!card.cracked);
        assert_eq!(card.name, "EDGAR ALLAN POE");
    }

    #[test]
    fn test_capture_without_card_fails() {
        let doc = Document::new();
        assert!(matches!(
            CardSnapshot::capture(&doc),
            Err(ExportError::MissingCard(_))
        ));
    }

    #[test]
    fn test_button_rejects_reentry() {
        let mut button = ExportButton::new();
        assert_eq!(button.label(), IDLE_LABEL);

        button.begin().unwrap();
        assert!(button.is_disabled());
        assert_eq!(button.label(), BUSY_LABEL);
        assert!(matches!(button.begin(), Err(ExportError::InFlight)));
    }

    #[test]
    fn test_button_failure_reverts_to_enabled() {
        let mut button = ExportButton::new();
        button.begin().unwrap();

        let delay = button.fail();
        assert_eq!(delay, Duration::from_millis(3000));
        assert_eq!(button.label(), FAILURE_LABEL);

        button.revert();
        assert!(!button.is_disabled());
        assert_eq!(button.label(), IDLE_LABEL);
        assert!(button.begin().is_ok());
    }

    #[test]
    fn test_button_success_delay() {
        let mut button = ExportButton::new();
        button.begin().unwrap();
        assert_eq!(button.succeed(), Duration::from_millis(2500));
        assert_eq!(button.label(), SUCCESS_LABEL);
    }

    #[test]
    fn test_directory_sink_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let sink = DirectorySink::new(dir.path().join("downloads"));
        let path = sink.save("stone.png", b"png").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"png");
    }
}
