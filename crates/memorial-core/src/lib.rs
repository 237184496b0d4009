//! Eldritch Eclipse Memorial Core Library
//!
//! Page state for the Eldritch Eclipse event site: the gravestone designer
//! and its preview renderer, image export, sharing, and the landing page
//! registration form.
//!
//! ## Overview
//!
//! The designer page is a persistent element tree ([`Document`]). Controls
//! write their values into it, and [`renderer::update_stone`] restyles the
//! preview card, the controls panel and the scene in place. Styling is done
//! purely with class tokens: every option family (shape, stone color, font,
//! engraving color) keeps exactly one token on the elements it touches.
//!
//! ## Quick Start
//!
//! ```ignore
//! use memorial_core::designer::{designer_document, ids};
//! use memorial_core::renderer::update_stone;
//!
//! let mut doc = designer_document();
//! doc.set_value(ids::SELECT_SHAPE, "oval");
//! update_stone(&mut doc);
//!
//! assert!(doc.class_attr(ids::CARD).contains("shape-oval"));
//! ```

pub mod decor;
pub mod designer;
pub mod dom;
pub mod error;
pub mod export;
pub mod logging;
pub mod palette;
pub mod preference;
pub mod raster;
pub mod referral;
pub mod registration;
pub mod renderer;
pub mod share;
pub mod stone;
pub mod tokens;

// Re-exports
pub use designer::{designer_document, StoneConfig, StoneText};
pub use dom::{ClassList, Document, Node, Role};
pub use error::{ExportError, MemorialError, MemorialResult, ShareError};
pub use export::{
    export_filename, slug, CardSnapshot, DirectorySink, DownloadSink, ExportButton, ExportJob,
    ExportPhase, Rasterizer,
};
pub use preference::{MemoryPreferences, PreferenceBackend, PreferenceStore, ThemePreference};
pub use raster::SilhouetteRasterizer;
pub use referral::Referral;
pub use registration::RegistrationForm;
pub use renderer::update_stone;
pub use share::{share_design, ShareChannel, ShareMessage, ShareOutcome};
pub use stone::{EngravingColor, Font, Icon, SceneTheme, Shape, StoneColor};
pub use tokens::{Choice, Keyed, TokenFamily};
