//! UI Components for the Eldritch Eclipse pages.
//!
//! Gothic night aesthetic components shared by the landing page and the
//! designer.

mod designer_controls;
mod export_control;
mod nav_header;
mod particle_field;
mod registration_form;
mod reveal_section;
mod share_panel;
mod stone_preview;
mod welcome_banner;

pub use designer_controls::{options, SelectControl, TextControl, ToggleControl};
pub use export_control::ExportControl;
pub use nav_header::NavHeader;
pub use particle_field::ParticleField;
pub use registration_form::RegistrationPanel;
pub use reveal_section::RevealSection;
pub use share_panel::ShareControl;
pub use stone_preview::StonePreview;
pub use welcome_banner::WelcomeBanner;
