//! Shared context for the Eldritch Eclipse pages.
//!
//! Provides the app configuration, the preference store and the theme to
//! all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut theme = use_theme();
//! let prefs = use_preferences();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use memorial_core::decor::Capabilities;
use memorial_core::{MemoryPreferences, PreferenceBackend, PreferenceStore, ThemePreference};

/// Startup configuration from the command line.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub downloads_dir: PathBuf,
    pub base_url: String,
    pub reduced_motion: bool,
    pub start_on_designer: bool,
}

impl AppConfig {
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join("preferences.redb")
    }

    /// Public link to the designer page, used in share messages.
    pub fn designer_url(&self) -> String {
        format!("{}/designer", self.base_url.trim_end_matches('/'))
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            reduced_motion: self.reduced_motion,
            scroll_observation: true,
        }
    }
}

/// Preference backend shared across components.
pub type SharedPreferences = Arc<dyn PreferenceBackend>;

/// Get the app configuration set from command line args.
pub fn get_app_config() -> AppConfig {
    crate::get_app_config()
}

/// Open the preference store, falling back to memory if it cannot be opened.
pub fn open_preferences(config: &AppConfig) -> SharedPreferences {
    match PreferenceStore::open(config.preferences_path()) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::warn!(
                "Preference store unavailable, theme will not persist: {}",
                e
            );
            Arc::new(MemoryPreferences::default())
        }
    }
}

/// Whether the app should open on the designer. Cleared after the first redirect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StartOnDesigner(pub bool);

/// Hook to access the preference backend from context.
pub fn use_preferences() -> SharedPreferences {
    use_context::<SharedPreferences>()
}

/// Hook to access the landing page theme.
pub fn use_theme() -> Signal<ThemePreference> {
    use_context::<Signal<ThemePreference>>()
}

/// Hook to access the app configuration.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

pub fn use_start_on_designer() -> Signal<StartOnDesigner> {
    use_context::<Signal<StartOnDesigner>>()
}
